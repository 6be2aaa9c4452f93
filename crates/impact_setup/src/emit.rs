//! The shared region traversal: the calibration (count-only) pass and the
//! emission pass run the exact same lattice walk and shape filter, so their
//! particle counts can never drift apart.

use impact_core::region::{Region, Shape};
use impact_core::types::BodyState;
use impact_physics::lattice::{HcpLattice, Site};
use impact_physics::rotate::Rotation;
use impact_storage::write_record;
use std::io::Write;

/// Lattice sites of the region's box that pass its shape filter
pub fn accepted_sites(delta: f64, region: Region) -> impl Iterator<Item = Site> {
    HcpLattice::new(delta, region.bounds).filter(move |s| region.contains(s.x, s.y, s.z))
}

/// Calibration pass: count the particles a region would emit, without I/O.
/// Used to convert the projectile's total mass into a per-particle mass
/// before the real emission pass over the same region.
pub fn count_sites(delta: f64, region: &Region) -> u64 {
    accepted_sites(delta, *region).count() as u64
}

/// Emission pass: stream the region's accepted sites as particle records.
/// Cube regions (the projectile) are rotated about the x axis so their
/// extent lines up with the oblique impact path. Returns the number of
/// records written; any write failure aborts the pass.
pub fn write_particles<W: Write>(
    w: &mut W,
    delta: f64,
    region: &Region,
    state: &BodyState,
    rotation: Rotation,
) -> Result<u64, String> {
    let rotate = region.shape == Shape::Cube;
    let mut written = 0u64;
    for site in accepted_sites(delta, *region) {
        let (y, z) = if rotate {
            rotation.apply(site.y, site.z)
        } else {
            (site.y, site.z)
        };
        write_record(w, &state.particle_at(site.x, y, z))?;
        written += 1;
    }
    Ok(written)
}
