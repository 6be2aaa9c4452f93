//! Scalar parameter derivation for the impact scene: lattice spacing from a
//! target particle count, porous densities, per-particle masses, and the
//! projectile kinematics. Pure arithmetic, no I/O.

use std::f64::consts::PI;

use impact_core::constants::{ROOT_TWO, SEPARATION_PER_SPEED};

/// Lattice spacing delta for a hemisphere of the given radius to hold
/// approximately `count` particles.
///
/// Inverts the volume-per-particle relation of the HCP packing: the sphere
/// volume is scaled by sqrt(0.5) before dividing by the count, which absorbs
/// the packing efficiency of the lattice.
pub fn lattice_spacing(radius: f64, count: f64) -> f64 {
    (0.5f64.sqrt() * 4.0 / 3.0 * PI * radius.powi(3) / count).powf(1.0 / 3.0)
}

/// Distention alpha = 1 / (1 - porosity)
pub fn distention(porosity: f64) -> f64 {
    1.0 / (1.0 - porosity)
}

/// Effective density of a porous material with the given bulk density
pub fn porous_density(bulk_density: f64, distention: f64) -> f64 {
    bulk_density / distention
}

/// Mass of one lattice particle: rho * delta^3 / sqrt(2)
pub fn particle_mass(density: f64, delta: f64) -> f64 {
    density * delta.powi(3) / ROOT_TWO
}

/// Velocity components of the projectile in the target frame.
/// The projectile flies toward the target along -x; an oblique angle tilts
/// the path toward -y.
pub fn impact_velocity(speed: f64, angle_deg: f64) -> [f64; 3] {
    let phi = angle_deg.to_radians();
    [-phi.cos() * speed, -phi.sin() * speed, 0.0]
}

/// Initial gap between target surface and projectile, proportional to the
/// impact speed
pub fn body_separation(speed: f64) -> f64 {
    SEPARATION_PER_SPEED * speed
}
