use serde::{Deserialize, Serialize};

/// Geometric shape of a particle region.
/// A Cube has no inclusion test of its own — it is bounded entirely by the
/// walking box the lattice sweeps over. The hemispherical shapes carve the
/// target out of a box that spans the negative-x half space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Cube,
    Hemisphere,
    HemisphericalShell,
}

/// Axis-aligned walking box for the lattice sweep.
/// Stops are inclusive: a degenerate axis with start == stop still holds one
/// lattice coordinate, while start > stop holds none.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bounds {
    pub x_start: f64,
    pub x_stop: f64,
    pub y_start: f64,
    pub y_stop: f64,
    pub z_start: f64,
    pub z_stop: f64,
}

/// One body region: shape, its two radii, and the box it is walked over.
/// Regions are evaluated independently; target and projectile use disjoint
/// boxes, so overlapping shapes never double-emit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Region {
    pub shape: Shape,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub bounds: Bounds,
}

impl Region {
    /// Inclusion predicate: does the point (x, y, z) belong to this region?
    /// Distances are measured from the origin. The boundary at exactly
    /// inner_radius belongs to the hemisphere, not the shell.
    pub fn contains(&self, x: f64, y: f64, z: f64) -> bool {
        let dist = (x * x + y * y + z * z).sqrt();
        match self.shape {
            Shape::Cube => true,
            Shape::Hemisphere => dist <= self.inner_radius,
            Shape::HemisphericalShell => dist > self.inner_radius && dist <= self.outer_radius,
        }
    }
}
