use serde::{Deserialize, Serialize};

use crate::constants::{IMPACT_SPEED, PROJECTILE_MASS};

/// Setup configuration for one impact scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupConfig {
    /// Approximate number of target simulation particles
    pub target_particles: f64,
    /// Outer radius of the target hemisphere
    pub target_radius: f64,
    /// Target porosity fraction in [0, 1)
    pub porosity: f64,
    /// Projectile path to target surface normal, degrees
    pub impact_angle_deg: f64,
    /// Absolute impact speed
    pub impact_velocity: f64,
    /// Total projectile mass, distributed over its lattice sites
    pub projectile_mass: f64,
    /// Projectile cube edge length; zero collapses the cube to a point
    pub projectile_edge: f64,
    /// Thickness of the boundary shell in lattice spacings
    pub boundary_layers: f64,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            target_particles: 1e5,
            target_radius: 12.0,
            porosity: 0.5,
            impact_angle_deg: 0.0,
            impact_velocity: IMPACT_SPEED,
            projectile_mass: PROJECTILE_MASS,
            projectile_edge: 0.0,
            boundary_layers: 0.0,
        }
    }
}
