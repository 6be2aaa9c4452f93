//! Builds the impact scene from a setup configuration: the target hemisphere
//! (interior + boundary shell) at rest around the origin and the aluminium
//! projectile placed up the +x axis, flying in at the impact angle.

use impact_core::config::SetupConfig;
use impact_core::region::{Bounds, Region, Shape};
use impact_core::types::{BodyState, Material};
use impact_physics::derive;
use impact_physics::rotate::Rotation;

use crate::emit::count_sites;

/// One emittable body: the region to walk and the state its particles carry
#[derive(Debug, Clone)]
pub struct Body {
    pub region: Region,
    pub state: BodyState,
}

/// The fully derived scene, ready for emission.
/// Emission order is a solver contract: target interior, then boundary
/// shell, then projectile.
#[derive(Debug, Clone)]
pub struct ImpactScene {
    /// Lattice spacing shared by every region
    pub delta: f64,
    /// Impact-angle rotation applied to projectile sites
    pub rotation: Rotation,
    pub target_interior: Body,
    pub target_boundary: Body,
    pub projectile: Body,
    /// Calibration count for the projectile region
    pub projectile_sites: u64,
}

impl ImpactScene {
    /// Derive every scene parameter from the configuration.
    ///
    /// The projectile's per-particle mass comes from a calibration pass over
    /// its region: total mass divided by the number of lattice sites the
    /// later emission pass will accept. Both passes share one traversal, so
    /// the calibration cannot drift from the emission.
    pub fn build(config: &SetupConfig) -> Result<Self, String> {
        let delta = derive::lattice_spacing(config.target_radius, config.target_particles);
        if !(delta > 0.0) {
            return Err(format!(
                "lattice spacing {delta} is not positive (radius {}, particles {})",
                config.target_radius, config.target_particles
            ));
        }

        let r_outer = config.target_radius;
        let r_inner = r_outer - delta * config.boundary_layers;
        let target_bounds = Bounds {
            x_start: -r_outer,
            x_stop: 0.0,
            y_start: -r_outer,
            y_stop: r_outer,
            z_start: -r_outer,
            z_stop: r_outer,
        };

        let alpha_target = derive::distention(config.porosity);
        let rho_target =
            derive::porous_density(Material::TargetInterior.bulk_density(), alpha_target);
        let mass_target = derive::particle_mass(rho_target, delta);

        let target_interior = Body {
            region: Region {
                shape: Shape::Hemisphere,
                inner_radius: r_inner,
                outer_radius: r_outer,
                bounds: target_bounds,
            },
            state: BodyState::at_rest(Material::TargetInterior, rho_target, mass_target, alpha_target),
        };
        let target_boundary = Body {
            region: Region {
                shape: Shape::HemisphericalShell,
                inner_radius: r_inner,
                outer_radius: r_outer,
                bounds: target_bounds,
            },
            state: BodyState::at_rest(Material::TargetBoundary, rho_target, mass_target, alpha_target),
        };

        // The projectile box sits one separation gap up the +x axis; with a
        // zero edge it collapses to a single lattice point.
        let separation = derive::body_separation(config.impact_velocity);
        let edge = config.projectile_edge;
        let projectile_region = Region {
            shape: Shape::Cube,
            inner_radius: r_inner,
            outer_radius: r_outer,
            bounds: Bounds {
                x_start: separation,
                x_stop: separation + edge,
                y_start: -0.5 * edge,
                y_stop: 0.5 * edge,
                z_start: -0.5 * edge,
                z_stop: 0.5 * edge,
            },
        };

        let projectile_sites = count_sites(delta, &projectile_region);
        if projectile_sites == 0 {
            return Err("projectile region holds no lattice sites; cannot calibrate its particle mass".into());
        }
        let mass_projectile = config.projectile_mass / projectile_sites as f64;

        let rho_projectile = Material::Projectile.bulk_density();
        let mut projectile_state =
            BodyState::at_rest(Material::Projectile, rho_projectile, mass_projectile, 1.0);
        projectile_state.velocity =
            derive::impact_velocity(config.impact_velocity, config.impact_angle_deg);

        Ok(Self {
            delta,
            rotation: Rotation::from_degrees(config.impact_angle_deg),
            target_interior,
            target_boundary,
            projectile: Body {
                region: projectile_region,
                state: projectile_state,
            },
            projectile_sites,
        })
    }
}
