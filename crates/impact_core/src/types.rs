use serde::{Deserialize, Serialize};

use crate::constants::{ALUMINIUM_BULK_DENSITY, BASALT_BULK_DENSITY};

/// Material ids as the solver reads them from column 10 of the particle file
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    /// Basalt, interior of the target
    TargetInterior = 0,
    /// Basalt, boundary shell of the target
    TargetBoundary = 1,
    /// Aluminium projectile
    Projectile = 2,
}

impl Material {
    pub fn id(&self) -> u32 {
        *self as u32
    }

    /// Pore-free density of this material
    pub fn bulk_density(&self) -> f64 {
        match self {
            Self::TargetInterior | Self::TargetBoundary => BASALT_BULK_DENSITY,
            Self::Projectile => ALUMINIUM_BULK_DENSITY,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::TargetInterior => "basalt",
            Self::TargetBoundary => "basalt boundary",
            Self::Projectile => "aluminium",
        }
    }
}

/// Physical state shared by every particle of one region-emission call.
/// Only the position varies between the particles of a region; everything
/// here is written verbatim into each record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyState {
    pub velocity: [f64; 3],
    /// Mass of a single particle
    pub particle_mass: f64,
    /// Effective (porous) density
    pub density: f64,
    pub energy: f64,
    pub material: Material,
    pub damage: f64,
    /// Deviatoric stress tensor, row-major Sxx..Szz
    pub stress: [f64; 9],
    /// Distention alpha = 1 / (1 - porosity)
    pub distention: f64,
    pub pressure: f64,
}

impl BodyState {
    /// A fully at-rest, undamaged state for the given material and density
    pub fn at_rest(material: Material, density: f64, particle_mass: f64, distention: f64) -> Self {
        Self {
            velocity: [0.0; 3],
            particle_mass,
            density,
            energy: 0.0,
            material,
            damage: 0.0,
            stress: [0.0; 9],
            distention,
            pressure: 0.0,
        }
    }

    /// The record for a lattice site at (x, y, z) carrying this state
    pub fn particle_at(&self, x: f64, y: f64, z: f64) -> ParticleRecord {
        ParticleRecord {
            x,
            y,
            z,
            vx: self.velocity[0],
            vy: self.velocity[1],
            vz: self.velocity[2],
            mass: self.particle_mass,
            density: self.density,
            energy: self.energy,
            material: self.material.id(),
            damage: self.damage,
            stress: self.stress,
            distention: self.distention,
            pressure: self.pressure,
            flaw_thresholds: Vec::new(),
        }
    }
}

/// One particle as serialized to the solver input file: 23 fixed fields,
/// followed by the crack activation thresholds once flaws are distributed.
/// The on-disk flaw-count field is `flaw_thresholds.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleRecord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
    pub mass: f64,
    pub density: f64,
    pub energy: f64,
    pub material: u32,
    pub damage: f64,
    pub stress: [f64; 9],
    pub distention: f64,
    pub pressure: f64,
    pub flaw_thresholds: Vec<f64>,
}

impl ParticleRecord {
    /// Solid volume of this particle (mass over pore-free density)
    pub fn solid_volume(&self) -> f64 {
        self.mass / self.density / self.distention
    }
}
