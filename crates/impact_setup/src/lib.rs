pub mod emit;
pub mod scene;

pub use emit::{count_sites, write_particles};
pub use scene::{Body, ImpactScene};
