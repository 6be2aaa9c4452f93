pub mod derive;
pub mod flaws;
pub mod lattice;
pub mod rotate;

pub use lattice::{HcpLattice, Site};
pub use rotate::Rotation;
