pub mod config;
pub mod constants;
pub mod region;
pub mod types;

pub use config::SetupConfig;
pub use constants::*;
pub use region::*;
pub use types::*;
