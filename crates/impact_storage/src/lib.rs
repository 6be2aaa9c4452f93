pub mod record;

pub use record::{format_record, parse_record, read_particles, write_particles, write_record};

use impact_core::SetupConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-region outcome of one generator run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSummary {
    pub particles: u64,
    pub mass: f64,
}

/// Complete provenance record of one generator run, stored next to the
/// particle file so a simulation folder stays reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupSummary {
    pub config: SetupConfig,
    pub delta: f64,
    pub target_interior: RegionSummary,
    pub target_boundary: RegionSummary,
    pub projectile: RegionSummary,
}

/// Save a run summary to disk as bincode
pub fn save_summary(summary: &SetupSummary, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create dir: {e}"))?;
    }
    let data = bincode::serialize(summary).map_err(|e| format!("Serialize error: {e}"))?;
    fs::write(path, data).map_err(|e| format!("Write error: {e}"))?;
    Ok(())
}

/// Load a run summary from disk
pub fn load_summary(path: &Path) -> Result<SetupSummary, String> {
    let data = fs::read(path).map_err(|e| format!("Read error: {e}"))?;
    let summary = bincode::deserialize(&data).map_err(|e| format!("Deserialize error: {e}"))?;
    Ok(summary)
}
