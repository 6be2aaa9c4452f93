//! Text codec for the solver's particle input format: one line per particle,
//! 23 space-separated fields in fixed order — x y z vx vy vz mass density
//! energy material flaws damage Sxx Sxy Sxz Syx Syy Syz Szx Szy Szz
//! distention pressure — followed by one activation threshold per flaw.
//! No header, no record count; the consumer infers the particle count from
//! the line count.

use impact_core::types::ParticleRecord;
use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

/// Format one particle as a solver input line (without trailing newline).
/// The density field carries extra significant digits: porosity-derived
/// density contrasts must survive the round-trip through text.
pub fn format_record(p: &ParticleRecord) -> String {
    let mut line = format!(
        "{:.6e} {:.6e} {:.6e} {:.6e} {:.6e} {:.6e} {:.6e} {:.10e} {:.6e} {} {} {:.6e}",
        p.x,
        p.y,
        p.z,
        p.vx,
        p.vy,
        p.vz,
        p.mass,
        p.density,
        p.energy,
        p.material,
        p.flaw_thresholds.len(),
        p.damage,
    );
    for s in &p.stress {
        let _ = write!(line, " {s:.6e}");
    }
    let _ = write!(line, " {:.6e} {:.6e}", p.distention, p.pressure);
    for t in &p.flaw_thresholds {
        let _ = write!(line, " {t:.6e}");
    }
    line
}

/// Append one particle line to the output stream
pub fn write_record<W: Write>(w: &mut W, p: &ParticleRecord) -> Result<(), String> {
    writeln!(w, "{}", format_record(p)).map_err(|e| format!("Write error: {e}"))
}

fn field<T: FromStr>(fields: &mut SplitWhitespace, name: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    let raw = fields
        .next()
        .ok_or_else(|| format!("truncated record: missing field '{name}'"))?;
    raw.parse()
        .map_err(|e| format!("bad value '{raw}' for field '{name}': {e}"))
}

/// Parse one particle line, including its flaw-threshold tail
pub fn parse_record(line: &str) -> Result<ParticleRecord, String> {
    let mut fields = line.split_whitespace();
    let x = field(&mut fields, "x")?;
    let y = field(&mut fields, "y")?;
    let z = field(&mut fields, "z")?;
    let vx = field(&mut fields, "vx")?;
    let vy = field(&mut fields, "vy")?;
    let vz = field(&mut fields, "vz")?;
    let mass = field(&mut fields, "mass")?;
    let density = field(&mut fields, "density")?;
    let energy = field(&mut fields, "energy")?;
    let material = field(&mut fields, "material")?;
    let flaws: usize = field(&mut fields, "flaws")?;
    let damage = field(&mut fields, "damage")?;
    let mut stress = [0.0; 9];
    for (i, s) in stress.iter_mut().enumerate() {
        *s = field(&mut fields, &format!("S{i}"))?;
    }
    let distention = field(&mut fields, "distention")?;
    let pressure = field(&mut fields, "pressure")?;
    let mut flaw_thresholds = Vec::with_capacity(flaws);
    for i in 0..flaws {
        flaw_thresholds.push(field(&mut fields, &format!("flaw threshold {i}"))?);
    }
    if let Some(extra) = fields.next() {
        return Err(format!("trailing field '{extra}' beyond the record"));
    }
    Ok(ParticleRecord {
        x,
        y,
        z,
        vx,
        vy,
        vz,
        mass,
        density,
        energy,
        material,
        damage,
        stress,
        distention,
        pressure,
        flaw_thresholds,
    })
}

/// Read a whole particle file
pub fn read_particles(path: &Path) -> Result<Vec<ParticleRecord>, String> {
    let text =
        fs::read_to_string(path).map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_record(line).map_err(|e| format!("line {}: {e}", i + 1)))
        .collect()
}

/// Write a whole particle file
pub fn write_particles(path: &Path, particles: &[ParticleRecord]) -> Result<(), String> {
    let mut out = String::new();
    for p in particles {
        out.push_str(&format_record(p));
        out.push('\n');
    }
    fs::write(path, out).map_err(|e| format!("Cannot write {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_core::types::{BodyState, Material};

    fn sample() -> ParticleRecord {
        let mut state = BodyState::at_rest(Material::TargetInterior, 1430.0, 0.0524, 2.0);
        state.velocity = [-6000.0, -1.5, 0.0];
        state.particle_at(-3.25, 0.5, 1.75)
    }

    #[test]
    fn test_line_has_23_fields_without_flaws() {
        let line = format_record(&sample());
        assert_eq!(line.split_whitespace().count(), 23);
        assert!(!line.ends_with('\n'));
    }

    #[test]
    fn test_flaw_thresholds_extend_the_line() {
        let mut p = sample();
        p.flaw_thresholds = vec![0.01, 0.02, 0.03];
        let line = format_record(&p);
        assert_eq!(line.split_whitespace().count(), 26);
        // The flaw-count field is column 11
        let flaws: usize = line.split_whitespace().nth(10).unwrap().parse().unwrap();
        assert_eq!(flaws, 3);
    }

    #[test]
    fn test_density_keeps_extra_digits() {
        // A porosity contrast in the 10th significant digit must survive;
        // the ordinary 6-digit float fields would flatten it.
        let mut p = sample();
        p.density = 1430.0001234;
        let line = format_record(&p);
        let density = line.split_whitespace().nth(7).unwrap();
        let parsed: f64 = density.parse().unwrap();
        assert!(
            (parsed - 1430.0001234).abs() < 1e-6,
            "density field lost precision: {density}"
        );
    }

    #[test]
    fn test_format_parse_round_trip() {
        let mut p = sample();
        p.stress[4] = 12.5;
        p.flaw_thresholds = vec![0.011, 0.025];
        let parsed = parse_record(&format_record(&p)).unwrap();
        assert_eq!(parsed.material, p.material);
        assert_eq!(parsed.flaw_thresholds.len(), 2);
        assert!((parsed.x - p.x).abs() < 1e-6);
        assert!((parsed.density - p.density).abs() < 1e-6);
        assert!((parsed.stress[4] - 12.5).abs() < 1e-5);
        assert!((parsed.distention - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_rejects_truncated_and_trailing() {
        let line = format_record(&sample());
        let cut = line.rsplit_once(' ').unwrap().0;
        assert!(parse_record(cut).is_err(), "truncated record accepted");
        let extra = format!("{line} 1.0");
        assert!(parse_record(&extra).is_err(), "trailing field accepted");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = std::env::temp_dir().join("impact_storage_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("particles.txt");
        let mut particles = vec![sample(), sample()];
        particles[1].flaw_thresholds = vec![0.5];
        write_particles(&path, &particles).unwrap();
        let back = read_particles(&path).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back[1].flaw_thresholds.len(), 1);
        std::fs::remove_file(&path).ok();
    }
}
