//! Weibull flaw distribution for brittle-failure SPH input files, after the
//! Benz & Asphaug model (Comp. Phys. Comm. 87, 1995): n*ln(n) crack
//! activation thresholds are scattered over the particles, drawn from the
//! cumulative Weibull distribution with material constants k and m.

use impact_core::constants::{DEFAULT_MAX_FLAWS, WEIBULL_BASALT_K, WEIBULL_BASALT_M};
use impact_core::types::ParticleRecord;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Parameters of one flaw-distribution run
#[derive(Debug, Clone)]
pub struct WeibullParams {
    /// Weibull constant k, 1/m^3
    pub k: f64,
    /// Weibull modulus m
    pub m: f64,
    /// Cap on flaws per particle
    pub max_flaws: usize,
    /// Only flaw particles with this material id; None flaws everything
    pub material: Option<u32>,
    /// RNG seed; equal seeds give identical flaw assignments
    pub seed: u64,
    /// Target volume override; computed from the particles when None
    pub volume: Option<f64>,
}

impl WeibullParams {
    pub fn new(k: f64, m: f64) -> Self {
        Self {
            k,
            m,
            max_flaws: DEFAULT_MAX_FLAWS,
            material: None,
            seed: 1,
            volume: None,
        }
    }

    /// Predefined constants for basalt
    pub fn basalt() -> Self {
        Self::new(WEIBULL_BASALT_K, WEIBULL_BASALT_M)
    }
}

/// Outcome of a flaw-distribution run
#[derive(Debug, Clone)]
pub struct FlawStats {
    /// Particles eligible for flaws (after material filtering)
    pub eligible: usize,
    /// Flaws scattered in the main n*ln(n) pass
    pub base_flaws: usize,
    /// Total flaws assigned, including the at-least-one backfill
    pub total_flaws: usize,
    /// Target volume used for the threshold scale
    pub volume: f64,
}

impl FlawStats {
    pub fn mean_flaws(&self) -> f64 {
        if self.eligible == 0 {
            0.0
        } else {
            self.total_flaws as f64 / self.eligible as f64
        }
    }
}

/// Summed solid volume of the eligible particles: m / rho, corrected by the
/// distention for porous records.
pub fn solid_volume(particles: &[ParticleRecord], material: Option<u32>) -> f64 {
    particles
        .iter()
        .filter(|p| material.is_none_or(|m| p.material == m))
        .map(|p| p.solid_volume())
        .sum()
}

fn threshold(index: usize, k: f64, m: f64, volume: f64) -> f64 {
    (index as f64 / (k * volume)).powf(1.0 / m)
}

/// Scatter Weibull flaws over the particles.
///
/// Each of the ~n*ln(n) thresholds goes to a uniformly random eligible
/// particle, re-drawing when the pick is already at the flaw cap. Afterwards
/// every eligible particle still flawless receives one flaw with the
/// threshold sequence continued, so no particle enters the solver unflawed.
/// Thresholds are monotone in their index, so later flaws activate at larger
/// strains.
pub fn distribute_flaws(
    particles: &mut [ParticleRecord],
    params: &WeibullParams,
) -> Result<FlawStats, String> {
    if params.k <= 0.0 || params.m <= 0.0 {
        return Err(format!(
            "Weibull constants must be positive (k = {}, m = {})",
            params.k, params.m
        ));
    }

    let eligible: Vec<usize> = (0..particles.len())
        .filter(|&i| params.material.is_none_or(|m| particles[i].material == m))
        .collect();
    if eligible.is_empty() {
        return Err(match params.material {
            Some(m) => format!("no particles with material id {m} to flaw"),
            None => "no particles to flaw".into(),
        });
    }

    let volume = match params.volume {
        Some(v) => v,
        None => solid_volume(particles, params.material),
    };
    if volume <= 0.0 {
        return Err(format!("target volume {volume} is not positive"));
    }

    let n_w = eligible.len();
    let base_flaws = (n_w as f64 * (n_w as f64).ln()) as usize;
    let capacity = n_w.saturating_mul(params.max_flaws);

    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let mut assigned = 0usize;
    let mut full = 0usize;

    for i in 1..=base_flaws {
        if assigned >= capacity || full == n_w {
            break;
        }
        let value = threshold(i, params.k, params.m, volume);
        loop {
            let p = &mut particles[eligible[rng.gen_range(0..n_w)]];
            if p.flaw_thresholds.len() < params.max_flaws {
                p.flaw_thresholds.push(value);
                if p.flaw_thresholds.len() == params.max_flaws {
                    full += 1;
                }
                assigned += 1;
                break;
            }
        }
    }

    // Every particle must carry at least one flaw.
    let mut next_index = base_flaws + 1;
    for &i in &eligible {
        let p = &mut particles[i];
        if p.flaw_thresholds.is_empty() {
            p.flaw_thresholds
                .push(threshold(next_index, params.k, params.m, volume));
            next_index += 1;
            assigned += 1;
        }
    }

    Ok(FlawStats {
        eligible: n_w,
        base_flaws,
        total_flaws: assigned,
        volume,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_core::types::{BodyState, Material};

    fn test_particles(n: usize, material: Material) -> Vec<ParticleRecord> {
        let state = BodyState::at_rest(material, 1430.0, 0.05, 2.0);
        (0..n)
            .map(|i| state.particle_at(i as f64 * 0.1, 0.0, 0.0))
            .collect()
    }

    #[test]
    fn test_every_particle_gets_a_flaw() {
        let mut particles = test_particles(50, Material::TargetInterior);
        let stats = distribute_flaws(&mut particles, &WeibullParams::basalt()).unwrap();
        assert_eq!(stats.eligible, 50);
        for p in &particles {
            assert!(!p.flaw_thresholds.is_empty(), "particle left unflawed");
        }
        assert!(stats.total_flaws >= stats.base_flaws);
        assert!(stats.mean_flaws() >= 1.0);
    }

    #[test]
    fn test_flaw_count_near_n_log_n() {
        let mut particles = test_particles(200, Material::TargetInterior);
        let stats = distribute_flaws(&mut particles, &WeibullParams::basalt()).unwrap();
        let expected = (200.0f64 * 200.0f64.ln()) as usize;
        assert_eq!(stats.base_flaws, expected);
        let total: usize = particles.iter().map(|p| p.flaw_thresholds.len()).sum();
        assert_eq!(total, stats.total_flaws);
    }

    #[test]
    fn test_thresholds_monotone_in_index() {
        // The threshold sequence itself grows with its index.
        let v = 1e-3;
        let mut last = 0.0;
        for i in 1..100 {
            let t = threshold(i, WEIBULL_BASALT_K, WEIBULL_BASALT_M, v);
            assert!(t > last, "threshold {i} not monotone");
            last = t;
        }
    }

    #[test]
    fn test_material_filter_leaves_others_untouched() {
        let mut particles = test_particles(30, Material::TargetInterior);
        particles.extend(test_particles(20, Material::Projectile));
        let params = WeibullParams {
            material: Some(Material::TargetInterior.id()),
            ..WeibullParams::basalt()
        };
        let stats = distribute_flaws(&mut particles, &params).unwrap();
        assert_eq!(stats.eligible, 30);
        for p in particles.iter().filter(|p| p.material == 2) {
            assert!(p.flaw_thresholds.is_empty(), "projectile particle flawed");
        }
        for p in particles.iter().filter(|p| p.material == 0) {
            assert!(!p.flaw_thresholds.is_empty());
        }
    }

    #[test]
    fn test_deterministic_under_seed() {
        let mut a = test_particles(40, Material::TargetInterior);
        let mut b = test_particles(40, Material::TargetInterior);
        let params = WeibullParams {
            seed: 7,
            ..WeibullParams::basalt()
        };
        distribute_flaws(&mut a, &params).unwrap();
        distribute_flaws(&mut b, &params).unwrap();
        assert_eq!(a, b, "same seed must give the same flaw assignment");
    }

    #[test]
    fn test_max_flaws_cap_respected() {
        let mut particles = test_particles(20, Material::TargetInterior);
        let params = WeibullParams {
            max_flaws: 2,
            ..WeibullParams::basalt()
        };
        distribute_flaws(&mut particles, &params).unwrap();
        for p in &particles {
            assert!(p.flaw_thresholds.len() <= 2);
            assert!(!p.flaw_thresholds.is_empty());
        }
    }

    #[test]
    fn test_rejects_bad_constants() {
        let mut particles = test_particles(5, Material::TargetInterior);
        assert!(distribute_flaws(&mut particles, &WeibullParams::new(0.0, 8.5)).is_err());
        assert!(distribute_flaws(&mut particles, &WeibullParams::new(5e34, -1.0)).is_err());
        let none: &mut [ParticleRecord] = &mut [];
        assert!(distribute_flaws(none, &WeibullParams::basalt()).is_err());
    }
}
