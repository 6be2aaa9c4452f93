// Physical constants and lattice geometry factors (SI units).
// The lattice factors are the three HCP step ratios: rows are spaced by the
// tetrahedron height delta*sqrt(2/3) along x, by delta along y, and layers by
// delta*sqrt(3)/4 (half the height of an equilateral triangle) along z.

/// sqrt(2/3) — height of a unit-edge tetrahedron
pub const ROOT_TWO_THIRDS: f64 = 0.816_496_580_927_726;

/// sqrt(3)
pub const ROOT_THREE: f64 = 1.732_050_807_568_877_2;

/// sqrt(2) — HCP packing factor in the per-particle mass formula
pub const ROOT_TWO: f64 = 1.414_213_562_373_095_1;

/// Bulk (pore-free) density of the basalt target material, kg/m^3
pub const BASALT_BULK_DENSITY: f64 = 2860.0;

/// Bulk density of the aluminium projectile, kg/m^3
pub const ALUMINIUM_BULK_DENSITY: f64 = 2700.0;

/// Absolute value of the impact velocity, m/s
pub const IMPACT_SPEED: f64 = 6000.0;

/// Target-projectile separation per unit of impact speed
pub const SEPARATION_PER_SPEED: f64 = 0.0015;

/// Total projectile mass, kg (spread over the projectile's lattice sites)
pub const PROJECTILE_MASS: f64 = 500.0;

/// Weibull modulus m for basalt (Benz & Asphaug 1995)
pub const WEIBULL_BASALT_M: f64 = 8.5;

/// Weibull constant k for basalt, 1/m^3
pub const WEIBULL_BASALT_K: f64 = 5.0e34;

/// Default cap on flaws assigned to a single particle
pub const DEFAULT_MAX_FLAWS: usize = 1_000_000;
