/// Constants used by the wind and turbulence models

/// Spectral exponent of the gust noise (1/f^alpha)
///
/// Value: 5/3, the Kolmogorov exponent for the inertial subrange of
/// atmospheric turbulence.
pub const PINK_NOISE_ALPHA: f64 = 5.0 / 3.0;

/// Number of autoregressive poles in the pink noise filter
pub const PINK_NOISE_POLES: usize = 2;

/// Number of warm-up samples discarded per pole when a generator is created
pub const PINK_NOISE_WARMUP_PER_POLE: usize = 5;

/// Standard deviation of the raw pink noise sequence
///
/// Measured empirically for alpha = 5/3 with two poles. Raw samples are
/// divided by this to get unit variance before scaling by the gust deviation.
pub const PINK_NOISE_STDDEV: f64 = 2.252;

/// Spacing of the turbulence sample grid (s)
pub const TURBULENCE_TIME_STEP_S: f64 = 0.05;

/// Seed used by `LayeredWindModel::new` and the default config
pub const DEFAULT_TURBULENCE_SEED: u64 = 10;

/// Mixed into user seeds so that small seeds (0, 1, 2...) don't produce
/// correlated generator states
pub const SEED_SCRAMBLE: u64 = 0x7343_AA03;

/// Conversion factor: degrees to radians
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Conversion factor: radians to degrees
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;
