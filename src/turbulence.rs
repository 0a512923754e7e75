//! Turbulence delegates layered on top of the deterministic mean wind.
//!
//! A [`TurbulenceModel`] receives the interpolated mean wind for every query
//! and returns the final velocity vector. The mean wind is an argument, not
//! delegate state, so one delegate can serve any number of layers.

use nalgebra::Vector3;
use tracing::trace;

use crate::constants::{
    DEFAULT_TURBULENCE_SEED, PINK_NOISE_ALPHA, PINK_NOISE_POLES, PINK_NOISE_STDDEV,
    SEED_SCRAMBLE, TURBULENCE_TIME_STEP_S,
};
use crate::error::WindError;
use crate::interpolation::MeanWind;
use crate::pink_noise::PinkNoise;

pub trait TurbulenceModel {
    /// Use a fixed gust standard deviation (speed units)
    fn set_standard_deviation(&mut self, standard_deviation: f64);

    /// Use a gust standard deviation proportional to the mean speed
    fn set_turbulence_intensity(&mut self, intensity: f64);

    /// Wind velocity at `time` and `altitude` around the given mean wind
    ///
    /// # Errors
    ///
    /// Returns [`WindError::InvalidTime`] if `time` is negative or not finite.
    fn wind_velocity(
        &mut self,
        time: f64,
        altitude: f64,
        mean: MeanWind,
    ) -> Result<Vector3<f64>, WindError>;
}

/// How strong the gusts are; the most recent setter wins
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gustiness {
    StandardDeviation(f64),
    /// Ratio of gust standard deviation to mean speed
    Intensity(f64),
}

impl Gustiness {
    pub fn standard_deviation(&self, mean_speed: f64) -> f64 {
        match *self {
            Gustiness::StandardDeviation(sigma) => sigma,
            Gustiness::Intensity(intensity) => intensity * mean_speed,
        }
    }
}

impl Default for Gustiness {
    fn default() -> Self {
        Gustiness::StandardDeviation(0.0)
    }
}

fn check_time(time: f64) -> Result<(), WindError> {
    if time.is_finite() && time >= 0.0 {
        Ok(())
    } else {
        Err(WindError::InvalidTime(time))
    }
}

/// Mean wind with no turbulence
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SteadyWind;

impl TurbulenceModel for SteadyWind {
    fn set_standard_deviation(&mut self, _standard_deviation: f64) {}

    fn set_turbulence_intensity(&mut self, _intensity: f64) {}

    fn wind_velocity(
        &mut self,
        time: f64,
        _altitude: f64,
        mean: MeanWind,
    ) -> Result<Vector3<f64>, WindError> {
        check_time(time)?;
        Ok(mean.to_vector())
    }
}

/// Gusting wind driven by a seeded pink noise sequence.
///
/// Noise samples are laid out on a fixed grid of `TURBULENCE_TIME_STEP_S`
/// and linearly interpolated in between. The sequence depends only on the
/// seed, so the gust at a given time is the same however it is reached.
/// Forward queries are cheap; going back in time replays from the seed.
#[derive(Debug, Clone)]
pub struct PinkNoiseTurbulence {
    seed: u64,
    gustiness: Gustiness,
    window: Option<NoiseWindow>,
}

/// Two neighbouring noise samples and the generator that produced them
#[derive(Debug, Clone)]
struct NoiseWindow {
    generator: PinkNoise,
    /// Grid index of `v0`; `v1` sits at `step + 1`
    step: u64,
    v0: f64,
    v1: f64,
}

impl NoiseWindow {
    fn start(seed: u64) -> Self {
        let mut generator = PinkNoise::new(PINK_NOISE_ALPHA, PINK_NOISE_POLES, seed ^ SEED_SCRAMBLE);
        let v0 = generator.next_value();
        let v1 = generator.next_value();
        NoiseWindow {
            generator,
            step: 0,
            v0,
            v1,
        }
    }

    fn t0(&self) -> f64 {
        self.step as f64 * TURBULENCE_TIME_STEP_S
    }

    fn t1(&self) -> f64 {
        (self.step + 1) as f64 * TURBULENCE_TIME_STEP_S
    }

    fn advance_to(&mut self, time: f64) {
        while self.t1() < time {
            self.step += 1;
            self.v0 = self.v1;
            self.v1 = self.generator.next_value();
        }
    }

    /// Raw noise value at `time`, which must lie inside the window
    fn sample(&self, time: f64) -> f64 {
        let f = (time - self.t0()) / TURBULENCE_TIME_STEP_S;
        self.v0 * (1.0 - f) + self.v1 * f
    }
}

impl PinkNoiseTurbulence {
    pub fn new(seed: u64) -> Self {
        PinkNoiseTurbulence {
            seed,
            gustiness: Gustiness::default(),
            window: None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn gustiness(&self) -> Gustiness {
        self.gustiness
    }

    /// Normalised noise (unit standard deviation) at `time`
    fn noise_at(&mut self, time: f64) -> f64 {
        let seed = self.seed;
        if self.window.as_ref().is_some_and(|w| time < w.t0()) {
            trace!(time, seed, "turbulence time went backwards, replaying noise");
            self.window = None;
        }

        let window = self.window.get_or_insert_with(|| NoiseWindow::start(seed));
        window.advance_to(time);
        window.sample(time) / PINK_NOISE_STDDEV
    }
}

impl Default for PinkNoiseTurbulence {
    fn default() -> Self {
        Self::new(DEFAULT_TURBULENCE_SEED)
    }
}

impl TurbulenceModel for PinkNoiseTurbulence {
    fn set_standard_deviation(&mut self, standard_deviation: f64) {
        self.gustiness = Gustiness::StandardDeviation(standard_deviation);
    }

    fn set_turbulence_intensity(&mut self, intensity: f64) {
        self.gustiness = Gustiness::Intensity(intensity);
    }

    fn wind_velocity(
        &mut self,
        time: f64,
        _altitude: f64,
        mean: MeanWind,
    ) -> Result<Vector3<f64>, WindError> {
        check_time(time)?;
        let sigma = self.gustiness.standard_deviation(mean.speed);
        let speed = mean.speed + self.noise_at(time) * sigma;
        Ok(mean.vector_with_speed(speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean() -> MeanWind {
        MeanWind::new(8.0, 0.4)
    }

    #[test]
    fn test_steady_wind_returns_mean() {
        let mut steady = SteadyWind;
        steady.set_standard_deviation(5.0);
        let v = steady.wind_velocity(3.0, 100.0, mean()).unwrap();
        assert_eq!(v, mean().to_vector());
    }

    #[test]
    fn test_rejects_bad_time() {
        let mut model = PinkNoiseTurbulence::default();
        for t in [-0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                model.wind_velocity(t, 0.0, mean()),
                Err(WindError::InvalidTime(_))
            ));
        }
        assert!(SteadyWind.wind_velocity(-1.0, 0.0, mean()).is_err());
    }

    #[test]
    fn test_zero_deviation_is_steady() {
        let mut model = PinkNoiseTurbulence::default();
        for t in [0.0, 0.37, 5.0, 12.25] {
            let v = model.wind_velocity(t, 0.0, mean()).unwrap();
            assert!((v - mean().to_vector()).norm() < 1e-12);
        }
    }

    #[test]
    fn test_gusts_vary_over_time() {
        let mut model = PinkNoiseTurbulence::new(3);
        model.set_standard_deviation(2.0);
        let speeds: Vec<f64> = (0..200)
            .map(|i| model.wind_velocity(i as f64 * 0.1, 0.0, mean()).unwrap().norm())
            .collect();
        let min = speeds.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = speeds.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(max - min > 0.1);
    }

    #[test]
    fn test_repeat_query_is_idempotent() {
        let mut model = PinkNoiseTurbulence::new(5);
        model.set_standard_deviation(1.5);
        let a = model.wind_velocity(2.33, 10.0, mean()).unwrap();
        let b = model.wind_velocity(2.33, 10.0, mean()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rewind_replays_sequence() {
        let mut model = PinkNoiseTurbulence::new(11);
        model.set_standard_deviation(1.0);
        let late = model.wind_velocity(4.01, 0.0, mean()).unwrap();
        let early = model.wind_velocity(0.52, 0.0, mean()).unwrap();
        assert_eq!(model.wind_velocity(4.01, 0.0, mean()).unwrap(), late);

        let mut fresh = PinkNoiseTurbulence::new(11);
        fresh.set_standard_deviation(1.0);
        assert_eq!(fresh.wind_velocity(0.52, 0.0, mean()).unwrap(), early);
    }

    #[test]
    fn test_grid_points_hit_samples() {
        let mut model = PinkNoiseTurbulence::new(9);
        model.set_standard_deviation(1.0);

        let mut window = NoiseWindow::start(9);
        window.advance_to(1.0);
        let expected = mean().speed + window.sample(1.0) / PINK_NOISE_STDDEV;

        let v = model.wind_velocity(1.0, 0.0, mean()).unwrap();
        assert!((v.norm() - expected.abs()).abs() < 1e-9);
    }

    #[test]
    fn test_intensity_scales_with_mean_speed() {
        let slow = MeanWind::new(2.0, 0.0);
        let fast = MeanWind::new(20.0, 0.0);

        let mut a = PinkNoiseTurbulence::new(4);
        a.set_turbulence_intensity(0.2);
        let mut b = PinkNoiseTurbulence::new(4);
        b.set_turbulence_intensity(0.2);

        let t = 1.234;
        let gust_slow = a.wind_velocity(t, 0.0, slow).unwrap().y - slow.speed;
        let gust_fast = b.wind_velocity(t, 0.0, fast).unwrap().y - fast.speed;
        assert!((gust_fast - 10.0 * gust_slow).abs() < 1e-9);
    }

    #[test]
    fn test_last_setter_wins() {
        let mut model = PinkNoiseTurbulence::default();
        model.set_turbulence_intensity(0.3);
        model.set_standard_deviation(1.0);
        assert_eq!(model.gustiness(), Gustiness::StandardDeviation(1.0));
        model.set_turbulence_intensity(0.1);
        assert_eq!(model.gustiness(), Gustiness::Intensity(0.1));
        assert!((model.gustiness().standard_deviation(30.0) - 3.0).abs() < 1e-12);
    }
}
