//! Seeded 1/f^alpha ("pink") noise generator.
//!
//! White Gaussian samples are passed through an autoregressive filter whose
//! coefficients come from the fractional-differencing expansion of
//! (1 - z^-1)^(alpha/2), truncated to a fixed number of poles.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::constants::PINK_NOISE_WARMUP_PER_POLE;

#[derive(Debug, Clone)]
pub struct PinkNoise {
    multipliers: Vec<f64>,
    history: Vec<f64>,
    rng: StdRng,
}

impl PinkNoise {
    pub fn new(alpha: f64, poles: usize, seed: u64) -> Self {
        let mut multipliers = Vec::with_capacity(poles);
        let mut a = 1.0;
        for i in 0..poles {
            let i = i as f64;
            a = (i - alpha / 2.0) * a / (i + 1.0);
            multipliers.push(a);
        }

        let mut noise = PinkNoise {
            multipliers,
            history: vec![0.0; poles],
            rng: StdRng::seed_from_u64(seed),
        };

        for _ in 0..PINK_NOISE_WARMUP_PER_POLE * poles {
            noise.next_value();
        }
        noise
    }

    pub fn poles(&self) -> usize {
        self.multipliers.len()
    }

    pub fn next_value(&mut self) -> f64 {
        let mut x: f64 = self.rng.sample(StandardNormal);
        for (m, h) in self.multipliers.iter().zip(&self.history) {
            x -= m * h;
        }

        if !self.history.is_empty() {
            self.history.rotate_right(1);
            self.history[0] = x;
        }
        x
    }
}
