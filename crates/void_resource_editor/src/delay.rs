//! Simulated load latency

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::EditorResourceConfig;

/// Draws one fixed delay per asset load, uniformly within `[min, max]`
#[derive(Debug)]
pub struct DelaySampler {
    min_secs: f32,
    max_secs: f32,
    rng: StdRng,
}

impl DelaySampler {
    /// Create a sampler; bounds are assumed validated
    pub fn new(min_secs: f32, max_secs: f32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { min_secs, max_secs, rng }
    }

    pub fn from_config(config: &EditorResourceConfig) -> Self {
        Self::new(config.min_load_delay_secs, config.max_load_delay_secs, config.seed)
    }

    /// Bounds in seconds
    pub fn bounds(&self) -> (f32, f32) {
        (self.min_secs, self.max_secs)
    }

    pub fn sample(&mut self) -> Duration {
        let secs = if self.max_secs > self.min_secs {
            self.rng.gen_range(self.min_secs..=self.max_secs)
        } else {
            self.min_secs
        };
        Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
    }
}
