// src/sampler.rs
use rand::distr::{Alphabetic, SampleString};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the per-file random draws.
pub trait Sampler {
    /// Uniform sample in `[0, 1)`.
    fn sample(&mut self) -> f64;

    /// `len` ASCII letters, upper and lower case.
    fn suffix(&mut self, len: usize) -> String;
}

/// [`Sampler`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSampler<StdRng> {
    /// Seeded generator when `seed` is given, OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn sample(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn suffix(&mut self, len: usize) -> String {
        Alphabetic.sample_string(&mut self.rng, len)
    }
}
