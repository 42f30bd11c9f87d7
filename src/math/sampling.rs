use super::vector::ModularVector;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, Uniform};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of uniform integers for keys and noise.
///
/// Construct it once and hand it to key generation by `&mut`; nothing in the
/// crate keeps global random state.
#[derive(Debug, Clone)]
pub struct RandomSampler<R: Rng = ChaCha20Rng> {
    rng: R,
}

impl RandomSampler<ChaCha20Rng> {
    /// Seeds from the wall clock, like the reference program does at the
    /// start of key generation.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::from_seed(nanos)
    }

    /// Deterministic sampler for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Samples an integer uniformly from the closed range `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn uniform_int(&mut self, min: i64, max: i64) -> i64 {
        uniform_distribution(min, max).sample(&mut self.rng)
    }

    /// Samples `n` independent draws from `[min, max]` tagged with `modulus`.
    ///
    /// The draws are not reduced.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn vector(&mut self, n: usize, min: i64, max: i64, modulus: i64) -> ModularVector {
        let distribution = uniform_distribution(min, max);
        let coeffs = (0..n).map(|_| distribution.sample(&mut self.rng)).collect();
        ModularVector::new(coeffs, modulus)
    }
}

fn uniform_distribution(min: i64, max: i64) -> Uniform<i64> {
    Uniform::new_inclusive(min, max).unwrap_or_else(|_| {
        panic!("uniform_int: invalid range [{min}, {max}], min must be <= max")
    })
}
