use super::builder::LweParamsBuilder;
use super::errors::{LweError, LweResult};
use crate::math::Reduction;

pub const DEFAULT_MODULUS: i64 = 97;
pub const DEFAULT_DIMENSION: usize = 20;
pub const DEFAULT_NOISE_RANGE: (i64, i64) = (-4, 4);
pub const DEFAULT_SECRET_RANGE: (i64, i64) = (1, 10_000);

/// Selects between the bit-compatible scheme and the arithmetic fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// `normalize` maps negatives to `(Q - 1) + x`, `a` is drawn from the
    /// inclusive range `[0, Q]`, and decryption thresholds at `Q/2`.
    #[default]
    Reference,
    /// Euclidean `normalize`, `a` drawn from `[0, Q - 1]`, and decryption
    /// rounds to the nearest of `{0, Q/2}`.
    Corrected,
}

impl Variant {
    pub fn reduction(self) -> Reduction {
        match self {
            Variant::Reference => Reduction::Reference,
            Variant::Corrected => Reduction::Euclidean,
        }
    }
}

/// Scheme parameters shared by keys, encryption and decryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LweParams {
    pub modulus: i64,
    pub dimension: usize,
    /// Closed range of each noise element.
    pub noise_range: (i64, i64),
    /// Closed range of the secret scalar.
    pub secret_range: (i64, i64),
    pub variant: Variant,
}

impl Default for LweParams {
    fn default() -> Self {
        Self {
            modulus: DEFAULT_MODULUS,
            dimension: DEFAULT_DIMENSION,
            noise_range: DEFAULT_NOISE_RANGE,
            secret_range: DEFAULT_SECRET_RANGE,
            variant: Variant::Reference,
        }
    }
}

impl LweParams {
    pub fn builder() -> LweParamsBuilder {
        LweParamsBuilder::new()
    }

    pub fn validate(&self) -> LweResult<()> {
        if self.modulus < 2 {
            return Err(LweError::invalid(format!(
                "modulus must be at least 2, got {}",
                self.modulus
            )));
        }
        if self.dimension == 0 {
            return Err(LweError::invalid("dimension must be positive"));
        }
        let (noise_min, noise_max) = self.noise_range;
        if noise_min > noise_max {
            return Err(LweError::invalid(format!(
                "noise range [{noise_min}, {noise_max}] is empty"
            )));
        }
        let (secret_min, secret_max) = self.secret_range;
        if secret_min > secret_max {
            return Err(LweError::invalid(format!(
                "secret range [{secret_min}, {secret_max}] is empty"
            )));
        }

        // Worst case intermediate: s * a_i summed over the whole vector, and
        // s * u during decryption.
        let secret_bound = secret_min.unsigned_abs().max(secret_max.unsigned_abs());
        let noise_bound = noise_min.unsigned_abs().max(noise_max.unsigned_abs());
        let fits = i64::try_from(self.dimension)
            .ok()
            .and_then(|n| {
                (self.modulus as u64)
                    .checked_mul(secret_bound)?
                    .checked_add(noise_bound)?
                    .checked_mul(n as u64)
            })
            .is_some_and(|worst| worst <= i64::MAX as u64);
        if !fits {
            return Err(LweError::invalid(
                "parameters overflow 64-bit intermediate arithmetic",
            ));
        }
        Ok(())
    }

    /// `Q/2` with truncating division: the encoding of bit 1.
    pub fn half_modulus(&self) -> i64 {
        self.modulus / 2
    }

    /// Largest noise the centered decision tolerates, exclusive.
    pub fn noise_margin(&self) -> i64 {
        self.modulus / 4
    }

    /// Inclusive upper bound for elements of the public vector `a`.
    pub(crate) fn public_upper_bound(&self) -> i64 {
        match self.variant {
            Variant::Reference => self.modulus,
            Variant::Corrected => self.modulus - 1,
        }
    }

    /// Maps a residue in `[0, Q)` back to a bit.
    pub fn decide(&self, residue: i64) -> bool {
        match self.variant {
            Variant::Reference => residue >= self.half_modulus(),
            Variant::Corrected => self.decide_centered(residue),
        }
    }

    pub(crate) fn decide_centered(&self, residue: i64) -> bool {
        let (to_zero, to_half) = self.distances(residue);
        to_half < to_zero
    }

    /// Cyclic distances from `residue` to the codewords `0` and `Q/2`.
    pub(crate) fn distances(&self, residue: i64) -> (i64, i64) {
        let q = self.modulus;
        let to_zero = residue.min(q - residue);
        let to_half = (residue - self.half_modulus()).abs();
        (to_zero, to_half)
    }
}
