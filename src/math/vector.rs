//! Integer vectors living under a modulus `Q`.
//!
//! Two reduction rules coexist on purpose:
//! - [`ModularVector::normalize`] maps negatives with `(Q - 1) + x` under
//!   [`Reduction::Reference`], which only lands in `[0, Q)` for
//!   `x ∈ [-(Q-1), -1]` and is off by one from the true residue.
//! - [`ModularVector::sum_mod`] always uses the truncating `%` of `i64`.
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// How negative elements are brought back into range by `normalize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    /// `x mod Q` for `x >= 0`, `(Q - 1) + x` otherwise.
    #[default]
    Reference,
    /// Euclidean remainder, always in `[0, Q)`.
    Euclidean,
}

impl Reduction {
    #[inline]
    pub fn reduce(self, x: i64, modulus: i64) -> i64 {
        match self {
            Reduction::Reference if x >= 0 => x % modulus,
            Reduction::Reference => (modulus - 1) + x,
            Reduction::Euclidean => x.rem_euclid(modulus),
        }
    }
}

/// Dense integer vector tagged with its modulus.
///
/// Length is fixed at construction. Elements are only guaranteed to be in
/// `[0, Q)` right after a normalization that did not see values below
/// `-(Q - 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModularVector {
    coeffs: Vec<i64>,
    modulus: i64,
}

impl ModularVector {
    pub fn new(coeffs: Vec<i64>, modulus: i64) -> Self {
        Self { coeffs, modulus }
    }

    pub fn zero(len: usize, modulus: i64) -> Self {
        Self::new(vec![0; len], modulus)
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    pub fn coeffs(&self) -> &[i64] {
        &self.coeffs
    }

    /// Reduces every element in place with the given rule.
    pub fn normalize(&mut self, rule: Reduction) {
        let modulus = self.modulus;
        for coeff in &mut self.coeffs {
            *coeff = rule.reduce(*coeff, modulus);
        }
    }

    /// Consuming form of [`normalize`](Self::normalize).
    pub fn normalized(mut self, rule: Reduction) -> Self {
        self.normalize(rule);
        self
    }

    /// Multiplies every element by `k`. No reduction happens here.
    pub fn scale(&mut self, k: i64) {
        for coeff in &mut self.coeffs {
            *coeff *= k;
        }
    }

    pub fn scaled(mut self, k: i64) -> Self {
        self.scale(k);
        self
    }

    /// Elementwise `self += rhs`. No reduction happens here.
    pub fn add_assign(&mut self, rhs: &Self) -> Result<(), VectorError> {
        if self.len() != rhs.len() {
            return Err(VectorError::DimensionMismatch {
                expected: self.len(),
                actual: rhs.len(),
            });
        }
        for (lhs, &r) in self.coeffs.iter_mut().zip(&rhs.coeffs) {
            *lhs += r;
        }
        Ok(())
    }

    pub fn added(mut self, rhs: &Self) -> Result<Self, VectorError> {
        self.add_assign(rhs)?;
        Ok(self)
    }

    /// Sum of all elements followed by a truncating `%`, so a negative sum
    /// gives a negative result.
    pub fn sum_mod(&self) -> i64 {
        self.coeffs.iter().sum::<i64>() % self.modulus
    }

    /// True when every element lies in `[0, Q)`.
    pub fn is_reduced(&self) -> bool {
        self.coeffs.iter().all(|&c| (0..self.modulus).contains(&c))
    }
}
