use crate::crypto::LweParams;
use crate::math::ModularVector;

/// Encryption material: the pair `(a, b)` with `b = s·a + e` reduced mod `Q`.
///
/// Immutable once built; share it by reference across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    a: ModularVector,
    b: ModularVector,
    params: LweParams,
}

impl PublicKey {
    pub(crate) fn new(a: ModularVector, b: ModularVector, params: LweParams) -> Self {
        Self { a, b, params }
    }

    /// Uniformly random and reduced into `[0, Q)`. The reference variant
    /// draws from `[0, Q]` and maps `Q` to `0`.
    pub fn a(&self) -> &ModularVector {
        &self.a
    }

    pub fn b(&self) -> &ModularVector {
        &self.b
    }

    pub fn params(&self) -> &LweParams {
        &self.params
    }

    pub fn dimension(&self) -> usize {
        self.a.len()
    }
}
