//! Secret key: a single integer scalar `s` drawn from the secret range.
use crate::crypto::{LweError, LweParams, LweResult};
use std::fmt;

/// Decryption material.
///
/// The scalar is only reachable through [`SecretKey::scalar`]; `Debug` does
/// not print it.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    s: i64,
    params: LweParams,
}

impl SecretKey {
    /// Fails unless `params` validate and `s` lies in their secret range.
    pub fn new(s: i64, params: LweParams) -> LweResult<Self> {
        params.validate()?;
        let (secret_min, secret_max) = params.secret_range;
        if !(secret_min..=secret_max).contains(&s) {
            return Err(LweError::invalid(format!(
                "secret {s} outside [{secret_min}, {secret_max}]"
            )));
        }
        Ok(Self { s, params })
    }

    pub fn scalar(&self) -> i64 {
        self.s
    }

    pub fn params(&self) -> &LweParams {
        &self.params
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("s", &"<redacted>")
            .field("params", &self.params)
            .finish()
    }
}
