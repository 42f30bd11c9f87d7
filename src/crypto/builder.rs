use super::engine::LweEngine;
use super::errors::LweResult;
use super::params::{LweParams, Variant};

/// Collects optional overrides on top of [`LweParams::default`].
#[derive(Debug, Clone, Default)]
pub struct LweParamsBuilder {
    modulus: Option<i64>,
    dimension: Option<usize>,
    noise_range: Option<(i64, i64)>,
    secret_range: Option<(i64, i64)>,
    variant: Option<Variant>,
}

impl LweParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modulus(mut self, modulus: i64) -> Self {
        self.modulus = Some(modulus);
        self
    }

    pub fn dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }

    pub fn noise_range(mut self, min: i64, max: i64) -> Self {
        self.noise_range = Some((min, max));
        self
    }

    pub fn secret_range(mut self, min: i64, max: i64) -> Self {
        self.secret_range = Some((min, max));
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn build(self) -> LweResult<LweParams> {
        let defaults = LweParams::default();
        let params = LweParams {
            modulus: self.modulus.unwrap_or(defaults.modulus),
            dimension: self.dimension.unwrap_or(defaults.dimension),
            noise_range: self.noise_range.unwrap_or(defaults.noise_range),
            secret_range: self.secret_range.unwrap_or(defaults.secret_range),
            variant: self.variant.unwrap_or(defaults.variant),
        };
        params.validate()?;
        Ok(params)
    }

    pub fn build_engine(self) -> LweResult<LweEngine> {
        Ok(LweEngine::new(self.build()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::LweError;

    #[test]
    fn empty_builder_gives_defaults() {
        let params = LweParamsBuilder::new().build().unwrap();
        assert_eq!(params, LweParams::default());
    }

    #[test]
    fn overrides_are_applied() {
        let params = LweParams::builder()
            .modulus(257)
            .dimension(8)
            .noise_range(0, 2)
            .secret_range(1, 50)
            .variant(Variant::Corrected)
            .build()
            .unwrap();
        assert_eq!(params.modulus, 257);
        assert_eq!(params.dimension, 8);
        assert_eq!(params.noise_range, (0, 2));
        assert_eq!(params.secret_range, (1, 50));
        assert_eq!(params.variant, Variant::Corrected);
    }

    #[test]
    fn build_validates() {
        assert!(matches!(
            LweParamsBuilder::new().dimension(0).build(),
            Err(LweError::InvalidParameter { .. })
        ));
        assert!(matches!(
            LweParamsBuilder::new().dimension(0).build_engine(),
            Err(LweError::InvalidParameter { .. })
        ));
    }
}
