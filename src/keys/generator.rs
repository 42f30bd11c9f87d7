//! Key generation.
//!
//! `s ← [secret_min, secret_max]`, `a ← [0, Q]` (or `[0, Q-1]` once
//! corrected), `e ← [noise_min, noise_max]`, then
//! `b = normalize(normalize(s·a) + e)`.
use super::{PublicKey, SecretKey};
use crate::crypto::{LweError, LweParams, LweResult};
use crate::math::{ModularVector, RandomSampler, VectorError};
use rand::Rng;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct KeyGenerator {
    params: LweParams,
}

impl KeyGenerator {
    pub fn new(params: LweParams) -> LweResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &LweParams {
        &self.params
    }

    /// Samples a fresh key pair.
    #[instrument(
        level = "debug",
        skip_all,
        fields(dimension = self.params.dimension, modulus = self.params.modulus)
    )]
    pub fn generate<R: Rng>(
        &self,
        sampler: &mut RandomSampler<R>,
    ) -> LweResult<(PublicKey, SecretKey)> {
        let p = &self.params;
        let (secret_min, secret_max) = p.secret_range;
        let (noise_min, noise_max) = p.noise_range;

        let s = sampler.uniform_int(secret_min, secret_max);
        let a = sampler.vector(p.dimension, 0, p.public_upper_bound(), p.modulus);
        let e = sampler.vector(p.dimension, noise_min, noise_max, p.modulus);

        debug!(noise_sum = e.coeffs().iter().sum::<i64>(), "sampled key material");

        self.derive(a, s, &e)
    }

    /// Assembles a key pair from explicit `a`, `s` and `e`.
    ///
    /// `s` must lie in the secret range, `e` in the noise range and every
    /// `a_i` in `[0, Q]`. `a` is stored normalized, so an element equal to
    /// `Q` becomes `0`.
    pub fn derive(
        &self,
        a: ModularVector,
        s: i64,
        e: &ModularVector,
    ) -> LweResult<(PublicKey, SecretKey)> {
        let p = &self.params;
        for v in [&a, e] {
            if v.len() != p.dimension {
                return Err(VectorError::DimensionMismatch {
                    expected: p.dimension,
                    actual: v.len(),
                }
                .into());
            }
            if v.modulus() != p.modulus {
                return Err(LweError::invalid(format!(
                    "vector modulus {} does not match scheme modulus {}",
                    v.modulus(),
                    p.modulus
                )));
            }
        }
        let secret_key = SecretKey::new(s, self.params)?;
        if let Some(&x) = a.coeffs().iter().find(|&&x| !(0..=p.modulus).contains(&x)) {
            return Err(LweError::invalid(format!(
                "public element {x} outside [0, {}]",
                p.modulus
            )));
        }
        let (noise_min, noise_max) = p.noise_range;
        if let Some(&x) = e.coeffs().iter().find(|&&x| !(noise_min..=noise_max).contains(&x)) {
            return Err(LweError::invalid(format!(
                "noise element {x} outside [{noise_min}, {noise_max}]"
            )));
        }

        let a = a.normalized(p.variant.reduction());
        let b = self.public_component(&a, s, e)?;
        Ok((PublicKey::new(a, b, self.params), secret_key))
    }

    /// `b = normalize(normalize(s·a) + e)` under the variant's reduction.
    fn public_component(
        &self,
        a: &ModularVector,
        s: i64,
        e: &ModularVector,
    ) -> Result<ModularVector, VectorError> {
        let rule = self.params.variant.reduction();
        let b = a.clone().scaled(s).normalized(rule).added(e)?;
        Ok(b.normalized(rule))
    }
}

/// Generates a key pair with default parameters and the given dimension,
/// seeding randomness from the clock.
pub fn keygen(dimension: usize) -> LweResult<(PublicKey, SecretKey)> {
    let params = LweParams {
        dimension,
        ..Default::default()
    };
    let generator = KeyGenerator::new(params)?;
    generator.generate(&mut RandomSampler::from_time())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Variant;

    fn params_with_dimension(dimension: usize) -> LweParams {
        LweParams {
            dimension,
            ..Default::default()
        }
    }

    #[test]
    fn derive_reproduces_the_known_vector() {
        let generator = KeyGenerator::new(params_with_dimension(2)).unwrap();
        let a = ModularVector::new(vec![10, 20], 97);
        let e = ModularVector::zero(2, 97);
        let (pk, sk) = generator.derive(a, 3, &e).unwrap();
        assert_eq!(pk.b().coeffs(), &[30, 60]);
        assert_eq!(sk.scalar(), 3);
    }

    #[test]
    fn derive_applies_the_reference_negative_rule() {
        let generator = KeyGenerator::new(params_with_dimension(2)).unwrap();
        // 3·[0, 32] = [0, 96]; adding [-1, 0] leaves -1, which maps to 95.
        let a = ModularVector::new(vec![0, 32], 97);
        let e = ModularVector::new(vec![-1, 0], 97);
        let (pk, _) = generator.derive(a, 3, &e).unwrap();
        assert_eq!(pk.b().coeffs(), &[95, 96]);
    }

    #[test]
    fn derive_uses_euclidean_rule_when_corrected() {
        let params = LweParams {
            dimension: 2,
            variant: Variant::Corrected,
            ..Default::default()
        };
        let generator = KeyGenerator::new(params).unwrap();
        let a = ModularVector::new(vec![0, 32], 97);
        let e = ModularVector::new(vec![-1, 0], 97);
        let (pk, _) = generator.derive(a, 3, &e).unwrap();
        assert_eq!(pk.b().coeffs(), &[96, 96]);
    }

    #[test]
    fn derive_rejects_wrong_dimension() {
        let generator = KeyGenerator::new(params_with_dimension(3)).unwrap();
        let a = ModularVector::zero(2, 97);
        let e = ModularVector::zero(3, 97);
        let err = generator.derive(a, 3, &e).unwrap_err();
        assert!(matches!(err, LweError::Vector { .. }));
    }

    #[test]
    fn derive_rejects_foreign_modulus() {
        let generator = KeyGenerator::new(params_with_dimension(2)).unwrap();
        let a = ModularVector::zero(2, 101);
        let e = ModularVector::zero(2, 97);
        let err = generator.derive(a, 3, &e).unwrap_err();
        assert!(matches!(err, LweError::InvalidParameter { .. }));
    }

    #[test]
    fn generated_keys_respect_ranges() {
        let generator = KeyGenerator::new(LweParams::default()).unwrap();
        let mut sampler = RandomSampler::from_seed(2024);
        for _ in 0..50 {
            let (pk, sk) = generator.generate(&mut sampler).unwrap();
            assert_eq!(pk.dimension(), 20);
            assert_eq!(pk.b().len(), 20);
            assert!((1..=10_000).contains(&sk.scalar()));
            assert!(pk.a().is_reduced());
            assert!(pk.b().is_reduced());
        }
    }

    #[test]
    fn public_vector_is_stored_reduced() {
        let generator = KeyGenerator::new(LweParams::default()).unwrap();
        let mut sampler = RandomSampler::from_seed(77);
        let hits: usize = (0..200)
            .map(|_| {
                let (pk, _) = generator.generate(&mut sampler).unwrap();
                pk.a().coeffs().iter().filter(|&&x| x == 97).count()
            })
            .sum();
        assert_eq!(hits, 0);
    }

    #[test]
    fn derive_reduces_q_valued_elements() {
        let generator = KeyGenerator::new(params_with_dimension(2)).unwrap();
        let a = ModularVector::new(vec![97, 20], 97);
        let e = ModularVector::zero(2, 97);
        let (pk, sk) = generator.derive(a, 3, &e).unwrap();
        assert_eq!(pk.a().coeffs(), &[0, 20]);
        assert_eq!(pk.b().coeffs(), &[0, 60]);
        // Σa mod Q is unchanged by the reduction.
        let ct = crate::crypto::encrypt(&pk, true);
        assert_eq!(ct.u, 20);
        assert!(crate::crypto::decrypt(&sk, &ct));
    }

    #[test]
    fn derive_rejects_out_of_range_inputs() {
        let generator = KeyGenerator::new(params_with_dimension(1)).unwrap();
        let zero = ModularVector::zero(1, 97);
        let cases = [
            (ModularVector::new(vec![97], 97), i64::MAX, zero.clone()),
            (ModularVector::new(vec![98], 97), 3, zero.clone()),
            (ModularVector::new(vec![-1], 97), 3, zero.clone()),
            (ModularVector::new(vec![5], 97), 3, ModularVector::new(vec![5], 97)),
        ];
        for (a, s, e) in cases {
            assert!(matches!(
                generator.derive(a, s, &e),
                Err(LweError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn same_seed_same_keys() {
        let generator = KeyGenerator::new(LweParams::default()).unwrap();
        let (pk1, sk1) = generator.generate(&mut RandomSampler::from_seed(8)).unwrap();
        let (pk2, sk2) = generator.generate(&mut RandomSampler::from_seed(8)).unwrap();
        assert_eq!(pk1, pk2);
        assert_eq!(sk1, sk2);
    }

    #[test]
    fn keygen_rejects_zero_dimension() {
        assert!(keygen(0).is_err());
        let (pk, _) = keygen(5).unwrap();
        assert_eq!(pk.dimension(), 5);
    }
}
