use super::builder::LweParamsBuilder;
use super::errors::LweResult;
use super::operations;
use super::params::LweParams;
use super::types::Ciphertext;
use crate::keys::KeyGenerator;
use crate::math::RandomSampler;
use crate::{PublicKey, SecretKey};
use rand::Rng;

/// Bundles validated parameters with the scheme operations.
///
/// ```
/// use toy_lwe::{LweEngine, RandomSampler};
///
/// let engine = LweEngine::builder().noise_range(0, 2).build_engine().unwrap();
/// let mut sampler = RandomSampler::from_seed(1);
/// let (pk, sk) = engine.generate_keys(&mut sampler).unwrap();
///
/// let ct = engine.encrypt(&pk, true);
/// assert!(engine.decrypt(&sk, &ct));
/// ```
#[derive(Debug, Clone)]
pub struct LweEngine {
    params: LweParams,
}

impl Default for LweEngine {
    fn default() -> Self {
        Self::new(LweParams::default())
    }
}

impl LweEngine {
    pub fn builder() -> LweParamsBuilder {
        LweParamsBuilder::new()
    }

    /// Takes parameters that already passed [`LweParams::validate`].
    pub fn new(params: LweParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LweParams {
        &self.params
    }

    pub fn key_generator(&self) -> LweResult<KeyGenerator> {
        KeyGenerator::new(self.params)
    }

    pub fn generate_keys<R: Rng>(
        &self,
        sampler: &mut RandomSampler<R>,
    ) -> LweResult<(PublicKey, SecretKey)> {
        self.key_generator()?.generate(sampler)
    }

    pub fn encrypt(&self, public_key: &PublicKey, bit: bool) -> Ciphertext {
        operations::encrypt(public_key, bit)
    }

    pub fn decrypt(&self, secret_key: &SecretKey, ciphertext: &Ciphertext) -> bool {
        operations::decrypt(secret_key, ciphertext)
    }

    pub fn decrypt_checked(
        &self,
        secret_key: &SecretKey,
        ciphertext: &Ciphertext,
    ) -> LweResult<bool> {
        operations::decrypt_checked(secret_key, ciphertext)
    }

    pub fn encrypt_text(&self, public_key: &PublicKey, text: &str) -> Vec<Ciphertext> {
        operations::encrypt_text(public_key, text)
    }

    pub fn decrypt_text(
        &self,
        secret_key: &SecretKey,
        ciphertexts: &[Ciphertext],
    ) -> LweResult<String> {
        operations::decrypt_text(secret_key, ciphertexts)
    }
}
