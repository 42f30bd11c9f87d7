//! Single-bit encryption and decryption.
//!
//! Encryption is deterministic: it only sums the public vectors, so the same
//! key and bit always give the same ciphertext.
//!
//! Decryption computes `v - s·u ≡ Σe + (Q/2)·bit (mod Q)` and maps the
//! residue back to a bit. Nothing bounds `Σe`; when it leaves the decision
//! region the wrong bit comes back silently. [`decrypt_checked`] is the
//! opt-in way to notice.
use super::errors::{LweError, LweResult};
use super::types::Ciphertext;
use crate::encoding::{BitSequence, decode_bits, encode_bits};
use crate::{PublicKey, SecretKey};
use tracing::{trace, warn};

pub fn encrypt(public_key: &PublicKey, bit: bool) -> Ciphertext {
    let params = public_key.params();
    let q = params.modulus;

    let u = public_key.a().sum_mod();
    let v = (public_key.b().sum_mod() + params.half_modulus() * i64::from(bit)) % q;

    trace!(bit, u, v, "encrypted bit");
    Ciphertext { u, v }
}

pub fn decrypt(secret_key: &SecretKey, ciphertext: &Ciphertext) -> bool {
    let residue = residue(secret_key, ciphertext);
    secret_key.params().decide(residue)
}

/// Decrypts, failing with [`LweError::NoiseMarginExceeded`] when the residue
/// is at least `Q/4` from both codewords or when the configured decision
/// disagrees with rounding to the nearest codeword.
pub fn decrypt_checked(secret_key: &SecretKey, ciphertext: &Ciphertext) -> LweResult<bool> {
    let params = secret_key.params();
    let residue = residue(secret_key, ciphertext);
    let bit = params.decide(residue);

    let (to_zero, to_half) = params.distances(residue);
    let distance = to_zero.min(to_half);
    let margin = params.noise_margin();

    if distance >= margin || bit != params.decide_centered(residue) {
        warn!(residue, distance, margin, "decryption outside noise margin");
        return Err(LweError::NoiseMarginExceeded {
            residue,
            distance,
            margin,
        });
    }
    Ok(bit)
}

/// `(v - s·u) mod Q` lifted into `[0, Q)`.
fn residue(secret_key: &SecretKey, ciphertext: &Ciphertext) -> i64 {
    let q = secret_key.params().modulus;
    let res = (ciphertext.v - secret_key.scalar() * ciphertext.u) % q;
    if res < 0 { res + q } else { res }
}

/// Encrypts `text` one bit at a time, MSB first per character.
pub fn encrypt_text(public_key: &PublicKey, text: &str) -> Vec<Ciphertext> {
    encode_bits(text)
        .iter()
        .map(|&bit| encrypt(public_key, bit))
        .collect()
}

/// Decrypts every ciphertext and decodes the bits back to text.
///
/// Fails only if the number of ciphertexts is not a multiple of 8.
pub fn decrypt_text(secret_key: &SecretKey, ciphertexts: &[Ciphertext]) -> LweResult<String> {
    let bits: BitSequence = ciphertexts
        .iter()
        .map(|ct| decrypt(secret_key, ct))
        .collect();
    Ok(decode_bits(&bits)?)
}
