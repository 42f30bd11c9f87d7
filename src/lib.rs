pub mod crypto;
pub mod encoding;
pub mod keys;
pub mod math;

pub use crypto::{
    Ciphertext, LweEngine, LweError, LweParams, LweResult, Variant, decrypt,
    decrypt_checked, decrypt_text, encrypt, encrypt_text,
};
pub use encoding::{BitSequence, EncodingError, decode_bits, encode_bits};
pub use keys::{KeyGenerator, PublicKey, SecretKey, keygen};
pub use math::{ModularVector, RandomSampler, Reduction, VectorError};
