//! Scheme parameters, errors and the encrypt/decrypt pair.

pub mod builder;
pub mod engine;
pub mod errors;
pub mod operations;
pub mod params;
pub mod types;

pub use builder::LweParamsBuilder;
pub use engine::LweEngine;
pub use errors::{LweError, LweResult};
pub use operations::{decrypt, decrypt_checked, decrypt_text, encrypt, encrypt_text};
pub use params::{LweParams, Variant};
pub use types::Ciphertext;
