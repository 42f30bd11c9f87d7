pub mod bits;

pub use bits::{BITS_PER_UNIT, BitSequence, decode_bits, encode_bits};
use thiserror::Error;

pub type EncodingResult<T> = Result<T, EncodingError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Invalid length: {len} bits is not a multiple of 8")]
    InvalidLength { len: usize },
}
