use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LweError {
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    #[error("Vector operation failed: {source}")]
    Vector {
        #[from]
        source: crate::math::VectorError,
    },

    #[error("Encoding failed: {source}")]
    Encoding {
        #[from]
        source: crate::encoding::EncodingError,
    },

    #[error(
        "Noise margin exceeded: residue {residue} is {distance} away from the \
         nearest codeword, margin is {margin}"
    )]
    NoiseMarginExceeded {
        residue: i64,
        distance: i64,
        margin: i64,
    },
}

impl LweError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

pub type LweResult<T> = Result<T, LweError>;
