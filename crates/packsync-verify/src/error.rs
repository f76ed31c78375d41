use std::io;

use crate::{Algorithm, Digest};

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("unsupported hash algorithm: {0:?}")]
    UnsupportedAlgorithm(String),

    #[error("invalid {algorithm} digest {value:?}: {reason}")]
    InvalidDigestFormat {
        algorithm: Algorithm,
        value:     String,
        reason:    String,
    },

    #[error("checksum mismatch: expected {expected}, got {actual}")]
    Mismatch {
        expected: Digest,
        actual:   Digest,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, VerificationError>;
