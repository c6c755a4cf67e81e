//! Signature errors

use gridway_errors::{codes, codespaces, IsSdkError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("signing failed: {0}")]
    SigningFailed(String),

    #[error("verification failed")]
    VerificationFailed,

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("unknown public key type: {0}")]
    UnknownKeyType(String),
}

impl IsSdkError for SignatureError {
    fn codespace(&self) -> &'static str {
        codespaces::SDK
    }

    fn code(&self) -> u32 {
        match self {
            SignatureError::SigningFailed(_) => codes::INTERNAL,
            SignatureError::VerificationFailed => codes::UNAUTHORIZED,
            SignatureError::InvalidKey(_) => codes::INVALID_PUBKEY,
            SignatureError::UnknownKeyType(_) => codes::NOT_SUPPORTED,
        }
    }
}
