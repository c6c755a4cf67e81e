//! Error handling for gridway messages

use crate::address::AddressError;
use gridway_errors::{codes, codespaces, IsSdkError};
use thiserror::Error;

/// Errors raised by messages during stateless validation
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error("no signers: {0}")]
    NoSigners(String),
}

impl IsSdkError for SdkError {
    fn codespace(&self) -> &'static str {
        codespaces::SDK
    }

    fn code(&self) -> u32 {
        match self {
            SdkError::InvalidAddress(_) => codes::INVALID_ADDRESS,
            SdkError::NoSigners(_) => codes::NO_SIGNATURES,
        }
    }
}
