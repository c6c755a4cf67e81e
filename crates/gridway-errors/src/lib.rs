//! Error handling types and utilities for the gridway signing stack.
//!
//! Every crate keeps its own error enum; this crate supplies the shared
//! contract that maps those enums onto ABCI-compatible codespaces and codes.

use thiserror::Error;

/// Trait for errors that need to be compatible with ABCI error codes
pub trait IsSdkError: std::error::Error {
    /// Returns the module's unique codespace string (e.g., "tx")
    fn codespace(&self) -> &'static str;

    /// Returns the numeric error code, matching Go SDK values for compatibility
    fn code(&self) -> u32;
}

/// ABCI response triple for a failed operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbciInfo {
    pub codespace: &'static str,
    pub code: u32,
    pub log: String,
}

/// Build the ABCI response triple for an error
pub fn abci_info<E: IsSdkError + ?Sized>(err: &E) -> AbciInfo {
    AbciInfo {
        codespace: err.codespace(),
        code: err.code(),
        log: err.to_string(),
    }
}

/// Codespaces used by the signing stack
pub mod codespaces {
    pub const SDK: &str = "sdk";
    pub const TX: &str = "tx";
}

/// Error codes following Cosmos SDK `types/errors` registrations
pub mod codes {
    /// Internal error
    pub const INTERNAL: u32 = 1;
    /// Tx could not be decoded
    pub const TX_DECODE: u32 = 2;
    /// Invalid sequence
    pub const INVALID_SEQUENCE: u32 = 3;
    /// Unauthorized
    pub const UNAUTHORIZED: u32 = 4;
    /// Invalid address
    pub const INVALID_ADDRESS: u32 = 7;
    /// Invalid pubkey
    pub const INVALID_PUBKEY: u32 = 8;
    /// Invalid request
    pub const INVALID_REQUEST: u32 = 18;
    /// No signatures supplied
    pub const NO_SIGNATURES: u32 = 15;
    /// Failed to encode
    pub const JSON_MARSHAL: u32 = 36;
    /// Unsupported sign mode or key type
    pub const NOT_SUPPORTED: u32 = 37;
}

/// Catch-all error for callers that need to erase the originating crate
#[derive(Error, Debug)]
#[error("{codespace}:{code}: {log}")]
pub struct Error {
    pub codespace: &'static str,
    pub code: u32,
    pub log: String,
}

impl<E: IsSdkError> From<&E> for Error {
    fn from(err: &E) -> Self {
        let info = abci_info(err);
        Self {
            codespace: info.codespace,
            code: info.code,
            log: info.log,
        }
    }
}

/// Result type alias for gridway operations
pub type Result<T> = std::result::Result<T, Error>;
