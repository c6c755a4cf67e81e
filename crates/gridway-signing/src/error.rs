//! Errors raised while assembling, signing and verifying transactions

use crate::sign_mode::SignBytesError;
use gridway_crypto::SignatureError;
use gridway_errors::{codes, codespaces, IsSdkError};
use gridway_types::{AccAddress, SdkError, TxCodecError};
use thiserror::Error;

/// Coarse classification of a [`SigningError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Signature list or signer inputs disagree with the declared signer set
    ShapeMismatch,
    /// The sign mode handler could not produce sign bytes
    SignBytesFailure,
    /// The key handle failed to sign
    SigningFailure,
    /// An assembled signature did not verify
    VerificationFailure,
    /// The signed transaction could not be serialized
    EncodingFailure,
    /// The transaction itself is malformed
    InvalidTx,
}

#[derive(Error, Debug)]
pub enum SigningError {
    #[error(
        "signer inputs disagree: {privs} keys, {account_numbers} account numbers, {sequences} sequences"
    )]
    SignerInputMismatch {
        privs: usize,
        account_numbers: usize,
        sequences: usize,
    },

    #[error("no signers supplied")]
    NoSigners,

    #[error("invalid number of signatures: transaction declares {expected} signers, got {actual}")]
    SignatureCountMismatch { expected: usize, actual: usize },

    #[error("signer mismatch at position {index}: expected {expected}, got {actual}")]
    SignerMismatch {
        index: usize,
        expected: AccAddress,
        actual: AccAddress,
    },

    #[error("failed to get sign bytes: {0}")]
    SignBytes(#[from] SignBytesError),

    #[error("signing failed: {0}")]
    Signing(#[source] SignatureError),

    #[error("signature verification failed for {address}: {source}")]
    Verification {
        address: AccAddress,
        #[source]
        source: SignatureError,
    },

    #[error("invalid sequence for {address}: expected {expected}, got {actual}")]
    InvalidSequence {
        address: AccAddress,
        expected: u64,
        actual: u64,
    },

    #[error("failed to encode transaction: {0}")]
    Encoding(#[from] TxCodecError),

    #[error("invalid message: {0}")]
    InvalidMsg(#[from] SdkError),

    #[error("malformed signer info at position {index}: {reason}")]
    MalformedSignerInfo { index: usize, reason: String },
}

impl SigningError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SigningError::SignerInputMismatch { .. }
            | SigningError::NoSigners
            | SigningError::SignatureCountMismatch { .. }
            | SigningError::SignerMismatch { .. } => ErrorKind::ShapeMismatch,
            SigningError::SignBytes(_) => ErrorKind::SignBytesFailure,
            SigningError::Signing(_) => ErrorKind::SigningFailure,
            SigningError::Verification { .. } | SigningError::InvalidSequence { .. } => {
                ErrorKind::VerificationFailure
            }
            SigningError::Encoding(_) => ErrorKind::EncodingFailure,
            SigningError::InvalidMsg(_) | SigningError::MalformedSignerInfo { .. } => {
                ErrorKind::InvalidTx
            }
        }
    }
}

impl IsSdkError for SigningError {
    fn codespace(&self) -> &'static str {
        match self {
            SigningError::SignBytes(e) => e.codespace(),
            SigningError::Signing(e) => e.codespace(),
            SigningError::Encoding(e) => e.codespace(),
            SigningError::InvalidMsg(e) => e.codespace(),
            _ => codespaces::TX,
        }
    }

    fn code(&self) -> u32 {
        match self {
            SigningError::SignerInputMismatch { .. } => codes::INVALID_REQUEST,
            SigningError::NoSigners => codes::NO_SIGNATURES,
            SigningError::SignatureCountMismatch { .. } | SigningError::SignerMismatch { .. } => {
                codes::UNAUTHORIZED
            }
            SigningError::SignBytes(e) => e.code(),
            SigningError::Signing(e) => e.code(),
            SigningError::Verification { .. } => codes::UNAUTHORIZED,
            SigningError::InvalidSequence { .. } => codes::INVALID_SEQUENCE,
            SigningError::Encoding(e) => e.code(),
            SigningError::InvalidMsg(e) => e.code(),
            SigningError::MalformedSignerInfo { .. } => codes::INVALID_PUBKEY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridway_errors::abci_info;

    #[test]
    fn test_shape_errors_share_kind() {
        let count = SigningError::SignatureCountMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(count.kind(), ErrorKind::ShapeMismatch);
        assert_eq!(SigningError::NoSigners.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_abci_mapping() {
        let err = SigningError::SignatureCountMismatch {
            expected: 3,
            actual: 2,
        };
        let info = abci_info(&err);
        assert_eq!(info.codespace, "tx");
        assert_eq!(info.code, codes::UNAUTHORIZED);
        assert!(info.log.contains("declares 3 signers, got 2"));
    }

    #[test]
    fn test_wrapped_errors_keep_their_codes() {
        let err = SigningError::Signing(SignatureError::SigningFailed("hsm offline".into()));
        assert_eq!(err.kind(), ErrorKind::SigningFailure);
        assert_eq!(err.codespace(), "sdk");
        assert_eq!(err.code(), codes::INTERNAL);
    }
}
