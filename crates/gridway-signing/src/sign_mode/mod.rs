//! Sign mode handlers
//!
//! A handler turns a transaction and one signer's [`SignerData`] into the
//! exact bytes that signer signs. Every handler is deterministic: the same
//! inputs always produce the same bytes.

mod amino_json;
mod direct;

pub use amino_json::LegacyAminoJsonSignModeHandler;
pub use direct::DirectSignModeHandler;

use crate::{error::SigningError, signature::SignatureV2, signer_data::SignerData, tx::Tx};
use gridway_crypto::SignatureError;
use gridway_errors::{codes, codespaces, IsSdkError};
use gridway_types::{AccAddress, SignMode};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignBytesError {
    #[error("sign mode {0} is not supported")]
    UnsupportedSignMode(SignMode),

    #[error("{0} is not a signer of this transaction")]
    SignerNotDeclared(AccAddress),

    #[error("signer set is not fixed: {declared} declared signers, {signer_infos} signer infos")]
    SignerSetIncomplete { declared: usize, signer_infos: usize },

    #[error("signer info at position {index} does not carry the signer's public key")]
    SignerInfoMismatch { index: usize },

    #[error("signer info at position {index} declares sign mode {actual:?}, expected {expected}")]
    SignModeMismatch {
        index: usize,
        expected: SignMode,
        actual: Option<SignMode>,
    },

    #[error("signer info at position {index} has sequence {actual}, expected {expected}")]
    SequenceMismatch {
        index: usize,
        expected: u64,
        actual: u64,
    },

    #[error("failed to canonicalize sign doc: {0}")]
    Canonicalization(String),
}

impl IsSdkError for SignBytesError {
    fn codespace(&self) -> &'static str {
        codespaces::SDK
    }

    fn code(&self) -> u32 {
        match self {
            SignBytesError::UnsupportedSignMode(_) => codes::NOT_SUPPORTED,
            SignBytesError::SignerNotDeclared(_) => codes::INVALID_ADDRESS,
            SignBytesError::SignerSetIncomplete { .. } => codes::UNAUTHORIZED,
            SignBytesError::SignerInfoMismatch { .. } => codes::INVALID_PUBKEY,
            SignBytesError::SignModeMismatch { .. } => codes::INVALID_REQUEST,
            SignBytesError::SequenceMismatch { .. } => codes::INVALID_SEQUENCE,
            SignBytesError::Canonicalization(_) => codes::JSON_MARSHAL,
        }
    }
}

/// Produces sign bytes for one or more sign modes
pub trait SignModeHandler: Send + Sync {
    /// Mode used when the caller does not pick one
    fn default_mode(&self) -> SignMode;

    /// Modes this handler can produce sign bytes for
    fn modes(&self) -> Vec<SignMode>;

    fn get_sign_bytes(
        &self,
        mode: SignMode,
        data: &SignerData,
        tx: &Tx,
    ) -> Result<Vec<u8>, SignBytesError>;

    /// Check `sig` against the sign bytes it claims to cover
    fn verify_signature(
        &self,
        data: &SignerData,
        sig: &SignatureV2,
        tx: &Tx,
    ) -> Result<(), SigningError> {
        let address = data.address();
        if sig.public_key != data.public_key {
            return Err(SigningError::Verification {
                address,
                source: SignatureError::InvalidKey(
                    "signature public key does not match signer".into(),
                ),
            });
        }
        if sig.sequence != data.sequence {
            return Err(SigningError::InvalidSequence {
                address,
                expected: data.sequence,
                actual: sig.sequence,
            });
        }

        let sign_bytes = self.get_sign_bytes(sig.data.sign_mode(), data, tx)?;
        sig.public_key
            .verify(&sign_bytes, sig.data.signature())
            .map_err(|source| SigningError::Verification { address, source })
    }
}

/// Dispatches to registered handlers by sign mode
pub struct SignModeHandlerMap {
    default_mode: SignMode,
    handlers: BTreeMap<SignMode, Arc<dyn SignModeHandler>>,
}

impl SignModeHandlerMap {
    /// Register `handlers` under every mode they report. A later handler
    /// replaces an earlier one for the same mode.
    pub fn new(
        default_mode: SignMode,
        handlers: Vec<Box<dyn SignModeHandler>>,
    ) -> Result<Self, SignBytesError> {
        let mut map = BTreeMap::new();
        for handler in handlers {
            let handler: Arc<dyn SignModeHandler> = Arc::from(handler);
            for mode in handler.modes() {
                map.insert(mode, Arc::clone(&handler));
            }
        }

        if !map.contains_key(&default_mode) {
            return Err(SignBytesError::UnsupportedSignMode(default_mode));
        }

        Ok(Self {
            default_mode,
            handlers: map,
        })
    }

    /// Handler map restricted to `modes`, built from the handlers this crate
    /// ships
    pub fn with_modes(default_mode: SignMode, modes: &[SignMode]) -> Result<Self, SignBytesError> {
        let mut handlers: Vec<Box<dyn SignModeHandler>> = Vec::new();
        for mode in modes {
            match mode {
                SignMode::Direct => handlers.push(Box::new(DirectSignModeHandler)),
                SignMode::LegacyAminoJson => {
                    handlers.push(Box::new(LegacyAminoJsonSignModeHandler))
                }
                other => return Err(SignBytesError::UnsupportedSignMode(*other)),
            }
        }
        Self::new(default_mode, handlers)
    }

    fn handler(&self, mode: SignMode) -> Result<&dyn SignModeHandler, SignBytesError> {
        self.handlers
            .get(&mode)
            .map(|h| h.as_ref())
            .ok_or(SignBytesError::UnsupportedSignMode(mode))
    }
}

impl Default for SignModeHandlerMap {
    fn default() -> Self {
        Self {
            default_mode: SignMode::Direct,
            handlers: BTreeMap::from([
                (
                    SignMode::Direct,
                    Arc::new(DirectSignModeHandler) as Arc<dyn SignModeHandler>,
                ),
                (
                    SignMode::LegacyAminoJson,
                    Arc::new(LegacyAminoJsonSignModeHandler) as Arc<dyn SignModeHandler>,
                ),
            ]),
        }
    }
}

impl fmt::Debug for SignModeHandlerMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignModeHandlerMap")
            .field("default_mode", &self.default_mode)
            .field("modes", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl SignModeHandler for SignModeHandlerMap {
    fn default_mode(&self) -> SignMode {
        self.default_mode
    }

    fn modes(&self) -> Vec<SignMode> {
        self.handlers.keys().copied().collect()
    }

    fn get_sign_bytes(
        &self,
        mode: SignMode,
        data: &SignerData,
        tx: &Tx,
    ) -> Result<Vec<u8>, SignBytesError> {
        self.handler(mode)?.get_sign_bytes(mode, data, tx)
    }
}

/// Position of the signer in the declared list
pub(crate) fn declared_index(data: &SignerData, tx: &Tx) -> Result<usize, SignBytesError> {
    let address = data.address();
    tx.signer_index(&address)
        .ok_or(SignBytesError::SignerNotDeclared(address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TxBuilder;
    use gridway_crypto::{PrivKey, PrivateKey};
    use gridway_types::TestMsg;

    fn single_signer_tx(key: &PrivateKey) -> Tx {
        let msg = TestMsg::new(&[key.pub_key().to_address()]);
        let mut builder = TxBuilder::new();
        builder.set_msgs(&[&msg]).unwrap();
        builder
            .set_signatures(vec![SignatureV2::placeholder(
                key.pub_key(),
                SignMode::Direct,
                0,
            )])
            .unwrap();
        builder.into_tx()
    }

    #[test]
    fn test_default_map_dispatch() {
        let map = SignModeHandlerMap::default();
        assert_eq!(map.default_mode(), SignMode::Direct);
        assert_eq!(
            map.modes(),
            vec![SignMode::Direct, SignMode::LegacyAminoJson]
        );

        let key = PrivateKey::generate_secp256k1();
        let tx = single_signer_tx(&key);
        let data = SignerData::new("test-chain", 0, 0, key.pub_key());

        let direct = map.get_sign_bytes(SignMode::Direct, &data, &tx).unwrap();
        let amino = map
            .get_sign_bytes(SignMode::LegacyAminoJson, &data, &tx)
            .unwrap();
        assert_ne!(direct, amino);
        assert_eq!(
            direct,
            DirectSignModeHandler
                .get_sign_bytes(SignMode::Direct, &data, &tx)
                .unwrap()
        );
    }

    #[test]
    fn test_unregistered_mode_is_unsupported() {
        let map = SignModeHandlerMap::default();
        let key = PrivateKey::generate_secp256k1();
        let tx = single_signer_tx(&key);
        let data = SignerData::new("test-chain", 0, 0, key.pub_key());

        let err = map
            .get_sign_bytes(SignMode::Textual, &data, &tx)
            .unwrap_err();
        assert!(matches!(
            err,
            SignBytesError::UnsupportedSignMode(SignMode::Textual)
        ));
        assert_eq!(err.code(), codes::NOT_SUPPORTED);
    }

    #[test]
    fn test_map_requires_registered_default() {
        let err = SignModeHandlerMap::new(
            SignMode::LegacyAminoJson,
            vec![Box::new(DirectSignModeHandler)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SignBytesError::UnsupportedSignMode(SignMode::LegacyAminoJson)
        ));

        let map = SignModeHandlerMap::with_modes(SignMode::Direct, &[SignMode::Direct]).unwrap();
        assert_eq!(map.modes(), vec![SignMode::Direct]);
        assert!(SignModeHandlerMap::with_modes(SignMode::Direct, &[SignMode::Textual]).is_err());
    }

    #[test]
    fn test_verify_signature_checks_sequence_before_bytes() {
        let key = PrivateKey::generate_ed25519();
        let tx = single_signer_tx(&key);
        let data = SignerData::new("test-chain", 0, 0, key.pub_key());
        let bytes = DirectSignModeHandler
            .get_sign_bytes(SignMode::Direct, &data, &tx)
            .unwrap();

        let mut sig = SignatureV2::placeholder(key.pub_key(), SignMode::Direct, 0);
        sig.data = crate::signature::SignatureData::Single {
            sign_mode: SignMode::Direct,
            signature: key.sign(&bytes).unwrap(),
        };
        DirectSignModeHandler
            .verify_signature(&data, &sig, &tx)
            .unwrap();

        sig.sequence = 1;
        let err = DirectSignModeHandler
            .verify_signature(&data, &sig, &tx)
            .unwrap_err();
        assert!(matches!(
            err,
            SigningError::InvalidSequence {
                expected: 0,
                actual: 1,
                ..
            }
        ));
    }
}
