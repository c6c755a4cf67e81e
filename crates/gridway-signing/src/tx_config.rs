//! Bundle of the collaborators the signing stack needs

use crate::{
    config::{ConfigError, SigningConfig},
    sign_mode::{SignModeHandler, SignModeHandlerMap},
};
use gridway_types::{ProtoTxCodec, TxDecoder, TxEncoder};
use std::fmt;

/// Sign mode handler, wire codec and signing policy
pub struct TxConfig {
    handler: Box<dyn SignModeHandler>,
    encoder: Box<dyn TxEncoder>,
    decoder: Box<dyn TxDecoder>,
    verify_signatures: bool,
}

impl TxConfig {
    pub fn new(
        handler: Box<dyn SignModeHandler>,
        encoder: Box<dyn TxEncoder>,
        decoder: Box<dyn TxDecoder>,
    ) -> Self {
        Self {
            handler,
            encoder,
            decoder,
            verify_signatures: false,
        }
    }

    /// Build from a validated [`SigningConfig`], using the protobuf codec
    pub fn from_config(config: &SigningConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let handlers = SignModeHandlerMap::with_modes(
            config.signing.default_mode,
            &config.signing.enabled_modes,
        )
        .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        Ok(Self::new(
            Box::new(handlers),
            Box::new(ProtoTxCodec),
            Box::new(ProtoTxCodec),
        )
        .with_signature_verification(config.signing.verify_signatures))
    }

    /// Verify every produced signature before it is installed
    pub fn with_signature_verification(mut self, enabled: bool) -> Self {
        self.verify_signatures = enabled;
        self
    }

    pub fn sign_mode_handler(&self) -> &dyn SignModeHandler {
        self.handler.as_ref()
    }

    pub fn tx_encoder(&self) -> &dyn TxEncoder {
        self.encoder.as_ref()
    }

    pub fn tx_decoder(&self) -> &dyn TxDecoder {
        self.decoder.as_ref()
    }

    pub fn verify_signatures(&self) -> bool {
        self.verify_signatures
    }
}

impl Default for TxConfig {
    fn default() -> Self {
        Self::new(
            Box::new(SignModeHandlerMap::default()),
            Box::new(ProtoTxCodec),
            Box::new(ProtoTxCodec),
        )
    }
}

impl fmt::Debug for TxConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TxConfig")
            .field("default_mode", &self.handler.default_mode())
            .field("modes", &self.handler.modes())
            .field("verify_signatures", &self.verify_signatures)
            .finish()
    }
}
