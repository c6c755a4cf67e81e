//! Signature entries as installed on a transaction

use gridway_crypto::PublicKey;
use gridway_types::SignMode;

/// Mode-tagged signature payload.
///
/// Only single-key signatures exist today; a composite variant for multisig
/// public keys would be added here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureData {
    Single {
        sign_mode: SignMode,
        /// Empty while the entry is a placeholder
        signature: Vec<u8>,
    },
}

impl SignatureData {
    pub fn sign_mode(&self) -> SignMode {
        match self {
            SignatureData::Single { sign_mode, .. } => *sign_mode,
        }
    }

    pub fn signature(&self) -> &[u8] {
        match self {
            SignatureData::Single { signature, .. } => signature,
        }
    }
}

/// One entry of a transaction's signature list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureV2 {
    pub public_key: PublicKey,
    pub data: SignatureData,
    pub sequence: u64,
}

impl SignatureV2 {
    /// Entry with full metadata but no signature bytes, used to fix the
    /// signer set before anyone signs
    pub fn placeholder(public_key: PublicKey, sign_mode: SignMode, sequence: u64) -> Self {
        Self {
            public_key,
            data: SignatureData::Single {
                sign_mode,
                signature: Vec::new(),
            },
            sequence,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.data.signature().is_empty()
    }
}
