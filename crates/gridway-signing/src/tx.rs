//! Read-only view of a transaction under construction

use crate::{
    error::SigningError,
    signature::{SignatureData, SignatureV2},
};
use gridway_crypto::PublicKey;
use gridway_types::{AccAddress, AuthInfo, RawTx, TxBody};

/// Transaction together with its declared signer list.
///
/// The declared signers are the ordered, de-duplicated union of the signers
/// required by the messages. The i-th signer info and the i-th signature
/// belong to the i-th declared signer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tx {
    pub(crate) raw: RawTx,
    pub(crate) signers: Vec<AccAddress>,
}

impl Tx {
    pub fn body(&self) -> &TxBody {
        &self.raw.body
    }

    pub fn auth_info(&self) -> &AuthInfo {
        &self.raw.auth_info
    }

    /// Raw signature bytes in signer order
    pub fn signatures(&self) -> &[Vec<u8>] {
        &self.raw.signatures
    }

    /// Declared signers in order
    pub fn signers(&self) -> &[AccAddress] {
        &self.signers
    }

    pub fn raw(&self) -> &RawTx {
        &self.raw
    }

    pub fn into_raw(self) -> RawTx {
        self.raw
    }

    /// Position of `address` in the declared signer list
    pub fn signer_index(&self, address: &AccAddress) -> Option<usize> {
        self.signers.iter().position(|s| s == address)
    }

    /// Reassembles the signature entries from the signer infos and raw
    /// signatures
    pub fn signatures_v2(&self) -> Result<Vec<SignatureV2>, SigningError> {
        let infos = &self.raw.auth_info.signer_infos;
        if infos.len() != self.raw.signatures.len() {
            return Err(SigningError::SignatureCountMismatch {
                expected: infos.len(),
                actual: self.raw.signatures.len(),
            });
        }

        infos
            .iter()
            .zip(&self.raw.signatures)
            .enumerate()
            .map(|(index, (info, signature))| {
                let any = info
                    .public_key
                    .as_ref()
                    .ok_or_else(|| SigningError::MalformedSignerInfo {
                        index,
                        reason: "missing public key".into(),
                    })?;
                let public_key =
                    PublicKey::from_any(any).map_err(|e| SigningError::MalformedSignerInfo {
                        index,
                        reason: e.to_string(),
                    })?;
                let single =
                    info.mode_info
                        .single
                        .ok_or_else(|| SigningError::MalformedSignerInfo {
                            index,
                            reason: "missing single mode info".into(),
                        })?;

                Ok(SignatureV2 {
                    public_key,
                    data: SignatureData::Single {
                        sign_mode: single.mode,
                        signature: signature.clone(),
                    },
                    sequence: info.sequence,
                })
            })
            .collect()
    }
}
