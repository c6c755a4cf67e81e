//! SIGN_MODE_DIRECT

use super::{declared_index, SignBytesError, SignModeHandler};
use crate::{signer_data::SignerData, tx::Tx};
use gridway_types::{encode_auth_info, encode_body, SignMode};
use prost::Message;

/// `cosmos.tx.v1beta1.SignDoc`
#[derive(Clone, PartialEq, Message)]
struct SignDocProto {
    #[prost(bytes = "vec", tag = "1")]
    pub body_bytes: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub auth_info_bytes: Vec<u8>,
    #[prost(string, tag = "3")]
    pub chain_id: String,
    #[prost(uint64, tag = "4")]
    pub account_number: u64,
}

/// Signs over the protobuf `SignDoc`.
///
/// The auth info is part of the doc, so every signer commits to the complete
/// signer set (keys, modes and sequences) as well as the fee.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectSignModeHandler;

impl SignModeHandler for DirectSignModeHandler {
    fn default_mode(&self) -> SignMode {
        SignMode::Direct
    }

    fn modes(&self) -> Vec<SignMode> {
        vec![SignMode::Direct]
    }

    fn get_sign_bytes(
        &self,
        mode: SignMode,
        data: &SignerData,
        tx: &Tx,
    ) -> Result<Vec<u8>, SignBytesError> {
        if mode != SignMode::Direct {
            return Err(SignBytesError::UnsupportedSignMode(mode));
        }

        let index = declared_index(data, tx)?;
        let signer_infos = &tx.auth_info().signer_infos;
        if signer_infos.len() != tx.signers().len() {
            return Err(SignBytesError::SignerSetIncomplete {
                declared: tx.signers().len(),
                signer_infos: signer_infos.len(),
            });
        }

        let info = &signer_infos[index];
        if info.public_key.as_ref() != Some(&data.public_key.to_any()) {
            return Err(SignBytesError::SignerInfoMismatch { index });
        }
        let declared_mode = info.mode_info.single.map(|single| single.mode);
        if declared_mode != Some(mode) {
            return Err(SignBytesError::SignModeMismatch {
                index,
                expected: mode,
                actual: declared_mode,
            });
        }
        if info.sequence != data.sequence {
            return Err(SignBytesError::SequenceMismatch {
                index,
                expected: data.sequence,
                actual: info.sequence,
            });
        }

        let doc = SignDocProto {
            body_bytes: encode_body(tx.body()),
            auth_info_bytes: encode_auth_info(tx.auth_info()),
            chain_id: data.chain_id.clone(),
            account_number: data.account_number,
        };
        Ok(doc.encode_to_vec())
    }
}
