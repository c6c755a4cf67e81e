//! SIGN_MODE_LEGACY_AMINO_JSON

use super::{declared_index, SignBytesError, SignModeHandler};
use crate::{signer_data::SignerData, tx::Tx};
use base64::{engine::general_purpose, Engine as _};
use gridway_types::{Fee, SignMode, TxMessage};
use serde_json::{json, Map, Value};

/// Signs over the canonical JSON `StdSignDoc`.
///
/// Object keys are emitted in lexicographic order with no whitespace and all
/// integers rendered as decimal strings. Unlike Direct, the doc does not cover
/// other signers' keys or modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyAminoJsonSignModeHandler;

impl SignModeHandler for LegacyAminoJsonSignModeHandler {
    fn default_mode(&self) -> SignMode {
        SignMode::LegacyAminoJson
    }

    fn modes(&self) -> Vec<SignMode> {
        vec![SignMode::LegacyAminoJson]
    }

    fn get_sign_bytes(
        &self,
        mode: SignMode,
        data: &SignerData,
        tx: &Tx,
    ) -> Result<Vec<u8>, SignBytesError> {
        if mode != SignMode::LegacyAminoJson {
            return Err(SignBytesError::UnsupportedSignMode(mode));
        }
        declared_index(data, tx)?;

        let body = tx.body();
        let doc = json!({
            "account_number": data.account_number.to_string(),
            "chain_id": data.chain_id,
            "fee": fee_json(&tx.auth_info().fee),
            "memo": body.memo,
            "msgs": body.messages.iter().map(msg_json).collect::<Vec<_>>(),
            "sequence": data.sequence.to_string(),
            "timeout_height": body.timeout_height.to_string(),
        });

        serde_json::to_vec(&doc).map_err(|e| SignBytesError::Canonicalization(e.to_string()))
    }
}

fn fee_json(fee: &Fee) -> Value {
    let amount: Vec<Value> = fee
        .amount
        .iter()
        .map(|coin| json!({ "amount": coin.amount, "denom": coin.denom }))
        .collect();

    let mut obj = Map::new();
    obj.insert("amount".into(), Value::Array(amount));
    obj.insert("gas".into(), Value::String(fee.gas_limit.to_string()));
    if !fee.granter.is_empty() {
        obj.insert("granter".into(), Value::String(fee.granter.clone()));
    }
    if !fee.payer.is_empty() {
        obj.insert("payer".into(), Value::String(fee.payer.clone()));
    }
    Value::Object(obj)
}

fn msg_json(msg: &TxMessage) -> Value {
    json!({
        "type": msg.type_url,
        "value": general_purpose::STANDARD.encode(&msg.value),
    })
}
