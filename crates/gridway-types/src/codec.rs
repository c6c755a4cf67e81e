//! Transaction wire codecs
//!
//! `ProtoTxCodec` produces the Cosmos SDK `TxRaw` layout: the body and auth
//! info are serialized once and carried as opaque bytes, so the bytes a signer
//! covered are exactly the bytes that travel on the wire. `JsonTxCodec` is kept
//! for development tooling.

use crate::tx::{
    AuthInfo, Fee, FeeAmount, ModeInfo, ModeInfoSingle, RawTx, SignMode, SignerInfo, TxBody,
    TxMessage,
};
use gridway_errors::{codes, codespaces, IsSdkError};
use prost::Message;
use thiserror::Error;

/// Transaction encoding/decoding errors
#[derive(Debug, Error)]
pub enum TxCodecError {
    /// Failed to decode protobuf
    #[error("protobuf decode error: {0}")]
    Protobuf(#[from] prost::DecodeError),

    /// JSON encoding or decoding failed
    #[error("json codec error: {0}")]
    Json(#[from] serde_json::Error),

    /// Sign mode value outside the known enumeration
    #[error("unknown sign mode: {0}")]
    UnknownSignMode(i32),
}

impl IsSdkError for TxCodecError {
    fn codespace(&self) -> &'static str {
        codespaces::SDK
    }

    fn code(&self) -> u32 {
        match self {
            TxCodecError::Json(_) => codes::JSON_MARSHAL,
            _ => codes::TX_DECODE,
        }
    }
}

/// Serializes a transaction to bytes
pub trait TxEncoder: Send + Sync {
    fn encode_tx(&self, tx: &RawTx) -> Result<Vec<u8>, TxCodecError>;
}

/// Parses a transaction from bytes
pub trait TxDecoder: Send + Sync {
    fn decode_tx(&self, tx_bytes: &[u8]) -> Result<RawTx, TxCodecError>;
}

// Protobuf representations for Cosmos SDK transaction types

#[derive(Clone, PartialEq, Message)]
struct TxRawProto {
    #[prost(bytes = "vec", tag = "1")]
    pub body_bytes: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub auth_info_bytes: Vec<u8>,
    #[prost(bytes = "vec", repeated, tag = "3")]
    pub signatures: Vec<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
struct AnyProto {
    #[prost(string, tag = "1")]
    pub type_url: String,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
struct TxBodyProto {
    #[prost(message, repeated, tag = "1")]
    pub messages: Vec<AnyProto>,
    #[prost(string, tag = "2")]
    pub memo: String,
    #[prost(uint64, tag = "3")]
    pub timeout_height: u64,
}

#[derive(Clone, PartialEq, Message)]
struct AuthInfoProto {
    #[prost(message, repeated, tag = "1")]
    pub signer_infos: Vec<SignerInfoProto>,
    #[prost(message, optional, tag = "2")]
    pub fee: Option<FeeProto>,
}

#[derive(Clone, PartialEq, Message)]
struct SignerInfoProto {
    #[prost(message, optional, tag = "1")]
    pub public_key: Option<AnyProto>,
    #[prost(message, optional, tag = "2")]
    pub mode_info: Option<ModeInfoProto>,
    #[prost(uint64, tag = "3")]
    pub sequence: u64,
}

// Only the `single` arm of the ModeInfo oneof; multisig mode infos decode as
// an empty ModeInfo.
#[derive(Clone, PartialEq, Message)]
struct ModeInfoProto {
    #[prost(message, optional, tag = "1")]
    pub single: Option<ModeInfoSingleProto>,
}

#[derive(Clone, PartialEq, Message)]
struct ModeInfoSingleProto {
    #[prost(int32, tag = "1")]
    pub mode: i32,
}

#[derive(Clone, PartialEq, Message)]
struct FeeProto {
    #[prost(message, repeated, tag = "1")]
    pub amount: Vec<CoinProto>,
    #[prost(uint64, tag = "2")]
    pub gas_limit: u64,
    #[prost(string, tag = "3")]
    pub payer: String,
    #[prost(string, tag = "4")]
    pub granter: String,
}

#[derive(Clone, PartialEq, Message)]
struct CoinProto {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub amount: String,
}

impl From<&TxMessage> for AnyProto {
    fn from(msg: &TxMessage) -> Self {
        Self {
            type_url: msg.type_url.clone(),
            value: msg.value.clone(),
        }
    }
}

impl From<AnyProto> for TxMessage {
    fn from(any: AnyProto) -> Self {
        Self {
            type_url: any.type_url,
            value: any.value,
        }
    }
}

impl From<&TxBody> for TxBodyProto {
    fn from(body: &TxBody) -> Self {
        Self {
            messages: body.messages.iter().map(AnyProto::from).collect(),
            memo: body.memo.clone(),
            timeout_height: body.timeout_height,
        }
    }
}

impl From<&AuthInfo> for AuthInfoProto {
    fn from(auth_info: &AuthInfo) -> Self {
        Self {
            signer_infos: auth_info
                .signer_infos
                .iter()
                .map(|info| SignerInfoProto {
                    public_key: info.public_key.as_ref().map(AnyProto::from),
                    mode_info: Some(ModeInfoProto {
                        single: info.mode_info.single.map(|single| ModeInfoSingleProto {
                            mode: single.mode.as_i32(),
                        }),
                    }),
                    sequence: info.sequence,
                })
                .collect(),
            fee: Some(FeeProto {
                amount: auth_info
                    .fee
                    .amount
                    .iter()
                    .map(|coin| CoinProto {
                        denom: coin.denom.clone(),
                        amount: coin.amount.clone(),
                    })
                    .collect(),
                gas_limit: auth_info.fee.gas_limit,
                payer: auth_info.fee.payer.clone(),
                granter: auth_info.fee.granter.clone(),
            }),
        }
    }
}

/// Canonical protobuf bytes of a transaction body
pub fn encode_body(body: &TxBody) -> Vec<u8> {
    TxBodyProto::from(body).encode_to_vec()
}

/// Canonical protobuf bytes of a transaction's auth info
pub fn encode_auth_info(auth_info: &AuthInfo) -> Vec<u8> {
    AuthInfoProto::from(auth_info).encode_to_vec()
}

fn decode_body(bytes: &[u8]) -> Result<TxBody, TxCodecError> {
    let proto = TxBodyProto::decode(bytes)?;
    Ok(TxBody {
        messages: proto.messages.into_iter().map(TxMessage::from).collect(),
        memo: proto.memo,
        timeout_height: proto.timeout_height,
    })
}

fn decode_auth_info(bytes: &[u8]) -> Result<AuthInfo, TxCodecError> {
    let proto = AuthInfoProto::decode(bytes)?;

    let signer_infos = proto
        .signer_infos
        .into_iter()
        .map(|info| -> Result<SignerInfo, TxCodecError> {
            let single = match info.mode_info.and_then(|m| m.single) {
                Some(single) => Some(ModeInfoSingle {
                    mode: SignMode::from_i32(single.mode)
                        .ok_or(TxCodecError::UnknownSignMode(single.mode))?,
                }),
                None => None,
            };
            Ok(SignerInfo {
                public_key: info.public_key.map(TxMessage::from),
                mode_info: ModeInfo { single },
                sequence: info.sequence,
            })
        })
        .collect::<Result<Vec<_>, TxCodecError>>()?;

    let fee = proto
        .fee
        .map(|fee| Fee {
            amount: fee
                .amount
                .into_iter()
                .map(|coin| FeeAmount {
                    denom: coin.denom,
                    amount: coin.amount,
                })
                .collect(),
            gas_limit: fee.gas_limit,
            payer: fee.payer,
            granter: fee.granter,
        })
        .unwrap_or_default();

    Ok(AuthInfo { signer_infos, fee })
}

/// Protobuf `TxRaw` codec
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtoTxCodec;

impl TxEncoder for ProtoTxCodec {
    fn encode_tx(&self, tx: &RawTx) -> Result<Vec<u8>, TxCodecError> {
        let raw = TxRawProto {
            body_bytes: encode_body(&tx.body),
            auth_info_bytes: encode_auth_info(&tx.auth_info),
            signatures: tx.signatures.clone(),
        };
        Ok(raw.encode_to_vec())
    }
}

impl TxDecoder for ProtoTxCodec {
    fn decode_tx(&self, tx_bytes: &[u8]) -> Result<RawTx, TxCodecError> {
        let raw = TxRawProto::decode(tx_bytes)?;
        Ok(RawTx {
            body: decode_body(&raw.body_bytes)?,
            auth_info: decode_auth_info(&raw.auth_info_bytes)?,
            signatures: raw.signatures,
        })
    }
}

/// JSON codec for development and debugging
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTxCodec;

impl TxEncoder for JsonTxCodec {
    fn encode_tx(&self, tx: &RawTx) -> Result<Vec<u8>, TxCodecError> {
        Ok(serde_json::to_vec(tx)?)
    }
}

impl TxDecoder for JsonTxCodec {
    fn decode_tx(&self, tx_bytes: &[u8]) -> Result<RawTx, TxCodecError> {
        Ok(serde_json::from_slice(tx_bytes)?)
    }
}
