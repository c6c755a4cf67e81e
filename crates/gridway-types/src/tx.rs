//! Transaction types and traits

use crate::{address::AccAddress, error::SdkError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait defining the contract for all messages a transaction can carry
pub trait SdkMsg: Send + Sync + 'static {
    /// Get the Protobuf type URL (e.g., "/cosmos.bank.v1beta1.MsgSend")
    fn type_url(&self) -> &'static str;

    /// Perform stateless validation
    fn validate_basic(&self) -> Result<(), SdkError>;

    /// Get the signers required for this message, in declaration order
    fn get_signers(&self) -> Result<Vec<AccAddress>, SdkError>;

    /// Encode the message to protobuf bytes
    fn encode(&self) -> Vec<u8>;
}

/// Signing mode, numbered as in `cosmos.tx.signing.v1beta1.SignMode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignMode {
    Unspecified,
    /// Sign over the protobuf SignDoc
    Direct,
    /// Human readable rendering, not implemented by this stack
    Textual,
    /// Legacy Amino JSON StdSignDoc
    LegacyAminoJson,
}

impl SignMode {
    /// Protobuf enum value
    pub fn as_i32(self) -> i32 {
        match self {
            SignMode::Unspecified => 0,
            SignMode::Direct => 1,
            SignMode::Textual => 2,
            SignMode::LegacyAminoJson => 127,
        }
    }

    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(SignMode::Unspecified),
            1 => Some(SignMode::Direct),
            2 => Some(SignMode::Textual),
            127 => Some(SignMode::LegacyAminoJson),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SignMode::Unspecified => "SIGN_MODE_UNSPECIFIED",
            SignMode::Direct => "SIGN_MODE_DIRECT",
            SignMode::Textual => "SIGN_MODE_TEXTUAL",
            SignMode::LegacyAminoJson => "SIGN_MODE_LEGACY_AMINO_JSON",
        }
    }
}

impl fmt::Display for SignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction body containing messages and metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxBody {
    /// Messages in the transaction
    pub messages: Vec<TxMessage>,
    /// Transaction memo
    pub memo: String,
    /// Timeout height for the transaction
    pub timeout_height: u64,
}

/// Protobuf `Any` wrapper, used for messages and public keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxMessage {
    /// Type URL for the message
    pub type_url: String,
    /// Encoded message data
    pub value: Vec<u8>,
}

/// Authentication info for a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInfo {
    /// Signer information, positionally aligned with the declared signers
    pub signer_infos: Vec<SignerInfo>,
    /// Fee information
    pub fee: Fee,
}

/// Signer information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerInfo {
    /// Public key as an `Any`
    pub public_key: Option<TxMessage>,
    /// Mode info
    pub mode_info: ModeInfo,
    /// Sequence number
    pub sequence: u64,
}

/// Signing mode info
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeInfo {
    /// Single signer mode
    pub single: Option<ModeInfoSingle>,
}

impl ModeInfo {
    pub fn single(mode: SignMode) -> Self {
        Self {
            single: Some(ModeInfoSingle { mode }),
        }
    }
}

/// Single signer mode info
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeInfoSingle {
    /// Signing mode
    pub mode: SignMode,
}

/// Fee information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    /// Amount of fee
    pub amount: Vec<FeeAmount>,
    /// Gas limit
    pub gas_limit: u64,
    /// Payer address
    pub payer: String,
    /// Granter address
    pub granter: String,
}

/// Fee amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeAmount {
    /// Denomination
    pub denom: String,
    /// Amount
    pub amount: String,
}

impl FeeAmount {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.to_string(),
        }
    }
}

/// Raw transaction structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTx {
    /// Transaction body
    pub body: TxBody,
    /// Authentication info
    pub auth_info: AuthInfo,
    /// Signatures, positionally aligned with `auth_info.signer_infos`
    pub signatures: Vec<Vec<u8>>,
}
