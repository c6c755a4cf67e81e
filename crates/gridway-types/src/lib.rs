//! Core types for gridway
//!
//! This crate provides the transaction data model shared by the signing
//! stack: addresses, transaction bodies and auth info, the message trait and
//! the protobuf/JSON transaction codecs.

pub mod address;
pub mod codec;
pub mod error;
pub mod msgs;
pub mod tx;

pub use address::{AccAddress, AddressError};
pub use codec::{
    encode_auth_info, encode_body, JsonTxCodec, ProtoTxCodec, TxCodecError, TxDecoder, TxEncoder,
};
pub use error::SdkError;
pub use msgs::TestMsg;
pub use tx::{
    AuthInfo, Fee, FeeAmount, ModeInfo, ModeInfoSingle, RawTx, SdkMsg, SignMode, SignerInfo,
    TxBody, TxMessage,
};
