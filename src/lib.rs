//! gridway-txsign
//!
//! Facade over the gridway signing stack. Most callers need only
//! [`TxBuilder`], [`TxConfig`] and [`SigningCoordinator`]:
//!
//! ```no_run
//! use gridway_txsign::{PrivKey, PrivateKey, SigningCoordinator, TestMsg, TxBuilder, TxConfig};
//!
//! let key = PrivateKey::generate_secp256k1();
//! let msg = TestMsg::new(&[key.pub_key().to_address()]);
//!
//! let mut builder = TxBuilder::new();
//! builder.set_msgs(&[&msg])?;
//!
//! let config = TxConfig::default();
//! let (_tx, tx_bytes) = SigningCoordinator::new(&config)
//!     .create_signed_tx(&builder, &[&key], &[0], &[0], "test-chain")?;
//! assert!(!tx_bytes.is_empty());
//! # Ok::<(), gridway_txsign::SigningError>(())
//! ```

pub use gridway_crypto::{verify_signature, PrivKey, PrivateKey, PublicKey, SignatureError};
pub use gridway_errors::{abci_info, AbciInfo, IsSdkError};
pub use gridway_log as log;
pub use gridway_signing::{
    sign_with_priv_key, verify_tx, ConfigError, DirectSignModeHandler, ErrorKind,
    LegacyAminoJsonSignModeHandler, SignBytesError, SignModeHandler, SignModeHandlerMap,
    SignatureData, SignatureV2, SignerData, SigningConfig, SigningCoordinator, SigningError, Tx,
    TxBuilder, TxConfig,
};
pub use gridway_types::{
    AccAddress, FeeAmount, JsonTxCodec, ProtoTxCodec, RawTx, SdkMsg, SignMode, TestMsg,
    TxDecoder, TxEncoder,
};
