//! Multi-signer transaction signing for gridway
//!
//! Turns an unsigned transaction, a list of signer keys and their
//! per-account ordering data (account number, sequence) into a signed,
//! replay-protected transaction and its wire bytes.
//!
//! Signing runs in two rounds. The first installs placeholder signatures so
//! the signer set (public keys, sign modes, sequences) is fixed in the auth
//! info; the second computes every signer's sign bytes against that fixed set
//! and installs all real signatures in one step. See [`SigningCoordinator`].

pub mod builder;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod sign_mode;
pub mod signature;
pub mod signer_data;
pub mod tx;
pub mod tx_config;
pub mod verify;

pub use builder::TxBuilder;
pub use config::{ConfigError, SigningConfig};
pub use coordinator::{sign_with_priv_key, SigningCoordinator};
pub use error::{ErrorKind, SigningError};
pub use sign_mode::{
    DirectSignModeHandler, LegacyAminoJsonSignModeHandler, SignBytesError, SignModeHandler,
    SignModeHandlerMap,
};
pub use signature::{SignatureData, SignatureV2};
pub use signer_data::SignerData;
pub use tx::Tx;
pub use tx_config::TxConfig;
pub use verify::verify_tx;
