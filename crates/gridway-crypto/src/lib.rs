//! Cryptographic primitives for gridway
//!
//! This crate provides the key types used by the signing stack, built on
//! well-audited implementations from the RustCrypto and dalek projects.
//! Private keys are opaque capabilities: callers can derive the public key
//! and produce signatures, nothing else.

pub mod error;
pub mod keys;

pub use error::SignatureError;
pub use keys::{verify_signature, PrivKey, PrivateKey, PublicKey};
