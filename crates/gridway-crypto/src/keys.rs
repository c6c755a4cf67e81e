//! Key representations using static enum dispatch

use crate::error::SignatureError;
use base64::{engine::general_purpose, Engine as _};
use ed25519_dalek::{SigningKey as Ed25519PrivKey, VerifyingKey as Ed25519PubKey};
use gridway_types::{AccAddress, TxMessage};
use k256::ecdsa::{SigningKey as Secp256k1PrivKey, VerifyingKey as Secp256k1PubKey};
use prost::Message;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use signature::{Signer, Verifier};
use std::fmt;

const SECP256K1_TYPE_URL: &str = "/cosmos.crypto.secp256k1.PubKey";
const ED25519_TYPE_URL: &str = "/cosmos.crypto.ed25519.PubKey";

/// `cosmos.crypto.{secp256k1,ed25519}.PubKey` wrapper
#[derive(Clone, PartialEq, Message)]
struct PubKeyProto {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
}

/// All supported public key types
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKey {
    Secp256k1(Secp256k1PubKey),
    Ed25519(Ed25519PubKey),
}

impl PublicKey {
    /// Derive address from public key
    pub fn to_address(&self) -> AccAddress {
        AccAddress::from_pubkey(&self.to_bytes())
    }

    /// Get the Protobuf type URL for this key type
    pub fn type_url(&self) -> &'static str {
        match self {
            PublicKey::Secp256k1(_) => SECP256K1_TYPE_URL,
            PublicKey::Ed25519(_) => ED25519_TYPE_URL,
        }
    }

    /// Convert to raw bytes (compressed SEC1 for secp256k1)
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            PublicKey::Secp256k1(key) => key.to_encoded_point(true).as_bytes().to_vec(),
            PublicKey::Ed25519(key) => key.as_bytes().to_vec(),
        }
    }

    /// Parse raw key bytes for the given type URL
    pub fn from_raw(type_url: &str, bytes: &[u8]) -> Result<Self, SignatureError> {
        match type_url {
            SECP256K1_TYPE_URL => Secp256k1PubKey::from_sec1_bytes(bytes)
                .map(PublicKey::Secp256k1)
                .map_err(|e| SignatureError::InvalidKey(e.to_string())),
            ED25519_TYPE_URL => {
                let bytes: [u8; 32] = bytes
                    .try_into()
                    .map_err(|_| SignatureError::InvalidKey("invalid ed25519 key length".into()))?;
                Ed25519PubKey::from_bytes(&bytes)
                    .map(PublicKey::Ed25519)
                    .map_err(|e| SignatureError::InvalidKey(e.to_string()))
            }
            _ => Err(SignatureError::UnknownKeyType(type_url.to_string())),
        }
    }

    /// Create from a Protobuf Any
    pub fn from_any(any: &TxMessage) -> Result<Self, SignatureError> {
        let proto = PubKeyProto::decode(any.value.as_slice())
            .map_err(|e| SignatureError::InvalidKey(e.to_string()))?;
        Self::from_raw(&any.type_url, &proto.key)
    }

    /// Convert to a Protobuf Any
    pub fn to_any(&self) -> TxMessage {
        TxMessage {
            type_url: self.type_url().to_string(),
            value: PubKeyProto {
                key: self.to_bytes(),
            }
            .encode_to_vec(),
        }
    }

    /// Verify a signature over `message`
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), SignatureError> {
        verify_signature(self, message, signature)
    }
}

/// Signing capability held by a transaction signer.
///
/// Implementations keep their key material private; the signing stack only
/// ever asks for the public key and for signatures over sign bytes.
pub trait PrivKey: Send + Sync {
    /// Public key matching this private key
    fn pub_key(&self) -> PublicKey;

    /// Sign `message`, returning the raw signature bytes
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignatureError>;
}

enum PrivateKeyInner {
    Secp256k1(Secp256k1PrivKey),
    Ed25519(Ed25519PrivKey),
}

/// Owned private key. Not `Clone`, and its `Debug` output never contains key
/// material.
pub struct PrivateKey(PrivateKeyInner);

impl PrivateKey {
    pub fn generate_secp256k1() -> Self {
        Self(PrivateKeyInner::Secp256k1(Secp256k1PrivKey::random(
            &mut OsRng,
        )))
    }

    pub fn generate_ed25519() -> Self {
        Self(PrivateKeyInner::Ed25519(Ed25519PrivKey::from_bytes(
            &rand::random::<[u8; 32]>(),
        )))
    }

    /// Load a secp256k1 key from its 32-byte scalar
    pub fn from_secp256k1_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        let key = Secp256k1PrivKey::from_slice(bytes)
            .map_err(|e| SignatureError::InvalidKey(e.to_string()))?;
        Ok(Self(PrivateKeyInner::Secp256k1(key)))
    }

    /// Load an ed25519 key from its 32-byte seed
    pub fn from_ed25519_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        let seed: [u8; 32] = bytes
            .try_into()
            .map_err(|_| SignatureError::InvalidKey("invalid ed25519 seed length".into()))?;
        Ok(Self(PrivateKeyInner::Ed25519(Ed25519PrivKey::from_bytes(
            &seed,
        ))))
    }

    fn algorithm(&self) -> &'static str {
        match &self.0 {
            PrivateKeyInner::Secp256k1(_) => "secp256k1",
            PrivateKeyInner::Ed25519(_) => "ed25519",
        }
    }
}

impl PrivKey for PrivateKey {
    fn pub_key(&self) -> PublicKey {
        match &self.0 {
            PrivateKeyInner::Secp256k1(key) => PublicKey::Secp256k1(*key.verifying_key()),
            PrivateKeyInner::Ed25519(key) => PublicKey::Ed25519(key.verifying_key()),
        }
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignatureError> {
        match &self.0 {
            PrivateKeyInner::Secp256k1(key) => {
                // SHA-256 prehash, RFC 6979 nonce, 64-byte r||s
                let sig: k256::ecdsa::Signature = key
                    .try_sign(message)
                    .map_err(|e| SignatureError::SigningFailed(e.to_string()))?;
                Ok(sig.to_bytes().to_vec())
            }
            PrivateKeyInner::Ed25519(key) => {
                let sig: ed25519_dalek::Signature = key
                    .try_sign(message)
                    .map_err(|e| SignatureError::SigningFailed(e.to_string()))?;
                Ok(sig.to_bytes().to_vec())
            }
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("algorithm", &self.algorithm())
            .field("address", &self.pub_key().to_address())
            .finish_non_exhaustive()
    }
}

/// Verify a signature with a public key
pub fn verify_signature(
    key: &PublicKey,
    message: &[u8],
    signature: &[u8],
) -> Result<(), SignatureError> {
    match key {
        PublicKey::Secp256k1(k) => {
            let sig = k256::ecdsa::Signature::from_slice(signature)
                .map_err(|_| SignatureError::VerificationFailed)?;
            k.verify(message, &sig)
                .map_err(|_| SignatureError::VerificationFailed)
        }
        PublicKey::Ed25519(k) => {
            let sig = ed25519_dalek::Signature::from_slice(signature)
                .map_err(|_| SignatureError::VerificationFailed)?;
            k.verify(message, &sig)
                .map_err(|_| SignatureError::VerificationFailed)
        }
    }
}

// Custom serialization for PublicKey
impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        struct PublicKeyData {
            #[serde(rename = "type")]
            key_type: &'static str,
            value: String,
        }

        PublicKeyData {
            key_type: self.type_url(),
            value: general_purpose::STANDARD.encode(self.to_bytes()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct PublicKeyData {
            #[serde(rename = "type")]
            key_type: String,
            value: String,
        }

        let data = PublicKeyData::deserialize(deserializer)?;
        let bytes = general_purpose::STANDARD
            .decode(&data.value)
            .map_err(serde::de::Error::custom)?;

        PublicKey::from_raw(&data.key_type, &bytes).map_err(serde::de::Error::custom)
    }
}
