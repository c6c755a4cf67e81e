//! Address types for gridway

use bech32::{Bech32, Hrp};
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Human readable part used when an address is displayed
pub const ACCOUNT_ADDRESS_PREFIX: &str = "cosmos";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid bech32 prefix: {0}")]
    InvalidPrefix(String),

    #[error("bech32 decode failed: {0}")]
    Decode(String),

    #[error("invalid address length: expected 20, got {0}")]
    InvalidLength(usize),
}

/// Account address - 20 bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccAddress([u8; 20]);

impl AccAddress {
    /// Create an address from a public key using the standard derivation
    /// ripemd160(sha256(pubkey_bytes))
    pub fn from_pubkey(pubkey_bytes: &[u8]) -> Self {
        let sha256_hash = Sha256::digest(pubkey_bytes);
        let ripemd160_hash = Ripemd160::digest(sha256_hash);
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&ripemd160_hash);
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Convert to Bech32 string with the given prefix
    pub fn to_bech32(&self, hrp_str: &str) -> Result<String, AddressError> {
        let hrp = Hrp::parse(hrp_str).map_err(|e| AddressError::InvalidPrefix(e.to_string()))?;
        bech32::encode::<Bech32>(hrp, &self.0).map_err(|e| AddressError::Decode(e.to_string()))
    }

    /// Parse from Bech32 string, returning the prefix alongside the address
    pub fn from_bech32(s: &str) -> Result<(String, Self), AddressError> {
        let (hrp, data) = bech32::decode(s).map_err(|e| AddressError::Decode(e.to_string()))?;
        if data.len() != 20 {
            return Err(AddressError::InvalidLength(data.len()));
        }
        let mut addr_bytes = [0u8; 20];
        addr_bytes.copy_from_slice(&data);
        Ok((hrp.to_string(), Self(addr_bytes)))
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_bech32(ACCOUNT_ADDRESS_PREFIX) {
            Ok(s) => f.write_str(&s),
            Err(_) => fmt::Debug::fmt(&self.0, f),
        }
    }
}

impl FromStr for AccAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, addr) = Self::from_bech32(s)?;
        Ok(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bech32_roundtrip() {
        let addr = AccAddress::from_pubkey(&[2u8; 33]);
        let encoded = addr.to_string();
        assert!(encoded.starts_with("cosmos1"));

        let parsed: AccAddress = encoded.parse().unwrap();
        assert_eq!(parsed, addr);
    }

    #[test]
    fn test_distinct_pubkeys_give_distinct_addresses() {
        assert_ne!(
            AccAddress::from_pubkey(&[1u8; 33]),
            AccAddress::from_pubkey(&[2u8; 33])
        );
    }

    #[test]
    fn test_invalid_bech32_rejected() {
        assert!("cosmos1notanaddress".parse::<AccAddress>().is_err());
        assert!(matches!(
            AccAddress::from_bytes([0u8; 20]).to_bech32("Not Valid"),
            Err(AddressError::InvalidPrefix(_))
        ));
    }
}
