//! Test message with an explicit signer list
//!
//! Mirrors the `testdata.TestMsg` of the Cosmos SDK: the message carries no
//! payload beyond the bech32 addresses that must sign it, which makes it the
//! simplest way to declare an arbitrary signer set on a transaction.

use crate::{address::AccAddress, error::SdkError, tx::SdkMsg};
use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct TestMsg {
    #[prost(string, repeated, tag = "1")]
    pub signers: Vec<String>,
}

impl TestMsg {
    pub const TYPE_URL: &'static str = "/testdata.TestMsg";

    pub fn new(signers: &[AccAddress]) -> Self {
        Self {
            signers: signers.iter().map(ToString::to_string).collect(),
        }
    }
}

impl SdkMsg for TestMsg {
    fn type_url(&self) -> &'static str {
        Self::TYPE_URL
    }

    fn validate_basic(&self) -> Result<(), SdkError> {
        if self.signers.is_empty() {
            return Err(SdkError::NoSigners(Self::TYPE_URL.to_string()));
        }
        self.get_signers().map(|_| ())
    }

    fn get_signers(&self) -> Result<Vec<AccAddress>, SdkError> {
        self.signers
            .iter()
            .map(|s| s.parse::<AccAddress>().map_err(SdkError::from))
            .collect()
    }

    fn encode(&self) -> Vec<u8> {
        self.encode_to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signers_roundtrip() {
        let a = AccAddress::from_pubkey(&[1u8; 33]);
        let b = AccAddress::from_pubkey(&[2u8; 33]);
        let msg = TestMsg::new(&[a, b]);

        assert!(msg.validate_basic().is_ok());
        assert_eq!(msg.get_signers().unwrap(), vec![a, b]);
    }

    #[test]
    fn test_empty_signers_rejected() {
        let msg = TestMsg { signers: vec![] };
        assert!(matches!(msg.validate_basic(), Err(SdkError::NoSigners(_))));
    }

    #[test]
    fn test_malformed_signer_rejected() {
        let msg = TestMsg {
            signers: vec!["not-an-address".to_string()],
        };
        assert!(matches!(
            msg.validate_basic(),
            Err(SdkError::InvalidAddress(_))
        ));
    }
}
