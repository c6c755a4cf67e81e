//! Per-signer context bound into the sign bytes

use gridway_crypto::PublicKey;
use gridway_types::AccAddress;
use serde::{Deserialize, Serialize};

/// Chain, account and position-in-history of one signer for one signing
/// attempt.
///
/// `account_number` is stable for the lifetime of an account; `sequence`
/// is the account's next unused sequence and must be fetched fresh for every
/// attempt. A stale sequence is not detected here: the chain rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerData {
    pub chain_id: String,
    pub account_number: u64,
    pub sequence: u64,
    /// Key of the signer, used to locate its slot in the declared signer list
    pub public_key: PublicKey,
}

impl SignerData {
    pub fn new(
        chain_id: impl Into<String>,
        account_number: u64,
        sequence: u64,
        public_key: PublicKey,
    ) -> Self {
        Self {
            chain_id: chain_id.into(),
            account_number,
            sequence,
            public_key,
        }
    }

    pub fn address(&self) -> AccAddress {
        self.public_key.to_address()
    }
}
