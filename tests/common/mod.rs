//! Shared helpers for the end-to-end signing scenarios

#![allow(dead_code)]

use gridway_txsign::{AccAddress, PrivKey, PrivateKey, TestMsg, TxBuilder};

/// A signer with its on-chain ordering data
#[derive(Debug)]
pub struct TestAccount {
    pub account_number: u64,
    pub sequence: u64,
    pub priv_key: PrivateKey,
    pub address: AccAddress,
}

/// `n` fresh secp256k1 accounts with account numbers `0..n` and sequence 0
pub fn create_test_accounts(n: usize) -> Vec<TestAccount> {
    (0..n)
        .map(|i| {
            let priv_key = PrivateKey::generate_secp256k1();
            TestAccount {
                account_number: i as u64,
                sequence: 0,
                address: priv_key.pub_key().to_address(),
                priv_key,
            }
        })
        .collect()
}

/// Builder carrying one message that requires every account to sign
pub fn builder_for(accounts: &[TestAccount]) -> TxBuilder {
    let addresses: Vec<AccAddress> = accounts.iter().map(|a| a.address).collect();
    let msg = TestMsg::new(&addresses);
    let mut builder = TxBuilder::new();
    builder.set_msgs(&[&msg]).unwrap();
    builder.set_gas_limit(200_000);
    builder
}

pub fn privs(accounts: &[TestAccount]) -> Vec<&dyn PrivKey> {
    accounts.iter().map(|a| &a.priv_key as &dyn PrivKey).collect()
}

pub fn account_numbers(accounts: &[TestAccount]) -> Vec<u64> {
    accounts.iter().map(|a| a.account_number).collect()
}

pub fn sequences(accounts: &[TestAccount]) -> Vec<u64> {
    accounts.iter().map(|a| a.sequence).collect()
}
