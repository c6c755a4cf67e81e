//! Mutable transaction builder

use crate::{
    error::SigningError,
    signature::SignatureV2,
    tx::Tx,
};
use gridway_types::{AccAddress, FeeAmount, ModeInfo, SdkMsg, SignerInfo, TxMessage};
use tracing::trace;

/// Builds an unsigned transaction and accepts its signatures.
///
/// Messages are encoded as soon as they are set, so a builder is plain data
/// and can be cloned freely.
#[derive(Debug, Clone, Default)]
pub struct TxBuilder {
    tx: Tx,
}

impl TxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the messages and recompute the declared signer list.
    ///
    /// Any previously installed signatures are dropped, since they covered a
    /// different body.
    pub fn set_msgs(&mut self, msgs: &[&dyn SdkMsg]) -> Result<(), SigningError> {
        let mut signers: Vec<AccAddress> = Vec::new();
        let mut messages = Vec::with_capacity(msgs.len());

        for msg in msgs {
            msg.validate_basic()?;
            for signer in msg.get_signers()? {
                if !signers.contains(&signer) {
                    signers.push(signer);
                }
            }
            messages.push(TxMessage {
                type_url: msg.type_url().to_string(),
                value: msg.encode(),
            });
        }

        trace!(messages = messages.len(), signers = signers.len(), "set messages");

        self.tx.raw.body.messages = messages;
        self.tx.raw.auth_info.signer_infos.clear();
        self.tx.raw.signatures.clear();
        self.tx.signers = signers;
        Ok(())
    }

    pub fn set_memo(&mut self, memo: impl Into<String>) {
        self.tx.raw.body.memo = memo.into();
    }

    pub fn set_fee_amount(&mut self, amount: Vec<FeeAmount>) {
        self.tx.raw.auth_info.fee.amount = amount;
    }

    pub fn set_gas_limit(&mut self, gas_limit: u64) {
        self.tx.raw.auth_info.fee.gas_limit = gas_limit;
    }

    pub fn set_fee_payer(&mut self, payer: AccAddress) {
        self.tx.raw.auth_info.fee.payer = payer.to_string();
    }

    pub fn set_fee_granter(&mut self, granter: AccAddress) {
        self.tx.raw.auth_info.fee.granter = granter.to_string();
    }

    pub fn set_timeout_height(&mut self, height: u64) {
        self.tx.raw.body.timeout_height = height;
    }

    /// Install the full signature list, replacing any existing one.
    ///
    /// Entries must line up one-to-one with the declared signers: entry `i`
    /// must carry the public key of signer `i`. On error the builder is left
    /// untouched.
    pub fn set_signatures(&mut self, signatures: Vec<SignatureV2>) -> Result<(), SigningError> {
        let declared = &self.tx.signers;
        if signatures.len() != declared.len() {
            return Err(SigningError::SignatureCountMismatch {
                expected: declared.len(),
                actual: signatures.len(),
            });
        }

        for (index, (sig, expected)) in signatures.iter().zip(declared).enumerate() {
            let actual = sig.public_key.to_address();
            if actual != *expected {
                return Err(SigningError::SignerMismatch {
                    index,
                    expected: *expected,
                    actual,
                });
            }
        }

        let mut signer_infos = Vec::with_capacity(signatures.len());
        let mut raw_signatures = Vec::with_capacity(signatures.len());
        for sig in signatures {
            signer_infos.push(SignerInfo {
                public_key: Some(sig.public_key.to_any()),
                mode_info: ModeInfo::single(sig.data.sign_mode()),
                sequence: sig.sequence,
            });
            raw_signatures.push(sig.data.signature().to_vec());
        }

        self.tx.raw.auth_info.signer_infos = signer_infos;
        self.tx.raw.signatures = raw_signatures;
        Ok(())
    }

    /// Current transaction view
    pub fn get_tx(&self) -> &Tx {
        &self.tx
    }

    pub fn into_tx(self) -> Tx {
        self.tx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::SignatureData;
    use gridway_crypto::{PrivKey, PrivateKey};
    use gridway_types::{SignMode, TestMsg};

    fn keys(n: usize) -> Vec<PrivateKey> {
        (0..n).map(|_| PrivateKey::generate_secp256k1()).collect()
    }

    fn addresses(keys: &[PrivateKey]) -> Vec<AccAddress> {
        keys.iter().map(|k| k.pub_key().to_address()).collect()
    }

    #[test]
    fn test_declared_signers_are_ordered_and_deduplicated() {
        let k = keys(3);
        let addrs = addresses(&k);
        let first = TestMsg::new(&[addrs[1], addrs[0]]);
        let second = TestMsg::new(&[addrs[0], addrs[2], addrs[1]]);

        let mut builder = TxBuilder::new();
        builder.set_msgs(&[&first, &second]).unwrap();

        assert_eq!(builder.get_tx().signers(), &[addrs[1], addrs[0], addrs[2]]);
        assert_eq!(builder.get_tx().body().messages.len(), 2);
        assert_eq!(builder.get_tx().body().messages[0].type_url, TestMsg::TYPE_URL);
    }

    #[test]
    fn test_set_msgs_rejects_invalid_message() {
        let empty = TestMsg::new(&[]);
        let mut builder = TxBuilder::new();
        let err = builder.set_msgs(&[&empty]).unwrap_err();
        assert!(matches!(err, SigningError::InvalidMsg(_)));
    }

    #[test]
    fn test_set_signatures_installs_aligned_entries() {
        let k = keys(2);
        let addrs = addresses(&k);
        let msg = TestMsg::new(&addrs);
        let mut builder = TxBuilder::new();
        builder.set_msgs(&[&msg]).unwrap();

        let sigs = vec![
            SignatureV2::placeholder(k[0].pub_key(), SignMode::Direct, 3),
            SignatureV2 {
                public_key: k[1].pub_key(),
                data: SignatureData::Single {
                    sign_mode: SignMode::LegacyAminoJson,
                    signature: vec![1, 2, 3],
                },
                sequence: 8,
            },
        ];
        builder.set_signatures(sigs.clone()).unwrap();

        let tx = builder.get_tx();
        assert_eq!(tx.signatures(), &[Vec::<u8>::new(), vec![1, 2, 3]]);
        let infos = &tx.auth_info().signer_infos;
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].public_key, Some(k[0].pub_key().to_any()));
        assert_eq!(infos[0].sequence, 3);
        assert_eq!(infos[1].mode_info, ModeInfo::single(SignMode::LegacyAminoJson));
        assert_eq!(tx.signatures_v2().unwrap(), sigs);
    }

    #[test]
    fn test_set_signatures_count_mismatch_leaves_builder_unchanged() {
        let k = keys(3);
        let addrs = addresses(&k);
        let msg = TestMsg::new(&addrs);
        let mut builder = TxBuilder::new();
        builder.set_msgs(&[&msg]).unwrap();
        let before = builder.get_tx().clone();

        let sigs = k[..2]
            .iter()
            .map(|key| SignatureV2::placeholder(key.pub_key(), SignMode::Direct, 0))
            .collect();
        let err = builder.set_signatures(sigs).unwrap_err();

        assert!(matches!(
            err,
            SigningError::SignatureCountMismatch {
                expected: 3,
                actual: 2
            }
        ));
        assert_eq!(builder.get_tx(), &before);
    }

    #[test]
    fn test_set_signatures_rejects_misordered_entries() {
        let k = keys(2);
        let addrs = addresses(&k);
        let msg = TestMsg::new(&addrs);
        let mut builder = TxBuilder::new();
        builder.set_msgs(&[&msg]).unwrap();

        let sigs = vec![
            SignatureV2::placeholder(k[1].pub_key(), SignMode::Direct, 0),
            SignatureV2::placeholder(k[0].pub_key(), SignMode::Direct, 0),
        ];
        let err = builder.set_signatures(sigs).unwrap_err();

        match err {
            SigningError::SignerMismatch {
                index,
                expected,
                actual,
            } => {
                assert_eq!(index, 0);
                assert_eq!(expected, addrs[0]);
                assert_eq!(actual, addrs[1]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(builder.get_tx().auth_info().signer_infos.is_empty());
    }

    #[test]
    fn test_set_msgs_clears_signatures() {
        let k = keys(1);
        let addrs = addresses(&k);
        let msg = TestMsg::new(&addrs);
        let mut builder = TxBuilder::new();
        builder.set_msgs(&[&msg]).unwrap();
        builder
            .set_signatures(vec![SignatureV2::placeholder(
                k[0].pub_key(),
                SignMode::Direct,
                0,
            )])
            .unwrap();

        builder.set_msgs(&[&msg]).unwrap();
        assert!(builder.get_tx().signatures().is_empty());
        assert!(builder.get_tx().auth_info().signer_infos.is_empty());
    }

    #[test]
    fn test_fee_and_body_setters() {
        let k = keys(2);
        let addrs = addresses(&k);
        let mut builder = TxBuilder::new();
        builder.set_memo("hello");
        builder.set_timeout_height(42);
        builder.set_gas_limit(200_000);
        builder.set_fee_amount(vec![FeeAmount::new("stake", 1000)]);
        builder.set_fee_payer(addrs[0]);
        builder.set_fee_granter(addrs[1]);

        let tx = builder.into_tx();
        assert_eq!(tx.body().memo, "hello");
        assert_eq!(tx.body().timeout_height, 42);
        let fee = &tx.auth_info().fee;
        assert_eq!(fee.gas_limit, 200_000);
        assert_eq!(fee.amount[0].amount, "1000");
        assert_eq!(fee.payer, addrs[0].to_string());
        assert_eq!(fee.granter, addrs[1].to_string());
    }
}
