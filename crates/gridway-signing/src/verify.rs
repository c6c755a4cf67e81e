//! Verification of assembled transactions

use crate::{error::SigningError, signer_data::SignerData, tx::Tx, tx_config::TxConfig};
use tracing::debug;

/// Verify every signature on `tx`.
///
/// `signers` supplies the chain and account context for each declared
/// signer, in declared order.
pub fn verify_tx(
    tx_config: &TxConfig,
    tx: &Tx,
    signers: &[SignerData],
) -> Result<(), SigningError> {
    let declared = tx.signers();
    let signatures = tx.signatures_v2()?;

    if signatures.len() != declared.len() {
        return Err(SigningError::SignatureCountMismatch {
            expected: declared.len(),
            actual: signatures.len(),
        });
    }
    if signers.len() != declared.len() {
        return Err(SigningError::SignatureCountMismatch {
            expected: declared.len(),
            actual: signers.len(),
        });
    }

    let handler = tx_config.sign_mode_handler();
    for (index, ((sig, data), expected)) in signatures
        .iter()
        .zip(signers)
        .zip(declared)
        .enumerate()
    {
        let actual = data.address();
        if actual != *expected {
            return Err(SigningError::SignerMismatch {
                index,
                expected: *expected,
                actual,
            });
        }
        handler.verify_signature(data, sig, tx)?;
        debug!(index, signer = %actual, "signature verified");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TxBuilder, coordinator::SigningCoordinator, error::ErrorKind};
    use gridway_crypto::{PrivKey, PrivateKey};
    use gridway_types::TestMsg;

    fn signed(config: &TxConfig, keys: &[PrivateKey], seqs: &[u64]) -> Tx {
        let privs: Vec<&dyn PrivKey> = keys.iter().map(|k| k as &dyn PrivKey).collect();
        let addrs: Vec<_> = keys.iter().map(|k| k.pub_key().to_address()).collect();
        let msg = TestMsg::new(&addrs);
        let mut builder = TxBuilder::new();
        builder.set_msgs(&[&msg]).unwrap();
        let acc_nums: Vec<u64> = (0..keys.len() as u64).collect();
        SigningCoordinator::new(config)
            .create_signed_tx(&builder, &privs, &acc_nums, seqs, "test-chain")
            .unwrap()
            .0
    }

    fn signer_data(keys: &[PrivateKey], seqs: &[u64]) -> Vec<SignerData> {
        keys.iter()
            .zip(seqs)
            .enumerate()
            .map(|(i, (k, seq))| SignerData::new("test-chain", i as u64, *seq, k.pub_key()))
            .collect()
    }

    #[test]
    fn test_verify_signed_tx() {
        let config = TxConfig::default();
        let keys = vec![
            PrivateKey::generate_secp256k1(),
            PrivateKey::generate_ed25519(),
        ];
        let tx = signed(&config, &keys, &[4, 9]);
        verify_tx(&config, &tx, &signer_data(&keys, &[4, 9])).unwrap();
    }

    #[test]
    fn test_wrong_chain_fails() {
        let config = TxConfig::default();
        let keys = vec![PrivateKey::generate_secp256k1()];
        let tx = signed(&config, &keys, &[0]);

        let mut data = signer_data(&keys, &[0]);
        data[0].chain_id = "other-chain".to_string();
        let err = verify_tx(&config, &tx, &data).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::VerificationFailure);
    }

    #[test]
    fn test_wrong_account_number_fails() {
        let config = TxConfig::default();
        let keys = vec![PrivateKey::generate_secp256k1()];
        let tx = signed(&config, &keys, &[0]);

        let mut data = signer_data(&keys, &[0]);
        data[0].account_number = 1;
        assert!(matches!(
            verify_tx(&config, &tx, &data),
            Err(SigningError::Verification { .. })
        ));
    }

    #[test]
    fn test_stale_sequence_fails() {
        let config = TxConfig::default();
        let keys = vec![PrivateKey::generate_secp256k1()];
        let tx = signed(&config, &keys, &[3]);

        let err = verify_tx(&config, &tx, &signer_data(&keys, &[2])).unwrap_err();
        assert!(matches!(
            err,
            SigningError::InvalidSequence {
                expected: 2,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_signer_data_out_of_order() {
        let config = TxConfig::default();
        let keys = vec![
            PrivateKey::generate_secp256k1(),
            PrivateKey::generate_secp256k1(),
        ];
        let tx = signed(&config, &keys, &[0, 0]);

        let mut data = signer_data(&keys, &[0, 0]);
        data.swap(0, 1);
        let err = verify_tx(&config, &tx, &data).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_unsigned_tx_fails() {
        let config = TxConfig::default();
        let key = PrivateKey::generate_secp256k1();
        let msg = TestMsg::new(&[key.pub_key().to_address()]);
        let mut builder = TxBuilder::new();
        builder.set_msgs(&[&msg]).unwrap();

        let err = verify_tx(
            &config,
            builder.get_tx(),
            &[SignerData::new("test-chain", 0, 0, key.pub_key())],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SigningError::SignatureCountMismatch {
                expected: 1,
                actual: 0
            }
        ));
    }
}
