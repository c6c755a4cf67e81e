//! Two-round multi-signer signing
//!
//! Round one installs a placeholder entry for every signer so the auth info
//! already carries the final signer set (keys, modes, sequences). Round two
//! computes each signer's sign bytes against that fixed transaction, signs
//! them, and installs the real entries in a single call. Signing and
//! installing never interleave, so no signer's bytes depend on another
//! signer's signature.

use crate::{
    builder::TxBuilder,
    error::SigningError,
    signature::{SignatureData, SignatureV2},
    signer_data::SignerData,
    tx::Tx,
    tx_config::TxConfig,
};
use gridway_crypto::PrivKey;
use gridway_types::SignMode;
use tracing::{debug, info, instrument, trace};

/// Sign the transaction held by `builder` for one signer.
///
/// The builder must already carry the signer set (see
/// [`SigningCoordinator`]); it is only read.
pub fn sign_with_priv_key(
    mode: SignMode,
    signer_data: &SignerData,
    builder: &TxBuilder,
    priv_key: &dyn PrivKey,
    tx_config: &TxConfig,
    sequence: u64,
) -> Result<SignatureV2, SigningError> {
    let sign_bytes = tx_config
        .sign_mode_handler()
        .get_sign_bytes(mode, signer_data, builder.get_tx())?;

    let signature = priv_key.sign(&sign_bytes).map_err(SigningError::Signing)?;
    let public_key = priv_key.pub_key();

    if tx_config.verify_signatures() {
        public_key
            .verify(&sign_bytes, &signature)
            .map_err(SigningError::Signing)?;
    }

    Ok(SignatureV2 {
        public_key,
        data: SignatureData::Single {
            sign_mode: mode,
            signature,
        },
        sequence,
    })
}

/// Drives the placeholder and final signing rounds
#[derive(Debug, Clone, Copy)]
pub struct SigningCoordinator<'a> {
    tx_config: &'a TxConfig,
}

/// Builder whose signer set has been fixed by placeholder entries
struct SignerSetFixed {
    builder: TxBuilder,
    mode: SignMode,
}

impl<'a> SigningCoordinator<'a> {
    pub fn new(tx_config: &'a TxConfig) -> Self {
        Self { tx_config }
    }

    /// Sign the transaction in `builder` with every key in `privs` and encode
    /// it.
    ///
    /// `privs`, `acc_nums` and `acc_seqs` are indexed by signer and must be
    /// given in the transaction's declared signer order. The caller's builder
    /// is left as it was; on error nothing is returned.
    #[instrument(skip_all, fields(chain_id = %chain_id, signers = privs.len()))]
    pub fn create_signed_tx(
        &self,
        builder: &TxBuilder,
        privs: &[&dyn PrivKey],
        acc_nums: &[u64],
        acc_seqs: &[u64],
        chain_id: &str,
    ) -> Result<(Tx, Vec<u8>), SigningError> {
        if privs.is_empty() {
            return Err(SigningError::NoSigners);
        }
        if privs.len() != acc_nums.len() || privs.len() != acc_seqs.len() {
            return Err(SigningError::SignerInputMismatch {
                privs: privs.len(),
                account_numbers: acc_nums.len(),
                sequences: acc_seqs.len(),
            });
        }

        let fixed = self.fix_signer_set(builder.clone(), privs, acc_seqs)?;
        debug!(mode = %fixed.mode, "signer set fixed");

        let signed = self.sign_all(fixed, privs, acc_nums, acc_seqs, chain_id)?;
        debug!("signatures installed");

        let tx = signed.into_tx();
        let tx_bytes = self.tx_config.tx_encoder().encode_tx(tx.raw())?;

        info!(bytes = tx_bytes.len(), "signed transaction");
        Ok((tx, tx_bytes))
    }

    fn fix_signer_set(
        &self,
        mut builder: TxBuilder,
        privs: &[&dyn PrivKey],
        acc_seqs: &[u64],
    ) -> Result<SignerSetFixed, SigningError> {
        let mode = self.tx_config.sign_mode_handler().default_mode();
        let placeholders = privs
            .iter()
            .zip(acc_seqs)
            .map(|(priv_key, seq)| SignatureV2::placeholder(priv_key.pub_key(), mode, *seq))
            .collect();

        builder.set_signatures(placeholders)?;
        Ok(SignerSetFixed { builder, mode })
    }

    fn sign_all(
        &self,
        fixed: SignerSetFixed,
        privs: &[&dyn PrivKey],
        acc_nums: &[u64],
        acc_seqs: &[u64],
        chain_id: &str,
    ) -> Result<TxBuilder, SigningError> {
        let SignerSetFixed { mut builder, mode } = fixed;

        let mut signatures = Vec::with_capacity(privs.len());
        for (index, priv_key) in privs.iter().enumerate() {
            let signer_data = SignerData::new(
                chain_id,
                acc_nums[index],
                acc_seqs[index],
                priv_key.pub_key(),
            );
            let sig = sign_with_priv_key(
                mode,
                &signer_data,
                &builder,
                *priv_key,
                self.tx_config,
                acc_seqs[index],
            )?;
            trace!(index, "signed");
            signatures.push(sig);
        }

        builder.set_signatures(signatures)?;
        Ok(builder)
    }
}
