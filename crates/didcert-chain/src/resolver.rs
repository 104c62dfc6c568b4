//! Reassembling issued credentials from mined transactions.

use chrono::DateTime;

use didcert_codec::{decode_record_with_keys, is_protocol_record};
use didcert_core::{Did, IssuedCredential};

use crate::error::ChainError;
use crate::source::TransactionSource;

/// Leading hash characters used as a default reference id, so later
/// updates and deletes can link back to a create record that carries
/// none of its own.
const REFERENCE_ID_LEN: usize = 8;

/// Reads credential records back out of mined transactions.
pub struct CredentialResolver<S> {
    source: S,
}

impl<S: TransactionSource> CredentialResolver<S> {
    /// Resolver over the given transaction source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch transaction `hash` and decode the credential it carries.
    ///
    /// Transaction metadata is merged into the result: issuer and subject
    /// DIDs derived from the addresses, the block timestamp as issuance
    /// date, the block height, and the transaction hash.
    pub async fn resolve(&self, hash: &str) -> Result<IssuedCredential, ChainError> {
        self.resolve_with_keys(hash, &[]).await
    }

    /// Like [`resolve`](Self::resolve), zipping positional claim payloads
    /// with `known_keys` from the record being updated.
    pub async fn resolve_with_keys(
        &self,
        hash: &str,
        known_keys: &[String],
    ) -> Result<IssuedCredential, ChainError> {
        let tx = self.source.transaction(hash).await?;
        let script = hex::decode(&tx.record_script_hex)?;
        if !is_protocol_record(&script) {
            return Err(ChainError::NotACredentialRecord(hash.to_string()));
        }
        let record = decode_record_with_keys(&script, known_keys)?;

        let mut issued = IssuedCredential::new(record);
        issued.issuer = tx.issuer_address.as_deref().map(Did::from_address);
        issued.subject = tx.subject_address.as_deref().map(Did::from_address);
        issued.issuer_address = tx.issuer_address;
        issued.subject_address = tx.subject_address;
        issued.issuance_date = DateTime::from_timestamp(tx.time, 0);
        issued.height = Some(tx.height);
        issued.hash = Some(hash.to_string());
        if issued.record.reference_id.is_none() {
            issued.record.reference_id = Some(hash.chars().take(REFERENCE_ID_LEN).collect());
        }

        tracing::info!(
            hash,
            action = %issued.record.action,
            height = tx.height,
            "credential resolved"
        );
        Ok(issued)
    }

    /// Whether `credential` is still live at the chain's current height.
    pub async fn is_currently_valid(
        &self,
        credential: &IssuedCredential,
    ) -> Result<bool, ChainError> {
        let height = self.source.chain_height().await?;
        Ok(credential.is_valid_at_height(height))
    }
}
