//! Transaction lookup abstraction over a ledger indexing service.

use async_trait::async_trait;

use crate::error::ChainError;

/// A transaction reduced to what credential resolution needs: the record
/// script plus the addresses and chain position merged into the decoded
/// credential.
#[derive(Debug, Clone)]
pub struct TransactionRecord {
    /// Hex-encoded script of the first output, the OP_RETURN carrier.
    pub record_script_hex: String,
    /// Address of the coin spent by the first input.
    pub issuer_address: Option<String>,
    /// Address of the second output.
    pub subject_address: Option<String>,
    /// Unix timestamp of the containing block.
    pub time: i64,
    /// Height of the containing block.
    pub height: i32,
}

/// Source of transactions and chain state, typically a remote indexer.
///
/// All retry and timeout policy belongs to implementations; callers see
/// a single fallible fetch.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetch a transaction by its hex-encoded hash.
    async fn transaction(&self, hash: &str) -> Result<TransactionRecord, ChainError>;

    /// Current best block height of the chain.
    async fn chain_height(&self) -> Result<i32, ChainError>;
}
