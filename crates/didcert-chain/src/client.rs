//! HTTP client for a badger.cash-style transaction indexing API.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ChainError;
use crate::source::{TransactionRecord, TransactionSource};

/// Default public indexer endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://ecash.badger.cash:8332";

/// [`TransactionSource`] backed by an HTTP indexing service.
#[derive(Debug, Clone)]
pub struct HttpTransactionSource {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct TxResponse {
    outputs: Vec<TxOutput>,
    #[serde(default)]
    inputs: Vec<TxInput>,
    time: i64,
    height: i32,
}

#[derive(Deserialize)]
struct TxOutput {
    script: String,
    address: Option<String>,
}

#[derive(Deserialize)]
struct TxInput {
    coin: Option<TxCoin>,
}

#[derive(Deserialize)]
struct TxCoin {
    address: Option<String>,
}

#[derive(Deserialize)]
struct ChainInfoResponse {
    chain: ChainTip,
}

#[derive(Deserialize)]
struct ChainTip {
    height: i32,
}

impl HttpTransactionSource {
    /// Client against the default public endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Client against a specific indexer endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpTransactionSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionSource for HttpTransactionSource {
    async fn transaction(&self, hash: &str) -> Result<TransactionRecord, ChainError> {
        let url = format!("{}/tx/{}", self.endpoint, hash);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let tx: TxResponse = response.json().await?;

        let record_script_hex = tx
            .outputs
            .first()
            .map(|output| output.script.clone())
            .ok_or_else(|| ChainError::MissingData("transaction has no outputs".to_string()))?;
        let issuer_address = tx
            .inputs
            .first()
            .and_then(|input| input.coin.as_ref())
            .and_then(|coin| coin.address.clone());
        let subject_address = tx.outputs.get(1).and_then(|output| output.address.clone());

        tracing::debug!(hash, height = tx.height, "transaction fetched");

        Ok(TransactionRecord {
            record_script_hex,
            issuer_address,
            subject_address,
            time: tx.time,
            height: tx.height,
        })
    }

    async fn chain_height(&self) -> Result<i32, ChainError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        let info: ChainInfoResponse = response.json().await?;
        Ok(info.chain.height)
    }
}
