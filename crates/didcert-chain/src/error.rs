/// Errors from ledger-facing operations.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid script hex: {0}")]
    InvalidScriptHex(#[from] hex::FromHexError),

    #[error("codec error: {0}")]
    Codec(#[from] didcert_codec::CodecError),

    #[error("transaction {0} does not carry a credential record")]
    NotACredentialRecord(String),

    #[error("missing transaction data: {0}")]
    MissingData(String),
}
