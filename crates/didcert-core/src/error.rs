/// Core type errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid DID format: {0}")]
    InvalidDid(String),
}
