//! Didcert Chain — the ledger-facing side of the cert DID method:
//! assembling OP_RETURN scripts from encoded record chunks, fetching
//! transactions from an indexing service, and resolving mined
//! transactions back into issued credentials.

pub mod client;
pub mod error;
pub mod resolver;
pub mod script;
pub mod source;

pub use client::HttpTransactionSource;
pub use error::ChainError;
pub use resolver::CredentialResolver;
pub use script::{assemble_op_return, OP_RETURN};
pub use source::{TransactionRecord, TransactionSource};
