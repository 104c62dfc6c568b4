//! Didcert Core — Fundamental types for the cert DID method: credential
//! records as the wire format carries them, record actions, DIDs derived
//! from ledger addresses, and the issued-credential view merged from
//! transaction metadata.

pub mod action;
pub mod credential;
pub mod did;
pub mod error;
pub mod issued;

pub use action::RecordAction;
pub use credential::{Credential, UNTYPED_TYPE_CODE};
pub use did::Did;
pub use error::CoreError;
pub use issued::{IssuedCredential, BASE_CREDENTIAL_TYPE, CREDENTIAL_CONTEXT};
