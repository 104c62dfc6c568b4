use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Decentralized identifier for the cert DID method.
/// Format: `did:cert:<address-payload>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Did(pub String);

impl Did {
    /// Create a DID from a full URI string.
    pub fn new(uri: String) -> Result<Self, CoreError> {
        if !uri.starts_with("did:cert:") {
            return Err(CoreError::InvalidDid(format!(
                "DID must start with 'did:cert:', got: {}",
                uri
            )));
        }
        if uri.len() == "did:cert:".len() {
            return Err(CoreError::InvalidDid(
                "DID has an empty address payload".to_string(),
            ));
        }
        Ok(Self(uri))
    }

    /// Derive a DID from a ledger address.
    ///
    /// Addresses arrive with a network prefix (`ecash:qq...`); the payload
    /// after the first colon becomes the DID identifier. An unprefixed
    /// address is used whole.
    pub fn from_address(address: &str) -> Self {
        let payload = address
            .split_once(':')
            .map(|(_, payload)| payload)
            .unwrap_or(address);
        Self(format!("did:cert:{}", payload))
    }

    /// The full DID URI.
    pub fn uri(&self) -> &str {
        &self.0
    }

    /// The address payload after the method prefix.
    pub fn address_payload(&self) -> Option<&str> {
        self.0.strip_prefix("did:cert:")
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
