use serde::{Deserialize, Serialize};
use std::fmt;

/// Action a credential record performs, selected by a single-letter code
/// on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordAction {
    /// Write a new credential.
    Create,
    /// Replace an existing credential, linked by reference id.
    Update,
    /// Revoke an existing credential, linked by reference id.
    Delete,
}

impl RecordAction {
    /// The action code byte carried on the wire.
    pub fn code(self) -> u8 {
        match self {
            Self::Create => b'C',
            Self::Update => b'U',
            Self::Delete => b'D',
        }
    }

    /// Parse a wire action code. Returns `None` for anything but C, U, D.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            b'C' => Some(Self::Create),
            b'U' => Some(Self::Update),
            b'D' => Some(Self::Delete),
            _ => None,
        }
    }

    /// Update and delete records link back to a prior record.
    pub fn requires_reference(self) -> bool {
        matches!(self, Self::Update | Self::Delete)
    }

    /// Create and update records carry an expiration and a claim payload.
    pub fn carries_claims(self) -> bool {
        matches!(self, Self::Create | Self::Update)
    }
}

impl fmt::Display for RecordAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "Create"),
            Self::Update => write!(f, "Update"),
            Self::Delete => write!(f, "Delete"),
        }
    }
}
