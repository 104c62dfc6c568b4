use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::action::RecordAction;

/// Type code reserved for untyped/custom credential records.
pub const UNTYPED_TYPE_CODE: &str = "0000";

/// A credential record as the wire format carries it.
///
/// Built by callers for submission or produced by the record decoder.
/// The codec never mutates one: encoding derives bytes as a pure function
/// of the record and the target action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    /// Action the record performs.
    pub action: RecordAction,
    /// Four-character credential type code; [`UNTYPED_TYPE_CODE`] means
    /// untyped.
    pub credential_type_code: String,
    /// Link to a prior record; carried by update and delete records.
    pub reference_id: Option<String>,
    /// Block height after which the credential is void; carried by create
    /// and update records.
    pub expiration_block: Option<i32>,
    /// Claims about the subject, keyed by claim name.
    pub claims: Map<String, Value>,
    /// Canonical claim order for serialization. Empty means the claims
    /// map's own insertion order is used at encode time.
    pub claim_keys: Vec<String>,
    /// Claim values in `claim_keys` order, as read off the wire.
    pub claim_values: Vec<Value>,
    /// Serialize the claim payload positionally (`true`) or as a JSON
    /// object (`false`). Decode detects the shape from the payload itself,
    /// so this flag only steers the encode direction.
    pub value_notation: bool,
}

impl Credential {
    /// Build a record creating a new credential.
    pub fn create(
        credential_type_code: impl Into<String>,
        expiration_block: i32,
        claims: Map<String, Value>,
    ) -> Self {
        Self {
            action: RecordAction::Create,
            credential_type_code: credential_type_code.into(),
            reference_id: None,
            expiration_block: Some(expiration_block),
            claims,
            claim_keys: Vec::new(),
            claim_values: Vec::new(),
            value_notation: false,
        }
    }

    /// Build an untyped record creating a new credential.
    pub fn create_untyped(expiration_block: i32, claims: Map<String, Value>) -> Self {
        Self::create(UNTYPED_TYPE_CODE, expiration_block, claims)
    }

    /// Build a record updating the credential written under `reference_id`.
    pub fn update(
        reference_id: impl Into<String>,
        credential_type_code: impl Into<String>,
        expiration_block: i32,
        claims: Map<String, Value>,
    ) -> Self {
        Self {
            action: RecordAction::Update,
            credential_type_code: credential_type_code.into(),
            reference_id: Some(reference_id.into()),
            expiration_block: Some(expiration_block),
            claims,
            claim_keys: Vec::new(),
            claim_values: Vec::new(),
            value_notation: false,
        }
    }

    /// Build a record deleting the credential written under `reference_id`.
    pub fn delete(
        reference_id: impl Into<String>,
        credential_type_code: impl Into<String>,
    ) -> Self {
        Self {
            action: RecordAction::Delete,
            credential_type_code: credential_type_code.into(),
            reference_id: Some(reference_id.into()),
            expiration_block: None,
            claims: Map::new(),
            claim_keys: Vec::new(),
            claim_values: Vec::new(),
            value_notation: false,
        }
    }

    /// Fix the claim serialization order explicitly.
    pub fn with_claim_keys(mut self, keys: Vec<String>) -> Self {
        self.claim_keys = keys;
        self
    }

    /// Serialize claims positionally instead of as an object.
    pub fn with_positional_claims(mut self) -> Self {
        self.value_notation = true;
        self
    }

    /// Whether the credential is still live at `height`.
    ///
    /// A record without an expiration (deletes) is never live.
    pub fn is_valid_at_height(&self, height: i32) -> bool {
        self.expiration_block
            .map(|expiration| height <= expiration)
            .unwrap_or(false)
    }
}
