use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::credential::Credential;
use crate::did::Did;

/// Context URI establishing the credential vocabulary.
pub const CREDENTIAL_CONTEXT: &str = "https://www.w3.org/2018/credentials/v1";

/// Base type every issued credential carries.
pub const BASE_CREDENTIAL_TYPE: &str = "VerifiableCredential";

/// A credential record merged with the transaction it was mined in.
///
/// The wire format only carries the [`Credential`] record; issuer and
/// subject addresses, the issuance date, the block height, and the
/// transaction hash come from the transaction itself and are merged in by
/// the resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedCredential {
    /// Context URIs for the credential vocabulary.
    pub context: Vec<String>,
    /// Credential identifier URI, when one was assigned.
    pub id: Option<String>,
    /// Credential type list, always led by [`BASE_CREDENTIAL_TYPE`].
    #[serde(rename = "type")]
    pub credential_type: Vec<String>,
    /// DID of the issuer, derived from the first input's coin address.
    pub issuer: Option<Did>,
    /// DID of the subject, derived from the second output's address.
    pub subject: Option<Did>,
    /// Raw issuer ledger address.
    pub issuer_address: Option<String>,
    /// Raw subject ledger address.
    pub subject_address: Option<String>,
    /// Block timestamp of the containing transaction.
    pub issuance_date: Option<DateTime<Utc>>,
    /// Height of the block containing the record.
    pub height: Option<i32>,
    /// Hash of the containing transaction.
    pub hash: Option<String>,
    /// The decoded wire record.
    pub record: Credential,
}

impl IssuedCredential {
    /// Wrap a decoded record with no transaction metadata attached yet.
    pub fn new(record: Credential) -> Self {
        Self {
            context: vec![CREDENTIAL_CONTEXT.to_string()],
            id: None,
            credential_type: vec![BASE_CREDENTIAL_TYPE.to_string()],
            issuer: None,
            subject: None,
            issuer_address: None,
            subject_address: None,
            issuance_date: None,
            height: None,
            hash: None,
            record,
        }
    }

    /// The `credentialSubject` block of the W3C projection.
    pub fn credential_subject(&self) -> Value {
        let mut subject = Map::new();
        if let Some(did) = &self.subject {
            subject.insert("id".to_string(), Value::String(did.uri().to_string()));
        }
        subject.insert(
            "claims".to_string(),
            Value::Object(self.record.claims.clone()),
        );
        if let Some(expiration) = self.record.expiration_block {
            subject.insert("expirationBlock".to_string(), expiration.into());
        }
        Value::Object(subject)
    }

    /// Minimal JSON projection restricted to the W3C credential fields:
    /// context, type, id, issuer, issuanceDate, credentialSubject.
    /// Absent fields are omitted rather than serialized as null.
    pub fn to_presentation(&self) -> Value {
        let mut presentation = Map::new();
        presentation.insert("context".to_string(), self.context.clone().into());
        presentation.insert("type".to_string(), self.credential_type.clone().into());
        if let Some(id) = &self.id {
            presentation.insert("id".to_string(), Value::String(id.clone()));
        }
        if let Some(issuer) = &self.issuer {
            presentation.insert("issuer".to_string(), Value::String(issuer.uri().to_string()));
        }
        if let Some(date) = self.issuance_date {
            presentation.insert(
                "issuanceDate".to_string(),
                Value::String(date.to_rfc3339()),
            );
        }
        presentation.insert("credentialSubject".to_string(), self.credential_subject());
        Value::Object(presentation)
    }

    /// Whether the credential is still live at `height`.
    pub fn is_valid_at_height(&self, height: i32) -> bool {
        self.record.is_valid_at_height(height)
    }
}
