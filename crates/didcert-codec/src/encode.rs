//! Record encoding: a [`Credential`] and a target action into the ordered,
//! push-framed chunks an OP_RETURN script carries.

use didcert_core::{Credential, RecordAction};
use serde_json::Value;

use crate::claims;
use crate::error::CodecError;
use crate::field::write_field;
use crate::validate::{METHOD_MARKER, PROTOCOL_MARKER};

/// One push-framed element of an OP_RETURN script body. Chunks already
/// carry their length prefix; the script assembler only prepends the
/// opcode and concatenates.
pub type ScriptChunk = Vec<u8>;

/// Encode a record creating a new credential:
/// markers, `C`, type code, expiration, claim payload.
pub fn encode_create(credential: &Credential) -> Result<Vec<ScriptChunk>, CodecError> {
    let expiration = required_expiration(credential)?;
    let payload = claim_payload(credential)?;

    let mut chunks = header_chunks(credential, RecordAction::Create)?;
    chunks.push(write_field(&expiration.to_le_bytes())?);
    chunks.push(write_field(payload.as_bytes())?);
    Ok(chunks)
}

/// Encode a record updating an existing credential:
/// markers, `U`, type code, reference id, expiration, claim payload.
pub fn encode_update(credential: &Credential) -> Result<Vec<ScriptChunk>, CodecError> {
    let reference = required_reference(credential)?;
    let expiration = required_expiration(credential)?;
    let payload = claim_payload(credential)?;

    let mut chunks = header_chunks(credential, RecordAction::Update)?;
    chunks.push(write_field(reference.as_bytes())?);
    chunks.push(write_field(&expiration.to_le_bytes())?);
    chunks.push(write_field(payload.as_bytes())?);
    Ok(chunks)
}

/// Encode a record deleting an existing credential:
/// markers, `D`, type code, reference id.
pub fn encode_delete(credential: &Credential) -> Result<Vec<ScriptChunk>, CodecError> {
    let reference = required_reference(credential)?;

    let mut chunks = header_chunks(credential, RecordAction::Delete)?;
    chunks.push(write_field(reference.as_bytes())?);
    Ok(chunks)
}

/// The chunks every record starts with: both markers, the action letter,
/// and the validated type code.
fn header_chunks(
    credential: &Credential,
    action: RecordAction,
) -> Result<Vec<ScriptChunk>, CodecError> {
    let type_code = credential.credential_type_code.as_str();
    if type_code.len() != 4 {
        return Err(CodecError::InvalidTypeCode(type_code.to_string()));
    }
    Ok(vec![
        write_field(&PROTOCOL_MARKER)?,
        write_field(&METHOD_MARKER)?,
        write_field(&[action.code()])?,
        write_field(type_code.as_bytes())?,
    ])
}

fn required_reference(credential: &Credential) -> Result<&str, CodecError> {
    credential
        .reference_id
        .as_deref()
        .ok_or(CodecError::MissingField("reference_id"))
}

fn required_expiration(credential: &Credential) -> Result<i32, CodecError> {
    credential
        .expiration_block
        .ok_or(CodecError::MissingField("expiration_block"))
}

/// Serialize the claim payload in the shape `value_notation` selects.
fn claim_payload(credential: &Credential) -> Result<String, CodecError> {
    let (keys, values) = resolve_claims(credential)?;
    if credential.value_notation {
        Ok(claims::to_positional_form(&values))
    } else {
        Ok(claims::to_object_form(&keys, &values))
    }
}

/// Resolve the ordered claim keys and values for serialization.
///
/// Explicitly supplied claim keys win; otherwise the claims map's own
/// insertion order is used. Every resolved key must map to a defined,
/// non-empty value.
fn resolve_claims(credential: &Credential) -> Result<(Vec<String>, Vec<Value>), CodecError> {
    let keys: Vec<String> = if credential.claim_keys.is_empty() {
        // TODO: take key order from a credential type registry for typed
        // records once one exists.
        credential.claims.keys().cloned().collect()
    } else {
        credential.claim_keys.clone()
    };

    let mut values = Vec::with_capacity(keys.len());
    for key in &keys {
        match credential.claims.get(key) {
            Some(value) if !is_empty_value(value) => values.push(value.clone()),
            _ => return Err(CodecError::UnknownClaimKey(key.clone())),
        }
    }
    Ok((keys, values))
}

/// A claim value must be defined and non-empty to be serialized.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
