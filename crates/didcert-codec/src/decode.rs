//! Record decoding: a marker-validated buffer into a structured
//! [`Credential`].

use didcert_core::{Credential, RecordAction};
use serde_json::Map;

use crate::claims;
use crate::error::CodecError;
use crate::field::read_field;
use crate::validate::MARKER_PREFIX_LEN;

/// Decode a credential record with no externally known claim keys.
///
/// Callers are expected to have checked
/// [`is_protocol_record`](crate::validate::is_protocol_record) first; the
/// decoder does not re-verify the markers, but every field read is
/// bounds-checked, so a truncated or foreign buffer fails with
/// [`CodecError::MalformedRecord`] rather than panicking.
pub fn decode_record(buf: &[u8]) -> Result<Credential, CodecError> {
    decode_record_with_keys(buf, &[])
}

/// Decode a credential record, zipping a positional claim payload with
/// `known_keys` (taken from the prior record being updated).
pub fn decode_record_with_keys(
    buf: &[u8],
    known_keys: &[String],
) -> Result<Credential, CodecError> {
    let mut offset = MARKER_PREFIX_LEN;

    let action_bytes = next_field(buf, &mut offset)?;
    let action = match action_bytes {
        [code] => RecordAction::from_code(*code),
        _ => None,
    }
    .ok_or_else(|| {
        CodecError::UnsupportedAction(String::from_utf8_lossy(action_bytes).into_owned())
    })?;

    let credential_type_code = utf8_field(next_field(buf, &mut offset)?, "credential type code")?;

    let reference_id = if action.requires_reference() {
        Some(utf8_field(next_field(buf, &mut offset)?, "reference id")?)
    } else {
        None
    };

    let mut expiration_block = None;
    let mut claim_keys = Vec::new();
    let mut claim_values = Vec::new();
    let mut claims_map = Map::new();

    if action.carries_claims() {
        let expiration_bytes: [u8; 4] =
            next_field(buf, &mut offset)?.try_into().map_err(|_| {
                CodecError::MalformedRecord("expiration field must be exactly 4 bytes".to_string())
            })?;
        expiration_block = Some(i32::from_le_bytes(expiration_bytes));

        let payload = utf8_field(next_field(buf, &mut offset)?, "claim payload")?;
        let (keys, values) = claims::from_payload(&payload, known_keys)?;
        for (key, value) in keys.iter().zip(values.iter()) {
            claims_map.insert(key.clone(), value.clone());
        }
        claim_keys = keys;
        claim_values = values;
    }

    tracing::debug!(
        action = %action,
        type_code = %credential_type_code,
        claims = claim_keys.len(),
        "credential record decoded"
    );

    Ok(Credential {
        action,
        credential_type_code,
        reference_id,
        expiration_block,
        claims: claims_map,
        claim_keys,
        claim_values,
        value_notation: false,
    })
}

fn next_field<'a>(buf: &'a [u8], offset: &mut usize) -> Result<&'a [u8], CodecError> {
    let (payload, next) = read_field(buf, *offset)?;
    *offset = next;
    Ok(payload)
}

fn utf8_field(bytes: &[u8], what: &str) -> Result<String, CodecError> {
    String::from_utf8(bytes.to_vec())
        .map_err(|_| CodecError::MalformedRecord(format!("{} is not valid UTF-8", what)))
}
