//! Claim payload serialization between ordered key/value lists and the two
//! JSON shapes the wire format allows: an object, or a positional array
//! whose key names live outside the record.

use serde_json::{Map, Value};

use crate::error::CodecError;

/// Prefix for synthesized claim keys when no key list is known.
const SYNTHETIC_KEY_PREFIX: &str = "key";

/// Serialize claims as a JSON object, preserving the supplied key order.
pub fn to_object_form(keys: &[String], values: &[Value]) -> String {
    let mut object = Map::with_capacity(keys.len());
    for (key, value) in keys.iter().zip(values) {
        object.insert(key.clone(), value.clone());
    }
    Value::Object(object).to_string()
}

/// Serialize claim values as a positional JSON array. Key names are
/// dropped and only recoverable from an externally supplied key list.
pub fn to_positional_form(values: &[Value]) -> String {
    Value::Array(values.to_vec()).to_string()
}

/// Parse a claim payload into ordered keys and values.
///
/// Positional arrays are zipped with `known_keys`; elements past the end
/// of the key list get synthetic `key{index}` names, so older records
/// carrying extra values still decode. Objects yield their entries in
/// parse order.
pub fn from_payload(
    text: &str,
    known_keys: &[String],
) -> Result<(Vec<String>, Vec<Value>), CodecError> {
    let parsed: Value =
        serde_json::from_str(text).map_err(|e| CodecError::InvalidClaimEncoding(e.to_string()))?;

    match parsed {
        Value::Array(values) => {
            let keys = (0..values.len())
                .map(|index| {
                    known_keys
                        .get(index)
                        .cloned()
                        .unwrap_or_else(|| format!("{}{}", SYNTHETIC_KEY_PREFIX, index))
                })
                .collect();
            Ok((keys, values))
        }
        Value::Object(object) => {
            let keys = object.keys().cloned().collect();
            let values = object.values().cloned().collect();
            Ok((keys, values))
        }
        other => Err(CodecError::InvalidClaimEncoding(format!(
            "expected a JSON object or array, got: {}",
            other
        ))),
    }
}
