//! Integration test: Full record round trips across the codec and the
//! script assembler — encode, assemble, recognize, decode.

use didcert_chain::assemble_op_return;
use didcert_codec::{
    decode_record, decode_record_with_keys, encode_create, encode_delete, encode_update,
    is_protocol_record, CodecError,
};
use didcert_core::{Credential, RecordAction};
use serde_json::{json, Map, Value};

fn claims_of(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

/// Helper: run chunks through the assembler the way a submitted
/// transaction would carry them.
fn to_script(chunks: &[Vec<u8>]) -> Vec<u8> {
    assemble_op_return(chunks)
}

#[test]
fn test_create_roundtrip_object_form() {
    let record = Credential::create("0001", 700_000, claims_of(json!({"name": "Alice"})));
    let script = to_script(&encode_create(&record).unwrap());

    assert!(is_protocol_record(&script));
    let decoded = decode_record(&script).unwrap();

    assert_eq!(decoded.action, RecordAction::Create);
    assert_eq!(decoded.credential_type_code, "0001");
    assert_eq!(decoded.expiration_block, Some(700_000));
    assert_eq!(decoded.claims, record.claims);
    assert_eq!(decoded.reference_id, None);
}

#[test]
fn test_create_roundtrip_positional_with_known_keys() {
    let record = Credential::create_untyped(1000, claims_of(json!({"name": "Alice", "level": 3})))
        .with_positional_claims();
    let script = to_script(&encode_create(&record).unwrap());

    let keys = vec!["name".to_string(), "level".to_string()];
    let decoded = decode_record_with_keys(&script, &keys).unwrap();

    assert_eq!(decoded.claim_keys, keys);
    assert_eq!(decoded.claims["name"], json!("Alice"));
    assert_eq!(decoded.claims["level"], json!(3));
}

#[test]
fn test_create_roundtrip_positional_synthetic_keys() {
    let record = Credential::create_untyped(1000, claims_of(json!({"name": "Alice", "level": 3})))
        .with_positional_claims();
    let script = to_script(&encode_create(&record).unwrap());

    let decoded = decode_record(&script).unwrap();
    assert_eq!(
        decoded.claim_keys,
        vec!["key0".to_string(), "key1".to_string()]
    );
    assert_eq!(decoded.claim_values, vec![json!("Alice"), json!(3)]);
}

#[test]
fn test_update_roundtrip() {
    let record = Credential::update(
        "abcd1234",
        "0002",
        800_000,
        claims_of(json!({"role": "auditor"})),
    );
    let script = to_script(&encode_update(&record).unwrap());

    let decoded = decode_record(&script).unwrap();
    assert_eq!(decoded.action, RecordAction::Update);
    assert_eq!(decoded.reference_id.as_deref(), Some("abcd1234"));
    assert_eq!(decoded.expiration_block, Some(800_000));
    assert_eq!(decoded.claims["role"], json!("auditor"));
}

#[test]
fn test_delete_roundtrip_carries_no_expiration() {
    let record = Credential::delete("abcd1234", "0001");
    let script = to_script(&encode_delete(&record).unwrap());

    let decoded = decode_record(&script).unwrap();
    assert_eq!(decoded.action, RecordAction::Delete);
    assert_eq!(decoded.credential_type_code, "0001");
    assert_eq!(decoded.reference_id.as_deref(), Some("abcd1234"));
    assert_eq!(decoded.expiration_block, None);
    assert!(decoded.claims.is_empty());
}

#[test]
fn test_expiration_negative_one_roundtrip() {
    let record = Credential::create_untyped(-1, claims_of(json!({"a": 1})));
    let chunks = encode_create(&record).unwrap();

    // The expiration chunk is the little-endian two's-complement bytes.
    assert_eq!(chunks[4], vec![4, 0xff, 0xff, 0xff, 0xff]);

    let decoded = decode_record(&to_script(&chunks)).unwrap();
    assert_eq!(decoded.expiration_block, Some(-1));
}

#[test]
fn test_extended_length_payload_roundtrip() {
    // Push the claim payload past 75 bytes so the extended form kicks in,
    // and check it reads back byte-identical.
    let filler = "x".repeat(100);
    let record = Credential::create_untyped(1, claims_of(json!({ "data": filler })));
    let script = to_script(&encode_create(&record).unwrap());

    let decoded = decode_record(&script).unwrap();
    assert_eq!(decoded.claims["data"], json!(filler));
}

#[test]
fn test_short_and_extended_forms_decode_identically() {
    // 75-byte payload: short form. 76-byte payload: extended form. Both
    // must survive the trip unchanged.
    for target in [75usize, 76] {
        let filler = "x".repeat(target - r#"{"k":""}"#.len());
        let record = Credential::create_untyped(1, claims_of(json!({ "k": filler })));
        let chunks = encode_create(&record).unwrap();

        let claim_chunk = chunks.last().unwrap();
        if target <= 75 {
            assert_eq!(claim_chunk[0] as usize, target);
        } else {
            assert_eq!(claim_chunk[0], 0x4c);
            assert_eq!(claim_chunk[1] as usize, target);
        }

        let decoded = decode_record(&to_script(&chunks)).unwrap();
        assert_eq!(decoded.claims["k"], json!(filler));
    }
}

#[test]
fn test_invalid_type_code_rejected_at_encode() {
    let record = Credential::create("001", 1, claims_of(json!({"a": 1})));
    assert!(matches!(
        encode_create(&record),
        Err(CodecError::InvalidTypeCode(_))
    ));
}

#[test]
fn test_unknown_action_rejected_at_decode() {
    let record = Credential::create("0001", 1, claims_of(json!({"a": 1})));
    let mut script = to_script(&encode_create(&record).unwrap());
    // Overwrite the action letter in place: offset 11 is its length byte.
    script[12] = b'X';

    assert!(matches!(
        decode_record(&script),
        Err(CodecError::UnsupportedAction(_))
    ));
}

#[test]
fn test_foreign_buffers_are_not_records() {
    assert!(!is_protocol_record(&[]));
    assert!(!is_protocol_record(b"\x6a\x04did\0"));
    assert!(!is_protocol_record(
        b"\x6a\x04did\0\x04name rest of some other protocol"
    ));
}

#[test]
fn test_truncated_script_fails_closed() {
    let record = Credential::create("0001", 1, claims_of(json!({"name": "Alice"})));
    let script = to_script(&encode_create(&record).unwrap());

    // Any truncation inside the field region decodes to an error, never a
    // panic or a partial record.
    for len in 11..script.len() {
        assert!(decode_record(&script[..len]).is_err());
    }
}
