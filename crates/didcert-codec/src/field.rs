//! Length-prefixed field primitive shared by every record field.

use crate::error::CodecError;

/// Length byte selecting the extended form: the next byte is the real
/// length. Matches the ledger's PUSHDATA1 opcode, so framed fields double
/// as script push operations.
pub const EXTENDED_LENGTH_MARKER: u8 = 0x4c;

/// Largest payload encodable with a bare length byte.
pub const SHORT_FORM_MAX: usize = 75;

/// Largest payload the one-byte extended length can address.
pub const FIELD_MAX: usize = 255;

/// Read one length-prefixed field starting at `offset`.
///
/// Returns the payload and the offset of the byte following it. Fails
/// with [`CodecError::MalformedRecord`] when `offset` is at or past the
/// buffer end, or fewer bytes remain than the declared length.
pub fn read_field(buf: &[u8], offset: usize) -> Result<(&[u8], usize), CodecError> {
    let length_byte = *buf.get(offset).ok_or_else(|| {
        CodecError::MalformedRecord(format!(
            "field offset {} is past the end of the {}-byte buffer",
            offset,
            buf.len()
        ))
    })?;

    let (length, start) = if length_byte == EXTENDED_LENGTH_MARKER {
        let extended = *buf.get(offset + 1).ok_or_else(|| {
            CodecError::MalformedRecord("extended length byte is missing".to_string())
        })?;
        (extended as usize, offset + 2)
    } else {
        (length_byte as usize, offset + 1)
    };

    let end = start + length;
    if end > buf.len() {
        return Err(CodecError::MalformedRecord(format!(
            "field declares {} bytes but only {} remain",
            length,
            buf.len().saturating_sub(start)
        )));
    }
    Ok((&buf[start..end], end))
}

/// Frame a payload with its length prefix.
///
/// Payloads up to [`SHORT_FORM_MAX`] bytes use the bare length byte;
/// larger ones get the extended form. Fails with
/// [`CodecError::FieldTooLarge`] past [`FIELD_MAX`] bytes.
pub fn write_field(payload: &[u8]) -> Result<Vec<u8>, CodecError> {
    if payload.len() > FIELD_MAX {
        return Err(CodecError::FieldTooLarge(payload.len()));
    }
    let mut framed = Vec::with_capacity(payload.len() + 2);
    if payload.len() > SHORT_FORM_MAX {
        framed.push(EXTENDED_LENGTH_MARKER);
    }
    framed.push(payload.len() as u8);
    framed.extend_from_slice(payload);
    Ok(framed)
}
