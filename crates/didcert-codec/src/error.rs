/// Errors produced by the record codec.
///
/// Decode failures mean the buffer is not a usable record of this
/// protocol; encode failures are caller input errors to fix before
/// resubmission. There is no partial success in either direction.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Buffer ended before a declared field could be read.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Action code byte is not C, U, or D.
    #[error("unsupported action code: {0:?}")]
    UnsupportedAction(String),

    /// Claim payload is not a usable JSON value.
    #[error("invalid claim encoding: {0}")]
    InvalidClaimEncoding(String),

    /// Credential type code is not exactly 4 characters.
    #[error("credential type code must be exactly 4 characters, got {0:?}")]
    InvalidTypeCode(String),

    /// A resolved claim key has no usable value in the claims map.
    #[error("unknown claim key: {0}")]
    UnknownClaimKey(String),

    /// Field payload exceeds what the length prefix can address.
    #[error("field of {0} bytes exceeds the 255-byte limit")]
    FieldTooLarge(usize),

    /// A field the target action requires is absent from the record.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
