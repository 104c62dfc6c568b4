//! Didcert Codec — the binary record format embedded in OP_RETURN scripts.
//!
//! A record is a sequence of push-framed fields behind two fixed markers:
//!
//! ```text
//! 6a 04 "did\0" 04 "cert" <action> <type code> [reference id] [expiration] [claims]
//! ```
//!
//! Every field after the opcode is a [`field::read_field`]-style
//! length-prefixed field: one length byte, or the extended form (marker
//! byte 76, then the real length byte) for payloads over 75 bytes.
//! Reference id is carried by update and delete records; expiration
//! (4-byte little-endian signed block height) and the JSON claim payload
//! by create and update records.
//!
//! All operations here are pure, synchronous transformations over
//! in-memory buffers; fetching transactions and assembling final scripts
//! live in `didcert-chain`.

pub mod claims;
pub mod decode;
pub mod encode;
pub mod error;
pub mod field;
pub mod validate;

pub use decode::{decode_record, decode_record_with_keys};
pub use encode::{encode_create, encode_delete, encode_update, ScriptChunk};
pub use error::CodecError;
pub use field::{read_field, write_field};
pub use validate::is_protocol_record;
