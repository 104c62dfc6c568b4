//! OP_RETURN script assembly for record submission.

use didcert_codec::ScriptChunk;

/// Opcode marking an output as an unspendable data carrier.
pub const OP_RETURN: u8 = 0x6a;

/// Assemble the final output script from the encoder's framed chunks.
///
/// Chunks arrive with their push-length prefixes already in place, so
/// assembly is the opcode followed by the chunks in order.
pub fn assemble_op_return(chunks: &[ScriptChunk]) -> Vec<u8> {
    let body_len: usize = chunks.iter().map(|chunk| chunk.len()).sum();
    let mut script = Vec::with_capacity(1 + body_len);
    script.push(OP_RETURN);
    for chunk in chunks {
        script.extend_from_slice(chunk);
    }
    script
}
