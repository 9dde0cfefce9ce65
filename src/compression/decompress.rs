use log::{debug, error, trace};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::encoded_stream::EncodedStream;
use crate::error::{HuffmanError, Result};
use crate::huffman_coding::tree::{HuffmanTree, Node};

/// Decode `stream` by walking `tree`: 0 goes left, 1 goes right, and each leaf reached emits
/// its symbol and sends the cursor back to the root.
///
/// The stream must end on a symbol boundary. Running out of bits part way down a path is a
/// `TruncatedStream` error.
pub fn decode(stream: &EncodedStream, tree: &HuffmanTree) -> Result<Vec<u8>> {
    let root = tree.root();
    let mut br = BitReader::new(stream);

    // A bare leaf root has no children to descend to; every bit stands for that one symbol.
    if let Node::Leaf { symbol, .. } = root {
        if stream.bits().any(|bit| bit) {
            debug!("Lone symbol stream holds 1 bits; decoding them as the symbol too.");
        }
        let out = vec![*symbol; br.len()];
        debug!("Decoded {} bits into {} copies of one symbol.", stream.bit_len(), out.len());
        return Ok(out);
    }

    // Every symbol takes at least one bit.
    let mut out = Vec::with_capacity(stream.bit_len());
    let mut cursor = root;

    while let Some(bit) = br.bool_bit() {
        cursor = match cursor {
            Node::Internal { left, right, .. } => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            Node::Leaf { .. } => unreachable!("the cursor is reset whenever it lands on a leaf"),
        };
        if let Node::Leaf { symbol, .. } = cursor {
            trace!("Decoded {:#04x} at {}.", symbol, br.loc());
            out.push(*symbol);
            cursor = root;
        }
    }

    if !std::ptr::eq(cursor, root) {
        error!(
            "Stream ended mid-code at {} after {} symbols.",
            br.loc(),
            out.len()
        );
        return Err(HuffmanError::TruncatedStream {
            bits_consumed: br.consumed(),
            symbols_decoded: out.len(),
        });
    }

    debug!("Decoded {} bits into {} bytes.", stream.bit_len(), out.len());
    Ok(out)
}
