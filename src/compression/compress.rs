use log::{debug, error};

use crate::bitstream::bitwriter::BitWriter;
use crate::bitstream::encoded_stream::EncodedStream;
use crate::error::{HuffmanError, Result};
use crate::huffman_coding::code_table::CodeTable;

/// Encode `data` by concatenating the code of each byte, in order.
/// Fails on the first byte that has no code in `table`.
pub fn encode(data: &[u8], table: &CodeTable) -> Result<EncodedStream> {
    // Most codes are short; start with room for one byte out per byte in.
    let mut bw = BitWriter::new(data.len());

    for (i, &symbol) in data.iter().enumerate() {
        match table.get(symbol) {
            Some(code) => bw.out_code(code),
            None => {
                error!("Symbol {:#04x} at position {} is not in the code table.", symbol, i);
                return Err(HuffmanError::UnknownSymbol(symbol));
            }
        }
    }

    let stream = bw.finish();
    debug!(
        "Encoded {} bytes into {} bits ({} packed bytes).",
        data.len(),
        stream.bit_len(),
        stream.as_bytes().len()
    );
    Ok(stream)
}
