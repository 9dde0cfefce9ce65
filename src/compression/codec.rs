use log::info;

use crate::bitstream::encoded_stream::EncodedStream;
use crate::error::{HuffmanError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::tree::HuffmanTree;
use crate::tools::freq_count::{freqs, FrequencyMap};

use super::{compress, decompress};

/// A huffman tree together with the code table derived from it.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    tree: HuffmanTree,
    table: CodeTable,
}

impl HuffmanCodec {
    /// Count `text`, build its tree and derive its codes. Empty text has nothing to build from.
    pub fn from_text(text: &[u8]) -> Result<Self> {
        if text.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }
        Self::from_frequencies(&freqs(text))
    }

    pub fn from_frequencies(freqs: &FrequencyMap) -> Result<Self> {
        let tree = HuffmanTree::from_frequencies(freqs)?;
        let table = CodeTable::from_tree(&tree);
        info!(
            "Built codec for {} symbols over {} distinct values.",
            tree.weight(),
            table.len()
        );
        Ok(Self { tree, table })
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    pub fn encode(&self, data: &[u8]) -> Result<EncodedStream> {
        compress::encode(data, &self.table)
    }

    pub fn decode(&self, stream: &EncodedStream) -> Result<Vec<u8>> {
        decompress::decode(stream, &self.tree)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_text_test() {
        assert!(matches!(
            HuffmanCodec::from_text(b""),
            Err(HuffmanError::EmptyInput)
        ));
    }

    #[test]
    fn empty_frequencies_test() {
        assert!(matches!(
            HuffmanCodec::from_frequencies(&FrequencyMap::new()),
            Err(HuffmanError::InvalidInput(_))
        ));
    }

    #[test]
    fn round_trip_test() {
        let text = b"huffman coding is simple";
        let codec = HuffmanCodec::from_text(text).unwrap();
        let stream = codec.encode(text).unwrap();
        assert_eq!(codec.decode(&stream).unwrap(), text);
    }

    #[test]
    fn shared_frequencies_test() {
        // A codec built from counts can encode any text drawn from the same symbols.
        let codec = HuffmanCodec::from_text(b"abcabc").unwrap();
        let stream = codec.encode(b"cab").unwrap();
        assert_eq!(codec.decode(&stream).unwrap(), b"cab");
        assert!(codec.encode(b"abd").is_err());
    }
}
