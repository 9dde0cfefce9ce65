//! Property tests over arbitrary non-empty byte sequences.

use proptest::prelude::*;

use huffman::huffman_coding::code_table::CodeTable;
use huffman::huffman_coding::tree::HuffmanTree;
use huffman::tools::freq_count::freqs;
use huffman::HuffmanCodec;

/// Small alphabets give plenty of repeats; the full byte range covers the rest.
fn text_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(b'a'..=b'e', 1..200),
        prop::collection::vec(any::<u8>(), 1..500),
    ]
}

proptest! {
    #[test]
    fn round_trip(text in text_strategy()) {
        let codec = HuffmanCodec::from_text(&text).unwrap();
        let stream = codec.encode(&text).unwrap();
        prop_assert_eq!(codec.decode(&stream).unwrap(), text);
    }

    #[test]
    fn prefix_free(text in text_strategy()) {
        let tree = HuffmanTree::from_frequencies(&freqs(&text)).unwrap();
        let table = CodeTable::from_tree(&tree);
        prop_assert!(table.is_prefix_free());
        prop_assert!(table.sorted().iter().all(|(_, code)| !code.is_empty()));
    }

    #[test]
    fn weight_conservation(text in text_strategy()) {
        let tree = HuffmanTree::from_frequencies(&freqs(&text)).unwrap();
        prop_assert!(tree.weights_conserved());
        prop_assert_eq!(tree.weight(), text.len() as u64);
    }

    #[test]
    fn completeness(text in text_strategy()) {
        let counts = freqs(&text);
        let tree = HuffmanTree::from_frequencies(&counts).unwrap();
        let table = CodeTable::from_tree(&tree);
        let keys: Vec<u8> = table.sorted().into_iter().map(|(sym, _)| sym).collect();
        let symbols: Vec<u8> = counts.symbols().collect();
        prop_assert_eq!(keys, symbols);
        prop_assert_eq!(tree.frequencies(), counts);
    }

    #[test]
    fn determinism(text in text_strategy()) {
        let first = HuffmanCodec::from_text(&text).unwrap();
        let second = HuffmanCodec::from_text(&text).unwrap();
        prop_assert_eq!(first.tree(), second.tree());
        prop_assert_eq!(first.table(), second.table());
        prop_assert_eq!(first.encode(&text).unwrap(), second.encode(&text).unwrap());
    }
}
