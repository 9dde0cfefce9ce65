use huffman::bitstream::encoded_stream::EncodedStream;
use huffman::huffman_coding::code_table::CodeTable;
use huffman::huffman_coding::tree::{HuffmanTree, Node};
use huffman::tools::freq_count::{freqs, FrequencyMap};
use huffman::{run, HuffmanCodec, HuffmanError, Outcome, Report};

fn report_for(text: &[u8]) -> Report {
    match run(text).unwrap() {
        Outcome::Report(report) => *report,
        Outcome::Empty => panic!("expected a report for {:?}", text),
    }
}

#[test]
fn single_symbol() {
    let counts = freqs(b"aaaa");
    assert_eq!(counts.iter().collect::<Vec<_>>(), vec![(b'a', 4)]);

    let report = report_for(b"aaaa");
    assert_eq!(report.codes.len(), 1);
    assert_eq!(report.codes[0].1.to_string(), "0");
    assert_eq!(report.encoded.to_string(), "0000");
    assert_eq!(report.decoded, b"aaaa");
    assert!(report.round_trip_ok);
}

#[test]
fn mixed_frequencies() {
    let report = report_for(b"aab");
    assert_eq!(report.frequencies.get(b'a'), 2);
    assert_eq!(report.frequencies.get(b'b'), 1);
    assert_eq!(report.tree.weight(), 3);
    assert_eq!(report.tree.leaf_count(), 2);

    let mut codes: Vec<String> = report.codes.iter().map(|(_, c)| c.to_string()).collect();
    codes.sort();
    assert_eq!(codes, vec!["0", "1"]);
    assert!(report.round_trip_ok);
}

#[test]
fn empty_input() {
    assert!(matches!(run(b"").unwrap(), Outcome::Empty));
    assert!(matches!(
        HuffmanCodec::from_text(b""),
        Err(HuffmanError::EmptyInput)
    ));
}

#[test]
fn demo_sentence() {
    let text = b"huffman coding is simple";
    let report = report_for(text);
    assert!(report.round_trip_ok);
    assert_eq!(report.tree.weight(), text.len() as u64);
    assert_eq!(report.frequencies, freqs(text));
    // Huffman never does worse than a fixed width code over the same alphabet.
    let distinct = report.codes.len();
    let fixed_width = (usize::BITS - (distinct - 1).leading_zeros()) as usize;
    assert!(report.encoded.bit_len() <= text.len() * fixed_width);
}

#[test]
fn deterministic_runs() {
    let text = b"mississippi river banks";
    let first = report_for(text);
    let second = report_for(text);
    assert_eq!(first.frequencies, second.frequencies);
    assert_eq!(first.tree, second.tree);
    assert_eq!(first.codes, second.codes);
    assert_eq!(first.encoded, second.encoded);
}

#[test]
fn binary_and_multibyte_input() {
    let mut data: Vec<u8> = (0..=255).collect();
    data.extend_from_slice("naïve café ☕".as_bytes());
    let report = report_for(&data);
    assert!(report.round_trip_ok);
    assert_eq!(report.decoded, data);
}

#[test]
fn skewed_frequencies_make_deep_codes() {
    // Fibonacci weights give a maximally unbalanced tree, with codes longer than 32 bits.
    let mut weights = vec![1_u64, 1];
    while weights.len() < 40 {
        weights.push(weights[weights.len() - 1] + weights[weights.len() - 2]);
    }
    let counts: FrequencyMap = weights
        .into_iter()
        .enumerate()
        .map(|(sym, w)| (sym as u8, w))
        .collect();
    let codec = HuffmanCodec::from_frequencies(&counts).unwrap();
    assert_eq!(codec.tree().depth(), 39);
    assert!(codec.table().is_prefix_free());
    let sample = [0_u8, 1, 2, 3, 39, 0];
    let stream = codec.encode(&sample).unwrap();
    assert_eq!(codec.decode(&stream).unwrap(), sample);
}

#[test]
fn truncated_stream_is_reported() {
    let codec = HuffmanCodec::from_text(b"abccdddd").unwrap();
    let stream = codec.encode(b"ab").unwrap();
    let mut bits = stream.to_string();
    bits.pop();
    let short = EncodedStream::from_bit_str(&bits).unwrap();
    assert!(matches!(
        codec.decode(&short),
        Err(HuffmanError::TruncatedStream { .. })
    ));
}

#[test]
fn unknown_symbol_is_reported() {
    let codec = HuffmanCodec::from_text(b"abc").unwrap();
    assert!(matches!(
        codec.encode(b"abcx"),
        Err(HuffmanError::UnknownSymbol(b'x'))
    ));
}

#[test]
fn table_matches_tree_leaves() {
    let tree = HuffmanTree::from_frequencies(&freqs(b"she sells sea shells")).unwrap();
    let table = CodeTable::from_tree(&tree);
    assert_eq!(table.len(), tree.leaf_count());
    assert!(table.is_prefix_free());
    assert!(matches!(tree.root(), Node::Internal { .. }));
}

#[test]
fn heavy_counts_decode_short_streams() {
    let counts: FrequencyMap = vec![(b'a', 1 << 60), (b'b', 1)].into_iter().collect();
    let codec = HuffmanCodec::from_frequencies(&counts).unwrap();
    let stream = codec.encode(b"ab").unwrap();
    assert_eq!(stream.bit_len(), 2);
    assert_eq!(codec.decode(&stream).unwrap(), b"ab");
}

#[test]
fn overflowing_counts_are_rejected() {
    let half = u64::MAX / 2 + 1;
    let counts: FrequencyMap = vec![(b'a', half), (b'b', half)].into_iter().collect();
    assert!(matches!(
        HuffmanCodec::from_frequencies(&counts),
        Err(HuffmanError::InvalidInput(_))
    ));
}
