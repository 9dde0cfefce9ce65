//! One full run of the pipeline over a single input, and its human-readable report.

use log::{error, info};
use std::fmt::{Display, Formatter};

use crate::bitstream::encoded_stream::EncodedStream;
use crate::error::{HuffmanError, Result};
use crate::huffman_coding::code_table::Code;
use crate::huffman_coding::tree::{symbol_label, HuffmanTree};
use crate::tools::freq_count::FrequencyMap;

use super::codec::HuffmanCodec;

const RULE: &str = "---------------------------------";

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct Report {
    pub original: Vec<u8>,
    pub frequencies: FrequencyMap,
    pub tree: HuffmanTree,
    /// (symbol, code), ascending by symbol.
    pub codes: Vec<(u8, Code)>,
    pub encoded: EncodedStream,
    pub decoded: Vec<u8>,
    pub round_trip_ok: bool,
}

/// Result of a run. Empty input is a successful no-op.
#[derive(Debug, Clone)]
pub enum Outcome {
    Empty,
    Report(Box<Report>),
}

/// Count, build, derive, encode and decode `text`, then check the decoded bytes against it.
///
/// A mismatch is reported through `round_trip_ok`. Encode and decode failures are returned.
pub fn run(text: &[u8]) -> Result<Outcome> {
    let codec = match HuffmanCodec::from_text(text) {
        Ok(codec) => codec,
        Err(HuffmanError::EmptyInput) => {
            info!("Input is empty. Nothing to do.");
            return Ok(Outcome::Empty);
        }
        Err(e) => return Err(e),
    };

    let encoded = codec.encode(text)?;
    info!("Encoded {} bytes into {} bits.", text.len(), encoded.bit_len());

    let decoded = codec.decode(&encoded)?;
    let round_trip_ok = decoded == text;
    if round_trip_ok {
        info!("Decoded text matches the original.");
    } else {
        error!(
            "Decoded text does not match the original ({} bytes vs {} bytes).",
            decoded.len(),
            text.len()
        );
    }

    let codes = codec
        .table()
        .sorted()
        .into_iter()
        .map(|(sym, code)| (sym, code.clone()))
        .collect();

    Ok(Outcome::Report(Box::new(Report {
        original: text.to_vec(),
        frequencies: codec.tree().frequencies(),
        tree: codec.tree().clone(),
        codes,
        encoded,
        decoded,
        round_trip_ok,
    })))
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "## Huffman Coding Algorithm ##")?;
        writeln!(f, "Original Text: \"{}\"", String::from_utf8_lossy(&self.original))?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "## Generated Codes ##")?;
        for (sym, code) in &self.codes {
            writeln!(f, "{} : {}", symbol_label(*sym), code)?;
        }
        writeln!(f, "{}", RULE)?;
        writeln!(f, "## Encoded Text ##")?;
        writeln!(f, "{}", self.encoded)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "## Decoded Text ##")?;
        writeln!(f, "{}", String::from_utf8_lossy(&self.decoded))?;
        writeln!(f, "{}", RULE)?;
        if self.round_trip_ok {
            writeln!(f, "Success! Original and decoded text match.")
        } else {
            writeln!(f, "Failure! Text does not match.")
        }
    }
}
