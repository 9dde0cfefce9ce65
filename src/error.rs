//! Error type shared by every stage of the huffman pipeline.
//!
//! All of these are local to one pipeline run. Nothing here is shared between runs, so an
//! error in one run never affects another.

use thiserror::Error;

/// Errors raised while counting, building, encoding or decoding.
#[derive(Error, Debug)]
pub enum HuffmanError {
    /// There were no symbols to process. The pipeline treats this as a no-op, not a failure.
    #[error("input is empty, nothing to encode")]
    EmptyInput,

    /// A tree was requested from unusable frequency data.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The encoder met a symbol that has no code in the table.
    #[error("symbol {0:#04x} has no entry in the code table")]
    UnknownSymbol(u8),

    /// The bitstream ended part way down a path of the tree.
    #[error("stream ended mid-code after {bits_consumed} bits ({symbols_decoded} symbols decoded)")]
    TruncatedStream {
        bits_consumed: usize,
        symbols_decoded: usize,
    },

    /// A textual bit string held something other than '0' or '1'.
    #[error("invalid bit character {0:?}")]
    InvalidBit(char),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
