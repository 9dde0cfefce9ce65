//! Huffman coding of byte sequences.
//!
//! Builds an optimal prefix-free binary code from the byte frequencies of an input, encodes the
//! input with it and decodes it back losslessly using the same tree.
//!
//! Basic usage:
//!
//! ```
//! use huffman::compression::codec::HuffmanCodec;
//!
//! let text = b"huffman coding is simple";
//! let codec = HuffmanCodec::from_text(text)?;
//! let encoded = codec.encode(text)?;
//! assert_eq!(codec.decode(&encoded)?, text);
//! # Ok::<(), huffman::error::HuffmanError>(())
//! ```
//!
//! Or from the command line, which prints the code table, the encoded bits and the round trip
//! check:
//!
//! `$> huffman "abracadabra"`
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::codec::HuffmanCodec;
pub use compression::report::{run, Outcome, Report};
pub use error::HuffmanError;
