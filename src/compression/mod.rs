//! The compression module manages both directions of the huffman codec.
//!
//! Compression happens in the following steps:
//! - Frequency count: tally each distinct byte of the input.
//! - Tree build: greedily merge the two lightest nodes until one root remains.
//! - Code derivation: walk the tree, 0 for left and 1 for right, to get each byte's code.
//! - Encoding: concatenate the code of every input byte, in order.
//!
//! Decompression walks the same tree: each bit moves one step left or right, and reaching a
//! leaf emits its byte and restarts at the root.
//!
//! Each run owns its own frequency map, tree and code table. Nothing is shared between runs.
//!

pub mod codec;
pub mod compress;
pub mod decompress;
pub mod report;
