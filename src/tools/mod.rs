//! The tools module provides helper functions for the huffman codec.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_count: Frequency count of the input symbols.
//!
pub mod cli;
pub mod freq_count;
