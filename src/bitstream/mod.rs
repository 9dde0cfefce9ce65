//! The bitstream module is the bit-level I/O layer of the huffman codec.
//!
//! Codes are variable length, so encoded output rarely ends on a byte boundary. The writer packs
//! bits MSB-first into bytes and records the exact bit count; the reader hands the bits back one
//! at a time and stops at that count, never yielding the zero padding of the last byte.
//!
pub mod bitreader;
pub mod bitwriter;
pub mod encoded_stream;
