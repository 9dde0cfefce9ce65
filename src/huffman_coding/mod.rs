//! The huffman_coding module turns symbol frequencies into a prefix-free code.
//!
//! - tree: greedy construction of the huffman tree with a min-priority queue.
//! - code_table: depth-first walk of the tree deriving one bit code per symbol.
//!
//! Both are pure, sequential transformations; a tree and its table are immutable once built.
//!

pub mod code_table;
pub mod tree;
