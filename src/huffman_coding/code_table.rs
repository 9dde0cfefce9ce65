//! Derives the symbol-to-code mapping by walking the huffman tree.
//!
//! Going left appends a 0 bit, going right appends a 1 bit. The path to a leaf is that
//! leaf's code. Since every code ends at a distinct leaf of a strict binary tree, no code is
//! a prefix of another.

use log::{debug, trace};
use rustc_hash::FxHashMap;
use std::fmt::{Display, Formatter};

use super::tree::{HuffmanTree, Node};

/// The single bit coding the only symbol of a single-symbol alphabet.
pub const LONE_SYMBOL_BIT: bool = false;

/// A variable length bit code, most significant (first emitted) bit first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True if `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

    fn extended(&self, bit: bool) -> Code {
        let mut bits = Vec::with_capacity(self.bits.len() + 1);
        bits.extend_from_slice(&self.bits);
        bits.push(bit);
        Code { bits }
    }
}

impl From<Vec<bool>> for Code {
    fn from(bits: Vec<bool>) -> Self {
        Code { bits }
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Symbol to code mapping; one entry per leaf of the tree it was derived from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CodeTable {
    codes: FxHashMap<u8, Code>,
}

impl CodeTable {
    /// Walk the tree depth first with an explicit stack, recording the path to each leaf.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = FxHashMap::default();

        match tree.root() {
            // A bare leaf root has no path to follow, so it gets the one bit code 0.
            Node::Leaf { symbol, .. } => {
                codes.insert(*symbol, Code::from(vec![LONE_SYMBOL_BIT]));
            }
            root @ Node::Internal { .. } => {
                let mut stack = vec![(root, Code::default())];
                while let Some((node, path)) = stack.pop() {
                    match node {
                        Node::Leaf { symbol, .. } => {
                            trace!("Code for {:#04x} is {}.", symbol, path);
                            codes.insert(*symbol, path);
                        }
                        Node::Internal { left, right, .. } => {
                            stack.push((right.as_ref(), path.extended(true)));
                            stack.push((left.as_ref(), path.extended(false)));
                        }
                    }
                }
            }
        }

        debug!("Derived {} codes.", codes.len());
        CodeTable { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// (symbol, code) pairs sorted by symbol.
    pub fn sorted(&self) -> Vec<(u8, &Code)> {
        let mut entries: Vec<(u8, &Code)> = self.codes.iter().map(|(&s, c)| (s, c)).collect();
        entries.sort_unstable_by_key(|&(s, _)| s);
        entries
    }

    /// True if no code is a prefix of any other code.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || (!a.is_prefix_of(b) && !b.is_prefix_of(a)))
        })
    }
}
