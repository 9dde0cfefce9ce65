//! Greedy construction of the huffman tree from symbol frequencies.
//!
//! Leaves are seeded into a min-priority queue keyed on (weight, insertion sequence). The two
//! lightest entries are repeatedly pulled off and merged until one node, the root, remains.
//! The first entry pulled becomes the left child, the second the right child.
//!
//! Equal weights are served in insertion order. Leaves are inserted in ascending symbol order
//! and each merged node takes the next sequence number, so the tree shape is fully determined
//! by the frequencies.

use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{HuffmanError, Result};
use crate::tools::freq_count::FrequencyMap;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Create a new leaf
    pub fn leaf(symbol: u8, weight: u64) -> Node {
        Node::Leaf { symbol, weight }
    }

    /// Join two subtrees under a new internal node carrying their combined weight.
    pub fn merge(left: Node, right: Node) -> Result<Node> {
        let weight = left.weight().checked_add(right.weight()).ok_or_else(|| {
            HuffmanError::InvalidInput("total weight overflows u64".to_string())
        })?;
        Ok(Node::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// A node waiting in the build queue.
#[derive(Debug)]
struct Queued {
    weight: u64,
    seq: usize,
    node: Node,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}
impl Eq for Queued {}

impl Ord for Queued {
    /// Reversed so the max-heap pops the lightest node first, oldest first among equals.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Immutable huffman tree. A single-symbol alphabet leaves a bare leaf as the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree from a non-empty frequency map.
    pub fn from_frequencies(freqs: &FrequencyMap) -> Result<Self> {
        if freqs.is_empty() {
            return Err(HuffmanError::InvalidInput(
                "cannot build a tree from an empty frequency map".to_string(),
            ));
        }
        // Every internal weight is bounded by the total, so this guards all the merges below.
        if freqs.checked_total().is_none() {
            return Err(HuffmanError::InvalidInput(
                "total weight overflows u64".to_string(),
            ));
        }

        let mut queue: BinaryHeap<Queued> = BinaryHeap::with_capacity(freqs.len());
        let mut seq = 0;
        for (symbol, weight) in freqs.iter() {
            queue.push(Queued {
                weight,
                seq,
                node: Node::leaf(symbol, weight),
            });
            seq += 1;
        }
        debug!("Seeded the queue with {} leaves.", queue.len());

        // Pare the queue down to one node, merging the two lightest each time.
        while queue.len() > 1 {
            let (left, right) = match (queue.pop(), queue.pop()) {
                (Some(left), Some(right)) => (left, right),
                _ => unreachable!("queue held more than one node"),
            };
            trace!(
                "Merging weights {} (seq {}) and {} (seq {}).",
                left.weight,
                left.seq,
                right.weight,
                right.seq
            );
            let node = Node::merge(left.node, right.node)?;
            queue.push(Queued {
                weight: node.weight(),
                seq,
                node,
            });
            seq += 1;
        }

        let root = match queue.pop() {
            Some(last) => last.node,
            None => unreachable!("queue was seeded with at least one leaf"),
        };
        let tree = HuffmanTree { root };
        debug_assert!(tree.weights_conserved());
        debug!(
            "Built tree: weight {}, {} leaves, depth {}.",
            tree.weight(),
            tree.leaf_count(),
            tree.depth()
        );
        Ok(tree)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total weight, equal to the length of the counted input.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        self.walk(|node, _| {
            if node.is_leaf() {
                count += 1
            }
        });
        count
    }

    /// Length of the longest root-to-leaf path. A bare leaf root has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        self.walk(|_, depth| deepest = deepest.max(depth));
        deepest
    }

    /// Recover the frequency of every symbol from the leaves.
    pub fn frequencies(&self) -> FrequencyMap {
        let mut freqs = FrequencyMap::new();
        self.walk(|node, _| {
            if let Node::Leaf { symbol, weight } = node {
                freqs.add(*symbol, *weight)
            }
        });
        freqs
    }

    /// True if every internal node weighs exactly as much as its two children.
    pub fn weights_conserved(&self) -> bool {
        let mut ok = true;
        self.walk(|node, _| {
            if let Node::Internal {
                weight,
                left,
                right,
            } = node
            {
                ok &= left.weight().checked_add(right.weight()) == Some(*weight);
            }
        });
        ok
    }

    /// Indented listing of the tree, one node per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_node(&self.root, 0, "root", &mut out);
        out
    }

    /// Visit every node pre-order with its depth, using an explicit stack.
    fn walk<F: FnMut(&Node, usize)>(&self, mut visit: F) {
        let mut stack = vec![(&self.root, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            visit(node, depth);
            if let Node::Internal { left, right, .. } = node {
                stack.push((right.as_ref(), depth + 1));
                stack.push((left.as_ref(), depth + 1));
            }
        }
    }
}

/// Printable form of a symbol: quoted if it is visible ASCII, hex otherwise.
pub fn symbol_label(symbol: u8) -> String {
    if symbol.is_ascii_graphic() || symbol == b' ' {
        format!("'{}'", symbol as char)
    } else {
        format!("{:#04x}", symbol)
    }
}

fn render_node(node: &Node, depth: usize, label: &str, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Leaf { symbol, weight } => {
            out.push_str(&format!(
                "{}{} -> Leaf {} [weight: {}]\n",
                indent,
                label,
                symbol_label(*symbol),
                weight
            ));
        }
        Node::Internal {
            weight,
            left,
            right,
        } => {
            out.push_str(&format!("{}{} -> Internal [weight: {}]\n", indent, label, weight));
            render_node(left, depth + 1, "L", out);
            render_node(right, depth + 1, "R", out);
        }
    }
}
