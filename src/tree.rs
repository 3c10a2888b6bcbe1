//! Huffman tree construction via greedy merge.
//!
//! # Theory
//!
//! Repeatedly merging the two lowest-weight subtrees until one remains
//! yields a prefix code of minimum expected length (Huffman 1952). Each
//! merge removes two nodes and adds one, so a tree over $k$ coded symbols
//! has exactly $2k - 1$ nodes and depth at most $k - 1$.
//!
//! Ties between equal weights are broken by insertion order into the
//! priority queue. Tie-breaking changes the tree shape but never the total
//! encoded length; fixing it makes rebuilds of the same text bit-identical.

use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::freq::FrequencyTable;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A coded symbol.
    Leaf {
        /// The symbol this leaf encodes.
        symbol: char,
        /// Occurrence count of the symbol in the training text.
        weight: usize,
    },
    /// A merge of two subtrees.
    Internal {
        /// Combined weight of both children.
        weight: usize,
        /// Subtree reached on bit `0`.
        left: Box<Node>,
        /// Subtree reached on bit `1`.
        right: Box<Node>,
    },
}

impl Node {
    /// Return the weight (occurrence count) of this subtree.
    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// Return true if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Pending subtree in the merge queue.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed: lowest weight
/// pops first, and among equal weights the lowest insertion sequence pops
/// first. The sequence number gives every entry a distinct rank, which pins
/// the tree shape for a given frequency table.
struct HeapEntry {
    weight: usize,
    seq: usize,
    node: Node,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// An immutable Huffman code tree.
///
/// Built once from a [`FrequencyTable`] and retained for the life of the
/// coder: decoding walks it bit by bit. With exactly one distinct symbol the
/// root is itself a leaf and no internal node exists.
#[derive(Clone)]
pub struct HuffmanTree {
    root: Node,
    leaves: usize,
}

impl std::fmt::Debug for HuffmanTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuffmanTree")
            .field("leaves", &self.leaves)
            .field("depth", &self.depth())
            .field("weight", &self.root.weight())
            .finish()
    }
}

impl HuffmanTree {
    /// Build the optimal prefix-code tree for `freqs`.
    ///
    /// One leaf is queued per symbol with a nonzero count, in alphabet
    /// order; the two lightest subtrees are then merged (first popped
    /// becomes the left child) until a single root remains.
    ///
    /// Returns [`Error::EmptyInput`] when every count is zero.
    pub fn build(freqs: &FrequencyTable) -> Result<Self> {
        let mut heap = BinaryHeap::new();
        let mut seq = 0usize;
        for (symbol, weight) in freqs.iter_nonzero() {
            heap.push(HeapEntry {
                weight,
                seq,
                node: Node::Leaf { symbol, weight },
            });
            seq += 1;
        }
        let leaves = heap.len();

        while heap.len() > 1 {
            let first = heap.pop().unwrap();
            let second = heap.pop().unwrap();
            let weight = first.node.weight() + second.node.weight();
            heap.push(HeapEntry {
                weight,
                seq,
                node: Node::Internal {
                    weight,
                    left: Box::new(first.node),
                    right: Box::new(second.node),
                },
            });
            seq += 1;
        }

        let root = heap.pop().map(|entry| entry.node).ok_or(Error::EmptyInput)?;
        Ok(Self { root, leaves })
    }

    /// Return the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of leaves, i.e. distinct coded symbols.
    pub fn leaf_count(&self) -> usize {
        self.leaves
    }

    /// Length of the longest root-to-leaf path, in edges.
    ///
    /// Bounded by the alphabet size (at most 94 edges), so recursion is
    /// safe here and in every other traversal.
    pub fn depth(&self) -> usize {
        Self::node_depth(&self.root)
    }

    fn node_depth(node: &Node) -> usize {
        match node {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => {
                1 + Self::node_depth(left).max(Self::node_depth(right))
            }
        }
    }
}
