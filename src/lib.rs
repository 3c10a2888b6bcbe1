//! # Huffman Prefix Coding
//!
//! *Optimal whole-bit codes from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Think of the hand tools on a workshop pegboard. The ones you grab every
//! few minutes hang at eye level, where reaching them costs nothing; the
//! oddball sizes live on the top row. Huffman coding arranges an alphabet
//! the same way: symbols that occur often get short bit codes, rare ones
//! get long codes, and the assignment is provably the best possible among
//! whole-bit prefix codes.
//!
//! ## The Problem
//!
//! Fixed-width codes charge every symbol the same price regardless of how
//! common it is. Variable-length codes can beat that, but naively
//! concatenated they turn ambiguous: does `01` end a symbol or start a
//! longer one? The fix is a *prefix code*: no code word is a prefix of
//! another, so a greedy left-to-right read can never take a wrong turn and
//! the stream needs no delimiters at all.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy: the limit no code can beat
//! 1949  Fano        Shannon-Fano: top-down splits, close but not optimal
//! 1952  Huffman     Bottom-up greedy merge, optimal, as an MIT term paper
//! 1976  Gallager    Sibling property; adaptive Huffman variants
//! 1985  Knuth       Dynamic Huffman for one-pass compressors
//! 1996  DEFLATE     Canonical Huffman ships inside zip, gzip, png
//! ```
//!
//! David Huffman's key insight was to build the tree bottom-up. Fano split
//! the alphabet from the top and lost optimality; merging the two *least*
//! frequent subtrees first guarantees that the deepest leaves are exactly
//! the rarest symbols.
//!
//! ## Mathematical Formulation
//!
//! For symbol probabilities $P = \{p_s\}$ and code lengths $\ell_s$, the
//! expected code length is $L(C) = \sum_s p_s \ell_s$.
//!
//! Huffman's construction minimizes $L(C)$ over all prefix codes, and
//! $H(P) \le L(C) < H(P) + 1$ where $H$ is the Shannon entropy. Every
//! binary-tree code satisfies the Kraft inequality
//! $\sum_s 2^{-\ell_s} \le 1$, which is what makes prefix-free decoding
//! unambiguous.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(k \log k)$ heap operations for $k$ distinct symbols;
//!   the alphabet is fixed at 95, so $k \le 95$ and the tree holds at most
//!   $2k - 1$ nodes.
//! - **Encode**: $O(n \cdot \ell_{max})$ for $n$ input characters.
//! - **Decode**: one tree step per input bit.
//!
//! ## What Could Go Wrong
//!
//! 1. **Ties**: equal weights admit many optimal trees. Shapes differ but
//!    the total encoded length never does. This crate breaks ties by
//!    insertion order, so rebuilding from the same text gives an identical
//!    coder.
//! 2. **Foreign bits**: decoding a bit-string produced by a different
//!    coder, or a corrupted one, yields well-formed but meaningless text.
//!    The decoder is tolerant on purpose: trailing partial codes are
//!    dropped, never reported.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`freq`**: frequency analysis over the fixed printable-ASCII alphabet.
//! - **`tree`**: optimal code-tree construction via a min-priority merge.
//! - **`code`**: per-symbol bit-string derivation from the tree.
//! - **`coder`**: the trained encode/decode engine.
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of
//!   Minimum-Redundancy Codes."
//! - Gallager, R. (1978). "Variations on a Theme by Huffman."
//! - Moffat, A. (2019). "Huffman Coding." ACM Computing Surveys.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod coder;
pub mod error;
pub mod freq;
pub mod tree;

pub use code::CodeTable;
pub use coder::HuffmanCoder;
pub use error::Error;
pub use freq::FrequencyTable;
pub use tree::HuffmanTree;
