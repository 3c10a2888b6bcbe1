//! Per-symbol bit-string codes derived from the tree.
//!
//! # Theory
//!
//! A symbol's code is its root-to-leaf path: `'0'` for a left descent,
//! `'1'` for a right one. Distinct leaves have distinct paths and no leaf
//! lies on the path to another, so no code is a prefix of another. That is
//! what makes delimiter-free decoding unambiguous (Kraft:
//! $\sum_i 2^{-\ell_i} \le 1$).

use crate::freq::{index_symbol, symbol_index, ALPHABET_LEN};
use crate::tree::{HuffmanTree, Node};

/// Bit-string codes for every trained symbol.
///
/// Populated only for symbols with a nonzero training count; everything
/// else reads as `None`. Immutable once derived.
#[derive(Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<String>>,
}

impl std::fmt::Debug for CodeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeTable")
            .field("symbols", &self.len())
            .finish()
    }
}

impl CodeTable {
    /// Derive the code table for `tree`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = vec![None; ALPHABET_LEN];
        Self::walk(tree.root(), String::new(), &mut codes);
        Self { codes }
    }

    fn walk(node: &Node, path: String, codes: &mut [Option<String>]) {
        match node {
            Node::Leaf { symbol, .. } => {
                // An empty path only happens for a single-leaf root; the
                // sole symbol gets the one-bit code "0".
                let code = if path.is_empty() { "0".to_string() } else { path };
                if let Some(i) = symbol_index(*symbol) {
                    codes[i] = Some(code);
                }
            }
            Node::Internal { left, right, .. } => {
                let mut left_path = path.clone();
                left_path.push('0');
                Self::walk(left, left_path, codes);
                let mut right_path = path;
                right_path.push('1');
                Self::walk(right, right_path, codes);
            }
        }
    }

    /// Return the code for `symbol`, if it was trained.
    pub fn code(&self, symbol: char) -> Option<&str> {
        symbol_index(symbol).and_then(|i| self.codes[i].as_deref())
    }

    /// Number of symbols with an assigned code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| code.is_some()).count()
    }

    /// Return true if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|code| code.is_none())
    }

    /// Iterate over `(symbol, code)` pairs in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(i, code)| code.as_deref().map(|c| (index_symbol(i), c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;

    fn table_for(text: &str) -> CodeTable {
        let freqs = FrequencyTable::analyze(text);
        let tree = HuffmanTree::build(&freqs).unwrap();
        CodeTable::from_tree(&tree)
    }

    #[test]
    fn test_two_symbol_codes_are_one_bit() {
        let table = table_for("aab");
        assert_eq!(table.len(), 2);
        let a = table.code('a').unwrap();
        let b = table.code('b').unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_ne!(a, b);
        assert!(a == "0" || a == "1");
    }

    #[test]
    fn test_frequent_symbols_get_shorter_codes() {
        // {a: 4, b: 2, c: 1}: the two rarest symbols merge first, so 'a'
        // stays at depth 1 and 'b', 'c' land at depth 2.
        let table = table_for("aaaabbc");
        assert_eq!(table.code('a').unwrap().len(), 1);
        assert_eq!(table.code('b').unwrap().len(), 2);
        assert_eq!(table.code('c').unwrap().len(), 2);
    }

    #[test]
    fn test_single_symbol_code_is_zero() {
        let table = table_for("aaaa");
        assert_eq!(table.code('a'), Some("0"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_untrained_symbols_have_no_code() {
        let table = table_for("aab");
        assert_eq!(table.code('z'), None);
        assert_eq!(table.code('\n'), None);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let table = table_for("abracadabra");
        let codes: Vec<&str> = table.iter().map(|(_, code)| code).collect();
        assert_eq!(codes.len(), 5); // a b c d r
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{a:?} prefixes {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_iter_is_alphabet_ordered() {
        let table = table_for("cba");
        let symbols: Vec<char> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec!['a', 'b', 'c']);
    }
}
