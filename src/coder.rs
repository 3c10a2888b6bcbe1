//! Lossless encode/decode between text and bit-strings.
//!
//! Encoding concatenates per-symbol codes. Decoding is an explicit state
//! machine: a cursor walks the tree one bit at a time and resets to the
//! root every time a leaf emits a symbol. Because the codes are
//! prefix-free, the bit-string needs no length prefix or padding; its
//! length alone ends the walk.

use crate::code::CodeTable;
use crate::error::Result;
use crate::freq::FrequencyTable;
use crate::tree::{HuffmanTree, Node};

/// A trained Huffman coder.
///
/// Owns the frequency table, code tree, and code table built from one
/// training text; all three are immutable after construction. Encoding uses
/// the table, decoding walks the tree.
#[derive(Clone)]
pub struct HuffmanCoder {
    freqs: FrequencyTable,
    tree: HuffmanTree,
    table: CodeTable,
}

impl std::fmt::Debug for HuffmanCoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuffmanCoder")
            .field("symbols", &self.table.len())
            .field("depth", &self.tree.depth())
            .finish()
    }
}

impl HuffmanCoder {
    /// Train a coder on `text`: analyze frequencies, build the tree, derive
    /// the code table.
    ///
    /// Returns [`crate::Error::EmptyInput`] when `text` contains no
    /// alphabet-eligible character.
    pub fn new(text: &str) -> Result<Self> {
        let freqs = FrequencyTable::analyze(text);
        let tree = HuffmanTree::build(&freqs)?;
        let table = CodeTable::from_tree(&tree);
        Ok(Self { freqs, tree, table })
    }

    /// Encode `text` as a bit-string of `'0'`/`'1'` characters.
    ///
    /// Characters without a code (out of alphabet, or absent from the
    /// training text) are skipped and produce no bits. Round-trips are
    /// exact only for text whose characters the training text covers.
    pub fn encode(&self, text: &str) -> String {
        let mut bits = String::new();
        for c in text.chars() {
            if let Some(code) = self.table.code(c) {
                bits.push_str(code);
            }
        }
        bits
    }

    /// Number of bits [`encode`](Self::encode) would produce for `text`,
    /// without building the string.
    pub fn encoded_len(&self, text: &str) -> usize {
        text.chars()
            .filter_map(|c| self.table.code(c))
            .map(str::len)
            .sum()
    }

    /// Decode a bit-string back into text.
    ///
    /// `'0'` steps left, `'1'` steps right; reaching a leaf emits its symbol
    /// and resets the cursor to the root. Trailing bits that do not complete
    /// a symbol are discarded, and characters other than `'0'`/`'1'` are
    /// skipped; neither is an error.
    pub fn decode(&self, bits: &str) -> String {
        let root = self.tree.root();

        // Single-leaf tree: every bit stands for the sole trained symbol,
        // whatever its value.
        if let Node::Leaf { symbol, .. } = root {
            return bits
                .chars()
                .filter(|c| matches!(c, '0' | '1'))
                .map(|_| *symbol)
                .collect();
        }

        let mut out = String::new();
        let mut current = root;
        for bit in bits.chars() {
            match current {
                Node::Internal { left, right, .. } => {
                    current = match bit {
                        '0' => left,
                        '1' => right,
                        _ => continue,
                    };
                }
                // The cursor resets to the root (internal here) after every
                // emitted symbol, so it never rests on a leaf.
                Node::Leaf { .. } => unreachable!(),
            }
            if let Node::Leaf { symbol, .. } = current {
                out.push(*symbol);
                current = root;
            }
        }
        out
    }

    /// Return the frequency table the coder was trained on.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.freqs
    }

    /// Return the code tree.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// Return the code table.
    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_roundtrip_basic() {
        let text = "abracadabra";
        let coder = HuffmanCoder::new(text).unwrap();
        let bits = coder.encode(text);
        assert!(bits.chars().all(|c| c == '0' || c == '1'));
        assert_eq!(coder.decode(&bits), text);
    }

    #[test]
    fn test_single_symbol_fixed_case() {
        let coder = HuffmanCoder::new("aaaa").unwrap();
        assert_eq!(coder.code_table().len(), 1);
        assert_eq!(coder.encode("aaaa"), "0000");
        assert_eq!(coder.decode("0000"), "aaaa");
    }

    #[test]
    fn test_single_leaf_decode_ignores_bit_values() {
        let coder = HuffmanCoder::new("aaaa").unwrap();
        assert_eq!(coder.decode("0110"), "aaaa");
    }

    #[test]
    fn test_single_leaf_decode_skips_non_bit_characters() {
        // Only '0' and '1' count as occurrences in the sole-symbol path.
        let coder = HuffmanCoder::new("aaaa").unwrap();
        assert_eq!(coder.decode("0x1y"), "aa");
        assert_eq!(coder.decode("xyz"), "");
    }

    #[test]
    fn test_empty_training_is_error() {
        assert!(matches!(HuffmanCoder::new(""), Err(Error::EmptyInput)));
        assert!(matches!(HuffmanCoder::new("\n\t"), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_encode_skips_uncoded_characters() {
        let coder = HuffmanCoder::new("aab").unwrap();
        // 'z' is in the alphabet but untrained; '\n' is out of alphabet.
        assert_eq!(coder.encode("azb\n"), coder.encode("ab"));
        assert_eq!(coder.encode("z\n"), "");
    }

    #[test]
    fn test_empty_text_and_empty_bits() {
        let coder = HuffmanCoder::new("aab").unwrap();
        assert_eq!(coder.encode(""), "");
        assert_eq!(coder.decode(""), "");
    }

    #[test]
    fn test_decode_discards_trailing_partial_code() {
        // Frequencies {a: 2, b: 1, c: 1} force one 1-bit and two 2-bit
        // codes, so dropping the last bit of "abc" truncates c's code.
        let coder = HuffmanCoder::new("aabc").unwrap();
        let bits = coder.encode("abc");
        assert_eq!(bits.len(), 5);
        assert_eq!(coder.decode(&bits[..bits.len() - 1]), "ab");
    }

    #[test]
    fn test_decode_skips_non_bit_characters() {
        let coder = HuffmanCoder::new("aab").unwrap();
        let bits = coder.encode("ab");
        let noisy: String = bits.chars().flat_map(|c| [c, 'x']).collect();
        assert_eq!(coder.decode(&noisy), "ab");
    }

    #[test]
    fn test_encoded_length_is_minimal() {
        // {a: 4, b: 2, c: 1} forces lengths {1, 2, 2}: 4*1 + 2*2 + 1*2 = 10
        // bits. Pairing any other two leaves first costs 12 or 13.
        let coder = HuffmanCoder::new("aaaabbc").unwrap();
        let bits = coder.encode("aaaabbc");
        assert_eq!(bits.len(), 10);
        assert_eq!(coder.encoded_len("aaaabbc"), 10);
        assert_eq!(coder.decode(&bits), "aaaabbc");
    }

    #[test]
    fn test_encoded_len_matches_encode() {
        let coder = HuffmanCoder::new("the quick brown fox").unwrap();
        for text in ["the quick brown fox", "fox he", "", "zzz###"] {
            assert_eq!(coder.encoded_len(text), coder.encode(text).len());
        }
    }

    #[test]
    fn test_construction_is_pure() {
        // Fresh coders over the same text: identical tables, identical bits.
        let first = HuffmanCoder::new("mississippi").unwrap();
        let second = HuffmanCoder::new("mississippi").unwrap();
        assert_eq!(first.code_table(), second.code_table());
        assert_eq!(first.encode("mississippi"), second.encode("mississippi"));
    }

    #[test]
    fn test_superset_training_covers_subset() {
        let coder = HuffmanCoder::new("abcdefgh").unwrap();
        let bits = coder.encode("hgfe");
        assert_eq!(coder.decode(&bits), "hgfe");
    }
}
