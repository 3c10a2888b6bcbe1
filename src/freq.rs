//! Frequency analysis over the printable ASCII alphabet.
//!
//! The engine codes exactly the 95 printable ASCII characters (code points
//! 32 through 126). The alphabet is small and fixed, so counts live in a
//! dense array indexed by `code point - 32` rather than a hash map; anything
//! outside the alphabet is skipped without error wherever text is consumed.

/// Number of symbols in the fixed alphabet (ASCII 32..=126).
pub const ALPHABET_LEN: usize = 95;

/// First symbol of the alphabet (ASCII space).
pub const ALPHABET_START: u8 = b' ';

/// Return the alphabet index of `symbol`, or `None` if it is out of alphabet.
pub fn symbol_index(symbol: char) -> Option<usize> {
    if (' '..='~').contains(&symbol) {
        Some(symbol as usize - ALPHABET_START as usize)
    } else {
        None
    }
}

/// Return the symbol at alphabet index `index` (must be `< ALPHABET_LEN`).
pub(crate) fn index_symbol(index: usize) -> char {
    debug_assert!(index < ALPHABET_LEN);
    (ALPHABET_START + index as u8) as char
}

/// Occurrence counts for every symbol of the printable alphabet.
///
/// Built once per training text and read-only afterwards. Zero counts are
/// permitted and common; only nonzero symbols take part in tree
/// construction.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [usize; ALPHABET_LEN],
}

impl std::fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrequencyTable")
            .field("total", &self.total())
            .field("distinct", &self.distinct())
            .finish()
    }
}

impl FrequencyTable {
    /// Count symbol occurrences in `text`.
    ///
    /// Characters outside the printable alphabet are skipped. Empty input is
    /// valid and yields the all-zero table.
    pub fn analyze(text: &str) -> Self {
        let mut counts = [0usize; ALPHABET_LEN];
        for c in text.chars() {
            if let Some(i) = symbol_index(c) {
                counts[i] += 1;
            }
        }
        Self { counts }
    }

    /// Return the count recorded for `symbol` (0 for out-of-alphabet input).
    pub fn count(&self, symbol: char) -> usize {
        symbol_index(symbol).map_or(0, |i| self.counts[i])
    }

    /// Total number of alphabet-eligible characters counted.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of distinct symbols with a nonzero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Return true if no symbol was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Iterate over `(symbol, count)` pairs with nonzero counts, in
    /// alphabet order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, &c)| (index_symbol(i), c))
    }
}
