//! Error types for the Huffman coding engine.

use thiserror::Error;

/// Error variants for coder construction.
///
/// Encoding and decoding never fail: untrained characters are skipped and
/// malformed trailing bits are discarded, both by contract.
#[derive(Debug, Error)]
pub enum Error {
    /// The training text contained no character from the printable alphabet,
    /// so there is nothing to build a code tree from.
    #[error("training text contains no alphabet-eligible characters")]
    EmptyInput,
}

/// A specialized Result type for coder operations.
pub type Result<T> = std::result::Result<T, Error>;
