use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text cannot be addressed by the suffix array index type or
    /// exceeds the configured cap.
    #[error("text of length {len} exceeds the maximum of {max}")]
    TextTooLong { len: usize, max: usize },

    #[error("not a suffix array of a text of length {len}: {reason}")]
    NotAPermutation { len: usize, reason: String },

    /// the pair at ranks `index - 1` and `index` is out of order with respect to
    /// the ranks `sa` itself assigns
    #[error("suffix at rank {index} sorts before its predecessor")]
    Unsorted { index: usize },

    #[error("array length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("unknown suffix array algorithm {0:?} (expected naive, doubling or divsufsort)")]
    UnknownAlgorithm(String),
}
