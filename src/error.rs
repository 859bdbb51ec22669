//! Error taxonomy for interpretation.

use thiserror::Error;

/// Failures raised while walking a symbol string.
///
/// Interpretation is fail-fast: the first error aborts the walk, since
/// continuing with a corrupted branch stack would silently produce wrong
/// geometry. Each variant carries the index of the offending symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TraceError {
    /// A `]` with no matching `[`; the input's bracket nesting is malformed.
    #[error("unmatched ']' at symbol index {index}: branch stack is empty")]
    StackUnderflow { index: usize },

    /// A `[` that would grow the branch stack past the configured limit.
    #[error("branch stack exceeded maximum depth {max_depth} at symbol index {index}")]
    StackOverflow { index: usize, max_depth: usize },

    /// A symbol outside the table, rejected under
    /// [`UnknownSymbolPolicy::Fail`](crate::UnknownSymbolPolicy::Fail).
    #[error("unrecognized symbol {symbol:?} at index {index}")]
    UnknownSymbol { symbol: char, index: usize },
}
