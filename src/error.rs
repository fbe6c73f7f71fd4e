//! Error types for tokenization.

use thiserror::Error;

/// Error produced when tokenization cannot make progress.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizationError {
    /// No rule in the table matched the remaining input.
    ///
    /// The default table ends with a single-character fallback rule, so
    /// this can only fire with a custom table that leaves gaps (or an
    /// empty one). It carries the text that could not be matched.
    #[error("unable to tokenize remaining input at byte {offset}: {remaining:?}")]
    UnmatchedInput {
        /// Byte offset of the unmatched position.
        offset: usize,
        /// The remaining unconsumed text.
        remaining: String,
    },
}

/// Result type alias for tokenization operations.
pub type LexResult<T> = std::result::Result<T, TokenizationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_input_display() {
        let err = TokenizationError::UnmatchedInput {
            offset: 4,
            remaining: "@@".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unable to tokenize remaining input at byte 4: \"@@\""
        );
    }
}
