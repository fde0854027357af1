use thiserror::Error;

/// Everything that can go wrong while turning a pattern string into an [`crate::nfa::Nfa`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    #[error("unmatched '(' in pattern")]
    UnmatchedOpenParen,
    #[error("unmatched ')' in pattern")]
    UnmatchedCloseParen,
    #[error("'{0}' has nothing to apply to")]
    DanglingUnary(char),
    #[error("pattern ends with a bare '\\'")]
    TrailingEscape,
    #[error("parser produced {0} top-level nodes instead of 1")]
    InternalInvariantViolation(usize),
}
