//! # retrace
//!
//! `retrace` is a small regular-expression engine: it compiles a pattern string into a
//! Thompson-constructed NFA and simulates that NFA against an input string to decide full-string
//! membership.
//!
//! The supported syntax is deliberately small: literal characters, `.` (any character),
//! concatenation, `|` (union), `*`/`+`/`?` (quantifiers), and `(`/`)` for grouping. There is no
//! submatch extraction, no anchoring, no character classes, and no backreferences — this is a
//! membership checker, not a general-purpose text-search engine.
//!
//! ## Example
//!
//! ```rust
//! let nfa = retrace::compile("a(b|c)*d").unwrap();
//! assert!(retrace::evaluate(&nfa, "ad"));
//! assert!(retrace::evaluate(&nfa, "abccbd"));
//! assert!(!retrace::evaluate(&nfa, "abx"));
//! ```
//!
//! ## Pipeline
//!
//! * [`lexer::tokenize`] splits the pattern into literal/metacharacter tokens.
//! * [`parser::parse`] groups parentheses and folds unary/concatenation/union precedence into a
//!   [`parser::ParseNode`] tree.
//! * [`nfa::build`] recursively composes that tree into an [`nfa::Nfa`] using Thompson's
//!   construction.
//! * [`nfa::Nfa::accepts`] (or the free function [`evaluate`]) simulates the NFA via
//!   epsilon-closure active-state tracking.

pub mod error;
pub mod lexer;
pub mod nfa;
pub mod parser;
mod table;

pub use error::PatternError;
pub use nfa::Nfa;

/// Compiles a pattern string into an [`Nfa`].
pub fn compile(pattern: &str) -> Result<Nfa, PatternError> {
    let tokens = lexer::tokenize(pattern)?;
    let tree = parser::parse(&tokens)?;
    Ok(nfa::build(&tree))
}

/// Decides whether `nfa` accepts `input` in full.
pub fn evaluate(nfa: &Nfa, input: &str) -> bool {
    nfa.accepts(input)
}
