//! Parse error types.
//!
//! Parse errors are fatal for the compilation unit. Every error carries the
//! expected-vs-actual token kinds (or a description of what was expected),
//! the parser production that was active, and the offending token's
//! position.

use scc_lex::TokenKind;
use scc_util::Span;
use thiserror::Error;

/// Error type for the parser
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// A specific token kind was required and something else was found
    #[error("expected {}, got {} in {production}", .expected.name(), .found.name())]
    Expected {
        expected: TokenKind,
        found: TokenKind,
        production: &'static str,
        span: Span,
    },

    /// A token class was required (identifier, expression start, statement
    /// start) and something else was found
    #[error("{message}, got {} in {production}", .found.name())]
    Unexpected {
        message: &'static str,
        found: TokenKind,
        production: &'static str,
        span: Span,
    },
}

impl ParseError {
    /// Source location of the offending token
    pub fn span(&self) -> Span {
        match self {
            ParseError::Expected { span, .. } => *span,
            ParseError::Unexpected { span, .. } => *span,
        }
    }
}

/// Result type alias for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
