//! Error types for code generation.

use scc_util::Symbol;
use thiserror::Error;

/// Error type for the generator
#[derive(Debug, Clone, Error)]
pub enum CodeGenError {
    /// The generator's scope walk diverged from the analyser's. This is an
    /// internal invariant violation, not a user error.
    #[error("scope traversal mismatch (no child scope)")]
    ScopeMismatch,

    /// A variable survived analysis but has no slot in the expected scope.
    /// Also an internal invariant violation.
    #[error("variable '{0}' not found in scope")]
    UnresolvedVariable(Symbol),
}

/// Result type alias for code generation operations
pub type Result<T> = std::result::Result<T, CodeGenError>;
