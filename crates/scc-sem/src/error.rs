//! Semantic analysis error types.
//!
//! All analysis errors are fatal to the compilation unit.

use scc_util::{Span, Symbol};
use thiserror::Error;

/// Error type for semantic analysis
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    /// No `int main()` in the program
    #[error("main function is not defined")]
    MainNotDefined,

    /// A name was declared twice in the same scope
    #[error("variable '{name}' already declared in this scope")]
    Redeclaration { name: Symbol, span: Span },

    /// A variable was referenced without any visible declaration
    #[error("use of undeclared variable '{name}'")]
    UndeclaredVariable { name: Symbol, span: Span },

    /// A call passes more arguments than the six argument registers
    #[error("too many arguments in call to '{name}': {count} given, at most {max} supported")]
    TooManyArguments {
        name: Symbol,
        count: usize,
        max: usize,
        span: Span,
    },

    /// A function declares more parameters than the six argument registers
    #[error("function '{name}' declares {count} parameters, at most {max} supported")]
    TooManyParameters {
        name: Symbol,
        count: usize,
        max: usize,
        span: Span,
    },
}

impl AnalysisError {
    /// Source location of the error, when one exists
    pub fn span(&self) -> Option<Span> {
        match self {
            AnalysisError::MainNotDefined => None,
            AnalysisError::Redeclaration { span, .. }
            | AnalysisError::UndeclaredVariable { span, .. }
            | AnalysisError::TooManyArguments { span, .. }
            | AnalysisError::TooManyParameters { span, .. } => Some(*span),
        }
    }
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
