//! scc-drv - Compiler Driver
//!
//! Orchestrates the pipeline: lexing, parsing, semantic analysis, code
//! generation. Data flow is strictly linear; each phase consumes the
//! previous phase's artefact and no phase mutates a prior one. A driver
//! invocation owns the source buffer, the token stream, the AST, and the
//! scope tree, and drops them all when it returns.
//!
//! The one entry point other tooling needs is [`compile`]:
//!
//! ```
//! let asm = scc_drv::compile("int main() { return 0; }").unwrap();
//! assert!(asm.starts_with(".intel_syntax noprefix"));
//! ```
//!
//! Assembling and running the output is the separate [`toolchain`] module;
//! phase boundaries never touch the filesystem.

pub mod toolchain;

use scc_lex::{Lexer, Token};
use scc_par::{Parser, Program};
use scc_sem::Analyzer;
use scc_util::diagnostic::{Diagnostic, Handler};
use scc_util::Span;
use thiserror::Error;
use tracing::debug;

/// Error from any compilation phase
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Parse(#[from] scc_par::ParseError),

    #[error(transparent)]
    Analysis(#[from] scc_sem::AnalysisError),

    #[error(transparent)]
    CodeGen(#[from] scc_gen::CodeGenError),
}

impl CompileError {
    /// Source location of the error, when one exists
    pub fn span(&self) -> Option<Span> {
        match self {
            CompileError::Parse(err) => Some(err.span()),
            CompileError::Analysis(err) => err.span(),
            CompileError::CodeGen(_) => None,
        }
    }
}

/// Result type alias for driver operations
pub type Result<T> = std::result::Result<T, CompileError>;

/// Compile source text to x86-64 assembly.
///
/// Runs all four phases; the first error aborts the unit. Identical inputs
/// produce byte-identical assembly.
pub fn compile(source: &str) -> Result<String> {
    debug!("lexing");
    let lexer = Lexer::new(source);

    debug!("parsing");
    let program = Parser::new(lexer).parse()?;

    debug!("analysing");
    let scopes = Analyzer::analyze(&program)?;

    debug!("generating code");
    let asm = scc_gen::generate(&program, &scopes)?;

    Ok(asm)
}

/// Lex source text into its full token stream (diagnostic output).
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokens().to_vec()
}

/// Parse source text into an AST (diagnostic output).
pub fn parse(source: &str) -> Result<Program> {
    let program = Parser::new(Lexer::new(source)).parse()?;
    Ok(program)
}

/// Convert a compile error into a diagnostic on the handler.
pub fn report(error: &CompileError, handler: &Handler) {
    let span = error.span().unwrap_or(Span::DUMMY);
    handler.emit_diagnostic(Diagnostic::error(error.to_string(), span));
}
