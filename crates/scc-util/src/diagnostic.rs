//! Diagnostic module - Error reporting infrastructure.
//!
//! Compiler phases return typed errors; the driver turns them into
//! [`Diagnostic`]s and emits them through a [`Handler`]. The [`render`]
//! function produces the final stderr text, including the offending source
//! line with a caret under the error position.
//!
//! # Examples
//!
//! ```
//! use scc_util::diagnostic::{DiagnosticBuilder, Handler};
//! use scc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected token")
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

use std::cell::RefCell;
use std::fmt;

use crate::Span;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that aborts compilation
    Error,
    /// A warning that does not abort compilation
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Severity level
    pub level: Level,
    /// Main message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }
}

/// Fluent builder for diagnostics
///
/// # Examples
///
/// ```
/// use scc_util::diagnostic::{DiagnosticBuilder, Handler};
/// use scc_util::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("use of undeclared variable 'x'")
///     .span(Span::DUMMY)
///     .help("declare it with `int x;` first")
///     .emit(&handler);
/// ```
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Start building an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::error(message, Span::DUMMY),
        }
    }

    /// Start building a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::warning(message, Span::DUMMY),
        }
    }

    /// Attach a source span
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Attach a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    /// Attach a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    /// Finish building without emitting
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Emit the diagnostic through a handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.diagnostic);
    }
}

/// Handler for collecting diagnostics
///
/// Collects diagnostics behind a `RefCell` so phases can report through a
/// shared reference.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get all diagnostics collected so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a diagnostic to its final text form.
///
/// When the span carries a valid line number and the source is provided, the
/// offending line is shown with a caret under the error column:
///
/// ```text
/// error: expected Semicolon, got CloseBrace
///   --> 2:14
///    |
///  2 |     return 42
///    |              ^
/// ```
pub fn render(diagnostic: &Diagnostic, source: Option<&str>) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = write!(out, "{}: {}", diagnostic.level, diagnostic.message);

    if diagnostic.span.line > 0 {
        let _ = write!(
            out,
            "\n  --> {}:{}",
            diagnostic.span.line, diagnostic.span.column
        );

        if let Some(source) = source {
            if let Some(line_text) = source.lines().nth(diagnostic.span.line as usize - 1) {
                let line_no = diagnostic.span.line.to_string();
                let gutter = " ".repeat(line_no.len());
                let caret_pad = " ".repeat(diagnostic.span.column.saturating_sub(1) as usize);
                let _ = write!(
                    out,
                    "\n {} |\n {} | {}\n {} | {}^",
                    gutter, line_no, line_text, gutter, caret_pad
                );
            }
        }
    }

    for note in &diagnostic.notes {
        let _ = write!(out, "\nnote: {}", note);
    }
    for help in &diagnostic.helps {
        let _ = write!(out, "\nhelp: {}", help);
    }

    out
}
