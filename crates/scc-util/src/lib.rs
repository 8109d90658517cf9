//! scc-util - Core Utilities and Foundation Types
//!
//! Shared infrastructure for the scc compiler pipeline:
//!
//! - [`span`]: source location tracking (byte offsets plus 1-based
//!   line/column), attached to tokens and diagnostics.
//! - [`diagnostic`]: error and warning reporting. Phases return typed errors;
//!   the driver converts them into [`Diagnostic`]s and renders them with the
//!   offending source line.
//! - [`symbol`]: global string interning. Identifiers are 4-byte [`Symbol`]
//!   handles with O(1) comparison.
//! - [`index_vec`]: typed-index vectors, used as the arena behind the scope
//!   tree.

pub mod diagnostic;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use index_vec::{Idx, IndexVec};
pub use span::Span;
pub use symbol::Symbol;

// Re-export commonly used hash containers
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
