//! Lexical scope tree.
//!
//! A tree isomorphic to the nesting of functions and compound statements,
//! carrying per-block variable bindings with their stack offsets. Scopes are
//! stored in an arena (`IndexVec`) and refer to each other by `ScopeId`, so
//! the tree needs no parent back-pointers beyond an index.
//!
//! # Offset model
//!
//! Every variable occupies 8 bytes and is addressed as `[rbp - offset]`. On
//! scope entry `current_offset` starts at the parent's frame size, so nested
//! scopes allocate below their parent's slots and never overlap. A scope's
//! frame size is its final `current_offset`.

use std::fmt::Write;

use scc_util::{define_idx, IndexVec, Symbol};

define_idx!(ScopeId);

/// Variable type; the subset has exactly one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ty {
    Int,
}

/// Size in bytes of every stack slot
pub const SLOT_SIZE: u32 = 8;

/// A variable binding with its assigned stack slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    /// Variable name
    pub name: Symbol,
    /// Variable type
    pub ty: Ty,
    /// Byte distance below the frame base; address is `[rbp - offset]`
    pub offset: u32,
    /// Slot size in bytes
    pub size: u32,
}

/// A single lexical scope
#[derive(Debug)]
pub struct Scope {
    /// Enclosing scope, `None` for the root
    pub parent: Option<ScopeId>,
    /// Child scopes in source order
    pub children: Vec<ScopeId>,
    /// Bindings in declaration order
    pub variables: Vec<Variable>,
    /// Running offset; equals the largest offset of any owned variable
    pub current_offset: u32,
}

/// Arena-backed scope tree
///
/// Built once by the analyser; the generator traverses it read-only in the
/// same child order it was built in.
#[derive(Debug)]
pub struct ScopeTree {
    scopes: IndexVec<ScopeId, Scope>,
    root: ScopeId,
}

impl ScopeTree {
    /// Create a tree holding only the root scope
    pub fn new() -> Self {
        let mut scopes = IndexVec::new();
        let root = scopes.push(Scope {
            parent: None,
            children: Vec::new(),
            variables: Vec::new(),
            current_offset: 0,
        });

        Self { scopes, root }
    }

    /// The root scope
    pub fn root(&self) -> ScopeId {
        self.root
    }

    /// Append a fresh child scope under `parent`
    ///
    /// The child's offset counter starts at the parent's frame size so its
    /// slots land below every slot the parent owns.
    pub fn push_child(&mut self, parent: ScopeId) -> ScopeId {
        let start_offset = self.scopes[parent].current_offset;
        let child = self.scopes.push(Scope {
            parent: Some(parent),
            children: Vec::new(),
            variables: Vec::new(),
            current_offset: start_offset,
        });
        self.scopes[parent].children.push(child);
        child
    }

    /// Add a variable to `scope`, assigning the next slot
    ///
    /// Returns the assigned offset. Duplicate checking is the caller's
    /// responsibility (the analyser reports redeclarations with a span).
    pub fn add_variable(&mut self, scope: ScopeId, name: Symbol, ty: Ty, size: u32) -> u32 {
        let scope = &mut self.scopes[scope];
        scope.current_offset += size;
        scope.variables.push(Variable {
            name,
            ty,
            offset: scope.current_offset,
            size,
        });
        scope.current_offset
    }

    /// Look up a name in `scope` only (no parent search)
    pub fn offset_of(&self, scope: ScopeId, name: Symbol) -> Option<u32> {
        self.scopes[scope]
            .variables
            .iter()
            .find(|var| var.name == name)
            .map(|var| var.offset)
    }

    /// Look up a name in `scope` or any ancestor; the first match wins
    pub fn resolve(&self, scope: ScopeId, name: Symbol) -> Option<u32> {
        let mut current = Some(scope);
        while let Some(id) = current {
            if let Some(offset) = self.offset_of(id, name) {
                return Some(offset);
            }
            current = self.scopes[id].parent;
        }
        None
    }

    /// Total bytes the scope's frame spans, parent slots included
    pub fn frame_size(&self, scope: ScopeId) -> u32 {
        self.scopes[scope].current_offset
    }

    /// The `index`-th child of `scope`, if it exists
    pub fn child(&self, scope: ScopeId, index: usize) -> Option<ScopeId> {
        self.scopes[scope].children.get(index).copied()
    }

    /// Number of children under `scope`
    pub fn child_count(&self, scope: ScopeId) -> usize {
        self.scopes[scope].children.len()
    }

    /// The parent of `scope`, `None` for the root
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes[scope].parent
    }

    /// Bindings owned by `scope` in declaration order
    pub fn variables(&self, scope: ScopeId) -> &[Variable] {
        &self.scopes[scope].variables
    }

    /// Render the tree for debugging, depth-first
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_scope(&mut out, self.root, 0);
        out
    }

    fn dump_scope(&self, out: &mut String, scope: ScopeId, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = writeln!(
            out,
            "{}Scope (depth={}, frameSize={}):",
            indent,
            depth,
            self.frame_size(scope)
        );

        for var in &self.scopes[scope].variables {
            let _ = writeln!(
                out,
                "{}  - {} : offset={}, size={}",
                indent, var.name, var.offset, var.size
            );
        }

        for &child in &self.scopes[scope].children {
            self.dump_scope(out, child, depth + 1);
        }
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}
