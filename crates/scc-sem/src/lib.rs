//! scc-sem - Semantic Analysis (Scope Construction & Name Checking)
//!
//! First walk over the AST. Builds a [`ScopeTree`] mirroring the lexical
//! structure of the program and validates declaration and use rules:
//!
//! 1. A `main` function must exist.
//! 2. Each function gets a fresh child scope under root; its parameters are
//!    variables in that scope.
//! 3. Each compound statement opens its own child scope.
//! 4. Redeclaring a name in the same scope is an error. An inner scope may
//!    shadow an ancestor binding; resolution finds the innermost one.
//! 5. Every variable reference must resolve in the current scope chain.
//! 6. Calls carry at most six arguments. Call targets are not validated
//!    against defined functions.
//!
//! The resulting scope tree is handed to the generator, which walks it
//! read-only in the same order it was built.
//!
//! ```
//! use scc_lex::Lexer;
//! use scc_par::Parser;
//! use scc_sem::Analyzer;
//!
//! let program = Parser::new(Lexer::new("int main() { int x = 1; return x; }"))
//!     .parse()
//!     .unwrap();
//! let tree = Analyzer::analyze(&program).unwrap();
//! assert_eq!(tree.child_count(tree.root()), 1); // one function scope
//! ```

pub mod error;
pub mod scope;

pub use error::{AnalysisError, Result};
pub use scope::{Scope, ScopeId, ScopeTree, Ty, Variable, SLOT_SIZE};

use indexmap::IndexMap;
use scc_par::ast::*;
use scc_util::symbol::SYM_MAIN;
use scc_util::Symbol;

/// Maximum number of call arguments (the six System-V argument registers)
pub const MAX_CALL_ARGS: usize = 6;

/// Signature information collected per function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionInfo {
    /// Number of declared parameters
    pub arity: usize,
}

/// Semantic analyzer
///
/// Owns the scope tree while it is being built; [`Analyzer::analyze`]
/// releases it to the caller on success.
pub struct Analyzer {
    tree: ScopeTree,
    current: ScopeId,
    functions: IndexMap<Symbol, FunctionInfo>,
}

impl Analyzer {
    fn new() -> Self {
        let tree = ScopeTree::new();
        let current = tree.root();
        Self {
            tree,
            current,
            functions: IndexMap::new(),
        }
    }

    /// Analyze a program, producing its scope tree
    pub fn analyze(program: &Program) -> Result<ScopeTree> {
        let mut analyzer = Self::new();

        for function in &program.functions {
            analyzer
                .functions
                .insert(function.name, FunctionInfo {
                    arity: function.params.len(),
                });
        }

        if !analyzer.functions.contains_key(&SYM_MAIN) {
            return Err(AnalysisError::MainNotDefined);
        }

        for function in &program.functions {
            analyzer.visit_function(function)?;
        }

        Ok(analyzer.tree)
    }

    fn visit_function(&mut self, function: &Function) -> Result<()> {
        if function.params.len() > MAX_CALL_ARGS {
            return Err(AnalysisError::TooManyParameters {
                name: function.name,
                count: function.params.len(),
                max: MAX_CALL_ARGS,
                span: function.span,
            });
        }

        self.current = self.tree.push_child(self.current);

        for param in &function.params {
            self.declare(param.name, param.span)?;
        }

        self.visit_compound(&function.body)?;

        self.current = self.tree.parent(self.current).unwrap_or(self.current);
        Ok(())
    }

    fn visit_compound(&mut self, block: &Block) -> Result<()> {
        self.current = self.tree.push_child(self.current);

        for stmt in &block.stmts {
            self.visit_statement(stmt)?;
        }

        self.current = self.tree.parent(self.current).unwrap_or(self.current);
        Ok(())
    }

    fn visit_statement(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::Empty => Ok(()),
            Stmt::Return(ret) => match &ret.value {
                Some(value) => self.visit_expression(value),
                None => Ok(()),
            },
            Stmt::VarDecl(decl) => {
                self.declare(decl.name, decl.span)?;
                match &decl.init {
                    Some(init) => self.visit_expression(init),
                    None => Ok(()),
                }
            },
            Stmt::Assign(assign) => {
                if self.tree.resolve(self.current, assign.name).is_none() {
                    return Err(AnalysisError::UndeclaredVariable {
                        name: assign.name,
                        span: assign.span,
                    });
                }
                self.visit_expression(&assign.value)
            },
            Stmt::If(if_stmt) => {
                self.visit_expression(&if_stmt.cond)?;
                self.visit_compound(&if_stmt.then_block)?;
                match &if_stmt.else_block {
                    Some(else_block) => self.visit_compound(else_block),
                    None => Ok(()),
                }
            },
            Stmt::While(while_stmt) => {
                self.visit_expression(&while_stmt.cond)?;
                self.visit_compound(&while_stmt.body)
            },
        }
    }

    fn visit_expression(&mut self, expr: &Expr) -> Result<()> {
        match expr {
            Expr::Literal(_) => Ok(()),
            Expr::Var(var) => {
                if self.tree.resolve(self.current, var.name).is_none() {
                    return Err(AnalysisError::UndeclaredVariable {
                        name: var.name,
                        span: var.span,
                    });
                }
                Ok(())
            },
            Expr::Grouped(inner) => self.visit_expression(inner),
            Expr::Binary(bin) => {
                self.visit_expression(&bin.left)?;
                self.visit_expression(&bin.right)
            },
            Expr::Comparison(cmp) => {
                self.visit_expression(&cmp.left)?;
                self.visit_expression(&cmp.right)
            },
            Expr::Call(call) => {
                if call.args.len() > MAX_CALL_ARGS {
                    return Err(AnalysisError::TooManyArguments {
                        name: call.name,
                        count: call.args.len(),
                        max: MAX_CALL_ARGS,
                        span: call.span,
                    });
                }
                for arg in &call.args {
                    self.visit_expression(arg)?;
                }
                Ok(())
            },
        }
    }

    /// Insert a binding into the current scope, rejecting duplicates there.
    ///
    /// Shadowing an ancestor binding is allowed; only the current scope is
    /// checked.
    fn declare(&mut self, name: Symbol, span: scc_util::Span) -> Result<()> {
        if self.tree.offset_of(self.current, name).is_some() {
            return Err(AnalysisError::Redeclaration { name, span });
        }
        self.tree.add_variable(self.current, name, Ty::Int, SLOT_SIZE);
        Ok(())
    }
}
