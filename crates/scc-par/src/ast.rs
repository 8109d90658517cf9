//! AST node definitions and builders.
//!
//! The tree is a strict ownership hierarchy: a node exclusively owns its
//! children, nothing is shared, and no node is mutated after being inserted
//! into its parent. The associated constructor functions are the only way
//! the parser builds `Expr` and `Stmt` nodes, keeping variant construction
//! in one place.

use scc_util::{Span, Symbol};

/// AST root - an ordered sequence of function definitions
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub functions: Vec<Function>,
}

/// Function definition
///
/// The return type is always `int` in this subset, so only the name,
/// parameters, and body are carried.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Function name
    pub name: Symbol,

    /// Ordered parameter list (each of type `int`)
    pub params: Vec<Param>,

    /// Function body
    pub body: Block,

    /// Source location of the `int` keyword introducing the function
    pub span: Span,
}

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Parameter name
    pub name: Symbol,

    /// Source location of the name
    pub span: Span,
}

/// Compound statement: `{ statement* }`
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

/// Statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `;`
    Empty,

    /// `return expr?;`
    Return(ReturnStmt),

    /// `int name (= expr)?;`
    VarDecl(VarDeclStmt),

    /// `name = expr;`
    Assign(AssignStmt),

    /// `if (cond) { ... } (else { ... })?`
    If(IfStmt),

    /// `while (cond) { ... }`
    While(WhileStmt),
}

/// Return statement
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    /// Returned value; a bare `return;` yields zero
    pub value: Option<Expr>,
}

/// Variable declaration
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    /// Declared name
    pub name: Symbol,

    /// Optional initialiser
    pub init: Option<Expr>,

    /// Source location of the name
    pub span: Span,
}

/// Assignment statement
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    /// Assigned variable
    pub name: Symbol,

    /// Assigned value
    pub value: Expr,

    /// Source location of the name
    pub span: Span,
}

/// If statement
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    /// Condition; any non-zero value is true
    pub cond: Expr,

    /// Then branch
    pub then_block: Block,

    /// Optional else branch
    pub else_block: Option<Block>,
}

/// While loop
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    /// Loop condition
    pub cond: Expr,

    /// Loop body
    pub body: Block,
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer literal
    Literal(i64),

    /// Variable reference
    Var(VarExpr),

    /// Parenthesised expression
    Grouped(Box<Expr>),

    /// Arithmetic: `+`, `-`, `*`, `/`
    Binary(BinaryExpr),

    /// Comparison: `==`, `!=`, `<`, `<=`, `>`, `>=`; evaluates to 0 or 1
    Comparison(ComparisonExpr),

    /// Function call with up to six arguments
    Call(CallExpr),
}

/// Variable reference
#[derive(Debug, Clone, PartialEq)]
pub struct VarExpr {
    pub name: Symbol,
    pub span: Span,
}

/// Binary arithmetic expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: BinOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Comparison expression
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonExpr {
    pub op: CmpOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Function call expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: Symbol,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// The operator's source spelling
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    /// The operator's source spelling
    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
        }
    }
}

impl Expr {
    /// Integer literal expression
    pub fn literal(value: i64) -> Expr {
        Expr::Literal(value)
    }

    /// Variable reference expression
    pub fn var(name: Symbol, span: Span) -> Expr {
        Expr::Var(VarExpr { name, span })
    }

    /// Parenthesised expression
    pub fn grouped(inner: Expr) -> Expr {
        Expr::Grouped(Box::new(inner))
    }

    /// Arithmetic expression
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary(BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Comparison expression
    pub fn comparison(op: CmpOp, left: Expr, right: Expr) -> Expr {
        Expr::Comparison(ComparisonExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Function call expression
    pub fn call(name: Symbol, args: Vec<Expr>, span: Span) -> Expr {
        Expr::Call(CallExpr { name, args, span })
    }
}

impl Stmt {
    /// Empty statement
    pub fn empty() -> Stmt {
        Stmt::Empty
    }

    /// Return statement
    pub fn ret(value: Option<Expr>) -> Stmt {
        Stmt::Return(ReturnStmt { value })
    }

    /// Variable declaration
    pub fn var_decl(name: Symbol, init: Option<Expr>, span: Span) -> Stmt {
        Stmt::VarDecl(VarDeclStmt { name, init, span })
    }

    /// Assignment statement
    pub fn assign(name: Symbol, value: Expr, span: Span) -> Stmt {
        Stmt::Assign(AssignStmt { name, value, span })
    }

    /// If statement
    pub fn if_stmt(cond: Expr, then_block: Block, else_block: Option<Block>) -> Stmt {
        Stmt::If(IfStmt {
            cond,
            then_block,
            else_block,
        })
    }

    /// While loop
    pub fn while_stmt(cond: Expr, body: Block) -> Stmt {
        Stmt::While(WhileStmt { cond, body })
    }
}
