//! AST pretty-printer.
//!
//! Re-serialises a [`Program`] to canonical source text: four-space
//! indentation, one statement per line, explicit parentheses only where the
//! tree carries a `Grouped` node. Printing is stable: parsing the printed
//! form and printing again reproduces the same text.

use std::fmt::Write;

use crate::ast::*;

/// Render a program to canonical source text.
pub fn print_program(program: &Program) -> String {
    let mut out = String::new();

    for (index, function) in program.functions.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        print_function(&mut out, function);
    }

    out
}

fn print_function(out: &mut String, function: &Function) {
    let _ = write!(out, "int {}(", function.name);
    for (index, param) in function.params.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "int {}", param.name);
    }
    out.push_str(") ");
    print_block(out, &function.body, 0);
    out.push('\n');
}

fn print_block(out: &mut String, block: &Block, depth: usize) {
    out.push_str("{\n");
    for stmt in &block.stmts {
        print_stmt(out, stmt, depth + 1);
    }
    indent(out, depth);
    out.push('}');
}

fn print_stmt(out: &mut String, stmt: &Stmt, depth: usize) {
    indent(out, depth);
    match stmt {
        Stmt::Empty => out.push_str(";\n"),
        Stmt::Return(ret) => {
            match &ret.value {
                Some(value) => {
                    let _ = write!(out, "return {};", ExprDisplay(value));
                },
                None => out.push_str("return;"),
            }
            out.push('\n');
        },
        Stmt::VarDecl(decl) => {
            match &decl.init {
                Some(init) => {
                    let _ = write!(out, "int {} = {};", decl.name, ExprDisplay(init));
                },
                None => {
                    let _ = write!(out, "int {};", decl.name);
                },
            }
            out.push('\n');
        },
        Stmt::Assign(assign) => {
            let _ = write!(out, "{} = {};", assign.name, ExprDisplay(&assign.value));
            out.push('\n');
        },
        Stmt::If(if_stmt) => {
            let _ = write!(out, "if ({}) ", ExprDisplay(&if_stmt.cond));
            print_block(out, &if_stmt.then_block, depth);
            if let Some(else_block) = &if_stmt.else_block {
                out.push_str(" else ");
                print_block(out, else_block, depth);
            }
            out.push('\n');
        },
        Stmt::While(while_stmt) => {
            let _ = write!(out, "while ({}) ", ExprDisplay(&while_stmt.cond));
            print_block(out, &while_stmt.body, depth);
            out.push('\n');
        },
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("    ");
    }
}

/// Display adapter for expressions.
struct ExprDisplay<'a>(&'a Expr);

impl std::fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Expr::Literal(value) => write!(f, "{}", value),
            Expr::Var(var) => write!(f, "{}", var.name),
            Expr::Grouped(inner) => write!(f, "({})", ExprDisplay(inner)),
            Expr::Binary(bin) => write!(
                f,
                "{} {} {}",
                ExprDisplay(&bin.left),
                bin.op.symbol(),
                ExprDisplay(&bin.right)
            ),
            Expr::Comparison(cmp) => write!(
                f,
                "{} {} {}",
                ExprDisplay(&cmp.left),
                cmp.op.symbol(),
                ExprDisplay(&cmp.right)
            ),
            Expr::Call(call) => {
                write!(f, "{}(", call.name)?;
                for (index, arg) in call.args.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", ExprDisplay(arg))?;
                }
                f.write_str(")")
            },
        }
    }
}
