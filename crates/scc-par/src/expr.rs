//! Expression parsing.
//!
//! One routine per precedence level, each calling the next-tighter level for
//! its operands. Arithmetic levels loop for left associativity; the
//! comparison level accepts at most one operator and rejects a second one
//! outright rather than mis-parsing `a < b < c`.

use scc_lex::TokenKind;

use crate::ast::{BinOp, CmpOp, Expr};
use crate::error::{ParseError, Result};
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parse an expression: `comparison`
    pub(crate) fn parse_expression(&mut self) -> Result<Expr> {
        self.parse_comparison()
    }

    /// `addsub ( ('=='|'!='|'<'|'<='|'>'|'>=') addsub )?`
    fn parse_comparison(&mut self) -> Result<Expr> {
        let left = self.parse_addsub()?;

        if let Some(op) = comparison_op(self.current().kind) {
            self.advance();
            let right = self.parse_addsub()?;

            // Comparisons are non-associative: a second comparison operator
            // at this level is a syntax error, not a chained comparison.
            let next = self.current();
            if next.kind.is_comparison() {
                return Err(ParseError::Unexpected {
                    message: "comparison operators cannot be chained",
                    found: next.kind,
                    production: "comparison",
                    span: next.span,
                });
            }

            return Ok(Expr::comparison(op, left, right));
        }

        Ok(left)
    }

    /// `muldiv ( ('+'|'-') muldiv )*`
    fn parse_addsub(&mut self) -> Result<Expr> {
        let mut left = self.parse_muldiv()?;

        loop {
            let op = match self.current().kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();

            let right = self.parse_muldiv()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// `primary ( ('*'|'/') primary )*`
    fn parse_muldiv(&mut self) -> Result<Expr> {
        let mut left = self.parse_primary()?;

        loop {
            let op = match self.current().kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();

            let right = self.parse_primary()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// `NUMBER | IDENT | IDENT '(' args? ')' | '(' expression ')'`
    fn parse_primary(&mut self) -> Result<Expr> {
        let token = self.current();
        match token.kind {
            TokenKind::Number(value) => {
                self.advance();
                Ok(Expr::literal(value))
            },
            TokenKind::Ident(name) => {
                if self.peek(1).kind == TokenKind::LParen {
                    return self.parse_call();
                }
                self.advance();
                Ok(Expr::var(name, token.span))
            },
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen, "primary expression")?;
                Ok(Expr::grouped(inner))
            },
            found => Err(ParseError::Unexpected {
                message: "expected an integer literal, an identifier or a parenthesised expression",
                found,
                production: "primary expression",
                span: token.span,
            }),
        }
    }

    /// `IDENT '(' (expression (',' expression)*)? ')'`
    ///
    /// The six-argument limit is enforced by the analyser, not here.
    fn parse_call(&mut self) -> Result<Expr> {
        let (name, span) = self.expect_ident("function call")?;
        self.expect(TokenKind::LParen, "function call")?;

        let mut args = Vec::new();
        if self.current().kind != TokenKind::RParen {
            loop {
                args.push(self.parse_expression()?);
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(TokenKind::RParen, "function call")?;
        Ok(Expr::call(name, args, span))
    }
}

/// Maps a token kind to its comparison operator, if it is one.
fn comparison_op(kind: TokenKind) -> Option<CmpOp> {
    match kind {
        TokenKind::EqEq => Some(CmpOp::Eq),
        TokenKind::NotEq => Some(CmpOp::Ne),
        TokenKind::Lt => Some(CmpOp::Lt),
        TokenKind::LtEq => Some(CmpOp::Le),
        TokenKind::Gt => Some(CmpOp::Gt),
        TokenKind::GtEq => Some(CmpOp::Ge),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::Parser;
    use scc_lex::Lexer;

    fn parse_expr(expr: &str) -> crate::Result<Expr> {
        let source = format!("int main() {{ return {}; }}", expr);
        let mut program = Parser::new(Lexer::new(&source)).parse()?;
        let mut function = program.functions.remove(0);
        match function.body.stmts.remove(0) {
            Stmt::Return(ret) => Ok(ret.value.unwrap()),
            other => panic!("expected return, got {:?}", other),
        }
    }

    #[test]
    fn test_literal() {
        assert_eq!(parse_expr("42").unwrap(), Expr::literal(42));
    }

    #[test]
    fn test_precedence_mul_over_add() {
        // 2 + 3 * 4 parses as 2 + (3 * 4)
        let expr = parse_expr("2 + 3 * 4").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                BinOp::Add,
                Expr::literal(2),
                Expr::binary(BinOp::Mul, Expr::literal(3), Expr::literal(4)),
            )
        );
    }

    #[test]
    fn test_grouping_overrides_precedence() {
        // (2 + 3) * 4
        let expr = parse_expr("(2 + 3) * 4").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                BinOp::Mul,
                Expr::grouped(Expr::binary(BinOp::Add, Expr::literal(2), Expr::literal(3))),
                Expr::literal(4),
            )
        );
    }

    #[test]
    fn test_left_associativity() {
        // 10 - 3 - 2 parses as (10 - 3) - 2
        let expr = parse_expr("10 - 3 - 2").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                BinOp::Sub,
                Expr::binary(BinOp::Sub, Expr::literal(10), Expr::literal(3)),
                Expr::literal(2),
            )
        );
    }

    #[test]
    fn test_division_left_associativity() {
        // 100 / 5 / 2 parses as (100 / 5) / 2
        let expr = parse_expr("100 / 5 / 2").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                BinOp::Div,
                Expr::binary(BinOp::Div, Expr::literal(100), Expr::literal(5)),
                Expr::literal(2),
            )
        );
    }

    #[test]
    fn test_comparison_binds_loosest() {
        // 1 + 2 < 3 * 4 parses as (1 + 2) < (3 * 4)
        let expr = parse_expr("1 + 2 < 3 * 4").unwrap();
        match expr {
            Expr::Comparison(cmp) => {
                assert_eq!(cmp.op, CmpOp::Lt);
                assert!(matches!(*cmp.left, Expr::Binary(_)));
                assert!(matches!(*cmp.right, Expr::Binary(_)));
            },
            other => panic!("expected comparison, got {:?}", other),
        }
    }

    #[test]
    fn test_all_comparison_operators() {
        for (text, op) in [
            ("==", CmpOp::Eq),
            ("!=", CmpOp::Ne),
            ("<", CmpOp::Lt),
            ("<=", CmpOp::Le),
            (">", CmpOp::Gt),
            (">=", CmpOp::Ge),
        ] {
            let expr = parse_expr(&format!("1 {} 2", text)).unwrap();
            match expr {
                Expr::Comparison(cmp) => assert_eq!(cmp.op, op),
                other => panic!("expected comparison, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_chained_comparison_is_error() {
        let err = parse_expr("1 < 2 < 3").unwrap_err();
        assert!(err.to_string().contains("cannot be chained"));
    }

    #[test]
    fn test_call_without_arguments() {
        let expr = parse_expr("getBase()").unwrap();
        match expr {
            Expr::Call(call) => {
                assert_eq!(call.name.as_str(), "getBase");
                assert!(call.args.is_empty());
            },
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_call_with_arguments() {
        let expr = parse_expr("f(1, x, 2 + 3)").unwrap();
        match expr {
            Expr::Call(call) => {
                assert_eq!(call.args.len(), 3);
                assert_eq!(call.args[0], Expr::literal(1));
                assert!(matches!(call.args[1], Expr::Var(_)));
                assert!(matches!(call.args[2], Expr::Binary(_)));
            },
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_call_inside_expression() {
        let expr = parse_expr("getBase() * 2").unwrap();
        match expr {
            Expr::Binary(bin) => {
                assert!(matches!(*bin.left, Expr::Call(_)));
            },
            other => panic!("expected binary, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_grouping() {
        let expr = parse_expr("((1))").unwrap();
        assert_eq!(
            expr,
            Expr::grouped(Expr::grouped(Expr::literal(1)))
        );
    }

    #[test]
    fn test_truncated_expression_is_error() {
        let err = parse_expr("1 + ").unwrap_err();
        assert!(err.to_string().contains("primary expression"));
    }

    #[test]
    fn test_unclosed_paren_is_error() {
        let err = parse_expr("(1 + 2").unwrap_err();
        assert!(err.to_string().contains("expected ')'"));
    }
}
