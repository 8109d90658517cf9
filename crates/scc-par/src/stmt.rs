//! Statement and compound-statement parsing.
//!
//! Statement dispatch looks at the first token only: `;` is empty,
//! `return`/`int`/`if`/`while` pick their productions, and an identifier
//! starts an assignment. Calls appear only inside expressions in this
//! subset, so `f();` as a whole statement is rejected at the `=` check.

use scc_lex::TokenKind;

use crate::ast::{Block, Stmt};
use crate::error::{ParseError, Result};
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parse a compound statement: `'{' statement* '}'`
    pub(crate) fn parse_compound(&mut self) -> Result<Block> {
        self.expect(TokenKind::LBrace, "compound statement")?;

        let mut stmts = Vec::new();
        while self.current().kind != TokenKind::RBrace && self.current().kind != TokenKind::Eof {
            stmts.push(self.parse_statement()?);
        }

        self.expect(TokenKind::RBrace, "compound statement")?;
        Ok(Block { stmts })
    }

    /// Parse a single statement
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt> {
        match self.current().kind {
            TokenKind::Semicolon => {
                self.advance();
                Ok(Stmt::empty())
            },
            TokenKind::Return => self.parse_return(),
            TokenKind::Int => self.parse_var_decl(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Ident(_) => self.parse_assignment(),
            found => {
                let token = self.current();
                Err(ParseError::Unexpected {
                    message: "expected statement",
                    found,
                    production: "statement",
                    span: token.span,
                })
            },
        }
    }

    /// `'return' expression? ';'`
    fn parse_return(&mut self) -> Result<Stmt> {
        self.expect(TokenKind::Return, "return statement")?;

        let value = if self.current().kind == TokenKind::Semicolon {
            None
        } else {
            Some(self.parse_expression()?)
        };

        self.expect(TokenKind::Semicolon, "return statement")?;
        Ok(Stmt::ret(value))
    }

    /// `'int' IDENT ('=' expression)? ';'`
    fn parse_var_decl(&mut self) -> Result<Stmt> {
        self.expect(TokenKind::Int, "variable declaration")?;
        let (name, span) = self.expect_ident("variable declaration")?;

        let init = if self.match_kind(TokenKind::Eq) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect(TokenKind::Semicolon, "variable declaration")?;
        Ok(Stmt::var_decl(name, init, span))
    }

    /// `IDENT '=' expression ';'`
    fn parse_assignment(&mut self) -> Result<Stmt> {
        let (name, span) = self.expect_ident("assignment")?;
        self.expect(TokenKind::Eq, "assignment")?;

        let value = self.parse_expression()?;

        self.expect(TokenKind::Semicolon, "assignment")?;
        Ok(Stmt::assign(name, value, span))
    }

    /// `'if' '(' expression ')' compound ('else' compound)?`
    fn parse_if(&mut self) -> Result<Stmt> {
        self.expect(TokenKind::If, "if statement")?;
        self.expect(TokenKind::LParen, "if statement")?;
        let cond = self.parse_expression()?;
        self.expect(TokenKind::RParen, "if statement")?;

        let then_block = self.parse_compound()?;

        let else_block = if self.match_kind(TokenKind::Else) {
            Some(self.parse_compound()?)
        } else {
            None
        };

        Ok(Stmt::if_stmt(cond, then_block, else_block))
    }

    /// `'while' '(' expression ')' compound`
    fn parse_while(&mut self) -> Result<Stmt> {
        self.expect(TokenKind::While, "while statement")?;
        self.expect(TokenKind::LParen, "while statement")?;
        let cond = self.parse_expression()?;
        self.expect(TokenKind::RParen, "while statement")?;

        let body = self.parse_compound()?;

        Ok(Stmt::while_stmt(cond, body))
    }
}
