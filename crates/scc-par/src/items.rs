//! Function parsing.

use scc_lex::TokenKind;

use crate::ast::{Function, Param};
use crate::error::Result;
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parse a function definition:
    /// `'int' IDENT '(' params? ')' compound`
    pub(crate) fn parse_function(&mut self) -> Result<Function> {
        let span = self.current().span;
        self.expect(TokenKind::Int, "function")?;

        let (name, _) = self.expect_ident("function")?;

        self.expect(TokenKind::LParen, "function")?;
        let params = self.parse_params()?;
        self.expect(TokenKind::RParen, "function")?;

        let body = self.parse_compound()?;

        Ok(Function {
            name,
            params,
            body,
            span,
        })
    }

    /// Parse an optional parameter list:
    /// `'int' IDENT (',' 'int' IDENT)*`
    fn parse_params(&mut self) -> Result<Vec<Param>> {
        let mut params = Vec::new();

        if self.current().kind != TokenKind::Int {
            return Ok(params);
        }

        loop {
            self.expect(TokenKind::Int, "parameter list")?;
            let (name, span) = self.expect_ident("parameter list")?;
            params.push(Param { name, span });

            if !self.match_kind(TokenKind::Comma) {
                break;
            }
        }

        Ok(params)
    }
}
