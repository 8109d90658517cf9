//! scc-par - Parser (Syntactic Analyzer)
//!
//! Recursive descent over the token stream, LL(1) with one token of
//! lookahead. Expressions use one parse routine per precedence level:
//!
//! ```text
//! expression := comparison
//! comparison := addsub ( ('=='|'!='|'<'|'<='|'>'|'>=') addsub )?
//! addsub     := muldiv ( ('+'|'-') muldiv )*
//! muldiv     := primary ( ('*'|'/') primary )*
//! primary    := NUMBER | IDENT | IDENT '(' args? ')' | '(' expression ')'
//! ```
//!
//! `*` and `/` bind tighter than `+` and `-`, which bind tighter than
//! comparisons; arithmetic is left-associative and comparisons are
//! non-associative (at most one per comparison production).
//!
//! Parse errors are fatal: the first error aborts the unit and reports the
//! expected-vs-actual token kinds together with the active production.
//!
//! ```
//! use scc_lex::Lexer;
//! use scc_par::Parser;
//!
//! let program = Parser::new(Lexer::new("int main() { return 0; }"))
//!     .parse()
//!     .unwrap();
//! assert_eq!(program.functions.len(), 1);
//! ```

pub mod ast;
mod error;
mod expr;
mod items;
pub mod printer;
mod stmt;

pub use ast::*;
pub use error::{ParseError, Result};

use scc_lex::{Lexer, Token, TokenKind};
use scc_util::{Span, Symbol};

/// Recursive descent parser
pub struct Parser<'a> {
    /// Token stream; all lookahead goes through `Lexer::peek`
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser over a lexed source
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self { lexer }
    }

    /// Parse a complete program: `function*` up to end of file
    pub fn parse(mut self) -> Result<Program> {
        let mut functions = Vec::new();

        while self.current().kind != TokenKind::Eof {
            functions.push(self.parse_function()?);
        }

        Ok(Program { functions })
    }

    /// The next unconsumed token
    pub(crate) fn current(&self) -> Token {
        self.lexer.peek(0)
    }

    /// Look ahead `k` tokens without consuming
    pub(crate) fn peek(&self, k: usize) -> Token {
        self.lexer.peek(k)
    }

    /// Consume and return the next token
    pub(crate) fn advance(&mut self) -> Token {
        self.lexer.next_token()
    }

    /// Consume the next token if it has the given kind
    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.current().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Require the next token to have the given kind and consume it
    pub(crate) fn expect(&mut self, kind: TokenKind, production: &'static str) -> Result<Token> {
        let token = self.current();
        if token.kind == kind {
            Ok(self.advance())
        } else {
            Err(ParseError::Expected {
                expected: kind,
                found: token.kind,
                production,
                span: token.span,
            })
        }
    }

    /// Require the next token to be an identifier and consume it
    pub(crate) fn expect_ident(&mut self, production: &'static str) -> Result<(Symbol, Span)> {
        let token = self.current();
        match token.kind {
            TokenKind::Ident(name) => {
                self.advance();
                Ok((name, token.span))
            },
            found => Err(ParseError::Unexpected {
                message: "expected identifier",
                found,
                production,
                span: token.span,
            }),
        }
    }
}
