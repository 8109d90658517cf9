//! Identifier and keyword lexing.

use scc_util::Symbol;

use crate::token::TokenKind;
use crate::Lexer;

/// True for characters that may continue an identifier: `[A-Za-z0-9_]`.
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Extracts the maximal `[A-Za-z_][A-Za-z0-9_]*` word; if it matches a
    /// keyword exactly, the keyword token is produced instead.
    pub(crate) fn lex_identifier(&mut self) -> TokenKind {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        TokenKind::keyword_from_ident(text).unwrap_or_else(|| TokenKind::Ident(Symbol::intern(text)))
    }
}
