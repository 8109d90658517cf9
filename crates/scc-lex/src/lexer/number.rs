//! Number literal lexing.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a decimal integer literal: `[0-9]+`.
    ///
    /// A literal that does not fit an `i64` saturates at `i64::MAX`; the
    /// input language has no way to produce one legitimately.
    pub(crate) fn lex_number(&mut self) -> TokenKind {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let value = text.parse::<i64>().unwrap_or(i64::MAX);

        TokenKind::Number(value)
    }
}
