//! String literal lexing.
//!
//! Strings are recognized but never consumed by later phases. Escape
//! sequences are consumed as two-character pairs without interpretation.

use scc_util::Symbol;

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a double-quoted string literal.
    ///
    /// The payload is the raw text between the quotes, escapes included.
    /// An unterminated string degrades to a single `Unknown('"')` token and
    /// the scan resumes after the opening quote.
    pub(crate) fn lex_string(&mut self) -> TokenKind {
        // Look ahead for the closing quote before consuming anything.
        // Offsets are in bytes and always advance by whole characters.
        let mut offset = 1;
        loop {
            match self.cursor.peek_char(offset) {
                '\0' => {
                    // Unterminated: consume only the opening quote
                    self.cursor.advance();
                    return TokenKind::Unknown('"');
                },
                '\\' => {
                    let escaped = self.cursor.peek_char(offset + 1);
                    if escaped == '\0' {
                        self.cursor.advance();
                        return TokenKind::Unknown('"');
                    }
                    offset += 1 + escaped.len_utf8();
                },
                '"' => break,
                c => offset += c.len_utf8(),
            }
        }

        self.cursor.advance(); // opening quote
        let content_start = self.cursor.position();
        while self.cursor.current_char() != '"' {
            if self.cursor.current_char() == '\\' {
                self.cursor.advance();
            }
            self.cursor.advance();
        }
        let content = self.cursor.slice_from(content_start);
        self.cursor.advance(); // closing quote

        TokenKind::Str(Symbol::intern(content))
    }
}
