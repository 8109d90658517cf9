//! Core lexer implementation.
//!
//! The scanner runs once at construction and buffers the full token stream;
//! `next_token`/`peek` then walk the buffer. This keeps arbitrary lookahead
//! trivial for the parser while the scan itself stays single-pass.

mod identifier;
mod number;
mod operator;
mod string;

use scc_util::Span;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the C subset.
///
/// Produces the token stream for one source buffer. The stream is terminated
/// by exactly one [`TokenKind::Eof`]; reading or peeking past the end keeps
/// yielding it.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// The buffered token stream, terminated by `Eof`.
    tokens: Vec<Token>,

    /// Read position of `next_token` within `tokens`.
    read_index: usize,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer and tokenizes the whole source.
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Self {
            cursor: Cursor::new(source),
            tokens: Vec::with_capacity(32),
            read_index: 0,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        };
        lexer.tokenize();
        lexer
    }

    /// Returns the next token and advances the read position.
    ///
    /// Once the stream is exhausted, keeps returning the `Eof` token.
    pub fn next_token(&mut self) -> Token {
        let token = self.tokens[self.read_index.min(self.tokens.len() - 1)];
        if self.read_index < self.tokens.len() {
            self.read_index += 1;
        }
        token
    }

    /// Looks ahead `k` tokens without advancing (`k = 0` is the next token).
    ///
    /// Out-of-range lookahead returns the `Eof` token.
    pub fn peek(&self, k: usize) -> Token {
        let index = self.read_index + k;
        self.tokens[index.min(self.tokens.len() - 1)]
    }

    /// The full buffered token stream, including the trailing `Eof`.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Scan the entire source into `self.tokens`.
    fn tokenize(&mut self) {
        loop {
            self.skip_trivia();

            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();
            self.token_start_column = self.cursor.column();

            if self.cursor.is_at_end() {
                break;
            }

            let kind = self.scan_token();
            let span = self.token_span();
            self.tokens.push(Token::new(kind, span));
        }

        // The single trailing EndOfFile sentinel
        let span = Span::new(
            self.cursor.position(),
            self.cursor.position(),
            self.cursor.line(),
            self.cursor.column(),
        );
        self.tokens.push(Token::new(TokenKind::Eof, span));
    }

    /// Skip whitespace and `// ...` line comments.
    fn skip_trivia(&mut self) {
        loop {
            while !self.cursor.is_at_end() && self.cursor.current_char().is_whitespace() {
                self.cursor.advance();
            }

            if self.cursor.current_char() == '/' && self.cursor.peek_char(1) == '/' {
                while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                    self.cursor.advance();
                }
                continue;
            }

            break;
        }
    }

    /// Dispatch on the current character and scan one token.
    fn scan_token(&mut self) -> TokenKind {
        match self.cursor.current_char() {
            ';' => {
                self.cursor.advance();
                TokenKind::Semicolon
            },
            '(' => {
                self.cursor.advance();
                TokenKind::LParen
            },
            ')' => {
                self.cursor.advance();
                TokenKind::RParen
            },
            '{' => {
                self.cursor.advance();
                TokenKind::LBrace
            },
            '}' => {
                self.cursor.advance();
                TokenKind::RBrace
            },
            ',' => {
                self.cursor.advance();
                TokenKind::Comma
            },
            '+' => {
                self.cursor.advance();
                TokenKind::Plus
            },
            '-' => {
                self.cursor.advance();
                TokenKind::Minus
            },
            '*' => {
                self.cursor.advance();
                TokenKind::Star
            },
            '/' => {
                // Comments were consumed by skip_trivia
                self.cursor.advance();
                TokenKind::Slash
            },
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '"' => self.lex_string(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if c.is_ascii_alphabetic() || c == '_' => self.lex_identifier(),
            c => {
                self.cursor.advance();
                TokenKind::Unknown(c)
            },
        }
    }

    /// Span of the token currently being scanned.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scc_util::Symbol;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).tokens().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(kinds("  \t\n  "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_exactly_one_eof() {
        for source in ["", "int x;", "@#$", "// only a comment\n"] {
            let eof_count = kinds(source)
                .iter()
                .filter(|k| **k == TokenKind::Eof)
                .count();
            assert_eq!(eof_count, 1, "source {:?}", source);
        }
    }

    #[test]
    fn test_simple_declaration() {
        assert_eq!(
            kinds("int x = 42;"),
            vec![
                TokenKind::Int,
                TokenKind::Ident(Symbol::intern("x")),
                TokenKind::Eq,
                TokenKind::Number(42),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_punctuation_and_operators() {
        assert_eq!(
            kinds("; ( ) { } , + - * /"),
            vec![
                TokenKind::Semicolon,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Comma,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_line_comment_skipped() {
        assert_eq!(
            kinds("int x; // the answer\nint y;"),
            vec![
                TokenKind::Int,
                TokenKind::Ident(Symbol::intern("x")),
                TokenKind::Semicolon,
                TokenKind::Int,
                TokenKind::Ident(Symbol::intern("y")),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comment_at_end_of_file() {
        assert_eq!(kinds("// no newline at end"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_consecutive_comments() {
        assert_eq!(
            kinds("// one\n// two\n;"),
            vec![TokenKind::Semicolon, TokenKind::Eof]
        );
    }

    #[test]
    fn test_unknown_characters() {
        assert_eq!(
            kinds("@ #"),
            vec![
                TokenKind::Unknown('@'),
                TokenKind::Unknown('#'),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_token_positions() {
        let lexer = Lexer::new("int x;\n  x = 1;");
        let tokens = lexer.tokens();

        // "int" at 1:1, "x" at 1:5, ";" at 1:6
        assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
        assert_eq!((tokens[1].line(), tokens[1].column()), (1, 5));
        assert_eq!((tokens[2].line(), tokens[2].column()), (1, 6));

        // second line: "x" at 2:3
        assert_eq!((tokens[3].line(), tokens[3].column()), (2, 3));
    }

    #[test]
    fn test_next_token_and_peek() {
        let mut lexer = Lexer::new("a b");
        assert_eq!(lexer.peek(0).kind, TokenKind::Ident(Symbol::intern("a")));
        assert_eq!(lexer.peek(1).kind, TokenKind::Ident(Symbol::intern("b")));
        assert_eq!(lexer.peek(2).kind, TokenKind::Eof);
        assert_eq!(lexer.peek(99).kind, TokenKind::Eof);

        assert_eq!(lexer.next_token().kind, TokenKind::Ident(Symbol::intern("a")));
        assert_eq!(lexer.peek(0).kind, TokenKind::Ident(Symbol::intern("b")));

        assert_eq!(lexer.next_token().kind, TokenKind::Ident(Symbol::intern("b")));
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        // Reading past the end keeps returning Eof
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_iterator_stops_before_eof() {
        let collected: Vec<_> = Lexer::new("1 + 2").collect();
        assert_eq!(collected.len(), 3);
        assert!(collected.iter().all(|t| t.kind != TokenKind::Eof));
    }

    #[test]
    fn test_full_function() {
        let source = "int main() { return 2 + 3 * 4; }";
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::Int,
                TokenKind::Ident(Symbol::intern("main")),
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::Return,
                TokenKind::Number(2),
                TokenKind::Plus,
                TokenKind::Number(3),
                TokenKind::Star,
                TokenKind::Number(4),
                TokenKind::Semicolon,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn lexing_never_panics(source in ".*") {
                let _ = Lexer::new(&source).tokens().len();
            }

            #[test]
            fn stream_ends_with_exactly_one_eof(source in ".*") {
                let lexer = Lexer::new(&source);
                let tokens = lexer.tokens();
                prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
                let eof_count = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
                prop_assert_eq!(eof_count, 1);
            }

            #[test]
            fn ascii_positions_are_one_based(source in "[ -~\n]{0,80}") {
                let lexer = Lexer::new(&source);
                for token in lexer.tokens() {
                    prop_assert!(token.line() >= 1);
                    prop_assert!(token.column() >= 1);
                }
            }
        }
    }
}
