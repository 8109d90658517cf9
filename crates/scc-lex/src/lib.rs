//! scc-lex - Lexical Analyzer
//!
//! Transforms source text into a stream of positioned tokens. The scanner is
//! hand-written and direct-coded: one dispatch on the current character, one
//! specialized routine per token category.
//!
//! The whole input is tokenized eagerly; [`Lexer::next_token`] and
//! [`Lexer::peek`] then walk the buffered stream. The stream always ends with
//! exactly one [`TokenKind::Eof`], and `peek` past the end keeps returning it.
//!
//! Unrecognized characters do not abort lexing. They become
//! [`TokenKind::Unknown`] tokens and are left for the parser to refuse, so
//! the lexer itself never fails.
//!
//! ```
//! use scc_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("int x = 42;");
//! assert_eq!(lexer.next_token().kind, TokenKind::Int);
//! assert!(matches!(lexer.next_token().kind, TokenKind::Ident(_)));
//! assert_eq!(lexer.next_token().kind, TokenKind::Eq);
//! assert_eq!(lexer.next_token().kind, TokenKind::Number(42));
//! assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
//! assert_eq!(lexer.next_token().kind, TokenKind::Eof);
//! ```

pub mod cursor;
mod lexer;
mod token;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
