//! Token definitions.
//!
//! The token vocabulary is a closed set: keywords, identifiers, literals,
//! punctuation, operators, and comparators, plus the `Unknown` and `Eof`
//! sentinels. Identifier and string payloads are interned [`Symbol`]s, which
//! keeps tokens `Copy`.

use scc_util::{Span, Symbol};

/// The kind of a lexical token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// An unrecognized character; the parser rejects these
    Unknown(char),

    /// End of file marker; every token stream ends with exactly one
    Eof,

    /// "int" keyword
    Int,

    /// "return" keyword
    Return,

    /// "if" keyword
    If,

    /// "else" keyword
    Else,

    /// "while" keyword
    While,

    /// Identifier (variable or function name)
    Ident(Symbol),

    /// Decimal integer literal
    Number(i64),

    /// Double-quoted string literal; lexed but unused by later phases
    Str(Symbol),

    /// ";"
    Semicolon,

    /// "("
    LParen,

    /// ")"
    RParen,

    /// "{"
    LBrace,

    /// "}"
    RBrace,

    /// ","
    Comma,

    /// "=" - Assignment
    Eq,

    /// "+"
    Plus,

    /// "-"
    Minus,

    /// "*"
    Star,

    /// "/"
    Slash,

    /// "=="
    EqEq,

    /// "!="
    NotEq,

    /// "<"
    Lt,

    /// "<="
    LtEq,

    /// ">"
    Gt,

    /// ">="
    GtEq,
}

impl TokenKind {
    /// Maps an identifier-shaped word to its keyword kind, if it is one.
    pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
        match text {
            "int" => Some(TokenKind::Int),
            "return" => Some(TokenKind::Return),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "while" => Some(TokenKind::While),
            _ => None,
        }
    }

    /// Human-readable name used in "expected X, got Y" messages.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Unknown(_) => "unknown character",
            TokenKind::Eof => "end of file",
            TokenKind::Int => "'int'",
            TokenKind::Return => "'return'",
            TokenKind::If => "'if'",
            TokenKind::Else => "'else'",
            TokenKind::While => "'while'",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Number(_) => "number",
            TokenKind::Str(_) => "string literal",
            TokenKind::Semicolon => "';'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Eq => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::Lt => "'<'",
            TokenKind::LtEq => "'<='",
            TokenKind::Gt => "'>'",
            TokenKind::GtEq => "'>='",
        }
    }

    /// True for `==`, `!=`, `<`, `<=`, `>`, `>=`
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Unknown(c) => write!(f, "Unknown({:?})", c),
            TokenKind::Ident(sym) => write!(f, "Identifier '{}'", sym),
            TokenKind::Number(n) => write!(f, "Number {}", n),
            TokenKind::Str(sym) => write!(f, "String {:?}", sym.as_str()),
            other => f.write_str(other.name()),
        }
    }
}

/// A lexical token with its source position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// What was lexed
    pub kind: TokenKind,
    /// Where it was lexed; line/column point at the first character
    pub span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Line of the first character (1-based)
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the first character (1-based)
    pub fn column(&self) -> u32 {
        self.span.column
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.line(), self.column(), self.kind)
    }
}
