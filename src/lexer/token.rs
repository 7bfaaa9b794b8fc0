use serde::{Deserialize, Serialize};

/// A single token from a statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, column: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            column,
        }
    }

    /// Creates the end-of-statement marker
    pub fn eof(column: usize) -> Self {
        Token::new(TokenKind::Eof, "", column)
    }

    /// Whether this is the end-of-statement marker
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Whether this token is an identifier (keywords included)
    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    /// The reserved word spelled by this token, if any
    pub fn keyword(&self) -> Option<Keyword> {
        if self.is_identifier() {
            Keyword::from_lexeme(&self.lexeme)
        } else {
            None
        }
    }

    /// Human-readable description used in diagnostics
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Identifier => format!("identifier `{}`", self.lexeme),
            TokenKind::Integer => format!("integer `{}`", self.lexeme),
            TokenKind::Eof => "end of statement".to_string(),
            _ => format!("`{}`", self.lexeme),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

/// All possible token types in catscript
///
/// Keywords are not token kinds: `config`, `print`, `dec`, `hex` and `bin`
/// lex as identifiers and are told apart by the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Identifier `[A-Za-z][A-Za-z0-9]*`
    Identifier,
    /// Integer literal, optionally negative
    Integer,

    // Operators
    /// Assignment operator (=)
    Assign,
    /// Plus operator (+)
    Plus,
    /// Minus operator (-)
    Minus,
    /// Star operator (*)
    Star,
    /// Slash operator (/)
    Slash,

    // Delimiters
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,

    // Special
    /// End of statement marker
    Eof,
}

impl TokenKind {
    /// Token kind of a single-character operator or delimiter
    pub fn from_operator(c: char) -> Option<TokenKind> {
        match c {
            '=' => Some(TokenKind::Assign),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            _ => None,
        }
    }
}

/// Reserved words of the language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    /// `config`
    Config,
    /// `print`
    Print,
    /// `dec`
    Dec,
    /// `hex`
    Hex,
    /// `bin`
    Bin,
}

impl Keyword {
    /// Get keyword from its exact spelling
    pub fn from_lexeme(s: &str) -> Option<Keyword> {
        match s {
            "config" => Some(Keyword::Config),
            "print" => Some(Keyword::Print),
            "dec" => Some(Keyword::Dec),
            "hex" => Some(Keyword::Hex),
            "bin" => Some(Keyword::Bin),
            _ => None,
        }
    }

    /// Spelling of the keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Config => "config",
            Keyword::Print => "print",
            Keyword::Dec => "dec",
            Keyword::Hex => "hex",
            Keyword::Bin => "bin",
        }
    }
}
