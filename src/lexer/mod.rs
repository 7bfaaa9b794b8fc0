//! Lexical analysis for catscript
//!
//! Converts one statement's text into a stream of tokens.

mod statement_scanner;
mod token;

pub use statement_scanner::{tokenize, StatementScanner};
pub use token::{Keyword, Token, TokenKind};
