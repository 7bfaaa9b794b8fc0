use super::cursor::TokenCursor;
use crate::error::{Error, Result};
use crate::lexer::{Keyword, TokenKind};

/// Statement forms, chosen from the first token of a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    /// `config (dec|hex|bin)`
    Config,
    /// `print (Identifier | MathExp)`
    Print,
    /// `Identifier [= MathExp]`, carrying the variable name
    Assign(String),
    /// Blank line
    Empty,
}

impl StatementKind {
    /// Inspect (without consuming) the token under the cursor
    pub fn classify(cursor: &TokenCursor) -> Result<StatementKind> {
        let token = cursor.peek();

        match token.kind {
            TokenKind::Identifier => Ok(match token.keyword() {
                Some(Keyword::Config) => StatementKind::Config,
                Some(Keyword::Print) => StatementKind::Print,
                _ => StatementKind::Assign(token.lexeme.clone()),
            }),
            TokenKind::Eof => Ok(StatementKind::Empty),
            _ => Err(Error::Syntax {
                found: token.describe(),
                column: token.column,
            }),
        }
    }
}
