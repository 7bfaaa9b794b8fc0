use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Read position over one statement's tokens
///
/// Lookahead past the last token yields the end-of-statement marker
/// instead of failing. Only [`TokenCursor::consume`] moves the position.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    current: usize,
}

impl TokenCursor {
    /// Creates a cursor at the first token
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let column = tokens.last().map_or(1, |t| t.column + t.lexeme.chars().count());
            tokens.push(Token::eof(column));
        }
        TokenCursor { tokens, current: 0 }
    }

    /// Token `offset` positions ahead of the cursor
    pub fn peek_at(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        let index = self.current.saturating_add(offset).min(last);
        &self.tokens[index]
    }

    /// Token under the cursor
    pub fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    /// Whether the token under the cursor has the given kind
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Whether every token has been consumed
    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Number of tokens not yet consumed, end marker excluded
    pub fn remaining(&self) -> usize {
        self.tokens.len() - 1 - self.current
    }

    /// Consume the token under the cursor, which must read `expected`
    pub fn consume(&mut self, expected: &str) -> Result<Token> {
        let token = self.peek();
        if token.is_eof() || token.lexeme != expected {
            return Err(Error::Consumption {
                expected: expected.to_string(),
                found: token.describe(),
            });
        }

        let token = token.clone();
        self.current += 1;
        Ok(token)
    }
}
