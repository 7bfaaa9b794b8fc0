//! Statement handlers and expression evaluation
//!
//! Expressions are evaluated while they are parsed. Each grammar level folds
//! its operands left to right as soon as they are read:
//!
//! ```text
//! MathExp    ::= SumExp
//! SumExp     ::= ProductExp (('+'|'-') ProductExp)*
//! ProductExp ::= PrimaryExp (('*'|'/') PrimaryExp)*
//! PrimaryExp ::= IntegerLiteral | '(' MathExp ')' | Identifier
//! ```

use super::environment::Environment;
use super::format::OutputFormat;
use super::options::{SessionOptions, TrailingTokens};
use crate::error::{Error, Result};
use crate::lexer::{Keyword, Token, TokenKind};
use crate::parser::{StatementKind, TokenCursor};

const PRIMARY_EXPECTED: &str = "integer literal, `(`, or identifier";

/// Evaluates one statement against session state
pub struct Evaluator<'s> {
    cursor: TokenCursor,
    env: &'s mut Environment,
    format: &'s mut OutputFormat,
    options: &'s SessionOptions,
    depth: usize,
}

impl<'s> Evaluator<'s> {
    /// Creates an evaluator over one statement's tokens
    pub fn new(
        tokens: Vec<Token>,
        env: &'s mut Environment,
        format: &'s mut OutputFormat,
        options: &'s SessionOptions,
    ) -> Self {
        Evaluator {
            cursor: TokenCursor::new(tokens),
            env,
            format,
            options,
            depth: 0,
        }
    }

    /// Runs the statement, returning the rendered line for `print`
    pub fn execute(mut self) -> Result<Option<String>> {
        let printed = self.eval_statement()?;

        if self.options.trailing_tokens == TrailingTokens::Reject && !self.cursor.is_at_end() {
            let token = self.cursor.peek();
            return Err(Error::TrailingTokens {
                found: token.describe(),
                column: token.column,
            });
        }

        Ok(printed)
    }

    fn eval_statement(&mut self) -> Result<Option<String>> {
        let kind = StatementKind::classify(&self.cursor)?;
        tracing::debug!(?kind, "dispatching statement");

        match kind {
            StatementKind::Config => {
                self.cursor.consume(Keyword::Config.as_str())?;
                self.eval_config()?;
                Ok(None)
            }
            StatementKind::Print => {
                self.cursor.consume(Keyword::Print.as_str())?;
                self.eval_print().map(Some)
            }
            StatementKind::Assign(name) => {
                // defined before the right-hand side runs, even if it fails
                self.env.declare(&name);
                self.eval_assign(&name)?;
                Ok(None)
            }
            StatementKind::Empty => Ok(None),
        }
    }

    fn eval_config(&mut self) -> Result<()> {
        let token = self.cursor.peek();
        let format = token.keyword().and_then(OutputFormat::from_keyword);

        match format {
            Some(format) => {
                let lexeme = token.lexeme.clone();
                self.cursor.consume(&lexeme)?;
                tracing::debug!(%format, "output format changed");
                *self.format = format;
                Ok(())
            }
            None => Err(Error::Config {
                found: token.describe(),
                column: token.column,
            }),
        }
    }

    fn eval_assign(&mut self, name: &str) -> Result<()> {
        self.cursor.consume(name)?;

        let token = self.cursor.peek();
        if token.is_eof() {
            return Ok(());
        }
        if token.kind != TokenKind::Assign {
            return Err(Error::Assignment {
                variable: name.to_string(),
                found: token.describe(),
                column: token.column,
            });
        }
        self.cursor.consume("=")?;

        let value = self.eval_math()?;
        self.env.set(name, value);
        Ok(())
    }

    fn eval_print(&mut self) -> Result<String> {
        let value = match self.cursor.peek().kind {
            TokenKind::Identifier => {
                let name = self.cursor.peek().lexeme.clone();
                let value = self.env.get(&name);
                self.cursor.consume(&name)?;
                value
            }
            TokenKind::Integer | TokenKind::LeftParen => self.eval_math()?,
            _ => 0,
        };

        Ok(self.format.render(value))
    }

    /// MathExp ::= SumExp
    fn eval_math(&mut self) -> Result<i32> {
        self.eval_sum()
    }

    /// SumExp ::= ProductExp (('+'|'-') ProductExp)*
    fn eval_sum(&mut self) -> Result<i32> {
        let mut result = self.eval_product()?;

        loop {
            match self.cursor.peek().kind {
                TokenKind::Plus => {
                    self.cursor.consume("+")?;
                    result = result.wrapping_add(self.eval_product()?);
                }
                TokenKind::Minus => {
                    self.cursor.consume("-")?;
                    result = result.wrapping_sub(self.eval_product()?);
                }
                _ => break,
            }
        }

        Ok(result)
    }

    /// ProductExp ::= PrimaryExp (('*'|'/') PrimaryExp)*
    fn eval_product(&mut self) -> Result<i32> {
        let mut result = self.eval_primary()?;

        loop {
            match self.cursor.peek().kind {
                TokenKind::Star => {
                    self.cursor.consume("*")?;
                    result = result.wrapping_mul(self.eval_primary()?);
                }
                TokenKind::Slash => {
                    let column = self.cursor.consume("/")?.column;
                    let divisor = self.eval_primary()?;
                    if divisor == 0 {
                        return Err(Error::DivisionByZero { column });
                    }
                    result = result.wrapping_div(divisor);
                }
                _ => break,
            }
        }

        Ok(result)
    }

    /// PrimaryExp ::= IntegerLiteral | '(' MathExp ')' | Identifier
    fn eval_primary(&mut self) -> Result<i32> {
        let token = self.cursor.peek().clone();

        match token.kind {
            TokenKind::Integer => {
                let value = token
                    .lexeme
                    .parse::<i32>()
                    .map_err(|_| Error::IntegerOutOfRange {
                        literal: token.lexeme.clone(),
                        column: token.column,
                    })?;
                self.cursor.consume(&token.lexeme)?;
                Ok(value)
            }
            TokenKind::LeftParen => {
                self.cursor.consume("(")?;
                self.enter_group()?;
                let value = self.eval_math()?;
                self.depth -= 1;

                let close = self.cursor.peek();
                if close.kind != TokenKind::RightParen {
                    return Err(Error::MismatchedParentheses {
                        found: close.describe(),
                        column: close.column,
                    });
                }
                self.cursor.consume(")")?;
                Ok(value)
            }
            TokenKind::Identifier => {
                let value = self.env.get(&token.lexeme);
                self.cursor.consume(&token.lexeme)?;
                Ok(value)
            }
            TokenKind::Eof => Err(Error::UnexpectedEndOfStatement {
                expected: PRIMARY_EXPECTED.to_string(),
            }),
            _ => Err(Error::UnexpectedToken {
                expected: PRIMARY_EXPECTED.to_string(),
                found: token.describe(),
                column: token.column,
            }),
        }
    }

    fn enter_group(&mut self) -> Result<()> {
        if self.depth >= self.options.max_nesting_depth {
            return Err(Error::NestingTooDeep {
                limit: self.options.max_nesting_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }
}
