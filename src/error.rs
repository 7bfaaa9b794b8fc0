//! Error types for the catscript interpreter

use thiserror::Error;

/// catscript interpreter errors
///
/// Every error is fatal for the run that produced it: a session never
/// resumes in the middle of a statement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Statement errors
    /// Statement starts with a token that begins no known statement form
    ///
    /// **Triggered by:** a line starting with an operator or a literal
    /// **Example:** `= 5`, `42`
    #[error("Invalid statement at column {column}: unexpected {found}")]
    Syntax {
        /// Offending token
        found: String,
        /// Column of the offending token (1-indexed)
        column: usize,
    },

    /// Tokens left over after a complete statement
    ///
    /// **Triggered by:** two statements on one line, or an unspaced negative literal
    /// **Example:** `x = 1 2`, `x = 5-1` (lexes as `5` `-1`)
    #[error("Unexpected {found} at column {column} after end of statement")]
    TrailingTokens {
        /// First unconsumed token
        found: String,
        /// Column of the first unconsumed token (1-indexed)
        column: usize,
    },

    /// `config` followed by something other than `dec`, `hex` or `bin`
    #[error("Invalid config statement at column {column}: expected `dec`, `hex` or `bin`, found {found}")]
    Config {
        /// Token that followed `config`
        found: String,
        /// Column of that token (1-indexed)
        column: usize,
    },

    /// Variable name followed by something other than `=`
    ///
    /// **Example:** `x + 1`
    #[error("Invalid assignment to `{variable}` at column {column}: expected `=`, found {found}")]
    Assignment {
        /// Variable being assigned
        variable: String,
        /// Token that followed the variable name
        found: String,
        /// Column of that token (1-indexed)
        column: usize,
    },

    // Expression errors
    /// Token that cannot appear at the current expression position
    #[error("Expected {expected} at column {column}, found {found}")]
    UnexpectedToken {
        /// Expected token category
        expected: String,
        /// Actual token
        found: String,
        /// Column of the actual token (1-indexed)
        column: usize,
    },

    /// Statement ended while an operand was still expected
    ///
    /// **Example:** `x = 1 +`
    #[error("Unexpected end of statement: expected {expected}")]
    UnexpectedEndOfStatement {
        /// Expected token category
        expected: String,
    },

    /// `(` without a matching `)`
    ///
    /// **Example:** `x = (1 + 2`
    #[error("Mismatched parentheses at column {column}: expected `)`, found {found}")]
    MismatchedParentheses {
        /// Token found where `)` was expected
        found: String,
        /// Column of that token (1-indexed)
        column: usize,
    },

    /// Parentheses nested deeper than the session allows
    #[error("Expression nested too deeply (limit: {limit})")]
    NestingTooDeep {
        /// Configured nesting limit
        limit: usize,
    },

    /// Integer literal that does not fit in 32 bits
    #[error("Integer literal {literal} at column {column} is out of range for a 32-bit integer")]
    IntegerOutOfRange {
        /// Literal text
        literal: String,
        /// Column of the literal (1-indexed)
        column: usize,
    },

    /// Cursor asked to consume a token that is not there
    #[error("Could not consume token `{expected}`, found {found}")]
    Consumption {
        /// Lexeme that was expected
        expected: String,
        /// Token actually under the cursor
        found: String,
    },

    // Arithmetic errors
    /// Division by zero
    ///
    /// **Example:** `x = 7 / 0`, `x = 1 / (2 - 2)`
    #[error("Division by zero at column {column}")]
    DivisionByZero {
        /// Column of the `/` operator (1-indexed)
        column: usize,
    },

    // I/O errors
    /// Writing to the output sink failed
    #[error("Output error: {message}")]
    Output {
        /// Underlying error message
        message: String,
    },

    /// Reading a statement source failed
    #[error("Unable to read {path}: {message}")]
    Io {
        /// Path of the source
        path: String,
        /// Underlying error message
        message: String,
    },

    /// Session snapshot could not be encoded or decoded
    #[error("Snapshot error: {message}")]
    Snapshot {
        /// Underlying error message
        message: String,
    },

    /// Error raised while running a numbered statement of a program
    #[error("Statement {line}: {source}")]
    AtStatement {
        /// Statement number (1-indexed)
        line: usize,
        /// Error raised by the statement
        #[source]
        source: Box<Error>,
    },
}

/// Error categories of the language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognised statement or leftover tokens
    Syntax,
    /// Invalid `config` argument
    Config,
    /// Malformed assignment
    Assignment,
    /// Malformed expression
    Expression,
    /// Cursor invariant violated
    Consumption,
    /// Arithmetic failure
    Arithmetic,
    /// Input, output or snapshot failure
    Io,
}

impl Error {
    /// Classify the error into its language-level category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Syntax { .. } | Error::TrailingTokens { .. } => ErrorKind::Syntax,
            Error::Config { .. } => ErrorKind::Config,
            Error::Assignment { .. } => ErrorKind::Assignment,

            Error::UnexpectedToken { .. }
            | Error::UnexpectedEndOfStatement { .. }
            | Error::MismatchedParentheses { .. }
            | Error::NestingTooDeep { .. }
            | Error::IntegerOutOfRange { .. } => ErrorKind::Expression,

            Error::Consumption { .. } => ErrorKind::Consumption,
            Error::DivisionByZero { .. } => ErrorKind::Arithmetic,

            Error::Output { .. } | Error::Io { .. } | Error::Snapshot { .. } => ErrorKind::Io,

            Error::AtStatement { source, .. } => source.kind(),
        }
    }

    /// Strip any statement-number wrapper
    pub fn root(&self) -> &Error {
        match self {
            Error::AtStatement { source, .. } => source.root(),
            other => other,
        }
    }

    /// Create an output error from an I/O failure on the sink
    pub fn output(err: std::io::Error) -> Self {
        Error::Output {
            message: err.to_string(),
        }
    }
}

/// Result type for catscript operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_wrapped_source() {
        let err = Error::AtStatement {
            line: 3,
            source: Box::new(Error::DivisionByZero { column: 7 }),
        };
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
        assert_eq!(err.root(), &Error::DivisionByZero { column: 7 });
        assert_eq!(err.to_string(), "Statement 3: Division by zero at column 7");
    }

    #[test]
    fn test_messages_name_offending_token() {
        let err = Error::Config {
            found: "identifier `oct`".to_string(),
            column: 8,
        };
        assert!(err.to_string().contains("identifier `oct`"));
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
