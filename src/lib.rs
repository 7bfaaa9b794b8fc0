//! # catscript - A Line-Oriented Integer Scripting Language
//!
//! catscript runs programs made of one statement per line: variable
//! assignment, 32-bit integer arithmetic, a `config` directive that picks
//! the output format, and `print`.
//!
//! ## Quick Start
//!
//! ```rust
//! use catscript::Session;
//!
//! # fn main() -> catscript::Result<()> {
//! let mut session = Session::new();
//! let mut out = Vec::new();
//!
//! session.run(["x = 2 + 3 * 4", "print x", "config hex", "print x"], &mut out)?;
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "14\n0xe\n");
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! ```text
//! Statement  ::= "config" ("dec" | "hex" | "bin")
//!              | "print" (Identifier | MathExp)
//!              | Identifier ["=" MathExp]
//! MathExp    ::= SumExp
//! SumExp     ::= ProductExp (("+" | "-") ProductExp)*
//! ProductExp ::= PrimaryExp (("*" | "/") PrimaryExp)*
//! PrimaryExp ::= IntegerLiteral | "(" MathExp ")" | Identifier
//! ```
//!
//! - Values are `i32`; `+`, `-` and `*` wrap, `/` truncates toward zero.
//! - Reading a variable that was never assigned defines it as `0`.
//! - An assignment resets its target to `0` before the right-hand side is
//!   evaluated, so `x = x + 1` always yields `1`.
//! - `config dec|hex|bin` switches `print` between `14`, `0xe` and
//!   `00000000000000000000000000001110`.
//!
//! ## Architecture
//!
//! ```text
//! Statement text → Scanner → Tokens → TokenCursor → Evaluator → Session state
//! ```
//!
//! - [`Scanner`] - Tokenizes one statement
//! - [`TokenCursor`] - Lookahead and consumption over those tokens
//! - [`Evaluator`] - Dispatches the statement and evaluates expressions
//! - [`Environment`] - Variable storage
//! - [`OutputFormat`] - Decimal, hex and binary rendering
//! - [`Session`] - Owns all state shared between statements
//!
//! ## Error Handling
//!
//! Every error aborts the run. [`Session::run`] reports which statement
//! failed:
//!
//! ```rust
//! use catscript::{Error, ErrorKind, Session};
//!
//! let mut session = Session::new();
//! let mut out = Vec::new();
//!
//! let err = session.run(["x = 7 / 0", "print x"], &mut out).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Arithmetic);
//! assert!(matches!(err, Error::AtStatement { line: 1, .. }));
//! assert!(out.is_empty());
//!
//! // the failed assignment still defined `x`
//! assert_eq!(session.environment().lookup("x"), Some(0));
//! ```

/// Version of the catscript interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod source;

// Re-export main types
pub use error::{Error, ErrorKind, Result};
pub use lexer::{tokenize, Keyword, StatementScanner, Token, TokenKind};
pub use parser::{StatementKind, TokenCursor};
pub use runtime::{
    Environment, Evaluator, OutputFormat, Session, SessionOptions, SessionSnapshot, TrailingTokens,
};
pub use source::{read_statements, split_statements};

/// Type alias for the statement scanner (lexer).
/// Converts one line of source text into tokens.
pub type Scanner = StatementScanner;

/// Type alias for the session.
/// Owns the state that lives across statements.
pub type Interpreter = Session;
