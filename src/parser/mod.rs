//! catscript Parser Module
//!
//! Token cursor and statement recognition. Expressions are not turned into
//! a tree: the runtime evaluates them while walking the cursor.

mod cursor;
mod statement;

pub use cursor::TokenCursor;
pub use statement::StatementKind;
