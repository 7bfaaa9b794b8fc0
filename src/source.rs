//! Statement sources
//!
//! A program is a sequence of statements, one per line.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Split program text into statements, one per line
///
/// A trailing `\r` is dropped from each line. Blank lines are kept so
/// statement numbers match line numbers.
pub fn split_statements(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Read every statement of a program file
pub fn read_statements(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let statements = split_statements(&text);
    tracing::debug!(path = %path.display(), count = statements.len(), "read statements");
    Ok(statements)
}
