use super::format::OutputFormat;

/// What to do with tokens left after a complete statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingTokens {
    /// Fail the statement with [`crate::Error::TrailingTokens`]
    #[default]
    Reject,
    /// Drop them silently (legacy behaviour)
    Ignore,
}

/// Session options
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Format used by `print` until the first `config` statement
    pub initial_format: OutputFormat,
    /// Maximum parenthesis nesting inside one expression
    pub max_nesting_depth: usize,
    /// Handling of tokens after a complete statement
    pub trailing_tokens: TrailingTokens,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            initial_format: OutputFormat::Decimal,
            max_nesting_depth: 256,
            trailing_tokens: TrailingTokens::Reject,
        }
    }
}
