//! Runtime execution for catscript statements

mod environment;
mod evaluator;
mod format;
mod options;
mod session;

pub use environment::Environment;
pub use evaluator::Evaluator;
pub use format::OutputFormat;
pub use options::{SessionOptions, TrailingTokens};
pub use session::{Session, SessionSnapshot};
