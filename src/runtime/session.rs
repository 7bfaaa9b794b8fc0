use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

use super::environment::Environment;
use super::evaluator::Evaluator;
use super::format::OutputFormat;
use super::options::SessionOptions;
use crate::error::{Error, Result};
use crate::lexer::tokenize;

/// State shared by every statement of a run
///
/// Holds the variables, the current output format and the options. Each
/// statement is scanned into its own token buffer, evaluated, and dropped.
#[derive(Debug, Clone)]
pub struct Session {
    env: Environment,
    format: OutputFormat,
    options: SessionOptions,
    executed: usize,
}

impl Session {
    /// Creates a session with default options
    pub fn new() -> Self {
        Self::with_options(SessionOptions::default())
    }

    /// Creates a session with the given options
    pub fn with_options(options: SessionOptions) -> Self {
        Session {
            env: Environment::new(),
            format: options.initial_format,
            options,
            executed: 0,
        }
    }

    /// Executes one statement, writing any `print` output to `out`
    ///
    /// A statement that fails writes nothing. Side effects that happened
    /// before the failure (such as an assignment target being reset to
    /// `0`) are kept.
    pub fn execute<W: Write + ?Sized>(&mut self, statement: &str, out: &mut W) -> Result<()> {
        tracing::debug!(statement, "executing statement");

        let tokens = tokenize(statement);
        let printed =
            Evaluator::new(tokens, &mut self.env, &mut self.format, &self.options).execute()?;
        self.executed += 1;

        if let Some(line) = printed {
            writeln!(out, "{}", line).map_err(Error::output)?;
        }
        Ok(())
    }

    /// Executes statements in order, stopping at the first error
    ///
    /// Returns the number of statements executed. Errors are wrapped in
    /// [`Error::AtStatement`] with the 1-based position of the statement.
    pub fn run<I, S, W>(&mut self, statements: I, out: &mut W) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write + ?Sized,
    {
        let mut count = 0;
        for (index, statement) in statements.into_iter().enumerate() {
            if let Err(err) = self.execute(statement.as_ref(), out) {
                tracing::warn!(line = index + 1, error = %err, "run aborted");
                return Err(Error::AtStatement {
                    line: index + 1,
                    source: Box::new(err),
                });
            }
            count += 1;
        }
        Ok(count)
    }

    /// Executes every line of `source` as a statement
    pub fn run_source<W: Write + ?Sized>(&mut self, source: &str, out: &mut W) -> Result<usize> {
        self.run(crate::source::split_statements(source), out)
    }

    /// Variables of the session
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Mutable access to the variables of the session
    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Current output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Overrides the output format
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    /// Options the session was created with
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Number of statements that completed successfully
    pub fn statements_executed(&self) -> usize {
        self.executed
    }

    /// Captures variables and output format
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            format: self.format,
            variables: self.env.snapshot(),
        }
    }

    /// Replaces variables and output format with a snapshot's
    pub fn restore(&mut self, snapshot: SessionSnapshot) {
        self.format = snapshot.format;
        self.env = snapshot.variables.into_iter().collect();
    }

    /// Clears variables and returns to the initial format
    pub fn reset(&mut self) {
        self.env.clear();
        self.format = self.options.initial_format;
        self.executed = 0;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable copy of a session's state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Output format at capture time
    pub format: OutputFormat,
    /// Variables ordered by name
    pub variables: BTreeMap<String, i32>,
}

impl SessionSnapshot {
    /// Encode as JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Snapshot {
            message: e.to_string(),
        })
    }

    /// Decode from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Snapshot {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, statements: &[&str]) -> (Result<usize>, String) {
        let mut out = Vec::new();
        let result = session.run(statements.iter().copied(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_state_persists_across_statements() {
        let mut session = Session::new();
        let (result, output) = run(&mut session, &["x = 2 + 3 * 4", "print x"]);
        assert_eq!(result.unwrap(), 2);
        assert_eq!(output, "14\n");
        assert_eq!(session.statements_executed(), 2);
    }

    #[test]
    fn test_error_reports_statement_number() {
        let mut session = Session::new();
        let (result, output) = run(&mut session, &["print 1", "x = 7 / 0", "print 2"]);

        let err = result.unwrap_err();
        assert!(matches!(err, Error::AtStatement { line: 2, .. }));
        assert_eq!(err.root(), &Error::DivisionByZero { column: 7 });
        assert_eq!(output, "1\n");
        assert_eq!(session.statements_executed(), 1);
    }

    #[test]
    fn test_initial_format_option() {
        let mut session = Session::with_options(SessionOptions {
            initial_format: OutputFormat::Hexadecimal,
            ..SessionOptions::default()
        });
        let (_, output) = run(&mut session, &["print 16", "config dec", "print 16"]);
        assert_eq!(output, "0x10\n16\n");

        session.reset();
        assert_eq!(session.format(), OutputFormat::Hexadecimal);
        assert!(session.environment().is_empty());
    }

    #[test]
    fn test_snapshot_json() {
        let mut session = Session::new();
        run(&mut session, &["config bin", "b = 2", "a = 1"]).0.unwrap();

        let snapshot = session.snapshot();
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"bin\""));

        let decoded = SessionSnapshot::from_json(&json).unwrap();
        assert_eq!(decoded, snapshot);

        let mut restored = Session::new();
        restored.restore(decoded);
        assert_eq!(restored.format(), OutputFormat::Binary);
        assert_eq!(restored.environment().lookup("b"), Some(2));
    }

    #[test]
    fn test_invalid_snapshot_json() {
        let err = SessionSnapshot::from_json("{\"format\": \"oct\"}").unwrap_err();
        assert!(matches!(err, Error::Snapshot { .. }));
    }
}
