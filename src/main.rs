use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use catscript::{read_statements, OutputFormat, Session, SessionOptions, TrailingTokens};
use clap::Parser;

/// catscript runs line-oriented integer scripts: assignments, arithmetic,
/// `config dec|hex|bin` and `print`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program file, one statement per line.
    #[arg(default_value = "Expressions.txt")]
    file: PathBuf,

    /// Run these statements instead of reading a file.
    #[arg(short = 'e', long = "eval", num_args = 1..)]
    eval: Vec<String>,

    /// Output format used before the first `config` statement.
    #[arg(long, default_value_t = OutputFormat::Decimal)]
    format: OutputFormat,

    /// Silently drop tokens left after a complete statement.
    #[arg(long)]
    ignore_trailing: bool,

    /// Maximum parenthesis nesting inside one expression.
    #[arg(long, default_value_t = 256)]
    max_depth: usize,

    /// Print the final variables and format as JSON on stderr.
    #[arg(long)]
    dump_state: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let statements = if args.eval.is_empty() {
        read_statements(&args.file)
            .with_context(|| format!("failed to load program {}", args.file.display()))?
    } else {
        args.eval.clone()
    };

    let options = SessionOptions {
        initial_format: args.format,
        max_nesting_depth: args.max_depth,
        trailing_tokens: if args.ignore_trailing {
            TrailingTokens::Ignore
        } else {
            TrailingTokens::Reject
        },
    };
    let mut session = Session::with_options(options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = session.run(&statements, &mut out);
    out.flush().context("failed to flush output")?;

    if args.dump_state {
        eprintln!("{}", session.snapshot().to_json()?);
    }

    result?;
    Ok(())
}
