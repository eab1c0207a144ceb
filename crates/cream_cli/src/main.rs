//! cream-cheese: scan a script, or lines typed at a prompt, and print the tokens.
//!
//! Usage:
//!   cream-cheese [options] [script]
//!
//! Exit codes follow sysexits: 64 for bad usage, 65 when the script had
//! lexical errors, 74 when a file could not be read.

mod output;
mod repl;
mod reporter;

use clap::{Parser as ClapParser, ValueEnum};
use cream_diagnostics::ErrorReporter;
use cream_options::{find_config_file, parse_config_file, OptionsError, RunOptions, TokenFormat};
use cream_scanner::Scanner;
use reporter::ConsoleReporter;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

const EXIT_USAGE: i32 = 64;
const EXIT_DATA_ERR: i32 = 65;
const EXIT_IO_ERR: i32 = 74;

#[derive(ClapParser, Debug)]
#[command(name = "cream-cheese", about = "Tokenize cream-cheese scripts", version)]
struct Cli {
    /// Script to scan. Starts an interactive prompt when omitted.
    #[arg(value_name = "SCRIPT")]
    script: Vec<PathBuf>,

    /// Path to a cream.json config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Token output format.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Force colored diagnostics.
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored diagnostics.
    #[arg(long = "no-color")]
    no_color: bool,

    /// Log scanner activity to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for TokenFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => TokenFormat::Text,
            FormatArg::Json => TokenFormat::Json,
        }
    }
}

/// Failures of the harness itself, as opposed to lexical errors.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CliError {
    #[error("could not read script '{}'", .path.display())]
    #[diagnostic(code(cream::io))]
    ReadScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(cream::config))]
    Options(#[from] OptionsError),

    #[error("interactive prompt failed")]
    #[diagnostic(code(cream::prompt))]
    Prompt(#[from] rustyline::error::ReadlineError),

    #[error("could not write tokens")]
    #[diagnostic(code(cream::output))]
    Output(#[from] io::Error),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.script.len() > 1 {
        eprintln!("Usage: cream-cheese [script]");
        process::exit(EXIT_USAGE);
    }

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            EXIT_IO_ERR
        }
    };
    process::exit(exit_code);
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<i32, CliError> {
    let script = cli.script.first();
    let options = resolve_options(cli, script.map(PathBuf::as_path))?;
    let use_color = options.color.unwrap_or_else(atty_is_terminal);
    let mut reporter = ConsoleReporter::stderr(use_color);

    match script {
        Some(path) => run_file(path, &options, &mut reporter),
        None => {
            let mut repl = repl::Repl::new(&options)?;
            repl.run(&options, &mut reporter)?;
            Ok(0)
        }
    }
}

/// Merge the config file (explicit, or found next to the script) with flags.
fn resolve_options(cli: &Cli, script: Option<&Path>) -> Result<RunOptions, CliError> {
    let config_path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => {
            let dir = match script.and_then(Path::parent) {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            find_config_file(&dir)
        }
    };

    let mut options = match config_path {
        Some(path) => RunOptions::from(parse_config_file(&path)?),
        None => RunOptions::default(),
    };

    if let Some(format) = cli.format {
        options.token_format = format.into();
    }
    if cli.color {
        options.color = Some(true);
    } else if cli.no_color {
        options.color = Some(false);
    }
    Ok(options)
}

fn run_file(path: &Path, options: &RunOptions, reporter: &mut impl ErrorReporter) -> Result<i32, CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::ReadScript {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "scanning script");

    run_source(&source, options, &mut *reporter)?;

    Ok(if reporter.had_error() { EXIT_DATA_ERR } else { 0 })
}

/// Scan `source` and print every token, EOF included.
pub(crate) fn run_source(source: &str, options: &RunOptions, reporter: &mut impl ErrorReporter) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for token in Scanner::new(source, &mut *reporter) {
        output::write_token(&mut out, &token, options.token_format)?;
    }
    out.flush()?;
    Ok(())
}

fn atty_is_terminal() -> bool {
    // Simple check - on Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        false
    }
}
