//! Interactive prompt: scan one line at a time.

use crate::{run_source, CliError};
use cream_diagnostics::ErrorReporter;
use cream_options::RunOptions;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use std::path::PathBuf;

const PROMPT: &str = "> ";
const HISTORY_FILE: &str = "history.txt";

pub struct Repl {
    editor: Editor<(), DefaultHistory>,
    history_path: Option<PathBuf>,
}

impl Repl {
    pub fn new(options: &RunOptions) -> Result<Self, CliError> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .max_history_size(options.max_history_size)?
            .auto_add_history(options.history)
            .build();

        let mut editor = Editor::with_config(config)?;

        let history_path = options.history.then(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("cream-cheese")
                .join(HISTORY_FILE)
        });

        if let Some(path) = &history_path {
            if let Some(parent) = path.parent() {
                if let Err(err) = std::fs::create_dir_all(parent) {
                    tracing::debug!(%err, "could not create history directory");
                }
            }
            if let Err(err) = editor.load_history(path) {
                tracing::debug!(%err, "no prompt history loaded");
            }
        }

        Ok(Self {
            editor,
            history_path,
        })
    }

    /// Run until a blank line, Ctrl-D or end of input.
    pub fn run(&mut self, options: &RunOptions, reporter: &mut impl ErrorReporter) -> Result<(), CliError> {
        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        break;
                    }
                    run_source(&line, options, &mut *reporter)?;
                    reporter.reset();
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        if let Some(path) = &self.history_path {
            if let Err(err) = self.editor.save_history(path) {
                tracing::warn!(%err, "could not save prompt history");
            }
        }
        Ok(())
    }
}
