//! Error type for the polyterm front-end

use std::io;
use std::path::PathBuf;

use polyterm_math::PolyError;
use thiserror::Error;

/// Error type for menu and startup operations
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error while prompting or printing
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Line editor failure
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    /// Arithmetic or evaluation error from the polynomial core
    #[error("{0}")]
    Poly(#[from] PolyError),
    /// Unreadable or malformed configuration file
    #[error("Invalid configuration file {}: {message}", path.display())]
    Config {
        /// Path of the configuration file
        path: PathBuf,
        /// What went wrong
        message: String,
    },
    /// Input ended (EOF or Ctrl-C/Ctrl-D)
    #[error("end of input")]
    EndOfInput,
}

/// Result type for front-end operations
pub type CliResult<T> = Result<T, CliError>;
