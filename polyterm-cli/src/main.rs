//! polyterm - Command-line menu for sparse polynomial arithmetic

mod error;
mod format;
mod interactive;
mod menu;
mod prompt;
mod session;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{Shell, generate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use error::{CliError, CliResult};
use format::Style;
use interactive::{run_batch, run_interactive};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
struct CliConfig {
    /// Default verbosity level
    #[serde(default)]
    verbosity: Option<String>,
    /// Enable colors by default
    #[serde(default)]
    color: Option<bool>,
}

impl CliConfig {
    /// `~/.polytermrc`
    fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut p| {
            p.push(".polytermrc");
            p
        })
    }

    /// Load configuration from an explicit file, or from the default file
    /// when it exists and parses.
    fn load(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::read(path);
        }

        if let Some(path) = Self::default_path()
            && path.exists()
            && let Ok(config) = Self::read(&path)
        {
            return Ok(config);
        }

        Ok(Self::default())
    }

    fn read(path: &Path) -> CliResult<Self> {
        let config_error = |message: String| CliError::Config {
            path: path.to_path_buf(),
            message,
        };
        let contents = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        serde_yaml::from_str(&contents).map_err(|e| config_error(e.to_string()))
    }

    /// Merge configuration with command-line arguments
    fn merge_with_args(&self, args: &mut Args) {
        // Only apply config if arg is not explicitly set
        if args.verbosity == Verbosity::Normal
            && let Some(ref v) = self.verbosity
        {
            match v.as_str() {
                "quiet" => args.verbosity = Verbosity::Quiet,
                "verbose" => args.verbosity = Verbosity::Verbose,
                "debug" => args.verbosity = Verbosity::Debug,
                "trace" => args.verbosity = Verbosity::Trace,
                _ => {}
            }
        }

        if let Some(color) = self.color
            && !color
        {
            args.no_color = true;
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity {
    /// No output except the menu itself
    Quiet,
    /// Startup greeting
    Normal,
    /// Log operation results to stderr
    Verbose,
    /// Debug output
    Debug,
    /// Trace output
    Trace,
}

impl Verbosity {
    /// Maximum level logged to stderr, or `None` when logging stays off.
    fn log_level(self) -> Option<Level> {
        match self {
            Verbosity::Quiet | Verbosity::Normal => None,
            Verbosity::Verbose => Some(Level::INFO),
            Verbosity::Debug => Some(Level::DEBUG),
            Verbosity::Trace => Some(Level::TRACE),
        }
    }
}

/// polyterm - sparse polynomial arithmetic from a numbered menu
#[derive(Parser, Debug, Clone)]
#[command(name = "polyterm")]
#[command(version)]
#[command(about = "Insert, add, subtract, multiply and evaluate sparse polynomials")]
struct Args {
    /// Read menu input as plain lines from stdin (implied when stdin is not a terminal)
    #[arg(short, long)]
    batch: bool,

    /// Verbosity level
    #[arg(short, long, value_enum, default_value = "normal")]
    verbosity: Verbosity,

    /// Enable quiet mode (equivalent to --verbosity quiet)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Configuration file (YAML). Defaults to ~/.polytermrc if present.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Generate shell completion script for the specified shell
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    let mut args = Args::parse();

    // Handle completion generation
    if let Some(shell) = args.completions {
        let mut cmd = Args::command();
        let bin_name = cmd.get_name().to_string();
        generate(shell, &mut cmd, bin_name, &mut io::stdout());
        return;
    }

    // Load configuration file and merge with args
    let config = match CliConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            Style::new(!args.no_color)
                .error(&mut io::stderr(), &format!("Error: {}", e))
                .ok();
            std::process::exit(1);
        }
    };
    config.merge_with_args(&mut args);

    // Determine verbosity level
    let verbosity = if args.quiet {
        Verbosity::Quiet
    } else {
        args.verbosity
    };

    // Set up logging
    if let Some(level) = verbosity.log_level() {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(io::stderr)
            .with_ansi(!args.no_color)
            .finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Failed to set tracing subscriber: {}", e);
            std::process::exit(1);
        }
    }

    let style = Style::new(!args.no_color);
    let batch = args.batch || !io::stdin().is_terminal();
    tracing::debug!(batch, ?verbosity, "starting menu");

    let result = if batch {
        run_batch(style)
    } else {
        run_interactive(style, verbosity >= Verbosity::Normal)
    };

    if let Err(e) = result {
        style.error(&mut io::stderr(), &format!("Error: {}", e)).ok();
        std::process::exit(1);
    }
}
