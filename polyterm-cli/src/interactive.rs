//! Interactive mode (line editor) and batch mode for polyterm
//!
//! Interactive mode reads menu input through `rustyline`, with history kept
//! in `~/.polyterm_history`. Batch mode reads plain lines from stdin and is
//! used when stdin is not a terminal.

use std::io::{self, Write};
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::{CompletionType, Config, DefaultEditor};
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::format::{Style, print_version_info};
use crate::menu::Menu;
use crate::prompt::{LinePrompter, Prompter};

/// Prompts through a `rustyline` editor.
struct EditorPrompter {
    editor: DefaultEditor,
}

impl Prompter for EditorPrompter {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> CliResult<String> {
        // Menu text must reach the terminal before the editor takes over.
        out.flush()?;
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Err(CliError::EndOfInput),
            Err(e) => Err(e.into()),
        }
    }
}

fn history_path() -> PathBuf {
    dirs::home_dir()
        .map(|mut p| {
            p.push(".polyterm_history");
            p
        })
        .unwrap_or_else(|| PathBuf::from(".polyterm_history"))
}

/// Run the menu through the line editor.
pub(crate) fn run_interactive(style: Style, greet: bool) -> CliResult<()> {
    let config = Config::builder()
        .completion_type(CompletionType::List)
        .auto_add_history(true)
        .build();

    let mut prompter = EditorPrompter {
        editor: DefaultEditor::with_config(config)?,
    };

    let history = history_path();
    if let Err(e) = prompter.editor.load_history(&history) {
        debug!(path = %history.display(), error = %e, "no history loaded");
    }

    let mut stdout = io::stdout();
    if greet {
        print_version_info(&style, &mut stdout)?;
    }

    Menu::new(&mut prompter, stdout, io::stderr(), style).run()?;

    if let Err(e) = prompter.editor.save_history(&history) {
        debug!(path = %history.display(), error = %e, "history not saved");
    }
    Ok(())
}

/// Run the menu over plain stdin lines.
pub(crate) fn run_batch(style: Style) -> CliResult<()> {
    let stdin = io::stdin();
    Menu::new(
        LinePrompter::new(stdin.lock()),
        io::stdout(),
        io::stderr(),
        style,
    )
    .run()
}
