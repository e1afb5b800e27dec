//! Line input sources for the menu

use std::io::{BufRead, Write};

use crate::error::{CliError, CliResult};

/// A source of input lines.
pub trait Prompter {
    /// Show `prompt` and read one line without its terminator.
    ///
    /// Returns [`CliError::EndOfInput`] once the input is exhausted.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> CliResult<String>;
}

impl<T: Prompter + ?Sized> Prompter for &mut T {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> CliResult<String> {
        (**self).read_line(prompt, out)
    }
}

/// Reads plain lines from any buffered reader, echoing prompts to the
/// output stream. Used for `--batch` and piped stdin.
pub struct LinePrompter<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> LinePrompter<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> CliResult<String> {
        out.write_all(prompt.as_bytes())?;
        out.flush()?;

        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Err(CliError::EndOfInput);
        }
        Ok(self.buf.trim_end_matches(['\r', '\n']).to_string())
    }
}
