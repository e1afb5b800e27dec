//! The numbered polynomial menu.
//!
//! The menu is a small state machine: it either shows the choices, runs a
//! binary operation against a freshly entered operand, or stops. All input goes through a
//! [`Prompter`], so the same loop serves the line editor and batch stdin.

use std::io::Write;
use std::str::FromStr;

use owo_colors::AnsiColors;
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};
use crate::format::{RULE, Style, format_general, print_menu};
use crate::prompt::Prompter;
use crate::session::{BinaryOp, MenuChoice, Session, Target};

const INVALID_INT: &str = "Invalid input! Please enter an integer: ";
const INVALID_NUMBER: &str = "Invalid input! Please enter a valid number: ";

/// What the menu does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Menu,
    Binary(BinaryOp),
    Exit,
}

/// Menu driver over an input source, an output stream and an error stream.
pub struct Menu<P, W, E> {
    prompter: P,
    out: W,
    err: E,
    style: Style,
    session: Session,
}

impl<P: Prompter, W: Write, E: Write> Menu<P, W, E> {
    /// Create a menu with an empty session.
    pub fn new(prompter: P, out: W, err: E, style: Style) -> Self {
        Self {
            prompter,
            out,
            err,
            style,
            session: Session::new(),
        }
    }

    /// Run until the user exits or the input ends.
    pub fn run(&mut self) -> CliResult<()> {
        let mut step = Step::Menu;
        loop {
            let next = match step {
                Step::Menu => self.choose(),
                Step::Binary(op) => self.binary(op),
                Step::Exit => break,
            };
            step = match next {
                Ok(s) => s,
                Err(CliError::EndOfInput) => {
                    debug!("input exhausted");
                    break;
                }
                Err(e) => return Err(e),
            };
        }

        self.session.clear();
        self.out.flush()?;
        Ok(())
    }

    fn choose(&mut self) -> CliResult<Step> {
        print_menu(&self.style, &mut self.out)?;
        let choice = self.read_int("Choose an option: ")?;
        debug!(choice, "menu selection");

        match MenuChoice::try_from(choice) {
            Ok(MenuChoice::InsertTerms) => {
                self.insert_terms(Target::Primary)?;
                Ok(Step::Menu)
            }
            Ok(MenuChoice::Display) => {
                self.style
                    .framed(&mut self.out, "      Displaying Polynomial:")?;
                writeln!(self.out, "{}", self.session.primary())?;
                Ok(Step::Menu)
            }
            Ok(MenuChoice::Binary(op)) => Ok(Step::Binary(op)),
            Ok(MenuChoice::Evaluate) => {
                self.evaluate()?;
                Ok(Step::Menu)
            }
            Ok(MenuChoice::Exit) => {
                writeln!(self.out, "Exiting the program.")?;
                Ok(Step::Exit)
            }
            Err(_) => {
                writeln!(self.out, "Invalid choice. Please try again.")?;
                Ok(Step::Menu)
            }
        }
    }

    fn insert_terms(&mut self, target: Target) -> CliResult<()> {
        let count = self.read_int(&format!(
            "How many terms do you want to insert for the {} polynomial? ",
            target.ordinal()
        ))?;

        for i in 1..=count {
            let coeff = self.read_int(&format!("Insert term {i} - Enter coefficient: "))?;
            let exp = self.read_int(&format!("Insert term {i} - Enter exponent: "))?;
            match self.session.insert(target, coeff, exp) {
                Ok(()) => self
                    .style
                    .framed(&mut self.out, &format!("   Term {i} inserted successfully!"))?,
                Err(e) => self.report(&e.into())?,
            }
        }
        Ok(())
    }

    fn binary(&mut self, op: BinaryOp) -> CliResult<Step> {
        writeln!(self.out)?;
        self.style
            .writeln(&mut self.out, op.title(), Some(AnsiColors::Yellow))?;
        self.style
            .writeln(&mut self.out, RULE, Some(AnsiColors::BrightBlack))?;

        self.insert_terms(Target::Operand)?;
        debug!(operand = %self.session.operand(), "operand entered");

        match self.session.apply(op) {
            Ok(result) => {
                info!(?op, result = %result, "operation complete");
                self.style
                    .framed(&mut self.out, &format!("   {}: ", op.result_label()))?;
                writeln!(self.out, "{}", result)?;
            }
            Err(e) => self.report(&e.into())?,
        }

        // Either answer leads back to the menu with an empty operand.
        let answer = self.read_answer("Do you want to insert another polynomial? (y/n): ");
        self.session.clear_operand();
        let answer = answer?;
        debug!(%answer, "operand cleared");
        Ok(Step::Menu)
    }

    fn evaluate(&mut self) -> CliResult<()> {
        let x: f64 = self.read_parsed(
            "Enter the value of x to evaluate the polynomial: ",
            real_prefix,
            INVALID_NUMBER,
        )?;
        match self.session.evaluate(x) {
            Ok(value) => self.style.framed(
                &mut self.out,
                &format!(
                    "   Polynomial evaluated at x = {}: {}",
                    format_general(x),
                    format_general(value)
                ),
            )?,
            Err(e) => self.report(&e.into())?,
        }
        Ok(())
    }

    fn report(&mut self, e: &CliError) -> CliResult<()> {
        warn!(error = %e, "operation failed");
        self.style.error(&mut self.err, &format!("Error: {e}"))?;
        Ok(())
    }

    fn read_int(&mut self, prompt: &str) -> CliResult<i32> {
        self.read_parsed(prompt, integer_prefix, INVALID_INT)
    }

    /// Read the numeric prefix of the first token of a line as `T`,
    /// re-prompting with `invalid` until one parses. The rest of the line is
    /// discarded. Blank lines are skipped silently.
    fn read_parsed<T: FromStr>(
        &mut self,
        prompt: &str,
        prefix: fn(&str) -> &str,
        invalid: &str,
    ) -> CliResult<T> {
        let mut prompt = prompt;
        loop {
            let line = self.prompter.read_line(prompt, &mut self.out)?;
            match line.split_whitespace().next() {
                None => prompt = "",
                Some(token) => match prefix(token).parse() {
                    Ok(v) => return Ok(v),
                    Err(_) => prompt = invalid,
                },
            }
        }
    }

    /// First non-blank character of the next non-blank line.
    fn read_answer(&mut self, prompt: &str) -> CliResult<char> {
        let mut prompt = prompt;
        loop {
            let line = self.prompter.read_line(prompt, &mut self.out)?;
            match line.trim_start().chars().next() {
                None => prompt = "",
                Some(c) => return Ok(c),
            }
        }
    }
}

/// Length of the run of ASCII digits at the start of `s`.
fn digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Length of an optional leading `+` or `-`.
fn sign(s: &str) -> usize {
    usize::from(s.starts_with(['+', '-']))
}

/// The optionally signed decimal integer at the start of `token`, or an
/// empty string when it does not start with one.
fn integer_prefix(token: &str) -> &str {
    let s = sign(token);
    match digits(&token[s..]) {
        0 => "",
        n => &token[..s + n],
    }
}

/// The longest decimal real (`[sign] digits [. digits] [e [sign] digits]`)
/// at the start of `token`. Words such as `inf` and `nan` never match.
fn real_prefix(token: &str) -> &str {
    let mut end = sign(token);
    let int_digits = digits(&token[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if token[end..].starts_with('.') {
        frac_digits = digits(&token[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return "";
    }

    if token[end..].starts_with(['e', 'E']) {
        let exp_start = end + 1;
        let exp_sign = sign(&token[exp_start..]);
        let exp_digits = digits(&token[exp_start + exp_sign..]);
        if exp_digits > 0 {
            end = exp_start + exp_sign + exp_digits;
        }
    }
    &token[..end]
}
