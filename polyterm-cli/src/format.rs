//! Output formatting and display utilities for polyterm

use std::io::{self, Write};

use owo_colors::{AnsiColors, OwoColorize, Stream};

/// Rule framing confirmations and results
pub(crate) const RULE: &str = "---------------------------------";

/// Rule framing the menu
pub(crate) const MENU_RULE: &str = "===============================";

/// Colour settings shared by everything the menu prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    /// Create a style; `color` enables ANSI colours where supported.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Write a line, coloured if enabled.
    pub fn writeln(
        &self,
        w: &mut dyn Write,
        text: &str,
        color: Option<AnsiColors>,
    ) -> io::Result<()> {
        match color {
            Some(c) if self.color => writeln!(
                w,
                "{}",
                text.if_supports_color(Stream::Stdout, |t| t.color(c))
            ),
            _ => writeln!(w, "{}", text),
        }
    }

    /// Write an error line in red.
    pub fn error(&self, w: &mut dyn Write, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(w, "{}", text.if_supports_color(Stream::Stderr, |t| t.red()))
        } else {
            writeln!(w, "{}", text)
        }
    }

    /// Write `text` between two rules, preceded by a blank line.
    pub fn framed(&self, w: &mut dyn Write, text: &str) -> io::Result<()> {
        writeln!(w)?;
        self.writeln(w, RULE, Some(AnsiColors::BrightBlack))?;
        self.writeln(w, text, Some(AnsiColors::Cyan))?;
        self.writeln(w, RULE, Some(AnsiColors::BrightBlack))
    }
}

/// Format a real number with six significant digits, switching to
/// scientific notation outside `1e-4 <= |v| < 1e6` and dropping trailing
/// zeros (the `%g` rendering).
pub(crate) fn format_general(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to six digits first decides the exponent, so 999999.5 becomes 1e+06.
    let sci = format!("{v:.5e}");
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if (-4..6).contains(&exp) {
        let decimals = (5 - exp) as usize;
        trim_fraction(&format!("{v:.decimals$}")).to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.unsigned_abs())
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Print the numbered menu.
pub(crate) fn print_menu(style: &Style, w: &mut dyn Write) -> io::Result<()> {
    style.writeln(w, MENU_RULE, Some(AnsiColors::Green))?;
    style.writeln(w, "    Polynomial Operations Menu", Some(AnsiColors::Green))?;
    style.writeln(w, MENU_RULE, Some(AnsiColors::Green))?;
    for line in [
        "1. Insert Term(s)",
        "2. Display Polynomial",
        "3. Add Polynomials",
        "4. Subtract Polynomials",
        "5. Multiply Polynomials",
        "6. Evaluate Polynomial",
        "0. Exit",
    ] {
        style.writeln(w, line, None)?;
    }
    style.writeln(w, MENU_RULE, Some(AnsiColors::Green))
}

/// Print the startup greeting.
pub(crate) fn print_version_info(style: &Style, w: &mut dyn Write) -> io::Result<()> {
    style.writeln(
        w,
        &format!("polyterm v{}", env!("CARGO_PKG_VERSION")),
        Some(AnsiColors::Green),
    )?;
    style.writeln(w, "Sparse polynomial workbench. Choose 0 to exit.", None)?;
    writeln!(w)
}
