//! Status lines for the nuextern CLI.
//!
//! Lines look like Cargo's: a bold, right-aligned verb followed by the
//! message. They go to stderr so stdout carries only the rendered document.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Column the verb is right-aligned to.
const VERB_WIDTH: usize = 12;

/// Colour of a status verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Progress: reading, running, parsing.
    Progress,
    /// Where output ended up.
    Note,
    /// Something the user probably did not intend.
    Warning,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Progress => "\x1b[32m",
            Tone::Note => "\x1b[36m",
            Tone::Warning => "\x1b[33m",
        }
    }
}

/// Render one status line, without the trailing newline.
pub fn format_line(tone: Tone, verb: &str, message: &str, color: bool) -> String {
    if color {
        format!("{BOLD}{}{verb:>VERB_WIDTH$}{RESET} {message}", tone.ansi())
    } else {
        format!("{verb:>VERB_WIDTH$} {message}")
    }
}

/// Writes status lines to stderr.
///
/// Colour follows whether stderr is a terminal; `quiet` drops every line.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Printer {
    pub fn new(quiet: bool) -> Self {
        Self::with_color(io::stderr().is_terminal(), quiet)
    }

    pub fn with_color(color: bool, quiet: bool) -> Self {
        Self { color, quiet }
    }

    /// e.g. "     Reading tool.nu"
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(Tone::Progress, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.emit(Tone::Note, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(Tone::Warning, verb, message);
    }

    /// Write one line to `out`. Nothing is written when quiet.
    pub fn write_line(
        &self,
        out: &mut impl Write,
        tone: Tone,
        verb: &str,
        message: &str,
    ) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(out, "{}", format_line(tone, verb, message, self.color))
    }

    fn emit(&self, tone: Tone, verb: &str, message: &str) {
        // A closed stderr is not worth failing the run for.
        let _ = self.write_line(&mut io::stderr().lock(), tone, verb, message);
    }
}

/// `plural(1, "command", "commands")` gives "1 command".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    let noun = if n == 1 { singular } else { pluralized };
    format!("{n} {noun}")
}

/// Show `path` relative to the working directory when it lies beneath it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn written(printer: Printer, tone: Tone, verb: &str, message: &str) -> String {
        let mut out = Vec::new();
        printer.write_line(&mut out, tone, verb, message).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_verb_is_right_aligned() {
        let plain = Printer::with_color(false, false);

        let line = written(plain, Tone::Progress, "Parsed", "3 commands");

        assert_eq!(line, "      Parsed 3 commands\n");
    }

    #[test]
    fn test_long_verb_is_not_truncated() {
        let line = format_line(Tone::Note, "Retrieving-all", "x", false);

        assert_eq!(line, "Retrieving-all x");
    }

    #[test]
    fn test_plain_output_has_no_escapes() {
        let plain = Printer::with_color(false, false);

        let line = written(plain, Tone::Warning, "Empty", "nothing");

        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_colored_output_wraps_verb() {
        let colored = Printer::with_color(true, false);

        let line = written(colored, Tone::Warning, "Empty", "nothing");

        assert_eq!(line, "\x1b[1m\x1b[33m       Empty\x1b[0m nothing\n");
    }

    #[test]
    fn test_quiet_writes_nothing() {
        let quiet = Printer::with_color(true, true);

        let line = written(quiet, Tone::Progress, "Reading", "stdin");

        assert!(line.is_empty());
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "command", "commands"), "0 commands");
        assert_eq!(plural(1, "command", "commands"), "1 command");
        assert_eq!(plural(5, "option", "options"), "5 options");
    }

    #[test]
    fn test_display_path() {
        let cwd = std::env::current_dir().unwrap();

        assert_eq!(display_path(&cwd.join("tool")), "tool");
        assert_eq!(display_path(&cwd), ".");
        assert_eq!(
            display_path(Path::new("/nonexistent/path/to/tool")),
            "/nonexistent/path/to/tool"
        );
    }
}
