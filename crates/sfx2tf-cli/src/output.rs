// Status lines for the terminal
//
// Everything here writes to stderr except the document itself, so piping
// `sfx2tf import` into a file never picks up status lines.

use colored::{ColoredString, Colorize};

use crate::logging::VerbosityLevel;

/// Decides whether status lines carry ANSI colors
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }
}

impl OutputStyle {
    fn paint(&self, text: &str, color: fn(&str) -> ColoredString) -> String {
        if self.use_colors {
            color(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn marked(&self, mark: &str, color: fn(&str) -> ColoredString, msg: &str) -> String {
        format!("{} {}", self.paint(mark, color), msg)
    }

    pub fn success(&self, msg: &str) -> String {
        self.marked("✓", |s| s.green().bold(), msg)
    }

    pub fn error(&self, msg: &str) -> String {
        self.marked("✗", |s| s.red().bold(), msg)
    }

    pub fn info(&self, msg: &str) -> String {
        self.marked("ℹ", |s| s.blue(), msg)
    }

    pub fn header(&self, title: &str) -> String {
        self.paint(title, |s| s.bold())
    }

    /// Indented `key: value` line
    pub fn key_value(&self, key: &str, value: &str) -> String {
        format!("  {}: {}", self.paint(key, |s| s.bold()), value)
    }

    /// Error line followed by a blank line and the details
    pub fn error_verbose(&self, error: &str, details: &str) -> String {
        format!("{}\n\n{}", self.error(error), details)
    }
}

/// Suppressed by `--quiet`
pub fn print_success(msg: &str) {
    if VerbosityLevel::Normal.should_output() {
        eprintln!("{}", OutputStyle::default().success(msg));
    }
}

/// Suppressed by `--quiet`
pub fn print_info(msg: &str) {
    if VerbosityLevel::Normal.should_output() {
        eprintln!("{}", OutputStyle::default().info(msg));
    }
}

pub fn print_error(msg: &str) {
    eprintln!("{}", OutputStyle::default().error(msg));
}
