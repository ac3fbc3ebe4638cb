//! ANSI helpers for diagnostics on stderr.
//!
//! Colour is used only when the stream is a terminal and `NO_COLOR` is unset.

/// ANSI color codes for CLI output
pub mod ansi {
    /// Red color (ANSI 31) - used for errors
    pub const RED: &str = "\x1b[31m";
    /// Reset color
    pub const RESET: &str = "\x1b[0m";
}

/// Program name used as the diagnostic prefix.
pub const PROGRAM: &str = "lcat";

/// Whether coloured output should be written to stderr.
pub fn stderr_colors_enabled() -> bool {
    colors_enabled(
        std::env::var_os("NO_COLOR").is_some(),
        atty::is(atty::Stream::Stderr),
    )
}

fn colors_enabled(no_color: bool, is_tty: bool) -> bool {
    !no_color && is_tty
}

/// Wrap `text` in `color` when `enabled`.
pub fn paint(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", color, text, ansi::RESET)
    } else {
        text.to_string()
    }
}

/// Format an error line: `lcat: <message>`.
pub fn error_line(message: &str, colored: bool) -> String {
    format!("{}: {}", PROGRAM, paint(message, ansi::RED, colored))
}
