//! ANSI color helpers for CLI output.

const RESET: &str = "\x1b[0m";

/// Format text in green.
pub fn green(s: &str) -> String {
    format!("\x1b[32m{}{}", s, RESET)
}

/// Format text in red.
pub fn red(s: &str) -> String {
    format!("\x1b[31m{}{}", s, RESET)
}

/// Format text in yellow.
pub fn yellow(s: &str) -> String {
    format!("\x1b[33m{}{}", s, RESET)
}

/// Format text in cyan.
pub fn cyan(s: &str) -> String {
    format!("\x1b[36m{}{}", s, RESET)
}

/// Format text in bold.
pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}{}", s, RESET)
}

/// Format text in gray.
pub fn gray(s: &str) -> String {
    format!("\x1b[90m{}{}", s, RESET)
}

/// Format a status label (right-aligned, green, bold).
pub fn status_label(label: &str) -> String {
    format!("\x1b[1;32m{:>12}{}", label, RESET)
}
