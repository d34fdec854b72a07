//! Centralized user-facing messages, shared by the CLI and the TUI.

use super::quiet;

pub const NO_CATEGORIES: &str = "Please select at least one character type.";
pub const COPIED: &str = "Password copied!";
pub const COPY_FAILED: &str = "Failed to copy password.";

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

fn colored(color: &str, msg: &str) -> String {
    if quiet::stderr_is_tty() {
        format!("{color}{msg}{RESET}")
    } else {
        msg.to_string()
    }
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", colored(YELLOW, msg));
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{}", colored(RED, msg));
}

pub fn help_hint() {
    if !quiet::enabled() {
        eprintln!("Run `passgauge --help` for usage.");
    }
}

/// Clipboard confirmation goes to stderr so stdout stays clean for piping.
pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        if count == 1 {
            eprintln!("{COPIED}");
        } else {
            eprintln!("{count} passwords copied!");
        }
    }
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}
