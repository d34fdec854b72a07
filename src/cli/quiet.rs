//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses confirmations and warnings, never errors.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdout is a tty (not piped or redirected)
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(1) == 1 }
}

/// Check if stderr is a tty, which decides whether messages get colors
pub fn stderr_is_tty() -> bool {
    unsafe { libc::isatty(2) == 1 }
}
