//! Exit handling: signal handlers and terminal cleanup.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set while the TUI owns the alternate screen.
static INTERACTIVE: AtomicBool = AtomicBool::new(false);

pub fn set_interactive(active: bool) {
    INTERACTIVE.store(active, Ordering::SeqCst);
}

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Cleanup function registered with atexit - runs on any exit
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    // Only print escape codes if stdout is a TTY (not when piping)
    unsafe {
        if libc::isatty(1) == 1 {
            let seq: &[u8] = if INTERACTIVE.load(Ordering::SeqCst) {
                // Also leave the alternate screen.
                b"\x1b[0m\x1b[?25h\x1b[?1049l\r\n"
            } else {
                b"\x1b[0m\x1b[?25h"
            };
            libc::write(1, seq.as_ptr() as *const libc::c_void, seq.len());
        }
    }
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep passwords out of core dumps and ptrace.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

/// Reset terminal state left over from a previous run
pub fn reset_terminal() {
    reset_terminal_termios();
}
