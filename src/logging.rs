//! Diagnostic logging through the `log` facade.
//!
//! Defaults to warnings on stderr; `RUST_LOG=debug` shows request details.
//! Passwords are never logged.

use env_logger::{Builder, Env};

pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
