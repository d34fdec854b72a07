//! Non-interactive mode: flags in, passwords or strength reports out.

mod context;
mod flags;
mod parse;
pub mod prompts;
mod quiet;

use context::{Context, Exit};
use flags::CliFlags;
use parse::{ParseError, parse};

/// Run CLI mode and return the process exit status.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::help_hint();
            return 2;
        }
    };

    match ctx.run() {
        Ok(()) | Err(Exit::Done) => 0,
        Err(Exit::Failed(code)) => code,
    }
}
