//! Interactive TUI.

mod input;
mod options;
mod text;

use std::time::Instant;

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{self, Event, KeyEventKind};

use crate::cli::prompts;
use crate::entropy::Source;
use crate::settings::Settings;
use crate::terminal::{RawModeGuard, print_raw_lines};

use options::{App, LoopAction};
pub use text::print_help;

/// Run TUI interactive mode and return the process exit status.
pub fn run() -> i32 {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        log::warn!("failed to load settings: {e}");
        Settings::default()
    });

    let mut app = App::new(settings, Source::os());
    app.generate(Instant::now());

    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(e) => {
            prompts::error(&format!("Interactive mode needs a terminal: {e}"));
            return 1;
        }
    };

    crate::exits::set_interactive(true);
    let mut clipboard: Option<ClipboardContext> = None;

    loop {
        draw(&app);

        match event::poll(app.poll_timeout(Instant::now())) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    let now = Instant::now();
                    match app.handle_key(key, now) {
                        LoopAction::Continue => {}
                        LoopAction::Copy => {
                            let ok = copy(&mut clipboard, app.password());
                            app.copied(ok, now);
                        }
                        LoopAction::Save => {
                            let ok = match app.settings.save_to_file() {
                                Ok(()) => true,
                                Err(e) => {
                                    log::warn!("failed to save settings: {e}");
                                    false
                                }
                            };
                            app.saved(ok, now);
                        }
                        LoopAction::Break => break,
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("failed to read terminal event: {e}");
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                log::error!("failed to poll terminal: {e}");
                break;
            }
        }

        app.tick(Instant::now());
    }

    guard.disable();
    crate::exits::set_interactive(false);
    0
}

fn draw(app: &App) {
    print!("\x1b[H");
    print_raw_lines(&text::render(app));
    print!("\x1b[J");
    crate::terminal::flush();
}

/// Copy to the system clipboard, opening it on first use.
fn copy(clipboard: &mut Option<ClipboardContext>, text: &str) -> bool {
    if clipboard.is_none() {
        match ClipboardContext::new() {
            Ok(ctx) => *clipboard = Some(ctx),
            Err(e) => {
                log::debug!("clipboard unavailable: {e}");
                return false;
            }
        }
    }

    match clipboard.as_mut() {
        Some(ctx) => match ctx.set_contents(text.to_string()) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("clipboard error: {e}");
                false
            }
        },
        None => false,
    }
}
