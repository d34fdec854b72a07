//! CLI context - bundles settings, flags and the random source.

use std::io::{self, BufRead, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, ParseError, prompts, quiet};
use crate::entropy::Source;
use crate::pass::{self, Strength};
use crate::settings::Settings;
use crate::terminal::strength_bar;
use crate::tui::print_help;

/// Why the CLI stopped before (or instead of) generating.
#[derive(Debug, PartialEq, Eq)]
pub enum Exit {
    /// Early exit - not an error, just done.
    Done,
    /// Failure, carrying the process status.
    Failed(i32),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    rng: Source,
    /// Draw meters instead of plain text (stdout is a terminal).
    colors: bool,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                log::warn!("failed to load settings: {e}");
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        let rng = Source::from_seed(flags.seed);
        log::debug!("random source: {}", rng.name());

        Ok(Self {
            settings,
            flags,
            rng,
            colors: quiet::stdout_is_tty(),
        })
    }

    /// Run CLI. Returns `Err(Exit::Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Exit> {
        quiet::set(self.flags.quiet);
        self.handle_info_flags()?;
        self.handle_check()?;
        self.apply_flags();
        self.handle_save();

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.generate_output(&mut out)
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            print_help();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("passgauge {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    /// Score an arbitrary password given with `--check`.
    fn handle_check(&self) -> Result<(), Exit> {
        let Some(ref arg) = self.flags.check else {
            return Ok(());
        };

        let mut password = if arg == "-" {
            let mut line = String::new();
            if let Err(e) = io::stdin().lock().read_line(&mut line) {
                prompts::error(&format!("Failed to read password: {e}"));
                return Err(Exit::Failed(1));
            }
            line.trim_end_matches(['\r', '\n']).to_string()
        } else {
            arg.clone()
        };

        let strength = pass::score(&password);
        password.zeroize();
        println!("{}", report(strength, None, self.colors));
        Err(Exit::Done)
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        if self.flags.touches_categories() {
            self.settings.categories = self.flags.categories(self.settings.categories);
        }
        if self.flags.strength {
            self.settings.show_strength = true;
        }
        if self.flags.strict {
            self.settings.strict_length = true;
        }
        self.settings.to_clipboard = self.flags.clipboard;
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved(&Settings::file_path().display().to_string()),
            Err(e) => {
                log::warn!("failed to save settings: {e}");
                prompts::warn(&format!("Failed to save settings: {}", e));
            }
        }
    }

    /// Generate passwords and write them to `out` or the clipboard.
    pub fn generate_output<W: Write>(&mut self, out: &mut W) -> Result<(), Exit> {
        let request = self.settings.request();
        let count = self.settings.number_of_passwords.max(1);

        let mut passwords = match pass::generate_batch(&request, count, &mut self.rng) {
            Ok(p) => p,
            Err(e) => {
                prompts::error(&e.to_string());
                return Err(Exit::Failed(1));
            }
        };

        let result = if self.settings.to_clipboard {
            self.copy_to_clipboard(&passwords)
        } else {
            self.write_passwords(out, &passwords)
        };

        passwords.iter_mut().for_each(Zeroize::zeroize);
        result
    }

    fn write_passwords<W: Write>(&self, out: &mut W, passwords: &[String]) -> Result<(), Exit> {
        let pool_size = self.settings.categories.pool_size();

        for password in passwords {
            let mut line = format!("{password}\n");
            if self.settings.show_strength {
                let bits = pass::entropy_bits(password.chars().count(), pool_size);
                line.push_str(&report(pass::score(password), Some(bits), self.colors));
                line.push('\n');
            }
            let written = out.write_all(line.as_bytes());
            line.zeroize();
            if let Err(e) = written {
                // Closed pipe (e.g. `| head`) is a normal way to stop.
                if e.kind() == io::ErrorKind::BrokenPipe {
                    return Ok(());
                }
                prompts::error(&format!("Failed to write output: {e}"));
                return Err(Exit::Failed(1));
            }
        }
        let _ = out.flush();
        Ok(())
    }

    fn copy_to_clipboard(&self, passwords: &[String]) -> Result<(), Exit> {
        let mut joined = passwords.join("\n");
        let copied = ClipboardContext::new().and_then(|mut ctx| ctx.set_contents(joined.clone()));
        joined.zeroize();

        match copied {
            Ok(()) => {
                prompts::clipboard_copied(passwords.len());
                Ok(())
            }
            Err(e) => {
                log::debug!("clipboard error: {e}");
                prompts::error(prompts::COPY_FAILED);
                Err(Exit::Failed(1))
            }
        }
    }
}

/// One-line strength summary. With colors it draws the meter,
/// otherwise plain `score label` text for scripts.
pub fn report(strength: Strength, bits: Option<f64>, colors: bool) -> String {
    let mut line = if colors {
        strength_bar(Some(strength), 20)
    } else {
        format!("{} {}", strength.score, strength.label)
    };
    if let Some(bits) = bits {
        line.push_str(&format!(" ({bits:.1} bits)"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(list: &[&str]) -> Context {
        let args: Vec<String> = std::iter::once("passgauge")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        let mut ctx = Context::new(&args).unwrap();
        ctx.colors = false;
        ctx.apply_flags();
        ctx
    }

    #[test]
    fn writes_one_password_per_line() {
        let mut ctx = context(&["-l", "12", "-n", "4", "--seed", "1"]);
        let mut out = Vec::new();
        ctx.generate_output(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.chars().count() == 12));
    }

    #[test]
    fn seed_makes_output_reproducible() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        context(&["--seed", "42"]).generate_output(&mut a).unwrap();
        context(&["--seed", "42"]).generate_output(&mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn no_categories_fails_with_status_one() {
        let mut ctx = context(&[
            "--no-uppercase",
            "--no-lowercase",
            "--no-numbers",
            "--no-symbols",
        ]);
        let mut out = Vec::new();
        assert_eq!(ctx.generate_output(&mut out), Err(Exit::Failed(1)));
        assert!(out.is_empty());
    }

    #[test]
    fn strict_short_length_fails() {
        let mut ctx = context(&["-l", "2", "--strict"]);
        let mut out = Vec::new();
        assert_eq!(ctx.generate_output(&mut out), Err(Exit::Failed(1)));
    }

    #[test]
    fn strength_line_follows_password() {
        let mut ctx = context(&["-l", "20", "-S", "--seed", "5"]);
        let mut out = Vec::new();
        ctx.generate_output(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        // Twenty characters with every class always scores full marks.
        assert!(lines[1].starts_with("100 Strong ("));
        assert!(lines[1].ends_with(" bits)"));
    }

    #[test]
    fn only_restricts_the_pool() {
        let mut ctx = context(&["--only", "numbers", "-l", "30", "--seed", "8"]);
        let mut out = Vec::new();
        ctx.generate_output(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.trim_end().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn plain_report_is_script_friendly() {
        assert_eq!(report(pass::score("abcde"), None, false), "10 Weak");
        assert_eq!(
            report(pass::score("abcde"), Some(23.5), false),
            "10 Weak (23.5 bits)"
        );
    }
}
