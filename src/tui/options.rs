//! Interactive state: selection, slider, current password, messages.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use zeroize::Zeroize;

use super::input::{EditOutcome, LineEditor};
use crate::cli::prompts;
use crate::entropy::Source;
use crate::pass::{self, Category, GenerateError, Strength};
use crate::settings::Settings;

/// How long a transient message stays on screen.
pub const MESSAGE_TTL: Duration = Duration::from_secs(2);
const IDLE_POLL: Duration = Duration::from_millis(500);

pub enum LoopAction {
    Continue,
    /// Copy the current password; the loop owns the clipboard.
    Copy,
    Save,
    Break,
}

pub struct Message {
    pub text: String,
    pub expires: Instant,
}

pub struct App {
    pub settings: Settings,
    password: String,
    strength: Option<Strength>,
    editor: Option<LineEditor>,
    message: Option<Message>,
    rng: Source,
}

impl App {
    pub fn new(mut settings: Settings, rng: Source) -> Self {
        settings.pass_length = settings
            .pass_length
            .clamp(Settings::MIN_SLIDER_LENGTH, Settings::MAX_SLIDER_LENGTH);
        Self {
            settings,
            password: String::new(),
            strength: None,
            editor: None,
            message: None,
            rng,
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn strength(&self) -> Option<Strength> {
        self.strength
    }

    pub fn editor(&self) -> Option<&LineEditor> {
        self.editor.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.text.as_str())
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> LoopAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return LoopAction::Break;
        }

        if let Some(editor) = self.editor.as_mut() {
            match editor.handle_key(key) {
                EditOutcome::Changed => {
                    let text = editor.text().to_string();
                    self.set_password(text);
                }
                EditOutcome::Done => self.editor = None,
                EditOutcome::Moved | EditOutcome::Ignored => {}
            }
            return LoopAction::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return LoopAction::Break,
            KeyCode::Char(c @ '1'..='4') => {
                let category = Category::ALL[(c as u8 - b'1') as usize];
                self.settings.categories.toggle(category);
            }
            KeyCode::Left | KeyCode::Char('-') => self.adjust_length(-1),
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_length(1),
            KeyCode::Enter | KeyCode::Char('g') => self.generate(now),
            KeyCode::Char('c') => return LoopAction::Copy,
            KeyCode::Char('e') => self.editor = Some(LineEditor::new(&self.password)),
            KeyCode::Char('w') => return LoopAction::Save,
            _ => {}
        }
        LoopAction::Continue
    }

    fn adjust_length(&mut self, delta: isize) {
        let length = self.settings.pass_length.saturating_add_signed(delta);
        self.settings.pass_length =
            length.clamp(Settings::MIN_SLIDER_LENGTH, Settings::MAX_SLIDER_LENGTH);
    }

    /// Generate from the current selection. An empty selection clears the
    /// password and the meter.
    pub fn generate(&mut self, now: Instant) {
        match pass::generate(&self.settings.request(), &mut self.rng) {
            Ok(password) => self.set_password(password),
            Err(e) => {
                self.password.zeroize();
                self.strength = None;
                let text = match e {
                    GenerateError::EmptySelection => prompts::NO_CATEGORIES.to_string(),
                    other => other.to_string(),
                };
                self.show_message(text, now);
            }
        }
    }

    /// Replace the password and rescore it.
    fn set_password(&mut self, password: String) {
        self.password.zeroize();
        self.strength = Some(pass::score(&password));
        self.password = password;
    }

    pub fn copied(&mut self, ok: bool, now: Instant) {
        let text = if ok {
            prompts::COPIED
        } else {
            prompts::COPY_FAILED
        };
        self.show_message(text.to_string(), now);
    }

    pub fn saved(&mut self, ok: bool, now: Instant) {
        let text = if ok {
            "Settings saved."
        } else {
            "Failed to save settings."
        };
        self.show_message(text.to_string(), now);
    }

    pub fn show_message(&mut self, text: String, now: Instant) {
        self.message = Some(Message {
            text,
            expires: now + MESSAGE_TTL,
        });
    }

    /// Drop an expired message. Returns true when the screen changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.message.as_ref().is_some_and(|m| now >= m.expires) {
            self.message = None;
            true
        } else {
            false
        }
    }

    /// How long the loop may block waiting for input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.message {
            Some(ref m) => m.expires.saturating_duration_since(now).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CategorySet, Label};

    fn app() -> App {
        App::new(Settings::default(), Source::seeded(21))
    }

    fn press(app: &mut App, code: KeyCode) -> LoopAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now())
    }

    #[test]
    fn generate_fills_password_and_meter() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.password().len(), 16);
        let strength = app.strength().unwrap();
        // Sixteen chars clears two length steps, plus all four classes.
        assert_eq!(strength.score, 80);
        assert_eq!(strength.label, Label::Strong);
    }

    #[test]
    fn empty_selection_resets_output() {
        let mut app = app();
        app.generate(Instant::now());
        for c in ['1', '2', '3', '4'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(app.settings.categories.is_empty());
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.password(), "");
        assert!(app.strength().is_none());
        assert_eq!(app.message(), Some(prompts::NO_CATEGORIES));
    }

    #[test]
    fn slider_is_clamped() {
        let mut app = app();
        for _ in 0..100 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.settings.pass_length, Settings::MAX_SLIDER_LENGTH);
        for _ in 0..100 {
            press(&mut app, KeyCode::Char('-'));
        }
        assert_eq!(app.settings.pass_length, Settings::MIN_SLIDER_LENGTH);
    }

    #[test]
    fn out_of_range_saved_length_is_clamped() {
        let settings = Settings {
            pass_length: 500,
            ..Settings::default()
        };
        let app = App::new(settings, Source::seeded(1));
        assert_eq!(app.settings.pass_length, Settings::MAX_SLIDER_LENGTH);
    }

    #[test]
    fn editing_rescores_live() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        for c in "abcde".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.password(), "abcde");
        assert_eq!(app.strength().unwrap().score, 10);
        // While editing, menu keys are text.
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.password(), "abcdeq");
        press(&mut app, KeyCode::Enter);
        assert!(app.editor().is_none());
        assert!(matches!(press(&mut app, KeyCode::Char('q')), LoopAction::Break));
    }

    #[test]
    fn clearing_the_field_scores_zero() {
        let mut app = app();
        app.generate(Instant::now());
        press(&mut app, KeyCode::Char('e'));
        app.handle_key(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert_eq!(app.password(), "");
        let strength = app.strength().unwrap();
        assert_eq!(strength.score, 0);
        assert_eq!(strength.label, Label::Weak);
    }

    #[test]
    fn copy_and_save_are_delegated() {
        let mut app = app();
        assert!(matches!(press(&mut app, KeyCode::Char('c')), LoopAction::Copy));
        assert!(matches!(press(&mut app, KeyCode::Char('w')), LoopAction::Save));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(app.handle_key(ctrl_c, Instant::now()), LoopAction::Break));
    }

    #[test]
    fn messages_expire() {
        let mut app = app();
        let now = Instant::now();
        app.copied(true, now);
        assert_eq!(app.message(), Some(prompts::COPIED));
        assert!(app.poll_timeout(now) <= MESSAGE_TTL);
        assert!(!app.tick(now + Duration::from_millis(1999)));
        assert!(app.tick(now + MESSAGE_TTL));
        assert_eq!(app.message(), None);
        assert_eq!(app.poll_timeout(now), IDLE_POLL);
    }

    #[test]
    fn failed_copy_is_reported() {
        let mut app = app();
        app.copied(false, Instant::now());
        assert_eq!(app.message(), Some(prompts::COPY_FAILED));
    }

    #[test]
    fn toggles_follow_category_order() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        let mut expected = CategorySet::all();
        expected.remove(Category::Numbers);
        assert_eq!(app.settings.categories, expected);
    }
}
