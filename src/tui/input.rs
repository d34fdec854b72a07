use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use zeroize::Zeroize;

use crate::terminal::RESET;

/// What a key press did to the field.
#[derive(Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Changed,
    Moved,
    Done,
    Ignored,
}

/// Single-line editor for the password field.
/// Cursor is a char index: 0 = before the first char.
pub struct LineEditor {
    input: String,
    cursor: usize,
}

impl LineEditor {
    pub fn new(initial_value: &str) -> Self {
        Self {
            input: initial_value.to_string(),
            cursor: initial_value.chars().count(),
        }
    }

    pub fn text(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter | KeyCode::Esc => EditOutcome::Done,
            KeyCode::Char('u') if ctrl => {
                self.input.zeroize();
                self.cursor = 0;
                EditOutcome::Changed
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.input.remove(at);
                    EditOutcome::Changed
                } else {
                    EditOutcome::Ignored
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.char_count() {
                    let at = self.byte_index(self.cursor);
                    self.input.remove(at);
                    EditOutcome::Changed
                } else {
                    EditOutcome::Ignored
                }
            }
            KeyCode::Left if self.cursor > 0 => {
                self.cursor -= 1;
                EditOutcome::Moved
            }
            KeyCode::Right if self.cursor < self.char_count() => {
                self.cursor += 1;
                EditOutcome::Moved
            }
            KeyCode::Home => {
                self.cursor = 0;
                EditOutcome::Moved
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                EditOutcome::Moved
            }
            KeyCode::Char(c) if !ctrl => {
                let at = self.byte_index(self.cursor);
                self.input.insert(at, c);
                self.cursor += 1;
                EditOutcome::Changed
            }
            _ => EditOutcome::Ignored,
        }
    }

    /// The text with the cursor cell drawn in reverse video.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.input.len() + 16);
        for (i, c) in self.input.chars().enumerate() {
            if i == self.cursor {
                out.push_str(&format!("\x1b[7m{c}{RESET}"));
            } else {
                out.push(c);
            }
        }
        if self.cursor >= self.char_count() {
            out.push_str(&format!("\x1b[7m {RESET}"));
        }
        out
    }
}

impl Drop for LineEditor {
    fn drop(&mut self) {
        self.input.zeroize();
    }
}
