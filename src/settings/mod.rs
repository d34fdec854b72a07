//! Password generation settings.

mod file;

use std::path::{Path, PathBuf};

use crate::pass::{CategorySet, Request};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub categories: CategorySet,
    pub number_of_passwords: usize,
    pub show_strength: bool,
    pub strict_length: bool,
    pub to_clipboard: bool,
}

impl Settings {
    pub const MIN_SLIDER_LENGTH: usize = 4;
    pub const MAX_SLIDER_LENGTH: usize = 64;

    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&file::default_path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(&file::default_path())
    }

    pub fn file_path() -> PathBuf {
        file::default_path()
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(self, path)
    }

    /// The generation request these settings describe.
    pub fn request(&self) -> Request {
        let request = Request::new(self.categories, self.pass_length);
        if self.strict_length {
            request.strict()
        } else {
            request
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            categories: CategorySet::all(),
            number_of_passwords: 1,
            show_strength: false,
            strict_length: false,
            to_clipboard: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ShortLength;

    #[test]
    fn request_reflects_policy() {
        let mut settings = Settings::default();
        assert_eq!(settings.request().short_length, ShortLength::Truncate);
        settings.strict_length = true;
        let request = settings.request();
        assert_eq!(request.short_length, ShortLength::Reject);
        assert_eq!(request.length, 16);
        assert_eq!(request.categories, CategorySet::all());
    }
}
