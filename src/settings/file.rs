//! Settings file persistence.
//!
//! One comma-separated line:
//! `length,categories,number,show_strength,strict_length`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;
use crate::pass::CategorySet;

const FIELDS: usize = 5;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{}\n",
        settings.pass_length,
        settings.categories.to_labels(),
        settings.number_of_passwords,
        settings.show_strength,
        settings.strict_length,
    );

    file.write_all(data.as_bytes())?;
    log::debug!("settings saved to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        log::debug!("no settings at {}, writing defaults", path.display());
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != FIELDS {
        log::warn!(
            "settings file {} is malformed ({} fields), resetting",
            path.display(),
            parts.len()
        );
        return save(settings, path);
    }

    settings.pass_length = parts[0]
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(settings.pass_length);
    settings.categories = CategorySet::from_labels(parts[1]).unwrap_or_else(|label| {
        log::warn!("unknown category {label:?} in settings, using default");
        settings.categories
    });
    settings.number_of_passwords = parts[2]
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(settings.number_of_passwords);
    settings.show_strength = parts[3].parse().unwrap_or(settings.show_strength);
    settings.strict_length = parts[4].parse().unwrap_or(settings.strict_length);

    Ok(())
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passgauge/settings")
}
