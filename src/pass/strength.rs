//! Password strength scoring.

use std::fmt;

use super::charset::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Weak,
    Medium,
    Strong,
}

impl Label {
    fn from_score(score: u8) -> Self {
        match score {
            0..=39 => Label::Weak,
            40..=69 => Label::Medium,
            _ => Label::Strong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Weak => "Weak",
            Label::Medium => "Medium",
            Label::Strong => "Strong",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    /// 0 to 100.
    pub score: u8,
    pub label: Label,
}

const LENGTH_STEPS: [usize; 3] = [8, 12, 16];
const LENGTH_POINTS: u8 = 20;
const CLASS_POINTS: u8 = 10;

/// Score any string: up to 60 points for length, 10 per character class.
pub fn score(password: &str) -> Strength {
    let length = password.chars().count();

    let mut score = LENGTH_STEPS
        .iter()
        .filter(|&&step| length > step)
        .count() as u8
        * LENGTH_POINTS;

    for category in Category::ALL {
        if password.chars().any(|c| category.contains(c)) {
            score += CLASS_POINTS;
        }
    }

    Strength {
        score,
        label: Label::from_score(score),
    }
}

/// Password entropy in bits for a uniformly drawn password.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}
