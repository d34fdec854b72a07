//! Password generation.

use rand::Rng;
use thiserror::Error;
use zeroize::Zeroize;

use super::charset::{Category, CategorySet};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Please select at least one character type.")]
    EmptySelection,
    #[error("Length {length} is shorter than the {categories} selected character types.")]
    LengthBelowCategories { length: usize, categories: usize },
}

/// What to do when the length cannot hold one character per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShortLength {
    /// Keep the first `length` seed characters in category order.
    #[default]
    Truncate,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub categories: CategorySet,
    pub length: usize,
    pub short_length: ShortLength,
}

impl Request {
    pub fn new(categories: CategorySet, length: usize) -> Self {
        Self {
            categories,
            length,
            short_length: ShortLength::default(),
        }
    }

    pub fn strict(mut self) -> Self {
        self.short_length = ShortLength::Reject;
        self
    }
}

/// Generate a single password.
///
/// One seed character is drawn from each enabled category, the rest is
/// padded from the pooled alphabet, and the result is shuffled.
pub fn generate<R: Rng + ?Sized>(request: &Request, rng: &mut R) -> Result<String, GenerateError> {
    let categories = request.categories;
    if categories.is_empty() {
        return Err(GenerateError::EmptySelection);
    }

    if request.length < categories.len() {
        match request.short_length {
            ShortLength::Reject => {
                return Err(GenerateError::LengthBelowCategories {
                    length: request.length,
                    categories: categories.len(),
                });
            }
            ShortLength::Truncate => log::warn!(
                "length {} < {} categories, dropping seeds for the trailing categories",
                request.length,
                categories.len()
            ),
        }
    }

    log::debug!(
        "generating password: length={} categories={}",
        request.length,
        categories.to_labels()
    );

    let pool = categories.pool();
    let mut buf = Vec::with_capacity(request.length);
    fill(&mut buf, categories.iter(), &pool, request.length, rng);

    // Alphabets are ASCII, so each byte is one char.
    debug_assert!(buf.is_ascii());
    let password = buf.iter().map(|&b| b as char).collect();
    buf.zeroize();
    Ok(password)
}

/// Generate `count` passwords from the same request.
pub fn generate_batch<R: Rng + ?Sized>(
    request: &Request,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, GenerateError> {
    (0..count).map(|_| generate(request, rng)).collect()
}

fn fill<R: Rng + ?Sized>(
    buf: &mut Vec<u8>,
    categories: impl Iterator<Item = Category>,
    pool: &[u8],
    length: usize,
    rng: &mut R,
) {
    buf.clear();
    buf.extend(
        categories
            .take(length)
            .map(|category| random_byte(category.alphabet(), rng)),
    );
    while buf.len() < length {
        buf.push(random_byte(pool, rng));
    }
    shuffle(buf, rng);
}

#[inline]
fn random_byte<R: Rng + ?Sized>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.gen_range(0..chars.len())]
}

/// Fisher-Yates: every permutation equally likely.
#[inline]
fn shuffle<R: Rng + ?Sized>(chars: &mut [u8], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.gen_range(0..=i);
        chars.swap(i, j);
    }
}
