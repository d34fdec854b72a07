//! Password generation and strength scoring.

pub mod charset;
mod generate;
mod strength;

pub use charset::{Category, CategorySet};
pub use generate::{GenerateError, Request, ShortLength, generate, generate_batch};
pub use strength::{Label, Strength, entropy_bits, score};
