use thiserror::Error;

use super::CliFlags;
use crate::pass::{Category, CategorySet};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Unknown character type: {0} (expected uppercase, lowercase, numbers or symbols)")]
    UnknownCategory(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "-S" | "--strength" => flags.strength = true,
            "--strict" => flags.strict = true,
            "--no-uppercase" => flags.disabled.insert(Category::Uppercase),
            "--no-lowercase" => flags.disabled.insert(Category::Lowercase),
            "--no-numbers" => flags.disabled.insert(Category::Numbers),
            "--no-symbols" => flags.disabled.insert(Category::Symbols),
            "-l" | "--length" => {
                flags.length = Some(positive(value(args, &mut i, arg)?)?);
            }
            "-n" | "--number" => {
                flags.number = Some(positive(value(args, &mut i, arg)?)?);
            }
            "--seed" => {
                let raw = value(args, &mut i, arg)?;
                flags.seed = Some(
                    raw.parse()
                        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))?,
                );
            }
            "--only" => {
                let raw = value(args, &mut i, arg)?;
                flags.only =
                    Some(CategorySet::from_labels(raw).map_err(ParseError::UnknownCategory)?);
            }
            "-c" | "--check" => {
                flags.check = Some(value(args, &mut i, arg)?.to_string());
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Take the value following the flag at `i`, advancing past it.
fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, ParseError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}

fn positive(raw: &str) -> Result<usize, ParseError> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::InvalidNumber(raw.to_string())),
    }
}
