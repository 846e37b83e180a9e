//! Parsing of user-supplied number lists.

use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Errors while reading numbers.
#[derive(Debug, Error)]
pub enum InputError {
    /// Nothing in the input parsed as an integer.
    #[error("no integers found in input")]
    NoNumbers,

    /// The input file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// File that failed.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

const SEPARATORS: &[char] = &[' ', ',', ';', '\t', '\n', '\r'];

/// Parses integers separated by whitespace, commas or semicolons.
///
/// Square brackets around tokens are stripped, so `[1, 2, 3]` works.
/// Tokens that are not integers are skipped with a warning; input that
/// yields no integer at all is an error.
pub fn parse_values(text: &str) -> Result<Vec<i32>, InputError> {
    let mut values = Vec::new();

    for token in text.split(SEPARATORS).filter(|t| !t.is_empty()) {
        let token = token.trim_matches(|c| c == '[' || c == ']');
        if token.is_empty() {
            continue;
        }
        match token.parse::<i32>() {
            Ok(value) => values.push(value),
            Err(_) => warn!(token, "not an integer, skipping"),
        }
    }

    if values.is_empty() {
        return Err(InputError::NoNumbers);
    }
    Ok(values)
}

/// Reads and parses a file of integers.
pub fn read_values(path: &Path) -> Result<Vec<i32>, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_values(&text)
}
