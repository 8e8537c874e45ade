use crate::{
    constants::{MATRIX_ENTRY_COUNT, MATRIX_PREFIX},
    primitives::matrix::RotationTranslationMatrix,
};
use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 12 numbers, found {found}")]
    TokenCount { found: usize },
    #[error("token {index} is not a number: {token:?}")]
    InvalidNumber { index: usize, token: String },
    #[error("token {index} is not finite: {token:?}")]
    NonFiniteNumber { index: usize, token: String },
}

/// Parses twelve whitespace and/or comma separated numbers into a matrix,
/// row by row. A leading `9:` marker is ignored.
pub fn parse_matrix(source: &str) -> Result<RotationTranslationMatrix, ParseError> {
    let source = strip_prefix_marker(source.trim());
    let tokens = split_tokens(source);

    // Whitespace-only input splits into a single empty token
    let found = if source.is_empty() { 0 } else { tokens.len() };
    if found != MATRIX_ENTRY_COUNT {
        return Err(ParseError::TokenCount { found });
    }

    let entries: Vec<f64> = tokens
        .into_iter()
        .enumerate()
        .map(|(index, token)| parse_entry(index, token))
        .try_collect()?;

    let entries: [f64; MATRIX_ENTRY_COUNT] = entries
        .try_into()
        .map_err(|entries: Vec<f64>| ParseError::TokenCount {
            found: entries.len(),
        })?;

    Ok(RotationTranslationMatrix::from_row_major(entries))
}

fn strip_prefix_marker(source: &str) -> &str {
    source
        .strip_prefix(MATRIX_PREFIX)
        .map_or(source, |rest| rest.trim_start())
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

// A separator run at either end produces an empty token there, so `,1 2 ...`
// does not silently pass as twelve numbers.
fn split_tokens(source: &str) -> Vec<&str> {
    source
        .split(is_separator)
        .enumerate()
        .filter(|&(i, token)| i == 0 || !token.is_empty())
        .map(|(_, token)| token)
        .chain(source.ends_with(is_separator).then_some(""))
        .collect()
}

fn parse_entry(index: usize, token: &str) -> Result<f64, ParseError> {
    let Ok(value) = token.parse::<f64>() else {
        return Err(ParseError::InvalidNumber {
            index,
            token: token.to_string(),
        });
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::NonFiniteNumber {
            index,
            token: token.to_string(),
        })
    }
}

impl std::str::FromStr for RotationTranslationMatrix {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_matrix(s)
    }
}
