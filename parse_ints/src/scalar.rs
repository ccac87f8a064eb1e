use std::num::{IntErrorKind, ParseIntError};

use thiserror::Error;

/// Why a single token could not be read as a base-10 integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("empty field")]
    Empty,
    #[error("`{token}` is not a base-10 integer")]
    InvalidDigit { token: String },
    #[error("`{token}` does not fit in 64 bits")]
    Overflow { token: String },
}

impl FieldError {
    fn from_parse_error(token: &str, err: &ParseIntError) -> Self {
        match err.kind() {
            IntErrorKind::Empty => Self::Empty,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Self::Overflow {
                token: token.to_string(),
            },
            _ => Self::InvalidDigit {
                token: token.to_string(),
            },
        }
    }
}

/// The leading fields of one line, split on runs of whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFields<'a> {
    /// No fields at all, e.g. the trailing empty line of a file.
    Blank,
    /// Exactly one field.
    Short(&'a str),
    /// The first two fields. Anything after them is ignored.
    Pair(&'a str, &'a str),
}

pub fn leading_pair(line: &str) -> LineFields<'_> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next()) {
        (None, _) => LineFields::Blank,
        (Some(only), None) => LineFields::Short(only),
        (Some(left), Some(right)) => LineFields::Pair(left, right),
    }
}

/// Parses a token as a signed base-10 integer. A single leading `+` or `-`
/// is accepted, nothing else.
pub fn parse_field(token: &str) -> Result<i64, FieldError> {
    token
        .parse::<i64>()
        .map_err(|e| FieldError::from_parse_error(token, &e))
}
