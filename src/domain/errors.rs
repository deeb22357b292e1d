//! Domain validation errors.

use std::fmt;

use super::phone::VALID_PHONE_NUMBER_LENGTH;

/// Errors that can occur while validating a phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input was empty or whitespace only.
    Empty,

    /// The cleaned number does not have the expected number of characters.
    WrongLength { expected: usize, actual: usize },

    /// The cleaned number contains something other than ASCII digits.
    NonDigit,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Phone number cannot be empty!"),
            Self::WrongLength { expected, .. } => write!(
                f,
                "Invalid phone number! Please enter exactly {} digits.",
                expected
            ),
            Self::NonDigit => write!(f, "Phone number must contain only digits!"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub(crate) fn wrong_length(actual: usize) -> Self {
        Self::WrongLength {
            expected: VALID_PHONE_NUMBER_LENGTH,
            actual,
        }
    }
}
