//! Phone number utilities and the PhoneNumber value object.
//!
//! A number is accepted when, after stripping spaces, dashes and
//! parentheses, it is exactly ten ASCII digits.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits in a valid phone number.
pub const VALID_PHONE_NUMBER_LENGTH: usize = 10;

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ ()\-]").expect("separator pattern is valid"));

/// Strip spaces, dashes and parentheses from `raw`.
///
/// Never fails; anything else is left in place for [`validate`] to reject.
pub fn clean(raw: &str) -> String {
    SEPARATORS.replace_all(raw, "").into_owned()
}

/// True if the cleaned form of `raw` is exactly ten ASCII digits.
pub fn is_valid(raw: &str) -> bool {
    let cleaned = clean(raw);
    cleaned.len() == VALID_PHONE_NUMBER_LENGTH && cleaned.chars().all(|c| c.is_ascii_digit())
}

/// Validate `raw`, reporting why it was rejected.
///
/// # Errors
///
/// - `ValidationError::Empty` for empty or whitespace-only input
/// - `ValidationError::WrongLength` if the cleaned form is not ten characters
/// - `ValidationError::NonDigit` if the cleaned form contains non-digits
pub fn validate(raw: &str) -> Result<(), ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    let cleaned = clean(raw);
    let length = cleaned.chars().count();
    if length != VALID_PHONE_NUMBER_LENGTH {
        return Err(ValidationError::wrong_length(length));
    }

    if !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NonDigit);
    }

    Ok(())
}

/// Render a number whose cleaned form is ten characters as `(XXX) XXX-XXXX`.
///
/// Any other input is returned unchanged.
pub fn format(raw: &str) -> String {
    let cleaned: Vec<char> = clean(raw).chars().collect();
    if cleaned.len() != VALID_PHONE_NUMBER_LENGTH {
        return raw.to_string();
    }

    let part = |range: std::ops::Range<usize>| cleaned[range].iter().collect::<String>();
    format!("({}) {}-{}", part(0..3), part(3..6), part(6..10))
}

/// A validated, cleaned ten-digit phone number.
///
/// # Example
///
/// ```
/// use sphone::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(555) 123-4567").unwrap();
/// assert_eq!(phone.as_str(), "5551234567");
/// assert_eq!(phone.formatted(), "(555) 123-4567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate `raw` and store its cleaned form.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] produced by [`validate`].
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        validate(raw)?;
        Ok(Self(clean(raw)))
    }

    /// Get the cleaned digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The number as `(XXX) XXX-XXXX`.
    pub fn formatted(&self) -> String {
        format(&self.0)
    }

    /// True if `raw` cleans to this number.
    pub fn matches(&self, raw: &str) -> bool {
        clean(raw) == self.0
    }
}

// Serde support - serialize as the cleaned string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
