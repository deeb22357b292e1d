//! Contact model: a named person with zero or more typed phone numbers.

use crate::domain::{phone, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of phone line attached to a contact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ContactType {
    #[default]
    Home,
    Work,
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactType::Home => write!(f, "Home"),
            ContactType::Work => write!(f, "Work"),
        }
    }
}

impl FromStr for ContactType {
    type Err = String;

    /// Accepts the type name in any case, or the menu choices "1" and "2".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" | "1" => Ok(ContactType::Home),
            "work" | "2" => Ok(ContactType::Work),
            other => Err(format!(
                "Invalid choice '{}'! Please enter 1 for Home or 2 for Work.",
                other
            )),
        }
    }
}

/// One phone number on a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhoneEntry {
    /// The cleaned number
    pub number: PhoneNumber,

    /// Home or work line
    pub kind: ContactType,
}

impl PhoneEntry {
    pub fn new(number: PhoneNumber, kind: ContactType) -> Self {
        Self { number, kind }
    }
}

impl fmt::Display for PhoneEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number, self.kind)
    }
}

/// A contact in the phone book.
///
/// No two entries on one contact share the same cleaned number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Contact {
    /// Display name
    pub name: String,

    /// Phone numbers in the order they were added
    #[serde(default)]
    pub phone_numbers: Vec<PhoneEntry>,
}

impl Contact {
    /// Create a contact with no phone numbers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_numbers: Vec::new(),
        }
    }

    /// Create a contact holding a single number.
    pub fn with_number(name: impl Into<String>, number: PhoneNumber, kind: ContactType) -> Self {
        Self {
            name: name.into(),
            phone_numbers: vec![PhoneEntry::new(number, kind)],
        }
    }

    /// Add a number unless the contact already holds it.
    ///
    /// Returns `false` when the number was already present.
    pub fn add_phone_number(&mut self, number: PhoneNumber, kind: ContactType) -> bool {
        if self.has_phone_number(number.as_str()) {
            return false;
        }
        self.phone_numbers.push(PhoneEntry::new(number, kind));
        true
    }

    /// True if any entry matches the cleaned form of `raw`.
    pub fn has_phone_number(&self, raw: &str) -> bool {
        let cleaned = phone::clean(raw);
        self.phone_numbers
            .iter()
            .any(|entry| entry.number.as_str() == cleaned)
    }

    /// Case-insensitive exact comparison against the contact's name.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        for entry in &self.phone_numbers {
            writeln!(f, "  - {}", entry)?;
        }
        Ok(())
    }
}
