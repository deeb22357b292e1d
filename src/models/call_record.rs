//! Call record model: one completed call in the history.

use crate::domain::PhoneNumber;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp layout used when listing the call history.
pub const CALL_TIME_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// A completed call. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallRecord {
    /// The cleaned number that was dialed
    pub number: PhoneNumber,

    /// Contact the number belonged to at dial time, if any
    #[serde(default)]
    pub contact_name: Option<String>,

    /// When the call was placed
    pub called_at: DateTime<Local>,
}

impl CallRecord {
    pub fn new(
        number: PhoneNumber,
        contact_name: Option<String>,
        called_at: DateTime<Local>,
    ) -> Self {
        Self {
            number,
            contact_name,
            called_at,
        }
    }

    /// True when the call was attributed to a contact.
    pub fn has_contact(&self) -> bool {
        self.contact_name
            .as_deref()
            .map(|name| !name.is_empty())
            .unwrap_or(false)
    }

    /// Name and number columns as shown in the history list.
    pub fn display_text(&self) -> String {
        let formatted = self.number.formatted();
        match self.contact_name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => format!("{:<20} {:<15}", name, formatted),
            None => format!("{:<15}", formatted),
        }
    }

    /// Call time as `MM/DD/YYYY hh:mm AM/PM`.
    pub fn formatted_time(&self) -> String {
        self.called_at.format(CALL_TIME_FORMAT).to_string()
    }
}
