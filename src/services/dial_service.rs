//! Dial service.
//!
//! Validates a number, resolves the contact it belongs to and simulates
//! the call. Nothing is recorded here: the outcome carries a
//! [`CallCompleted`] event that the caller hands to the call history.

use crate::domain::PhoneNumber;
use crate::error::PhoneResult;
use chrono::{DateTime, Local};
use std::fmt;
use tracing::{debug, info, warn};

/// Resolves the contact name for a cleaned phone number.
pub trait ContactLookup {
    /// Name of the first contact holding `number`, if any.
    fn contact_name_for(&self, number: &str) -> Option<String>;
}

/// Source of call timestamps.
pub type Clock = fn() -> DateTime<Local>;

/// Stages a call passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialState {
    Idle,
    Validating,
    Dialing,
    Connected,
    Ended,
}

impl fmt::Display for DialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DialState::Idle => "idle",
            DialState::Validating => "validating",
            DialState::Dialing => "dialing",
            DialState::Connected => "connected",
            DialState::Ended => "ended",
        };
        write!(f, "{}", label)
    }
}

/// Emitted once a simulated call has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallCompleted {
    /// Cleaned number that was dialed
    pub number: PhoneNumber,

    /// Contact name supplied by the caller or found by lookup
    pub contact_name: Option<String>,

    /// When the call was placed
    pub called_at: DateTime<Local>,
}

/// Everything a successful dial produced.
#[derive(Debug, Clone)]
pub struct DialOutcome {
    /// States visited after leaving `Idle`, in order
    pub states: Vec<DialState>,

    /// True when the contact name came from the lookup rather than the caller
    pub announced_contact: bool,

    /// Notification for the call history
    pub event: CallCompleted,
}

impl DialOutcome {
    /// Resolved contact name, if any.
    pub fn contact_name(&self) -> Option<&str> {
        self.event.contact_name.as_deref()
    }

    /// User-visible lines describing the call.
    pub fn status_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if self.announced_contact {
            if let Some(name) = self.contact_name() {
                lines.push(format!("Calling contact: {}", name));
            }
        }

        for state in &self.states {
            match state {
                DialState::Dialing => lines.push(format!("Dialing {}...", self.event.number)),
                DialState::Connected => lines.push("Call connected!".to_string()),
                DialState::Ended => lines.push("Call ended.".to_string()),
                DialState::Idle | DialState::Validating => {}
            }
        }

        lines
    }
}

/// Simulated dialer.
pub struct DialService {
    clock: Clock,
}

impl DialService {
    /// Create a dialer stamping calls with the local wall clock.
    pub fn new() -> Self {
        Self { clock: Local::now }
    }

    /// Create a dialer with a custom clock (for deterministic timestamps).
    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }

    /// Dial `raw_number`.
    ///
    /// When `known_contact_name` is `None` the contact is looked up by the
    /// cleaned number.
    ///
    /// # Errors
    ///
    /// Returns `PhoneError::InvalidPhoneNumber` before anything is dialed
    /// if the number is malformed.
    pub fn dial_number(
        &self,
        raw_number: &str,
        known_contact_name: Option<&str>,
        lookup: &dyn ContactLookup,
    ) -> PhoneResult<DialOutcome> {
        let mut states = vec![DialState::Validating];

        let number = PhoneNumber::new(raw_number).map_err(|e| {
            warn!("Rejected dial of {:?}: {}", raw_number, e);
            e
        })?;

        let (contact_name, announced_contact) = match known_contact_name {
            Some(name) => (Some(name.to_string()), false),
            None => {
                let found = lookup.contact_name_for(number.as_str());
                let announced = found.is_some();
                (found, announced)
            }
        };
        debug!(
            "Resolved {} to contact {:?}",
            number,
            contact_name.as_deref()
        );

        states.extend([DialState::Dialing, DialState::Connected, DialState::Ended]);

        let event = CallCompleted {
            number,
            contact_name,
            called_at: (self.clock)(),
        };
        info!("Call to {} completed", event.number);

        Ok(DialOutcome {
            states,
            announced_contact,
            event,
        })
    }
}

impl Default for DialService {
    fn default() -> Self {
        Self::new()
    }
}
