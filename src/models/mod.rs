//! Data models for contacts and call history.
//!
//! These are the entities persisted to the JSON backing files.

pub mod call_record;
pub mod contact;

pub use call_record::{CallRecord, CALL_TIME_FORMAT};
pub use contact::{Contact, ContactType, PhoneEntry};
