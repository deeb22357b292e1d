//! Domain value objects and types.
//!
//! Phone numbers are validated and cleaned once, at construction, so the
//! rest of the system only ever sees the canonical ten-digit form.

pub mod errors;
pub mod phone;

pub use errors::ValidationError;
pub use phone::{PhoneNumber, VALID_PHONE_NUMBER_LENGTH};
