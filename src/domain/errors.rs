//! Domain validation errors.

use thiserror::Error;

/// Errors raised when a contact field rejects its input.
///
/// Raised synchronously at the point of violation. Lookups that come up
/// empty (remove, find, delete, search) are normal outcomes and do not use
/// this type; the one exception is editing a phone the record never held.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name does not match the allowed pattern.
    #[error("Name is not correct")]
    InvalidName(String),

    /// The phone number is not exactly ten decimal digits.
    #[error("Number not correct")]
    InvalidPhone(String),

    /// The birthday input is not a date-time value.
    #[error("Incorrect date")]
    InvalidBirthday(String),

    /// An edit targeted a phone number the record does not hold.
    #[error("Phone not found")]
    PhoneNotFound(String),
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;
