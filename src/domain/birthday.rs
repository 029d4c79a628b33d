//! Birthday value object.

use super::errors::ValidationError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact's birthday, possibly absent.
///
/// An absent birthday is an empty-valued field rather than a missing one:
/// every contact owns a `Birthday`, it just may hold nothing. Construction
/// from an already-parsed date cannot fail; parsing text can, with
/// "Incorrect date".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(Option<NaiveDateTime>);

impl Birthday {
    /// The empty marker: a birthday that holds no date.
    pub fn none() -> Self {
        Self(None)
    }

    /// Wrap an already-parsed date-time.
    pub fn new(date: NaiveDateTime) -> Self {
        Self(Some(date))
    }

    /// Parse a birthday from text, accepting `YYYY-MM-DD HH:MM:SS` or a
    /// bare `YYYY-MM-DD` (taken as midnight).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the input is not a
    /// date-time value.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if let Ok(dt) = NaiveDateTime::parse_from_str(&value, "%Y-%m-%d %H:%M:%S") {
            return Ok(Self(Some(dt)));
        }
        if let Ok(date) = NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
            if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                return Ok(Self(Some(dt)));
            }
        }

        Err(ValidationError::InvalidBirthday(value))
    }

    /// Whether a date is present.
    pub fn is_some(&self) -> bool {
        self.0.is_some()
    }

    /// The stored date, if any.
    pub fn date(&self) -> Option<NaiveDateTime> {
        self.0
    }
}

impl From<NaiveDateTime> for Birthday {
    fn from(date: NaiveDateTime) -> Self {
        Self::new(date)
    }
}

// Renders the date's string form, or the empty marker's.
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date),
            None => write!(f, "None"),
        }
    }
}
