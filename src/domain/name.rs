//! ContactName value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[a-zA-Zа-яА-ЯІіЇї\s'".,-]{2,}$"#).expect("Failed to compile name pattern")
});

/// A type-safe wrapper for contact names.
///
/// This ensures that names are validated at construction time.
///
/// # Example
///
/// ```
/// use rolodex::domain::ContactName;
///
/// let name = ContactName::new("John Doe").unwrap();
/// assert_eq!(name.as_str(), "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Two or more characters
    /// - Each character is a Latin or Cyrillic letter (incl. Ukrainian
    ///   `Іі`/`Її`), whitespace, apostrophe, quotation mark, comma,
    ///   period, or hyphen
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is malformed.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !NAME_PATTERN.is_match(&name) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
