//! Contact record: one person's name, phone numbers, and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact entry.
///
/// Owns one validated name, phone numbers in insertion order (duplicate
/// values are permitted until explicitly removed), and a birthday that may
/// be empty. All field mutations revalidate their input; validation
/// failures propagate to the caller and leave the record untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    name: ContactName,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Birthday,
}

impl Contact {
    /// Create a contact with no phones and an absent birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is malformed.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: Birthday::none(),
        })
    }

    /// Create a contact with a birthday already set.
    pub fn with_birthday(
        name: impl Into<String>,
        birthday: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        let mut contact = Self::new(name)?;
        contact.birthday = Birthday::new(birthday);
        Ok(contact)
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday field (possibly empty).
    pub fn birthday(&self) -> &Birthday {
        &self.birthday
    }

    /// Signed whole days from now until the stored birthday.
    ///
    /// Raw date subtraction with no year rollover: a birthday value in the
    /// past yields a negative count. `None` when the birthday is absent.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.birthday
            .date()
            .map(|date| (date - Local::now().naive_local()).num_days())
    }

    /// Validate `phone` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value is not ten digits.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove every phone whose value equals `phone`. No-op when none match.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace the first phone equal to `old` with a revalidated `new`.
    ///
    /// Only the first match is edited when duplicates exist.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PhoneNotFound` if no phone equals `old`,
    /// or `ValidationError::InvalidPhone` if `new` is malformed.
    pub fn edit_phone(
        &mut self,
        old: &str,
        new: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| ValidationError::PhoneNotFound(old.to_string()))?;
        *slot = PhoneNumber::new(new)?;
        Ok(())
    }

    /// The first phone whose value equals `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_contact_new() {
        let contact = Contact::new("John Doe").unwrap();
        assert_eq!(contact.name().as_str(), "John Doe");
        assert!(contact.phones().is_empty());
        assert!(!contact.birthday().is_some());
    }

    #[test]
    fn test_contact_rejects_bad_name() {
        assert!(Contact::new("J").is_err());
        assert!(Contact::new("John7").is_err());
    }

    #[test]
    fn test_add_and_find_phone() {
        let mut contact = Contact::new("John Doe").unwrap();
        contact.add_phone("5551234567").unwrap();
        contact.add_phone("1112223344").unwrap();

        assert_eq!(contact.phones().len(), 2);
        assert_eq!(
            contact.find_phone("1112223344").map(PhoneNumber::as_str),
            Some("1112223344")
        );
        assert!(contact.find_phone("9999999999").is_none());
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut contact = Contact::new("John Doe").unwrap();
        let err = contact.add_phone("555").unwrap_err();
        assert_eq!(err.to_string(), "Number not correct");
        assert!(contact.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_all_duplicates() {
        let mut contact = Contact::new("John Doe").unwrap();
        contact.add_phone("5551234567").unwrap();
        contact.add_phone("1112223344").unwrap();
        contact.add_phone("5551234567").unwrap();

        contact.remove_phone("5551234567");
        assert_eq!(contact.phones().len(), 1);
        assert_eq!(contact.phones()[0].as_str(), "1112223344");

        // removing again is a no-op
        contact.remove_phone("5551234567");
        assert_eq!(contact.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone() {
        let mut contact = Contact::new("John Doe").unwrap();
        contact.add_phone("1234567890").unwrap();

        contact.edit_phone("1234567890", "0987654321").unwrap();
        assert!(contact.find_phone("0987654321").is_some());
        assert!(contact.find_phone("1234567890").is_none());
    }

    #[test]
    fn test_edit_phone_not_found() {
        let mut contact = Contact::new("John Doe").unwrap();
        contact.add_phone("1234567890").unwrap();

        let err = contact.edit_phone("0000000000", "1111111111").unwrap_err();
        assert_eq!(err.to_string(), "Phone not found");
    }

    #[test]
    fn test_edit_phone_not_found_wins_over_bad_new_value() {
        let mut contact = Contact::new("John Doe").unwrap();
        let err = contact.edit_phone("0000000000", "bad").unwrap_err();
        assert_eq!(err.to_string(), "Phone not found");
    }

    #[test]
    fn test_edit_phone_first_match_only() {
        let mut contact = Contact::new("John Doe").unwrap();
        contact.add_phone("1234567890").unwrap();
        contact.add_phone("1234567890").unwrap();

        contact.edit_phone("1234567890", "0987654321").unwrap();
        assert_eq!(contact.phones()[0].as_str(), "0987654321");
        assert_eq!(contact.phones()[1].as_str(), "1234567890");
    }

    #[test]
    fn test_days_to_birthday_future() {
        let soon = Local::now().naive_local() + Duration::days(10);
        let contact = Contact::with_birthday("John Doe", soon).unwrap();
        let days = contact.days_to_birthday().unwrap();
        assert!((9..=10).contains(&days));
    }

    #[test]
    fn test_days_to_birthday_past_is_negative() {
        let past = Local::now().naive_local() - Duration::days(30);
        let contact = Contact::with_birthday("John Doe", past).unwrap();
        let days = contact.days_to_birthday().unwrap();
        assert!((-30..=-29).contains(&days));
    }

    #[test]
    fn test_days_to_birthday_absent() {
        let contact = Contact::new("John Doe").unwrap();
        assert_eq!(contact.days_to_birthday(), None);
    }

    #[test]
    fn test_contact_display() {
        let mut contact = Contact::new("John Doe").unwrap();
        contact.add_phone("5551234567").unwrap();
        contact.add_phone("1112223344").unwrap();
        assert_eq!(
            contact.to_string(),
            "Contact name: John Doe, phones: 5551234567; 1112223344"
        );
    }

    #[test]
    fn test_contact_serde_round_trip() {
        let mut contact = Contact::with_birthday(
            "John Doe",
            Birthday::parse("1990-04-15").unwrap().date().unwrap(),
        )
        .unwrap();
        contact.add_phone("5551234567").unwrap();

        let json = serde_json::to_string(&contact).unwrap();
        let back: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contact);
    }

    #[test]
    fn test_contact_deserialization_revalidates() {
        let json = r#"{"name":"John Doe","phones":["123"],"birthday":null}"#;
        let result: Result<Contact, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
