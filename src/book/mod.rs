//! The address book store.
//!
//! Maps a contact's name to the bucket of records sharing that name, in
//! insertion order. Single-threaded; callers serialize access externally.

pub mod pager;

use crate::models::Contact;
use crate::storage::{self, StorageResult};
use indexmap::IndexMap;
use std::fmt;
use std::path::Path;

/// The records sharing one name key.
pub type Bucket = Vec<Contact>;

/// An insertion-ordered store of contact records keyed by name.
///
/// Re-adding a contact under an existing name appends to that name's bucket
/// rather than overwriting. The key is the record's name value at insertion
/// time; it is not re-checked afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    entries: IndexMap<String, Bucket>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_entries(entries: IndexMap<String, Bucket>) -> Self {
        Self { entries }
    }

    /// Append `contact` to its name's bucket, creating the bucket if absent.
    ///
    /// Same-named records accumulate, most-recently-added last.
    pub fn add_record(&mut self, contact: Contact) {
        let key = contact.name().as_str().to_string();
        self.entries.entry(key).or_default().push(contact);
    }

    /// The first record in `name`'s bucket, if any.
    ///
    /// Later same-named duplicates are not reachable through this lookup;
    /// they show up in search and pagination.
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.entries.get(name).and_then(|bucket| bucket.first())
    }

    /// Drop the whole bucket for `name`, all records included. No-op when
    /// absent; the order of the remaining entries is preserved.
    pub fn delete(&mut self, name: &str) {
        self.entries.shift_remove(name);
    }

    /// Substring search over every phone of every record.
    ///
    /// Pushes the record's rendered text once per matching phone, so a
    /// record with several matching phones appears several times.
    pub fn find_contact(&self, fragment: &str) -> Vec<String> {
        let mut result = Vec::new();
        for bucket in self.entries.values() {
            for contact in bucket {
                for phone in contact.phones() {
                    if phone.as_str().contains(fragment) {
                        result.push(contact.to_string());
                    }
                }
            }
        }
        result
    }

    /// Number of name buckets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the book holds no buckets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, bucket)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[Contact])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Persist the whole mapping to `path`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on file I/O or serialization failure.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        storage::save(&self.entries, path)
    }

    /// Restore a book from `path`.
    ///
    /// The result is returned unattached: no existing instance is mutated,
    /// and the caller decides whether to adopt it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on file I/O or deserialization failure,
    /// including field revalidation failures inside the blob.
    pub fn load_from_file(path: impl AsRef<Path>) -> StorageResult<AddressBook> {
        Ok(Self::from_entries(storage::load(path)?))
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, bucket) in &self.entries {
            if !first {
                writeln!(f)?;
            }
            first = false;
            let rendered = bucket
                .iter()
                .map(Contact::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            write!(f, "Name: {}, other info: [{}]", name, rendered)?;
        }
        Ok(())
    }
}
