//! Rolodex - a personal address book library.
//!
//! Validates and stores contact records (name, ten-digit phone numbers,
//! optional birthday) and provides name lookup, partial phone search,
//! paginated iteration, and whole-file persistence.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phone numbers, and birthdays
//! - **models**: the contact record and its mutation operations
//! - **book**: the address book store and its page iterator
//! - **storage**: whole-file JSON persistence

pub mod book;
pub mod domain;
pub mod models;
pub mod storage;

pub use book::pager::{PageEntry, PageIterator};
pub use book::AddressBook;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError, ValidationResult};
pub use models::Contact;
pub use storage::{StorageError, StorageResult};
