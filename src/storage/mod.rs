//! Whole-file persistence of the address book mapping.
//!
//! One JSON blob holds the entire name-to-bucket mapping, records and
//! fields included. Blocking I/O, no retries; failures propagate untouched.

use crate::book::Bucket;
use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while persisting or restoring a book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The blob could not be serialized or deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with StorageError.
pub type StorageResult<T> = Result<T, StorageError>;

/// Serialize the whole mapping to `path`, replacing any existing file.
///
/// The file handle is released on every exit path, including failure.
pub fn save(entries: &IndexMap<String, Bucket>, path: impl AsRef<Path>) -> StorageResult<()> {
    let path = path.as_ref();
    tracing::debug!("saving address book to {}", path.display());

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, entries)?;
    writer.flush()?;
    Ok(())
}

/// Read a full mapping back from `path`.
///
/// Every field is revalidated during deserialization, so a tampered blob
/// fails loudly. The result is returned unattached; nothing in the calling
/// process is mutated.
pub fn load(path: impl AsRef<Path>) -> StorageResult<IndexMap<String, Bucket>> {
    let path = path.as_ref();
    tracing::debug!("loading address book from {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    let entries = serde_json::from_reader(reader)?;
    Ok(entries)
}
