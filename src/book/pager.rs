//! Fixed-size page iteration over an address book snapshot.

use super::AddressBook;
use crate::domain::PhoneNumber;
use crate::models::Contact;

/// One `(record name, raw phone strings)` tuple per record in a page.
pub type PageEntry = (String, Vec<String>);

/// Pull-based pager over a snapshot of an address book's entries.
///
/// The partition into pages is computed once at construction; mutations to
/// the book afterward are not reflected. Constructed without a page size,
/// the pager runs in a degraded mode that holds no pages and is immediately
/// exhausted. That mode logs a notice and is not an error.
///
/// # Example
///
/// ```
/// use rolodex::{AddressBook, Contact, PageIterator};
///
/// let mut book = AddressBook::new();
/// book.add_record(Contact::new("John Doe").unwrap());
///
/// let mut pages = PageIterator::new(&book, Some(2));
/// assert_eq!(pages.next().unwrap().len(), 1);
/// assert!(pages.next().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PageIterator {
    pages: Vec<Vec<(String, Vec<Contact>)>>,
    current: usize,
}

impl PageIterator {
    /// Snapshot `book`'s entries and partition them into consecutive chunks
    /// of `page_size` buckets; the last chunk may be shorter.
    ///
    /// `None` (or a zero size) yields the degraded no-page mode.
    pub fn new(book: &AddressBook, page_size: Option<usize>) -> Self {
        let pages = match page_size {
            Some(size) if size > 0 => {
                let items: Vec<(String, Vec<Contact>)> = book
                    .entries()
                    .map(|(name, bucket)| (name.to_string(), bucket.to_vec()))
                    .collect();
                items.chunks(size).map(<[_]>::to_vec).collect()
            }
            _ => {
                tracing::warn!("no usable page size given, pager will yield no pages");
                Vec::new()
            }
        };

        Self { pages, current: 0 }
    }

    /// Number of pages in the snapshot partition.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl Iterator for PageIterator {
    type Item = Vec<PageEntry>;

    /// The next page, flattened to one tuple per record: a bucket holding
    /// several records contributes several tuples, each carrying the
    /// record's own name field and its raw phone strings. `None` signals
    /// exhaustion; the cursor never rewinds.
    fn next(&mut self) -> Option<Self::Item> {
        let page = self.pages.get(self.current)?;
        self.current += 1;

        let mut records = Vec::new();
        for (_, bucket) in page {
            for contact in bucket {
                let phones = contact
                    .phones()
                    .iter()
                    .map(PhoneNumber::as_str)
                    .map(str::to_string)
                    .collect();
                records.push((contact.name().as_str().to_string(), phones));
            }
        }

        Some(records)
    }
}
