//! Paged traversal of the address book.

use super::address_book::AddressBook;
use crate::models::Record;

/// Lazy, finite iterator over the records of an `AddressBook`.
///
/// The key order is captured when the iterator is created; each call to
/// `AddressBook::paged_iterator` starts a fresh traversal from the first key.
/// Records are yielded one at a time. `pages()` groups them for display.
#[derive(Debug, Clone)]
pub struct RecordIter<'a> {
    book: &'a AddressBook,
    keys: Vec<&'a str>,
    position: usize,
    page_size: usize,
}

impl<'a> RecordIter<'a> {
    pub(crate) fn new(book: &'a AddressBook, page_size: usize) -> Self {
        Self {
            book,
            keys: book.keys().collect(),
            position: 0,
            page_size,
        }
    }

    /// The page size requested by the caller.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Group the remaining records into pages of `page_size` records.
    ///
    /// The last page may be shorter. A page size of 0 is treated as 1.
    pub fn pages(self) -> Pages<'a> {
        let size = self.page_size.max(1);
        Pages { records: self, size }
    }
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(key) = self.keys.get(self.position) {
            self.position += 1;
            if let Some(record) = self.book.get(key) {
                return Some(record);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.keys.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIter<'_> {}

impl std::iter::FusedIterator for RecordIter<'_> {}

/// Iterator over fixed-size pages of records.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: RecordIter<'a>,
    size: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<&'a Record> = self.records.by_ref().take(self.size).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }
}
