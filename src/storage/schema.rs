//! On-disk schema of the contacts file.
//!
//! ```json
//! {
//!   "version": 1,
//!   "records": [
//!     { "key": "Bob", "name": "Bobby", "phones": ["123"], "birthday": "1990-05-01" }
//!   ]
//! }
//! ```
//!
//! The key is stored next to the name because a renamed record keeps its
//! original key. `birthday` is omitted when absent.

use crate::book::AddressBook;
use crate::domain::{Birthday, Name, Phone};
use crate::error::{ContactBookError, ContactBookResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};

/// Current schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

/// Borrowed view of a book, ready to serialize.
#[derive(Debug, Serialize)]
pub(crate) struct StoredBookRef<'a> {
    version: u32,
    records: Vec<StoredRecordRef<'a>>,
}

#[derive(Debug, Serialize)]
struct StoredRecordRef<'a> {
    key: &'a str,
    name: &'a Name,
    phones: &'a [Phone],
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<&'a Birthday>,
}

impl<'a> From<&'a AddressBook> for StoredBookRef<'a> {
    fn from(book: &'a AddressBook) -> Self {
        let records = book
            .iter()
            .map(|(key, record)| StoredRecordRef {
                key,
                name: record.name(),
                phones: record.phones(),
                birthday: record.birthday(),
            })
            .collect();

        Self {
            version: SCHEMA_VERSION,
            records,
        }
    }
}

/// A document as read from disk, before the records are decoded.
#[derive(Debug, Deserialize)]
pub(crate) struct StoredBook {
    version: u32,
    #[serde(default)]
    records: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct StoredRecord {
    key: String,
    name: Name,
    #[serde(default)]
    phones: Vec<serde_json::Value>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl StoredBook {
    /// Decode every record into a fresh book.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedVersion` for documents from another schema version,
    /// `Json` for malformed records and `InvalidValue`/`InvalidType` for phones
    /// that fail validation.
    pub(crate) fn into_book(self) -> ContactBookResult<AddressBook> {
        if self.version != SCHEMA_VERSION {
            return Err(ContactBookError::UnsupportedVersion(self.version));
        }

        let mut book = AddressBook::new();
        for value in self.records {
            let stored: StoredRecord = serde_json::from_value(value)?;
            let mut record = Record::with_name(stored.name.into_inner());
            record.replace_phones(stored.phones)?;
            if let Some(birthday) = stored.birthday {
                record.set_birthday(birthday);
            }
            book.insert(stored.key, record);
        }
        Ok(book)
    }
}
