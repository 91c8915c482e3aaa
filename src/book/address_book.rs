//! The address book: an insertion-ordered collection of records keyed by name.

use super::pager::RecordIter;
use crate::domain::Birthday;
use crate::error::{ContactBookError, ContactBookResult};
use crate::models::Record;
use crate::storage::{JsonFileStore, RecordStore};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::Path;

/// All contacts, keyed by the name they were added under.
///
/// Iteration follows insertion order. Overwriting an existing key keeps the
/// key's original position.
///
/// Renaming a record through `edit_record` changes the record's name but not
/// its key: the old key keeps pointing at the renamed record, and the new name
/// is only reachable through `find_by_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    order: Vec<String>,
    records: HashMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// The record stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.records.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Record> {
        self.records.get_mut(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Key/record pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.order
            .iter()
            .filter_map(|key| self.records.get(key).map(|record| (key.as_str(), record)))
    }

    /// Store `record` under `key`, returning the record it replaced.
    pub fn insert(&mut self, key: impl Into<String>, record: Record) -> Option<Record> {
        let key = key.into();
        let previous = self.records.insert(key.clone(), record);
        if previous.is_none() {
            self.order.push(key);
        }
        previous
    }

    /// Build a record and store it under `name`, replacing any record with that key.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if a phone or the birthday is rejected. Nothing is
    /// stored in that case.
    pub fn add_record(
        &mut self,
        name: impl Into<String>,
        phones: &[&str],
        birthday: Option<NaiveDate>,
    ) -> ContactBookResult<()> {
        let name = name.into();
        let mut record = Record::with_name(name.clone());
        record.replace_phones(phones.iter().copied())?;
        if let Some(date) = birthday {
            record.set_birthday(Birthday::new(date)?);
        }
        self.insert(name, record);
        Ok(())
    }

    /// Remove the record stored under `name` and return it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there is no such key.
    pub fn delete_record(&mut self, name: &str) -> ContactBookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| ContactBookError::NotFound(name.to_string()))?;
        self.order.retain(|key| key != name);
        Ok(record)
    }

    /// Rename the record stored under `name` and/or replace all of its phones.
    ///
    /// An empty `new_name` or an empty `new_phones` slice leaves that part
    /// untouched. The key is never changed.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there is no such key and `InvalidValue` if a new
    /// phone is rejected. The record is unchanged on error.
    pub fn edit_record(
        &mut self,
        name: &str,
        new_name: Option<&str>,
        new_phones: Option<&[&str]>,
    ) -> ContactBookResult<()> {
        let record = self
            .records
            .get_mut(name)
            .ok_or_else(|| ContactBookError::NotFound(name.to_string()))?;

        if let Some(phones) = new_phones.filter(|phones| !phones.is_empty()) {
            record.replace_phones(phones.iter().copied())?;
        }
        if let Some(new_name) = new_name.filter(|new_name| !new_name.is_empty()) {
            record.rename(new_name);
        }
        Ok(())
    }

    /// Every record whose current name equals `name`, in collection order.
    pub fn find_by_name(&self, name: &str) -> Vec<&Record> {
        self.iter()
            .map(|(_, record)| record)
            .filter(|record| record.name().as_str() == name)
            .collect()
    }

    /// Every record with at least one phone equal to `phone`, in collection order.
    pub fn find_by_phone(&self, phone: &str) -> Vec<&Record> {
        self.iter()
            .map(|(_, record)| record)
            .filter(|record| record.has_phone(phone))
            .collect()
    }

    /// Iterate over all records, one at a time, starting from the first key.
    ///
    /// `page_size` is carried for callers that group records into pages,
    /// see `RecordIter::pages`.
    pub fn paged_iterator(&self, page_size: usize) -> RecordIter<'_> {
        RecordIter::new(self, page_size)
    }

    /// Write the whole book to `path` as a JSON document, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns `Io` or `Json` if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> ContactBookResult<()> {
        self.save_to(&JsonFileStore::new(path.as_ref()))
    }

    /// Replace the book's contents with the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceMissing` if the file does not exist, and `Io`,
    /// `Json`, `InvalidValue`, `InvalidType` or `UnsupportedVersion` if it
    /// cannot be read. The book is unchanged on every error.
    pub fn load(&mut self, path: impl AsRef<Path>) -> ContactBookResult<()> {
        self.load_from(&JsonFileStore::new(path.as_ref()))
    }

    /// Persist the book through `store`.
    ///
    /// # Errors
    ///
    /// Propagates the store's error.
    pub fn save_to(&self, store: &dyn RecordStore) -> ContactBookResult<()> {
        store.save(self)
    }

    /// Replace the book's contents with what `store` holds.
    ///
    /// # Errors
    ///
    /// Propagates the store's error; the book is unchanged in that case.
    pub fn load_from(&mut self, store: &dyn RecordStore) -> ContactBookResult<()> {
        *self = store.load()?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = RecordIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.paged_iterator(1)
    }
}
