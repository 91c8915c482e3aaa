use contact_book::error::{ContactBookError, ContactBookResult};
use contact_book::storage::{read_book, write_book, RecordStore};
use contact_book::AddressBook;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock record store for testing.
///
/// Keeps the last saved document in memory, encoded with the real JSON codec,
/// and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockRecordStore {
    document: Arc<Mutex<Option<Vec<u8>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockRecordStore {
    /// Create a new empty MockRecordStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `document`.
    pub fn with_document(document: &str) -> Self {
        let store = Self::new();
        *store.document.lock().unwrap() = Some(document.as_bytes().to_vec());
        store
    }

    /// The stored document as text, if anything was saved.
    pub fn document(&self) -> Option<String> {
        self.document
            .lock()
            .unwrap()
            .as_ref()
            .map(|bytes| String::from_utf8(bytes.clone()).unwrap())
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn increment_call_count(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl RecordStore for MockRecordStore {
    fn save(&self, book: &AddressBook) -> ContactBookResult<()> {
        self.increment_call_count("save");
        let mut buffer = Vec::new();
        write_book(&mut buffer, book)?;
        *self.document.lock().unwrap() = Some(buffer);
        Ok(())
    }

    fn load(&self) -> ContactBookResult<AddressBook> {
        self.increment_call_count("load");
        let document = self.document.lock().unwrap();
        match document.as_ref() {
            Some(bytes) => read_book(bytes.as_slice()),
            None => Err(ContactBookError::PersistenceMissing(PathBuf::from(
                "memory://contacts",
            ))),
        }
    }
}
