//! JSON file persistence.

use super::schema::{StoredBook, StoredBookRef};
use super::traits::RecordStore;
use crate::book::AddressBook;
use crate::error::{ContactBookError, ContactBookResult};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Serialize `book` as a pretty-printed JSON document.
///
/// The output is deterministic: records follow the book's key order.
///
/// # Errors
///
/// Returns `Io` or `Json` if writing fails.
pub fn write_book<W: Write>(mut writer: W, book: &AddressBook) -> ContactBookResult<()> {
    serde_json::to_writer_pretty(&mut writer, &StoredBookRef::from(book))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Decode a complete book from a JSON document.
///
/// # Errors
///
/// Returns `Json` for malformed input, `UnsupportedVersion` for documents of
/// another schema version and `InvalidValue`/`InvalidType` for invalid phones.
pub fn read_book<R: Read>(reader: R) -> ContactBookResult<AddressBook> {
    let stored: StoredBook = serde_json::from_reader(reader)?;
    stored.into_book()
}

/// Stores the address book in a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    /// Write to a temporary file next to the target, then rename it over the
    /// target. A failed save leaves the previous file as it was.
    fn save(&self, book: &AddressBook) -> ContactBookResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir)?;
        write_book(BufWriter::new(temp.as_file_mut()), book)?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;
        debug!("Saved {} records to {}", book.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> ContactBookResult<AddressBook> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Contacts file {} does not exist", self.path.display());
                return Err(ContactBookError::PersistenceMissing(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let book = read_book(BufReader::new(file))?;
        debug!("Loaded {} records from {}", book.len(), self.path.display());
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_record("Ann", &["12345"], NaiveDate::from_ymd_opt(1990, 5, 1))
            .unwrap();
        book.add_record("Bob", &[], None).unwrap();
        book
    }

    #[test]
    fn test_write_then_read_in_memory() {
        let book = sample_book();
        let mut buffer = Vec::new();
        write_book(&mut buffer, &book).unwrap();

        let restored = read_book(buffer.as_slice()).unwrap();
        assert_eq!(restored, book);
    }

    #[test]
    fn test_write_is_deterministic() {
        let book = sample_book();
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_book(&mut first, &book).unwrap();
        write_book(&mut second, &book).unwrap();
        assert_eq!(first, second);

        let text = String::from_utf8(first).unwrap();
        assert!(text.starts_with("{\n  \"version\": 1,"));
        assert!(text.find("\"Ann\"").unwrap() < text.find("\"Bob\"").unwrap());
    }

    #[test]
    fn test_read_garbage_fails() {
        let err = read_book("not json".as_bytes()).unwrap_err();
        assert!(matches!(err, ContactBookError::Json(_)));
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_save_replaces_file_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("contacts.json"));
        std::fs::write(store.path(), "previous contents").unwrap();

        store.save(&sample_book()).unwrap();

        assert_eq!(dir_entries(dir.path()), vec!["contacts.json"]);
        assert_eq!(store.load().unwrap(), sample_book());
    }

    #[test]
    fn test_failed_save_leaves_directory_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("contacts.json");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep.txt"), "keep").unwrap();
        let store = JsonFileStore::new(&target);

        assert!(matches!(
            store.save(&sample_book()),
            Err(ContactBookError::Io(_))
        ));
        assert_eq!(dir_entries(dir.path()), vec!["contacts.json"]);
        assert_eq!(
            std::fs::read_to_string(target.join("keep.txt")).unwrap(),
            "keep"
        );
    }

    #[test]
    fn test_save_into_missing_directory_keeps_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing").join("contacts.json"));

        assert!(store.save(&sample_book()).is_err());
        assert!(dir_entries(dir.path()).is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));

        let err = store.load().unwrap_err();
        assert!(err.is_recoverable());
        assert!(matches!(err, ContactBookError::PersistenceMissing(ref p) if p == store.path()));
    }
}
