use crate::book::AddressBook;
use crate::error::ContactBookResult;

/// Persistence for a whole address book.
///
/// Provides abstraction over where and how the book is stored,
/// enabling different implementations (JSON file, in-memory mock).
pub trait RecordStore {
    /// Replace the stored state with `book`.
    fn save(&self, book: &AddressBook) -> ContactBookResult<()>;

    /// Read back a complete book.
    ///
    /// Implementations must return `PersistenceMissing` when nothing has been stored yet.
    fn load(&self) -> ContactBookResult<AddressBook>;
}
