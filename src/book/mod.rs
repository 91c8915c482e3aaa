//! The contact collection and its paged traversal.

pub mod address_book;
pub mod pager;

pub use address_book::AddressBook;
pub use pager::{Pages, RecordIter};
