//! Persistence for the address book.
//!
//! The book is stored as one self-contained, versioned JSON document.

pub mod json_store;
pub mod schema;
pub mod traits;

pub use json_store::{read_book, write_book, JsonFileStore};
pub use schema::SCHEMA_VERSION;
pub use traits::RecordStore;
