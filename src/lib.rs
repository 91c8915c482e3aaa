//! Contact Book - a personal address book with validated fields and file persistence.
//!
//! Contacts have a name, any number of phone numbers and an optional birthday.
//! The book supports add/edit/delete/find, paged listing and saving to a JSON file.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone, birthday)
//! - **models**: The `Record` type, one contact
//! - **book**: The insertion-ordered `AddressBook` and its paged iterator
//! - **storage**: Versioned JSON persistence behind the `RecordStore` trait
//! - **cli**: Interactive menu driver used by the binary
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use book::{AddressBook, RecordIter};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidatedField, ValidationError};
pub use error::{ConfigError, ContactBookError, ContactBookResult};
pub use models::{IntoPhone, Record};
pub use storage::{JsonFileStore, RecordStore};
