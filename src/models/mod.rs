//! Data models for the address book.
//!
//! A `Record` is one contact and owns its validated fields.

pub mod record;

pub use record::{IntoPhone, Record};
