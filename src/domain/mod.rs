//! Validated contact fields.
//!
//! Every contact attribute is a `ValidatedField` parameterized by its kind:
//! a name, a phone number or a birthday. A field can only ever hold a value
//! its kind accepts, so invalid data cannot be represented in a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BirthdayKind, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use field::{FieldKind, Unconstrained, ValidatedField};
pub use name::{Name, NameKind};
pub use phone::{Phone, PhoneKind};
