//! Name field.

use super::errors::ValidationError;
use super::field::{FieldKind, Unconstrained, ValidatedField};

/// Field kind for contact names. Any string is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameKind;

impl FieldKind for NameKind {
    type Value = String;

    fn validate(_value: &String) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Unconstrained for NameKind {}

/// A contact name.
pub type Name = ValidatedField<NameKind>;

impl ValidatedField<NameKind> {
    /// Wrap a name.
    pub fn from_string(name: impl Into<String>) -> Self {
        Self::from_value(name.into())
    }

    /// Replace the name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.replace(name.into());
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.get()
    }
}

impl AsRef<str> for ValidatedField<NameKind> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
