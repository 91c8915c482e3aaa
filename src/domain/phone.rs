//! Phone field.

use super::errors::ValidationError;
use super::field::{FieldKind, ValidatedField};
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Field kind for phone numbers.
///
/// A phone number is valid when it is non-empty and made only of decimal digits
/// (Unicode category `Nd`, so `"٣٤٥"` and `"１２３"` pass). Other numeric
/// characters such as `½` or `Ⅻ` are rejected, as are spaces, dashes and a
/// leading `+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneKind;

impl FieldKind for PhoneKind {
    type Value = String;

    fn validate(value: &String) -> Result<(), ValidationError> {
        if value.is_empty() || !value.chars().all(is_decimal_digit) {
            return Err(ValidationError::InvalidPhone(value.clone()));
        }
        Ok(())
    }
}

fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// A validated phone number.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("0501234567".to_string()).unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(Phone::new("+380501234567".to_string()).is_err());
/// ```
pub type Phone = ValidatedField<PhoneKind>;

impl ValidatedField<PhoneKind> {
    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.get()
    }
}

impl AsRef<str> for ValidatedField<PhoneKind> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for ValidatedField<PhoneKind> {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}
