//! Birthday field.

use super::errors::ValidationError;
use super::field::{FieldKind, ValidatedField};
use chrono::{Datelike, NaiveDate};

/// Date layout used for birthdays everywhere: input, display and storage.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Field kind for birthdays.
///
/// A birthday is valid when it survives a round trip through the
/// `YYYY-MM-DD` layout, which rejects dates outside the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayKind;

impl FieldKind for BirthdayKind {
    type Value = NaiveDate;

    fn validate(value: &NaiveDate) -> Result<(), ValidationError> {
        let formatted = value.format(BIRTHDAY_FORMAT).to_string();
        match NaiveDate::parse_from_str(&formatted, BIRTHDAY_FORMAT) {
            Ok(parsed) if parsed == *value => Ok(()),
            _ => Err(ValidationError::InvalidBirthday(formatted)),
        }
    }
}

/// A validated birthday.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("1990-05-01").unwrap();
/// assert_eq!(birthday.month(), 5);
/// assert_eq!(birthday.day(), 1);
/// assert!(Birthday::parse("1990-02-30").is_err());
/// ```
pub type Birthday = ValidatedField<BirthdayKind>;

impl ValidatedField<BirthdayKind> {
    /// Parse a `YYYY-MM-DD` string into a birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input is not a real calendar date.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let date = NaiveDate::parse_from_str(input.trim(), BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(input.to_string()))?;
        Self::new(date)
    }

    /// Get the birthday as a date.
    pub fn date(&self) -> NaiveDate {
        *self.get()
    }

    /// Month of the birthday (1-12).
    pub fn month(&self) -> u32 {
        self.get().month()
    }

    /// Day of month of the birthday (1-31).
    pub fn day(&self) -> u32 {
        self.get().day()
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// A 29 February birthday falls on 28 February in common years.
    /// Returns `None` only when `year` is outside chrono's supported range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day()).or_else(|| {
            if self.month() == 2 && self.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}
