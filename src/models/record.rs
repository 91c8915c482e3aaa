//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, BIRTHDAY_FORMAT};
use crate::error::{ContactBookError, ContactBookResult};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// Conversion into a validated phone field.
///
/// Raw strings are validated, already validated phones are taken as they are.
/// A JSON value can only become a phone if it is a JSON string; any other JSON
/// type is reported as `ContactBookError::InvalidType`.
pub trait IntoPhone {
    /// Convert `self` into a `Phone`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` for strings that are not phone numbers and
    /// `InvalidType` for inputs that can never be one.
    fn into_phone(self) -> ContactBookResult<Phone>;
}

impl IntoPhone for Phone {
    fn into_phone(self) -> ContactBookResult<Phone> {
        Ok(self)
    }
}

impl IntoPhone for &Phone {
    fn into_phone(self) -> ContactBookResult<Phone> {
        Ok(self.clone())
    }
}

impl IntoPhone for String {
    fn into_phone(self) -> ContactBookResult<Phone> {
        Ok(Phone::new(self)?)
    }
}

impl IntoPhone for &String {
    fn into_phone(self) -> ContactBookResult<Phone> {
        self.as_str().into_phone()
    }
}

impl IntoPhone for &str {
    fn into_phone(self) -> ContactBookResult<Phone> {
        Ok(Phone::new(self.to_string())?)
    }
}

impl IntoPhone for serde_json::Value {
    fn into_phone(self) -> ContactBookResult<Phone> {
        use serde_json::Value;

        let kind = match self {
            Value::String(phone) => return phone.into_phone(),
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        Err(ContactBookError::InvalidType(format!(
            "expected a string, got a JSON {}",
            kind
        )))
    }
}

/// One contact: a name, an ordered list of phones and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with a name and, optionally, a first phone and a birthday.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the phone or the birthday is rejected.
    pub fn new(
        name: impl Into<String>,
        phone: Option<&str>,
        birthday: Option<NaiveDate>,
    ) -> ContactBookResult<Self> {
        let mut record = Self::with_name(name);
        if let Some(date) = birthday {
            record.birthday = Some(Birthday::new(date)?);
        }
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        Ok(record)
    }

    /// Create a record with just a name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Name::from_string(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's current name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Change the contact's name in place.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name.rename(name);
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Phone values in the order they were added.
    pub fn phone_values(&self) -> Vec<&str> {
        self.phones.iter().map(Phone::as_str).collect()
    }

    /// Whether any phone of this record equals `phone`.
    pub fn has_phone(&self, phone: &str) -> bool {
        self.phones.iter().any(|p| p.as_str() == phone)
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Append a phone.
    ///
    /// Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` for an invalid phone string and `InvalidType`
    /// for an input that cannot be a phone at all.
    pub fn add_phone(&mut self, phone: impl IntoPhone) -> ContactBookResult<()> {
        self.phones.push(phone.into_phone()?);
        Ok(())
    }

    /// Remove the first phone equal to `phone` and return it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the record has no such phone.
    pub fn remove_phone(&mut self, phone: impl AsRef<str>) -> ContactBookResult<Phone> {
        let phone = phone.as_ref();
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| ContactBookError::NotFound(format!("phone {}", phone)))?;
        Ok(self.phones.remove(index))
    }

    /// Change the first phone equal to `old_phone` to `new_phone`.
    ///
    /// Does nothing if no phone matches.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if a phone matches but `new_phone` is rejected;
    /// the matched phone keeps its old value.
    pub fn edit_phone(
        &mut self,
        old_phone: impl AsRef<str>,
        new_phone: impl Into<String>,
    ) -> ContactBookResult<()> {
        let old_phone = old_phone.as_ref();
        if let Some(phone) = self.phones.iter_mut().find(|p| p.as_str() == old_phone) {
            phone.set(new_phone.into())?;
        }
        Ok(())
    }

    /// Replace every phone with `phones`.
    ///
    /// All inputs are validated before the current phones are discarded.
    ///
    /// # Errors
    ///
    /// Returns the first conversion error; the record is left unchanged.
    pub fn replace_phones<I>(&mut self, phones: I) -> ContactBookResult<()>
    where
        I: IntoIterator,
        I::Item: IntoPhone,
    {
        self.phones = phones
            .into_iter()
            .map(IntoPhone::into_phone)
            .collect::<ContactBookResult<Vec<_>>>()?;
        Ok(())
    }

    /// Whole days from today (local calendar) until the next birthday.
    ///
    /// `None` if the record has no birthday.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Whole days from `today` until the next occurrence of the birthday.
    ///
    /// Zero when `today` is the birthday. A birthday that already passed this
    /// year counts towards next year's anniversary.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        let mut next = birthday.occurrence_in(today.year())?;
        if next < today {
            next = birthday.occurrence_in(today.year() + 1)?;
        }
        Some((next - today).num_days())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Phones: {}", self.phone_values().join(", "))?;
        match &self.birthday {
            Some(birthday) => write!(f, "Birthday: {}", birthday.get().format(BIRTHDAY_FORMAT)),
            None => write!(f, "Birthday: N/A"),
        }
    }
}
