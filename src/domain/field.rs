//! Generic validated field.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A kind of contact field: the value it stores and the predicate that value must satisfy.
pub trait FieldKind {
    /// The scalar stored by fields of this kind.
    type Value: Clone + fmt::Debug + PartialEq;

    /// Check a candidate value.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` describing the rejected value.
    fn validate(value: &Self::Value) -> Result<(), ValidationError>;
}

/// A single contact attribute whose value always satisfies its kind's predicate.
///
/// There is no way to obtain a `ValidatedField` holding an invalid value:
/// both construction and mutation validate first.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let mut phone = Phone::new("12345".to_string()).unwrap();
/// assert!(phone.set("12-45".to_string()).is_err());
/// assert_eq!(phone.get(), "12345");
/// ```
pub struct ValidatedField<K: FieldKind> {
    value: K::Value,
    _kind: PhantomData<K>,
}

impl<K: FieldKind> ValidatedField<K> {
    /// Validate `value` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns the kind's `ValidationError` if the value is rejected.
    pub fn new(value: K::Value) -> Result<Self, ValidationError> {
        K::validate(&value)?;
        Ok(Self {
            value,
            _kind: PhantomData,
        })
    }

    /// Replace the stored value.
    ///
    /// On failure the previous value is kept.
    ///
    /// # Errors
    ///
    /// Returns the kind's `ValidationError` if the value is rejected.
    pub fn set(&mut self, value: K::Value) -> Result<(), ValidationError> {
        K::validate(&value)?;
        self.value = value;
        Ok(())
    }

    /// Get the current value.
    pub fn get(&self) -> &K::Value {
        &self.value
    }

    /// Convert into the underlying value.
    pub fn into_inner(self) -> K::Value {
        self.value
    }
}

/// Marker for field kinds whose predicate accepts every value.
pub trait Unconstrained: FieldKind {}

impl<K: Unconstrained> ValidatedField<K> {
    /// Wrap a value of a kind that cannot reject it.
    pub fn from_value(value: K::Value) -> Self {
        Self {
            value,
            _kind: PhantomData,
        }
    }

    /// Replace the stored value of a kind that cannot reject it.
    pub fn replace(&mut self, value: K::Value) {
        self.value = value;
    }
}

impl<K: FieldKind> Clone for ValidatedField<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K: FieldKind> fmt::Debug for ValidatedField<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValidatedField").field(&self.value).finish()
    }
}

impl<K: FieldKind> PartialEq for ValidatedField<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: FieldKind> Eq for ValidatedField<K> where K::Value: Eq {}

// Display support
impl<K: FieldKind> fmt::Display for ValidatedField<K>
where
    K::Value: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Serde support - serialize as the bare value
impl<K: FieldKind> Serialize for ValidatedField<K>
where
    K::Value: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize the bare value with validation
impl<'de, K: FieldKind> Deserialize<'de> for ValidatedField<K>
where
    K::Value: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = K::Value::deserialize(deserializer)?;
        ValidatedField::new(value).map_err(serde::de::Error::custom)
    }
}
