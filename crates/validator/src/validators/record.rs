//! Narrowed object output
//!
//! A [`Record`] holds every field an object validator declares, in
//! declaration order. Each field is a [`Field`]: a leaf [`Value`], a nested
//! [`Record`] or a list of fields. Nested records keep their absent declared
//! fields, so the closed shape holds at every depth.

use indexmap::IndexMap;

use crate::foundation::{Callback, Kind, ValidationError, Value};

// ============================================================================
// FIELD
// ============================================================================

/// The narrowed value of one declared field.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Output of a leaf validator.
    Value(Value),
    /// Output of a nested object validator.
    Record(Record),
    /// Output of an array validator, one entry per element.
    List(Vec<Field>),
}

impl Field {
    /// Runtime kind of the narrowed value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Value(value) => value.kind(),
            Self::Record(_) => Kind::Object,
            Self::List(_) => Kind::Array,
        }
    }

    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Field]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Record> for Field {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

// ============================================================================
// TYPED EXTRACTION
// ============================================================================

/// Types that can be read back out of a narrowed field.
///
/// `Option<T>` reads an absent field as `None`; every other implementation
/// requires the field to be present.
pub trait FromField: Sized {
    /// What the field must hold, named in the error when extraction fails.
    const EXPECTED: &'static str;

    fn from_field(field: Option<&Field>) -> Option<Self>;
}

macro_rules! leaf_from_field {
    ($ty:ty, $expected:literal, |$value:ident| $extract:expr) => {
        impl FromField for $ty {
            const EXPECTED: &'static str = $expected;

            fn from_field(field: Option<&Field>) -> Option<Self> {
                let $value = field?.as_value()?;
                $extract
            }
        }
    };
}

leaf_from_field!(f64, "number", |value| value.as_f64());
leaf_from_field!(bool, "boolean", |value| value.as_bool());
leaf_from_field!(String, "string", |value| value.as_str().map(str::to_owned));
leaf_from_field!(Callback, "function", |value| value.as_function().cloned());
leaf_from_field!(Value, "value", |value| Some(value.clone()));

impl FromField for Record {
    const EXPECTED: &'static str = "object";

    fn from_field(field: Option<&Field>) -> Option<Self> {
        field?.as_record().cloned()
    }
}

impl<T: FromField> FromField for Vec<T> {
    const EXPECTED: &'static str = "array";

    fn from_field(field: Option<&Field>) -> Option<Self> {
        field?
            .as_list()?
            .iter()
            .map(|item| T::from_field(Some(item)))
            .collect()
    }
}

impl<T: FromField> FromField for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_field(field: Option<&Field>) -> Option<Self> {
        match field {
            None => Some(None),
            Some(_) => T::from_field(field).map(Some),
        }
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// The narrowed output of an [`ObjectValidator`](super::ObjectValidator).
///
/// Holds every declared field in declaration order; a field whose validator
/// accepted absence is present with no value.
///
/// # Examples
///
/// ```
/// use perch_validator::prelude::*;
///
/// let schema = object! {
///     "format" => string(),
///     "width" => number().optional(),
/// };
/// let record = schema
///     .parse(&Value::object([("format", Value::from("%H:%M"))]))
///     .unwrap();
///
/// let format: String = record.try_get("format").unwrap();
/// let width: Option<f64> = record.try_get("width").unwrap();
/// assert_eq!((format.as_str(), width), ("%H:%M", None));
///
/// let err = record.try_get::<f64>("format").unwrap_err();
/// assert_eq!(err.to_string(), "format: expected number, got string");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Option<Field>>,
}

impl Record {
    /// Narrowed value of a declared, present field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name).and_then(Option::as_ref)
    }

    /// Reads a field as `T`.
    ///
    /// Fails with a type mismatch at `name` when the field does not hold a
    /// `T`, including when `name` was never declared.
    pub fn try_get<T: FromField>(&self, name: &str) -> Result<T, ValidationError> {
        let field = self.field(name);
        T::from_field(field).ok_or_else(|| {
            let actual = field.map_or(Kind::Undefined, Field::kind);
            ValidationError::type_mismatch(T::EXPECTED, actual).in_field(name)
        })
    }

    /// Leaf value of a declared, present field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.field(name).and_then(Field::as_value)
    }

    /// Whether `name` is one of the declared fields, present or not.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Whether `name` is declared but was absent from the input.
    #[must_use]
    pub fn is_absent(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(None))
    }

    #[must_use]
    pub fn get_number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    #[must_use]
    pub fn get_function(&self, name: &str) -> Option<&Callback> {
        self.get(name).and_then(Value::as_function)
    }

    /// Nested record of a declared object field.
    #[must_use]
    pub fn get_record(&self, name: &str) -> Option<&Record> {
        self.field(name).and_then(Field::as_record)
    }

    /// Elements of a declared array field.
    #[must_use]
    pub fn get_list(&self, name: &str) -> Option<&[Field]> {
        self.field(name).and_then(Field::as_list)
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Field>)> {
        self.fields
            .iter()
            .map(|(name, field)| (name.as_str(), field.as_ref()))
    }

    /// Declared field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, name: String, field: Option<Field>) {
        self.fields.insert(name, field);
    }
}

impl FromIterator<(String, Option<Field>)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Option<Field>)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
