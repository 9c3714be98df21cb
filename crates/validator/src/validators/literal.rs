//! Literal validators
//!
//! A [`LiteralValidator`] accepts exactly one primitive value: a string, a
//! number, `null`, or absence. It is the building block for configuration
//! tags such as `"kind": "clock"`.

use std::fmt;

use crate::foundation::traits::required_schema;
use crate::foundation::{Kind, Schema, ValidationError, Value};
use crate::validators::Field;

// ============================================================================
// LITERAL
// ============================================================================

/// The single value a [`LiteralValidator`] accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Number(f64),
    Null,
    /// Matches only a missing input.
    Undefined,
}

impl Literal {
    /// Kind an input must have to be compared with this literal.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::String(_) => Kind::String,
            Self::Number(_) => Kind::Number,
            Self::Null => Kind::Null,
            Self::Undefined => Kind::Undefined,
        }
    }

    /// The literal a present input would be, if its kind is a literal kind.
    fn of(input: Option<&Value>) -> Option<Self> {
        match input {
            None => Some(Self::Undefined),
            Some(Value::Null) => Some(Self::Null),
            Some(Value::Number(n)) => Some(Self::Number(*n)),
            Some(Value::String(s)) => Some(Self::String(s.clone())),
            Some(_) => None,
        }
    }

    /// Strict identity: same kind and same value.
    fn matches(&self, input: Option<&Value>) -> bool {
        match (self, input) {
            (Self::Undefined, None) => true,
            (Self::Null, Some(Value::Null)) => true,
            (Self::Number(expected), Some(Value::Number(actual))) => expected == actual,
            (Self::String(expected), Some(Value::String(actual))) => expected == actual,
            _ => false,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Null => f.write_str("null"),
            Self::Undefined => f.write_str("undefined"),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl crate::foundation::IntoField for Literal {
    fn into_field(self) -> Option<Field> {
        let value = match self {
            Self::String(s) => Value::String(s),
            Self::Number(n) => Value::Number(n),
            Self::Null => Value::Null,
            Self::Undefined => return None,
        };
        Some(Field::Value(value))
    }
}

// ============================================================================
// LITERAL VALIDATOR
// ============================================================================

/// Accepts only inputs strictly identical to the expected literal.
///
/// An input of another kind fails with a type mismatch; an input of the same
/// kind with a different value fails with a literal mismatch.
///
/// # Examples
///
/// ```
/// use perch_validator::prelude::*;
///
/// let tag = literal("clock");
/// assert_eq!(tag.parse(&Value::from("clock")).unwrap(), Literal::from("clock"));
///
/// let err = tag.parse(&Value::from("battery")).unwrap_err();
/// assert_eq!(err.code(), "literal_mismatch");
///
/// let err = tag.parse(&Value::from(3)).unwrap_err();
/// assert_eq!(err.code(), "type_mismatch");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralValidator {
    expected: Literal,
}

impl LiteralValidator {
    pub fn new(expected: impl Into<Literal>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    #[must_use]
    pub const fn expected(&self) -> &Literal {
        &self.expected
    }
}

impl Schema for LiteralValidator {
    type Output = Literal;
    required_schema!();

    fn parse_option(&self, input: Option<&Value>) -> Result<Literal, ValidationError> {
        if self.expected.matches(input) {
            return Ok(self.expected.clone());
        }
        match Literal::of(input) {
            Some(actual) if actual.kind() == self.expected.kind() => Err(
                ValidationError::literal_mismatch(self.expected.clone(), actual),
            ),
            _ => Err(ValidationError::type_mismatch(
                self.expected.to_string(),
                Kind::of(input),
            )),
        }
    }
}

/// Creates a validator accepting exactly `expected`.
pub fn literal(expected: impl Into<Literal>) -> LiteralValidator {
    LiteralValidator::new(expected)
}

// ============================================================================
// TESTS
// ============================================================================
