//! Array validators

use crate::foundation::traits::required_schema;
use crate::foundation::{Kind, PathSegment, Schema, ValidationError, ValidationErrors, Value};

/// Accepts arrays whose every element satisfies the item validator.
///
/// Elements are always present, so an optional item validator never sees
/// absence. A failing element is reported with its index in the field path.
///
/// # Examples
///
/// ```
/// use perch_validator::prelude::*;
///
/// let sizes = array(number().positive());
/// assert_eq!(
///     sizes.parse(&Value::from(vec![Value::from(1), Value::from(2)])).unwrap(),
///     vec![1.0, 2.0]
/// );
///
/// let err = sizes
///     .parse(&Value::from(vec![Value::from(1), Value::from(0)]))
///     .unwrap_err();
/// assert_eq!(err.path().to_string(), "[1]");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayValidator<S> {
    item: S,
}

impl<S> ArrayValidator<S> {
    pub const fn new(item: S) -> Self {
        Self { item }
    }

    pub const fn item(&self) -> &S {
        &self.item
    }
}

impl<S: Schema> ArrayValidator<S> {
    fn expect_array(input: Option<&Value>) -> Result<&[Value], ValidationError> {
        match input {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(ValidationError::type_mismatch("array", Kind::of(input))),
        }
    }
}

impl<S: Schema> Schema for ArrayValidator<S> {
    type Output = Vec<S::Output>;
    required_schema!();

    fn parse_option(&self, input: Option<&Value>) -> Result<Self::Output, ValidationError> {
        Self::expect_array(input)?
            .iter()
            .enumerate()
            .map(|(index, element)| {
                self.item.parse(element).map_err(|error| {
                    tracing::trace!(index, %error, "array element rejected");
                    error.in_field(index)
                })
            })
            .collect()
    }

    fn parse_option_all(&self, input: Option<&Value>) -> Result<Self::Output, ValidationErrors> {
        let items = Self::expect_array(input)?;
        let mut errors = ValidationErrors::new();
        let mut output = Vec::with_capacity(items.len());

        for (index, element) in items.iter().enumerate() {
            match self.item.parse_all(element) {
                Ok(value) => output.push(value),
                Err(element_errors) => {
                    errors.extend_in_field(&PathSegment::Index(index), element_errors);
                }
            }
        }
        errors.into_result(output)
    }
}

/// Creates a validator for arrays of `item`.
pub const fn array<S: Schema>(item: S) -> ArrayValidator<S> {
    ArrayValidator::new(item)
}
