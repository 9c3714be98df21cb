//! Core traits for the validation system
//!
//! [`Schema`] is the trait every validator implements. [`IntoField`] lets the
//! narrowed output of any validator be stored as a record [`Field`], which is
//! how object validators hold children of different output types.

use crate::combinators::Mapped;
use crate::foundation::{Callback, ValidationError, ValidationErrors, Value};
use crate::validators::{Field, Record};

// ============================================================================
// CORE SCHEMA TRAIT
// ============================================================================

/// An immutable description of what a valid `Self::Output` looks like.
///
/// Implementors provide [`parse_option`](Schema::parse_option), which sees the
/// input as `Option<&Value>` so that a missing object field (`None`) is
/// distinguishable from an explicit `null`. Everything else is provided.
///
/// Validators hold no mutable state: every method takes `&self`, and
/// [`optional`](Schema::optional) returns a new validator.
///
/// # Examples
///
/// ```
/// use perch_validator::prelude::*;
///
/// let width = number().positive();
/// assert_eq!(width.parse(&Value::from(7)).unwrap(), 7.0);
/// assert!(width.parse(&Value::from(0)).is_err());
///
/// let maybe_width = width.optional();
/// assert_eq!(maybe_width.parse_absent().unwrap(), None);
/// assert_eq!(maybe_width.parse(&Value::from(7)).unwrap(), Some(7.0));
/// ```
pub trait Schema: Clone + Send + Sync {
    /// The narrowed type produced on success.
    type Output;

    /// The validator returned by [`optional`](Schema::optional).
    type Optional: Schema;

    /// Validates a possibly-absent input.
    fn parse_option(&self, input: Option<&Value>) -> Result<Self::Output, ValidationError>;

    /// Returns a validator that additionally accepts absence.
    fn optional(&self) -> Self::Optional;

    /// Validates a present input.
    fn parse(&self, input: &Value) -> Result<Self::Output, ValidationError> {
        self.parse_option(Some(input))
    }

    /// Validates absence, as if parsing a field that was never provided.
    fn parse_absent(&self) -> Result<Self::Output, ValidationError> {
        self.parse_option(None)
    }

    /// Validates a possibly-absent input, reporting every violation.
    ///
    /// Accepts exactly the inputs [`parse_option`](Schema::parse_option)
    /// accepts. Leaf validators have a single failure mode and keep the
    /// default; composite validators override it to keep going past the first
    /// failing child.
    fn parse_option_all(&self, input: Option<&Value>) -> Result<Self::Output, ValidationErrors> {
        self.parse_option(input).map_err(ValidationErrors::from)
    }

    /// Validates a present input, reporting every violation.
    fn parse_all(&self, input: &Value) -> Result<Self::Output, ValidationErrors> {
        self.parse_option_all(Some(input))
    }

    /// Converts the narrowed output with `f`, which may reject it.
    ///
    /// ```
    /// use perch_validator::prelude::*;
    ///
    /// struct Clock {
    ///     format: String,
    ///     width: Option<f64>,
    /// }
    ///
    /// let clock = object! {
    ///     "format" => string(),
    ///     "width" => number().positive().optional(),
    /// }
    /// .map(|record| {
    ///     Ok(Clock {
    ///         format: record.try_get("format")?,
    ///         width: record.try_get("width")?,
    ///     })
    /// });
    ///
    /// let parsed = clock.parse(&Value::object([("format", Value::from("%H"))])).unwrap();
    /// assert_eq!((parsed.format.as_str(), parsed.width), ("%H", None));
    /// ```
    fn map<T, F>(self, f: F) -> Mapped<Self, F>
    where
        F: Fn(Self::Output) -> Result<T, ValidationError> + Clone + Send + Sync,
    {
        Mapped::new(self, f)
    }
}

/// Implements `optional()` the same way for every required validator.
macro_rules! required_schema {
    () => {
        type Optional = $crate::combinators::Optional<Self>;

        fn optional(&self) -> Self::Optional {
            $crate::combinators::Optional::new(self.clone())
        }
    };
}
pub(crate) use required_schema;

// ============================================================================
// NARROWED OUTPUT → FIELD
// ============================================================================

/// Converts a narrowed output into a storable record field.
///
/// `None` means the output is "absent".
pub trait IntoField {
    fn into_field(self) -> Option<Field>;
}

macro_rules! value_into_field {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl IntoField for $ty {
                fn into_field(self) -> Option<Field> {
                    Some(Field::Value(Value::$variant(self)))
                }
            }
        )+
    };
}

value_into_field! {
    f64 => Number,
    bool => Bool,
    String => String,
    Callback => Function,
}

impl IntoField for Value {
    fn into_field(self) -> Option<Field> {
        Some(Field::Value(self))
    }
}

impl IntoField for Record {
    fn into_field(self) -> Option<Field> {
        Some(Field::Record(self))
    }
}

impl<T: IntoField> IntoField for Option<T> {
    fn into_field(self) -> Option<Field> {
        self.and_then(IntoField::into_field)
    }
}

impl<T: IntoField> IntoField for Vec<T> {
    /// Elements are always present, so an absent element only arises from an
    /// element validator that accepts nothing but absence; it becomes `null`.
    fn into_field(self) -> Option<Field> {
        Some(Field::List(
            self.into_iter()
                .map(|item| item.into_field().unwrap_or(Field::Value(Value::Null)))
                .collect(),
        ))
    }
}

// ============================================================================
// TYPE ERASURE
// ============================================================================

/// Object-safe view of a [`Schema`] whose output is stored as a [`Field`].
pub trait ErasedSchema: Send + Sync {
    fn parse_erased(&self, input: Option<&Value>) -> Result<Option<Field>, ValidationError>;

    fn parse_erased_all(&self, input: Option<&Value>) -> Result<Option<Field>, ValidationErrors>;
}

impl<S> ErasedSchema for S
where
    S: Schema,
    S::Output: IntoField,
{
    fn parse_erased(&self, input: Option<&Value>) -> Result<Option<Field>, ValidationError> {
        self.parse_option(input).map(IntoField::into_field)
    }

    fn parse_erased_all(&self, input: Option<&Value>) -> Result<Option<Field>, ValidationErrors> {
        self.parse_option_all(input).map(IntoField::into_field)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Kind;

    #[derive(Clone)]
    struct AlwaysValid;

    impl Schema for AlwaysValid {
        type Output = f64;
        required_schema!();

        fn parse_option(&self, _input: Option<&Value>) -> Result<f64, ValidationError> {
            Ok(1.0)
        }
    }

    #[derive(Clone)]
    struct NeverValid;

    impl Schema for NeverValid {
        type Output = f64;
        required_schema!();

        fn parse_option(&self, input: Option<&Value>) -> Result<f64, ValidationError> {
            Err(ValidationError::type_mismatch("nothing", Kind::of(input)))
        }
    }

    #[test]
    fn optional_short_circuits_on_absence() {
        assert_eq!(NeverValid.optional().parse_absent(), Ok(None));
        assert!(NeverValid.optional().parse(&Value::Null).is_err());
    }

    #[test]
    fn optional_of_optional_is_the_same_shape() {
        let twice = AlwaysValid.optional().optional();
        assert_eq!(twice.parse(&Value::Null), Ok(Some(1.0)));
        assert_eq!(twice.parse_absent(), Ok(None));
    }

    #[test]
    fn default_parse_all_wraps_the_single_error() {
        let errors = NeverValid.parse_all(&Value::Null).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().map(ValidationError::code), Some("type_mismatch"));
    }

    #[test]
    fn erased_schema_stores_outputs_as_values() {
        let erased: &dyn ErasedSchema = &AlwaysValid;
        assert_eq!(
            erased.parse_erased(None),
            Ok(Some(Field::Value(Value::Number(1.0))))
        );

        let erased_optional: &dyn ErasedSchema = &NeverValid.optional();
        assert_eq!(erased_optional.parse_erased(None), Ok(None));
    }

    #[test]
    fn option_into_field_flattens() {
        assert_eq!(
            Some(Some(2.0)).into_field(),
            Some(Field::Value(Value::Number(2.0)))
        );
        assert_eq!(None::<f64>.into_field(), None);
    }

    #[test]
    fn vec_into_field_is_a_list() {
        assert_eq!(
            vec![true].into_field(),
            Some(Field::List(vec![Field::Value(Value::Bool(true))]))
        );
    }

    #[test]
    fn map_transforms_the_output() {
        let doubled = AlwaysValid.map(|n| Ok(n * 2.0));
        assert_eq!(doubled.parse(&Value::Null), Ok(2.0));
        assert!(NeverValid.map(|n| Ok(n * 2.0)).parse(&Value::Null).is_err());
    }
}
