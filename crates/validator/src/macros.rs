//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`] — Create a kind-matching validator (unit struct + `Schema` impl + factory fn)
//! - [`object!`] — Build an [`ObjectValidator`](crate::validators::ObjectValidator) from `name => validator` pairs
//!
//! # Examples
//!
//! ```
//! use perch_validator::prelude::*;
//!
//! perch_validator::validator! {
//!     /// Accepts arrays, returning their length.
//!     pub ArrayLength expects "array";
//!     parse(input) -> f64 {
//!         match input {
//!             Value::Array(items) => Some(items.len() as f64),
//!             _ => None,
//!         }
//!     }
//!     fn array_length();
//! }
//!
//! let schema = object! {
//!     "kind" => literal("tray"),
//!     "icons" => array_length(),
//! };
//! let record = schema
//!     .parse(&Value::object([
//!         ("kind", Value::from("tray")),
//!         ("icons", Value::from(vec![Value::Null, Value::Null])),
//!     ]))
//!     .unwrap();
//! assert_eq!(record.get_number("icons"), Some(2.0));
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a validator that accepts one runtime kind: a unit struct deriving
/// `Debug, Clone, Copy, Default, PartialEq, Eq, Hash`, its `Schema`
/// implementation, and a `const` factory function.
///
/// The `parse` block maps a present input to `Some(output)` when it has the
/// right kind and `None` otherwise. Absence and `None` both fail with a type
/// mismatch naming the `expects` string.
///
/// ```rust,ignore
/// validator! {
///     pub BooleanValidator expects "boolean";
///     parse(input) -> bool {
///         match input { Value::Bool(b) => Some(*b), _ => None }
///     }
///     fn boolean();
/// }
/// ```
#[macro_export]
macro_rules! validator {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident expects $expected:literal;
        parse($inp:ident) -> $output:ty $body:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Schema for $name {
            type Output = $output;
            type Optional = $crate::combinators::Optional<Self>;

            fn parse_option(
                &self,
                input: ::std::option::Option<&$crate::foundation::Value>,
            ) -> ::std::result::Result<$output, $crate::foundation::ValidationError> {
                let narrow = |$inp: &$crate::foundation::Value| -> ::std::option::Option<$output> { $body };
                input.and_then(narrow).ok_or_else(|| {
                    $crate::foundation::ValidationError::type_mismatch(
                        $expected,
                        $crate::foundation::Kind::of(input),
                    )
                })
            }

            fn optional(&self) -> Self::Optional {
                $crate::combinators::Optional::new(*self)
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };
}

// ============================================================================
// OBJECT MACRO
// ============================================================================

/// Builds a closed [`ObjectValidator`](crate::validators::ObjectValidator).
///
/// Fields are declared in evaluation order:
///
/// ```
/// use perch_validator::prelude::*;
///
/// let schema = object! {
///     "a" => number(),
///     "b" => number().optional(),
/// };
/// assert_eq!(schema.field_names().collect::<Vec<_>>(), ["a", "b"]);
///
/// let empty = object! {};
/// assert!(empty.parse(&Value::object::<&str, _>([])).is_ok());
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::validators::ObjectValidator::new()
    };
    ($($name:expr => $schema:expr),+ $(,)?) => {
        $crate::validators::ObjectValidator::new()
            $(.field($name, $schema))+
    };
}
