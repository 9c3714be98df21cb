//! Closed object validators
//!
//! An [`ObjectValidator`] maps field names to validators and rejects any
//! input key it does not declare. Its narrowed output is a [`Record`] holding
//! exactly the declared fields.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::foundation::traits::required_schema;
use crate::foundation::{
    ErasedSchema, IntoField, Kind, Map, PathSegment, Schema, ValidationError, ValidationErrors,
    Value,
};
use crate::validators::Record;

// ============================================================================
// OBJECT VALIDATOR
// ============================================================================

/// A closed-shape validator built from a field map.
///
/// [`parse`](Schema::parse) fails fast: the first unexpected key, then the
/// first failing declared field (in declaration order), is reported.
/// [`parse_all`](Schema::parse_all) accepts the same inputs but reports every
/// violation.
///
/// # Examples
///
/// ```
/// use perch_validator::prelude::*;
///
/// let schema = object! {
///     "a" => number(),
///     "b" => number().optional(),
/// };
///
/// let record = schema.parse(&Value::object([("a", Value::from(5))])).unwrap();
/// assert_eq!(record.get_number("a"), Some(5.0));
/// assert!(record.is_absent("b"));
///
/// let err = schema
///     .parse(&Value::object([("a", Value::from(1)), ("c", Value::from(2))]))
///     .unwrap_err();
/// assert_eq!(err.to_string(), "unexpected key `c`");
/// ```
#[derive(Clone, Default)]
pub struct ObjectValidator {
    fields: IndexMap<String, Arc<dyn ErasedSchema>>,
}

impl ObjectValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field. Re-declaring a name replaces its validator and keeps
    /// its original position.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<S>(mut self, name: impl Into<String>, schema: S) -> Self
    where
        S: Schema + 'static,
        S::Output: IntoField,
    {
        self.fields.insert(name.into(), Arc::new(schema));
        self
    }

    /// Declared field names in evaluation order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn expect_object(input: Option<&Value>) -> Result<&Map, ValidationError> {
        match input {
            Some(Value::Object(map)) => Ok(map),
            _ => Err(ValidationError::type_mismatch("object", Kind::of(input))),
        }
    }

    fn unexpected_keys<'a>(&'a self, map: &'a Map) -> impl Iterator<Item = &'a str> {
        map.keys()
            .map(String::as_str)
            .filter(|key| !self.fields.contains_key(*key))
    }
}

impl Schema for ObjectValidator {
    type Output = Record;
    required_schema!();

    fn parse_option(&self, input: Option<&Value>) -> Result<Record, ValidationError> {
        let map = Self::expect_object(input)?;

        if let Some(key) = self.unexpected_keys(map).next() {
            tracing::trace!(key, "rejecting undeclared object key");
            return Err(ValidationError::unexpected_key(key));
        }

        let mut record = Record::with_capacity(self.fields.len());
        for (name, schema) in &self.fields {
            let field = schema.parse_erased(map.get(name)).map_err(|error| {
                tracing::trace!(field = %name, %error, "object field rejected");
                error.in_field(name.as_str())
            })?;
            record.insert(name.clone(), field);
        }
        Ok(record)
    }

    fn parse_option_all(&self, input: Option<&Value>) -> Result<Record, ValidationErrors> {
        let map = Self::expect_object(input)?;
        let mut errors: ValidationErrors = self
            .unexpected_keys(map)
            .map(ValidationError::unexpected_key)
            .collect();

        let mut record = Record::with_capacity(self.fields.len());
        for (name, schema) in &self.fields {
            match schema.parse_erased_all(map.get(name)) {
                Ok(field) => record.insert(name.clone(), field),
                Err(field_errors) => {
                    errors.extend_in_field(&PathSegment::Key(name.clone()), field_errors);
                }
            }
        }

        if errors.has_errors() {
            tracing::trace!(count = errors.len(), "object rejected");
        }
        errors.into_result(record)
    }
}

impl fmt::Debug for ObjectValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValidator")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Creates an object validator with no fields; add them with
/// [`ObjectValidator::field`] or use [`object!`](crate::object).
#[must_use]
pub fn object() -> ObjectValidator {
    ObjectValidator::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use crate::foundation::Callback;
    use crate::validators::{Field, Literal, array, function, literal, number, string};
    use pretty_assertions::assert_eq;

    fn point() -> ObjectValidator {
        object().field("x", number()).field("y", number())
    }

    #[test]
    fn test_declared_fields_are_returned() {
        let record = point()
            .parse(&Value::object([("y", Value::from(2)), ("x", Value::from(1))]))
            .unwrap();
        let names: Vec<_> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["x", "y"]);
        assert_eq!(record.get_number("x"), Some(1.0));
        assert_eq!(record.get_number("y"), Some(2.0));
    }

    #[test]
    fn test_non_objects_are_rejected() {
        for input in [
            Value::Null,
            Value::from(1),
            Value::from("{}"),
            Value::Array(vec![]),
            Value::function(|_| Value::Null),
        ] {
            let err = point().parse(&input).unwrap_err();
            assert_eq!(err.code(), "type_mismatch", "input: {input}");
        }
        assert!(point().parse_absent().is_err());
    }

    #[test]
    fn test_first_unexpected_key_in_input_order() {
        let input = Value::object([
            ("x", Value::from(1)),
            ("zz", Value::from(2)),
            ("aa", Value::from(3)),
        ]);
        let err = point().parse(&input).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::UnexpectedKey {
                key: "zz".to_owned()
            }
        );
    }

    #[test]
    fn test_unexpected_key_wins_over_field_failures() {
        let input = Value::object([("x", Value::from("bad")), ("extra", Value::Null)]);
        let err = point().parse(&input).unwrap_err();
        assert_eq!(err.code(), "unexpected_key");
    }

    #[test]
    fn test_first_failing_field_in_declaration_order() {
        let input = Value::object([("y", Value::from("b")), ("x", Value::from("a"))]);
        let err = point().parse(&input).unwrap_err();
        assert_eq!(err.path().to_string(), "x");
        assert_eq!(err.to_string(), "x: expected number, got string");
    }

    #[test]
    fn test_missing_required_field() {
        let err = point()
            .parse(&Value::object([("x", Value::from(1))]))
            .unwrap_err();
        assert_eq!(err.to_string(), "y: expected number, got undefined");
    }

    #[test]
    fn test_null_field_is_not_absent() {
        let schema = object().field("label", string().optional());
        let err = schema
            .parse(&Value::object([("label", Value::Null)]))
            .unwrap_err();
        assert_eq!(err.leaf().code(), "type_mismatch");
    }

    #[test]
    fn test_nested_objects() {
        let schema = object()
            .field("kind", literal("clock"))
            .field("position", point())
            .field("format", string().optional());

        let input = Value::object([
            ("kind", Value::from("clock")),
            (
                "position",
                Value::object([("x", Value::from(10)), ("y", Value::from(20))]),
            ),
        ]);
        let record = schema.parse(&input).unwrap();
        assert_eq!(record.get_str("kind"), Some("clock"));
        assert_eq!(
            record.get_record("position").and_then(|p| p.get_number("y")),
            Some(20.0)
        );
        assert!(record.is_absent("format"));

        let bad = Value::object([
            ("kind", Value::from("clock")),
            (
                "position",
                Value::object([("x", Value::from(10)), ("z", Value::from(20))]),
            ),
        ]);
        let err = schema.parse(&bad).unwrap_err();
        assert_eq!(err.to_string(), "position: unexpected key `z`");
    }

    #[test]
    fn test_absent_literal_field_is_recorded_as_absent() {
        let schema = object().field("legacy", literal(Literal::Undefined));
        let record = schema.parse(&Value::object::<&str, _>([])).unwrap();
        assert!(record.is_declared("legacy"));
        assert!(record.is_absent("legacy"));
        assert!(
            schema
                .parse(&Value::object([("legacy", Value::from(1))]))
                .is_err()
        );
    }

    #[test]
    fn test_function_fields_keep_identity() {
        let on_click = Callback::new(|_| Value::Null);
        let schema = object().field("onClick", function());
        let record = schema
            .parse(&Value::object([("onClick", Value::from(on_click.clone()))]))
            .unwrap();
        assert!(record.get_function("onClick").unwrap().ptr_eq(&on_click));
    }

    #[test]
    fn test_redeclared_field_replaces_in_place() {
        let schema = object()
            .field("a", number())
            .field("b", number())
            .field("a", string());
        assert_eq!(schema.field_names().collect::<Vec<_>>(), ["a", "b"]);
        assert!(
            schema
                .parse(&Value::object([("a", Value::from("s")), ("b", Value::from(1))]))
                .is_ok()
        );
    }

    #[test]
    fn test_parse_all_reports_every_violation() {
        let schema = object()
            .field("x", number())
            .field("y", number())
            .field("apps", array(object().field("bundleId", string())));
        let input = Value::object([
            ("x", Value::from("one")),
            ("colour", Value::from("red")),
            (
                "apps",
                Value::from(vec![
                    Value::object([("bundleId", Value::from("com.example"))]),
                    Value::object([("bundleId", Value::from(3))]),
                ]),
            ),
            ("size", Value::from(3)),
        ]);

        let errors = schema.parse_all(&input).unwrap_err();
        let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            [
                "unexpected key `colour`",
                "unexpected key `size`",
                "x: expected number, got string",
                "y: expected number, got undefined",
                "apps[1].bundleId: expected string, got number",
            ]
        );
        assert_eq!(errors.first(), Some(&schema.parse(&input).unwrap_err()));
    }

    #[test]
    fn test_parse_all_success_matches_parse() {
        let input = Value::object([("x", Value::from(1)), ("y", Value::from(2))]);
        assert_eq!(point().parse_all(&input), Ok(point().parse(&input).unwrap()));
    }

    #[test]
    fn test_nested_record_keeps_absent_declared_fields() {
        let schema = object().field(
            "inner",
            object().field("a", number()).field("b", number().optional()),
        );
        let input = Value::object([("inner", Value::object([("a", Value::from(5))]))]);

        let record = schema.parse(&input).unwrap();
        let inner = record.get_record("inner").unwrap();
        assert_eq!(inner.names().collect::<Vec<_>>(), ["a", "b"]);
        assert!(inner.is_absent("b"));
        assert_eq!(inner.try_get::<f64>("a"), Ok(5.0));
        assert_eq!(schema.parse_all(&input), Ok(record));
    }

    #[test]
    fn test_array_of_records_keeps_shape() {
        let schema = object().field(
            "apps",
            array(object().field("bundleId", string()).field("label", string().optional())),
        );
        let input = Value::object([(
            "apps",
            Value::from(vec![Value::object([("bundleId", Value::from("a.b"))])]),
        )]);

        let record = schema.parse(&input).unwrap();
        let apps: Vec<Record> = record.try_get("apps").unwrap();
        assert_eq!(apps.len(), 1);
        assert!(apps[0].is_absent("label"));
        assert_eq!(
            record.get_list("apps").and_then(|apps| apps[0].as_record()),
            Some(&apps[0])
        );
        assert!(matches!(record.field("apps"), Some(Field::List(_))));
    }

    #[test]
    fn test_debug_lists_field_names() {
        assert_eq!(
            format!("{:?}", point()),
            r#"ObjectValidator { fields: ["x", "y"] }"#
        );
    }
}
