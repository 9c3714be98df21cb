//! Error types for validation failures
//!
//! A [`ValidationError`] wraps an [`ErrorKind`]. Failures inside objects and
//! arrays are wrapped in [`ErrorKind::FieldFailure`] once per level, so the
//! full field path (`apps[0].bundleId`) can be recovered from any error with
//! [`ValidationError::path`] while the innermost cause stays available through
//! [`ValidationError::leaf`].
//!
//! Human-readable strings use `Cow<'static, str>` so the common case of a
//! static expectation ("number", "a positive number") does not allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::foundation::value::Kind;
use crate::validators::Literal;

// ============================================================================
// FIELD PATH
// ============================================================================

/// One step of a field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Object field name.
    Key(String),
    /// Array element index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Trail of segments from the root input to a failing value.
///
/// Renders as `apps[0].bundleId`; the root path renders as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(SmallVec<[PathSegment; 4]>);

impl FieldPath {
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i > 0 => write!(f, ".{key}")?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// ERROR KIND
// ============================================================================

/// What went wrong.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input's runtime kind is not the one the validator expects.
    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        expected: Cow<'static, str>,
        actual: Kind,
    },

    /// The input has the literal's kind but a different value.
    #[error("expected {expected}, got {actual}")]
    LiteralMismatch { expected: Literal, actual: Literal },

    /// The input passed the base type check but not a refinement.
    #[error("expected {expected}, got {actual}")]
    RefinementFailure {
        refinement: &'static str,
        expected: Cow<'static, str>,
        actual: String,
    },

    /// An object input carries a key the schema does not declare.
    #[error("unexpected key `{key}`")]
    UnexpectedKey { key: String },

    /// A field or element validator failed.
    #[error("invalid value at `{field}`: {error}")]
    FieldFailure {
        field: PathSegment,
        #[source]
        error: Box<ValidationError>,
    },
}

impl ErrorKind {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::LiteralMismatch { .. } => "literal_mismatch",
            Self::RefinementFailure { .. } => "refinement_failure",
            Self::UnexpectedKey { .. } => "unexpected_key",
            Self::FieldFailure { .. } => "field_failure",
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A validation failure.
///
/// # Examples
///
/// ```
/// use perch_validator::prelude::*;
///
/// let schema = object! { "apps" => array(object! { "bundleId" => string() }) };
/// let input = Value::object([(
///     "apps",
///     Value::from(vec![Value::object([("bundleId", Value::from(7))])]),
/// )]);
///
/// let error = schema.parse(&input).unwrap_err();
/// assert_eq!(error.path().to_string(), "apps[0].bundleId");
/// assert_eq!(error.leaf().code(), "type_mismatch");
/// assert_eq!(error.to_string(), "apps[0].bundleId: expected string, got number");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    kind: ErrorKind,
    help: Option<Cow<'static, str>>,
}

impl ValidationError {
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind, help: None }
    }

    pub fn type_mismatch(expected: impl Into<Cow<'static, str>>, actual: Kind) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            expected: expected.into(),
            actual,
        })
    }

    #[must_use]
    pub const fn literal_mismatch(expected: Literal, actual: Literal) -> Self {
        Self::new(ErrorKind::LiteralMismatch { expected, actual })
    }

    pub fn refinement_failure(
        refinement: &'static str,
        expected: impl Into<Cow<'static, str>>,
        actual: impl fmt::Display,
    ) -> Self {
        Self::new(ErrorKind::RefinementFailure {
            refinement,
            expected: expected.into(),
            actual: actual.to_string(),
        })
    }

    pub fn unexpected_key(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnexpectedKey { key: key.into() })
    }

    /// Wraps this error as the failure of `field` one level up.
    #[must_use]
    pub fn in_field(self, field: impl Into<PathSegment>) -> Self {
        Self::new(ErrorKind::FieldFailure {
            field: field.into(),
            error: Box::new(self),
        })
    }

    /// Adds help text or a suggestion.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_help(mut self, help: impl Into<Cow<'static, str>>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Help text of the innermost error that carries one.
    #[must_use]
    pub fn help(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::FieldFailure { error, .. } => error.help().or(self.help.as_deref()),
            _ => self.help.as_deref(),
        }
    }

    /// The innermost non-field error.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        let mut current = self;
        while let ErrorKind::FieldFailure { error, .. } = &current.kind {
            current = error;
        }
        current
    }

    /// Field path from the root input to [`leaf`](Self::leaf).
    #[must_use]
    pub fn path(&self) -> FieldPath {
        let mut path = FieldPath::root();
        let mut current = self;
        while let ErrorKind::FieldFailure { field, error } = &current.kind {
            path.push(field.clone());
            current = error;
        }
        path
    }

    /// Message of the leaf error without the path.
    #[must_use]
    pub fn message(&self) -> String {
        self.leaf().kind.to_string()
    }
}

impl From<ErrorKind> for ValidationError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path();
        if path.is_root() {
            write!(f, "{}", self.leaf().kind)
        } else {
            write!(f, "{path}: {}", self.leaf().kind)
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::FieldFailure { error, .. } => Some(error.as_ref()),
            _ => None,
        }
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Every violation found by an aggregating parse, in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Appends `other`, wrapping each of its errors as a failure of `field`.
    pub fn extend_in_field(&mut self, field: &PathSegment, other: Self) {
        self.errors
            .extend(other.errors.into_iter().map(|e| e.in_field(field.clone())));
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The first violation, i.e. the one a fail-fast parse reports.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_error_has_empty_path() {
        let error = ValidationError::type_mismatch("number", Kind::String);
        assert!(error.path().is_root());
        assert_eq!(error.to_string(), "expected number, got string");
        assert_eq!(error.code(), "type_mismatch");
    }

    #[test]
    fn nested_field_failures_build_a_path() {
        let error = ValidationError::type_mismatch("string", Kind::Number)
            .in_field("bundleId")
            .in_field(0)
            .in_field("apps");

        assert_eq!(error.code(), "field_failure");
        assert_eq!(error.leaf().code(), "type_mismatch");
        assert_eq!(error.path().to_string(), "apps[0].bundleId");
        assert_eq!(error.path().len(), 3);
        assert_eq!(
            error.to_string(),
            "apps[0].bundleId: expected string, got number"
        );
    }

    #[test]
    fn leading_index_renders_without_dot() {
        let error = ValidationError::unexpected_key("x").in_field("y").in_field(2);
        assert_eq!(error.path().to_string(), "[2].y");
    }

    #[test]
    fn source_chain_follows_fields() {
        use std::error::Error as _;

        let error = ValidationError::unexpected_key("b").in_field("a");
        let source = error.source().expect("field failure has a source");
        assert_eq!(source.to_string(), "unexpected key `b`");
    }

    #[test]
    fn help_is_taken_from_the_innermost_error() {
        let error = ValidationError::unexpected_key("colour")
            .with_help("did you mean `color`?")
            .in_field("theme");
        assert_eq!(error.help(), Some("did you mean `color`?"));
    }

    #[test]
    fn static_expectations_do_not_allocate() {
        let error = ValidationError::type_mismatch("number", Kind::Null);
        let ErrorKind::TypeMismatch { expected, .. } = error.kind() else {
            panic!("expected a type mismatch");
        };
        assert!(matches!(expected, Cow::Borrowed(_)));
    }

    #[test]
    fn error_collection() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());
        errors.add(ValidationError::unexpected_key("a"));
        errors.extend_in_field(
            &PathSegment::from("server"),
            ValidationErrors::from(ValidationError::unexpected_key("b")),
        );

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.errors()[1].path().to_string(), "server");
        assert_eq!(errors.first().map(ValidationError::code), Some("unexpected_key"));
        assert!(errors.to_string().contains("2 error(s)"));
    }

    #[test]
    fn into_result_on_empty_is_ok() {
        assert_eq!(ValidationErrors::new().into_result(5), Ok(5));
    }
}
