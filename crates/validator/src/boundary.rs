//! Graceful degradation at the configuration boundary
//!
//! Widget builders validate each widget's configuration on its own. A
//! rejection is reported as a [`Diagnostic`] and the builder substitutes an
//! inert placeholder, so one bad entry never takes down the whole bar.

use std::fmt;

use serde::Serialize;

use crate::foundation::{FieldPath, ParseResult, Schema, ValidationError, Value};

/// Human-readable summary of a rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Where the innermost failure happened; empty for the root value.
    pub path: FieldPath,
    /// Machine-readable code of the innermost failure.
    pub code: &'static str,
    /// Message of the innermost failure, without the path.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl From<&ValidationError> for Diagnostic {
    fn from(error: &ValidationError) -> Self {
        Self {
            path: error.path(),
            code: error.leaf().code(),
            message: error.message(),
            help: error.help().map(str::to_owned),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}", self.message)?;
        } else {
            write!(f, "{}: {}", self.path, self.message)?;
        }
        if let Some(help) = &self.help {
            write!(f, " ({help})")?;
        }
        Ok(())
    }
}

/// Parses `input` and builds from the narrowed value, or logs the rejection
/// and returns `fallback`'s placeholder instead.
///
/// # Examples
///
/// ```
/// use perch_validator::boundary::parse_or_fallback;
/// use perch_validator::prelude::*;
///
/// let width = number().positive();
/// let built = parse_or_fallback(&width, &Value::from(-3), |w| w, |_| 0.0);
/// assert_eq!(built, 0.0);
/// ```
pub fn parse_or_fallback<S, T>(
    schema: &S,
    input: &Value,
    build: impl FnOnce(S::Output) -> T,
    fallback: impl FnOnce(&Diagnostic) -> T,
) -> T
where
    S: Schema,
{
    let parsed: ParseResult<S::Output> = schema.parse(input);
    match parsed {
        Ok(value) => build(value),
        Err(error) => {
            let diagnostic = Diagnostic::from(&error);
            tracing::warn!(
                path = %diagnostic.path,
                code = diagnostic.code,
                "invalid configuration, using fallback: {}",
                diagnostic.message
            );
            fallback(&diagnostic)
        }
    }
}
