//! `serde_json` interop.
//!
//! Configuration usually arrives as JSON. This module converts
//! `serde_json::Value` into the validator input [`Value`] and renders
//! validation failures as JSON for structured diagnostics.
//!
//! # Examples
//!
//! ```
//! use perch_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = object! { "size" => number().positive() };
//! let input = Value::from(json!({ "size": 0 }));
//!
//! let err = schema.parse(&input).unwrap_err();
//! assert_eq!(
//!     err.to_json_value(),
//!     json!({
//!         "code": "refinement_failure",
//!         "path": "size",
//!         "message": "expected a positive number, got 0",
//!         "help": null,
//!     })
//! );
//! ```

use crate::foundation::{ValidationError, ValidationErrors, Value};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(number_to_f64(&n)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

/// `as_f64` only fails under `arbitrary_precision`, for numbers beyond the
/// `f64` range. Those saturate to the infinity of the same sign so the value
/// is still a number.
fn number_to_f64(n: &serde_json::Number) -> f64 {
    n.as_f64().unwrap_or_else(|| saturate(&n.to_string()))
}

fn saturate(text: &str) -> f64 {
    text.parse().unwrap_or(if text.starts_with('-') {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    })
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Self::from(value.clone())
    }
}

impl Value {
    /// Parses JSON text into a validator input.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<serde_json::Value>(text).map(Self::from)
    }
}

impl ValidationError {
    /// Renders the error as `{code, path, message, help}`, describing the
    /// innermost failure.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.leaf().code(),
            "path": self.path().to_string(),
            "message": self.message(),
            "help": self.help(),
        })
    }
}

impl ValidationErrors {
    /// Renders every error as with [`ValidationError::to_json_value`].
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(self.iter().map(ValidationError::to_json_value).collect())
    }
}
