//! Prelude module for convenient imports.
//!
//! ```
//! use perch_validator::prelude::*;
//!
//! let schema = object! { "size" => number().positive() };
//! assert!(schema.parse(&Value::object([("size", Value::from(3))])).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, input values, errors
// ============================================================================

pub use crate::foundation::{
    Callback, ErrorKind, FieldPath, IntoField, Kind, Map, PathSegment, Schema, ValidationError,
    ValidationErrors, Value,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    ArrayValidator, BooleanValidator, Field, FromField, FunctionValidator, Literal,
    LiteralValidator, NumberCheck, NumberValidator, ObjectValidator, Record, StringValidator, array,
    boolean, function, literal, number, object, string,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{Mapped, Optional, optional};

// ============================================================================
// BOUNDARY
// ============================================================================

pub use crate::boundary::{Diagnostic, parse_or_fallback};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::object;
