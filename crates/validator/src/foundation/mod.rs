//! Core validation types and traits
//!
//! - **Traits**: [`Schema`], [`IntoField`], [`ErasedSchema`]
//! - **Input**: [`Value`], [`Callback`], [`Kind`]
//! - **Errors**: [`ValidationError`], [`ErrorKind`], [`ValidationErrors`], [`FieldPath`]

pub mod error;
pub mod traits;
pub mod value;

pub use error::{ErrorKind, FieldPath, PathSegment, ValidationError, ValidationErrors};
pub use traits::{ErasedSchema, IntoField, Schema};
pub use value::{Callback, Kind, Map, Value};

/// A parse result using the fail-fast [`ValidationError`].
pub type ParseResult<T> = Result<T, ValidationError>;

/// A parse result carrying every violation.
pub type ParseResultAll<T> = Result<T, ValidationErrors>;
