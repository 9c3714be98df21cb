//! Built-in validators
//!
//! # Categories
//!
//! - **Literal**: exact string, number, `null` or absence ([`literal`])
//! - **Scalar**: [`number`] with chained refinements, [`string`], [`boolean`]
//! - **Callable**: [`function`]
//! - **Composite**: closed [`object`]s and [`array`]s
//!
//! # Examples
//!
//! ```
//! use perch_validator::prelude::*;
//!
//! let clock = object! {
//!     "kind" => literal("clock"),
//!     "width" => number().positive().optional(),
//!     "onClick" => function().optional(),
//! };
//! assert!(clock.parse(&Value::object([("kind", Value::from("clock"))])).is_ok());
//! ```

pub mod array;
pub mod boolean;
pub mod function;
pub mod literal;
pub mod number;
pub mod object;
pub mod record;
pub mod string;

pub use array::{ArrayValidator, array};
pub use boolean::{BooleanValidator, boolean};
pub use function::{FunctionValidator, function};
pub use literal::{Literal, LiteralValidator, literal};
pub use number::{NumberCheck, NumberValidator, number};
pub use object::{ObjectValidator, object};
pub use record::{Field, FromField, Record};
pub use string::{StringValidator, string};
