//! # perch-validator
//!
//! Runtime schema validation for untrusted, dynamically-typed configuration.
//!
//! ## Quick Start
//!
//! ```
//! use perch_validator::prelude::*;
//!
//! let clock = object! {
//!     "kind" => literal("clock"),
//!     "width" => number().positive().optional(),
//! };
//!
//! let record = clock
//!     .parse(&Value::object([("kind", Value::from("clock"))]))
//!     .unwrap();
//! assert!(record.is_absent("width"));
//!
//! let err = clock
//!     .parse(&Value::object([("kind", Value::from("clock")), ("widht", Value::from(40))]))
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "unexpected key `widht`");
//! ```
//!
//! ## Validators
//!
//! Build a validator tree once with [`literal`](validators::literal),
//! [`number`](validators::number), [`function`](validators::function),
//! [`object`](validators::object) (or [`object!`]), [`string`](validators::string),
//! [`boolean`](validators::boolean) and [`array`](validators::array), then
//! call [`Schema::parse`](foundation::Schema::parse) as often as needed, from
//! any thread.
//!
//! Every validator has an [`optional`](foundation::Schema::optional) variant
//! whose output is wrapped in `Option`. Absence means a missing input, never
//! `null`.
//!
//! ## Errors
//!
//! [`parse`](foundation::Schema::parse) stops at the first violation;
//! [`parse_all`](foundation::Schema::parse_all) reports all of them. Either
//! way each error knows its field path (`apps[0].bundleId`). See
//! [`boundary`] for turning a rejection into a fallback widget.

// ValidationError carries its kind inline; boxing it would add an indirection
// to every failing parse for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod boundary;
pub mod combinators;
pub mod foundation;
#[cfg(feature = "json")]
pub mod json;
mod macros;
pub mod prelude;
pub mod validators;
