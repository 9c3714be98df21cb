//! Combinators layered on top of the built-in validators.

pub mod mapped;
pub mod optional;

pub use mapped::Mapped;
pub use optional::{Optional, optional};
