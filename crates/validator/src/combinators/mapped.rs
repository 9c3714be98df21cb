//! MAP combinator - converts a narrowed output into a caller-defined type

use std::fmt;

use crate::foundation::traits::required_schema;
use crate::foundation::{Schema, ValidationError, ValidationErrors, Value};

/// Runs the inner validator, then converts its output with a fallible
/// function. Built with [`Schema::map`].
///
/// A conversion failure is reported like any other validation failure, so
/// `try_get` errors on a [`Record`](crate::validators::Record) keep their
/// field paths.
#[derive(Clone)]
pub struct Mapped<S, F> {
    inner: S,
    map: F,
}

impl<S, F> Mapped<S, F> {
    pub const fn new(inner: S, map: F) -> Self {
        Self { inner, map }
    }

    pub const fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S, F, T> Schema for Mapped<S, F>
where
    S: Schema,
    F: Fn(S::Output) -> Result<T, ValidationError> + Clone + Send + Sync,
{
    type Output = T;
    required_schema!();

    fn parse_option(&self, input: Option<&Value>) -> Result<T, ValidationError> {
        (self.map)(self.inner.parse_option(input)?)
    }

    fn parse_option_all(&self, input: Option<&Value>) -> Result<T, ValidationErrors> {
        let output = self.inner.parse_option_all(input)?;
        (self.map)(output).map_err(ValidationErrors::from)
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Mapped<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapped")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
