//! OPTIONAL combinator - accepts absence on top of a required validator

use crate::foundation::{Schema, ValidationError, ValidationErrors, Value};

/// The optional variant of a required validator.
///
/// Absence short-circuits to `Ok(None)`; any present input, `null` included,
/// goes through the inner validator unchanged. Holding an `Optional<V>` is
/// what makes the output `Option<V::Output>`: there is no flag to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    pub const fn new(inner: V) -> Self {
        Self { inner }
    }

    pub const fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Schema> Schema for Optional<V> {
    type Output = Option<V::Output>;
    type Optional = Self;

    fn parse_option(&self, input: Option<&Value>) -> Result<Self::Output, ValidationError> {
        match input {
            None => Ok(None),
            Some(value) => self.inner.parse(value).map(Some),
        }
    }

    /// Already optional: returns an equivalent copy.
    fn optional(&self) -> Self::Optional {
        self.clone()
    }

    fn parse_option_all(&self, input: Option<&Value>) -> Result<Self::Output, ValidationErrors> {
        match input {
            None => Ok(None),
            Some(value) => self.inner.parse_all(value).map(Some),
        }
    }
}

/// Wraps `validator` so it also accepts absence.
pub fn optional<V: Schema>(validator: V) -> Optional<V> {
    Optional::new(validator)
}
