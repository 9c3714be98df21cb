//! Number validators with chained refinements

use std::borrow::Cow;
use std::sync::Arc;

use crate::foundation::traits::required_schema;
use crate::foundation::{Kind, Schema, ValidationError, Value};

// ============================================================================
// REFINEMENTS
// ============================================================================

/// A predicate layered on top of the numeric type check.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum NumberCheck {
    /// Strictly greater than zero.
    Positive,
    /// Zero or greater.
    NonNegative,
    /// No fractional part.
    Integer,
    /// At least the bound.
    Min(f64),
    /// At most the bound.
    Max(f64),
}

impl NumberCheck {
    /// Short name used as the refinement code in errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::NonNegative => "non_negative",
            Self::Integer => "integer",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
        }
    }

    /// `NaN` fails every check.
    #[must_use]
    pub fn holds(self, value: f64) -> bool {
        match self {
            Self::Positive => value > 0.0,
            Self::NonNegative => value >= 0.0,
            Self::Integer => value.is_finite() && value.fract() == 0.0,
            Self::Min(min) => value >= min,
            Self::Max(max) => value <= max,
        }
    }

    fn expected(self) -> Cow<'static, str> {
        match self {
            Self::Positive => Cow::Borrowed("a positive number"),
            Self::NonNegative => Cow::Borrowed("a non-negative number"),
            Self::Integer => Cow::Borrowed("an integer"),
            Self::Min(min) => Cow::Owned(format!("a number of at least {min}")),
            Self::Max(max) => Cow::Owned(format!("a number of at most {max}")),
        }
    }

    fn check(self, value: f64) -> Result<(), ValidationError> {
        if self.holds(value) {
            Ok(())
        } else {
            Err(ValidationError::refinement_failure(
                self.name(),
                self.expected(),
                value,
            ))
        }
    }
}

// ============================================================================
// NUMBER VALIDATOR
// ============================================================================

/// Accepts numeric inputs, then runs its refinements in the order they were
/// chained.
///
/// Refinement methods return a new validator; the receiver keeps its own
/// checks, so one base can seed several refined variants.
///
/// # Examples
///
/// ```
/// use perch_validator::prelude::*;
///
/// let base = number();
/// let width = base.positive();
///
/// assert!(base.parse(&Value::from(0)).is_ok());
/// assert!(width.parse(&Value::from(0)).is_err());
/// assert_eq!(width.parse(&Value::from(12)).unwrap(), 12.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberValidator {
    checks: Arc<[NumberCheck]>,
}

impl NumberValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a validator that also applies `check`.
    #[must_use]
    pub fn refine(&self, check: NumberCheck) -> Self {
        let checks: Vec<NumberCheck> = self.checks.iter().copied().chain([check]).collect();
        Self {
            checks: checks.into(),
        }
    }

    /// Rejects values `<= 0`.
    #[must_use]
    pub fn positive(&self) -> Self {
        self.refine(NumberCheck::Positive)
    }

    /// Rejects values `< 0`.
    #[must_use]
    pub fn non_negative(&self) -> Self {
        self.refine(NumberCheck::NonNegative)
    }

    /// Rejects values with a fractional part.
    #[must_use]
    pub fn integer(&self) -> Self {
        self.refine(NumberCheck::Integer)
    }

    /// Rejects values below `min`.
    #[must_use]
    pub fn min(&self, min: f64) -> Self {
        self.refine(NumberCheck::Min(min))
    }

    /// Rejects values above `max`.
    #[must_use]
    pub fn max(&self, max: f64) -> Self {
        self.refine(NumberCheck::Max(max))
    }

    #[must_use]
    pub fn checks(&self) -> &[NumberCheck] {
        &self.checks
    }
}

impl Schema for NumberValidator {
    type Output = f64;
    required_schema!();

    fn parse_option(&self, input: Option<&Value>) -> Result<f64, ValidationError> {
        let Some(Value::Number(value)) = input else {
            return Err(ValidationError::type_mismatch("number", Kind::of(input)));
        };
        for check in &*self.checks {
            check.check(*value)?;
        }
        Ok(*value)
    }
}

/// Creates a validator accepting any number.
#[must_use]
pub fn number() -> NumberValidator {
    NumberValidator::new()
}

// ============================================================================
// TESTS
// ============================================================================
