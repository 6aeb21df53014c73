use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

/// The range a numeric input field is required to fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Strictly greater than zero.
    Positive,
    /// Zero or greater.
    NonNegative,
    /// Between 0 and 100 inclusive.
    Percentage,
    /// Greater than 0 and at most 100.
    PositivePercentage,
    /// Between 0 and 1 inclusive.
    Fraction,
    /// Not larger than the named field.
    AtMost(&'static str),
}

impl fmt::Display for Constraint {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "must be positive"),
            Self::NonNegative => write!(f, "must not be negative"),
            Self::Percentage => write!(f, "must be between 0 and 100"),
            Self::PositivePercentage => write!(f, "must be greater than 0 and at most 100"),
            Self::Fraction => write!(f, "must be between 0 and 1"),
            Self::AtMost(other) => write!(f, "must not exceed {other}"),
        }
    }
}

/// Errors that can occur during any of the calculator operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// An input field is outside the range the formula requires.
    #[error("invalid {field}: {constraint}, got {value}")]
    InvalidInput {
        field: &'static str,
        constraint: Constraint,
        value: Decimal,
    },

    /// A ratio denominator summed to zero.
    #[error("division by zero: {field} is zero")]
    DivisionByZero { field: &'static str },

    /// An intermediate value does not fit in a decimal.
    #[error("{field} is too large to compute")]
    Overflow { field: &'static str },
}

impl CalculationError {
    pub(crate) fn invalid(
        field: &'static str,
        constraint: Constraint,
        value: Decimal,
    ) -> Self {
        Self::InvalidInput {
            field,
            constraint,
            value,
        }
    }

    /// Name of the input field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. }
            | Self::DivisionByZero { field }
            | Self::Overflow { field } => field,
        }
    }
}
