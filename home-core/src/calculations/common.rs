//! Common utility functions for the calculators.
//!
//! This module provides shared functionality used across multiple calculator
//! modules: rounding, rate conversion, compounding and input range checks.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use super::error::{CalculationError, Constraint};

/// Number of months in a year, used for every annual-to-monthly conversion.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use home_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to a whole number using half-up rounding.
///
/// Currency in the result views is shown to the nearest dollar.
///
/// ```
/// use rust_decimal_macros::dec;
/// use home_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(2109.23)), dec!(2109));
/// assert_eq!(round_whole(dec!(333.50)), dec!(334));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// ```
/// use rust_decimal_macros::dec;
/// use home_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Converts an annual percentage rate (e.g. `6.908`) into a monthly fraction.
///
/// ```
/// use rust_decimal_macros::dec;
/// use home_core::calculations::common::monthly_rate;
///
/// assert_eq!(monthly_rate(dec!(3)), dec!(0.0025));
/// ```
pub fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(MONTHS_PER_YEAR)
}

/// Converts a whole number of years into months, failing on overflow.
pub(crate) fn months_in(
    field: &'static str,
    years: u32,
) -> Result<u32, CalculationError> {
    years
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or(CalculationError::Overflow { field })
}

/// Computes `(1 + rate)^periods`.
///
/// Fails with [`CalculationError::Overflow`] rather than panicking when the
/// power does not fit in a decimal.
pub(crate) fn compound_factor(
    field: &'static str,
    rate: Decimal,
    periods: u32,
) -> Result<Decimal, CalculationError> {
    (Decimal::ONE + rate)
        .checked_powi(i64::from(periods))
        .ok_or(CalculationError::Overflow { field })
}

/// Sums `values`, failing with [`CalculationError::Overflow`] for `field`
/// instead of panicking when the total does not fit in a decimal.
pub(crate) fn checked_sum(
    field: &'static str,
    values: impl IntoIterator<Item = Decimal>,
) -> Result<Decimal, CalculationError> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |total, value| total.checked_add(value))
        .ok_or(CalculationError::Overflow { field })
}

/// `a × b`, or [`CalculationError::Overflow`] for `field`.
pub(crate) fn checked_product(
    field: &'static str,
    a: Decimal,
    b: Decimal,
) -> Result<Decimal, CalculationError> {
    a.checked_mul(b).ok_or(CalculationError::Overflow { field })
}

pub(crate) fn ensure_positive(
    field: &'static str,
    value: Decimal,
) -> Result<Decimal, CalculationError> {
    if value <= Decimal::ZERO {
        return Err(CalculationError::invalid(field, Constraint::Positive, value));
    }
    Ok(value)
}

pub(crate) fn ensure_non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<Decimal, CalculationError> {
    if value < Decimal::ZERO {
        return Err(CalculationError::invalid(
            field,
            Constraint::NonNegative,
            value,
        ));
    }
    Ok(value)
}

pub(crate) fn ensure_percentage(
    field: &'static str,
    value: Decimal,
) -> Result<Decimal, CalculationError> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(CalculationError::invalid(
            field,
            Constraint::Percentage,
            value,
        ));
    }
    Ok(value)
}

pub(crate) fn ensure_fraction(
    field: &'static str,
    value: Decimal,
) -> Result<Decimal, CalculationError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(CalculationError::invalid(field, Constraint::Fraction, value));
    }
    Ok(value)
}
