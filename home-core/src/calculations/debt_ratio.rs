//! Debt-to-income ratio.
//!
//! Total monthly debt payments as a percentage of total monthly income,
//! rounded to two decimal places.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::common::{checked_sum, ensure_non_negative, round_half_up};
use super::error::CalculationError;
use crate::models::{DebtRatioBand, DebtRatioInput, DebtRatioResult};

/// Computes the debt-to-income ratio from individual income and debt entries.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidInput`] if any amount is negative, and
/// [`CalculationError::DivisionByZero`] if the incomes sum to zero.
/// Returns [`CalculationError::Overflow`] if a total or the ratio does not
/// fit in a decimal.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use home_core::{CalculationError, compute_debt_ratio};
///
/// let result = compute_debt_ratio(&[dec!(4000), dec!(1000)], &[dec!(1200), dec!(600)]).unwrap();
/// assert_eq!(result.ratio_percent, dec!(36.00));
///
/// let error = compute_debt_ratio(&[], &[dec!(500)]).unwrap_err();
/// assert_eq!(error, CalculationError::DivisionByZero { field: "total_income" });
/// ```
pub fn compute_debt_ratio(
    income_amounts: &[Decimal],
    debt_amounts: &[Decimal],
) -> Result<DebtRatioResult, CalculationError> {
    for &amount in income_amounts {
        ensure_non_negative("income_amount", amount)?;
    }
    for &amount in debt_amounts {
        ensure_non_negative("debt_amount", amount)?;
    }

    let total_income = checked_sum("total_income", income_amounts.iter().copied())?;
    let total_debt = checked_sum("total_debt", debt_amounts.iter().copied())?;

    if total_income.is_zero() {
        return Err(CalculationError::DivisionByZero {
            field: "total_income",
        });
    }

    let ratio_percent = total_debt
        .checked_div(total_income)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(round_half_up)
        .ok_or(CalculationError::Overflow {
            field: "ratio_percent",
        })?;

    let band = DebtRatioBand::classify(ratio_percent);
    if band == DebtRatioBand::Dangerous {
        warn!(
            ratio_percent = %ratio_percent,
            "debt-to-income ratio is in the dangerous range"
        );
    }

    debug!(
        total_income = %total_income,
        total_debt = %total_debt,
        ratio_percent = %ratio_percent,
        band = band.label(),
        "computed debt-to-income ratio"
    );

    Ok(DebtRatioResult {
        total_income,
        total_debt,
        ratio_percent,
    })
}

impl DebtRatioInput {
    /// Runs [`compute_debt_ratio`] on this input's entries.
    pub fn compute(&self) -> Result<DebtRatioResult, CalculationError> {
        compute_debt_ratio(&self.income_amounts, &self.debt_amounts)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;
    use crate::calculations::Constraint;

    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    #[test]
    fn thirty_six_percent_is_classified_good() {
        let result = compute_debt_ratio(&[dec!(5000)], &[dec!(1800)]).unwrap();

        assert_eq!(result.total_income, dec!(5000));
        assert_eq!(result.total_debt, dec!(1800));
        assert_eq!(result.ratio_percent, dec!(36.00));
        assert_eq!(result.band(), DebtRatioBand::Good);
    }

    #[test]
    fn sums_multiple_entries() {
        let result = compute_debt_ratio(
            &[dec!(3200), dec!(850.50), dec!(0)],
            &[dec!(1400), dec!(325.25), dec!(89.99)],
        )
        .unwrap();

        assert_eq!(result.total_income, dec!(4050.50));
        assert_eq!(result.total_debt, dec!(1815.24));
        // 1815.24 / 4050.50 = 44.8152...
        assert_eq!(result.ratio_percent, dec!(44.82));
        assert_eq!(result.band(), DebtRatioBand::CauseForConcern);
    }

    #[test]
    fn ratio_is_rounded_to_two_places() {
        let result = compute_debt_ratio(&[dec!(3)], &[dec!(1)]).unwrap();

        assert_eq!(result.ratio_percent, dec!(33.33));
    }

    #[test]
    fn no_debt_gives_zero_ratio() {
        let result = compute_debt_ratio(&[dec!(6000)], &[]).unwrap();

        assert_eq!(result.ratio_percent, Decimal::ZERO);
    }

    #[test]
    fn debt_above_income_is_dangerous() {
        let _guard = init_test_tracing();

        let result = compute_debt_ratio(&[dec!(2000)], &[dec!(2500)]).unwrap();

        assert_eq!(result.ratio_percent, dec!(125.00));
        assert_eq!(result.band(), DebtRatioBand::Dangerous);
    }

    #[test]
    fn zero_income_is_division_by_zero() {
        let result = compute_debt_ratio(&[dec!(0), dec!(0)], &[dec!(1800)]);

        assert_eq!(
            result,
            Err(CalculationError::DivisionByZero {
                field: "total_income"
            })
        );
    }

    #[test]
    fn empty_income_is_division_by_zero() {
        let result = compute_debt_ratio(&[], &[]);

        assert_eq!(
            result,
            Err(CalculationError::DivisionByZero {
                field: "total_income"
            })
        );
    }

    #[test]
    fn rejects_negative_debt() {
        let result = compute_debt_ratio(&[dec!(5000)], &[dec!(-100)]);

        assert_eq!(
            result,
            Err(CalculationError::invalid(
                "debt_amount",
                Constraint::NonNegative,
                dec!(-100)
            ))
        );
    }

    #[test]
    fn income_total_too_large_is_overflow() {
        let result = compute_debt_ratio(&[Decimal::MAX, Decimal::MAX], &[dec!(1)]);

        assert_eq!(
            result,
            Err(CalculationError::Overflow {
                field: "total_income"
            })
        );
    }

    #[test]
    fn debt_total_too_large_is_overflow() {
        let result = compute_debt_ratio(&[dec!(5000)], &[Decimal::MAX, dec!(1)]);

        assert_eq!(
            result,
            Err(CalculationError::Overflow {
                field: "total_debt"
            })
        );
    }

    #[test]
    fn ratio_too_large_is_overflow() {
        let result = compute_debt_ratio(&[dec!(0.0000000001)], &[dec!(100000000000000000000)]);

        assert_eq!(
            result,
            Err(CalculationError::Overflow {
                field: "ratio_percent"
            })
        );
    }

    #[test]
    fn input_record_computes_same_result() {
        let input = DebtRatioInput {
            income_amounts: vec![dec!(5000)],
            debt_amounts: vec![dec!(1800)],
        };

        assert_eq!(
            input.compute(),
            compute_debt_ratio(&[dec!(5000)], &[dec!(1800)])
        );
    }
}
