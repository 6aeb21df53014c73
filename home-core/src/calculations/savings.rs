//! Down payment savings projection.
//!
//! Solves the future-value-of-annuity formula for the level monthly deposit
//! that grows to a down payment goal over the saving period:
//!
//! ```text
//! contribution = goal × r / ((1 + r)^m − 1)      (r > 0)
//! contribution = goal / m                         (r = 0)
//! ```
//!
//! where `r` is the monthly rate and `m` the number of months. Whatever the
//! deposits do not cover is interest earned.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use home_core::calculations::common::round_half_up;
//! use home_core::{SavingsAccountType, SavingsInput, compute_savings_plan};
//!
//! let input = SavingsInput {
//!     property_price: dec!(400000),
//!     down_payment_percent: dec!(20),
//!     saving_years: 5,
//!     annual_interest_rate_percent: dec!(3),
//!     account_type: SavingsAccountType::Hisa,
//! };
//!
//! let result = compute_savings_plan(&input).unwrap();
//!
//! assert_eq!(result.down_payment_goal, dec!(80000));
//! assert_eq!(result.months, 60);
//! assert_eq!(round_half_up(result.required_monthly_contribution), dec!(1237.50));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::common::{
    checked_product, compound_factor, ensure_non_negative, ensure_positive, monthly_rate, months_in,
};
use super::error::{CalculationError, Constraint};
use crate::models::{DownPaymentOption, SavingsInput, SavingsResult};

/// Quick-pick down payment percentages offered on the property form.
const QUICK_PICK_PERCENTS: [i64; 4] = [5, 10, 15, 20];

/// Computes the monthly deposit needed to reach the down payment goal.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidInput`] if:
/// - `property_price` is not positive
/// - `down_payment_percent` is not in (0, 100]
/// - `saving_years` is zero
/// - `annual_interest_rate_percent` is negative
///
/// Returns [`CalculationError::Overflow`] if the compounding factor or the
/// contribution total does not fit in a decimal.
pub fn compute_savings_plan(input: &SavingsInput) -> Result<SavingsResult, CalculationError> {
    validate(input)?;

    let down_payment_goal = input.down_payment_goal();
    let months = months_in("saving_years", input.saving_years)?;
    let rate = monthly_rate(input.annual_interest_rate_percent);

    let monthly_contribution_without_interest = down_payment_goal / Decimal::from(months);
    let required_monthly_contribution = if rate.is_zero() {
        warn!(
            down_payment_goal = %down_payment_goal,
            months,
            "interest rate is zero; savings earn no interest"
        );
        monthly_contribution_without_interest
    } else {
        annuity_payment(down_payment_goal, rate, months)?
    };

    let total_contributions = checked_product(
        "total_contributions",
        required_monthly_contribution,
        Decimal::from(months),
    )?;
    let interest_earned = down_payment_goal - total_contributions;
    let contribution_percent_of_goal = share_of_goal(total_contributions, down_payment_goal);
    let interest_percent_of_goal = share_of_goal(interest_earned, down_payment_goal);

    debug!(
        down_payment_goal = %down_payment_goal,
        months,
        required_monthly_contribution = %required_monthly_contribution,
        interest_earned = %interest_earned,
        "computed savings plan"
    );

    Ok(SavingsResult {
        down_payment_goal,
        months,
        required_monthly_contribution,
        monthly_contribution_without_interest,
        total_contributions,
        interest_earned,
        contribution_percent_of_goal,
        interest_percent_of_goal,
        account_type: input.account_type,
    })
}

fn validate(input: &SavingsInput) -> Result<(), CalculationError> {
    ensure_positive("property_price", input.property_price)?;
    if input.down_payment_percent <= Decimal::ZERO
        || input.down_payment_percent > Decimal::ONE_HUNDRED
    {
        return Err(CalculationError::invalid(
            "down_payment_percent",
            Constraint::PositivePercentage,
            input.down_payment_percent,
        ));
    }
    if input.saving_years == 0 {
        return Err(CalculationError::invalid(
            "saving_years",
            Constraint::Positive,
            Decimal::ZERO,
        ));
    }
    ensure_non_negative(
        "annual_interest_rate_percent",
        input.annual_interest_rate_percent,
    )?;
    Ok(())
}

/// Level deposit whose future value after `months` deposits equals `goal`.
fn annuity_payment(
    goal: Decimal,
    rate: Decimal,
    months: u32,
) -> Result<Decimal, CalculationError> {
    let factor = compound_factor("annual_interest_rate_percent", rate, months)?;
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Ok(goal / Decimal::from(months));
    }

    goal.checked_mul(rate)
        .and_then(|numerator| numerator.checked_div(denominator))
        .ok_or(CalculationError::Overflow {
            field: "required_monthly_contribution",
        })
}

fn share_of_goal(
    part: Decimal,
    goal: Decimal,
) -> Decimal {
    part / goal * Decimal::ONE_HUNDRED
}

/// The 5/10/15/20% quick-pick down payments for a property price.
///
/// ```
/// use rust_decimal_macros::dec;
/// use home_core::down_payment_options;
///
/// let options = down_payment_options(dec!(400000));
///
/// assert_eq!(options.len(), 4);
/// assert_eq!(options[0].amount, dec!(20000));
/// assert_eq!(options[3].amount, dec!(80000));
/// ```
pub fn down_payment_options(property_price: Decimal) -> Vec<DownPaymentOption> {
    QUICK_PICK_PERCENTS
        .iter()
        .map(|&percent| {
            let percent = Decimal::from(percent);
            DownPaymentOption {
                percent,
                amount: property_price * (percent / Decimal::ONE_HUNDRED),
            }
        })
        .collect()
}

/// Smallest down payment lenders accept in Canada for a property price.
///
/// - under $1,000,000: 5% of the first $500,000 plus 10% of the portion above
/// - $1,000,000 or more: 20% of the full price
///
/// # Errors
///
/// Returns [`CalculationError::InvalidInput`] if the price is not positive.
///
/// ```
/// use rust_decimal_macros::dec;
/// use home_core::minimum_down_payment;
///
/// assert_eq!(minimum_down_payment(dec!(400000)).unwrap(), dec!(20000));
/// assert_eq!(minimum_down_payment(dec!(700000)).unwrap(), dec!(45000));
/// assert_eq!(minimum_down_payment(dec!(1200000)).unwrap(), dec!(240000));
/// ```
pub fn minimum_down_payment(property_price: Decimal) -> Result<Decimal, CalculationError> {
    ensure_positive("property_price", property_price)?;

    let first_tier_limit = Decimal::from(500_000);
    let insured_limit = Decimal::from(1_000_000);
    let five_percent = Decimal::new(5, 2);
    let ten_percent = Decimal::new(10, 2);

    if property_price >= insured_limit {
        return Ok(property_price * Decimal::new(20, 2));
    }
    if property_price <= first_tier_limit {
        return Ok(property_price * five_percent);
    }
    Ok(first_tier_limit * five_percent + (property_price - first_tier_limit) * ten_percent)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;
    use crate::calculations::common::round_half_up;
    use crate::models::SavingsAccountType;

    /// The savings form's default values.
    fn test_input() -> SavingsInput {
        SavingsInput {
            property_price: dec!(400000),
            down_payment_percent: dec!(20),
            saving_years: 5,
            annual_interest_rate_percent: dec!(3),
            account_type: SavingsAccountType::Hisa,
        }
    }

    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // compute_savings_plan tests
    // =========================================================================

    #[test]
    fn default_scenario_contribution_and_interest() {
        let result = compute_savings_plan(&test_input()).unwrap();

        assert_eq!(result.down_payment_goal, dec!(80000));
        assert_eq!(result.months, 60);
        assert_eq!(
            round_half_up(result.required_monthly_contribution),
            dec!(1237.50)
        );
        assert_eq!(round_half_up(result.total_contributions), dec!(74249.72));
        assert_eq!(round_half_up(result.interest_earned), dec!(5750.28));
    }

    #[test]
    fn default_scenario_without_interest_figure() {
        let result = compute_savings_plan(&test_input()).unwrap();

        assert_eq!(
            round_half_up(result.monthly_contribution_without_interest),
            dec!(1333.33)
        );
    }

    #[test]
    fn percent_shares_sum_to_one_hundred() {
        let tolerance = dec!(0.000000001);

        for (years, rate) in [(1, dec!(0.1)), (5, dec!(3)), (10, dec!(7.5)), (30, dec!(20))] {
            let input = SavingsInput {
                saving_years: years,
                annual_interest_rate_percent: rate,
                ..test_input()
            };

            let result = compute_savings_plan(&input).unwrap();
            let sum = result.contribution_percent_of_goal + result.interest_percent_of_goal;

            assert!(
                (sum - Decimal::ONE_HUNDRED).abs() <= tolerance,
                "years {years}, rate {rate}: sum was {sum}"
            );
        }
    }

    #[test]
    fn zero_rate_means_no_interest() {
        let _guard = init_test_tracing();
        let input = SavingsInput {
            annual_interest_rate_percent: dec!(0),
            ..test_input()
        };

        let result = compute_savings_plan(&input).unwrap();

        // 80000 / 60 repeats, so totals are exact only after rounding.
        assert_eq!(round_half_up(result.total_contributions), dec!(80000));
        assert_eq!(round_half_up(result.interest_earned), Decimal::ZERO);
        assert_eq!(round_half_up(result.contribution_percent_of_goal), dec!(100));
        assert_eq!(round_half_up(result.interest_percent_of_goal), Decimal::ZERO);
        assert_eq!(
            result.required_monthly_contribution,
            result.monthly_contribution_without_interest
        );
    }

    #[test]
    fn interest_lowers_required_contribution() {
        let result = compute_savings_plan(&test_input()).unwrap();

        assert!(result.required_monthly_contribution < result.monthly_contribution_without_interest);
        assert!(result.interest_earned > Decimal::ZERO);
    }

    #[test]
    fn account_type_is_carried_through() {
        let input = SavingsInput {
            account_type: SavingsAccountType::Fhsa,
            ..test_input()
        };

        let result = compute_savings_plan(&input).unwrap();

        assert_eq!(result.account_type, SavingsAccountType::Fhsa);
    }

    #[test]
    fn rejects_zero_saving_years() {
        let input = SavingsInput {
            saving_years: 0,
            ..test_input()
        };

        assert_eq!(
            compute_savings_plan(&input),
            Err(CalculationError::invalid(
                "saving_years",
                Constraint::Positive,
                Decimal::ZERO
            ))
        );
    }

    #[test]
    fn rejects_non_positive_property_price() {
        let input = SavingsInput {
            property_price: dec!(-1),
            ..test_input()
        };

        assert_eq!(
            compute_savings_plan(&input),
            Err(CalculationError::invalid(
                "property_price",
                Constraint::Positive,
                dec!(-1)
            ))
        );
    }

    #[test]
    fn rejects_zero_down_payment_percent() {
        let input = SavingsInput {
            down_payment_percent: dec!(0),
            ..test_input()
        };

        assert_eq!(
            compute_savings_plan(&input),
            Err(CalculationError::invalid(
                "down_payment_percent",
                Constraint::PositivePercentage,
                dec!(0)
            ))
        );
    }

    #[test]
    fn rejects_negative_rate() {
        let input = SavingsInput {
            annual_interest_rate_percent: dec!(-0.5),
            ..test_input()
        };

        let error = compute_savings_plan(&input).unwrap_err();

        assert_eq!(error.field(), "annual_interest_rate_percent");
    }

    // =========================================================================
    // down payment helpers
    // =========================================================================

    #[test]
    fn down_payment_options_cover_quick_picks() {
        let options = down_payment_options(dec!(400000));

        let percents: Vec<Decimal> = options.iter().map(|option| option.percent).collect();
        assert_eq!(percents, vec![dec!(5), dec!(10), dec!(15), dec!(20)]);
        assert_eq!(options[1].amount, dec!(40000));
        assert_eq!(options[2].amount, dec!(60000));
    }

    #[test]
    fn minimum_down_payment_at_first_tier_limit() {
        assert_eq!(minimum_down_payment(dec!(500000)), Ok(dec!(25000)));
    }

    #[test]
    fn minimum_down_payment_just_below_one_million() {
        // 25,000 + 10% × 499,999
        assert_eq!(minimum_down_payment(dec!(999999)), Ok(dec!(74999.90)));
    }

    #[test]
    fn minimum_down_payment_at_one_million_is_twenty_percent() {
        assert_eq!(minimum_down_payment(dec!(1000000)), Ok(dec!(200000)));
    }

    #[test]
    fn minimum_down_payment_rejects_zero_price() {
        assert_eq!(
            minimum_down_payment(dec!(0)),
            Err(CalculationError::invalid(
                "property_price",
                Constraint::Positive,
                dec!(0)
            ))
        );
    }
}
