//! Fixed-rate mortgage payment calculations.
//!
//! Computes the level monthly principal and interest payment with the
//! standard amortization formula, adds the escrow-like monthly costs
//! (property tax, insurance, PMI, HOA, other), and projects lifetime totals
//! and the payoff date.
//!
//! | Quantity | Formula |
//! |----------|---------|
//! | Loan principal `P` | home price − down payment |
//! | Monthly rate `r` | annual rate / 100 / 12 |
//! | Payments `n` | term years × 12 |
//! | Principal & interest | `P·r·(1+r)^n / ((1+r)^n − 1)`, or `P / n` when `r = 0` |
//! | Property tax | home price × tax % / 100 / 12 |
//! | Home insurance | annual premium / 12 |
//! | Other costs | (PMI + HOA × 12 + other) / 12 |
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use home_core::calculations::common::round_half_up;
//! use home_core::{DownPayment, MortgageInput, compute_mortgage};
//!
//! let input = MortgageInput {
//!     home_price: dec!(400000),
//!     down_payment: DownPayment::Percent(dec!(20)),
//!     loan_term_years: 30,
//!     annual_interest_rate_percent: dec!(6.908),
//!     annual_property_tax_percent: dec!(1.2),
//!     annual_home_insurance: dec!(1500),
//!     annual_pmi: dec!(0),
//!     monthly_hoa: dec!(0),
//!     annual_other_costs: dec!(4000),
//!     start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
//! };
//!
//! let result = compute_mortgage(&input).unwrap();
//!
//! assert_eq!(result.loan_principal, dec!(320000));
//! assert_eq!(round_half_up(result.monthly_principal_and_interest), dec!(2109.23));
//! assert_eq!(result.monthly_property_tax, dec!(400));
//! assert_eq!(result.payoff_date, NaiveDate::from_ymd_opt(2055, 3, 1).unwrap());
//! ```

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::common::{
    MONTHS_PER_YEAR, checked_product, checked_sum, compound_factor, ensure_non_negative,
    ensure_percentage, ensure_positive, monthly_rate, months_in,
};
use super::error::{CalculationError, Constraint};
use crate::models::{DownPayment, MortgageInput, MortgageResult};

/// Computes the monthly payment breakdown and lifetime totals for a mortgage.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidInput`] if:
/// - `home_price` is not positive
/// - `loan_term_years` is zero
/// - a percentage down payment is outside 0–100, or an amount down payment
///   is negative or exceeds the home price
/// - any rate or cost field is negative
///
/// Returns [`CalculationError::Overflow`] if the compounding factor for the
/// given rate and term, or any monthly or lifetime total, does not fit in a
/// decimal.
pub fn compute_mortgage(input: &MortgageInput) -> Result<MortgageResult, CalculationError> {
    validate(input)?;

    let number_of_payments = months_in("loan_term_years", input.loan_term_years)?;
    let down_payment_amount = input.down_payment.amount_for(input.home_price);
    let loan_principal = input.home_price - down_payment_amount;
    let rate = monthly_rate(input.annual_interest_rate_percent);

    let monthly_principal_and_interest =
        principal_and_interest(loan_principal, rate, number_of_payments)?;
    let monthly_property_tax =
        monthly_property_tax(input.home_price, input.annual_property_tax_percent)?;
    let monthly_home_insurance = input.annual_home_insurance / Decimal::from(MONTHS_PER_YEAR);
    let monthly_other_costs =
        monthly_other_costs(input.annual_pmi, input.monthly_hoa, input.annual_other_costs)?;

    let total_monthly_payment = checked_sum(
        "total_monthly_payment",
        [
            monthly_principal_and_interest,
            monthly_property_tax,
            monthly_home_insurance,
            monthly_other_costs,
        ],
    )?;

    let payments = Decimal::from(number_of_payments);
    let total_of_payments =
        checked_product("total_of_payments", monthly_principal_and_interest, payments)?;

    // Lifetime total behind `cost_breakdown` and `total_out_of_pocket`.
    let monthly_escrow_costs = checked_sum(
        "total_out_of_pocket",
        [monthly_property_tax, monthly_home_insurance, monthly_other_costs],
    )?;
    let lifetime_escrow_costs =
        checked_product("total_out_of_pocket", monthly_escrow_costs, payments)?;
    checked_sum("total_out_of_pocket", [total_of_payments, lifetime_escrow_costs])?;

    let total_interest_paid = total_of_payments - loan_principal;
    let payoff_date = payoff_date(input.start_date, number_of_payments)?;

    debug!(
        loan_principal = %loan_principal,
        monthly_rate = %rate,
        number_of_payments,
        total_monthly_payment = %total_monthly_payment,
        "computed mortgage payment"
    );

    Ok(MortgageResult {
        monthly_principal_and_interest,
        monthly_property_tax,
        monthly_home_insurance,
        monthly_other_costs,
        total_monthly_payment,
        loan_principal,
        down_payment_amount,
        total_of_payments,
        total_interest_paid,
        payoff_date,
        number_of_payments,
    })
}

fn validate(input: &MortgageInput) -> Result<(), CalculationError> {
    ensure_positive("home_price", input.home_price)?;
    if input.loan_term_years == 0 {
        return Err(CalculationError::invalid(
            "loan_term_years",
            Constraint::Positive,
            Decimal::ZERO,
        ));
    }

    match input.down_payment {
        DownPayment::Percent(percent) => {
            ensure_percentage("down_payment_percent", percent)?;
        }
        DownPayment::Amount(amount) => {
            ensure_non_negative("down_payment_amount", amount)?;
            if amount > input.home_price {
                return Err(CalculationError::invalid(
                    "down_payment_amount",
                    Constraint::AtMost("home_price"),
                    amount,
                ));
            }
        }
    }

    ensure_non_negative(
        "annual_interest_rate_percent",
        input.annual_interest_rate_percent,
    )?;
    ensure_non_negative(
        "annual_property_tax_percent",
        input.annual_property_tax_percent,
    )?;
    ensure_non_negative("annual_home_insurance", input.annual_home_insurance)?;
    ensure_non_negative("annual_pmi", input.annual_pmi)?;
    ensure_non_negative("monthly_hoa", input.monthly_hoa)?;
    ensure_non_negative("annual_other_costs", input.annual_other_costs)?;
    Ok(())
}

/// Level monthly principal and interest payment.
///
/// The amortization formula's denominator `(1+r)^n − 1` is zero when the rate
/// is zero, so a zero rate repays the principal in equal installments.
fn principal_and_interest(
    principal: Decimal,
    rate: Decimal,
    payments: u32,
) -> Result<Decimal, CalculationError> {
    let straight_line = principal / Decimal::from(payments);

    if rate.is_zero() {
        warn!(
            principal = %principal,
            payments,
            "interest rate is zero; repaying principal in equal installments"
        );
        return Ok(straight_line);
    }

    let factor = compound_factor("annual_interest_rate_percent", rate, payments)?;
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        // Rate too small to register in (1+r)^n at decimal precision.
        return Ok(straight_line);
    }

    principal
        .checked_mul(rate)
        .and_then(|scaled| scaled.checked_mul(factor))
        .and_then(|numerator| numerator.checked_div(denominator))
        .ok_or(CalculationError::Overflow {
            field: "monthly_principal_and_interest",
        })
}

fn monthly_property_tax(
    home_price: Decimal,
    annual_tax_percent: Decimal,
) -> Result<Decimal, CalculationError> {
    let annual_tax = checked_product(
        "monthly_property_tax",
        home_price,
        annual_tax_percent / Decimal::ONE_HUNDRED,
    )?;
    Ok(annual_tax / Decimal::from(MONTHS_PER_YEAR))
}

/// PMI, HOA and other costs combined into one monthly amount.
fn monthly_other_costs(
    annual_pmi: Decimal,
    monthly_hoa: Decimal,
    annual_other_costs: Decimal,
) -> Result<Decimal, CalculationError> {
    let months = Decimal::from(MONTHS_PER_YEAR);
    let annual_hoa = checked_product("monthly_other_costs", monthly_hoa, months)?;
    let annual_total = checked_sum(
        "monthly_other_costs",
        [annual_pmi, annual_hoa, annual_other_costs],
    )?;
    Ok(annual_total / months)
}

/// Start date advanced by whole calendar months.
///
/// When the start day does not exist in the payoff month (e.g. the 31st),
/// the date is clamped to that month's last day.
fn payoff_date(
    start_date: NaiveDate,
    payments: u32,
) -> Result<NaiveDate, CalculationError> {
    let payoff = start_date
        .checked_add_months(Months::new(payments))
        .ok_or(CalculationError::Overflow {
            field: "payoff_date",
        })?;

    if payoff.day() != start_date.day() {
        warn!(
            start_date = %start_date,
            payoff_date = %payoff,
            "start day does not exist in payoff month; using last day of month"
        );
    }

    Ok(payoff)
}
