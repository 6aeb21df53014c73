//! Plain-text rendering of calculator results.
//!
//! Each report wraps a result and implements [`fmt::Display`]. Currency is
//! shown in whole dollars. Charts are listed as slice descriptors (label,
//! share, angles in radians, color) for whatever draws them.

use std::fmt;

use home_core::calculations::common::round_whole;
use home_core::{
    CalculationError, ChartSegment, ChartSlice, DebtRatioBand, DebtRatioResult,
    DownPaymentOption, MortgageResult, RenovationCatalog, RenovationResult, SavingsResult,
    debt_ratio_donut, pie_slices,
};
use rust_decimal::Decimal;

use crate::utils::{format_currency, format_percent};

const ANGLE_PLACES: u32 = 4;

fn write_slices(
    f: &mut fmt::Formatter<'_>,
    slices: &[ChartSlice],
) -> fmt::Result {
    for slice in slices {
        writeln!(
            f,
            "  {:<28} {:.4}..{:.4} rad  {}",
            slice.legend_label(),
            slice.start_angle.round_dp(ANGLE_PLACES),
            slice.end_angle.round_dp(ANGLE_PLACES),
            slice.color
        )?;
    }
    Ok(())
}

fn write_pie(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    segments: &[ChartSegment],
) -> fmt::Result {
    writeln!(f, "{title}")?;
    match pie_slices(segments) {
        Ok(slices) => write_slices(f, &slices),
        Err(CalculationError::DivisionByZero { .. }) => writeln!(f, "  (nothing to chart)"),
        Err(error) => writeln!(f, "  (chart unavailable: {error})"),
    }
}

fn whole_percent(fraction: Decimal) -> String {
    format!("{}%", round_whole(fraction * Decimal::ONE_HUNDRED))
}

// ─── mortgage ────────────────────────────────────────────────────────────────

pub struct MortgageReport<'a>(pub &'a MortgageResult);

impl fmt::Display for MortgageReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let result = self.0;

        writeln!(f, "Monthly Payment: {}", format_currency(result.total_monthly_payment))?;
        writeln!(f)?;
        writeln!(f, "{:<22} {:>12} {:>14}", "Breakdown", "Monthly", "Total")?;
        for row in result.cost_breakdown() {
            writeln!(
                f,
                "{:<22} {:>12} {:>14}",
                row.label,
                format_currency(row.monthly),
                format_currency(row.total)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Down Payment:          {}", format_currency(result.down_payment_amount))?;
        writeln!(f, "Loan Amount:           {}", format_currency(result.loan_principal))?;
        writeln!(f, "Number of Payments:    {}", result.number_of_payments)?;
        writeln!(f, "Total of Payments:     {}", format_currency(result.total_of_payments))?;
        writeln!(f, "Total Interest:        {}", format_currency(result.total_interest_paid))?;
        writeln!(f, "Payoff Date:           {}", result.payoff_label())?;
        writeln!(f)?;
        write_pie(f, "Monthly Payment Breakdown", &result.chart_segments())
    }
}

// ─── savings ─────────────────────────────────────────────────────────────────

pub struct SavingsReport<'a> {
    pub result: &'a SavingsResult,
    pub property_price: Decimal,
    pub quick_picks: &'a [DownPaymentOption],
    pub minimum_down_payment: Decimal,
}

impl fmt::Display for SavingsReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let result = self.result;

        writeln!(f, "Property Price:        {}", format_currency(self.property_price))?;
        writeln!(f, "Down Payment Goal:     {}", format_currency(result.down_payment_goal))?;
        writeln!(f, "Account:               {}", result.account_type.label())?;
        writeln!(f, "Saving Period:         {} months", result.months)?;
        writeln!(f)?;
        writeln!(
            f,
            "Required Monthly Contribution: {}",
            format_currency(result.required_monthly_contribution)
        )?;
        writeln!(
            f,
            "Without Interest:              {}",
            format_currency(result.monthly_contribution_without_interest)
        )?;
        writeln!(
            f,
            "Total Contributions:           {} ({})",
            format_currency(result.total_contributions),
            format_percent(result.contribution_percent_of_goal)
        )?;
        writeln!(
            f,
            "Interest Earned:               {} ({})",
            format_currency(result.interest_earned),
            format_percent(result.interest_percent_of_goal)
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Minimum Down Payment:  {}",
            format_currency(self.minimum_down_payment)
        )?;
        write!(f, "Quick Picks:")?;
        for option in self.quick_picks {
            write!(f, "  {}% = {}", option.percent, format_currency(option.amount))?;
        }
        writeln!(f)?;
        writeln!(f)?;
        write_pie(f, "Savings Breakdown", &result.chart_segments())
    }
}

// ─── renovation ──────────────────────────────────────────────────────────────

pub struct RenovationReport<'a>(pub &'a RenovationResult);

impl fmt::Display for RenovationReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let result = self.0;

        writeln!(f, "Current Home Value:    {}", format_currency(result.home_value))?;
        writeln!(f, "City Assessed Value:   {}", format_currency(result.city_assessed_value))?;
        writeln!(f)?;

        if result.line_items.is_empty() {
            writeln!(f, "No renovations selected.")?;
        } else {
            writeln!(
                f,
                "{:<22} {:>9} {:>6} {:>12} {:>14}",
                "Renovation", "Sq Ft", "ROI", "Cost", "Value Added"
            )?;
            for item in &result.line_items {
                writeln!(
                    f,
                    "{:<22} {:>9} {:>6} {:>12} {:>14}",
                    item.option.name,
                    item.area.normalize(),
                    whole_percent(item.option.roi_fraction),
                    format_currency(item.cost),
                    format_currency(item.value_increase)
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Total Renovation Cost: {}", format_currency(result.total_cost))?;
        writeln!(f, "Total Value Increase:  {}", format_currency(result.total_value_increase))?;
        writeln!(f, "Net Gain:              {}", format_currency(result.net_gain()))?;
        if let Some(roi) = result.overall_roi_fraction() {
            writeln!(f, "Overall ROI:           {}", whole_percent(roi))?;
        }
        writeln!(
            f,
            "New Estimated Value:   {}",
            format_currency(result.new_estimated_home_value)
        )
    }
}

// ─── debt ratio ──────────────────────────────────────────────────────────────

pub struct DebtRatioReport<'a>(pub &'a DebtRatioResult);

impl fmt::Display for DebtRatioReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let result = self.0;
        let band = result.band();
        let donut = debt_ratio_donut(result);

        writeln!(f, "Total Monthly Income:  {}", format_currency(result.total_income))?;
        writeln!(f, "Total Monthly Debt:    {}", format_currency(result.total_debt))?;
        writeln!(f, "Debt-to-Income Ratio:  {}", format_percent(result.ratio_percent))?;
        writeln!(f)?;
        writeln!(f, "{} ({})", band.label(), band.range())?;
        writeln!(f, "{}", band.guidance())?;
        writeln!(f)?;
        writeln!(f, "Ratio Bands")?;
        for &each in DebtRatioBand::all() {
            let marker = if each == band { '*' } else { ' ' };
            writeln!(f, "{marker} {:<18} {}", each.label(), each.range())?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Debt vs Income (donut, inner radius {}, centre \"{}\")",
            donut.inner_radius_ratio, donut.center_label
        )?;
        write_slices(f, &donut.slices)
    }
}

// ─── catalog ─────────────────────────────────────────────────────────────────

pub struct CatalogReport<'a>(pub &'a RenovationCatalog);

impl fmt::Display for CatalogReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{:<22} {:>12} {:>6}", "Renovation", "Cost/Sq Ft", "ROI")?;
        for option in self.0.options() {
            writeln!(
                f,
                "{:<22} {:>12} {:>6}",
                option.name,
                format!("${}", option.cost_per_square_foot.normalize()),
                whole_percent(option.roi_fraction)
            )?;
        }
        Ok(())
    }
}
