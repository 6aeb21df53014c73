//! Pie and donut chart geometry.
//!
//! Maps labelled values to slice descriptors (start and end angle, color,
//! share of the whole) so a rendering layer only has to draw arcs. Angles are
//! in radians, start at 0 and grow in drawing order; the last slice always
//! ends exactly at 2π.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{checked_sum, ensure_non_negative, max, round_whole};
use super::error::CalculationError;
use crate::models::{DebtRatioResult, MortgageResult, SavingsResult};

/// Default slice colors, in order.
pub const CHART_COLORS: [&str; 5] = [
    "hsl(12 76% 61%)",
    "hsl(173 58% 39%)",
    "hsl(197 37% 24%)",
    "hsl(43 74% 66%)",
    "hsl(27 87% 67%)",
];

const DEBT_COLOR: &str = "#171717";
const REMAINING_INCOME_COLOR: &str = "#e5e5e5";

/// A labelled value to be drawn as one slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSegment {
    pub label: String,
    pub value: Decimal,
    pub color: String,
}

impl ChartSegment {
    pub fn new(
        label: impl Into<String>,
        value: Decimal,
        color: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// Geometry of one pie slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: Decimal,
    pub color: String,
    pub start_angle: Decimal,
    pub end_angle: Decimal,

    /// Share of the total as a whole percentage, for legend labels.
    pub share_percent: Decimal,
}

impl ChartSlice {
    pub fn sweep(&self) -> Decimal {
        self.end_angle - self.start_angle
    }

    /// Legend text, e.g. `Property Taxes (13%)`.
    pub fn legend_label(&self) -> String {
        format!("{} ({}%)", self.label, self.share_percent)
    }
}

/// A donut: pie slices with a hole and a label in the middle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonutChart {
    pub slices: Vec<ChartSlice>,

    /// Inner radius as a fraction of the outer radius.
    pub inner_radius_ratio: Decimal,

    pub center_label: String,
}

/// Converts segments into slices proportional to their values.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidInput`] for a negative value,
/// [`CalculationError::DivisionByZero`] when all values are zero and
/// [`CalculationError::Overflow`] when the values sum past the decimal range.
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use home_core::{ChartSegment, pie_slices};
///
/// let slices = pie_slices(&[
///     ChartSegment::new("A", dec!(3), "red"),
///     ChartSegment::new("B", dec!(1), "blue"),
/// ])
/// .unwrap();
///
/// assert_eq!(slices[0].share_percent, dec!(75));
/// assert_eq!(slices[1].end_angle, Decimal::TWO_PI);
/// ```
pub fn pie_slices(segments: &[ChartSegment]) -> Result<Vec<ChartSlice>, CalculationError> {
    for segment in segments {
        ensure_non_negative("chart_value", segment.value)?;
    }

    let total = checked_sum("chart_total", segments.iter().map(|segment| segment.value))?;
    if total.is_zero() {
        return Err(CalculationError::DivisionByZero {
            field: "chart_total",
        });
    }

    let mut slices = Vec::with_capacity(segments.len());
    let mut start_angle = Decimal::ZERO;
    let mut running_total = Decimal::ZERO;

    for (index, segment) in segments.iter().enumerate() {
        running_total += segment.value;
        let end_angle = if index + 1 == segments.len() {
            Decimal::TWO_PI
        } else {
            Decimal::TWO_PI * (running_total / total)
        };

        slices.push(ChartSlice {
            label: segment.label.clone(),
            value: segment.value,
            color: segment.color.clone(),
            start_angle,
            end_angle,
            share_percent: round_whole(segment.value / total * Decimal::ONE_HUNDRED),
        });
        start_angle = end_angle;
    }

    Ok(slices)
}

/// Two-slice donut of debt against the rest of income.
///
/// The ratio is clamped to 0–100% for the geometry; the centre label keeps
/// the actual ratio.
pub fn debt_ratio_donut(result: &DebtRatioResult) -> DonutChart {
    let clamped = max(result.ratio_percent, Decimal::ZERO).min(Decimal::ONE_HUNDRED);
    let debt_angle = Decimal::TWO_PI * clamped / Decimal::ONE_HUNDRED;
    let debt_share = round_whole(clamped);

    let slices = vec![
        ChartSlice {
            label: "Debt".to_string(),
            value: result.total_debt,
            color: DEBT_COLOR.to_string(),
            start_angle: Decimal::ZERO,
            end_angle: debt_angle,
            share_percent: debt_share,
        },
        ChartSlice {
            label: "Income".to_string(),
            value: result.total_income,
            color: REMAINING_INCOME_COLOR.to_string(),
            start_angle: debt_angle,
            end_angle: Decimal::TWO_PI,
            share_percent: Decimal::ONE_HUNDRED - debt_share,
        },
    ];

    DonutChart {
        slices,
        inner_radius_ratio: Decimal::new(6, 1),
        center_label: format!("{}%", result.ratio_percent.normalize()),
    }
}

impl MortgageResult {
    /// Monthly cost components for the payment breakdown pie.
    pub fn chart_segments(&self) -> Vec<ChartSegment> {
        vec![
            ChartSegment::new(
                "Principal & Interest",
                self.monthly_principal_and_interest,
                CHART_COLORS[0],
            ),
            ChartSegment::new("Property Taxes", self.monthly_property_tax, CHART_COLORS[1]),
            ChartSegment::new("Home Insurance", self.monthly_home_insurance, CHART_COLORS[2]),
            ChartSegment::new("Other Cost", self.monthly_other_costs, CHART_COLORS[3]),
        ]
    }
}

impl SavingsResult {
    /// Contributions against interest for the savings breakdown.
    pub fn chart_segments(&self) -> Vec<ChartSegment> {
        vec![
            ChartSegment::new("Your contributions", self.total_contributions, CHART_COLORS[0]),
            ChartSegment::new(
                "Interest earned",
                max(self.interest_earned, Decimal::ZERO),
                CHART_COLORS[1],
            ),
        ]
    }
}
