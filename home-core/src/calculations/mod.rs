//! Calculation modules for the home finance calculators.
//!
//! Each calculator validates its input up front and fails with a
//! [`CalculationError`] naming the offending field, so no result ever carries
//! a value derived from out-of-range input.

pub mod chart;
pub mod common;
pub mod debt_ratio;
mod error;
pub mod mortgage;
pub mod renovation;
pub mod savings;

pub use chart::{ChartSegment, ChartSlice, DonutChart, debt_ratio_donut, pie_slices};
pub use debt_ratio::compute_debt_ratio;
pub use error::{CalculationError, Constraint};
pub use mortgage::compute_mortgage;
pub use renovation::compute_renovation_roi;
pub use savings::{compute_savings_plan, down_payment_options, minimum_down_payment};
