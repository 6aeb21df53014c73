//! Calculation engine for the home finance calculators.
//!
//! Every calculator is a pure function from an immutable input record to an
//! immutable result record. Nothing is cached or shared between calls.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use home_core::compute_debt_ratio;
//!
//! let result = compute_debt_ratio(&[dec!(5000)], &[dec!(1800)]).unwrap();
//!
//! assert_eq!(result.ratio_percent, dec!(36.00));
//! assert_eq!(result.band().label(), "Good");
//! ```

pub mod calculations;
pub mod models;

pub use calculations::{
    CalculationError, ChartSegment, ChartSlice, Constraint, DonutChart, compute_debt_ratio,
    compute_mortgage, compute_renovation_roi, compute_savings_plan, debt_ratio_donut,
    down_payment_options, minimum_down_payment, pie_slices,
};
pub use models::*;
