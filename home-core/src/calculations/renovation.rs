//! Renovation return-on-investment aggregation.
//!
//! Each selected renovation costs `cost per sq ft × area` and adds
//! `cost × ROI fraction` to the home's value. The totals are plain sums, and
//! the new estimated home value is the current value plus the total increase.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use home_core::{RenovationCatalog, RenovationSelection, compute_renovation_roi};
//!
//! let catalog = RenovationCatalog::default();
//! let roof = catalog.find("Roof Replacement").unwrap().clone();
//!
//! let result = compute_renovation_roi(
//!     dec!(500000),
//!     dec!(500000),
//!     &[RenovationSelection::new(roof, dec!(800))],
//! )
//! .unwrap();
//!
//! assert_eq!(result.total_cost, dec!(6400));
//! assert_eq!(result.total_value_increase, dec!(3840));
//! assert_eq!(result.new_estimated_home_value, dec!(503840));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::common::{checked_product, checked_sum, ensure_non_negative, ensure_positive};
use super::error::CalculationError;
use crate::models::{RenovationLineItem, RenovationResult, RenovationSelection};

/// Aggregates the cost and value increase of the selected renovations.
///
/// An empty selection list is valid and yields zero totals.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidInput`] if:
/// - `home_value` is not positive
/// - `city_assessed_value` is negative
/// - any selection's area is not positive
/// - any selected option has a non-positive cost or an ROI outside 0–1
///
/// Returns [`CalculationError::Overflow`] if a line item cost or a total does
/// not fit in a decimal.
pub fn compute_renovation_roi(
    home_value: Decimal,
    city_assessed_value: Decimal,
    selections: &[RenovationSelection],
) -> Result<RenovationResult, CalculationError> {
    ensure_positive("home_value", home_value)?;
    ensure_non_negative("city_assessed_value", city_assessed_value)?;
    for selection in selections {
        ensure_positive("area", selection.area)?;
        selection.option.validate()?;
    }

    if selections.is_empty() {
        warn!(home_value = %home_value, "no renovations selected; value is unchanged");
    }

    let line_items = selections
        .iter()
        .map(line_item)
        .collect::<Result<Vec<_>, _>>()?;
    let total_cost = checked_sum("total_cost", line_items.iter().map(|item| item.cost))?;
    let total_value_increase = checked_sum(
        "total_value_increase",
        line_items.iter().map(|item| item.value_increase),
    )?;
    let new_estimated_home_value = checked_sum(
        "new_estimated_home_value",
        [home_value, total_value_increase],
    )?;

    debug!(
        renovations = line_items.len(),
        total_cost = %total_cost,
        total_value_increase = %total_value_increase,
        "computed renovation ROI"
    );

    Ok(RenovationResult {
        home_value,
        city_assessed_value,
        line_items,
        total_cost,
        total_value_increase,
        new_estimated_home_value,
    })
}

fn line_item(selection: &RenovationSelection) -> Result<RenovationLineItem, CalculationError> {
    let cost = checked_product(
        "renovation_cost",
        selection.option.cost_per_square_foot,
        selection.area,
    )?;

    Ok(RenovationLineItem {
        option: selection.option.clone(),
        area: selection.area,
        cost,
        // ROI is within 0–1, so at most `cost`.
        value_increase: cost * selection.option.roi_fraction,
    })
}
