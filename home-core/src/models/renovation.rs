use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::CalculationError;
use crate::calculations::common::{ensure_fraction, ensure_positive};

/// A kind of renovation with its typical cost and value recovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenovationOption {
    pub name: String,

    /// Typical cost per square foot of renovated area.
    pub cost_per_square_foot: Decimal,

    /// Fraction of the cost recovered as added home value, 0 to 1.
    pub roi_fraction: Decimal,
}

impl RenovationOption {
    pub fn new(
        name: impl Into<String>,
        cost_per_square_foot: Decimal,
        roi_fraction: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            cost_per_square_foot,
            roi_fraction,
        }
    }

    /// Checks the cost is positive and the ROI is a fraction.
    pub fn validate(&self) -> Result<(), CalculationError> {
        ensure_positive("cost_per_square_foot", self.cost_per_square_foot)?;
        ensure_fraction("roi_fraction", self.roi_fraction)?;
        Ok(())
    }
}

/// The renovation options a user can pick from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenovationCatalog {
    options: Vec<RenovationOption>,
}

impl RenovationCatalog {
    pub fn new(options: Vec<RenovationOption>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &[RenovationOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&RenovationOption> {
        self.options.get(index)
    }

    /// Finds an option by name, ignoring case and surrounding whitespace.
    pub fn find(
        &self,
        name: &str,
    ) -> Option<&RenovationOption> {
        let name = name.trim();
        self.options
            .iter()
            .find(|option| option.name.eq_ignore_ascii_case(name))
    }
}

impl Default for RenovationCatalog {
    /// The built-in options with typical cost per square foot and ROI.
    fn default() -> Self {
        let option = |name: &str, cost: i64, roi_hundredths: i64| {
            RenovationOption::new(name, Decimal::from(cost), Decimal::new(roi_hundredths, 2))
        };

        Self::new(vec![
            option("Kitchen Remodel", 150, 80),
            option("Bathroom Remodel", 120, 70),
            option("Basement Finishing", 100, 75),
            option("Roof Replacement", 8, 60),
            option("Flooring Upgrade", 12, 55),
            option("Windows Replacement", 15, 68),
            option("Exterior Siding", 10, 65),
            option("Deck Addition", 35, 60),
        ])
    }
}

/// A chosen renovation and the area it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenovationSelection {
    pub option: RenovationOption,

    /// Renovated area in square feet.
    pub area: Decimal,
}

impl RenovationSelection {
    pub fn new(
        option: RenovationOption,
        area: Decimal,
    ) -> Self {
        Self { option, area }
    }

    /// Cost per square foot × area.
    pub fn cost(&self) -> Decimal {
        self.option.cost_per_square_foot * self.area
    }

    /// Cost × ROI fraction.
    pub fn value_increase(&self) -> Decimal {
        self.cost() * self.option.roi_fraction
    }
}

/// One computed renovation in a [`RenovationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenovationLineItem {
    pub option: RenovationOption,
    pub area: Decimal,
    pub cost: Decimal,
    pub value_increase: Decimal,
}

/// Result of the renovation ROI aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenovationResult {
    pub home_value: Decimal,

    /// Assessed value from the city, carried through for display.
    pub city_assessed_value: Decimal,

    pub line_items: Vec<RenovationLineItem>,

    pub total_cost: Decimal,

    pub total_value_increase: Decimal,

    /// Home value plus the total value increase.
    pub new_estimated_home_value: Decimal,
}

impl RenovationResult {
    /// Value increase minus cost. Negative when part of the cost is not recovered.
    pub fn net_gain(&self) -> Decimal {
        self.total_value_increase - self.total_cost
    }

    /// Total value increase as a fraction of total cost, or `None` with no cost.
    pub fn overall_roi_fraction(&self) -> Option<Decimal> {
        if self.total_cost.is_zero() {
            return None;
        }
        Some(self.total_value_increase / self.total_cost)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::Constraint;

    #[test]
    fn default_catalog_has_eight_options_in_order() {
        let catalog = RenovationCatalog::default();

        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.get(0).unwrap().name, "Kitchen Remodel");
        assert_eq!(catalog.get(7).unwrap().name, "Deck Addition");
    }

    #[test]
    fn default_catalog_options_are_valid() {
        for option in RenovationCatalog::default().options() {
            assert_eq!(option.validate(), Ok(()), "{}", option.name);
        }
    }

    #[test]
    fn find_ignores_case_and_whitespace() {
        let catalog = RenovationCatalog::default();

        let option = catalog.find("  roof replacement ").unwrap();

        assert_eq!(option.cost_per_square_foot, dec!(8));
        assert_eq!(option.roi_fraction, dec!(0.60));
    }

    #[test]
    fn find_returns_none_for_unknown_name() {
        assert!(RenovationCatalog::default().find("Pool").is_none());
    }

    #[test]
    fn selection_cost_and_value_increase() {
        let option = RenovationOption::new("Roof Replacement", dec!(8), dec!(0.6));
        let selection = RenovationSelection::new(option, dec!(800));

        assert_eq!(selection.cost(), dec!(6400));
        assert_eq!(selection.value_increase(), dec!(3840));
    }

    #[test]
    fn validate_rejects_roi_above_one() {
        let option = RenovationOption::new("Gold Taps", dec!(500), dec!(1.5));

        assert_eq!(
            option.validate(),
            Err(CalculationError::InvalidInput {
                field: "roi_fraction",
                constraint: Constraint::Fraction,
                value: dec!(1.5),
            })
        );
    }

    #[test]
    fn overall_roi_is_none_without_cost() {
        let result = RenovationResult {
            home_value: dec!(500000),
            city_assessed_value: dec!(500000),
            line_items: Vec::new(),
            total_cost: Decimal::ZERO,
            total_value_increase: Decimal::ZERO,
            new_estimated_home_value: dec!(500000),
        };

        assert_eq!(result.overall_roi_fraction(), None);
        assert_eq!(result.net_gain(), Decimal::ZERO);
    }
}
