use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account the down payment savings are held in.
///
/// Only used for presentation; the projection treats every account the same.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SavingsAccountType {
    #[default]
    Hisa,
    Tfsa,
    Rrsp,
    Fhsa,
}

impl SavingsAccountType {
    pub fn all() -> &'static [SavingsAccountType] {
        &[Self::Hisa, Self::Tfsa, Self::Rrsp, Self::Fhsa]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hisa => "HISA",
            Self::Tfsa => "TFSA",
            Self::Rrsp => "RRSP",
            Self::Fhsa => "FHSA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hisa => "High Interest Savings Account",
            Self::Tfsa => "Tax-Free Savings Account (TFSA)",
            Self::Rrsp => "Registered Retirement Savings Plan (RRSP)",
            Self::Fhsa => "First Home Savings Account (FHSA)",
        }
    }

    /// Parses an account code such as `TFSA`. Case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|account| account.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// Input values for the down payment savings projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsInput {
    /// Price of the property being saved for.
    pub property_price: Decimal,

    /// Down payment as a percentage of the price.
    pub down_payment_percent: Decimal,

    /// Number of whole years to save over.
    pub saving_years: u32,

    /// Expected annual return on savings, as a percentage.
    pub annual_interest_rate_percent: Decimal,

    pub account_type: SavingsAccountType,
}

impl SavingsInput {
    /// Target amount to save: price × percent / 100.
    pub fn down_payment_goal(&self) -> Decimal {
        self.property_price * (self.down_payment_percent / Decimal::ONE_HUNDRED)
    }
}

/// Result of the down payment savings projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsResult {
    pub down_payment_goal: Decimal,

    /// Number of monthly contributions.
    pub months: u32,

    /// Level monthly deposit that grows to the goal with interest.
    pub required_monthly_contribution: Decimal,

    /// Monthly deposit needed if the savings earned nothing.
    pub monthly_contribution_without_interest: Decimal,

    /// Sum of all deposits.
    pub total_contributions: Decimal,

    /// Portion of the goal supplied by interest (goal − contributions).
    pub interest_earned: Decimal,

    pub contribution_percent_of_goal: Decimal,

    pub interest_percent_of_goal: Decimal,

    pub account_type: SavingsAccountType,
}

/// A quick-pick down payment percentage with its amount for a given price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownPaymentOption {
    pub percent: Decimal,
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn down_payment_goal_is_percent_of_price() {
        let input = SavingsInput {
            property_price: dec!(400000),
            down_payment_percent: dec!(20),
            saving_years: 5,
            annual_interest_rate_percent: dec!(3),
            account_type: SavingsAccountType::Hisa,
        };

        assert_eq!(input.down_payment_goal(), dec!(80000));
    }

    #[test]
    fn account_type_parses_codes_case_insensitively() {
        assert_eq!(SavingsAccountType::parse("tfsa"), Some(SavingsAccountType::Tfsa));
        assert_eq!(SavingsAccountType::parse(" FHSA "), Some(SavingsAccountType::Fhsa));
        assert_eq!(SavingsAccountType::parse("401k"), None);
    }

    #[test]
    fn account_type_defaults_to_high_interest_savings() {
        assert_eq!(SavingsAccountType::default().label(), "High Interest Savings Account");
    }
}
