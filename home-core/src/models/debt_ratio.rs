use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly income and debt payment amounts, in entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtRatioInput {
    pub income_amounts: Vec<Decimal>,
    pub debt_amounts: Vec<Decimal>,
}

/// Result of the debt-to-income calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtRatioResult {
    pub total_income: Decimal,
    pub total_debt: Decimal,

    /// Debt as a percentage of income, rounded to two places.
    pub ratio_percent: Decimal,
}

impl DebtRatioResult {
    pub fn band(&self) -> DebtRatioBand {
        DebtRatioBand::classify(self.ratio_percent)
    }
}

/// How lenders typically read a debt-to-income ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtRatioBand {
    /// 36% or less.
    Good,
    /// 37–42%.
    Manageable,
    /// 43–49%.
    CauseForConcern,
    /// 50% or more.
    Dangerous,
}

impl DebtRatioBand {
    /// Classifies a ratio percentage.
    ///
    /// Ratios between the whole-percent bands (e.g. 36.5 or 42.7) fall into
    /// the lower band until they reach the next band's starting percent.
    pub fn classify(ratio_percent: Decimal) -> Self {
        if ratio_percent <= Decimal::from(36) {
            Self::Good
        } else if ratio_percent < Decimal::from(43) {
            Self::Manageable
        } else if ratio_percent < Decimal::from(50) {
            Self::CauseForConcern
        } else {
            Self::Dangerous
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Manageable => "Manageable",
            Self::CauseForConcern => "Cause for Concern",
            Self::Dangerous => "Dangerous",
        }
    }

    pub fn range(&self) -> &'static str {
        match self {
            Self::Good => "36% or less",
            Self::Manageable => "37-42%",
            Self::CauseForConcern => "43-49%",
            Self::Dangerous => "50% or more",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            Self::Good => "Most lenders consider a ratio of 36% or less a healthy debt load.",
            Self::Manageable => {
                "While you may be able to manage with a ratio this high, it is a good idea to \
                 start working to reduce your debt now and make sure you have adequate savings \
                 set aside for emergencies."
            }
            Self::CauseForConcern => {
                "Now would be a good time to make a household debt management plan to start \
                 paying down your debts to avoid trouble down the road. Talking to an expert is \
                 the best way to get tailored advice and get out of debt faster."
            }
            Self::Dangerous => {
                "You should make a plan to aggressively pay off your debts. At this level you may \
                 want to consider seeking professional help to severely reduce your debt."
            }
        }
    }

    pub fn all() -> &'static [DebtRatioBand] {
        &[
            Self::Good,
            Self::Manageable,
            Self::CauseForConcern,
            Self::Dangerous,
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn thirty_six_percent_is_good() {
        assert_eq!(DebtRatioBand::classify(dec!(36.00)), DebtRatioBand::Good);
    }

    #[test]
    fn just_above_thirty_six_is_manageable() {
        assert_eq!(DebtRatioBand::classify(dec!(36.01)), DebtRatioBand::Manageable);
        assert_eq!(DebtRatioBand::classify(dec!(42.99)), DebtRatioBand::Manageable);
    }

    #[test]
    fn forty_three_to_forty_nine_is_cause_for_concern() {
        assert_eq!(DebtRatioBand::classify(dec!(43)), DebtRatioBand::CauseForConcern);
        assert_eq!(DebtRatioBand::classify(dec!(49.99)), DebtRatioBand::CauseForConcern);
    }

    #[test]
    fn fifty_and_above_is_dangerous() {
        assert_eq!(DebtRatioBand::classify(dec!(50)), DebtRatioBand::Dangerous);
        assert_eq!(DebtRatioBand::classify(dec!(180)), DebtRatioBand::Dangerous);
    }

    #[test]
    fn zero_ratio_is_good() {
        assert_eq!(DebtRatioBand::classify(Decimal::ZERO), DebtRatioBand::Good);
    }
}
