mod debt_ratio;
mod mortgage;
mod renovation;
mod savings;

pub use debt_ratio::{DebtRatioBand, DebtRatioInput, DebtRatioResult};
pub use mortgage::{CostBreakdownRow, DownPayment, MortgageInput, MortgageResult};
pub use renovation::{
    RenovationCatalog, RenovationLineItem, RenovationOption, RenovationResult,
    RenovationSelection,
};
pub use savings::{DownPaymentOption, SavingsAccountType, SavingsInput, SavingsResult};
