use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the down payment was entered on the mortgage form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownPayment {
    /// Percentage of the home price, 0 to 100.
    Percent(Decimal),
    /// Fixed currency amount, at most the home price.
    Amount(Decimal),
}

impl DownPayment {
    /// Currency amount of the down payment for the given home price.
    pub fn amount_for(
        &self,
        home_price: Decimal,
    ) -> Decimal {
        match self {
            Self::Percent(percent) => home_price * (*percent / Decimal::ONE_HUNDRED),
            Self::Amount(amount) => *amount,
        }
    }
}

/// Input values for the mortgage payment calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageInput {
    /// Purchase price of the home.
    pub home_price: Decimal,

    /// Down payment, either as a percentage or a currency amount.
    pub down_payment: DownPayment,

    /// Length of the loan in whole years.
    pub loan_term_years: u32,

    /// Annual interest rate as a percentage (e.g. `6.908`).
    pub annual_interest_rate_percent: Decimal,

    /// Annual property tax as a percentage of the home price.
    pub annual_property_tax_percent: Decimal,

    /// Annual home insurance premium.
    pub annual_home_insurance: Decimal,

    /// Annual private mortgage insurance.
    pub annual_pmi: Decimal,

    /// Monthly homeowners association fee.
    pub monthly_hoa: Decimal,

    /// Any other annual ownership costs (maintenance, utilities, ...).
    pub annual_other_costs: Decimal,

    /// Date the first payment period starts; the payoff date counts from here.
    pub start_date: NaiveDate,
}

/// Result of the mortgage payment calculation.
///
/// Values are unrounded; callers round for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageResult {
    /// Level monthly principal and interest payment.
    pub monthly_principal_and_interest: Decimal,

    /// Property tax collected each month.
    pub monthly_property_tax: Decimal,

    /// Home insurance collected each month.
    pub monthly_home_insurance: Decimal,

    /// PMI, HOA and other costs combined, per month.
    pub monthly_other_costs: Decimal,

    /// Sum of the four monthly components.
    pub total_monthly_payment: Decimal,

    /// Amount borrowed (home price minus down payment).
    pub loan_principal: Decimal,

    /// Down payment as a currency amount.
    pub down_payment_amount: Decimal,

    /// Principal and interest paid over the life of the loan.
    pub total_of_payments: Decimal,

    /// Interest paid over the life of the loan.
    pub total_interest_paid: Decimal,

    /// Calendar date of the final payment.
    pub payoff_date: NaiveDate,

    /// Number of monthly payments (loan term in months).
    pub number_of_payments: u32,
}

/// One row of the monthly/lifetime cost breakdown table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdownRow {
    pub label: String,
    pub monthly: Decimal,
    pub total: Decimal,
}

impl CostBreakdownRow {
    fn new(
        label: &str,
        monthly: Decimal,
        total: Decimal,
    ) -> Self {
        Self {
            label: label.to_string(),
            monthly,
            total,
        }
    }
}

impl MortgageResult {
    /// Escrow-like costs paid monthly alongside principal and interest.
    pub fn monthly_escrow_costs(&self) -> Decimal {
        self.monthly_property_tax + self.monthly_home_insurance + self.monthly_other_costs
    }

    /// Everything paid over the loan term: principal, interest and escrow costs.
    ///
    /// Escrow costs are multiplied by the actual number of payments, so a
    /// 15-year loan is totalled over 180 months rather than 360.
    pub fn total_out_of_pocket(&self) -> Decimal {
        self.total_of_payments + self.monthly_escrow_costs() * Decimal::from(self.number_of_payments)
    }

    /// Monthly and lifetime totals for each cost component.
    pub fn cost_breakdown(&self) -> Vec<CostBreakdownRow> {
        let payments = Decimal::from(self.number_of_payments);

        vec![
            CostBreakdownRow::new(
                "Mortgage Payment",
                self.monthly_principal_and_interest,
                self.total_of_payments,
            ),
            CostBreakdownRow::new(
                "Property Tax",
                self.monthly_property_tax,
                self.monthly_property_tax * payments,
            ),
            CostBreakdownRow::new(
                "Home Insurance",
                self.monthly_home_insurance,
                self.monthly_home_insurance * payments,
            ),
            CostBreakdownRow::new(
                "Other Costs",
                self.monthly_other_costs,
                self.monthly_other_costs * payments,
            ),
            CostBreakdownRow::new(
                "Total Out-of-Pocket",
                self.total_monthly_payment,
                self.total_out_of_pocket(),
            ),
        ]
    }

    /// Payoff date as shown in the results table, e.g. `Oct 2056`.
    pub fn payoff_label(&self) -> String {
        self.payoff_date.format("%b %Y").to_string()
    }
}
