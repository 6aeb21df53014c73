use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Home finance calculators: mortgage payments, down payment savings,
/// renovation ROI and debt-to-income ratio.
///
/// Money and rate values accept the forms people type, such as `400,000`,
/// `$1,500` or `6.908%`. Flags left out come from the config file, or from
/// the built-in defaults.
#[derive(Debug, Parser)]
#[command(name = "home-calc", version, about, long_about = None)]
pub struct Cli {
    /// TOML config file [default: home-calc.toml if present].
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive, overriding the config file.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Monthly payment breakdown and loan totals.
    Mortgage(MortgageArgs),

    /// Monthly savings needed to reach a down payment goal.
    Savings(SavingsArgs),

    /// Cost and value increase of a set of renovations.
    Renovation(RenovationArgs),

    /// Monthly debt payments as a share of monthly income.
    DebtRatio(DebtRatioArgs),

    /// List the available renovation options.
    Options(OptionsArgs),
}

#[derive(Debug, Args)]
pub struct MortgageArgs {
    /// Home price.
    #[arg(long)]
    pub price: Option<String>,

    /// Down payment as a percentage (`20%`) or an amount (`$80,000`).
    #[arg(long)]
    pub down_payment: Option<String>,

    /// Loan term in years.
    #[arg(long)]
    pub term_years: Option<u32>,

    /// Annual interest rate in percent.
    #[arg(long)]
    pub rate: Option<String>,

    /// Annual property tax in percent of the home price.
    #[arg(long)]
    pub property_tax: Option<String>,

    /// Annual home insurance.
    #[arg(long)]
    pub insurance: Option<String>,

    /// Annual private mortgage insurance.
    #[arg(long)]
    pub pmi: Option<String>,

    /// Monthly HOA fee.
    #[arg(long)]
    pub hoa: Option<String>,

    /// Other annual costs.
    #[arg(long)]
    pub other_costs: Option<String>,

    /// First payment month, YYYY-MM-DD [default: today].
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct SavingsArgs {
    /// Target property price.
    #[arg(long)]
    pub price: Option<String>,

    /// Down payment goal in percent of the price.
    #[arg(long)]
    pub down_payment_percent: Option<String>,

    /// Years of saving.
    #[arg(long)]
    pub years: Option<u32>,

    /// Expected annual interest rate in percent.
    #[arg(long)]
    pub rate: Option<String>,

    /// Account type: HISA, TFSA, RRSP or FHSA.
    #[arg(long)]
    pub account: Option<String>,
}

#[derive(Debug, Args)]
pub struct RenovationArgs {
    /// Current home value.
    #[arg(long)]
    pub home_value: Option<String>,

    /// City assessed value.
    #[arg(long)]
    pub assessed_value: Option<String>,

    /// A renovation and its area in square feet, e.g. "Roof Replacement=800".
    /// Repeat for several renovations.
    #[arg(long = "item", value_name = "NAME=SQFT")]
    pub items: Vec<String>,

    /// CSV file of renovation options to use instead of the built-in list.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct DebtRatioArgs {
    /// A monthly income amount. Repeat for several sources.
    #[arg(long = "income", value_name = "AMOUNT")]
    pub incomes: Vec<String>,

    /// A monthly debt payment. Repeat for several debts.
    #[arg(long = "debt", value_name = "AMOUNT")]
    pub debts: Vec<String>,
}

#[derive(Debug, Args)]
pub struct OptionsArgs {
    /// CSV file of renovation options to use instead of the built-in list.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}
