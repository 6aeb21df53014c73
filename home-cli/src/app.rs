//! Turns parsed command-line arguments and configuration into engine inputs,
//! runs the calculators and renders the reports.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use home_core::{
    DebtRatioInput, MortgageInput, RenovationCatalog, RenovationSelection, SavingsAccountType,
    SavingsInput, compute_mortgage, compute_renovation_roi, compute_savings_plan,
    down_payment_options, minimum_down_payment,
};
use home_data::RenovationCatalogLoader;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::cli::{
    Command, DebtRatioArgs, MortgageArgs, OptionsArgs, RenovationArgs, SavingsArgs,
};
use crate::config::{AppConfig, MortgageDefaults, RenovationDefaults, SavingsDefaults};
use crate::report::{
    CatalogReport, DebtRatioReport, MortgageReport, RenovationReport, SavingsReport,
};
use crate::utils::{parse_decimal, parse_down_payment};

/// Runs one command and returns the report text.
///
/// `today` is the default first payment date for the mortgage payoff.
pub fn run(
    command: &Command,
    config: &AppConfig,
    today: NaiveDate,
) -> Result<String> {
    match command {
        Command::Mortgage(args) => run_mortgage(args, &config.mortgage, today),
        Command::Savings(args) => run_savings(args, &config.savings),
        Command::Renovation(args) => run_renovation(args, &config.renovation),
        Command::DebtRatio(args) => run_debt_ratio(args),
        Command::Options(args) => run_options(args, &config.renovation),
    }
}

fn decimal_or(
    raw: Option<&String>,
    default: Decimal,
    flag: &str,
) -> Result<Decimal> {
    match raw {
        Some(raw) => parse_decimal(raw).with_context(|| format!("invalid --{flag}")),
        None => Ok(default),
    }
}

// ─── mortgage ────────────────────────────────────────────────────────────────

/// Merges mortgage flags over the configured defaults.
pub fn mortgage_input(
    args: &MortgageArgs,
    defaults: &MortgageDefaults,
    today: NaiveDate,
) -> Result<MortgageInput> {
    let down_payment_raw = args.down_payment.as_ref().unwrap_or(&defaults.down_payment);
    let down_payment =
        parse_down_payment(down_payment_raw).context("invalid --down-payment")?;

    Ok(MortgageInput {
        home_price: decimal_or(args.price.as_ref(), defaults.home_price, "price")?,
        down_payment,
        loan_term_years: args.term_years.unwrap_or(defaults.loan_term_years),
        annual_interest_rate_percent: decimal_or(
            args.rate.as_ref(),
            defaults.annual_interest_rate_percent,
            "rate",
        )?,
        annual_property_tax_percent: decimal_or(
            args.property_tax.as_ref(),
            defaults.annual_property_tax_percent,
            "property-tax",
        )?,
        annual_home_insurance: decimal_or(
            args.insurance.as_ref(),
            defaults.annual_home_insurance,
            "insurance",
        )?,
        annual_pmi: decimal_or(args.pmi.as_ref(), defaults.annual_pmi, "pmi")?,
        monthly_hoa: decimal_or(args.hoa.as_ref(), defaults.monthly_hoa, "hoa")?,
        annual_other_costs: decimal_or(
            args.other_costs.as_ref(),
            defaults.annual_other_costs,
            "other-costs",
        )?,
        start_date: args.start_date.unwrap_or(today),
    })
}

fn run_mortgage(
    args: &MortgageArgs,
    defaults: &MortgageDefaults,
    today: NaiveDate,
) -> Result<String> {
    let input = mortgage_input(args, defaults, today)?;
    debug!(?input, "mortgage input");

    let result = compute_mortgage(&input).context("cannot compute mortgage")?;
    Ok(MortgageReport(&result).to_string())
}

// ─── savings ─────────────────────────────────────────────────────────────────

/// Merges savings flags over the configured defaults.
pub fn savings_input(
    args: &SavingsArgs,
    defaults: &SavingsDefaults,
) -> Result<SavingsInput> {
    let account_type = match &args.account {
        Some(raw) => SavingsAccountType::parse(raw).ok_or_else(|| {
            anyhow!("invalid --account '{raw}': expected one of HISA, TFSA, RRSP, FHSA")
        })?,
        None => defaults.account_type,
    };

    Ok(SavingsInput {
        property_price: decimal_or(args.price.as_ref(), defaults.property_price, "price")?,
        down_payment_percent: decimal_or(
            args.down_payment_percent.as_ref(),
            defaults.down_payment_percent,
            "down-payment-percent",
        )?,
        saving_years: args.years.unwrap_or(defaults.saving_years),
        annual_interest_rate_percent: decimal_or(
            args.rate.as_ref(),
            defaults.annual_interest_rate_percent,
            "rate",
        )?,
        account_type,
    })
}

fn run_savings(
    args: &SavingsArgs,
    defaults: &SavingsDefaults,
) -> Result<String> {
    let input = savings_input(args, defaults)?;
    debug!(?input, "savings input");

    let result = compute_savings_plan(&input).context("cannot compute savings plan")?;
    let quick_picks = down_payment_options(input.property_price);
    let minimum = minimum_down_payment(input.property_price)
        .context("cannot compute minimum down payment")?;

    Ok(SavingsReport {
        result: &result,
        property_price: input.property_price,
        quick_picks: &quick_picks,
        minimum_down_payment: minimum,
    }
    .to_string())
}

// ─── renovation ──────────────────────────────────────────────────────────────

/// Loads the catalog from `path`, or the built-in options when `None`.
pub fn load_catalog(path: Option<&Path>) -> Result<RenovationCatalog> {
    match path {
        Some(path) => {
            let catalog = RenovationCatalogLoader::load_from_file(path).with_context(|| {
                format!("cannot load renovation catalog '{}'", path.display())
            })?;
            info!(path = %path.display(), options = catalog.len(), "using renovation catalog");
            Ok(catalog)
        }
        None => Ok(RenovationCatalog::default()),
    }
}

/// Parses `NAME=SQFT` into a selection from `catalog`.
pub fn parse_selection(
    item: &str,
    catalog: &RenovationCatalog,
) -> Result<RenovationSelection> {
    let (name, area) = item
        .rsplit_once('=')
        .ok_or_else(|| anyhow!("invalid --item '{item}': expected NAME=SQFT"))?;

    let option = catalog.find(name).ok_or_else(|| {
        let known: Vec<&str> = catalog.options().iter().map(|o| o.name.as_str()).collect();
        anyhow!(
            "unknown renovation '{}'; available: {}",
            name.trim(),
            known.join(", ")
        )
    })?;
    let area = parse_decimal(area).with_context(|| format!("invalid area in --item '{item}'"))?;

    Ok(RenovationSelection::new(option.clone(), area))
}

fn run_renovation(
    args: &RenovationArgs,
    defaults: &RenovationDefaults,
) -> Result<String> {
    let catalog = load_catalog(args.catalog.as_deref().or(defaults.catalog.as_deref()))?;
    let home_value = decimal_or(args.home_value.as_ref(), defaults.home_value, "home-value")?;
    let assessed_value = decimal_or(
        args.assessed_value.as_ref(),
        defaults.city_assessed_value,
        "assessed-value",
    )?;
    let selections = args
        .items
        .iter()
        .map(|item| parse_selection(item, &catalog))
        .collect::<Result<Vec<_>>>()?;

    let result = compute_renovation_roi(home_value, assessed_value, &selections)
        .context("cannot compute renovation ROI")?;
    Ok(RenovationReport(&result).to_string())
}

fn run_options(
    args: &OptionsArgs,
    defaults: &RenovationDefaults,
) -> Result<String> {
    let catalog = load_catalog(args.catalog.as_deref().or(defaults.catalog.as_deref()))?;
    Ok(CatalogReport(&catalog).to_string())
}

// ─── debt ratio ──────────────────────────────────────────────────────────────

fn parse_amounts(
    raw: &[String],
    flag: &str,
) -> Result<Vec<Decimal>> {
    raw.iter()
        .map(|value| parse_decimal(value).with_context(|| format!("invalid --{flag}")))
        .collect()
}

fn run_debt_ratio(args: &DebtRatioArgs) -> Result<String> {
    let input = DebtRatioInput {
        income_amounts: parse_amounts(&args.incomes, "income")?,
        debt_amounts: parse_amounts(&args.debts, "debt")?,
    };

    let result = input.compute().context("cannot compute debt ratio")?;
    Ok(DebtRatioReport(&result).to_string())
}
