use home_core::DownPayment;
use home_core::calculations::common::{round_half_up, round_whole};
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace, removes commas
/// (thousands separator) and drops a leading `$` or trailing `%`.
fn normalize_decimal_input(s: &str) -> String {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed);
    trimmed.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and the unit
/// marks users type into money and rate fields (`"$1,500"`, `"6.908%"`).
/// Empty or whitespace-only input is treated as 0.
/// Returns an error and logs when the input is invalid (non-empty but not parseable).
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses a down payment as either a percentage or a dollar amount.
///
/// `"$80,000"` is an amount; `"20%"` and a bare `"20"` are percentages.
pub fn parse_down_payment(s: &str) -> Result<DownPayment, ParseDecimalError> {
    let value = parse_decimal(s)?;
    if s.trim().starts_with('$') {
        Ok(DownPayment::Amount(value))
    } else {
        Ok(DownPayment::Percent(value))
    }
}

/// Formats a dollar value rounded to whole dollars, e.g. `$2,109` or `-$9,667`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_whole(value);
    let grouped = group_thousands(&rounded.abs().to_string());
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats a percentage with two decimal places, e.g. `44.82%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", round_half_up(value))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal("400,000").unwrap(), dec!(400000));
    }

    #[test]
    fn parse_decimal_strips_currency_and_percent_marks() {
        assert_eq!(parse_decimal("$1,500").unwrap(), dec!(1500));
        assert_eq!(parse_decimal("6.908%").unwrap(), dec!(6.908));
        assert_eq!(parse_decimal(" 1.2 % ").unwrap(), dec!(1.2));
    }

    #[test]
    fn parse_decimal_trim_whitespace() {
        assert_eq!(parse_decimal("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_decimal_empty_treated_as_zero() {
        assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        assert!(parse_decimal("abc").is_err());
        assert!(parse_decimal("12.5.1").is_err());
    }

    #[test]
    fn parse_down_payment_modes() {
        assert_eq!(parse_down_payment("20%").unwrap(), DownPayment::Percent(dec!(20)));
        assert_eq!(parse_down_payment("15").unwrap(), DownPayment::Percent(dec!(15)));
        assert_eq!(
            parse_down_payment("$80,000").unwrap(),
            DownPayment::Amount(dec!(80000))
        );
    }

    #[test]
    fn format_currency_rounds_to_whole_dollars() {
        assert_eq!(format_currency(dec!(2109.23)), "$2,109");
        assert_eq!(format_currency(dec!(2967.5678)), "$2,968");
        assert_eq!(format_currency(dec!(759322.80)), "$759,323");
        assert_eq!(format_currency(dec!(1234567)), "$1,234,567");
        assert_eq!(format_currency(dec!(999)), "$999");
    }

    #[test]
    fn format_currency_negative_and_zero() {
        assert_eq!(format_currency(dec!(-9667.0)), "-$9,667");
        assert_eq!(format_currency(dec!(-0.2)), "$0");
        assert_eq!(format_currency(Decimal::ZERO), "$0");
    }

    #[test]
    fn format_percent_uses_two_places() {
        assert_eq!(format_percent(dec!(36)), "36.00%");
        assert_eq!(format_percent(dec!(92.813)), "92.81%");
    }
}
