// Display formatting for numbers, token amounts, addresses and timestamps.
// Every formatter degrades to a placeholder instead of failing.

use chrono::{DateTime, Utc};

/// Shown in place of any missing or invalid numeric value
pub const PLACEHOLDER: &str = "--";

/// Ticker used for every token amount on the dashboard
pub const TOKEN_SYMBOL: &str = "BEANS";

/// Currency used for fiat values
pub const FIAT_CURRENCY: &str = "USD";

/// Addresses shorter than this are never shortened
const MIN_SHORTEN_LEN: usize = 10;

fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Group the integer digits of an already fixed-point string with commas
fn group_thousands(fixed: &str) -> String {
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}

fn grouped_abs(value: f64, decimals: usize) -> (bool, String) {
    let fixed = format!("{:.prec$}", value.abs(), prec = decimals);
    // -0.00 is still zero
    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    (negative, group_thousands(&fixed))
}

/// Format a number with thousands separators and a fixed number of decimals.
///
/// `format_number(1234567.891, 2)` gives `"1,234,567.89"`. Missing, NaN and
/// infinite values give [`PLACEHOLDER`].
pub fn format_number(value: impl Into<Option<f64>>, decimals: usize) -> String {
    match usable(value.into()) {
        Some(v) => {
            let (negative, digits) = grouped_abs(v, decimals);
            if negative {
                format!("-{}", digits)
            } else {
                digits
            }
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Number followed by a unit symbol, e.g. `"1,000.00 BEANS"`.
/// The symbol is kept for missing values: `"-- BEANS"`.
pub fn format_token_amount(value: impl Into<Option<f64>>, symbol: &str, decimals: usize) -> String {
    format!("{} {}", format_number(value, decimals), symbol)
}

/// Two-decimal amount of the dashboard token
pub fn beans(value: impl Into<Option<f64>>) -> String {
    format_token_amount(value, TOKEN_SYMBOL, 2)
}

fn currency_prefix(currency: &str) -> String {
    match currency.to_ascii_uppercase().as_str() {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        other => format!("{} ", other),
    }
}

/// Fiat amount with currency symbol, e.g. `"$1,250,000.00"`
pub fn format_currency(value: impl Into<Option<f64>>, currency: &str, decimals: usize) -> String {
    match usable(value.into()) {
        Some(v) => {
            let (negative, digits) = grouped_abs(v, decimals);
            let sign = if negative { "-" } else { "" };
            format!("{}{}{}", sign, currency_prefix(currency), digits)
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Two-decimal amount in the dashboard's fiat currency
pub fn usd(value: impl Into<Option<f64>>) -> String {
    format_currency(value, FIAT_CURRENCY, 2)
}

/// APR or share as typed, without padding: `24.0` gives `"24%"`, `12.5` gives `"12.5%"`
pub fn format_percent_plain(value: f64) -> String {
    if value.is_finite() {
        format!("{}%", value)
    } else {
        format!("{}%", PLACEHOLDER)
    }
}

/// Shorten an address to `prefix(2 + visible) + "..." + suffix(visible)`.
///
/// Strings under 10 characters come back unchanged.
pub fn short_address(addr: &str, visible: usize) -> String {
    let chars: Vec<char> = addr.chars().collect();
    if chars.len() < MIN_SHORTEN_LEN {
        return addr.to_string();
    }

    let head_len = (2 + visible).min(chars.len());
    let tail_start = chars.len().saturating_sub(visible);
    let head: String = chars[..head_len].iter().collect();
    let tail: String = chars[tail_start..].iter().collect();
    format!("{}...{}", head, tail)
}

/// [`short_address`] with the default four visible characters
pub fn short(addr: &str) -> String {
    short_address(addr, 4)
}

/// Relative time against an explicit "now".
///
/// Timestamps in the future count as zero elapsed.
pub fn time_ago_at(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if seconds < 60 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", days)
    }
}
