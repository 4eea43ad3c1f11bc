//! # Earnings Simulator
//!
//! Simple-interest APR projection for the staking pools, plus the parsing
//! and display rules of the simulator form.

use crate::api::{PoolId, StakingSnapshot};
use crate::format::{format_number, format_token_amount, TOKEN_SYMBOL};

/// Projected earnings for a principal held in a pool
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Projection {
    pub rewards: f64,
    pub total: f64,
    pub daily_yield: f64,
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// `rewards = principal * apr/100 * days/365`.
///
/// Any input that is not a positive finite number projects to all zeros.
pub fn simulate(principal: f64, duration_days: f64, apr_percent: f64) -> Projection {
    if !is_positive(principal) || !is_positive(duration_days) || !is_positive(apr_percent) {
        return Projection::default();
    }

    let rewards = principal * (apr_percent / 100.0) * (duration_days / 365.0);
    Projection {
        rewards,
        total: principal + rewards,
        daily_yield: rewards / duration_days,
    }
}

/// APR used when no staking snapshot carries one
pub fn default_apr(pool: PoolId) -> f64 {
    match pool {
        PoolId::Flexible => 12.0,
        PoolId::ThirtyDays => 24.0,
        PoolId::NinetyDays => 48.0,
    }
}

/// APR for a pool identifier: the loaded pool's APR when finite, otherwise
/// the default table. Unknown identifiers resolve to 0.
pub fn resolve_apr(staking: Option<&StakingSnapshot>, pool: &str) -> f64 {
    let Ok(id) = pool.parse::<PoolId>() else {
        return 0.0;
    };

    staking
        .and_then(|s| s.pool(id))
        .map(|p| p.apr)
        .filter(|apr| apr.is_finite())
        .unwrap_or_else(|| default_apr(id))
}

/// Leading decimal prefix of the input, e.g. `"12.5abc"` -> 12.5.
/// None when no number starts the string.
pub fn parse_amount(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // optional exponent, only taken when complete
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Leading base-10 integer prefix of the input, e.g. `"30 days"` -> 30
pub fn parse_days(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    // saturate instead of failing on absurdly long inputs
    s[..end].parse::<i64>().ok().or_else(|| {
        if bytes[0] == b'-' {
            Some(i64::MIN)
        } else {
            Some(i64::MAX)
        }
    })
}

/// Text for the four simulator output elements
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorView {
    pub apr: String,
    pub rewards: String,
    pub total: String,
    pub daily_yield: String,
}

/// Display model for the simulator from raw form values
pub fn simulator_view(staking: Option<&StakingSnapshot>, amount: &str, days: &str, pool: &str) -> SimulatorView {
    let apr = resolve_apr(staking, pool);
    let apr_text = format!("{}%", format_number(apr, 2));

    let amount = parse_amount(amount).filter(|a| is_positive(*a));
    let days = parse_days(days).filter(|d| *d > 0);

    match (amount, days) {
        (Some(amount), Some(days)) => {
            let projection = simulate(amount, days as f64, apr);
            SimulatorView {
                apr: apr_text,
                rewards: format_token_amount(projection.rewards, TOKEN_SYMBOL, 4),
                total: format_token_amount(projection.total, TOKEN_SYMBOL, 4),
                daily_yield: format!("{} / day", format_token_amount(projection.daily_yield, TOKEN_SYMBOL, 4)),
            }
        }
        _ => {
            let empty = format!("-- ${}", TOKEN_SYMBOL);
            SimulatorView {
                apr: apr_text,
                rewards: empty.clone(),
                total: empty.clone(),
                daily_yield: format!("{} / day", empty),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DemoApi;

    #[test]
    fn test_simulate_invalid_inputs_are_zero() {
        let zero = Projection::default();
        assert_eq!(simulate(0.0, 30.0, 12.0), zero);
        assert_eq!(simulate(-5.0, 30.0, 12.0), zero);
        assert_eq!(simulate(100.0, 0.0, 12.0), zero);
        assert_eq!(simulate(100.0, 30.0, 0.0), zero);
        assert_eq!(simulate(f64::NAN, 30.0, 12.0), zero);
        assert_eq!(simulate(100.0, f64::INFINITY, 12.0), zero);
    }

    #[test]
    fn test_simulate_simple_interest() {
        let p = simulate(1000.0, 365.0, 12.0);
        assert!((p.rewards - 120.0).abs() < 1e-9);
        assert_eq!(p.total, 1000.0 + p.rewards);
        assert_eq!(p.daily_yield, p.rewards / 365.0);

        let p = simulate(2500.0, 30.0, 24.0);
        assert_eq!(p.total, 2500.0 + p.rewards);
        assert_eq!(p.daily_yield, p.rewards / 30.0);
    }

    #[test]
    fn test_resolve_apr() {
        assert_eq!(resolve_apr(None, "flexible"), 12.0);
        assert_eq!(resolve_apr(None, "30days"), 24.0);
        assert_eq!(resolve_apr(None, "90days"), 48.0);
        assert_eq!(resolve_apr(None, "365days"), 0.0);

        let mut staking = DemoApi::staking();
        if let Some(pool) = staking.pools.get_mut(&PoolId::Flexible) {
            pool.apr = 15.5;
        }
        if let Some(pool) = staking.pools.get_mut(&PoolId::NinetyDays) {
            pool.apr = f64::NAN;
        }
        staking.pools.remove(&PoolId::ThirtyDays);

        assert_eq!(resolve_apr(Some(&staking), "flexible"), 15.5);
        assert_eq!(resolve_apr(Some(&staking), "30days"), 24.0);
        assert_eq!(resolve_apr(Some(&staking), "90days"), 48.0);
    }

    #[test]
    fn test_parse_amount_takes_leading_number() {
        assert_eq!(parse_amount("1000"), Some(1000.0));
        assert_eq!(parse_amount("  12.5abc"), Some(12.5));
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount("3."), Some(3.0));
        assert_eq!(parse_amount("1e3x"), Some(1000.0));
        assert_eq!(parse_amount("2e"), Some(2.0));
        assert_eq!(parse_amount("-4"), Some(-4.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("."), None);
    }

    #[test]
    fn test_parse_days_takes_leading_integer() {
        assert_eq!(parse_days("30"), Some(30));
        assert_eq!(parse_days("30.9"), Some(30));
        assert_eq!(parse_days(" 7 days"), Some(7));
        assert_eq!(parse_days("-3"), Some(-3));
        assert_eq!(parse_days("days"), None);
        assert_eq!(parse_days(""), None);
    }

    #[test]
    fn test_view_placeholders_for_missing_inputs() {
        let view = simulator_view(None, "", "30", "flexible");
        assert_eq!(view.apr, "12.00%");
        assert_eq!(view.rewards, "-- $BEANS");
        assert_eq!(view.total, "-- $BEANS");
        assert_eq!(view.daily_yield, "-- $BEANS / day");

        let view = simulator_view(None, "100", "0", "30days");
        assert_eq!(view.apr, "24.00%");
        assert_eq!(view.rewards, "-- $BEANS");
    }

    #[test]
    fn test_view_formats_projection() {
        let view = simulator_view(None, "1000", "365", "flexible");
        assert_eq!(view.rewards, "120.0000 BEANS");
        assert_eq!(view.total, "1,120.0000 BEANS");
        assert_eq!(view.daily_yield, "0.3288 BEANS / day");
    }

    #[test]
    fn test_view_with_unknown_pool_projects_nothing() {
        let view = simulator_view(None, "1000", "30", "weekly");
        assert_eq!(view.apr, "0.00%");
        assert_eq!(view.rewards, "0.0000 BEANS");
        assert_eq!(view.total, "0.0000 BEANS");
    }
}
