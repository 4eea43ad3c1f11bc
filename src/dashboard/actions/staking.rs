use std::time::Instant;
use tracing::info;

use crate::api::PoolId;
use crate::dashboard::types::Dashboard;
use crate::page::{EffectKind, ToastKind};

/// Amount typed into a pool card. Anything unparsable counts as 0.
pub fn stake_amount(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && *a != 0.0)
        .unwrap_or(0.0)
}

impl Dashboard {
    pub fn stake(&mut self, pool: PoolId) {
        let amount = self
            .page
            .pool_card(pool)
            .map(|card| stake_amount(&card.amount_input))
            .unwrap_or(0.0);

        info!(pool = %pool, amount, "stake clicked");
        self.toast(format!("Demo: Stake {} BEANS in pool {}", amount, pool), ToastKind::Success);
        self.page.spawn_effect(pool, EffectKind::BeanDrop, Instant::now());
    }

    pub fn unstake(&mut self, pool: PoolId) {
        info!(pool = %pool, "unstake clicked");
        self.toast(format!("Demo: Unstake from pool {}", pool), ToastKind::Success);
    }

    pub fn claim(&mut self, pool: PoolId) {
        info!(pool = %pool, "claim rewards clicked");
        self.toast(format!("Demo: Claim rewards from pool {}", pool), ToastKind::Success);

        let now = Instant::now();
        self.page.spawn_effect(pool, EffectKind::BeanDrop, now);
        self.page.spawn_effect(pool, EffectKind::Sparkle, now);
    }

    /// Keyboard editing of the selected card's amount input
    pub fn pool_input_char(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            return;
        }
        if let Some(card) = self.page.pool_card_mut(self.selected_pool) {
            card.amount_input.push(c);
        }
    }

    pub fn pool_input_backspace(&mut self) {
        if let Some(card) = self.page.pool_card_mut(self.selected_pool) {
            card.amount_input.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stake_amount() {
        assert_eq!(stake_amount("250"), 250.0);
        assert_eq!(stake_amount(" 12.5 "), 12.5);
        assert_eq!(stake_amount(""), 0.0);
        assert_eq!(stake_amount("12abc"), 0.0);
        assert_eq!(stake_amount("-0"), 0.0);
        assert_eq!(stake_amount("inf"), 0.0);
        assert_eq!(stake_amount("Infinity"), 0.0);
        assert_eq!(stake_amount("1e400"), 0.0);
        assert_eq!(stake_amount("0x10"), 0.0);
        assert_eq!(format!("{}", stake_amount("1000")), "1000");
    }
}
