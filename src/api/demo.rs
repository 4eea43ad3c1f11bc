// Placeholder data generator. Stands in for the real chain indexer until one exists.

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

use super::types::*;
use super::DataProvider;
use crate::error::DataError;

/// Supply every demo holder share is computed against
const DEMO_TOTAL_SUPPLY: f64 = 100_000_000.0;

/// Simulated network latency per operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Latency {
    pub stats_ms: u64,
    pub transactions_ms: u64,
    pub staking_ms: u64,
    pub holders_ms: u64,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            stats_ms: 600,
            transactions_ms: 400,
            staking_ms: 400,
            holders_ms: 300,
        }
    }
}

impl Latency {
    /// No waiting at all (tests, `--instant`)
    pub fn zero() -> Self {
        Self {
            stats_ms: 0,
            transactions_ms: 0,
            staking_ms: 0,
            holders_ms: 0,
        }
    }
}

pub struct DemoApi {
    latency: Latency,
}

impl DemoApi {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }

    async fn simulate_latency(ms: u64) {
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }

    /// `0x` followed by at least ten random hex digits
    fn random_hash() -> String {
        let mut rng = rand::rng();
        let value: u64 = rng.random();
        format!("0x{:013x}", value & 0x001f_ffff_ffff_ffff)
    }

    pub fn stats() -> DashboardStats {
        DashboardStats {
            total_supply: DEMO_TOTAL_SUPPLY,
            circulating_supply: 92_500_000.0,
            total_burned: 7_500_000.0,
            total_reflections: 1_250_000.0,
            holder_count: 1_842,
            tx_count: 25_137,
            market_cap_usd: 1_250_000.0,
            token_price_usd: 0.0135,
            volume_24h_usd: 32_000.0,
            burned_24h: 42_000.0,
            reflections_24h: 18_500.0,
        }
    }

    pub fn staking() -> StakingSnapshot {
        let mut pools = BTreeMap::new();
        pools.insert(
            PoolId::Flexible,
            PoolInfo {
                apr: 12.0,
                tvl: 50_000.0,
                user_staked: 2_500.0,
                user_rewards: 100.0,
                min_stake: 100.0,
                has_penalty: false,
                lock_duration_days: 0,
            },
        );
        pools.insert(
            PoolId::ThirtyDays,
            PoolInfo {
                apr: 24.0,
                tvl: 25_000.0,
                user_staked: 3_000.0,
                user_rewards: 150.0,
                min_stake: 250.0,
                has_penalty: true,
                lock_duration_days: 30,
            },
        );
        pools.insert(
            PoolId::NinetyDays,
            PoolInfo {
                apr: 48.0,
                tvl: 15_000.0,
                user_staked: 2_500.0,
                user_rewards: 170.0,
                min_stake: 500.0,
                has_penalty: true,
                lock_duration_days: 90,
            },
        );

        StakingSnapshot {
            wallet: WalletInfo {
                address: None,
                balance: 15_000.0,
            },
            overview: StakingOverview {
                total_staked: 8_000.0,
                total_pending_rewards: 420.0,
            },
            pools,
        }
    }

    pub fn holders() -> Vec<Holder> {
        [
            ("0xCafeWhale111111111111111111", 12_000_000.0),
            ("0xLatteHolder22222222222222", 8_500_000.0),
            ("0xEspresso3333333333333333", 5_250_000.0),
            ("0xBeans444444444444444444", 3_100_000.0),
            ("0xCup55555555555555555555", 2_250_000.0),
        ]
        .into_iter()
        .map(|(address, balance)| Holder::new(address, balance, DEMO_TOTAL_SUPPLY))
        .collect()
    }
}

impl Default for DemoApi {
    fn default() -> Self {
        Self::new(Latency::default())
    }
}

#[async_trait]
impl DataProvider for DemoApi {
    fn name(&self) -> &'static str {
        "demo"
    }

    async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, DataError> {
        Self::simulate_latency(self.latency.stats_ms).await;
        Ok(Self::stats())
    }

    async fn fetch_latest_transactions(&self, limit: usize) -> Result<Vec<Transaction>, DataError> {
        Self::simulate_latency(self.latency.transactions_ms).await;

        let now = Utc::now();
        let txs = (0..limit)
            .map(|i| Transaction {
                hash: Self::random_hash(),
                from: format!("0xCoffeeFrom{}", 1000 + i),
                to: format!("0xCoffeeTo{}", 2000 + i),
                amount: 1000.0 + i as f64 * 10.0,
                // one every ten minutes
                timestamp: now - ChronoDuration::minutes(10 * i as i64),
            })
            .collect::<Vec<_>>();

        debug!(count = txs.len(), "generated demo transactions");
        Ok(txs)
    }

    async fn fetch_staking_data(&self) -> Result<StakingSnapshot, DataError> {
        Self::simulate_latency(self.latency.staking_ms).await;
        Ok(Self::staking())
    }

    async fn fetch_top_holders(&self, limit: usize) -> Result<Vec<Holder>, DataError> {
        Self::simulate_latency(self.latency.holders_ms).await;
        Ok(Self::holders().into_iter().take(limit).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> DemoApi {
        DemoApi::new(Latency::zero())
    }

    #[tokio::test]
    async fn test_transactions_respect_limit_and_order() {
        let txs = instant().fetch_latest_transactions(10).await.unwrap();
        assert_eq!(txs.len(), 10);
        assert_eq!(txs[0].from, "0xCoffeeFrom1000");
        assert_eq!(txs[9].to, "0xCoffeeTo2009");
        assert_eq!(txs[3].amount, 1030.0);
        // most recent first
        for pair in txs.windows(2) {
            assert!(pair[0].timestamp > pair[1].timestamp);
        }

        let txs = instant().fetch_latest_transactions(3).await.unwrap();
        assert_eq!(txs.len(), 3);
    }

    #[tokio::test]
    async fn test_transaction_hashes_are_hex() {
        let txs = instant().fetch_latest_transactions(5).await.unwrap();
        for tx in txs {
            assert!(tx.hash.starts_with("0x"));
            assert!(tx.hash.len() >= 12);
            assert!(tx.hash[2..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[tokio::test]
    async fn test_holders_are_bounded_and_ranked() {
        let holders = instant().fetch_top_holders(5).await.unwrap();
        assert_eq!(holders.len(), 5);
        assert_eq!(holders[0].share, 12.0);
        assert!(holders.windows(2).all(|w| w[0].balance >= w[1].balance));

        let holders = instant().fetch_top_holders(2).await.unwrap();
        assert_eq!(holders.len(), 2);

        let holders = instant().fetch_top_holders(50).await.unwrap();
        assert_eq!(holders.len(), 5);
    }

    #[tokio::test]
    async fn test_staking_has_all_pools() {
        let staking = instant().fetch_staking_data().await.unwrap();
        assert!(staking.wallet.address.is_none());
        for pool in PoolId::ALL {
            assert!(staking.pool(pool).is_some());
        }
        assert_eq!(staking.pool(PoolId::ThirtyDays).map(|p| p.apr), Some(24.0));
    }
}
