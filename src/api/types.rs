use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Supply and market snapshot shown in the dashboard header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_supply: f64,
    pub circulating_supply: f64,
    pub total_burned: f64,
    pub total_reflections: f64,
    pub holder_count: u64,
    pub tx_count: u64,
    pub market_cap_usd: f64,
    pub token_price_usd: f64,
    pub volume_24h_usd: f64,
    pub burned_24h: f64,
    pub reflections_24h: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holder {
    pub address: String,
    pub balance: f64,
    /// Percentage of total supply (0-100)
    pub share: f64,
}

impl Holder {
    pub fn new(address: impl Into<String>, balance: f64, total_supply: f64) -> Self {
        let share = if total_supply > 0.0 {
            balance / total_supply * 100.0
        } else {
            0.0
        };
        Self {
            address: address.into(),
            balance,
            share,
        }
    }
}

/// The three staking products. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PoolId {
    #[serde(rename = "flexible")]
    Flexible,
    #[serde(rename = "30days")]
    ThirtyDays,
    #[serde(rename = "90days")]
    NinetyDays,
}

impl PoolId {
    pub const ALL: [PoolId; 3] = [PoolId::Flexible, PoolId::ThirtyDays, PoolId::NinetyDays];

    /// Identifier used by pool cards and the simulator select
    pub fn as_str(&self) -> &'static str {
        match self {
            PoolId::Flexible => "flexible",
            PoolId::ThirtyDays => "30days",
            PoolId::NinetyDays => "90days",
        }
    }

    /// Prefix of the pool's text elements, e.g. `pool-30` in `pool-30-apr`
    pub fn element_prefix(&self) -> &'static str {
        match self {
            PoolId::Flexible => "pool-flexible",
            PoolId::ThirtyDays => "pool-30",
            PoolId::NinetyDays => "pool-90",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PoolId::Flexible => "FLEXIBLE",
            PoolId::ThirtyDays => "30 DAYS",
            PoolId::NinetyDays => "90 DAYS",
        }
    }

    pub fn next(&self) -> PoolId {
        match self {
            PoolId::Flexible => PoolId::ThirtyDays,
            PoolId::ThirtyDays => PoolId::NinetyDays,
            PoolId::NinetyDays => PoolId::Flexible,
        }
    }

    pub fn prev(&self) -> PoolId {
        match self {
            PoolId::Flexible => PoolId::NinetyDays,
            PoolId::ThirtyDays => PoolId::Flexible,
            PoolId::NinetyDays => PoolId::ThirtyDays,
        }
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PoolId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PoolId::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown pool '{}'", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    pub apr: f64,
    pub tvl: f64,
    pub user_staked: f64,
    pub user_rewards: f64,
    pub min_stake: f64,
    pub has_penalty: bool,
    pub lock_duration_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub address: Option<String>,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingOverview {
    pub total_staked: f64,
    pub total_pending_rewards: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakingSnapshot {
    pub wallet: WalletInfo,
    pub overview: StakingOverview,
    pub pools: BTreeMap<PoolId, PoolInfo>,
}

impl StakingSnapshot {
    pub fn pool(&self, id: PoolId) -> Option<&PoolInfo> {
        self.pools.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_id_round_trips_through_identifier() {
        for pool in PoolId::ALL {
            assert_eq!(pool.as_str().parse::<PoolId>(), Ok(pool));
        }
        assert!("60days".parse::<PoolId>().is_err());
    }

    #[test]
    fn test_pool_cycle_visits_all() {
        let mut pool = PoolId::Flexible;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(pool);
            pool = pool.next();
        }
        assert_eq!(seen, PoolId::ALL.to_vec());
        assert_eq!(PoolId::Flexible.prev(), PoolId::NinetyDays);
    }

    #[test]
    fn test_holder_share() {
        let holder = Holder::new("0xCafeWhale111111111111111111", 12_000_000.0, 100_000_000.0);
        assert_eq!(holder.share, 12.0);

        let holder = Holder::new("0xEmpty", 10.0, 0.0);
        assert_eq!(holder.share, 0.0);
    }

    #[test]
    fn test_staking_snapshot_uses_pool_identifiers_as_keys() {
        let json = r#"{
            "wallet": { "address": null, "balance": 15000 },
            "overview": { "totalStaked": 8000, "totalPendingRewards": 420 },
            "pools": {
                "30days": {
                    "apr": 24, "tvl": 25000, "userStaked": 3000, "userRewards": 150,
                    "minStake": 250, "hasPenalty": true, "lockDurationDays": 30
                }
            }
        }"#;

        let snapshot: StakingSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.pool(PoolId::ThirtyDays).map(|p| p.apr), Some(24.0));
        assert!(snapshot.pool(PoolId::Flexible).is_none());
        assert_eq!(snapshot.overview.total_pending_rewards, 420.0);
    }
}
