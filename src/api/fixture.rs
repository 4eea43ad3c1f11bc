// Deterministic data source backed by a JSON bundle on disk.
// The file is re-read on every fetch so it behaves like a remote source that can go away.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::types::*;
use super::DataProvider;
use crate::error::DataError;

/// Holder entry as stored in a fixture; share is derived on load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureHolder {
    pub address: String,
    pub balance: f64,
}

/// Everything the dashboard fetches, in one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureBundle {
    pub stats: DashboardStats,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub staking: StakingSnapshot,
    #[serde(default)]
    pub holders: Vec<FixtureHolder>,
}

pub struct FixtureApi {
    path: PathBuf,
}

impl FixtureApi {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self, resource: &'static str) -> Result<FixtureBundle, DataError> {
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DataError::unavailable(resource, format!("{}: {}", self.path.display(), e)))?;

        serde_json::from_str(&data).map_err(|e| DataError::malformed(resource, e))
    }
}

#[async_trait]
impl DataProvider for FixtureApi {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, DataError> {
        Ok(self.load("dashboard stats").await?.stats)
    }

    async fn fetch_latest_transactions(&self, limit: usize) -> Result<Vec<Transaction>, DataError> {
        let bundle = self.load("transactions").await?;
        Ok(bundle.transactions.into_iter().take(limit).collect())
    }

    async fn fetch_staking_data(&self) -> Result<StakingSnapshot, DataError> {
        Ok(self.load("staking data").await?.staking)
    }

    async fn fetch_top_holders(&self, limit: usize) -> Result<Vec<Holder>, DataError> {
        let bundle = self.load("top holders").await?;
        let total_supply = bundle.stats.total_supply;
        Ok(bundle
            .holders
            .into_iter()
            .take(limit)
            .map(|h| Holder::new(h.address, h.balance, total_supply))
            .collect())
    }
}
