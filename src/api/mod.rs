//! # Data Source
//!
//! The dashboard never talks to a data layer directly; it holds an
//! `Arc<dyn DataProvider>` so the placeholder generator, a fixture file, or a
//! future remote source can be swapped in without touching the controller.

pub mod demo;
pub mod fixture;
pub mod types;

use async_trait::async_trait;

use crate::error::DataError;
pub use demo::{DemoApi, Latency};
pub use fixture::FixtureApi;
pub use types::*;

/// Default number of transactions requested by the bootstrap
pub const DEFAULT_TX_LIMIT: usize = 10;

/// Default number of holders requested by the bootstrap
pub const DEFAULT_HOLDER_LIMIT: usize = 5;

/// Capability the dashboard needs from a data source.
///
/// Each operation is independent and may suspend. `limit` bounds the length
/// of the returned sequence.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, DataError>;

    /// Most recent first
    async fn fetch_latest_transactions(&self, limit: usize) -> Result<Vec<Transaction>, DataError>;

    async fn fetch_staking_data(&self) -> Result<StakingSnapshot, DataError>;

    /// Ordered by descending balance
    async fn fetch_top_holders(&self, limit: usize) -> Result<Vec<Holder>, DataError>;
}
