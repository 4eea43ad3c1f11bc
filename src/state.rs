//! # Application State
//!
//! One record per session holding the latest fetched snapshots. Fields are
//! private: every write goes through a setter, and each setter notifies the
//! registered observers with the slice that changed.

use tracing::debug;

use crate::api::{DashboardStats, Holder, StakingSnapshot, Transaction};

/// Which part of the state a write touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSlice {
    WalletAddress,
    StakingData,
    DashboardStats,
    LatestTx,
    TopHolders,
    Loading,
}

type Observer = Box<dyn FnMut(StateSlice)>;

#[derive(Default)]
pub struct AppState {
    wallet_address: Option<String>,
    staking_data: Option<StakingSnapshot>,
    dashboard_stats: Option<DashboardStats>,
    latest_tx: Vec<Transaction>,
    top_holders: Vec<Holder>,
    loading: bool,
    observers: Vec<Observer>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback run after every write
    pub fn observe(&mut self, observer: impl FnMut(StateSlice) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self, slice: StateSlice) {
        debug!(?slice, "state updated");
        for observer in self.observers.iter_mut() {
            observer(slice);
        }
    }

    pub fn wallet_address(&self) -> Option<&str> {
        self.wallet_address.as_deref()
    }

    pub fn staking_data(&self) -> Option<&StakingSnapshot> {
        self.staking_data.as_ref()
    }

    pub fn dashboard_stats(&self) -> Option<&DashboardStats> {
        self.dashboard_stats.as_ref()
    }

    pub fn latest_tx(&self) -> &[Transaction] {
        &self.latest_tx
    }

    pub fn top_holders(&self) -> &[Holder] {
        &self.top_holders
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_wallet_address(&mut self, address: impl Into<String>) {
        self.wallet_address = Some(address.into());
        self.notify(StateSlice::WalletAddress);
    }

    /// Replace the staking snapshot wholesale
    pub fn set_staking_data(&mut self, snapshot: StakingSnapshot) {
        self.staking_data = Some(snapshot);
        self.notify(StateSlice::StakingData);
    }

    /// Record the connected address inside the staking snapshot's wallet record.
    /// Returns false when there is no snapshot to attach to.
    pub fn attach_wallet_to_staking(&mut self, address: &str) -> bool {
        match self.staking_data.as_mut() {
            Some(snapshot) => {
                snapshot.wallet.address = Some(address.to_string());
                self.notify(StateSlice::StakingData);
                true
            }
            None => false,
        }
    }

    pub fn set_dashboard_stats(&mut self, stats: DashboardStats) {
        self.dashboard_stats = Some(stats);
        self.notify(StateSlice::DashboardStats);
    }

    pub fn set_latest_tx(&mut self, txs: Vec<Transaction>) {
        self.latest_tx = txs;
        self.notify(StateSlice::LatestTx);
    }

    pub fn set_top_holders(&mut self, holders: Vec<Holder>) {
        self.top_holders = holders;
        self.notify(StateSlice::TopHolders);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.notify(StateSlice::Loading);
    }
}
