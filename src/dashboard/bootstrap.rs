// Initial load: stats first, then transactions, staking and holders concurrently.
// Every slice is posted to the controller as soon as its fetch completes.

use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error};

use crate::api::DataProvider;
use crate::dashboard::types::DataEvent;
use crate::error::DataError;

/// Row limits requested by one bootstrap run
#[derive(Debug, Clone, Copy)]
pub struct BootstrapLimits {
    pub transactions: usize,
    pub holders: usize,
}

async fn load(
    provider: &dyn DataProvider,
    limits: BootstrapLimits,
    events: &UnboundedSender<DataEvent>,
) -> Result<(), DataError> {
    let stats = provider.fetch_dashboard_stats().await?;
    let _ = events.send(DataEvent::Stats(stats));

    let transactions = async {
        let txs = provider.fetch_latest_transactions(limits.transactions).await?;
        debug!(count = txs.len(), "transactions loaded");
        let _ = events.send(DataEvent::Transactions(txs));
        Ok::<_, DataError>(())
    };
    let staking = async {
        let snapshot = provider.fetch_staking_data().await?;
        debug!(pools = snapshot.pools.len(), "staking data loaded");
        let _ = events.send(DataEvent::Staking(snapshot));
        Ok::<_, DataError>(())
    };
    let holders = async {
        let holders = provider.fetch_top_holders(limits.holders).await?;
        debug!(count = holders.len(), "holders loaded");
        let _ = events.send(DataEvent::Holders(holders));
        Ok::<_, DataError>(())
    };

    tokio::try_join!(transactions, staking, holders)?;
    Ok(())
}

/// A fetch task that died without reporting, e.g. a panicking provider
fn lost_task(resource: &'static str, e: JoinError) -> DataError {
    error!(resource, error = %e, "fetch task aborted");
    DataError::unavailable(resource, e)
}

/// Run the initial load in a background task.
///
/// Exactly one `Finished` is posted at the end, preceded by one `Failed`
/// if any fetch errored or the load task panicked.
pub fn spawn(
    provider: Arc<dyn DataProvider>,
    limits: BootstrapLimits,
    events: UnboundedSender<DataEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let load_events = events.clone();
        let task = tokio::spawn(async move { load(provider.as_ref(), limits, &load_events).await });

        let result = match task.await {
            Ok(result) => result,
            Err(e) => Err(lost_task("bootstrap", e)),
        };
        if let Err(e) = result {
            let _ = events.send(DataEvent::Failed(e));
        }
        let _ = events.send(DataEvent::Finished);
    })
}

/// Fetch staking data on behalf of wallet connect
pub fn spawn_wallet_staking(provider: Arc<dyn DataProvider>, events: UnboundedSender<DataEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let task = tokio::spawn(async move { provider.fetch_staking_data().await });
        let result = match task.await {
            Ok(result) => result,
            Err(e) => Err(lost_task("staking data", e)),
        };
        let _ = events.send(DataEvent::WalletStaking(result));
    })
}
