use arboard::Clipboard;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::dashboard::bootstrap;
use crate::dashboard::types::Dashboard;
use crate::error::DataError;
use crate::api::StakingSnapshot;
use crate::format::short;
use crate::page::ToastKind;

impl Dashboard {
    /// Stub connect: no provider is contacted, the configured demo address
    /// is recorded and attached to the staking snapshot.
    pub fn connect_wallet(&mut self) {
        let address = self.config.wallet_address.clone();
        self.state.set_wallet_address(address);

        if self.state.staking_data().is_none() {
            if !self.wallet_fetch_in_flight {
                self.wallet_fetch_in_flight = true;
                self.pending_tasks += 1;
                bootstrap::spawn_wallet_staking(Arc::clone(&self.provider), self.events_tx.clone());
            }
            self.status_message = Some("Connecting wallet...".to_string());
            return;
        }

        self.finish_wallet_connect();
    }

    /// Second half of connect, once staking data is present
    pub fn finish_wallet_connect(&mut self) {
        let Some(address) = self.state.wallet_address().map(str::to_string) else {
            return;
        };
        self.state.attach_wallet_to_staking(&address);

        info!(wallet = %address, "wallet connected");
        self.status_message = Some(format!("Wallet connected: {}", short(&address)));
        self.toast(format!("Demo: Wallet connected as {}", short(&address)), ToastKind::Success);
    }

    pub(crate) fn on_wallet_staking(&mut self, result: Result<StakingSnapshot, DataError>) {
        self.wallet_fetch_in_flight = false;
        match result {
            Ok(snapshot) => {
                // a bootstrap may have delivered staking data in the meantime
                if self.state.staking_data().is_none() {
                    self.state.set_staking_data(snapshot);
                }
                self.finish_wallet_connect();
            }
            Err(e) => {
                error!(error = %e, "staking data for wallet connect failed");
                self.status_message = Some("Wallet connect failed".to_string());
                self.toast(
                    "Could not load staking data for the wallet. Check the log for details.",
                    ToastKind::Error,
                );
            }
        }
    }

    pub fn copy_wallet_to_clipboard(&mut self) {
        let Some(address) = self.state.wallet_address().map(str::to_string) else {
            self.toast("Connect a wallet first", ToastKind::Info);
            return;
        };

        match Clipboard::new() {
            Ok(mut clipboard) => match clipboard.set_text(address) {
                Ok(_) => {
                    self.toast("Wallet address copied to clipboard", ToastKind::Success);
                }
                Err(e) => {
                    warn!(error = %e, "clipboard write failed");
                    self.toast(format!("Failed to copy to clipboard: {}", e), ToastKind::Error);
                }
            },
            Err(e) => {
                warn!(error = %e, "clipboard unavailable");
                self.toast(format!("Failed to access clipboard: {}", e), ToastKind::Error);
            }
        }
    }
}
