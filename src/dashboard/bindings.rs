//! Declarative control table: `(control, event) -> handler`.
//!
//! Built once when the dashboard is created. Every key press is translated
//! into a control event and dispatched through this table, so the set of
//! interactive behaviours is visible in one place.

use std::collections::HashMap;

use crate::api::PoolId;
use crate::dashboard::types::{ControlId, Dashboard, EventKind, Handler};
use crate::error::BindingError;
use crate::page::{PoolAction, Section};

#[derive(Default)]
pub struct BindingTable {
    handlers: HashMap<(ControlId, EventKind), Handler>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. A second handler for the same control and event
    /// is rejected.
    pub fn bind(&mut self, control: ControlId, event: EventKind, handler: Handler) -> Result<(), BindingError> {
        if self.handlers.contains_key(&(control, event)) {
            return Err(BindingError::Duplicate {
                control: control.to_string(),
                event: event.as_str(),
            });
        }
        self.handlers.insert((control, event), handler);
        Ok(())
    }

    pub fn lookup(&self, control: ControlId, event: EventKind) -> Option<Handler> {
        self.handlers.get(&(control, event)).copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// The dashboard's full set of bindings
    pub fn standard() -> Result<Self, BindingError> {
        let mut table = Self::new();

        table.bind(ControlId::ConnectWallet, EventKind::Click, on_connect_wallet)?;
        table.bind(ControlId::StakingConnect, EventKind::Click, on_connect_wallet)?;
        table.bind(ControlId::CopyAddress, EventKind::Click, on_copy_address)?;
        table.bind(ControlId::Refresh, EventKind::Click, on_refresh)?;

        // simulator re-runs from the current field values on every change
        table.bind(ControlId::SimAmount, EventKind::Input, on_simulator_change)?;
        table.bind(ControlId::SimDays, EventKind::Input, on_simulator_change)?;
        table.bind(ControlId::SimPool, EventKind::Change, on_simulator_change)?;
        table.bind(ControlId::SimCalc, EventKind::Submit, on_simulator_change)?;

        table.bind(ControlId::NavToggle, EventKind::Click, on_nav_toggle)?;
        for section in Section::ALL {
            table.bind(ControlId::NavLink(section), EventKind::Click, on_nav_link)?;
        }

        for pool in PoolId::ALL {
            for action in PoolAction::ORDER {
                table.bind(ControlId::Pool(pool, action), EventKind::Click, on_pool_action)?;
            }
        }

        Ok(table)
    }
}

fn on_connect_wallet(dashboard: &mut Dashboard, _control: ControlId) {
    dashboard.connect_wallet();
}

fn on_copy_address(dashboard: &mut Dashboard, _control: ControlId) {
    dashboard.copy_wallet_to_clipboard();
}

fn on_refresh(dashboard: &mut Dashboard, _control: ControlId) {
    dashboard.start_bootstrap();
}

fn on_simulator_change(dashboard: &mut Dashboard, _control: ControlId) {
    dashboard.update_simulator();
}

fn on_nav_toggle(dashboard: &mut Dashboard, _control: ControlId) {
    dashboard.toggle_nav();
}

fn on_nav_link(dashboard: &mut Dashboard, control: ControlId) {
    if let ControlId::NavLink(section) = control {
        dashboard.follow_nav_link(section);
    }
}

fn on_pool_action(dashboard: &mut Dashboard, control: ControlId) {
    if let ControlId::Pool(pool, action) = control {
        match action {
            PoolAction::Stake => dashboard.stake(pool),
            PoolAction::Unstake => dashboard.unstake(pool),
            PoolAction::Claim => dashboard.claim(pool),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_dashboard: &mut Dashboard, _control: ControlId) {}

    #[test]
    fn test_standard_table_covers_every_control() {
        let table = BindingTable::standard().unwrap();
        assert_eq!(table.len(), 4 + 4 + 1 + Section::ALL.len() + PoolId::ALL.len() * 3);

        assert!(table.lookup(ControlId::SimCalc, EventKind::Submit).is_some());
        assert!(table.lookup(ControlId::SimPool, EventKind::Change).is_some());
        assert!(table.lookup(ControlId::Pool(PoolId::NinetyDays, PoolAction::Claim), EventKind::Click).is_some());
        // only the event kinds that were bound
        assert!(table.lookup(ControlId::SimCalc, EventKind::Click).is_none());
    }

    #[test]
    fn test_duplicate_binding_rejected() {
        let mut table = BindingTable::new();
        table.bind(ControlId::NavToggle, EventKind::Click, noop).unwrap();

        let err = table.bind(ControlId::NavToggle, EventKind::Click, noop).unwrap_err();
        assert_eq!(
            err,
            BindingError::Duplicate {
                control: "nav-toggle".to_string(),
                event: "click",
            }
        );
        assert_eq!(table.len(), 1);

        // same control, different event is fine
        table.bind(ControlId::NavToggle, EventKind::Change, noop).unwrap();
    }

    #[test]
    fn test_control_ids_match_page_identifiers() {
        assert_eq!(ControlId::ConnectWallet.to_string(), "connect-wallet-btn");
        assert_eq!(ControlId::SimAmount.to_string(), "sim-amount");
        assert_eq!(ControlId::NavLink(Section::Staking).to_string(), "nav-link-staking");
        assert_eq!(
            ControlId::Pool(PoolId::ThirtyDays, PoolAction::Unstake).to_string(),
            "pool-30-unstake-btn"
        );
    }
}
