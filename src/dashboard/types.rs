use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::api::{DashboardStats, DataProvider, Holder, PoolId, StakingSnapshot, Transaction};
use crate::config::DashboardConfig;
use crate::dashboard::bindings::BindingTable;
use crate::error::DataError;
use crate::page::{ids, Page, PoolAction, Section};
use crate::state::{AppState, StateSlice};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Normal,
    Help,
}

/// Which simulator field keyboard input goes to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimField {
    Amount,
    Days,
    Pool,
}

impl SimField {
    pub fn next(&self) -> SimField {
        match self {
            SimField::Amount => SimField::Days,
            SimField::Days => SimField::Pool,
            SimField::Pool => SimField::Amount,
        }
    }

    pub fn prev(&self) -> SimField {
        match self {
            SimField::Amount => SimField::Pool,
            SimField::Days => SimField::Amount,
            SimField::Pool => SimField::Days,
        }
    }
}

/// Interactive controls of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    ConnectWallet,
    StakingConnect,
    CopyAddress,
    Refresh,
    SimAmount,
    SimDays,
    SimPool,
    SimCalc,
    NavToggle,
    NavLink(Section),
    Pool(PoolId, PoolAction),
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlId::ConnectWallet => f.write_str(ids::CONNECT_WALLET_BTN),
            ControlId::StakingConnect => f.write_str(ids::STAKING_CONNECT_BTN),
            ControlId::CopyAddress => f.write_str(ids::COPY_ADDRESS_BTN),
            ControlId::Refresh => f.write_str(ids::REFRESH_BTN),
            ControlId::SimAmount => f.write_str(ids::SIM_AMOUNT),
            ControlId::SimDays => f.write_str(ids::SIM_DAYS),
            ControlId::SimPool => f.write_str(ids::SIM_POOL),
            ControlId::SimCalc => f.write_str(ids::SIM_CALC_BTN),
            ControlId::NavToggle => f.write_str(ids::NAV_TOGGLE),
            ControlId::NavLink(section) => write!(f, "nav-link-{}", section.label().to_lowercase()),
            ControlId::Pool(pool, action) => {
                write!(f, "{}-{}-btn", pool.element_prefix(), action.label().to_lowercase())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Input,
    Change,
    Submit,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Input => "input",
            EventKind::Change => "change",
            EventKind::Submit => "submit",
        }
    }
}

pub type Handler = fn(&mut Dashboard, ControlId);

/// Results delivered from background fetches to the controller.
/// This channel is the only way async work reaches state.
#[derive(Debug)]
pub enum DataEvent {
    Stats(DashboardStats),
    Transactions(Vec<Transaction>),
    Staking(StakingSnapshot),
    Holders(Vec<Holder>),
    /// A bootstrap fetch failed; slices already delivered stay
    Failed(DataError),
    /// The bootstrap task ended, successfully or not
    Finished,
    /// Lazy staking fetch triggered by wallet connect
    WalletStaking(Result<StakingSnapshot, DataError>),
}

/// Dashboard state structure
pub struct Dashboard {
    pub state: AppState,
    pub page: Page,
    pub provider: Arc<dyn DataProvider>,
    pub config: DashboardConfig,
    pub bindings: BindingTable,
    pub events_tx: UnboundedSender<DataEvent>,
    pub events_rx: UnboundedReceiver<DataEvent>,
    /// Slices written since the last render pass, fed by the state observer
    pub dirty: Rc<RefCell<Vec<StateSlice>>>,
    pub bootstrap_in_flight: bool,
    pub wallet_fetch_in_flight: bool,
    /// Spawned tasks that have not reported back yet
    pub pending_tasks: usize,
    pub should_quit: bool,
    pub mode: AppMode,
    pub section: Section,
    pub selected_pool: PoolId,
    pub sim_field: SimField,
    pub status_message: Option<String>,
    pub needs_clear: bool,
    // Animation state
    pub animation_frame: u8,
    pub last_animation_update: std::time::Instant,
}
