//! # Page
//!
//! In-memory document the renderers write to and the terminal UI draws.
//! Regions are addressed by the same identifiers the web page used
//! (`total-supply`, `latest-tx-body`, `sim-amount`, ...). Lookups of an
//! unregistered identifier are silent no-ops.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::api::PoolId;

/// Element identifiers
pub mod ids {
    pub const TOTAL_SUPPLY: &str = "total-supply";
    pub const CIRCULATING_SUPPLY: &str = "circulating-supply";
    pub const TOTAL_BURNED: &str = "total-burned";
    pub const TOTAL_REFLECTIONS: &str = "total-reflections";
    pub const WALLET_COUNT: &str = "wallet-count";
    pub const TX_COUNT: &str = "tx-count";
    pub const MARKET_CAP: &str = "market-cap";
    pub const TOKEN_PRICE: &str = "token-price";
    pub const VOL_24H: &str = "vol-24h";
    pub const BURN_24H: &str = "burn-24h";
    pub const REFL_24H: &str = "refl-24h";

    pub const LATEST_TX_BODY: &str = "latest-tx-body";
    pub const HOLDERS_BODY: &str = "holders-body";

    pub const CONNECTED_WALLET: &str = "connected-wallet";
    pub const WALLET_BALANCE: &str = "wallet-balance";
    pub const TOTAL_STAKED: &str = "total-staked";
    pub const TOTAL_PENDING_REWARDS: &str = "total-pending-rewards";

    pub const SIM_AMOUNT: &str = "sim-amount";
    pub const SIM_DAYS: &str = "sim-days";
    pub const SIM_POOL: &str = "sim-pool";
    pub const SIM_CALC_BTN: &str = "sim-calc-btn";
    pub const SIM_APR: &str = "sim-apr";
    pub const SIM_REWARDS: &str = "sim-rewards";
    pub const SIM_TOTAL: &str = "sim-total";
    pub const SIM_DAILY_YIELD: &str = "sim-daily-yield";

    pub const CURRENT_YEAR: &str = "current-year";
    pub const CONNECT_WALLET_BTN: &str = "connect-wallet-btn";
    pub const STAKING_CONNECT_BTN: &str = "staking-connect-btn";
    pub const COPY_ADDRESS_BTN: &str = "copy-address-btn";
    pub const REFRESH_BTN: &str = "refresh-btn";
    pub const NAV_TOGGLE: &str = "nav-toggle";

    /// Column count of the transactions table
    pub const TX_COLUMNS: usize = 5;
    /// Column count of the holders table
    pub const HOLDER_COLUMNS: usize = 4;
}

/// Per-pool stat fields, suffixed onto [`PoolId::element_prefix`]
pub const POOL_FIELDS: [&str; 4] = ["apr", "tvl", "staked", "rewards"];

pub fn pool_element(pool: PoolId, field: &str) -> String {
    format!("{}-{}", pool.element_prefix(), field)
}

/// Text node with the skeleton (still loading) marker
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub text: String,
    pub skeleton: bool,
}

impl TextElement {
    fn skeleton() -> Self {
        Self {
            text: String::new(),
            skeleton: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub text: String,
    pub class: Option<&'static str>,
}

impl TableCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    pub fn with_class(text: impl Into<String>, class: &'static str) -> Self {
        Self {
            text: text.into(),
            class: Some(class),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Cells(Vec<TableCell>),
    /// Single cell spanning the whole table
    Placeholder { message: String, col_span: usize },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadingOverlay {
    pub visible: bool,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Shown,
    Fading,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
    shown_at: Instant,
    timeout: Duration,
}

impl Toast {
    fn fade_starts_at(&self) -> Instant {
        self.shown_at + self.timeout
    }
}

/// Accumulates transient notifications. Each one fades after its timeout
/// and is removed once the fade finishes.
#[derive(Debug, Default)]
pub struct ToastContainer {
    toasts: Vec<Toast>,
}

impl ToastContainer {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);
    pub const FADE: Duration = Duration::from_millis(200);

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, timeout: Duration, now: Instant) {
        self.toasts.push(Toast {
            message: message.into(),
            kind,
            phase: ToastPhase::Shown,
            shown_at: now,
            timeout,
        });
    }

    /// Advance fades and drop finished toasts
    pub fn sweep(&mut self, now: Instant) {
        self.toasts.retain(|t| now < t.fade_starts_at() + Self::FADE);
        for toast in self.toasts.iter_mut() {
            if now >= toast.fade_starts_at() {
                toast.phase = ToastPhase::Fading;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

/// The three controls every pool card exposes, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PoolAction {
    Stake,
    Unstake,
    Claim,
}

impl PoolAction {
    pub const ORDER: [PoolAction; 3] = [PoolAction::Stake, PoolAction::Unstake, PoolAction::Claim];

    pub fn label(&self) -> &'static str {
        match self {
            PoolAction::Stake => "STAKE",
            PoolAction::Unstake => "UNSTAKE",
            PoolAction::Claim => "CLAIM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    BeanDrop,
    Sparkle,
}

#[derive(Debug, Clone, Copy)]
pub struct CardEffect {
    pub kind: EffectKind,
    started: Instant,
}

#[derive(Debug, Clone)]
pub struct PoolCard {
    pub pool_id: PoolId,
    /// Raw text of the card's numeric input
    pub amount_input: String,
    pub effects: Vec<CardEffect>,
}

impl PoolCard {
    /// How long a bean drop or sparkle stays on the card
    pub const EFFECT_DURATION: Duration = Duration::from_millis(900);

    fn new(pool_id: PoolId) -> Self {
        Self {
            pool_id,
            amount_input: String::new(),
            effects: Vec::new(),
        }
    }

    pub fn actions(&self) -> [PoolAction; 3] {
        PoolAction::ORDER
    }

    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }
}

/// Raw simulator field values, as typed
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorForm {
    pub amount: String,
    pub days: String,
    pub pool: String,
}

impl Default for SimulatorForm {
    fn default() -> Self {
        Self {
            amount: String::new(),
            days: "30".to_string(),
            pool: PoolId::Flexible.as_str().to_string(),
        }
    }
}

/// Page sections reachable from the nav menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Dashboard,
    Transactions,
    Holders,
    Staking,
    Simulator,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Transactions,
        Section::Holders,
        Section::Staking,
        Section::Simulator,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Transactions => "Transactions",
            Section::Holders => "Holders",
            Section::Staking => "Staking",
            Section::Simulator => "Simulator",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavMenu {
    pub open: bool,
    pub toggle_active: bool,
    pub highlighted: usize,
}

#[derive(Debug, Default)]
pub struct Page {
    texts: BTreeMap<String, TextElement>,
    tables: BTreeMap<String, Vec<TableRow>>,
    pub overlay: Option<LoadingOverlay>,
    pub toasts: Option<ToastContainer>,
    pub pool_cards: Vec<PoolCard>,
    pub simulator: SimulatorForm,
    pub nav: Option<NavMenu>,
}

impl Page {
    /// Page with no registered elements at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// The full dashboard layout
    pub fn standard() -> Self {
        let mut page = Self::empty();

        let text_ids = [
            ids::TOTAL_SUPPLY,
            ids::CIRCULATING_SUPPLY,
            ids::TOTAL_BURNED,
            ids::TOTAL_REFLECTIONS,
            ids::WALLET_COUNT,
            ids::TX_COUNT,
            ids::MARKET_CAP,
            ids::TOKEN_PRICE,
            ids::VOL_24H,
            ids::BURN_24H,
            ids::REFL_24H,
            ids::CONNECTED_WALLET,
            ids::WALLET_BALANCE,
            ids::TOTAL_STAKED,
            ids::TOTAL_PENDING_REWARDS,
            ids::SIM_APR,
            ids::SIM_REWARDS,
            ids::SIM_TOTAL,
            ids::SIM_DAILY_YIELD,
            ids::CURRENT_YEAR,
        ];
        for id in text_ids {
            page.register_text(id);
        }
        for pool in PoolId::ALL {
            for field in POOL_FIELDS {
                page.register_text(&pool_element(pool, field));
            }
            page.pool_cards.push(PoolCard::new(pool));
        }

        page.register_table(ids::LATEST_TX_BODY);
        page.register_table(ids::HOLDERS_BODY);
        page.overlay = Some(LoadingOverlay::default());
        page.toasts = Some(ToastContainer::default());
        page.nav = Some(NavMenu::default());
        page
    }

    pub fn register_text(&mut self, id: &str) {
        self.texts.insert(id.to_string(), TextElement::skeleton());
    }

    pub fn register_table(&mut self, id: &str) {
        self.tables.insert(id.to_string(), Vec::new());
    }

    /// Write text content and clear the skeleton marker.
    /// Returns false, changing nothing, when the element does not exist.
    pub fn set_text(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.texts.get_mut(id) {
            Some(el) => {
                el.text = value.into();
                el.skeleton = false;
                true
            }
            None => false,
        }
    }

    pub fn element(&self, id: &str) -> Option<&TextElement> {
        self.texts.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.texts.get(id).map(|el| el.text.as_str())
    }

    /// Clear a table body and write new rows. False when the table is missing.
    pub fn replace_rows(&mut self, id: &str, rows: Vec<TableRow>) -> bool {
        match self.tables.get_mut(id) {
            Some(body) => {
                *body = rows;
                true
            }
            None => false,
        }
    }

    pub fn rows(&self, id: &str) -> Option<&[TableRow]> {
        self.tables.get(id).map(|rows| rows.as_slice())
    }

    pub fn pool_card(&self, pool: PoolId) -> Option<&PoolCard> {
        self.pool_cards.iter().find(|c| c.pool_id == pool)
    }

    pub fn pool_card_mut(&mut self, pool: PoolId) -> Option<&mut PoolCard> {
        self.pool_cards.iter_mut().find(|c| c.pool_id == pool)
    }

    /// Start a card animation; it removes itself after [`PoolCard::EFFECT_DURATION`]
    pub fn spawn_effect(&mut self, pool: PoolId, kind: EffectKind, now: Instant) {
        if let Some(card) = self.pool_card_mut(pool) {
            card.effects.push(CardEffect { kind, started: now });
        }
    }

    /// Expire finished animations and toasts
    pub fn sweep(&mut self, now: Instant) {
        if let Some(toasts) = self.toasts.as_mut() {
            toasts.sweep(now);
        }
        for card in self.pool_cards.iter_mut() {
            card.effects
                .retain(|e| now.duration_since(e.started) < PoolCard::EFFECT_DURATION);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_clears_skeleton_once_written() {
        let mut page = Page::standard();
        assert_eq!(page.element(ids::TOTAL_SUPPLY).map(|e| e.skeleton), Some(true));

        assert!(page.set_text(ids::TOTAL_SUPPLY, "100,000,000"));
        let el = page.element(ids::TOTAL_SUPPLY).unwrap();
        assert_eq!(el.text, "100,000,000");
        assert!(!el.skeleton);

        assert!(page.set_text(ids::TOTAL_SUPPLY, "99"));
        assert!(!page.element(ids::TOTAL_SUPPLY).unwrap().skeleton);
    }

    #[test]
    fn test_missing_elements_are_noops() {
        let mut page = Page::empty();
        assert!(!page.set_text(ids::TOTAL_SUPPLY, "1"));
        assert!(page.text(ids::TOTAL_SUPPLY).is_none());
        assert!(!page.replace_rows(ids::LATEST_TX_BODY, vec![]));
        page.spawn_effect(PoolId::Flexible, EffectKind::BeanDrop, Instant::now());
        assert!(page.pool_cards.is_empty());
    }

    #[test]
    fn test_standard_page_has_pool_fields_and_cards() {
        let page = Page::standard();
        assert!(page.text("pool-flexible-apr").is_some());
        assert!(page.text("pool-30-rewards").is_some());
        assert!(page.text("pool-90-tvl").is_some());
        assert_eq!(page.pool_cards.len(), 3);
        for card in &page.pool_cards {
            assert_eq!(card.actions(), [PoolAction::Stake, PoolAction::Unstake, PoolAction::Claim]);
        }
    }

    #[test]
    fn test_toast_fades_then_disappears() {
        let start = Instant::now();
        let mut toasts = ToastContainer::default();
        toasts.push("Saved", ToastKind::Success, ToastContainer::DEFAULT_TIMEOUT, start);
        toasts.push("Later", ToastKind::Info, ToastContainer::DEFAULT_TIMEOUT, start + Duration::from_millis(1000));

        toasts.sweep(start + Duration::from_millis(2999));
        assert_eq!(toasts.len(), 2);
        assert!(toasts.iter().all(|t| t.phase == ToastPhase::Shown));

        toasts.sweep(start + Duration::from_millis(3100));
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts.iter().next().map(|t| t.phase), Some(ToastPhase::Fading));

        toasts.sweep(start + Duration::from_millis(3200));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.last().map(|t| t.message.as_str()), Some("Later"));

        toasts.sweep(start + Duration::from_millis(4200));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_card_effects_expire() {
        let start = Instant::now();
        let mut page = Page::standard();
        page.spawn_effect(PoolId::ThirtyDays, EffectKind::Sparkle, start);
        assert!(page.pool_card(PoolId::ThirtyDays).unwrap().has_effect(EffectKind::Sparkle));

        page.sweep(start + Duration::from_millis(500));
        assert!(page.pool_card(PoolId::ThirtyDays).unwrap().has_effect(EffectKind::Sparkle));

        page.sweep(start + PoolCard::EFFECT_DURATION);
        assert!(!page.pool_card(PoolId::ThirtyDays).unwrap().has_effect(EffectKind::Sparkle));
    }
}
