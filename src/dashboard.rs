use anyhow::{Context, Result};
use chrono::Utc;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

pub mod bindings;
pub mod bootstrap;
pub mod types;

mod actions;
mod ui;
mod utils;

use crate::api::{DataProvider, PoolId};
use crate::config::DashboardConfig;
use crate::page::{Page, Section, ToastKind};
use crate::render;
use crate::state::{AppState, StateSlice};
use bindings::BindingTable;
use bootstrap::BootstrapLimits;
pub use types::*;

pub const LOADING_MESSAGE: &str = "Brewing fresh $BEANS data...";
pub const LOAD_ERROR_MESSAGE: &str = "Error loading data (demo). Check the log for details.";

impl Dashboard {
    pub fn new(config: DashboardConfig, provider: Arc<dyn DataProvider>) -> Result<Self> {
        Self::with_page(config, provider, Page::standard())
    }

    /// Build against a specific page layout
    pub fn with_page(config: DashboardConfig, provider: Arc<dyn DataProvider>, page: Page) -> Result<Self> {
        let bindings = BindingTable::standard().context("Failed to build control bindings")?;
        debug!(bindings = bindings.len(), "control bindings ready");
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let dirty = Rc::new(RefCell::new(Vec::new()));
        let mut state = AppState::new();
        let sink = Rc::clone(&dirty);
        state.observe(move |slice| sink.borrow_mut().push(slice));

        Ok(Self {
            state,
            page,
            provider,
            config,
            bindings,
            events_tx,
            events_rx,
            dirty,
            bootstrap_in_flight: false,
            wallet_fetch_in_flight: false,
            pending_tasks: 0,
            should_quit: false,
            mode: AppMode::Normal,
            section: Section::Dashboard,
            selected_pool: PoolId::Flexible,
            sim_field: SimField::Amount,
            status_message: None,
            needs_clear: false,
            animation_frame: 0,
            last_animation_update: Instant::now(),
        })
    }

    /// Page setup done once, then the initial load
    pub fn init(&mut self) {
        render::apply_current_year(&mut self.page, Utc::now());
        self.start_bootstrap();
    }

    /// Kick off the initial load. Ignored while a previous one is still running.
    pub fn start_bootstrap(&mut self) {
        if self.bootstrap_in_flight {
            debug!("bootstrap already in flight, refresh ignored");
            self.toast("Already brewing, hang on...", ToastKind::Info);
            return;
        }

        info!(provider = self.provider.name(), "bootstrap started");
        self.bootstrap_in_flight = true;
        self.pending_tasks += 1;
        self.show_loading(LOADING_MESSAGE);

        let limits = BootstrapLimits {
            transactions: self.config.tx_limit,
            holders: self.config.holder_limit,
        };
        bootstrap::spawn(Arc::clone(&self.provider), limits, self.events_tx.clone());
    }

    /// Apply one background result. All state writes from async work land here.
    pub fn handle_data_event(&mut self, event: DataEvent) {
        match event {
            DataEvent::Stats(stats) => self.state.set_dashboard_stats(stats),
            DataEvent::Transactions(txs) => self.state.set_latest_tx(txs),
            DataEvent::Staking(snapshot) => {
                self.state.set_staking_data(snapshot);
                if let Some(address) = self.state.wallet_address().map(str::to_string) {
                    self.state.attach_wallet_to_staking(&address);
                }
            }
            DataEvent::Holders(holders) => self.state.set_top_holders(holders),
            DataEvent::Failed(e) => {
                error!(error = %e, "error loading initial data");
                self.status_message = Some("Load failed".to_string());
                self.toast(LOAD_ERROR_MESSAGE, ToastKind::Error);
            }
            DataEvent::Finished => {
                self.hide_loading();
                self.bootstrap_in_flight = false;
                self.pending_tasks = self.pending_tasks.saturating_sub(1);
                info!("bootstrap finished");
            }
            DataEvent::WalletStaking(result) => {
                self.pending_tasks = self.pending_tasks.saturating_sub(1);
                self.on_wallet_staking(result);
            }
        }
        self.render_dirty();
    }

    /// Re-render every region whose slice changed since the last pass
    pub fn render_dirty(&mut self) {
        let slices: Vec<StateSlice> = self.dirty.borrow_mut().drain(..).collect();
        if slices.is_empty() {
            return;
        }

        let now = Utc::now();
        for slice in slices {
            match slice {
                StateSlice::DashboardStats => {
                    render::apply_dashboard_stats(&mut self.page, self.state.dashboard_stats());
                }
                StateSlice::LatestTx => {
                    render::apply_latest_tx(&mut self.page, Some(self.state.latest_tx()), now);
                }
                StateSlice::TopHolders => {
                    render::apply_top_holders(&mut self.page, Some(self.state.top_holders()));
                }
                StateSlice::StakingData | StateSlice::WalletAddress => {
                    let snapshot = self.state.staking_data();
                    render::apply_staking_overview(&mut self.page, snapshot, self.state.wallet_address());
                    render::apply_pools(&mut self.page, snapshot);
                }
                StateSlice::Loading => {}
            }
        }
    }

    /// Route a control event through the binding table.
    /// Returns false when nothing is bound to it.
    pub fn dispatch(&mut self, control: ControlId, event: EventKind) -> bool {
        match self.bindings.lookup(control, event) {
            Some(handler) => {
                debug!(control = %control, event = event.as_str(), "dispatch");
                handler(self, control);
                self.render_dirty();
                true
            }
            None => false,
        }
    }

    pub fn show_loading(&mut self, message: &str) {
        if let Some(overlay) = self.page.overlay.as_mut() {
            overlay.visible = true;
            overlay.message = message.to_string();
            self.state.set_loading(true);
        }
    }

    pub fn hide_loading(&mut self) {
        if let Some(overlay) = self.page.overlay.as_mut() {
            overlay.visible = false;
            self.state.set_loading(false);
        }
    }

    pub fn toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        let timeout = Duration::from_millis(self.config.toast_timeout_ms);
        if let Some(toasts) = self.page.toasts.as_mut() {
            toasts.push(message, kind, timeout, Instant::now());
        }
    }

    /// Apply everything already queued without waiting
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_data_event(event);
        }
    }

    /// Wait until every spawned fetch has reported back
    pub async fn settle(&mut self) {
        while self.pending_tasks > 0 {
            match self.events_rx.recv().await {
                Some(event) => self.handle_data_event(event),
                None => break,
            }
        }
        self.drain_events();
    }

    /// Advance timers: toast fades, card effects and the animation frame
    pub fn tick(&mut self, now: Instant) {
        self.page.sweep(now);
        if now.duration_since(self.last_animation_update) > Duration::from_millis(150) {
            self.animation_frame = self.animation_frame.wrapping_add(1);
            self.last_animation_update = now;
        }
    }

    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

        self.status_message = Some("Press ? for help, Q to quit".to_string());
        self.init();

        let res = self.run_app(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        res.context("Dashboard loop failed")
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        info!("dashboard started");

        loop {
            self.drain_events();
            self.tick(Instant::now());

            if self.needs_clear {
                terminal.clear()?;
                self.needs_clear = false;
            }

            terminal.draw(|f| self.ui(f))?;

            // Poll with a timeout so fetch results and animations keep flowing without input
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    // Only handle Press; some terminals also report Release
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                info!("dashboard quit");
                return Ok(());
            }
        }
    }

    pub fn handle_key_event(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if self.mode == AppMode::Help {
            // Any key exits help mode
            self.mode = AppMode::Normal;
            self.needs_clear = true;
            return;
        }

        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let nav_open = self.page.nav.as_ref().map(|n| n.open).unwrap_or(false);
        if nav_open {
            match code {
                KeyCode::Up | KeyCode::Char('k') => self.nav_highlight(false),
                KeyCode::Down | KeyCode::Char('j') => self.nav_highlight(true),
                KeyCode::Enter => {
                    if let Some(section) = self.highlighted_section() {
                        self.dispatch(ControlId::NavLink(section), EventKind::Click);
                    }
                }
                KeyCode::Char(c @ '1'..='5') => self.follow_section_digit(c),
                KeyCode::Esc | KeyCode::Char('m') => {
                    self.dispatch(ControlId::NavToggle, EventKind::Click);
                }
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        // Section-specific keys take precedence over the global ones
        if self.handle_section_key(code) {
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') | KeyCode::Char('h') => {
                self.mode = AppMode::Help;
                self.needs_clear = true;
            }
            KeyCode::Char('m') => {
                self.dispatch(ControlId::NavToggle, EventKind::Click);
            }
            KeyCode::Char('w') => {
                let control = if self.section == Section::Staking {
                    ControlId::StakingConnect
                } else {
                    ControlId::ConnectWallet
                };
                self.dispatch(control, EventKind::Click);
            }
            KeyCode::Char('r') => {
                self.dispatch(ControlId::Refresh, EventKind::Click);
            }
            KeyCode::Char('y') => {
                self.dispatch(ControlId::CopyAddress, EventKind::Click);
            }
            KeyCode::Tab => self.cycle_section(true),
            KeyCode::BackTab => self.cycle_section(false),
            KeyCode::Char(c @ '1'..='5') => self.follow_section_digit(c),
            _ => {}
        }
    }

    /// Keys owned by the current section's inputs. Returns true when consumed.
    fn handle_section_key(&mut self, code: KeyCode) -> bool {
        match self.section {
            Section::Staking => match code {
                KeyCode::Left => {
                    self.selected_pool = self.selected_pool.prev();
                    true
                }
                KeyCode::Right => {
                    self.selected_pool = self.selected_pool.next();
                    true
                }
                KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                    self.pool_input_char(c);
                    true
                }
                KeyCode::Backspace => {
                    self.pool_input_backspace();
                    true
                }
                KeyCode::Enter | KeyCode::Char('s') => {
                    self.pool_click(crate::page::PoolAction::Stake);
                    true
                }
                KeyCode::Char('u') => {
                    self.pool_click(crate::page::PoolAction::Unstake);
                    true
                }
                KeyCode::Char('c') => {
                    self.pool_click(crate::page::PoolAction::Claim);
                    true
                }
                _ => false,
            },
            Section::Simulator => match code {
                KeyCode::Up => {
                    self.sim_field = self.sim_field.prev();
                    true
                }
                KeyCode::Down => {
                    self.sim_field = self.sim_field.next();
                    true
                }
                KeyCode::Left if self.sim_field == SimField::Pool => {
                    self.sim_cycle_pool(false);
                    true
                }
                KeyCode::Right if self.sim_field == SimField::Pool => {
                    self.sim_cycle_pool(true);
                    true
                }
                KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                    self.sim_input_char(c);
                    true
                }
                KeyCode::Backspace => {
                    self.sim_backspace();
                    true
                }
                KeyCode::Enter => {
                    self.dispatch(ControlId::SimCalc, EventKind::Submit);
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    fn pool_click(&mut self, action: crate::page::PoolAction) {
        self.dispatch(ControlId::Pool(self.selected_pool, action), EventKind::Click);
    }

    fn follow_section_digit(&mut self, c: char) {
        let index = c.to_digit(10).map(|d| d as usize).unwrap_or(0);
        if let Some(section) = index.checked_sub(1).and_then(|i| Section::ALL.get(i)).copied() {
            self.dispatch(ControlId::NavLink(section), EventKind::Click);
        }
    }

    fn cycle_section(&mut self, forward: bool) {
        let len = Section::ALL.len();
        let current = Section::ALL.iter().position(|s| *s == self.section).unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.dispatch(ControlId::NavLink(Section::ALL[next]), EventKind::Click);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DashboardStats, DemoApi, Holder, Latency, StakingSnapshot, Transaction};
    use crate::error::DataError;
    use crate::page::{ids, EffectKind, PoolAction, ToastPhase};
    use async_trait::async_trait;

    const WALLET: &str = "0xCoffeeHolics1234567890beef";

    fn demo_dashboard() -> Dashboard {
        let provider: Arc<dyn DataProvider> = Arc::new(DemoApi::new(Latency::zero()));
        Dashboard::new(DashboardConfig::default(), provider).unwrap()
    }

    /// Demo data, except the listed operations fail
    struct FlakyApi {
        inner: DemoApi,
        fail_stats: bool,
        fail_holders: bool,
        fail_staking: bool,
        panic_holders: bool,
        panic_staking: bool,
    }

    impl FlakyApi {
        fn new() -> Self {
            Self {
                inner: DemoApi::new(Latency::zero()),
                fail_stats: false,
                fail_holders: false,
                fail_staking: false,
                panic_holders: false,
                panic_staking: false,
            }
        }
    }

    #[async_trait]
    impl DataProvider for FlakyApi {
        fn name(&self) -> &'static str {
            "flaky"
        }

        async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, DataError> {
            if self.fail_stats {
                return Err(DataError::unavailable("dashboard stats", "offline"));
            }
            self.inner.fetch_dashboard_stats().await
        }

        async fn fetch_latest_transactions(&self, limit: usize) -> Result<Vec<Transaction>, DataError> {
            self.inner.fetch_latest_transactions(limit).await
        }

        async fn fetch_staking_data(&self) -> Result<StakingSnapshot, DataError> {
            if self.panic_staking {
                panic!("staking backend exploded");
            }
            if self.fail_staking {
                return Err(DataError::unavailable("staking data", "offline"));
            }
            self.inner.fetch_staking_data().await
        }

        async fn fetch_top_holders(&self, limit: usize) -> Result<Vec<Holder>, DataError> {
            if self.panic_holders {
                panic!("holder backend exploded");
            }
            if self.fail_holders {
                return Err(DataError::unavailable("top holders", "offline"));
            }
            self.inner.fetch_top_holders(limit).await
        }
    }

    fn flaky_dashboard(api: FlakyApi) -> Dashboard {
        Dashboard::new(DashboardConfig::default(), Arc::new(api)).unwrap()
    }

    fn toast_messages(dashboard: &Dashboard) -> Vec<(String, ToastKind)> {
        dashboard
            .page
            .toasts
            .as_ref()
            .map(|t| t.iter().map(|t| (t.message.clone(), t.kind)).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_bootstrap_renders_every_region() {
        let mut dashboard = demo_dashboard();
        dashboard.init();
        assert!(dashboard.state.is_loading());
        assert_eq!(
            dashboard.page.overlay.as_ref().map(|o| (o.visible, o.message.as_str())),
            Some((true, LOADING_MESSAGE))
        );

        dashboard.settle().await;

        let page = &dashboard.page;
        assert_eq!(page.text(ids::TOTAL_SUPPLY), Some("100,000,000"));
        assert_eq!(page.text(ids::TOKEN_PRICE), Some("$0.0135"));
        assert_eq!(page.text(ids::VOL_24H), Some("$32,000.00 / 24h"));
        assert_eq!(page.text("pool-30-apr"), Some("24%"));
        assert_eq!(page.text(ids::CONNECTED_WALLET), Some("Not connected"));
        assert_eq!(page.rows(ids::LATEST_TX_BODY).map(|r| r.len()), Some(10));
        assert_eq!(page.rows(ids::HOLDERS_BODY).map(|r| r.len()), Some(5));
        assert!(page.text(ids::CURRENT_YEAR).is_some());

        assert!(!dashboard.state.is_loading());
        assert_eq!(page.overlay.as_ref().map(|o| o.visible), Some(false));
        assert!(toast_messages(&dashboard).is_empty());
        assert!(!dashboard.bootstrap_in_flight);
    }

    #[tokio::test]
    async fn test_bootstrap_respects_configured_limits() {
        let provider: Arc<dyn DataProvider> = Arc::new(DemoApi::new(Latency::zero()));
        let config = DashboardConfig { tx_limit: 3, holder_limit: 2, ..Default::default() };
        let mut dashboard = Dashboard::new(config, provider).unwrap();
        dashboard.start_bootstrap();
        dashboard.settle().await;

        assert_eq!(dashboard.state.latest_tx().len(), 3);
        assert_eq!(dashboard.page.rows(ids::HOLDERS_BODY).map(|r| r.len()), Some(2));
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_other_slices_and_raises_one_toast() {
        let mut api = FlakyApi::new();
        api.fail_holders = true;
        let mut dashboard = flaky_dashboard(api);
        dashboard.start_bootstrap();
        dashboard.settle().await;

        assert_eq!(dashboard.page.text(ids::TOTAL_SUPPLY), Some("100,000,000"));
        assert!(dashboard.page.rows(ids::HOLDERS_BODY).map(|r| r.is_empty()).unwrap_or(false));
        assert_eq!(dashboard.page.overlay.as_ref().map(|o| o.visible), Some(false));
        assert!(!dashboard.state.is_loading());
        assert_eq!(
            toast_messages(&dashboard),
            vec![(LOAD_ERROR_MESSAGE.to_string(), ToastKind::Error)]
        );
    }

    #[tokio::test]
    async fn test_panicking_fetch_still_finishes_bootstrap() {
        let mut api = FlakyApi::new();
        api.panic_holders = true;
        let mut dashboard = flaky_dashboard(api);
        dashboard.start_bootstrap();

        tokio::time::timeout(Duration::from_secs(2), dashboard.settle())
            .await
            .expect("bootstrap never reported back");

        assert_eq!(dashboard.page.overlay.as_ref().map(|o| o.visible), Some(false));
        assert!(!dashboard.bootstrap_in_flight);
        assert_eq!(dashboard.pending_tasks, 0);
        assert_eq!(
            toast_messages(&dashboard),
            vec![(LOAD_ERROR_MESSAGE.to_string(), ToastKind::Error)]
        );

        // a refresh afterwards starts a new load instead of being ignored
        dashboard.dispatch(ControlId::Refresh, EventKind::Click);
        assert!(dashboard.bootstrap_in_flight);
        tokio::time::timeout(Duration::from_secs(2), dashboard.settle())
            .await
            .expect("second bootstrap never reported back");
    }

    #[tokio::test]
    async fn test_panicking_wallet_fetch_reports_an_error() {
        let mut api = FlakyApi::new();
        api.panic_staking = true;
        let mut dashboard = flaky_dashboard(api);
        dashboard.connect_wallet();

        tokio::time::timeout(Duration::from_secs(2), dashboard.settle())
            .await
            .expect("wallet fetch never reported back");

        assert_eq!(dashboard.pending_tasks, 0);
        assert!(!dashboard.wallet_fetch_in_flight);
        assert_eq!(dashboard.state.wallet_address(), Some(WALLET));
        assert_eq!(toast_messages(&dashboard).first().map(|t| t.1), Some(ToastKind::Error));
    }

    #[tokio::test]
    async fn test_stats_failure_skips_the_rest() {
        let mut api = FlakyApi::new();
        api.fail_stats = true;
        let mut dashboard = flaky_dashboard(api);
        dashboard.start_bootstrap();
        dashboard.settle().await;

        assert!(dashboard.page.element(ids::TOTAL_SUPPLY).unwrap().skeleton);
        assert!(dashboard.state.staking_data().is_none());
        assert!(dashboard.state.latest_tx().is_empty());
        assert_eq!(toast_messages(&dashboard).len(), 1);
        assert_eq!(dashboard.page.overlay.as_ref().map(|o| o.visible), Some(false));
    }

    #[tokio::test]
    async fn test_refresh_while_loading_is_ignored() {
        let mut dashboard = demo_dashboard();
        dashboard.start_bootstrap();
        assert!(dashboard.dispatch(ControlId::Refresh, EventKind::Click));
        assert_eq!(dashboard.pending_tasks, 1);
        assert_eq!(toast_messages(&dashboard).first().map(|t| t.1), Some(ToastKind::Info));

        dashboard.settle().await;
        assert!(!dashboard.bootstrap_in_flight);

        // a later refresh runs again
        dashboard.dispatch(ControlId::Refresh, EventKind::Click);
        assert!(dashboard.bootstrap_in_flight);
        dashboard.settle().await;
    }

    #[tokio::test]
    async fn test_connect_wallet_after_load() {
        let mut dashboard = demo_dashboard();
        dashboard.start_bootstrap();
        dashboard.settle().await;

        assert!(dashboard.dispatch(ControlId::ConnectWallet, EventKind::Click));
        assert_eq!(dashboard.state.wallet_address(), Some(WALLET));
        assert_eq!(
            dashboard.state.staking_data().and_then(|s| s.wallet.address.as_deref()),
            Some(WALLET)
        );
        assert_eq!(dashboard.page.text(ids::CONNECTED_WALLET), Some("0xCoff...beef"));
        assert_eq!(
            toast_messages(&dashboard),
            vec![("Demo: Wallet connected as 0xCoff...beef".to_string(), ToastKind::Success)]
        );
    }

    #[tokio::test]
    async fn test_connect_wallet_fetches_missing_staking_data() {
        let mut dashboard = demo_dashboard();
        dashboard.dispatch(ControlId::StakingConnect, EventKind::Click);
        assert_eq!(dashboard.state.wallet_address(), Some(WALLET));
        assert!(dashboard.state.staking_data().is_none());

        dashboard.settle().await;

        assert_eq!(dashboard.page.text(ids::CONNECTED_WALLET), Some("0xCoff...beef"));
        assert_eq!(dashboard.page.text("pool-90-apr"), Some("48%"));
        assert_eq!(toast_messages(&dashboard).len(), 1);
    }

    #[tokio::test]
    async fn test_connect_wallet_failure_keeps_address() {
        let mut api = FlakyApi::new();
        api.fail_staking = true;
        let mut dashboard = flaky_dashboard(api);
        dashboard.connect_wallet();
        dashboard.settle().await;

        assert_eq!(dashboard.state.wallet_address(), Some(WALLET));
        assert!(dashboard.state.staking_data().is_none());
        assert_eq!(toast_messages(&dashboard).first().map(|t| t.1), Some(ToastKind::Error));
    }

    #[tokio::test]
    async fn test_pool_actions_toast_and_animate() {
        let mut dashboard = demo_dashboard();
        if let Some(card) = dashboard.page.pool_card_mut(PoolId::ThirtyDays) {
            card.amount_input = "250".to_string();
        }

        dashboard.dispatch(ControlId::Pool(PoolId::ThirtyDays, PoolAction::Stake), EventKind::Click);
        dashboard.dispatch(ControlId::Pool(PoolId::Flexible, PoolAction::Stake), EventKind::Click);
        dashboard.dispatch(ControlId::Pool(PoolId::NinetyDays, PoolAction::Unstake), EventKind::Click);
        dashboard.dispatch(ControlId::Pool(PoolId::NinetyDays, PoolAction::Claim), EventKind::Click);

        let messages: Vec<String> = toast_messages(&dashboard).into_iter().map(|t| t.0).collect();
        assert_eq!(
            messages,
            vec![
                "Demo: Stake 250 BEANS in pool 30days",
                "Demo: Stake 0 BEANS in pool flexible",
                "Demo: Unstake from pool 90days",
                "Demo: Claim rewards from pool 90days",
            ]
        );

        let card = dashboard.page.pool_card(PoolId::ThirtyDays).unwrap();
        assert!(card.has_effect(EffectKind::BeanDrop));
        assert!(!card.has_effect(EffectKind::Sparkle));
        let card = dashboard.page.pool_card(PoolId::NinetyDays).unwrap();
        assert!(card.has_effect(EffectKind::BeanDrop));
        assert!(card.has_effect(EffectKind::Sparkle));

        dashboard.tick(Instant::now() + Duration::from_secs(1));
        assert!(dashboard.page.pool_card(PoolId::NinetyDays).unwrap().effects.is_empty());
    }

    #[test]
    fn test_toasts_expire_on_tick() {
        let mut dashboard = demo_dashboard();
        dashboard.toast("hello", ToastKind::Success);
        let start = Instant::now();

        dashboard.tick(start + Duration::from_millis(3050));
        assert_eq!(
            dashboard.page.toasts.as_ref().and_then(|t| t.last()).map(|t| t.phase),
            Some(ToastPhase::Fading)
        );

        dashboard.tick(start + Duration::from_millis(3300));
        assert!(dashboard.page.toasts.as_ref().map(|t| t.is_empty()).unwrap_or(false));
    }

    #[test]
    fn test_simulator_reruns_on_every_input() {
        let mut dashboard = demo_dashboard();
        dashboard.section = Section::Simulator;

        for c in "1000".chars() {
            dashboard.handle_key_event(KeyCode::Char(c), KeyModifiers::NONE);
        }
        assert_eq!(dashboard.page.simulator.amount, "1000");
        assert_eq!(dashboard.page.text(ids::SIM_APR), Some("12.00%"));
        assert_eq!(dashboard.page.text(ids::SIM_REWARDS), Some("9.8630 BEANS"));

        // switch to 90 days pool
        dashboard.sim_field = SimField::Pool;
        dashboard.handle_key_event(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(dashboard.page.simulator.pool, "90days");
        assert_eq!(dashboard.page.text(ids::SIM_APR), Some("48.00%"));

        // clearing days falls back to placeholders
        dashboard.sim_field = SimField::Days;
        dashboard.handle_key_event(KeyCode::Backspace, KeyModifiers::NONE);
        dashboard.handle_key_event(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(dashboard.page.text(ids::SIM_REWARDS), Some("-- $BEANS"));
        assert_eq!(dashboard.page.text(ids::SIM_DAILY_YIELD), Some("-- $BEANS / day"));
    }

    #[test]
    fn test_nav_toggle_and_links() {
        let mut dashboard = demo_dashboard();
        dashboard.dispatch(ControlId::NavToggle, EventKind::Click);
        let nav = dashboard.page.nav.clone().unwrap();
        assert!(nav.open && nav.toggle_active);

        dashboard.dispatch(ControlId::NavLink(Section::Holders), EventKind::Click);
        let nav = dashboard.page.nav.clone().unwrap();
        assert!(!nav.open && !nav.toggle_active);
        assert_eq!(dashboard.section, Section::Holders);

        // a link with the menu closed just moves
        dashboard.dispatch(ControlId::NavLink(Section::Staking), EventKind::Click);
        assert_eq!(dashboard.section, Section::Staking);
        assert!(!dashboard.page.nav.as_ref().unwrap().open);
    }

    #[test]
    fn test_missing_page_regions_are_noops() {
        let provider: Arc<dyn DataProvider> = Arc::new(DemoApi::new(Latency::zero()));
        let mut dashboard = Dashboard::with_page(DashboardConfig::default(), provider, Page::empty()).unwrap();

        dashboard.show_loading(LOADING_MESSAGE);
        assert!(!dashboard.state.is_loading());
        dashboard.toast("nobody sees this", ToastKind::Info);
        dashboard.dispatch(ControlId::NavToggle, EventKind::Click);
        dashboard.dispatch(ControlId::Pool(PoolId::Flexible, PoolAction::Claim), EventKind::Click);
        dashboard.handle_data_event(DataEvent::Stats(DemoApi::stats()));
        assert!(dashboard.page.text(ids::TOTAL_SUPPLY).is_none());
    }

    #[test]
    fn test_help_mode_and_quit() {
        let mut dashboard = demo_dashboard();
        dashboard.handle_key_event(KeyCode::Char('?'), KeyModifiers::NONE);
        assert_eq!(dashboard.mode, AppMode::Help);
        dashboard.handle_key_event(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(dashboard.mode, AppMode::Normal);
        assert!(!dashboard.should_quit);
        dashboard.handle_key_event(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(dashboard.should_quit);
    }
}
