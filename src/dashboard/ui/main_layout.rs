use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Tabs},
    Frame,
};

use super::helpers::{key_badge, SKELETON};
use crate::api::PoolId;
use crate::dashboard::types::*;
use crate::icons::Icons;
use crate::page::{ids, pool_element, EffectKind, PoolAction, Section, TableRow};
use crate::render::HASH_CELL;
use crate::theme::Theme;

fn panel(title: String, active: bool) -> Block<'static> {
    let border = if active { Theme::active_border() } else { Theme::inactive_border() };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(title)
        .title_style(Style::default().fg(Theme::header()).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Theme::PANEL_BG))
}

impl Dashboard {
    pub fn ui(&self, f: &mut Frame) {
        let area = f.area();
        f.render_widget(Block::default().style(Style::default().bg(Theme::BASE)), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(10), Constraint::Length(3)])
            .split(area);

        self.render_header(f, chunks[0]);
        match self.section {
            Section::Dashboard => self.render_stats_panel(f, chunks[1]),
            Section::Transactions => self.render_transactions_panel(f, chunks[1]),
            Section::Holders => self.render_holders_panel(f, chunks[1]),
            Section::Staking => self.render_staking_panel(f, chunks[1]),
            Section::Simulator => self.render_simulator_panel(f, chunks[1]),
        }
        self.render_footer(f, chunks[2]);

        if self.page.nav.as_ref().map(|n| n.open).unwrap_or(false) {
            self.render_nav_menu(f, area);
        }
        if self.state.is_loading() {
            self.render_loading_overlay(f, area);
        }
        self.render_toasts(f, area);
        if self.mode == AppMode::Help {
            self.render_help_overlay(f, area);
        }
    }

    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(30), Constraint::Length(24)])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(" $BEANS ", Style::default().fg(Theme::BASE).bg(Theme::CREMA).add_modifier(Modifier::BOLD)),
            Span::styled(" CoffeeHolics", Style::default().fg(Theme::CREMA)),
        ]))
        .block(panel(String::new(), false));
        f.render_widget(title, chunks[0]);

        let toggle_active = self.page.nav.as_ref().map(|n| n.toggle_active).unwrap_or(false);
        let titles: Vec<Line> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| Line::from(format!("{} {}", i + 1, s.label())))
            .collect();
        let selected = Section::ALL.iter().position(|s| *s == self.section).unwrap_or(0);
        let tabs = Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(Theme::SUBTEXT))
            .highlight_style(Style::default().fg(Theme::selection()).add_modifier(Modifier::BOLD))
            .block(panel(format!(" {} MENU ", Icons::MENU), toggle_active));
        f.render_widget(tabs, chunks[1]);

        let wallet = match self.state.wallet_address() {
            Some(address) => Span::styled(
                format!("{} {}", Icons::WALLET, crate::format::short(address)),
                Style::default().fg(Theme::success()),
            ),
            None => Span::styled(
                format!("{} connect: W", Icons::WALLET),
                Style::default().fg(Theme::OVERLAY),
            ),
        };
        let wallet = Paragraph::new(Line::from(wallet))
            .alignment(Alignment::Center)
            .block(panel(String::new(), false));
        f.render_widget(wallet, chunks[2]);
    }

    pub fn render_stats_panel(&self, f: &mut Frame, area: Rect) {
        let value = Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD);
        let label = Style::default().fg(Theme::OVERLAY);

        let stat_rows: [[(&str, &str); 2]; 6] = [
            [("TOTAL SUPPLY", ids::TOTAL_SUPPLY), ("MARKET CAP", ids::MARKET_CAP)],
            [("CIRCULATING", ids::CIRCULATING_SUPPLY), ("TOKEN PRICE", ids::TOKEN_PRICE)],
            [("BURNED", ids::TOTAL_BURNED), ("VOLUME", ids::VOL_24H)],
            [("REFLECTIONS", ids::TOTAL_REFLECTIONS), ("BURNED 24H", ids::BURN_24H)],
            [("HOLDERS", ids::WALLET_COUNT), ("REFLECTIONS 24H", ids::REFL_24H)],
            [("TRANSACTIONS", ids::TX_COUNT), ("", "")],
        ];

        let rows: Vec<Row> = stat_rows
            .iter()
            .map(|pair| {
                let cells: Vec<Cell> = pair
                    .iter()
                    .flat_map(|(name, id)| {
                        if id.is_empty() {
                            [Cell::from(""), Cell::from("")]
                        } else {
                            [
                                Cell::from(Span::styled(*name, label)),
                                Cell::from(self.element_span(id, value)),
                            ]
                        }
                    })
                    .collect();
                Row::new(cells).height(2)
            })
            .collect();

        let widths = [
            Constraint::Length(16),
            Constraint::Percentage(35),
            Constraint::Length(18),
            Constraint::Percentage(35),
        ];
        let table = Table::new(rows, widths).block(panel(
            format!(" {} TOKEN STATS ", Icons::STATS),
            true,
        ));
        f.render_widget(table, area);
    }

    fn table_rows(&self, id: &str, columns: usize) -> Vec<Row<'static>> {
        let Some(rows) = self.page.rows(id) else {
            return Vec::new();
        };
        if rows.is_empty() {
            // not loaded yet
            return vec![Row::new(
                (0..columns)
                    .map(|_| Cell::from(Span::styled(SKELETON, Style::default().fg(Theme::skeleton()))))
                    .collect::<Vec<_>>(),
            )];
        }

        rows.iter()
            .map(|row| match row {
                TableRow::Cells(cells) => Row::new(
                    cells
                        .iter()
                        .map(|cell| {
                            let color = if cell.class == Some(HASH_CELL) { Theme::CARAMEL } else { Theme::TEXT };
                            Cell::from(Span::styled(cell.text.clone(), Style::default().fg(color)))
                        })
                        .collect::<Vec<_>>(),
                ),
                TableRow::Placeholder { message, .. } => Row::new(vec![Cell::from(Span::styled(
                    message.clone(),
                    Style::default().fg(Theme::OVERLAY).add_modifier(Modifier::ITALIC),
                ))]),
            })
            .collect()
    }

    fn header_row(titles: &[&'static str]) -> Row<'static> {
        Row::new(
            titles
                .iter()
                .map(|t| Cell::from(Span::styled(*t, Style::default().fg(Theme::header()).add_modifier(Modifier::BOLD))))
                .collect::<Vec<_>>(),
        )
        .bottom_margin(1)
    }

    pub fn render_transactions_panel(&self, f: &mut Frame, area: Rect) {
        let rows = self.table_rows(ids::LATEST_TX_BODY, ids::TX_COLUMNS);
        let widths = [
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Min(18),
            Constraint::Length(12),
        ];
        let table = Table::new(rows, widths)
            .header(Self::header_row(&["HASH", "FROM", "TO", "AMOUNT", "TIME"]))
            .block(panel(format!(" {} LATEST TRANSACTIONS ", Icons::TRANSACTIONS), true));
        f.render_widget(table, area);
    }

    pub fn render_holders_panel(&self, f: &mut Frame, area: Rect) {
        let rows = self.table_rows(ids::HOLDERS_BODY, ids::HOLDER_COLUMNS);
        let widths = [
            Constraint::Length(6),
            Constraint::Length(18),
            Constraint::Min(22),
            Constraint::Length(10),
        ];
        let table = Table::new(rows, widths)
            .header(Self::header_row(&["RANK", "ADDRESS", "BALANCE", "SHARE"]))
            .block(panel(format!(" {} TOP HOLDERS ", Icons::HOLDERS), true));
        f.render_widget(table, area);
    }

    pub fn render_staking_panel(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(12)])
            .split(area);

        let value = Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD);
        let label = Style::default().fg(Theme::OVERLAY);
        let overview = vec![
            Line::from(vec![
                Span::styled("Wallet         ", label),
                self.element_span(ids::CONNECTED_WALLET, Style::default().fg(Theme::CREMA)),
            ]),
            Line::from(vec![Span::styled("Balance        ", label), self.element_span(ids::WALLET_BALANCE, value)]),
            Line::from(vec![Span::styled("Total staked   ", label), self.element_span(ids::TOTAL_STAKED, value)]),
            Line::from(vec![
                Span::styled("Pending reward ", label),
                self.element_span(ids::TOTAL_PENDING_REWARDS, Style::default().fg(Theme::success())),
            ]),
        ];
        f.render_widget(
            Paragraph::new(overview).block(panel(format!(" {} STAKING OVERVIEW ", Icons::STAKING), false)),
            chunks[0],
        );

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(1, 3), Constraint::Ratio(1, 3)])
            .split(chunks[1]);
        for (i, pool) in PoolId::ALL.into_iter().enumerate() {
            self.render_pool_card(f, cards[i], pool);
        }
    }

    fn render_pool_card(&self, f: &mut Frame, area: Rect, pool: PoolId) {
        let Some(card) = self.page.pool_card(pool) else {
            return;
        };
        let selected = pool == self.selected_pool;
        let value = Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD);
        let label = Style::default().fg(Theme::OVERLAY);

        let effects = {
            let mut spans = Vec::new();
            if card.has_effect(EffectKind::BeanDrop) {
                spans.push(Span::styled(format!("{} ", Icons::BEAN), Style::default().fg(Theme::CINNAMON)));
                spans.push(Span::styled(self.steam_frame(), Style::default().fg(Theme::STEAM)));
            }
            if card.has_effect(EffectKind::Sparkle) {
                spans.push(Span::styled(
                    format!(" {} {} {}", Icons::SPARKLE, Icons::SPARKLE, Icons::SPARKLE),
                    Style::default().fg(Theme::CREMA).add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(spans)
        };

        let input_style = if selected {
            Style::default().fg(Theme::BASE).bg(Theme::selection())
        } else {
            Style::default().fg(Theme::TEXT).bg(Theme::SURFACE)
        };
        let input_text = if card.amount_input.is_empty() { "0".to_string() } else { card.amount_input.clone() };

        let buttons: Vec<Span> = card
            .actions()
            .iter()
            .map(|action| {
                let color = match action {
                    PoolAction::Stake => Theme::MINT,
                    PoolAction::Unstake => Theme::CARAMEL,
                    PoolAction::Claim => Theme::CREMA,
                };
                Span::styled(
                    format!("[{}] ", action.label()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )
            })
            .collect();

        let lines = vec![
            Line::from(vec![
                Span::styled("APR      ", label),
                self.element_span(&pool_element(pool, "apr"), Style::default().fg(Theme::success()).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![Span::styled("TVL      ", label), self.element_span(&pool_element(pool, "tvl"), value)]),
            Line::from(vec![Span::styled("Staked   ", label), self.element_span(&pool_element(pool, "staked"), value)]),
            Line::from(vec![Span::styled("Rewards  ", label), self.element_span(&pool_element(pool, "rewards"), value)]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Amount   ", label),
                Span::styled(format!(" {:<12}", input_text), input_style),
            ]),
            Line::from(buttons),
            effects,
        ];

        let title = format!(" {}{} ", if selected { "> " } else { "" }, pool.label());
        f.render_widget(Paragraph::new(lines).block(panel(title, selected)), area);
    }

    pub fn render_simulator_panel(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let field = |name: &str, text: String, this: SimField| -> Line<'static> {
            let focused = self.sim_field == this;
            let style = if focused {
                Style::default().fg(Theme::BASE).bg(Theme::selection())
            } else {
                Style::default().fg(Theme::TEXT).bg(Theme::SURFACE)
            };
            Line::from(vec![
                Span::styled(format!("{:<14}", name), Style::default().fg(Theme::OVERLAY)),
                Span::styled(format!(" {:<16}", text), style),
            ])
        };

        let form = &self.page.simulator;
        let pool_text = form
            .pool
            .parse::<PoolId>()
            .map(|p| format!("< {} >", p.label()))
            .unwrap_or_else(|_| form.pool.clone());
        let form_lines = vec![
            Line::from(""),
            field("Amount", form.amount.clone(), SimField::Amount),
            Line::from(""),
            field("Days", form.days.clone(), SimField::Days),
            Line::from(""),
            field("Pool", pool_text, SimField::Pool),
            Line::from(""),
            Line::from(vec![key_badge("Enter", Theme::CARAMEL), Span::raw(" Calculate")]),
        ];
        f.render_widget(
            Paragraph::new(form_lines).block(panel(format!(" {} EARNINGS SIMULATOR ", Icons::SIMULATOR), true)),
            chunks[0],
        );

        let value = Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD);
        let label = Style::default().fg(Theme::OVERLAY);
        let results = vec![
            Line::from(""),
            Line::from(vec![Span::styled("APR          ", label), self.element_span(ids::SIM_APR, value)]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Rewards      ", label),
                self.element_span(ids::SIM_REWARDS, Style::default().fg(Theme::success()).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled("Total        ", label), self.element_span(ids::SIM_TOTAL, value)]),
            Line::from(""),
            Line::from(vec![Span::styled("Daily yield  ", label), self.element_span(ids::SIM_DAILY_YIELD, value)]),
        ];
        f.render_widget(Paragraph::new(results).block(panel(" PROJECTION ".to_string(), false)), chunks[1]);
    }

    pub fn render_footer(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(40)])
            .split(area);

        let controls = Line::from(vec![
            key_badge("Q", Theme::BERRY),
            Span::styled(" Quit  ", Style::default().fg(Theme::SUBTEXT)),
            key_badge("?", Theme::STEAM),
            Span::styled(" Help  ", Style::default().fg(Theme::SUBTEXT)),
            key_badge("Tab", Theme::CREMA),
            Span::styled(" Section  ", Style::default().fg(Theme::SUBTEXT)),
            key_badge("W", Theme::MINT),
            Span::styled(" Wallet  ", Style::default().fg(Theme::SUBTEXT)),
            key_badge("R", Theme::CARAMEL),
            Span::styled(" Refresh", Style::default().fg(Theme::SUBTEXT)),
        ]);
        let pulse = self.pulse_intensity();
        f.render_widget(
            Paragraph::new(controls).alignment(Alignment::Center).block(
                panel(format!(" {} CONTROLS ", Icons::KEYBOARD), false)
                    .border_style(Style::default().fg(Color::Rgb(pulse / 2 + 60, pulse / 3 + 30, 20))),
            ),
            chunks[0],
        );

        let year = self.page.text(ids::CURRENT_YEAR).unwrap_or_default();
        let status = self.status_message.clone().unwrap_or_else(|| "Ready".to_string());
        let status_line = Line::from(vec![
            Span::styled(status, Style::default().fg(Theme::CREMA)),
            Span::styled(format!("  (c) {} CoffeeHolics", year), Style::default().fg(Theme::DIM)),
        ]);
        f.render_widget(
            Paragraph::new(status_line).alignment(Alignment::Center).block(panel(" STATUS ".to_string(), false)),
            chunks[1],
        );
    }
}
