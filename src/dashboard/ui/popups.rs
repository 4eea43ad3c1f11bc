use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::helpers::{centered_rect, key_badge};
use crate::dashboard::types::*;
use crate::icons::Icons;
use crate::page::{Section, ToastKind, ToastPhase};
use crate::theme::Theme;

const TOAST_WIDTH: u16 = 48;

impl Dashboard {
    pub fn render_loading_overlay(&self, f: &mut Frame, area: Rect) {
        let Some(overlay) = self.page.overlay.as_ref() else {
            return;
        };
        let popup_area = centered_rect(50, 20, area);
        f.render_widget(Clear, popup_area);

        let text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("{} ", Icons::LOADING), Style::default().fg(Theme::CARAMEL)),
                Span::styled(
                    overlay.message.clone(),
                    Style::default().fg(Theme::CREMA).add_modifier(Modifier::BOLD),
                ),
                Span::styled(self.animated_dots(), Style::default().fg(Theme::CREMA)),
            ]),
        ];

        let widget = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Theme::active_border())),
            )
            .style(Style::default().bg(Theme::MANTLE));
        f.render_widget(widget, popup_area);
    }

    /// Stack of notifications in the top-right corner, newest at the bottom
    pub fn render_toasts(&self, f: &mut Frame, area: Rect) {
        let Some(toasts) = self.page.toasts.as_ref().filter(|t| !t.is_empty()) else {
            return;
        };

        let width = TOAST_WIDTH.min(area.width);
        let mut y = area.y + 1;
        for toast in toasts.iter() {
            if y + 3 > area.y + area.height {
                break;
            }
            let (icon, color) = match toast.kind {
                ToastKind::Success => (Icons::SUCCESS, Theme::success()),
                ToastKind::Error => (Icons::ERROR, Theme::error()),
                ToastKind::Info => (Icons::INFO, Theme::info()),
            };
            let style = match toast.phase {
                ToastPhase::Shown => Style::default().fg(color),
                ToastPhase::Fading => Style::default().fg(Theme::DIM),
            };

            let rect = Rect::new(area.x + area.width - width, y, width, 3);
            f.render_widget(Clear, rect);
            let widget = Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", icon), style.add_modifier(Modifier::BOLD)),
                Span::styled(toast.message.clone(), style),
            ]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            )
            .style(Style::default().bg(Theme::SURFACE));
            f.render_widget(widget, rect);
            y += 3;
        }
    }

    pub fn render_nav_menu(&self, f: &mut Frame, area: Rect) {
        let Some(nav) = self.page.nav.as_ref() else {
            return;
        };
        let menu_area = Rect::new(area.x + 27, area.y + 3, 28.min(area.width.saturating_sub(27)), 9.min(area.height.saturating_sub(3)));
        f.render_widget(Clear, menu_area);

        let lines: Vec<Line> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let highlighted = i == nav.highlighted;
                let marker = if highlighted { Icons::ARROW_RIGHT } else { " " };
                let style = if highlighted {
                    Style::default().fg(Theme::BASE).bg(Theme::selection()).add_modifier(Modifier::BOLD)
                } else if *section == self.section {
                    Style::default().fg(Theme::CREMA)
                } else {
                    Style::default().fg(Theme::TEXT)
                };
                Line::from(Span::styled(format!("{} {} {}", marker, i + 1, section.label()), style))
            })
            .collect();

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Theme::active_border()))
                .title(format!(" {} NAVIGATE ", Icons::MENU))
                .title_style(Style::default().fg(Theme::header()).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Theme::MANTLE)),
        );
        f.render_widget(widget, menu_area);
    }

    pub fn render_help_overlay(&self, f: &mut Frame, area: Rect) {
        let heading = Style::default().fg(Theme::MINT).add_modifier(Modifier::BOLD);
        let text = Style::default().fg(Theme::TEXT);

        let help_text = vec![
            Line::from(Span::styled(
                "$BEANS DASHBOARD - HELP",
                Style::default().fg(Theme::CREMA).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled("Navigation:", heading)),
            Line::from(Span::styled("  Tab / Shift-Tab  - Next / previous section", text)),
            Line::from(Span::styled("  1-5              - Jump to section", text)),
            Line::from(Span::styled("  M                - Open the navigation menu", text)),
            Line::from(""),
            Line::from(Span::styled("Staking:", heading)),
            Line::from(Span::styled("  Left / Right     - Select pool", text)),
            Line::from(Span::styled("  0-9 .            - Type stake amount", text)),
            Line::from(Span::styled("  Enter or S       - Stake", text)),
            Line::from(Span::styled("  U                - Unstake", text)),
            Line::from(Span::styled("  C                - Claim rewards", text)),
            Line::from(""),
            Line::from(Span::styled("Simulator:", heading)),
            Line::from(Span::styled("  Up / Down        - Select field", text)),
            Line::from(Span::styled("  Left / Right     - Change pool", text)),
            Line::from(Span::styled("  Enter            - Calculate", text)),
            Line::from(""),
            Line::from(Span::styled("Other:", heading)),
            Line::from(Span::styled("  W                - Connect wallet (demo)", text)),
            Line::from(Span::styled("  Y                - Copy wallet address", text)),
            Line::from(Span::styled("  R                - Refresh data", text)),
            Line::from(Span::styled("  Q or Esc         - Quit", text)),
            Line::from(""),
            Line::from(vec![key_badge("any key", Theme::CREMA), Span::raw(" close help")]),
        ];

        let help_area = centered_rect(60, 80, area);
        f.render_widget(Clear, help_area);

        let help_paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Theme::active_border()).add_modifier(Modifier::BOLD))
                    .border_type(BorderType::Rounded)
                    .title(" HELP ")
                    .title_style(Style::default().fg(Theme::header()).add_modifier(Modifier::BOLD)),
            )
            .style(Style::default().bg(Theme::PANEL_BG))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });

        f.render_widget(help_paragraph, help_area);
    }
}
