use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
};

use crate::dashboard::types::Dashboard;
use crate::theme::Theme;

/// Shown for elements that have not received data yet
pub const SKELETON: &str = "░░░░░░░░";

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Key badge for the footer and help, e.g. ` Q ` on a coloured background
pub fn key_badge(key: &str, bg: ratatui::style::Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", key),
        Style::default().fg(Theme::BASE).bg(bg).add_modifier(Modifier::BOLD),
    )
}

impl Dashboard {
    /// Text of a page element, or a skeleton bar while it is still loading
    pub fn element_span(&self, id: &str, style: Style) -> Span<'static> {
        match self.page.element(id) {
            Some(el) if !el.skeleton => Span::styled(el.text.clone(), style),
            _ => Span::styled(SKELETON, Style::default().fg(Theme::skeleton())),
        }
    }
}
