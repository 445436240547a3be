//! Reusable style/widget builders shared by components.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};
use trailhead_types::Accent;

use super::Theme;

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a>(theme: &Theme, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(
            t,
            theme.text_secondary_style().add_modifier(Modifier::BOLD),
        ));
    }
    block
}

/// Style for panel-like containers.
pub fn panel_style(theme: &Theme) -> Style {
    Style::default().bg(theme.roles().surface).fg(theme.roles().text)
}

/// Small uppercase accent badge, e.g. `[ MODULE 04 · MONTHS 6–12 ]`.
pub fn badge(theme: &Theme, accent: Accent, text: &str) -> Span<'static> {
    Span::styled(
        format!("[ {} ]", text.to_uppercase()),
        theme.accent_style(accent).add_modifier(Modifier::BOLD),
    )
}

/// Uppercase, letter-spaced caption line (the monospace micro-label used
/// above widgets).
pub fn caption(theme: &Theme, accent: Option<Accent>, text: &str) -> Line<'static> {
    let style = match accent {
        Some(a) => theme.accent_style(a),
        None => theme.text_dim_style(),
    };
    let spaced: String = text
        .to_uppercase()
        .chars()
        .flat_map(|c| [c, ' '])
        .collect();
    Line::from(Span::styled(spaced.trim_end().to_string(), style))
}

/// A one-line progress gauge: `filled` of `total` cells, accent-colored.
pub fn gauge_line(theme: &Theme, accent: Accent, width: usize, percent: u8) -> Line<'static> {
    let width = width.max(4);
    let filled = (width * percent as usize) / 100;
    let mut spans = Vec::with_capacity(2);
    if filled > 0 {
        spans.push(Span::styled(
            "█".repeat(filled),
            theme.accent_style(accent),
        ));
    }
    if filled < width {
        spans.push(Span::styled(
            "░".repeat(width - filled),
            theme.text_dim_style(),
        ));
    }
    Line::from(spans)
}

/// Accent-colored left-bar prefix used by cards and callouts.
pub fn accent_bar(theme: &Theme, accent: Accent) -> Span<'static> {
    Span::styled("▌ ", theme.accent_style(accent))
}
