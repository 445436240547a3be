//! Footer rendering and input handling.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use trailhead_types::{Effect, SectionId};

use crate::{
    app::{App, Focus},
    ui::{components::component::Component, theme::helpers},
};

use super::state::FooterControl;

/// Rows the footer occupies when visible: rule, labels, controls.
pub const FOOTER_HEIGHT: u16 = 3;

#[derive(Debug, Default)]
pub struct RoadmapFooterComponent;

impl Component for RoadmapFooterComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.focus != Focus::Footer || !app.footer.is_visible() {
            return Vec::new();
        }
        let controls = app.footer.controls();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                app.footer.control_cursor = app.footer.control_cursor.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Right | KeyCode::Char('l') => {
                app.footer.control_cursor =
                    (app.footer.control_cursor + 1).min(controls.len().saturating_sub(1));
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let Some(control) = controls.get(app.footer.control_cursor) else {
                    return Vec::new();
                };
                let target = control.target();
                app.footer.navigate(target, &app.ctx.bus);
                app.footer.control_cursor = 0;
                vec![Effect::NavigationOccurred(target)]
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        // Absent from the output entirely while the overview is active.
        if !app.footer.is_visible() {
            return;
        }
        let theme = app.ctx.theme;
        let controls = app.footer.controls();
        app.footer.control_cursor = app
            .footer
            .control_cursor
            .min(controls.len().saturating_sub(1));
        let focused = app.focus == Focus::Footer;
        let accent = app
            .footer
            .selection()
            .descriptor()
            .map(|d| d.accent)
            .unwrap_or(trailhead_types::Accent::Amber);

        let width = rect.width.saturating_sub(2) as usize;
        let mut lines = Vec::with_capacity(FOOTER_HEIGHT as usize);
        lines.push(Line::from(Span::styled(
            "─".repeat(width.max(8)),
            theme.border_style(false),
        )));

        let mut labels: Vec<Span<'static>> = Vec::new();
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (idx, control) in controls.iter().enumerate() {
            let (label, text, base_style) = match control {
                FooterControl::Previous(id) => {
                    let desc = id.descriptor().expect("module descriptor");
                    (
                        "PREVIOUS",
                        format!("← {} {} {}", desc.glyph, desc.num, desc.label),
                        theme.text_secondary_style(),
                    )
                }
                FooterControl::Overview => (
                    "",
                    "↑ OVERVIEW".to_string(),
                    theme.text_dim_style(),
                ),
                FooterControl::Next(id) => {
                    let desc = id.descriptor().expect("module descriptor");
                    (
                        "NEXT",
                        format!("{} {} {} →", desc.glyph, desc.num, desc.label),
                        theme.accent_style(accent),
                    )
                }
            };
            let style = if focused && idx == app.footer.control_cursor {
                base_style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                base_style
            };
            if idx > 0 {
                labels.push(Span::raw("      "));
                spans.push(Span::styled("      ", theme.text_dim_style()));
            }
            labels.push(Span::styled(
                format!("{label:width$}", width = text.chars().count()),
                theme.text_dim_style(),
            ));
            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(labels));
        lines.push(Line::from(spans));

        let paragraph = Paragraph::new(lines).style(helpers::panel_style(&theme));
        frame.render_widget(
            paragraph,
            rect.inner(ratatui::layout::Margin::new(1, 0)),
        );
    }
}

/// Resolve the target for the global next/previous/overview shortcuts,
/// honoring the same gating as the rendered controls.
pub fn shortcut_target(current: SectionId, key: char) -> Option<SectionId> {
    match key {
        'n' => current.next(),
        'p' => current.previous(),
        'o' if !current.is_overview() => Some(SectionId::Overview),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_follow_the_module_order() {
        assert_eq!(
            shortcut_target(SectionId::CloudEngineering, 'n'),
            Some(SectionId::AiMl)
        );
        assert_eq!(
            shortcut_target(SectionId::CloudEngineering, 'p'),
            Some(SectionId::SystemsDesign)
        );
        assert_eq!(
            shortcut_target(SectionId::CloudEngineering, 'o'),
            Some(SectionId::Overview)
        );
    }

    #[test]
    fn shortcuts_are_gated_at_the_ends() {
        assert_eq!(shortcut_target(SectionId::Foundations, 'p'), None);
        assert_eq!(shortcut_target(SectionId::Communication, 'n'), None);
        assert_eq!(shortcut_target(SectionId::Overview, 'o'), None);
        assert_eq!(shortcut_target(SectionId::Overview, 'n'), None);
    }
}
