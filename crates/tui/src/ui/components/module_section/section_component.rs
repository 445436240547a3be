//! Rendering and input for the mounted module sections.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use trailhead_types::Effect;

use crate::{
    app::{App, Focus},
    ui::{
        theme::helpers,
        utils::{clamp_scroll, scroll_into_view},
    },
};

use super::super::component::Component;

/// Renders every mounted section; each one decides from its own selection
/// copy whether it contributes output. At most one is active at a time
/// once a publish has propagated.
#[derive(Debug, Default)]
pub struct ModuleSectionsComponent;

impl Component for ModuleSectionsComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.focus != Focus::Content {
            return Vec::new();
        }
        let Some(idx) = app.sections.iter().position(|s| s.is_active()) else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                let section = &mut app.sections[idx];
                section.cursor = section.cursor.saturating_sub(1);
                keep_cursor_visible(app, idx);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let entry_count = app.sections[idx].entries(&app.ctx.registry).len();
                let section = &mut app.sections[idx];
                if entry_count > 0 {
                    section.cursor = (section.cursor + 1).min(entry_count - 1);
                }
                keep_cursor_visible(app, idx);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.sections[idx].activate_cursor(&app.ctx.registry, &app.ctx.progress);
            }
            KeyCode::PageUp => {
                let section = &mut app.sections[idx];
                section.scroll = section.scroll.saturating_sub(section.viewport_height.max(1));
            }
            KeyCode::PageDown => {
                let section = &mut app.sections[idx];
                section.scroll = clamp_scroll(
                    section.scroll + section.viewport_height.max(1),
                    section.line_count,
                    section.viewport_height,
                );
            }
            KeyCode::Home => {
                app.sections[idx].scroll = 0;
            }
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let width = rect.width.saturating_sub(2) as usize;
        let focused = app.focus == Focus::Content;
        let App { ctx, sections, .. } = app;
        let theme = ctx.theme;

        for section in sections.iter_mut() {
            if !section.is_active() {
                continue;
            }
            let cursor = focused.then_some(section.cursor);
            let (lines, entry_lines) = section.build_view(&ctx.registry, &theme, width, cursor);
            section.line_count = lines.len();
            section.entry_lines = entry_lines;
            section.viewport_height = rect.height;
            section.scroll = clamp_scroll(section.scroll, section.line_count, rect.height);

            let paragraph = Paragraph::new(lines)
                .style(helpers::panel_style(&theme))
                .scroll((section.scroll, 0));
            frame.render_widget(
                paragraph,
                rect.inner(ratatui::layout::Margin::new(1, 0)),
            );
        }
    }
}

fn keep_cursor_visible(app: &mut App, idx: usize) {
    let section = &mut app.sections[idx];
    if let Some(line) = section.entry_lines.get(section.cursor).copied() {
        section.scroll = scroll_into_view(section.scroll, line, section.viewport_height);
    }
}
