//! Top-level view: lays the page out and routes input to the mounted
//! components.
//!
//! Layout allocation consults each region's own state (the navigator's
//! selection copy for the landing/header split, the footer's visibility),
//! but the regions themselves still decide what, if anything, they draw.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use trailhead_types::Effect;

use crate::app::{App, Focus};
use crate::ui::components::{
    component::Component,
    roadmap_footer::FOOTER_HEIGHT,
    roadmap_nav::{MODULE_HEADER_HEIGHT, TAB_STRIP_HEIGHT},
    ModuleSectionsComponent, RoadmapFooterComponent, RoadmapNavComponent,
};

/// The composed page.
#[derive(Debug, Default)]
pub struct MainView {
    nav: RoadmapNavComponent,
    sections: ModuleSectionsComponent,
    footer: RoadmapFooterComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) -> Result<()> {
        self.nav.init()?;
        self.sections.init()?;
        self.footer.init()?;
        Ok(())
    }

    /// Route a key press to the focused region.
    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match app.focus {
            Focus::Tabs => self.nav.handle_key_events(app, key),
            Focus::Content => {
                if app.nav.selection().is_overview() {
                    self.nav.handle_key_events(app, key)
                } else {
                    self.sections.handle_key_events(app, key)
                }
            }
            Focus::Footer => self.footer.handle_key_events(app, key),
        }
    }

    /// Mouse input goes to the navigator's tab strip.
    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        self.nav.handle_mouse_events(app, mouse)
    }

    pub fn render(&mut self, frame: &mut Frame, app: &mut App) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(app.ctx.theme.roles().bg)),
            area,
        );

        if app.nav.selection().is_overview() {
            let [body, hints] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
            self.nav.render(frame, body, app);
            self.render_hints(frame, hints, app);
            return;
        }

        let footer_height = if app.footer.is_visible() {
            FOOTER_HEIGHT
        } else {
            0
        };
        let [nav_area, section_area, footer_area, hints] = Layout::vertical([
            Constraint::Length(TAB_STRIP_HEIGHT + MODULE_HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(footer_height),
            Constraint::Length(1),
        ])
        .areas(area);

        self.nav.render(frame, nav_area, app);
        self.sections.render(frame, section_area, app);
        self.footer.render(frame, footer_area, app);
        self.render_hints(frame, hints, app);
    }

    fn render_hints(&self, frame: &mut Frame, rect: ratatui::layout::Rect, app: &App) {
        let theme = &app.ctx.theme;
        let hints = match app.focus {
            Focus::Tabs => " ←/→ tabs · ↵ open · ⇥ focus · q quit",
            Focus::Content => " ↑/↓ move · ␣/↵ toggle · n/p/o jump · pgup/pgdn scroll · ⇥ focus · q quit",
            Focus::Footer => " ←/→ controls · ↵ go · ⇥ focus · q quit",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(hints, theme.text_dim_style()))),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};
    use trailhead_registry::WidgetRegistry;
    use trailhead_types::SectionId;
    use trailhead_util::ProgressStore;

    use super::*;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn test_app() -> App {
        let registry = WidgetRegistry::from_embedded_catalog().expect("catalog");
        App::new(registry, Arc::new(ProgressStore::ephemeral()))
    }

    #[test]
    fn overview_renders_landing_and_no_footer() {
        let mut app = test_app();
        let mut view = MainView::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("terminal");
        terminal
            .draw(|frame| view.render(frame, &mut app))
            .expect("draw");

        let text = buffer_text(&terminal);
        assert!(text.contains("From good coder to great engineer."));
        assert!(!text.contains("↑ OVERVIEW"), "footer absent on overview");
    }

    #[test]
    fn active_module_renders_header_section_and_footer() {
        let mut app = test_app();
        app.nav.navigate(SectionId::CloudEngineering, &app.ctx.bus);

        let mut view = MainView::new();
        let mut terminal = Terminal::new(TestBackend::new(110, 45)).expect("terminal");
        terminal
            .draw(|frame| view.render(frame, &mut app))
            .expect("draw");

        let text = buffer_text(&terminal);
        assert!(text.contains("Cloud Engineering"), "module header/tab");
        assert!(text.contains("↑ OVERVIEW"), "footer present");
        assert!(
            !text.contains("From good coder"),
            "landing absent once a module is active"
        );
    }
}
