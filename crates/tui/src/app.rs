//! Application state and message/effect processing.
//!
//! `App` owns the shared context (theme, registry, progress store, and the
//! selection bus) plus every mounted component's state. Components mutate
//! their own state and report cross-cutting requests as `Effect`s, which
//! the runtime feeds back through [`App::apply_effect`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use trailhead_registry::WidgetRegistry;
use trailhead_types::{Effect, Msg, SectionId};
use trailhead_util::ProgressStore;

use crate::bus::SelectionBus;
use crate::ui::components::{
    module_section::SectionState,
    roadmap_footer::{self, FooterState},
    roadmap_nav::NavState,
};
use crate::ui::theme::Theme;

/// Delay before the post-navigation scroll-to-top fires, matching the
/// brief layout settle the web rendition waits for.
pub const SCROLL_TO_TOP_DELAY: Duration = Duration::from_millis(40);

/// Which region currently receives component-local keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The tab strip at the top.
    #[default]
    Tabs,
    /// The content body (landing page or the active module section).
    Content,
    /// The footer's previous/overview/next controls.
    Footer,
}

/// Cross-cutting shared context owned by the App.
///
/// Holds runtime-wide objects so components do not thread multiple
/// references around. The bus lives here: constructed once per session and
/// handed to each component at mount.
#[derive(Debug)]
pub struct SharedCtx {
    pub theme: Theme,
    pub registry: WidgetRegistry,
    pub progress: Arc<ProgressStore>,
    pub bus: SelectionBus,
    /// Global debug flag (from env).
    pub debug_enabled: bool,
}

impl SharedCtx {
    pub fn new(registry: WidgetRegistry, progress: Arc<ProgressStore>) -> Self {
        let debug_enabled = std::env::var("DEBUG")
            .map(|v| !v.is_empty() && v != "0" && v.to_lowercase() != "false")
            .unwrap_or(false);
        Self {
            theme: Theme::default(),
            registry,
            progress,
            bus: SelectionBus::new(),
            debug_enabled,
        }
    }
}

/// The main application state.
#[derive(Debug)]
pub struct App {
    pub ctx: SharedCtx,
    pub nav: NavState,
    pub sections: Vec<SectionState>,
    pub footer: FooterState,
    pub focus: Focus,
    scroll_deadline: Option<Instant>,
    dirty: bool,
}

impl App {
    /// Mount every component against a fresh bus: the navigator, one
    /// section per module document, and the footer.
    pub fn new(registry: WidgetRegistry, progress: Arc<ProgressStore>) -> Self {
        let ctx = SharedCtx::new(registry, progress);
        let nav = NavState::new(&ctx.bus);
        let sections = SectionId::modules()
            .iter()
            .filter_map(|id| ctx.registry.document(*id).cloned())
            .map(|doc| SectionState::new(doc, &ctx.registry, &ctx.progress, &ctx.bus))
            .collect();
        let footer = FooterState::new(&ctx.bus);
        Self {
            ctx,
            nav,
            sections,
            footer,
            focus: Focus::default(),
            scroll_deadline: None,
            dirty: true,
        }
    }

    /// Process an application message.
    pub fn update(&mut self, msg: &Msg) {
        match msg {
            Msg::Tick => {
                if self
                    .scroll_deadline
                    .is_some_and(|deadline| Instant::now() >= deadline)
                {
                    self.scroll_deadline = None;
                    self.scroll_active_to_top();
                    self.dirty = true;
                }
            }
            Msg::Resize(_, _) => {
                self.dirty = true;
            }
        }
    }

    /// Execute one effect. Returns `true` when the application should
    /// exit.
    pub fn apply_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::NavigationOccurred(_) => {
                // Cosmetic: give the newly revealed content one tick to
                // settle before snapping the viewport to its top.
                self.scroll_deadline = Some(Instant::now() + SCROLL_TO_TOP_DELAY);
                self.focus = Focus::Content;
            }
            Effect::FocusNext => self.cycle_focus(true),
            Effect::FocusPrev => self.cycle_focus(false),
            Effect::Quit => return true,
        }
        self.dirty = true;
        false
    }

    /// Handle the global navigation shortcuts (`n`/`p`/`o`), gated exactly
    /// like the rendered controls.
    pub fn handle_global_key(&mut self, key: char) -> Vec<Effect> {
        let current = self.nav.selection();
        let Some(target) = roadmap_footer::shortcut_target(current, key) else {
            return Vec::new();
        };
        self.nav.navigate(target, &self.ctx.bus);
        vec![Effect::NavigationOccurred(target)]
    }

    /// Move focus between the mounted regions. The footer is skipped while
    /// it renders nothing.
    pub fn cycle_focus(&mut self, forward: bool) {
        let footer_visible = self.footer.is_visible();
        self.focus = match (self.focus, forward) {
            (Focus::Tabs, true) => Focus::Content,
            (Focus::Content, true) if footer_visible => Focus::Footer,
            (Focus::Content, true) => Focus::Tabs,
            (Focus::Footer, true) => Focus::Tabs,
            (Focus::Tabs, false) if footer_visible => Focus::Footer,
            (Focus::Tabs, false) => Focus::Content,
            (Focus::Content, false) => Focus::Tabs,
            (Focus::Footer, false) => Focus::Content,
        };
        self.dirty = true;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether a redraw is pending; clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Scroll whichever view is currently active back to its top. Runs
    /// deferred; by the time it fires the selection may have changed
    /// again, in which case it harmlessly scrolls the now-active view.
    fn scroll_active_to_top(&mut self) {
        if self.nav.selection().is_overview() {
            self.nav.overview_scroll = 0;
        }
        for section in &mut self.sections {
            if section.is_active() {
                section.scroll = 0;
                section.cursor = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let registry = WidgetRegistry::from_embedded_catalog().expect("catalog");
        App::new(registry, Arc::new(ProgressStore::ephemeral()))
    }

    #[test]
    fn all_components_mount_against_one_bus() {
        let app = test_app();
        // navigator + six sections + footer
        assert_eq!(app.ctx.bus.listener_count(), 8);
        assert_eq!(app.sections.len(), 6);
    }

    #[test]
    fn a_navigation_converges_navigator_sections_and_footer() {
        let mut app = test_app();
        let effects = app.handle_global_key('n');
        assert!(effects.is_empty(), "next is gated on the overview");

        app.nav.navigate(SectionId::Foundations, &app.ctx.bus);
        assert_eq!(app.nav.selection(), SectionId::Foundations);
        assert_eq!(app.footer.selection(), SectionId::Foundations);
        assert!(app.sections[0].is_active());
        assert!(!app.sections[1].is_active());
    }

    #[test]
    fn global_shortcuts_walk_the_order_and_gate_at_ends() {
        let mut app = test_app();
        app.nav.navigate(SectionId::Foundations, &app.ctx.bus);

        assert!(app.handle_global_key('p').is_empty(), "no previous at m01");
        app.handle_global_key('n');
        assert_eq!(app.nav.selection(), SectionId::SystemsDesign);
        app.handle_global_key('o');
        assert_eq!(app.nav.selection(), SectionId::Overview);
        assert_eq!(app.footer.selection(), SectionId::Overview);
    }

    #[test]
    fn navigation_effect_schedules_the_deferred_scroll() {
        let mut app = test_app();
        app.nav.navigate(SectionId::AiMl, &app.ctx.bus);
        app.sections[3].scroll = 12;

        let quit = app.apply_effect(Effect::NavigationOccurred(SectionId::AiMl));
        assert!(!quit);
        assert_eq!(app.focus, Focus::Content);

        // Not yet: the deadline has not elapsed.
        app.update(&Msg::Tick);
        assert_eq!(app.sections[3].scroll, 12);

        std::thread::sleep(SCROLL_TO_TOP_DELAY + Duration::from_millis(5));
        app.update(&Msg::Tick);
        assert_eq!(app.sections[3].scroll, 0);
    }

    #[test]
    fn focus_cycle_skips_hidden_footer() {
        let mut app = test_app();
        assert_eq!(app.focus, Focus::Tabs);
        app.cycle_focus(true);
        assert_eq!(app.focus, Focus::Content);
        app.cycle_focus(true);
        assert_eq!(app.focus, Focus::Tabs, "footer hidden on overview");

        app.nav.navigate(SectionId::Foundations, &app.ctx.bus);
        app.cycle_focus(true);
        app.cycle_focus(true);
        assert_eq!(app.focus, Focus::Footer);
    }

    #[test]
    fn quit_effect_requests_exit() {
        let mut app = test_app();
        assert!(app.apply_effect(Effect::Quit));
    }
}
