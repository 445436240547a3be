//! Navigator state.

use std::cell::Cell;
use std::rc::Rc;

use ratatui::layout::Rect;
use trailhead_types::SectionId;

use crate::bus::{SelectionBus, Subscription};

/// State for the navigation surface.
///
/// Holds the navigator's own copy of the active selection, kept in sync
/// through its bus subscription. The navigator self-listens so it stays
/// consistent when some other component (footer, a future peer) publishes
/// a change.
#[derive(Debug)]
pub struct NavState {
    selection: Rc<Cell<SectionId>>,
    _subscription: Subscription,
    /// Keyboard cursor over the tab strip: 0 is Overview, 1..=6 are the
    /// modules in order.
    pub tab_cursor: usize,
    /// Keyboard cursor over the landing page's module cards.
    pub card_cursor: usize,
    /// Scroll offset of the overview landing page.
    pub overview_scroll: u16,
    /// Per-tab hit areas recorded at render time for mouse handling.
    pub tab_areas: Vec<Rect>,
    /// Landing viewport height recorded at render time.
    pub landing_viewport: u16,
    /// First line of each module card in the landing, recorded at render.
    pub card_lines: Vec<usize>,
    /// Total landing content height, recorded at render.
    pub landing_line_count: usize,
}

impl NavState {
    pub fn new(bus: &SelectionBus) -> Self {
        let selection = Rc::new(Cell::new(SectionId::Overview));
        let copy = Rc::clone(&selection);
        let subscription = bus.subscribe(move |id| copy.set(id));
        Self {
            selection,
            _subscription: subscription,
            tab_cursor: 0,
            card_cursor: 0,
            overview_scroll: 0,
            tab_areas: Vec::new(),
            landing_viewport: 0,
            card_lines: Vec::new(),
            landing_line_count: 0,
        }
    }

    /// The navigator's local copy of the current selection.
    pub fn selection(&self) -> SectionId {
        self.selection.get()
    }

    /// Perform a navigation: update the local copy first (so this
    /// component's re-render does not depend on the bus round-trip), then
    /// publish so every other mounted component converges.
    ///
    /// Navigating to the already-active value republishes it and changes
    /// nothing visible.
    pub fn navigate(&self, target: SectionId, bus: &SelectionBus) {
        self.selection.set(target);
        bus.publish(target);
    }

    /// Number of tabs: Overview plus one per module.
    pub fn tab_count(&self) -> usize {
        SectionId::modules().len() + 1
    }

    /// The section a tab position maps to.
    pub fn tab_target(&self, index: usize) -> SectionId {
        if index == 0 {
            SectionId::Overview
        } else {
            SectionId::modules()[(index - 1).min(SectionId::modules().len() - 1)]
        }
    }

    /// Tab position of the currently active selection.
    pub fn active_tab(&self) -> usize {
        match self.selection().ordinal() {
            Some(idx) => idx + 1,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_updates_local_copy_before_subscribers_hear_it() {
        let bus = SelectionBus::new();
        let nav = NavState::new(&bus);
        assert_eq!(nav.selection(), SectionId::Overview);

        nav.navigate(SectionId::CloudEngineering, &bus);
        assert_eq!(nav.selection(), SectionId::CloudEngineering);
        assert_eq!(nav.active_tab(), 3);
    }

    #[test]
    fn navigator_converges_when_someone_else_publishes() {
        let bus = SelectionBus::new();
        let nav = NavState::new(&bus);
        bus.publish(SectionId::AiMl);
        assert_eq!(nav.selection(), SectionId::AiMl);
    }

    #[test]
    fn renavigating_the_active_value_is_a_no_op_transition() {
        let bus = SelectionBus::new();
        let nav = NavState::new(&bus);
        nav.navigate(SectionId::AiMl, &bus);
        let before = nav.selection();
        nav.navigate(SectionId::AiMl, &bus);
        assert_eq!(nav.selection(), before);
    }

    #[test]
    fn tab_targets_cover_overview_and_all_modules() {
        let bus = SelectionBus::new();
        let nav = NavState::new(&bus);
        assert_eq!(nav.tab_count(), 7);
        assert_eq!(nav.tab_target(0), SectionId::Overview);
        assert_eq!(nav.tab_target(1), SectionId::Foundations);
        assert_eq!(nav.tab_target(6), SectionId::Communication);
    }
}
