//! Footer state.

use std::cell::Cell;
use std::rc::Rc;

use trailhead_types::SectionId;

use crate::bus::{SelectionBus, Subscription};

/// One actionable footer control, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterControl {
    Previous(SectionId),
    Overview,
    Next(SectionId),
}

impl FooterControl {
    pub fn target(self) -> SectionId {
        match self {
            FooterControl::Previous(id) | FooterControl::Next(id) => id,
            FooterControl::Overview => SectionId::Overview,
        }
    }
}

/// State for the footer. Like every subscriber it holds its own selection
/// copy; its controls double as broadcasters: activating one updates the
/// local copy and publishes.
#[derive(Debug)]
pub struct FooterState {
    selection: Rc<Cell<SectionId>>,
    _subscription: Subscription,
    /// Cursor over the currently present controls.
    pub control_cursor: usize,
}

impl FooterState {
    pub fn new(bus: &SelectionBus) -> Self {
        let selection = Rc::new(Cell::new(SectionId::Overview));
        let copy = Rc::clone(&selection);
        let subscription = bus.subscribe(move |id| copy.set(id));
        Self {
            selection,
            _subscription: subscription,
            control_cursor: 0,
        }
    }

    pub fn selection(&self) -> SectionId {
        self.selection.get()
    }

    /// The footer renders nothing at all while the overview is active.
    pub fn is_visible(&self) -> bool {
        !self.selection.get().is_overview()
    }

    /// The controls present for the current selection. Previous/next are
    /// structurally absent at the ends of the module order, so an
    /// out-of-range transition has no control to trigger it.
    pub fn controls(&self) -> Vec<FooterControl> {
        let current = self.selection.get();
        if current.is_overview() {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(3);
        if let Some(prev) = current.previous() {
            out.push(FooterControl::Previous(prev));
        }
        out.push(FooterControl::Overview);
        if let Some(next) = current.next() {
            out.push(FooterControl::Next(next));
        }
        out
    }

    /// Update the footer's own copy and publish, exactly what the
    /// navigator does on its own controls.
    pub fn navigate(&self, target: SectionId, bus: &SelectionBus) {
        self.selection.set(target);
        bus.publish(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_is_absent_on_overview() {
        let bus = SelectionBus::new();
        let footer = FooterState::new(&bus);
        assert!(!footer.is_visible());
        assert!(footer.controls().is_empty());
    }

    #[test]
    fn middle_module_has_all_three_controls() {
        let bus = SelectionBus::new();
        let footer = FooterState::new(&bus);
        bus.publish(SectionId::CloudEngineering);
        assert_eq!(
            footer.controls(),
            vec![
                FooterControl::Previous(SectionId::SystemsDesign),
                FooterControl::Overview,
                FooterControl::Next(SectionId::AiMl),
            ]
        );
    }

    #[test]
    fn first_module_has_no_previous_control() {
        let bus = SelectionBus::new();
        let footer = FooterState::new(&bus);
        bus.publish(SectionId::Foundations);
        assert_eq!(
            footer.controls(),
            vec![
                FooterControl::Overview,
                FooterControl::Next(SectionId::SystemsDesign),
            ]
        );
    }

    #[test]
    fn last_module_has_no_next_control() {
        let bus = SelectionBus::new();
        let footer = FooterState::new(&bus);
        bus.publish(SectionId::Communication);
        assert_eq!(
            footer.controls(),
            vec![
                FooterControl::Previous(SectionId::DesignCraft),
                FooterControl::Overview,
            ]
        );
    }

    #[test]
    fn footer_navigation_publishes_to_peers() {
        let bus = SelectionBus::new();
        let footer = FooterState::new(&bus);
        let peer = FooterState::new(&bus);

        bus.publish(SectionId::SystemsDesign);
        footer.navigate(SectionId::Overview, &bus);
        assert_eq!(footer.selection(), SectionId::Overview);
        assert_eq!(peer.selection(), SectionId::Overview);
    }
}
