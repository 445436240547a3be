//! Bottom navigation footer: previous / overview / next, mounted
//! independently of the navigator and kept in sync over the bus.

mod footer_component;
mod state;

pub use footer_component::{shortcut_target, RoadmapFooterComponent, FOOTER_HEIGHT};
pub use state::{FooterControl, FooterState};
