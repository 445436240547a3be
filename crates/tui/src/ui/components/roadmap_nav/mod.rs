//! The roadmap navigator: tab strip, overview landing page, and module
//! header. This is the primary navigation surface and the usual origin of
//! selection changes.

mod nav_component;
mod state;

pub use nav_component::{RoadmapNavComponent, MODULE_HEADER_HEIGHT, TAB_STRIP_HEIGHT};
pub use state::NavState;
