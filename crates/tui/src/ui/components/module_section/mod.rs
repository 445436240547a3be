//! Module content sections. One section is mounted per module; each
//! renders its document only while its assigned id matches the live
//! selection.

mod section_component;
mod state;

pub use section_component::ModuleSectionsComponent;
pub use state::{SectionState, WidgetState};
