//! UI components: navigator, module sections, footer, and the embeddable
//! widgets they render.

pub mod component;
pub mod module_section;
pub mod roadmap_footer;
pub mod roadmap_nav;
pub mod widgets;

pub use module_section::ModuleSectionsComponent;
pub use roadmap_footer::RoadmapFooterComponent;
pub use roadmap_nav::RoadmapNavComponent;
