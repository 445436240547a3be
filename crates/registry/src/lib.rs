//! Registry crate for Trailhead's embeddable widgets and module content.
//!
//! This crate owns the lookup table the document-rendering pipeline
//! consumes: every widget is registered under a stable name, and each
//! module's content document references widgets by those names. Content
//! ships as a JSON catalog embedded at build time.

pub mod models;

pub use models::{WidgetRegistry, WidgetSpec};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// The embedded catalog must load, contain widgets, and keep names
    /// unique; the registry promises a stable name-to-widget mapping.
    #[test]
    fn catalog_non_empty_and_unique_names() {
        let registry = WidgetRegistry::from_embedded_catalog().expect("load embedded catalog");
        let mut seen = HashSet::new();
        let mut count = 0usize;
        for spec in registry.widgets() {
            assert!(seen.insert(spec.name.clone()), "duplicate name {}", spec.name);
            count += 1;
        }
        assert!(count > 0, "catalog should not be empty");
    }
}
