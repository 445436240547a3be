//! Embeddable widget renderers.
//!
//! Each widget turns its catalog content (plus any local view state) into
//! styled lines. Interactive widgets also report which of their lines are
//! actionable entries so the section can run a cursor across them.

pub mod callout;
pub mod checklist;
pub mod concept_grid;
pub mod data_table;
pub mod decision_tree;
pub mod quiz;

use ratatui::text::Line;

/// Rendered widget output: the lines to draw, plus the index (into
/// `lines`) of each interactive entry, in cursor order.
#[derive(Debug, Default)]
pub struct WidgetLines {
    pub lines: Vec<Line<'static>>,
    pub entry_lines: Vec<usize>,
}

impl WidgetLines {
    pub fn from_lines(lines: Vec<Line<'static>>) -> Self {
        Self {
            lines,
            entry_lines: Vec::new(),
        }
    }
}

/// Wrap `text` to `width` columns, with a floor that keeps pathological
/// viewports from producing one-character columns.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(16))
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}
