//! Concept-card grid widget (static).

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};
use trailhead_types::ConceptGrid;

use crate::ui::theme::{helpers, Theme};

use super::{wrap, WidgetLines};

pub fn lines(grid: &ConceptGrid, theme: &Theme, width: usize) -> WidgetLines {
    let mut out = Vec::new();
    if let Some(title) = &grid.title {
        out.push(helpers::caption(theme, None, title));
    }

    for concept in &grid.concepts {
        out.push(Line::from(vec![
            helpers::accent_bar(theme, concept.accent),
            Span::styled(
                concept.name.clone(),
                theme.accent_style(concept.accent).add_modifier(Modifier::BOLD),
            ),
        ]));
        for part in wrap(&concept.desc, width.saturating_sub(2)) {
            out.push(Line::from(vec![
                helpers::accent_bar(theme, concept.accent),
                Span::styled(part, theme.text_secondary_style()),
            ]));
        }
        if !concept.tags.is_empty() {
            let mut spans = vec![helpers::accent_bar(theme, concept.accent)];
            for tag in &concept.tags {
                spans.push(Span::styled(
                    format!("[{tag}] "),
                    theme.accent_style(concept.accent),
                ));
            }
            out.push(Line::from(spans));
        }
        out.push(Line::default());
    }

    WidgetLines::from_lines(out)
}
