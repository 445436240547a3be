//! Comparison-table widget (static).
//!
//! Columns are sized from their content, the widest column absorbs the
//! remaining width, and overlong cells wrap within their column. The first
//! column is the row label and rendered emphasized.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};
use trailhead_types::DataTable;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{helpers, Theme};

use super::{wrap, WidgetLines};

const COLUMN_GAP: usize = 2;
const MIN_COLUMN: usize = 8;

pub fn lines(table: &DataTable, theme: &Theme, width: usize) -> WidgetLines {
    let mut out = Vec::new();
    if let Some(title) = &table.title {
        out.push(helpers::caption(theme, None, title));
    }
    if table.heads.is_empty() {
        return WidgetLines::from_lines(out);
    }

    let widths = column_widths(table, width);

    out.push(styled_row(
        &table.heads.iter().map(|h| h.to_uppercase()).collect::<Vec<_>>(),
        &widths,
        |_| theme.text_dim_style().add_modifier(Modifier::BOLD),
    ));
    let rule_width: usize = widths.iter().sum::<usize>() + COLUMN_GAP * (widths.len() - 1);
    out.push(Line::from(Span::styled(
        "─".repeat(rule_width.min(width.max(8))),
        theme.border_style(false),
    )));

    for row in &table.rows {
        // Wrap each cell within its column, then emit as many physical
        // lines as the tallest cell needs.
        let wrapped: Vec<Vec<String>> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| wrap(cell, *w))
            .collect();
        let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);
        for line_idx in 0..height {
            let cells: Vec<String> = wrapped
                .iter()
                .map(|cell| cell.get(line_idx).cloned().unwrap_or_default())
                .collect();
            out.push(styled_row(&cells, &widths, |col| {
                if col == 0 {
                    theme.text_style().add_modifier(Modifier::BOLD)
                } else {
                    theme.text_secondary_style()
                }
            }));
        }
    }

    WidgetLines::from_lines(out)
}

fn styled_row(
    cells: &[String],
    widths: &[usize],
    style_for: impl Fn(usize) -> ratatui::style::Style,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(cells.len() * 2);
    for (col, (cell, col_width)) in cells.iter().zip(widths).enumerate() {
        let pad = col_width.saturating_sub(cell.width());
        spans.push(Span::styled(cell.clone(), style_for(col)));
        if col + 1 < cells.len() {
            spans.push(Span::raw(" ".repeat(pad + COLUMN_GAP)));
        }
    }
    Line::from(spans)
}

/// Natural width per column, shrunk proportionally when the viewport is
/// narrower than the content.
fn column_widths(table: &DataTable, width: usize) -> Vec<usize> {
    let cols = table.heads.len();
    let mut natural: Vec<usize> = table.heads.iter().map(|h| h.width()).collect();
    for row in &table.rows {
        for (idx, cell) in row.iter().enumerate().take(cols) {
            natural[idx] = natural[idx].max(cell.width());
        }
    }

    let gaps = COLUMN_GAP * cols.saturating_sub(1);
    let available = width.saturating_sub(gaps).max(cols * MIN_COLUMN);
    let total: usize = natural.iter().sum();
    if total <= available {
        return natural;
    }
    natural
        .iter()
        .map(|w| ((*w * available) / total).max(MIN_COLUMN))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> DataTable {
        DataTable {
            title: Some("Compare".into()),
            heads: vec!["Name".into(), "Cost".into(), "Notes".into()],
            rows: vec![
                vec!["A".into(), "low".into(), "short".into()],
                vec![
                    "B".into(),
                    "high".into(),
                    "a considerably longer note that will need to wrap in narrow views".into(),
                ],
            ],
        }
    }

    #[test]
    fn wide_view_keeps_natural_widths() {
        let rendered = lines(&sample_table(), &Theme::default(), 120);
        // caption + header + rule + row A + row B (single physical line each)
        assert_eq!(rendered.lines.len(), 5);
    }

    #[test]
    fn narrow_view_wraps_long_cells() {
        let rendered = lines(&sample_table(), &Theme::default(), 48);
        assert!(rendered.lines.len() > 5, "long cell should wrap to extra lines");
    }

    #[test]
    fn shrunk_columns_respect_the_minimum() {
        let widths = column_widths(&sample_table(), 30);
        assert!(widths.iter().all(|w| *w >= MIN_COLUMN));
    }
}
