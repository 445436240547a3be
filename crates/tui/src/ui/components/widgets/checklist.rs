//! Progress checklist widget.
//!
//! Checked state loads from the progress store once at construction and is
//! written back on every toggle. Both directions are best-effort: a failed
//! read starts empty, a failed write keeps the in-memory state and logs.

use std::collections::BTreeSet;

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};
use tracing::warn;
use trailhead_types::{Accent, Checklist};
use trailhead_util::{completion_percent, ProgressStore};

use crate::ui::theme::{helpers, Theme};

use super::{wrap, WidgetLines};

/// Per-instance checklist view state.
#[derive(Debug)]
pub struct ChecklistState {
    storage_key: String,
    total: usize,
    checked: BTreeSet<usize>,
}

impl ChecklistState {
    /// Initialize from persisted progress. Storage failures have already
    /// degraded to an empty set inside the store.
    pub fn load(list: &Checklist, progress: &ProgressStore) -> Self {
        let mut checked = progress.checked(&list.storage_key);
        // Indices beyond the current item list can appear when content
        // shrinks between sessions; ignore them.
        checked.retain(|idx| *idx < list.items.len());
        Self {
            storage_key: list.storage_key.clone(),
            total: list.items.len(),
            checked,
        }
    }

    /// Flip one item and persist. A write failure is swallowed: the
    /// in-memory toggle stands and the user is not interrupted.
    pub fn toggle(&mut self, index: usize, progress: &ProgressStore) {
        if index >= self.total {
            return;
        }
        if !self.checked.insert(index) {
            self.checked.remove(&index);
        }
        if let Err(error) = progress.set_checked(&self.storage_key, &self.checked) {
            warn!(key = %self.storage_key, %error, "failed to persist checklist progress");
        }
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.contains(&index)
    }

    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    pub fn percent(&self) -> u8 {
        completion_percent(self.checked.len(), self.total)
    }

    pub fn item_count(&self) -> usize {
        self.total
    }
}

/// Render the checklist: progress header, gauge, then one entry per item.
pub fn lines(
    list: &Checklist,
    state: &ChecklistState,
    theme: &Theme,
    width: usize,
    cursor: Option<usize>,
) -> WidgetLines {
    let accent = Accent::Amber;
    let mut out = WidgetLines::default();

    let percent = state.percent();
    out.lines.push(Line::from(vec![
        Span::styled(
            format!("{} / {} complete", state.checked_count(), list.items.len()),
            theme.text_muted_style(),
        ),
        Span::raw("  "),
        Span::styled(format!("{percent}%"), theme.accent_style(accent)),
    ]));
    out.lines
        .push(helpers::gauge_line(theme, accent, width.saturating_sub(2).max(8), percent));
    out.lines.push(Line::default());

    for (idx, item) in list.items.iter().enumerate() {
        let done = state.is_checked(idx);
        let focused = cursor == Some(idx);
        let box_span = if done {
            Span::styled("[x] ", theme.accent_style(Accent::Green))
        } else {
            Span::styled("[ ] ", theme.text_dim_style())
        };
        let mut text_style = if done {
            theme
                .accent_style(Accent::Green)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            theme.text_secondary_style()
        };
        if focused {
            text_style = text_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }

        let wrapped = wrap(item, width.saturating_sub(4));
        out.entry_lines.push(out.lines.len());
        for (row, part) in wrapped.iter().enumerate() {
            let prefix = if row == 0 {
                box_span.clone()
            } else {
                Span::raw("    ")
            };
            out.lines
                .push(Line::from(vec![prefix, Span::styled(part.clone(), text_style)]));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> Checklist {
        Checklist {
            storage_key: "test-checklist".into(),
            items: vec!["one".into(), "two".into(), "three".into(), "four".into()],
        }
    }

    #[test]
    fn toggle_round_trip_restores_original_state() {
        let progress = ProgressStore::ephemeral();
        let list = sample_list();
        let mut state = ChecklistState::load(&list, &progress);

        assert_eq!(state.percent(), 0);
        state.toggle(2, &progress);
        assert!(state.is_checked(2));
        assert_eq!(state.percent(), 25);
        state.toggle(2, &progress);
        assert!(!state.is_checked(2));
        assert_eq!(state.percent(), 0);
        assert!(progress.checked("test-checklist").is_empty());
    }

    #[test]
    fn reload_reproduces_persisted_state() {
        let progress = ProgressStore::ephemeral();
        let list = sample_list();
        let mut state = ChecklistState::load(&list, &progress);
        state.toggle(0, &progress);
        state.toggle(3, &progress);

        let reloaded = ChecklistState::load(&list, &progress);
        assert!(reloaded.is_checked(0));
        assert!(reloaded.is_checked(3));
        assert_eq!(reloaded.checked_count(), 2);
        assert_eq!(reloaded.percent(), 50);
    }

    #[test]
    fn stale_out_of_range_indices_are_dropped_on_load() {
        let progress = ProgressStore::ephemeral();
        progress
            .set_checked("test-checklist", &std::collections::BTreeSet::from([1, 9]))
            .unwrap();
        let state = ChecklistState::load(&sample_list(), &progress);
        assert!(state.is_checked(1));
        assert_eq!(state.checked_count(), 1);
    }

    #[test]
    fn every_item_is_an_entry() {
        let progress = ProgressStore::ephemeral();
        let list = sample_list();
        let state = ChecklistState::load(&list, &progress);
        let rendered = lines(&list, &state, &Theme::default(), 60, None);
        assert_eq!(rendered.entry_lines.len(), list.items.len());
    }
}
