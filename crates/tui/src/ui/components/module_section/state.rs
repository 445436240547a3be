//! Per-section state: the assigned module, the live selection copy, and
//! the view state of every interactive widget in the document.

use std::cell::Cell;
use std::rc::Rc;

use ratatui::text::{Line, Span};
use tracing::warn;
use trailhead_registry::WidgetRegistry;
use trailhead_types::{Block, ModuleDoc, SectionId, WidgetContent};
use trailhead_util::ProgressStore;

use crate::{
    bus::{SelectionBus, Subscription},
    ui::{
        components::widgets::{
            self, checklist::ChecklistState, decision_tree::TreeState, quiz::QuizState,
        },
        theme::{helpers, Theme},
    },
};

/// View state for one interactive widget instance.
#[derive(Debug)]
pub enum WidgetState {
    Checklist(ChecklistState),
    Quiz(QuizState),
    Tree(TreeState),
}

/// State for one mounted module section.
///
/// The section holds its own copy of the selection, updated only by the
/// bus subscription taken at construction. It renders its content only
/// while its assigned id matches that copy; otherwise it
/// contributes nothing to the output.
#[derive(Debug)]
pub struct SectionState {
    id: SectionId,
    doc: ModuleDoc,
    selection: Rc<Cell<SectionId>>,
    _subscription: Subscription,
    widget_states: Vec<Option<WidgetState>>,
    /// Cursor over the flattened interactive entries of the document.
    pub cursor: usize,
    pub scroll: u16,
    /// Render-time geometry, used for cursor visibility scrolling.
    pub viewport_height: u16,
    pub entry_lines: Vec<usize>,
    pub line_count: usize,
}

impl SectionState {
    pub fn new(
        doc: ModuleDoc,
        registry: &WidgetRegistry,
        progress: &ProgressStore,
        bus: &SelectionBus,
    ) -> Self {
        let selection = Rc::new(Cell::new(SectionId::Overview));
        let copy = Rc::clone(&selection);
        let subscription = bus.subscribe(move |id| copy.set(id));

        let widget_states = doc
            .blocks
            .iter()
            .map(|block| {
                let Block::Widget { name } = block else {
                    return None;
                };
                let Some(spec) = registry.widget(name) else {
                    warn!(widget = %name, module = %doc.id, "document embeds unregistered widget");
                    return None;
                };
                match &spec.content {
                    WidgetContent::Checklist(list) => {
                        Some(WidgetState::Checklist(ChecklistState::load(list, progress)))
                    }
                    WidgetContent::Quiz(_) => Some(WidgetState::Quiz(QuizState::default())),
                    WidgetContent::DecisionTree(_) => Some(WidgetState::Tree(TreeState::default())),
                    _ => None,
                }
            })
            .collect();

        Self {
            id: doc.id,
            doc,
            selection,
            _subscription: subscription,
            widget_states,
            cursor: 0,
            scroll: 0,
            viewport_height: 0,
            entry_lines: Vec::new(),
            line_count: 0,
        }
    }

    /// The module this section was mounted for. Fixed for the lifetime of
    /// the mount.
    pub fn assigned_id(&self) -> SectionId {
        self.id
    }

    /// This section's live copy of the shared selection.
    pub fn selection(&self) -> SectionId {
        self.selection.get()
    }

    /// Whether this section currently renders at all.
    pub fn is_active(&self) -> bool {
        self.selection.get() == self.id
    }

    /// The flattened interactive entries of the document, as
    /// `(block index, entry index)` pairs in cursor order. Independent of
    /// viewport width.
    pub fn entries(&self, registry: &WidgetRegistry) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (block_idx, block) in self.doc.blocks.iter().enumerate() {
            let Block::Widget { name } = block else {
                continue;
            };
            let Some(spec) = registry.widget(name) else {
                continue;
            };
            let count = match (&spec.content, self.widget_states.get(block_idx)) {
                (WidgetContent::Checklist(list), _) => list.items.len(),
                (WidgetContent::Quiz(quiz), _) => quiz.options.len(),
                (WidgetContent::DecisionTree(_), Some(Some(WidgetState::Tree(state)))) => {
                    state.entries().len()
                }
                _ => 0,
            };
            for entry_idx in 0..count {
                out.push((block_idx, entry_idx));
            }
        }
        out
    }

    /// Activate the entry under the cursor: toggle a checklist item,
    /// answer a quiz, or take a decision-tree branch. Selection is not
    /// affected; nothing is published.
    pub fn activate_cursor(&mut self, registry: &WidgetRegistry, progress: &ProgressStore) {
        let entries = self.entries(registry);
        let Some((block_idx, entry_idx)) = entries.get(self.cursor).copied() else {
            return;
        };
        let Block::Widget { name } = &self.doc.blocks[block_idx] else {
            return;
        };
        let Some(spec) = registry.widget(name) else {
            return;
        };
        match (self.widget_states[block_idx].as_mut(), &spec.content) {
            (Some(WidgetState::Checklist(state)), WidgetContent::Checklist(_)) => {
                state.toggle(entry_idx, progress);
            }
            (Some(WidgetState::Quiz(state)), WidgetContent::Quiz(quiz)) => {
                state.answer(entry_idx, quiz.options.len());
            }
            (Some(WidgetState::Tree(state)), WidgetContent::DecisionTree(tree)) => {
                if let Some(entry) = state.entries().get(entry_idx).copied() {
                    state.choose(tree, entry);
                }
            }
            _ => {}
        }
        // A tree step can shrink the entry list; keep the cursor in range.
        let count = self.entries(registry).len();
        if count > 0 {
            self.cursor = self.cursor.min(count - 1);
        } else {
            self.cursor = 0;
        }
    }

    pub fn widget_state(&self, block_idx: usize) -> Option<&WidgetState> {
        self.widget_states.get(block_idx).and_then(Option::as_ref)
    }

    /// Build the rendered view of this section's document.
    ///
    /// Returns the content lines plus the line index of every interactive
    /// entry, in cursor order. `cursor` highlights the matching entry when
    /// the content region has focus.
    pub fn build_view(
        &self,
        registry: &WidgetRegistry,
        theme: &Theme,
        width: usize,
        cursor: Option<usize>,
    ) -> (Vec<Line<'static>>, Vec<usize>) {
        let accent = self
            .id
            .descriptor()
            .map(|d| d.accent)
            .unwrap_or(trailhead_types::Accent::Amber);
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut entry_lines: Vec<usize> = Vec::new();
        let mut entry_base = 0usize;

        for (block_idx, block) in self.doc.blocks.iter().enumerate() {
            match block {
                Block::Heading { text, sub } => {
                    if !lines.is_empty() {
                        lines.push(Line::default());
                    }
                    lines.push(Line::from(vec![
                        helpers::accent_bar(theme, accent),
                        Span::styled(
                            text.clone(),
                            theme
                                .text_style()
                                .add_modifier(ratatui::style::Modifier::BOLD),
                        ),
                    ]));
                    if let Some(sub) = sub {
                        for part in widgets::wrap(sub, width.saturating_sub(2)) {
                            lines.push(Line::from(vec![
                                Span::raw("  "),
                                Span::styled(part, theme.text_muted_style()),
                            ]));
                        }
                    }
                    lines.push(Line::default());
                }
                Block::Prose { text } => {
                    for part in widgets::wrap(text, width) {
                        lines.push(Line::from(Span::styled(part, theme.text_secondary_style())));
                    }
                    lines.push(Line::default());
                }
                Block::Widget { name } => {
                    let Some(spec) = registry.widget(name) else {
                        lines.push(Line::from(Span::styled(
                            format!("⟨unavailable widget: {name}⟩"),
                            theme.text_dim_style(),
                        )));
                        lines.push(Line::default());
                        continue;
                    };
                    let state = self.widget_state(block_idx);
                    let entry_count = self.entry_count_for(block_idx, &spec.content);
                    let local_cursor = cursor.and_then(|c| {
                        (c >= entry_base && c < entry_base + entry_count).then(|| c - entry_base)
                    });

                    let rendered = match (&spec.content, state) {
                        (WidgetContent::ConceptGrid(grid), _) => {
                            widgets::concept_grid::lines(grid, theme, width)
                        }
                        (WidgetContent::DataTable(table), _) => {
                            widgets::data_table::lines(table, theme, width)
                        }
                        (WidgetContent::Callout(callout), _) => {
                            widgets::callout::lines(callout, theme, width)
                        }
                        (WidgetContent::Checklist(list), Some(WidgetState::Checklist(state))) => {
                            widgets::checklist::lines(list, state, theme, width, local_cursor)
                        }
                        (WidgetContent::Quiz(quiz), Some(WidgetState::Quiz(state))) => {
                            widgets::quiz::lines(quiz, state, theme, width, local_cursor)
                        }
                        (WidgetContent::DecisionTree(tree), Some(WidgetState::Tree(state))) => {
                            widgets::decision_tree::lines(tree, state, theme, width, local_cursor)
                        }
                        _ => widgets::WidgetLines::default(),
                    };

                    entry_lines.extend(rendered.entry_lines.iter().map(|l| l + lines.len()));
                    lines.extend(rendered.lines);
                    lines.push(Line::default());
                    entry_base += entry_count;
                }
            }
        }

        (lines, entry_lines)
    }

    fn entry_count_for(&self, block_idx: usize, content: &WidgetContent) -> usize {
        match (content, self.widget_states.get(block_idx)) {
            (WidgetContent::Checklist(list), _) => list.items.len(),
            (WidgetContent::Quiz(quiz), _) => quiz.options.len(),
            (WidgetContent::DecisionTree(_), Some(Some(WidgetState::Tree(state)))) => {
                state.entries().len()
            }
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> WidgetRegistry {
        WidgetRegistry::from_embedded_catalog().expect("load catalog")
    }

    fn mounted_section(id: SectionId, bus: &SelectionBus, progress: &ProgressStore) -> SectionState {
        let registry = registry();
        let doc = registry.document(id).expect("doc").clone();
        SectionState::new(doc, &registry, progress, bus)
    }

    #[test]
    fn section_renders_only_when_its_id_is_selected() {
        let bus = SelectionBus::new();
        let progress = ProgressStore::ephemeral();
        let section = mounted_section(SectionId::Foundations, &bus, &progress);

        assert!(!section.is_active(), "defaults to overview, so inactive");
        bus.publish(SectionId::Foundations);
        assert!(section.is_active());
        bus.publish(SectionId::AiMl);
        assert!(!section.is_active());
    }

    #[test]
    fn late_mounted_section_defaults_to_overview() {
        let bus = SelectionBus::new();
        let progress = ProgressStore::ephemeral();
        bus.publish(SectionId::Foundations);
        // Mounted after the publish: sees only its initialized default.
        let section = mounted_section(SectionId::Foundations, &bus, &progress);
        assert_eq!(section.selection(), SectionId::Overview);
        assert!(!section.is_active());
    }

    #[test]
    fn every_mounted_section_converges_on_the_latest_publish() {
        let bus = SelectionBus::new();
        let progress = ProgressStore::ephemeral();
        let sections: Vec<SectionState> = SectionId::modules()
            .iter()
            .map(|id| mounted_section(*id, &bus, &progress))
            .collect();

        for target in [SectionId::AiMl, SectionId::Foundations, SectionId::Overview] {
            bus.publish(target);
            for section in &sections {
                assert_eq!(section.selection(), target);
                assert_eq!(section.is_active(), section.assigned_id() == target);
            }
            let active = sections.iter().filter(|s| s.is_active()).count();
            assert_eq!(active, usize::from(!target.is_overview()));
        }
    }

    #[test]
    fn activate_cursor_toggles_a_checklist_item_and_persists() {
        let bus = SelectionBus::new();
        let progress = ProgressStore::ephemeral();
        let registry = registry();
        let mut section = mounted_section(SectionId::Foundations, &bus, &progress);

        let entries = section.entries(&registry);
        let checklist_pos = entries
            .iter()
            .position(|(block_idx, _)| {
                matches!(
                    section.widget_state(*block_idx),
                    Some(WidgetState::Checklist(_))
                )
            })
            .expect("foundations has a checklist entry");

        section.cursor = checklist_pos;
        section.activate_cursor(&registry, &progress);
        assert!(
            !progress.checked("foundations-checklist").is_empty(),
            "toggle reached the store"
        );
        section.activate_cursor(&registry, &progress);
        assert!(progress.checked("foundations-checklist").is_empty());
    }

    #[test]
    fn tree_activation_shrinks_entries_and_clamps_cursor() {
        let bus = SelectionBus::new();
        let progress = ProgressStore::ephemeral();
        let registry = registry();
        let mut section = mounted_section(SectionId::AiMl, &bus, &progress);

        let entries = section.entries(&registry);
        // Walk "no" at the tree root: leads straight to an outcome leaf.
        let no_pos = entries
            .iter()
            .position(|(block_idx, entry_idx)| {
                *entry_idx == 1
                    && matches!(section.widget_state(*block_idx), Some(WidgetState::Tree(_)))
            })
            .expect("tree has a no entry");
        section.cursor = no_pos;
        section.activate_cursor(&registry, &progress);

        let after = section.entries(&registry);
        assert!(after.len() < entries.len(), "leaf exposes fewer entries");
        assert!(section.cursor < after.len().max(1));
    }

    #[test]
    fn build_view_lines_up_entries_with_rendered_lines() {
        let bus = SelectionBus::new();
        let progress = ProgressStore::ephemeral();
        let registry = registry();
        let section = mounted_section(SectionId::DesignCraft, &bus, &progress);

        let (lines, entry_lines) = section.build_view(&registry, &Theme::default(), 72, Some(0));
        assert!(!lines.is_empty());
        assert_eq!(entry_lines.len(), section.entries(&registry).len());
        assert!(entry_lines.iter().all(|idx| *idx < lines.len()));
    }
}
