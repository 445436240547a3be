//! Interactive yes/no decision tree widget.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};
use trailhead_types::{Accent, Branch, DecisionTree};

use crate::ui::theme::{helpers, Theme};

use super::{wrap, WidgetLines};

/// Where the walk currently stands: at a question node, or at a leaf
/// recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeStep {
    Node(usize),
    Outcome(String),
}

/// The actionable controls a tree exposes at its current step, in cursor
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEntry {
    Yes,
    No,
    StartOver,
}

#[derive(Debug)]
pub struct TreeState {
    step: TreeStep,
}

impl Default for TreeState {
    fn default() -> Self {
        Self {
            step: TreeStep::Node(0),
        }
    }
}

impl TreeState {
    pub fn step(&self) -> &TreeStep {
        &self.step
    }

    pub fn at_root(&self) -> bool {
        self.step == TreeStep::Node(0)
    }

    /// Controls available right now. At a leaf only "start over" remains;
    /// at the root there is nothing to start over from.
    pub fn entries(&self) -> Vec<TreeEntry> {
        match self.step {
            TreeStep::Node(0) => vec![TreeEntry::Yes, TreeEntry::No],
            TreeStep::Node(_) => vec![TreeEntry::Yes, TreeEntry::No, TreeEntry::StartOver],
            TreeStep::Outcome(_) => vec![TreeEntry::StartOver],
        }
    }

    /// Apply a control. Branch indices were validated at catalog load, so
    /// a missing node can only mean stale state; the walk resets.
    pub fn choose(&mut self, tree: &DecisionTree, entry: TreeEntry) {
        let node_idx = match (&self.step, entry) {
            (_, TreeEntry::StartOver) => {
                self.step = TreeStep::Node(0);
                return;
            }
            (TreeStep::Node(idx), _) => *idx,
            (TreeStep::Outcome(_), _) => return,
        };
        let Some(node) = tree.nodes.get(node_idx) else {
            self.step = TreeStep::Node(0);
            return;
        };
        let branch = match entry {
            TreeEntry::Yes => &node.yes,
            TreeEntry::No => &node.no,
            TreeEntry::StartOver => unreachable!("handled above"),
        };
        self.step = match branch {
            Branch::Node(next) => TreeStep::Node(*next),
            Branch::Outcome(text) => TreeStep::Outcome(text.clone()),
        };
    }
}

pub fn lines(
    tree: &DecisionTree,
    state: &TreeState,
    theme: &Theme,
    width: usize,
    cursor: Option<usize>,
) -> WidgetLines {
    let mut out = WidgetLines::default();
    out.lines.push(helpers::caption(theme, None, &tree.title));

    let entries = state.entries();
    let entry_style = |pos: usize, base: ratatui::style::Style| {
        if cursor == Some(pos) {
            base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            base
        }
    };

    match state.step() {
        TreeStep::Outcome(outcome) => {
            for part in wrap(&format!("→ Recommendation: {outcome}"), width) {
                out.lines.push(Line::from(Span::styled(
                    part,
                    theme.accent_style(Accent::Green).add_modifier(Modifier::BOLD),
                )));
            }
            out.lines.push(Line::default());
            out.entry_lines.push(out.lines.len());
            out.lines.push(Line::from(Span::styled(
                "↩ Start over".to_string(),
                entry_style(0, theme.text_muted_style()),
            )));
        }
        TreeStep::Node(idx) => {
            let Some(node) = tree.nodes.get(*idx) else {
                return out;
            };
            for part in wrap(&node.question, width) {
                out.lines.push(Line::from(Span::styled(
                    part,
                    theme.text_style().add_modifier(Modifier::BOLD),
                )));
            }
            out.lines.push(Line::default());
            out.entry_lines.push(out.lines.len());
            out.lines.push(Line::from(vec![
                Span::styled(
                    "[ Yes → ]".to_string(),
                    entry_style(0, theme.accent_style(Accent::Green)),
                ),
                Span::raw("   "),
                Span::styled(
                    "[ No → ]".to_string(),
                    entry_style(1, theme.accent_style(Accent::Red)),
                ),
            ]));
            // Yes and No share a line; the No entry points at the same row.
            out.entry_lines.push(out.lines.len() - 1);
            if entries.contains(&TreeEntry::StartOver) {
                out.entry_lines.push(out.lines.len());
                out.lines.push(Line::from(Span::styled(
                    "↩ Start over".to_string(),
                    entry_style(2, theme.text_dim_style()),
                )));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use trailhead_types::DecisionNode;

    use super::*;

    fn sample_tree() -> DecisionTree {
        DecisionTree {
            title: "Pick an approach".into(),
            nodes: vec![
                DecisionNode {
                    question: "Patterns in data?".into(),
                    yes: Branch::Node(1),
                    no: Branch::Outcome("Use rules".into()),
                },
                DecisionNode {
                    question: "Natural language?".into(),
                    yes: Branch::Outcome("LLM".into()),
                    no: Branch::Outcome("Classical ML".into()),
                },
            ],
        }
    }

    #[test]
    fn walk_reaches_a_leaf_and_resets() {
        let tree = sample_tree();
        let mut state = TreeState::default();
        assert!(state.at_root());
        assert_eq!(state.entries(), vec![TreeEntry::Yes, TreeEntry::No]);

        state.choose(&tree, TreeEntry::Yes);
        assert_eq!(state.step(), &TreeStep::Node(1));
        assert_eq!(
            state.entries(),
            vec![TreeEntry::Yes, TreeEntry::No, TreeEntry::StartOver]
        );

        state.choose(&tree, TreeEntry::No);
        assert_eq!(state.step(), &TreeStep::Outcome("Classical ML".into()));
        assert_eq!(state.entries(), vec![TreeEntry::StartOver]);

        state.choose(&tree, TreeEntry::StartOver);
        assert!(state.at_root());
    }

    #[test]
    fn no_at_root_leads_straight_to_outcome() {
        let tree = sample_tree();
        let mut state = TreeState::default();
        state.choose(&tree, TreeEntry::No);
        assert_eq!(state.step(), &TreeStep::Outcome("Use rules".into()));
    }

    #[test]
    fn entry_lines_match_available_entries() {
        let tree = sample_tree();
        let mut state = TreeState::default();
        let theme = Theme::default();

        let at_root = lines(&tree, &state, &theme, 60, None);
        assert_eq!(at_root.entry_lines.len(), 2);

        state.choose(&tree, TreeEntry::Yes);
        let mid_walk = lines(&tree, &state, &theme, 60, None);
        assert_eq!(mid_walk.entry_lines.len(), 3);

        state.choose(&tree, TreeEntry::Yes);
        let at_leaf = lines(&tree, &state, &theme, 60, None);
        assert_eq!(at_leaf.entry_lines.len(), 1);
    }
}
