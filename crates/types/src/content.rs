//! Document and widget content model.
//!
//! A module's content is an ordered list of [`Block`]s: headings, prose
//! paragraphs, and embedded widgets referenced by registered name. Widget
//! content is the "props" a widget renders: static data deserialized from
//! the embedded catalog, never mutated at runtime.

use serde::{Deserialize, Serialize};

use crate::{Accent, SectionId};

/// One module's content document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDoc {
    /// The module this document belongs to.
    pub id: SectionId,
    /// Ordered content blocks.
    pub blocks: Vec<Block>,
}

/// A single content block within a module document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Section heading with an optional subtitle line.
    Heading {
        text: String,
        #[serde(default)]
        sub: Option<String>,
    },
    /// A prose paragraph, wrapped to the viewport at render time.
    Prose { text: String },
    /// An embedded widget, resolved through the registry by name.
    Widget { name: String },
}

/// Content payload for a registered widget.
///
/// Externally tagged in the catalog JSON: `{"quiz": {...}}`,
/// `{"concept_grid": {...}}`, and so on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetContent {
    ConceptGrid(ConceptGrid),
    DataTable(DataTable),
    DecisionTree(DecisionTree),
    Checklist(Checklist),
    Quiz(Quiz),
    Callout(Callout),
}

impl WidgetContent {
    /// Short kind name used in logs and placeholder output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            WidgetContent::ConceptGrid(_) => "concept_grid",
            WidgetContent::DataTable(_) => "data_table",
            WidgetContent::DecisionTree(_) => "decision_tree",
            WidgetContent::Checklist(_) => "checklist",
            WidgetContent::Quiz(_) => "quiz",
            WidgetContent::Callout(_) => "callout",
        }
    }

    /// Whether the widget holds view state the user interacts with.
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            WidgetContent::Checklist(_) | WidgetContent::Quiz(_) | WidgetContent::DecisionTree(_)
        )
    }
}

/// A named concept card: title, accent, one-paragraph description, and
/// optional tag pills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    pub name: String,
    pub accent: Accent,
    pub desc: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A grid of concept cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptGrid {
    #[serde(default)]
    pub title: Option<String>,
    pub concepts: Vec<Concept>,
}

/// A comparison table: header row plus data rows. The first column is the
/// row label and is emphasized at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTable {
    #[serde(default)]
    pub title: Option<String>,
    pub heads: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// An interactive yes/no decision tree. Node 0 is the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub title: String,
    pub nodes: Vec<DecisionNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionNode {
    pub question: String,
    pub yes: Branch,
    pub no: Branch,
}

/// Where a decision-tree answer leads: another node by index, or a leaf
/// recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Branch {
    Node(usize),
    Outcome(String),
}

/// A progress checklist. `storage_key` is the per-instance key under which
/// the checked-item indices persist across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checklist {
    pub storage_key: String,
    pub items: Vec<String>,
}

/// A single-question knowledge check. `explanations` is parallel to
/// `options`: the explanation shown is the one for the chosen answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanations: Vec<String>,
}

/// A highlighted aside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Callout {
    pub kind: CalloutKind,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    Info,
    Warn,
    Tip,
    Insight,
    Danger,
}

impl CalloutKind {
    pub fn accent(self) -> Accent {
        match self {
            CalloutKind::Info => Accent::Cyan,
            CalloutKind::Warn => Accent::Amber,
            CalloutKind::Tip => Accent::Green,
            CalloutKind::Insight => Accent::Violet,
            CalloutKind::Danger => Accent::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CalloutKind::Info => "INFO",
            CalloutKind::Warn => "WARN",
            CalloutKind::Tip => "TIP",
            CalloutKind::Insight => "INSIGHT",
            CalloutKind::Danger => "DANGER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_json_shape_is_tagged() {
        let block: Block = serde_json::from_str(r#"{"type":"widget","name":"BigOVisual"}"#)
            .expect("deserialize widget block");
        match block {
            Block::Widget { name } => assert_eq!(name, "BigOVisual"),
            other => panic!("expected widget block, got {other:?}"),
        }
    }

    #[test]
    fn branch_accepts_node_index_or_outcome() {
        let node: DecisionNode = serde_json::from_str(
            r#"{"question":"Patterns in historical data?","yes":1,"no":"Use rules/heuristics."}"#,
        )
        .expect("deserialize decision node");
        assert!(matches!(node.yes, Branch::Node(1)));
        assert!(matches!(node.no, Branch::Outcome(ref s) if s.starts_with("Use rules")));
    }

    #[test]
    fn widget_content_tags_round_trip() {
        let json = r#"{"quiz":{"question":"q","options":["a","b"],"correct":0,"explanations":["yes","no"]}}"#;
        let content: WidgetContent = serde_json::from_str(json).expect("deserialize quiz");
        assert!(content.is_interactive());
        assert_eq!(content.kind_name(), "quiz");

        let callout: WidgetContent = serde_json::from_str(
            r#"{"callout":{"kind":"tip","title":"Ship it","body":"Small steps."}}"#,
        )
        .expect("deserialize callout");
        assert!(!callout.is_interactive());
        match callout {
            WidgetContent::Callout(c) => assert_eq!(c.kind.accent(), Accent::Green),
            other => panic!("expected callout, got {}", other.kind_name()),
        }
    }
}
