//! Registry data structures and catalog loading.

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use trailhead_types::{Block, Branch, ModuleDoc, SectionId, WidgetContent};

/// Embedded content catalog, serialized as JSON at build time.
const EMBEDDED_CATALOG: &str = include_str!("catalog.json");

/// A registered widget: a stable name plus the content it renders.
///
/// The name is the contract with authored documents: a document block
/// embeds a widget by this exact name, the way a tag in authored content
/// maps to a component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSpec {
    /// Stable registered name (e.g. "AIDecisionTree").
    pub name: String,
    /// Module this widget belongs to.
    pub module: SectionId,
    /// The content payload the widget renders.
    pub content: WidgetContent,
}

/// Raw catalog file shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    widgets: Vec<WidgetSpec>,
    documents: Vec<ModuleDoc>,
}

/// The widget/content registry: every widget keyed by its stable name,
/// plus one content document per module.
///
/// The document-rendering pipeline resolves embedded widget references
/// through this table; nothing else in the application knows where content
/// comes from.
#[derive(Debug, Clone, Default)]
pub struct WidgetRegistry {
    widgets: IndexMap<String, WidgetSpec>,
    documents: IndexMap<SectionId, ModuleDoc>,
}

impl WidgetRegistry {
    /// Load and validate the catalog embedded at compile time.
    ///
    /// Validation guarantees the invariants render code relies on: widget
    /// names are unique, every embedded reference resolves, every module
    /// has a document, and interactive content is internally consistent
    /// (quiz answer indices in range, decision-tree branches in range).
    pub fn from_embedded_catalog() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a registry from catalog JSON. Exposed for tests.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json).context("parse content catalog")?;

        let mut widgets = IndexMap::new();
        for spec in file.widgets {
            validate_widget(&spec)?;
            if widgets.contains_key(&spec.name) {
                bail!("duplicate widget name {} in catalog", spec.name);
            }
            widgets.insert(spec.name.clone(), spec);
        }

        let mut documents = IndexMap::new();
        for doc in file.documents {
            if doc.id.is_overview() {
                bail!("overview has no content document; it is rendered by the navigator");
            }
            for block in &doc.blocks {
                if let Block::Widget { name } = block {
                    let spec = widgets
                        .get(name)
                        .with_context(|| format!("document {} embeds unknown widget {name}", doc.id))?;
                    if spec.module != doc.id {
                        bail!(
                            "widget {name} is registered under {} but embedded in {}",
                            spec.module,
                            doc.id
                        );
                    }
                }
            }
            if documents.insert(doc.id, doc).is_some() {
                bail!("duplicate module document in catalog");
            }
        }

        for id in SectionId::modules() {
            if !documents.contains_key(id) {
                bail!("catalog has no document for module {id}");
            }
        }

        Ok(Self { widgets, documents })
    }

    /// Look up a widget by its registered name.
    pub fn widget(&self, name: &str) -> Option<&WidgetSpec> {
        self.widgets.get(name)
    }

    /// The content document for a module. `None` only for `Overview`.
    pub fn document(&self, id: SectionId) -> Option<&ModuleDoc> {
        self.documents.get(&id)
    }

    /// All registered widgets, in catalog order.
    pub fn widgets(&self) -> impl Iterator<Item = &WidgetSpec> {
        self.widgets.values()
    }

    /// Every checklist in the catalog, with its owning module.
    pub fn checklists(&self) -> impl Iterator<Item = (&WidgetSpec, &trailhead_types::Checklist)> {
        self.widgets.values().filter_map(|spec| match &spec.content {
            WidgetContent::Checklist(list) => Some((spec, list)),
            _ => None,
        })
    }
}

fn validate_widget(spec: &WidgetSpec) -> Result<()> {
    match &spec.content {
        WidgetContent::Quiz(quiz) => {
            if quiz.correct >= quiz.options.len() {
                bail!("quiz {}: correct index out of range", spec.name);
            }
            if quiz.explanations.len() != quiz.options.len() {
                bail!("quiz {}: explanations not parallel to options", spec.name);
            }
        }
        WidgetContent::DecisionTree(tree) => {
            if tree.nodes.is_empty() {
                bail!("decision tree {} has no nodes", spec.name);
            }
            for (idx, node) in tree.nodes.iter().enumerate() {
                for branch in [&node.yes, &node.no] {
                    if let Branch::Node(target) = branch {
                        if *target >= tree.nodes.len() {
                            bail!(
                                "decision tree {}: node {idx} branches to missing node {target}",
                                spec.name
                            );
                        }
                    }
                }
            }
        }
        WidgetContent::Checklist(list) => {
            if list.storage_key.trim().is_empty() || list.items.is_empty() {
                bail!("checklist {} needs a storage key and items", spec.name);
            }
        }
        WidgetContent::DataTable(table) => {
            if table.rows.iter().any(|row| row.len() != table.heads.len()) {
                bail!("table {}: ragged rows", spec.name);
            }
        }
        WidgetContent::ConceptGrid(_) | WidgetContent::Callout(_) => {}
    }
    Ok(())
}
