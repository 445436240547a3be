//! Behavior tests for catalog loading and validation.

use trailhead_registry::WidgetRegistry;
use trailhead_types::{Block, SectionId, WidgetContent};

#[test]
fn every_module_has_a_resolvable_document() {
    let registry = WidgetRegistry::from_embedded_catalog().expect("load catalog");
    for id in SectionId::modules() {
        let doc = registry
            .document(*id)
            .unwrap_or_else(|| panic!("no document for {id}"));
        assert!(!doc.blocks.is_empty(), "{id} document is empty");
        for block in &doc.blocks {
            if let Block::Widget { name } = block {
                let spec = registry
                    .widget(name)
                    .unwrap_or_else(|| panic!("{id} embeds unknown widget {name}"));
                assert_eq!(spec.module, *id);
            }
        }
    }
    assert!(registry.document(SectionId::Overview).is_none());
}

#[test]
fn every_module_carries_a_checklist() {
    let registry = WidgetRegistry::from_embedded_catalog().expect("load catalog");
    let modules_with_lists: Vec<SectionId> =
        registry.checklists().map(|(spec, _)| spec.module).collect();
    for id in SectionId::modules() {
        assert!(
            modules_with_lists.contains(id),
            "{id} has no progress checklist"
        );
    }
}

#[test]
fn checklist_storage_keys_are_unique() {
    let registry = WidgetRegistry::from_embedded_catalog().expect("load catalog");
    let mut keys = std::collections::HashSet::new();
    for (_, list) in registry.checklists() {
        assert!(
            keys.insert(list.storage_key.clone()),
            "duplicate storage key {}",
            list.storage_key
        );
    }
}

#[test]
fn decision_tree_branches_stay_in_range() {
    let registry = WidgetRegistry::from_embedded_catalog().expect("load catalog");
    for spec in registry.widgets() {
        if let WidgetContent::DecisionTree(tree) = &spec.content {
            for node in &tree.nodes {
                for branch in [&node.yes, &node.no] {
                    if let trailhead_types::Branch::Node(idx) = branch {
                        assert!(*idx < tree.nodes.len());
                    }
                }
            }
        }
    }
}

#[test]
fn unknown_widget_reference_is_rejected_at_load() {
    let bad = r#"{
        "widgets": [],
        "documents": [
            { "id": "m01", "blocks": [ { "type": "widget", "name": "Ghost" } ] }
        ]
    }"#;
    let err = WidgetRegistry::from_json(bad).expect_err("ghost reference should fail");
    assert!(err.to_string().contains("Ghost") || format!("{err:#}").contains("Ghost"));
}

#[test]
fn quiz_with_out_of_range_answer_is_rejected() {
    let bad = r#"{
        "widgets": [
            {
                "name": "BadQuiz",
                "module": "m01",
                "content": { "quiz": {
                    "question": "?",
                    "options": ["a"],
                    "correct": 3,
                    "explanations": ["a"]
                } }
            }
        ],
        "documents": []
    }"#;
    assert!(WidgetRegistry::from_json(bad).is_err());
}
