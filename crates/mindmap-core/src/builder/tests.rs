use super::*;
use crate::analysis::TreeMetrics;
use crate::model::NodeId;
use std::collections::HashMap;

struct FakeNotes {
    texts: HashMap<String, Vec<String>>,
}

impl FakeNotes {
    fn new(entries: &[(&str, &str)]) -> Self {
        let mut texts: HashMap<String, Vec<String>> = HashMap::new();
        for (path, text) in entries {
            texts
                .entry(path.to_string())
                .or_insert_with(Vec::new)
                .push(text.to_string());
        }
        Self { texts }
    }
}

impl TextLookup for FakeNotes {
    fn lookup(&self, query: &str, path: &str) -> Vec<String> {
        assert_eq!(query, "deck");
        self.texts
            .iter()
            .filter(|(key, _)| key.starts_with(path))
            .flat_map(|(_, texts)| texts.clone())
            .collect()
    }
}

fn contents(tree: &Tree, ids: &[NodeId]) -> Vec<String> {
    ids.iter().map(|id| tree[*id].content.clone()).collect()
}

#[test]
fn test_build_without_prefix() {
    let paths = ["a::b", "a::c", "x"];
    let built = MindmapBuilder::new(SourceConfig::decks(), &paths).build();
    let tree = &built.tree;
    let metrics = TreeMetrics::compute(tree);
    let root = tree.root();

    assert_eq!(contents(tree, tree.children(root)), vec!["a", "x"]);
    let a = tree.child_by_key(root, "a").unwrap();
    let x = tree.child_by_key(root, "x").unwrap();
    assert_eq!(contents(tree, tree.children(a)), vec!["b", "c"]);
    assert_eq!(metrics.height(), 2);
    for child in tree.children(a) {
        assert_eq!(metrics.branch_id(*child), metrics.branch_id(a));
    }
    assert_ne!(metrics.branch_id(x), metrics.branch_id(a));
    assert!(built.diagnostics.is_empty());
}

#[test]
fn test_build_with_prefix_strips_matching_part() {
    let paths = ["a::b", "a::c", "z::y"];
    let config = SourceConfig::decks().with_prefix("a");
    let built = MindmapBuilder::new(config, &paths).build();
    let tree = &built.tree;

    assert_eq!(contents(tree, tree.children(tree.root())), vec!["b", "c"]);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_prefix_matching_compares_shared_positions() {
    let config = SourceConfig::decks().with_prefix("a::b");

    assert!(config.matches_prefix("a::b"));
    assert!(config.matches_prefix("a::b::c"));
    assert!(config.matches_prefix("a"));
    assert!(!config.matches_prefix("a::c"));
    assert!(!config.matches_prefix("b::b"));

    assert_eq!(config.strip_prefix("a::b::c::d"), vec!["c", "d"]);
    assert!(config.strip_prefix("a").is_empty());
}

#[test]
fn test_empty_prefix_keeps_everything() {
    let config = SourceConfig::decks().with_prefix("");
    assert!(config.matches_prefix("anything::at::all"));
    assert_eq!(config.strip_prefix("a::b"), vec!["a", "b"]);
}

#[test]
fn test_unmatched_prefix_reports_info() {
    let paths = ["a::b"];
    let config = SourceConfig::decks().with_prefix("q");
    let built = MindmapBuilder::new(config, &paths).build();

    assert!(built.tree.is_root_only());
    assert_eq!(built.diagnostics.len(), 1);
    assert_eq!(
        built.diagnostics[0].severity,
        crate::diagnostics::DiagnosticSeverity::Info
    );
}

#[test]
fn test_build_attaches_note_texts() {
    let paths = ["a::b", "x"];
    let notes = FakeNotes::new(&[("a::b", "  Note on\nb  "), ("x", "")]);
    let built = MindmapBuilder::new(SourceConfig::decks(), &paths)
        .with_text_lookup(&notes)
        .build();
    let tree = &built.tree;

    let a = tree.child_by_key(tree.root(), "a").unwrap();
    let b = tree.child_by_key(a, "b").unwrap();
    let x = tree.child_by_key(tree.root(), "x").unwrap();

    assert_eq!(contents(tree, tree.children(b)), vec!["Note on b"]);
    assert!(tree.is_leaf(x), "blank note text is skipped");
}

#[test]
fn test_build_truncates_note_texts() {
    let paths = ["a"];
    let long = "x".repeat(200);
    let notes = FakeNotes::new(&[("a", long.as_str())]);
    let built = MindmapBuilder::new(SourceConfig::decks(), &paths)
        .with_text_lookup(&notes)
        .build();
    let tree = &built.tree;

    let a = tree.child_by_key(tree.root(), "a").unwrap();
    let note = tree.children(a)[0];
    assert_eq!(tree[note].content.chars().count(), NOTE_TEXT_LENGTH_LIMIT);
}

#[test]
fn test_build_without_notes_ignores_lookup() {
    let paths = ["a"];
    let notes = FakeNotes::new(&[("a", "text")]);
    let config = SourceConfig::decks().with_include_notes(false);
    let built = MindmapBuilder::new(config, &paths)
        .with_text_lookup(&notes)
        .build();

    assert_eq!(built.tree.len(), 2);
}

#[test]
fn test_root_label_is_applied() {
    let paths = ["a"];
    let config = SourceConfig::tags().with_root_label("My Tags");
    let built = MindmapBuilder::new(config, &paths).build();
    assert_eq!(built.tree[built.tree.root()].content, "My Tags");
}

#[test]
fn test_build_is_idempotent_for_repeated_paths() {
    let once = MindmapBuilder::new(SourceConfig::decks(), &["a::b"]).build();
    let twice = MindmapBuilder::new(SourceConfig::decks(), &["a::b", "a::b"]).build();
    assert_eq!(once.tree.to_outline(2), twice.tree.to_outline(2));
    assert_eq!(once.tree.len(), twice.tree.len());
}

#[test]
fn test_kind_presets() {
    let tags = SourceConfig::for_kind(MindmapKind::Tag, "/");
    assert_eq!(tags.separator, "/");
    assert_eq!(tags.query, "tag");

    let decks = SourceConfig::for_kind(MindmapKind::Deck, "/");
    assert_eq!(decks.separator, "::");
    assert_eq!(decks.query, "deck");
}
