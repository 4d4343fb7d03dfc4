use super::*;
use crate::analysis::TreeMetrics;
use crate::diagnostics::DiagnosticSeverity;
use crate::model::ROOT_DEFAULT_NAME;

fn contents(tree: &Tree, ids: &[NodeId]) -> Vec<String> {
    ids.iter().map(|id| tree[*id].content.clone()).collect()
}

#[test]
fn test_parse_single_top_level_line_becomes_root() {
    let parsed = parse_outline("root\n  child1\n  child2\n    grandchild\n", None);
    let tree = &parsed.tree;
    let metrics = TreeMetrics::compute(tree);

    assert_eq!(tree[tree.root()].content, "root");
    let children = tree.children(tree.root());
    assert_eq!(contents(tree, children), vec!["child1", "child2"]);
    assert_eq!(metrics.depth(children[0]), 1);
    assert_eq!(metrics.depth(children[1]), 1);

    let grandchildren = tree.children(children[1]);
    assert_eq!(contents(tree, grandchildren), vec!["grandchild"]);
    assert_eq!(metrics.depth(grandchildren[0]), 2);
    assert_eq!(metrics.height(), 2);
    assert!(parsed.diagnostics.is_empty());
}

#[test]
fn test_parse_multiple_top_level_lines_use_sentinel_root() {
    let parsed = parse_outline("a\n  b\nc\n", None);
    let tree = &parsed.tree;

    assert_eq!(tree[tree.root()].content, ROOT_DEFAULT_NAME);
    assert_eq!(contents(tree, tree.children(tree.root())), vec!["a", "c"]);
}

#[test]
fn test_parse_root_label_synthesizes_root() {
    let parsed = parse_outline("root\n  child\n", Some("Mindmap"));
    let tree = &parsed.tree;

    assert_eq!(tree[tree.root()].content, "Mindmap");
    let top = tree.children(tree.root());
    assert_eq!(contents(tree, top), vec!["root"]);
    assert_eq!(contents(tree, tree.children(top[0])), vec!["child"]);
}

#[test]
fn test_parse_ignores_blank_lines() {
    let parsed = parse_outline("\na\n\n   \n  b\n\n", Some("r"));
    let tree = &parsed.tree;

    assert_eq!(tree.len(), 3);
    let a = tree.children(tree.root())[0];
    assert_eq!(contents(tree, tree.children(a)), vec!["b"]);
}

#[test]
fn test_parse_non_uniform_indentation() {
    let text = "a\n b\n     c\n d\ne\n";
    let parsed = parse_outline(text, None);
    let tree = &parsed.tree;

    let top = tree.children(tree.root());
    assert_eq!(contents(tree, top), vec!["a", "e"]);
    let a_children = tree.children(top[0]);
    assert_eq!(contents(tree, a_children), vec!["b", "d"]);
    assert_eq!(contents(tree, tree.children(a_children[0])), vec!["c"]);
}

#[test]
fn test_parse_indented_first_line_is_clamped() {
    let parsed = parse_outline("    a\n  b\nc\n", None);
    let tree = &parsed.tree;

    assert_eq!(contents(tree, tree.children(tree.root())), vec!["a", "b", "c"]);
}

#[test]
fn test_parse_tabs_count_as_tab_width() {
    let text = "a\n\tb\n    c\n\t\td\n";
    let parsed = OutlineParser::new().with_tab_width(4).parse(text, Some("r"));
    let tree = &parsed.tree;

    let a = tree.children(tree.root())[0];
    // tab and four spaces are the same level
    assert_eq!(contents(tree, tree.children(a)), vec!["b", "c"]);
    let c = tree.children(a)[1];
    assert_eq!(contents(tree, tree.children(c)), vec!["d"]);
}

#[test]
fn test_parse_duplicate_sibling_warns_and_keeps_both() {
    let parsed = parse_outline("a\n  dup\n  dup\n", None);
    let tree = &parsed.tree;

    assert_eq!(contents(tree, tree.children(tree.root())), vec!["dup", "dup"]);
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].severity, DiagnosticSeverity::Warning);
    assert_eq!(parsed.diagnostics[0].line, Some(3));
}

#[test]
fn test_parse_same_content_in_other_branch_does_not_warn() {
    let parsed = parse_outline("a\n  shared\nb\n  shared\n", None);
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.tree.len(), 5);
}

#[test]
fn test_outline_round_trip_preserves_shape() {
    let mut tree = Tree::new();
    tree.insert("a::b", "::");
    tree.insert("a::c::d", "::");
    tree.insert("x::y", "::");

    let parsed = parse_outline(&tree.to_outline(2), None);
    assert_eq!(parsed.tree.to_outline(2), tree.to_outline(2));
    assert_eq!(parsed.tree.len(), tree.len());
}

#[test]
fn test_outline_round_trip_keeps_empty_segments() {
    let mut tree = Tree::new();
    tree.insert("a::::b", "::");
    tree.insert("x", "::");

    let parsed = parse_outline(&tree.to_outline(2), None);
    assert_eq!(parsed.tree.len(), tree.len());
    assert_eq!(parsed.tree.to_outline(2), tree.to_outline(2));

    let a = parsed.tree.children(parsed.tree.root())[0];
    let blank = parsed.tree.children(a)[0];
    assert_eq!(parsed.tree[blank].content, "");
    assert_eq!(contents(&parsed.tree, parsed.tree.children(blank)), vec!["b"]);
}

#[test]
fn test_outline_round_trip_keeps_single_branch_level() {
    let mut tree = Tree::new();
    tree.insert("a::b", "::");

    let parsed = parse_outline(&tree.to_outline(2), None);
    let root = parsed.tree.root();
    assert_eq!(parsed.tree.len(), 3);
    assert!(parsed.tree[root].is_unlabelled());
    assert_eq!(contents(&parsed.tree, parsed.tree.children(root)), vec!["a"]);

    let mut labelled = Tree::with_root_label(Some("Bio"));
    labelled.insert("cell", "::");
    let parsed = parse_outline(&labelled.to_outline(2), None);
    assert_eq!(parsed.tree[parsed.tree.root()].content, "Bio");
    assert_eq!(parsed.tree.to_outline(2), labelled.to_outline(2));
}

#[test]
fn test_parse_empty_text() {
    let parsed = parse_outline("", None);
    assert!(parsed.tree.is_root_only());
    assert_eq!(parsed.tree[parsed.tree.root()].content, ROOT_DEFAULT_NAME);
}
