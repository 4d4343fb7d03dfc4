use std::collections::HashMap;
use std::ops::Index;

use crate::model::{Node, NodeId, EMPTY_CONTENT_MARKER, ROOT_DEFAULT_NAME};


/// Ordered prefix tree over delimited paths.
///
/// Nodes live in an arena and refer to each other by [`NodeId`]; the parent
/// link is an index and never owns anything. Children are always allocated
/// after their parent, so iterating the arena front to back visits every
/// parent before its children.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    /// parent => key => first child registered under that key
    keyed: HashMap<NodeId, HashMap<String, NodeId>>,
}

impl Tree {
    /// A root-only tree whose root carries [`ROOT_DEFAULT_NAME`]
    pub fn new() -> Self {
        Self::with_root_content(ROOT_DEFAULT_NAME.to_string())
    }

    pub fn with_root_label(label: Option<&str>) -> Self {
        match label {
            Some(label) => Self::with_root_content(label.to_string()),
            None => Self::new(),
        }
    }

    fn with_root_content(content: String) -> Self {
        Self {
            nodes: vec![Node::new(String::new(), content, None)],
            keyed: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing but the root exists
    pub fn is_root_only(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or_default()
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.children(id).is_empty()
    }

    pub fn set_root_label(&mut self, label: &str) {
        self.nodes[NodeId::ROOT.index()].content = label.to_string();
    }

    /// First child of `parent` registered under `key`
    pub fn child_by_key(&self, parent: NodeId, key: &str) -> Option<NodeId> {
        self.keyed.get(&parent)?.get(key).copied()
    }

    /// Returns the child of `parent` keyed `key`, creating it when missing.
    pub fn get_or_create_child(&mut self, parent: NodeId, key: &str) -> NodeId {
        if let Some(id) = self.child_by_key(parent, key) {
            return id;
        }

        self.push(parent, key.to_string(), key.to_string())
    }

    /// Always appends a new child, even if a sibling has the same content.
    pub fn add_child(&mut self, parent: NodeId, content: &str) -> NodeId {
        self.push(parent, content.to_string(), content.to_string())
    }

    fn push(&mut self, parent: NodeId, key: String, content: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.keyed
            .entry(parent)
            .or_default()
            .entry(key.clone())
            .or_insert(id);
        self.nodes.push(Node::new(key, content, Some(parent)));
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Splits `path` on `separator` and walks down from the root, creating
    /// any missing node on the way. Returns the node for the last part.
    pub fn insert(&mut self, path: &str, separator: &str) -> NodeId {
        if separator.is_empty() {
            return self.insert_parts([path]);
        }
        self.insert_parts(path.split(separator))
    }

    /// Same as [`Tree::insert`] for a path that is already split.
    /// An empty sequence resolves to the root.
    pub fn insert_parts<'p, I>(&mut self, parts: I) -> NodeId
    where
        I: IntoIterator<Item = &'p str>,
    {
        let mut current = self.root();
        for part in parts {
            current = self.get_or_create_child(current, part);
        }
        current
    }

    /// Depth-first pre-order, children in insertion order
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: vec![self.root()],
        }
    }

    /// Serializes the tree as indented outline text, `indent` spaces per
    /// level. The root is the single top-level line (the sentinel when it
    /// has no label), so parsing the text without a root label gives back
    /// the same shape. Blank content is written as [`EMPTY_CONTENT_MARKER`].
    pub fn to_outline(&self, indent: usize) -> String {
        let indent = indent.max(1);
        let mut out = String::new();
        let mut stack: Vec<(NodeId, usize)> = vec![(self.root(), 0)];

        while let Some((id, level)) = stack.pop() {
            let node = &self[id];
            let content = match node.content.trim() {
                "" if id == self.root() => ROOT_DEFAULT_NAME,
                "" => EMPTY_CONTENT_MARKER,
                content => content,
            };
            out.push_str(&" ".repeat(level * indent));
            out.push_str(content);
            out.push('\n');
            stack.extend(node.children.iter().rev().map(|child| (*child, level + 1)));
        }
        out
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

pub struct PreOrder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl Iterator for PreOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
