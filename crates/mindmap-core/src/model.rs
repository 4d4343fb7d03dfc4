use serde::{Deserialize, Serialize};

/// Content of a root that was synthesized rather than labelled.
/// Never rendered.
pub const ROOT_DEFAULT_NAME: &str = "__root__";

/// Outline line standing for a node with empty content
pub const EMPTY_CONTENT_MARKER: &str = "\"\"";

/// Index of a node in a [`Tree`](crate::tree::Tree) arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// Identifier of the first-level branch a node descends from.
/// Position of the depth-1 ancestor among the root's children.
pub type BranchId = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub content: String,
    /// Key under which the node was registered in its parent
    pub key: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(key: String, content: String, parent: Option<NodeId>) -> Self {
        Self {
            content,
            key,
            parent,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True when the content is the synthesized-root sentinel or blank
    pub fn is_unlabelled(&self) -> bool {
        self.content.trim().is_empty() || self.content == ROOT_DEFAULT_NAME
    }
}
