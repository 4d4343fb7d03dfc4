//! Tree -> ordered node/edge declarations for an external layout engine.

use serde::Serialize;

use crate::analysis::TreeMetrics;
use crate::model::NodeId;
use crate::theme::{EdgeStyle, GraphStyle, NodeStyle, Theme};
use crate::tree::Tree;

pub mod dot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Node {
        id: NodeId,
        style: NodeStyle,
    },
    Edge {
        from: NodeId,
        to: NodeId,
        style: EdgeStyle,
    },
}

/// Complete declarative description of one mindmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDescription {
    pub graph: GraphStyle,
    /// Center of the radial layout
    pub root: NodeId,
    pub declarations: Vec<Declaration>,
}

impl GraphDescription {
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &NodeStyle)> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Node { id, style } => Some((id, style)),
            Declaration::Edge { .. } => None,
        })
    }

    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId, &EdgeStyle)> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Edge { from, to, style } => Some((from, to, style)),
            Declaration::Node { .. } => None,
        })
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Walks the tree once in pre-order. Every node yields its node
/// declaration, directly followed by the edge from its parent.
pub fn emit(tree: &Tree, theme: &Theme) -> GraphDescription {
    let metrics = TreeMetrics::compute(tree);
    let mut declarations = Vec::with_capacity(tree.len() * 2);

    for id in tree.iter() {
        declarations.push(Declaration::Node {
            id,
            style: theme.node_style(tree, id, &metrics),
        });
        if let Some(parent) = tree.parent(id) {
            declarations.push(Declaration::Edge {
                from: parent,
                to: id,
                style: theme.edge_style(id, &metrics),
            });
        }
    }

    log::debug!(
        "Emitted {} declarations for {} nodes (height {})",
        declarations.len(),
        tree.len(),
        metrics.height()
    );

    GraphDescription {
        graph: theme.graph_style.clone(),
        root: tree.root(),
        declarations,
    }
}
