use crate::model::{BranchId, NodeId};
use crate::tree::Tree;

/// Structural values derived from a finished tree.
/// Recomputed for every render, never stored on the nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeMetrics {
    depths: Vec<usize>,
    branches: Vec<Option<BranchId>>,
    height: usize,
}

impl TreeMetrics {
    pub fn compute(tree: &Tree) -> Self {
        let mut depths = vec![0; tree.len()];
        let mut branches = vec![None; tree.len()];

        for (position, child) in tree.children(tree.root()).iter().enumerate() {
            branches[child.index()] = Some(position);
        }

        // Parents precede children in the arena, so one forward pass is enough
        for index in 0..tree.len() {
            let id = NodeId(index);
            let Some(parent) = tree.parent(id) else {
                continue;
            };
            depths[index] = depths[parent.index()] + 1;
            if branches[index].is_none() {
                branches[index] = branches[parent.index()];
            }
        }

        let height = depths.iter().copied().max().unwrap_or(0);

        Self {
            depths,
            branches,
            height,
        }
    }

    pub fn depth(&self, id: NodeId) -> usize {
        self.depths[id.index()]
    }

    /// Branch of the node's depth-1 ancestor; `None` for the root
    pub fn branch_id(&self, id: NodeId) -> Option<BranchId> {
        self.branches[id.index()]
    }

    pub fn height(&self) -> usize {
        self.height
    }
}
