use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload of a tree node.
///
/// A `Branch` hangs below the split that chose `feature`, one sibling per
/// declared category value; a `Leaf` carries a predicted class label.
/// Rendering consumers handle exactly these two cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum NodeKind {
    Branch { feature: usize, value: u16 },
    Leaf { label: u16 },
}

/// A single node in the induced tree.
///
/// Nodes live in the tree's arena; `num` is the node's own handle, `parent`
/// and `children` are handles into the same arena. Top-level nodes have no
/// parent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Node {
    pub num: usize,
    pub depth: usize,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    pub kind: NodeKind,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

impl fmt::Display for Node {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            NodeKind::Branch { feature, value } => write!(f, "feature {} = {}", feature, value),
            NodeKind::Leaf { label } => write!(f, "label = {}", label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_display() {
        let branch = Node {
            num: 0,
            depth: 0,
            parent: None,
            children: vec![1],
            kind: NodeKind::Branch { feature: 2, value: 1 },
        };
        let leaf = Node {
            num: 1,
            depth: 1,
            parent: Some(0),
            children: vec![],
            kind: NodeKind::Leaf { label: 4 },
        };
        assert_eq!(format!("{}", branch), "feature 2 = 1");
        assert_eq!(format!("{}", leaf), "label = 4");
        assert!(leaf.is_leaf());
        assert!(!branch.is_leaf());
    }
}
