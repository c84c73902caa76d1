//! Tree induction and the induced tree structure.
use crate::data::Matrix;
use crate::errors::CanopyError;
use crate::node::{Node, NodeKind};
use crate::splitter::best_split;
use crate::utils::{label_counts, majority_label};
use hashbrown::{HashMap, HashSet};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::max;
use std::fmt::{self, Display};
use std::fs;

/// A decision tree induced with the ID3 algorithm.
///
/// All nodes live in a single arena; a node handle is its index into
/// `nodes`. The tree itself acts as the virtual root: `roots` holds the
/// handles of the top-level split's branches, or of a single leaf when the
/// whole dataset already belongs to one class. Once fitted the tree is
/// never mutated; refitting means inducing a new tree.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
    /// Children of the virtual root, ordered by category value.
    pub roots: Vec<usize>,
    pub depth: usize,
    pub n_leaves: usize,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    pub fn new() -> Self {
        Tree {
            nodes: Vec::new(),
            roots: Vec::new(),
            depth: 0,
            n_leaves: 0,
        }
    }

    /// Induce a tree from categorically encoded data.
    ///
    /// * `data` - feature matrix, one `u16` category code per entry, where
    ///   feature `i` takes codes `0..nclasses[i]`.
    /// * `y` - one class label per row of `data`.
    /// * `nclasses` - declared number of categories per feature. The
    ///   declared count may exceed what a given subset observes; every
    ///   split still creates one branch per declared category.
    ///
    /// Inputs are validated up front; no partially built tree is ever
    /// returned on failure.
    pub fn fit(data: &Matrix<u16>, y: &[u16], nclasses: &[u16]) -> Result<Tree, CanopyError> {
        if data.rows != y.len() {
            return Err(CanopyError::ShapeMismatch(data.rows, y.len()));
        }
        if nclasses.len() != data.cols {
            return Err(CanopyError::CardinalityMismatch(nclasses.len(), data.cols));
        }
        if data.rows == 0 {
            return Err(CanopyError::EmptyDataset);
        }
        for (feature, &declared) in nclasses.iter().enumerate() {
            for &code in data.get_col(feature) {
                if code >= declared {
                    return Err(CanopyError::CardinalityViolation(feature, code, declared));
                }
            }
        }
        let mut tree = Tree::new();
        let rows = data.index.clone();
        tree.grow(data, y, &rows, &HashSet::new(), nclasses, None);
        Ok(tree)
    }

    /// Recursively grow the subtree for one row subset, attaching every
    /// node it creates under `parent` (or into `roots` at the top level).
    ///
    /// Stopping rules, in order: a pure subset becomes a leaf with its
    /// single label; a subset with every feature already used becomes a
    /// leaf with its majority label. Otherwise the subset is split on the
    /// highest-gain unused feature, with one branch per declared category
    /// value. A branch whose category has no rows gets a leaf with the
    /// majority label of this (parent) subset. The used set grows by one
    /// feature per level, so recursion depth is capped by the feature
    /// count.
    fn grow(
        &mut self,
        data: &Matrix<u16>,
        y: &[u16],
        rows: &[usize],
        used: &HashSet<usize>,
        nclasses: &[u16],
        parent: Option<usize>,
    ) {
        let counts = label_counts(y, rows);
        if counts.len() == 1 {
            self.add_node(parent, NodeKind::Leaf { label: counts[0].0 });
            return;
        }
        if used.len() == data.cols {
            self.add_node(
                parent,
                NodeKind::Leaf {
                    label: majority_label(&counts),
                },
            );
            return;
        }
        let split = best_split(data, y, rows, used);
        let feature = split.split_feature;
        debug!(
            "splitting {} rows on feature {} (gain {:.4})",
            rows.len(),
            feature,
            split.split_gain
        );
        let column = data.get_col(feature);
        let mut next_used = used.clone();
        next_used.insert(feature);
        for value in 0..nclasses[feature] {
            let branch = self.add_node(parent, NodeKind::Branch { feature, value });
            let subset: Vec<usize> = rows.iter().copied().filter(|&row| column[row] == value).collect();
            if subset.is_empty() {
                // No examples reach this category; predict the majority
                // label of the parent subset.
                self.add_node(
                    Some(branch),
                    NodeKind::Leaf {
                        label: majority_label(&counts),
                    },
                );
            } else {
                self.grow(data, y, &subset, &next_used, nclasses, Some(branch));
            }
        }
    }

    /// Create a node and link it under `parent`, or into `roots` when there
    /// is no parent. Returns the new node's handle.
    fn add_node(&mut self, parent: Option<usize>, kind: NodeKind) -> usize {
        let num = self.nodes.len();
        let depth = match parent {
            Some(p) => self.nodes[p].depth + 1,
            None => 0,
        };
        self.depth = max(self.depth, depth);
        if let NodeKind::Leaf { .. } = kind {
            self.n_leaves += 1;
        }
        self.nodes.push(Node {
            num,
            depth,
            parent,
            children: Vec::new(),
            kind,
        });
        match parent {
            Some(p) => self.nodes[p].children.push(num),
            None => self.roots.push(num),
        }
        num
    }

    /// Depth-first preorder traversal over every node, children visited in
    /// category-value order. Each yielded node carries its own depth and
    /// parent handle, so consumers can rebuild the full linkage.
    pub fn walk(&self) -> TreeWalk<'_> {
        TreeWalk {
            tree: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Predict the label for a single row of category codes.
    ///
    /// Panics if the tree has not been fitted.
    pub fn predict_row(&self, row: &[u16]) -> Result<u16, CanopyError> {
        let mut group = &self.roots;
        loop {
            let head = &self.nodes[group[0]];
            match head.kind {
                NodeKind::Leaf { label } => return Ok(label),
                NodeKind::Branch { feature, .. } => {
                    let code = *row
                        .get(feature)
                        .ok_or(CanopyError::MissingFeature(row.len(), feature))?;
                    // Branch siblings are ordered by category value, so the
                    // code indexes the group directly.
                    let next = *group
                        .get(code as usize)
                        .ok_or(CanopyError::CardinalityViolation(feature, code, group.len() as u16))?;
                    group = &self.nodes[next].children;
                }
            }
        }
    }

    /// Predict a label for every row of the matrix.
    pub fn predict(&self, data: &Matrix<u16>) -> Result<Vec<u16>, CanopyError> {
        (0..data.rows).map(|row| self.predict_row(&data.get_row(row))).collect()
    }

    /// Number of split decisions per feature over the whole tree.
    pub fn calculate_importance(&self) -> HashMap<usize, usize> {
        let mut stats = HashMap::new();
        let groups = std::iter::once(&self.roots).chain(self.nodes.iter().map(|node| &node.children));
        for group in groups {
            // A group of branch siblings is one split decision.
            if let Some(&first) = group.first() {
                if let NodeKind::Branch { feature, .. } = self.nodes[first].kind {
                    *stats.entry(feature).or_insert(0) += 1;
                }
            }
        }
        stats
    }

    /// Serialize the tree to a JSON string.
    pub fn json_dump(&self) -> Result<String, CanopyError> {
        serde_json::to_string(self).map_err(|e| CanopyError::UnableToWrite(e.to_string()))
    }

    /// Deserialize a tree from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, CanopyError> {
        serde_json::from_str(json_str).map_err(|e| CanopyError::UnableToRead(e.to_string()))
    }

    /// Save the tree as JSON to the given path.
    pub fn save(&self, path: &str) -> Result<(), CanopyError> {
        let json = self.json_dump()?;
        fs::write(path, json).map_err(|e| CanopyError::UnableToWrite(e.to_string()))
    }

    /// Load a tree saved with [`Tree::save`].
    pub fn load(path: &str) -> Result<Self, CanopyError> {
        let json = fs::read_to_string(path).map_err(|e| CanopyError::UnableToRead(e.to_string()))?;
        Self::from_json(&json)
    }
}

/// Depth-first preorder iterator over a tree's nodes.
pub struct TreeWalk<'a> {
    tree: &'a Tree,
    stack: Vec<usize>,
}

impl<'a> Iterator for TreeWalk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let num = self.stack.pop()?;
        let node = &self.tree.nodes[num];
        for &child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

impl Display for Tree {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for node in self.walk() {
            writeln!(f, "{}{}", "  ".repeat(node.depth), node)?;
        }
        Ok(())
    }
}
