//! Binary trees given in heap order, shared by the tree DPs.
//!
//! Input arrays use heap indexing: the children of slot `i` live at `2i+1`
//! and `2i+2`, and `None` marks an absent node. A node's [`NodeId`] is its
//! heap slot, so ids stay stable no matter how the tree is traversed.

use crate::graph::{Layout, NodeId, Shape};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub id: NodeId,
    pub value: i64,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// Arena of nodes; position 0 is the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTree {
    nodes: Vec<TreeNode>,
}

impl BinaryTree {
    /// Build from a heap-ordered array. Slots below a `None` are ignored.
    ///
    /// # Panics
    /// Panics if the root slot is missing.
    pub fn from_heap(values: &[Option<i64>]) -> Self {
        assert!(
            values.first().is_some_and(Option::is_some),
            "tree needs a root"
        );
        let mut nodes = Vec::new();
        insert(values, 0, &mut nodes);
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> usize {
        0
    }

    pub fn node(&self, pos: usize) -> &TreeNode {
        &self.nodes[pos]
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Present children of `pos`, left before right.
    pub fn children(&self, pos: usize) -> impl Iterator<Item = usize> + '_ {
        let n = &self.nodes[pos];
        n.left.into_iter().chain(n.right)
    }

    /// Positions in post-order (left, right, node).
    pub fn post_order(&self) -> Vec<usize> {
        fn walk(tree: &BinaryTree, pos: usize, out: &mut Vec<usize>) {
            for c in tree.children(pos) {
                walk(tree, c, out);
            }
            out.push(pos);
        }
        let mut out = Vec::with_capacity(self.nodes.len());
        walk(self, self.root(), &mut out);
        out
    }

    /// Depth of every position (root = 0).
    pub fn depths(&self) -> Vec<usize> {
        let mut depth = vec![0; self.nodes.len()];
        let mut stack = vec![self.root()];
        while let Some(pos) = stack.pop() {
            for c in self.children(pos) {
                depth[c] = depth[pos] + 1;
                stack.push(c);
            }
        }
        depth
    }

    /// Number of levels.
    pub fn levels(&self) -> usize {
        self.depths().into_iter().max().map_or(0, |d| d + 1)
    }

    /// Horizontal position of every node: each node sits at the middle of
    /// its span, the left child takes the left half and the right child the
    /// right half.
    pub fn x_positions(&self, width: f64) -> Vec<f64> {
        let mut xs = vec![0.0; self.nodes.len()];
        let mut stack = vec![(self.root(), 0.0, width)];
        while let Some((pos, lo, hi)) = stack.pop() {
            let x = (lo + hi) / 2.0;
            xs[pos] = x;
            let n = &self.nodes[pos];
            if let Some(l) = n.left {
                stack.push((l, lo, x));
            }
            if let Some(r) = n.right {
                stack.push((r, x, hi));
            }
        }
        xs
    }

    /// Tree layout hint for every position.
    pub fn layouts(&self, width: f64) -> Vec<Layout> {
        let xs = self.x_positions(width);
        self.depths()
            .into_iter()
            .zip(xs)
            .map(|(depth, x)| Layout::Tree { x, depth })
            .collect()
    }

    pub fn shape(&self) -> Shape {
        Shape::Tree {
            depth: self.levels(),
        }
    }
}

fn insert(values: &[Option<i64>], slot: usize, nodes: &mut Vec<TreeNode>) -> Option<usize> {
    let value = (*values.get(slot)?)?;
    let pos = nodes.len();
    nodes.push(TreeNode {
        id: slot,
        value,
        left: None,
        right: None,
    });
    let left = insert(values, 2 * slot + 1, nodes);
    let right = insert(values, 2 * slot + 2, nodes);
    nodes[pos].left = left;
    nodes[pos].right = right;
    Some(pos)
}
