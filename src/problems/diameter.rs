//! Diameter of a binary tree, in edges.
//!
//! Post-order: `T(v) = 1 + max T(c)` over children (`0` for a leaf) is the
//! depth below `v`. The longest path bending at `v` has length
//! `top1(v) + top2(v)`, the two largest `T(c) + 1`; the diameter is the first
//! strict maximum of that candidate in post-order.
//!
//! The trace bends at that node, descends into its two deepest children and
//! then follows the first deepest child down to a leaf on each side.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph};
use crate::trace::{argmax_first, extract_tree};
use crate::traits::DpProblem;
use crate::tree::BinaryTree;

#[derive(Clone, Debug)]
pub struct DiameterProblem {
    pub tree: BinaryTree,
}

impl Default for DiameterProblem {
    /// ```text
    ///         1
    ///        / \
    ///       2   3
    ///      / \
    ///     4   5
    ///    /
    ///   6
    /// ```
    fn default() -> Self {
        Self::new(&[Some(1), Some(2), Some(3), Some(4), Some(5), None, None, Some(6)])
    }
}

impl DiameterProblem {
    pub fn new(heap: &[Option<i64>]) -> Self {
        Self {
            tree: BinaryTree::from_heap(heap),
        }
    }

    /// Depth below every arena position.
    pub fn depths_below(&self) -> Vec<i64> {
        let t = &self.tree;
        let mut below = vec![0i64; t.len()];
        for pos in t.post_order() {
            below[pos] = t.children(pos).map(|c| below[c] + 1).max().unwrap_or(0);
        }
        below
    }

    /// Children of `pos` ordered deepest first, ties keeping left before right.
    fn deepest_children(&self, pos: usize, below: &[i64]) -> Vec<usize> {
        let mut cs: Vec<usize> = self.tree.children(pos).collect();
        cs.sort_by_key(|&c| std::cmp::Reverse(below[c]));
        cs
    }
}

impl DpProblem for DiameterProblem {
    fn solve(&self) -> Graph {
        let t = &self.tree;
        let below = self.depths_below();
        let layouts = t.layouts(6.0);

        let mut g = GraphBuilder::new(t.shape()).with_note(
            "Post-order: T(v) = max depth below v. Diameter candidate = left_depth + right_depth at each node.",
        );
        for (pos, node) in t.nodes().iter().enumerate() {
            g.node(node.id, below[pos], layouts[pos], format!("node {}", node.value))
                .detail = Some(format!("depth={}", below[pos]));
        }
        for (pos, node) in t.nodes().iter().enumerate() {
            for c in t.children(pos) {
                g.edge(t.node(c).id, node.id, EdgeKind::Child);
            }
        }

        let order = t.post_order();
        let candidates = order.iter().map(|&pos| {
            self.deepest_children(pos, &below)
                .iter()
                .take(2)
                .map(|&c| below[c] + 1)
                .sum::<i64>()
        });
        let Some((k, diameter)) = argmax_first(candidates) else {
            return g.build();
        };
        g.set_answer(diameter);

        let bend = order[k];
        let trace = extract_tree(bend, t.len() + 1, |pos| {
            let take = if pos == bend { 2 } else { 1 };
            self.deepest_children(pos, &below)
                .into_iter()
                .take(take)
                .map(|c| (c, EdgeKind::Child))
                .collect()
        });
        g.apply_trace(&trace.map(|pos| t.node(pos).id));
        g.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Value;

    #[test]
    fn embedded_tree_bends_at_root() {
        let g = DiameterProblem::default().solve();
        // 6 - 4 - 2 - 1 - 3
        assert_eq!(g.answer, Value::Int(4));
        assert_eq!(g.path_ids(), vec![0, 1, 2, 3, 7]);
        assert_eq!(g.path_edges().count(), 4);
        assert_eq!(g.validate(), Ok(()));
    }

    #[test]
    fn bend_below_root() {
        //     1
        //    /
        //   2
        //  / \
        // 3   4
        let g = DiameterProblem::new(&[Some(1), Some(2), None, Some(3), Some(4)]).solve();
        assert_eq!(g.answer, Value::Int(2));
        // first strict max in post-order is node 2, not the root
        assert_eq!(g.path_ids(), vec![1, 3, 4]);
    }

    #[test]
    fn single_node() {
        let g = DiameterProblem::new(&[Some(7)]).solve();
        assert_eq!(g.answer, Value::Int(0));
        assert_eq!(g.path_ids(), vec![0]);
    }
}
