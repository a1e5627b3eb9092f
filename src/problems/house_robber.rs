//! House robber on a binary tree.
//!
//! Post-order, two values per node:
//! - `rob(v)  = val(v) + Σ skip(c)`,
//! - `skip(v) = Σ max(rob(c), skip(c))`.
//!
//! A node shows `max(rob, skip)`. Every node takes part in the optimal plan
//! (robbed or skipped), so the trace marks the whole tree and records the
//! decision per node: rob when `rob ≥ skip`, and a robbed parent forces its
//! children to skip.

use crate::builder::GraphBuilder;
use crate::graph::{Choice, EdgeKind, Graph};
use crate::trace::extract_tree;
use crate::traits::DpProblem;
use crate::tree::BinaryTree;

#[derive(Clone, Debug)]
pub struct HouseRobberProblem {
    pub tree: BinaryTree,
}

impl Default for HouseRobberProblem {
    fn default() -> Self {
        Self::new(&[Some(3), Some(2), Some(3), Some(3), None, None, Some(1)])
    }
}

impl HouseRobberProblem {
    pub fn new(heap: &[Option<i64>]) -> Self {
        Self {
            tree: BinaryTree::from_heap(heap),
        }
    }

    /// `(rob, skip)` per arena position.
    pub fn table(&self) -> (Vec<i64>, Vec<i64>) {
        let t = &self.tree;
        let mut rob = vec![0i64; t.len()];
        let mut skip = vec![0i64; t.len()];
        for pos in t.post_order() {
            rob[pos] = t.node(pos).value + t.children(pos).map(|c| skip[c]).sum::<i64>();
            skip[pos] = t.children(pos).map(|c| rob[c].max(skip[c])).sum();
        }
        (rob, skip)
    }
}

impl DpProblem for HouseRobberProblem {
    fn solve(&self) -> Graph {
        let t = &self.tree;
        let (rob, skip) = self.table();
        let layouts = t.layouts(6.0);

        let mut g = GraphBuilder::new(t.shape()).with_note(
            "Post-order: solve children first, then merge. Rob = val + skip(children). Skip = max(rob,skip) of each child.",
        );
        for (pos, node) in t.nodes().iter().enumerate() {
            g.node(node.id, rob[pos].max(skip[pos]), layouts[pos], format!("v={}", node.value))
                .detail = Some(format!("rob={} skip={}", rob[pos], skip[pos]));
        }
        for (pos, node) in t.nodes().iter().enumerate() {
            for c in t.children(pos) {
                g.edge(t.node(c).id, node.id, EdgeKind::Child);
            }
        }
        let root = t.root();
        g.set_answer(rob[root].max(skip[root]));

        // state = (position, robbed)
        let trace = extract_tree((root, rob[root] >= skip[root]), t.len() + 1, |(pos, robbed)| {
            t.children(pos)
                .map(|c| ((c, !robbed && rob[c] >= skip[c]), EdgeKind::Child))
                .collect()
        });
        for &(pos, robbed) in &trace.states {
            g.set_choice(t.node(pos).id, if robbed { Choice::Rob } else { Choice::Skip });
        }
        g.apply_trace(&trace.map(|(pos, _)| t.node(pos).id));
        g.build()
    }
}

/// Sum of the node values a graph marks as robbed.
pub fn robbed_total(graph: &Graph, tree: &BinaryTree) -> i64 {
    tree.nodes()
        .iter()
        .filter(|n| graph.node(n.id).and_then(|nd| nd.choice) == Some(Choice::Rob))
        .map(|n| n.value)
        .sum()
}
