//! Binary tree maximum path sum.
//!
//! Post-order: `gain(v) = val(v) + max(0, gain(left), gain(right))` is the
//! best downward path starting at `v`. The best path bending at `v` sums
//! `val(v)` with both clipped child gains; the answer is the first strict
//! maximum of that sum in post-order.
//!
//! The trace bends at the winning node, enters every child with positive
//! gain, and from there follows the better child (left on ties) while the
//! gain stays positive.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph};
use crate::trace::{argmax_first, extract_tree};
use crate::traits::DpProblem;
use crate::tree::BinaryTree;

#[derive(Clone, Debug)]
pub struct MaxPathSumProblem {
    pub tree: BinaryTree,
}

impl Default for MaxPathSumProblem {
    fn default() -> Self {
        Self::new(&[Some(-10), Some(9), Some(20), None, None, Some(15), Some(7)])
    }
}

impl MaxPathSumProblem {
    pub fn new(heap: &[Option<i64>]) -> Self {
        Self {
            tree: BinaryTree::from_heap(heap),
        }
    }

    /// Unclipped downward gain per arena position.
    pub fn gains(&self) -> Vec<i64> {
        let t = &self.tree;
        let mut gain = vec![0i64; t.len()];
        for pos in t.post_order() {
            let best_child = t.children(pos).map(|c| gain[c].max(0)).max().unwrap_or(0);
            gain[pos] = t.node(pos).value + best_child;
        }
        gain
    }
}

impl DpProblem for MaxPathSumProblem {
    fn solve(&self) -> Graph {
        let t = &self.tree;
        let gain = self.gains();
        let layouts = t.layouts(6.0);

        let mut g = GraphBuilder::new(t.shape()).with_note(
            "Post-order: gain(v) = val(v) + max(0, best child gain). Path through v = val + max(0,left) + max(0,right).",
        );
        for (pos, node) in t.nodes().iter().enumerate() {
            g.node(node.id, gain[pos], layouts[pos], format!("val={}", node.value))
                .detail = Some(format!("gain={}", gain[pos]));
        }
        for (pos, node) in t.nodes().iter().enumerate() {
            for c in t.children(pos) {
                g.edge(t.node(c).id, node.id, EdgeKind::Child);
            }
        }

        let order = t.post_order();
        let through = order
            .iter()
            .map(|&pos| t.node(pos).value + t.children(pos).map(|c| gain[c].max(0)).sum::<i64>());
        let Some((k, best)) = argmax_first(through) else {
            return g.build();
        };
        g.set_answer(best);

        let bend = order[k];
        let trace = extract_tree(bend, t.len() + 1, |pos| {
            let positive = t.children(pos).filter(|&c| gain[c] > 0);
            if pos == bend {
                positive.map(|c| (c, EdgeKind::Child)).collect()
            } else {
                // first child with the largest gain
                let pick = positive.fold(None, |acc: Option<usize>, c| match acc {
                    Some(b) if gain[b] >= gain[c] => Some(b),
                    _ => Some(c),
                });
                pick.map(|c| (c, EdgeKind::Child)).into_iter().collect()
            }
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
    fn embedded_tree() {
        let g = MaxPathSumProblem::default().solve();
        // 15 → 20 → 7
        assert_eq!(g.answer, Value::Int(42));
        assert_eq!(g.path_ids(), vec![2, 5, 6]);
        assert_eq!(g.value(0), Some(Value::Int(25)));
        assert_eq!(g.validate(), Ok(()));
    }

    #[test]
    fn all_negative_takes_single_best_node() {
        let g = MaxPathSumProblem::new(&[Some(-3), Some(-1), Some(-2)]).solve();
        assert_eq!(g.answer, Value::Int(-1));
        assert_eq!(g.path_ids(), vec![1]);
        assert!(g.path_edges().next().is_none());
    }

    #[test]
    fn traced_values_sum_to_answer() {
        let p = MaxPathSumProblem::new(&[Some(5), Some(4), Some(8), Some(11), None, Some(13), Some(4)]);
        let g = p.solve();
        let sum: i64 = p
            .tree
            .nodes()
            .iter()
            .filter(|n| g.node(n.id).is_some_and(|nd| nd.on_path))
            .map(|n| n.value)
            .sum();
        assert_eq!(g.answer, Value::Int(sum));
        assert_eq!(sum, 11 + 4 + 5 + 8 + 13);
    }
}
