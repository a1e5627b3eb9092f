//! Unbounded knapsack: every item may be taken any number of times.
//!
//! One dimension only: `T(0) = 0`, `T(w) = max(0, max{ T(w-w_i) + v_i })`.
//! Repetition shows up as a source cell that feeds several capacities
//! through the same item edge.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape};
use crate::problems::knapsack::Item;
use crate::trace::extract_path;
use crate::traits::DpProblem;

#[derive(Clone, Debug)]
pub struct UnboundedKnapsackProblem {
    pub items: Vec<Item>,
    pub capacity: usize,
}

impl Default for UnboundedKnapsackProblem {
    fn default() -> Self {
        Self::new(vec![Item::new(2, 3), Item::new(3, 4), Item::new(5, 7)], 8)
    }
}

impl UnboundedKnapsackProblem {
    pub fn new(items: Vec<Item>, capacity: usize) -> Self {
        assert!(items.iter().all(|it| it.weight > 0), "weights must be positive");
        Self { items, capacity }
    }

    pub fn table(&self) -> Vec<i64> {
        let mut dp = vec![0i64; self.capacity + 1];
        for w in 1..=self.capacity {
            for it in &self.items {
                if it.weight <= w && dp[w - it.weight] + it.value > dp[w] {
                    dp[w] = dp[w - it.weight] + it.value;
                }
            }
        }
        dp
    }
}

impl DpProblem for UnboundedKnapsackProblem {
    fn solve(&self) -> Graph {
        let items = &self.items;
        let cap = self.capacity;
        let dp = self.table();

        let mut g = GraphBuilder::new(Shape::Chain).with_note(
            "1D: T(w) depends on T(w−w_i) for all items. Repetition → edges can reuse same source.",
        );
        for (w, &v) in dp.iter().enumerate() {
            g.node(w, v, Layout::Chain { index: w }, format!("cap={w}"));
        }
        for w in 1..=cap {
            for (k, it) in items.iter().enumerate() {
                if it.weight <= w {
                    g.edge(w - it.weight, w, EdgeKind::Item(k));
                }
            }
        }
        g.set_answer(dp[cap]);

        let trace = extract_path(cap, cap, |w| {
            items
                .iter()
                .position(|it| it.weight <= w && dp[w] == dp[w - it.weight] + it.value)
                .map(|k| (w - items[k].weight, EdgeKind::Item(k)))
        });
        g.apply_trace(&trace);
        g.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Value;

    #[test]
    fn four_copies_of_the_light_item() {
        let g = UnboundedKnapsackProblem::default().solve();
        assert_eq!(g.answer, Value::Int(12));
        assert_eq!(g.path_ids(), vec![0, 2, 4, 6, 8]);
        assert!(g.path_edges().all(|e| e.kind == EdgeKind::Item(0)));
        assert_eq!(g.validate(), Ok(()));
    }

    #[test]
    fn trace_stops_below_lightest_item() {
        let g = UnboundedKnapsackProblem::new(vec![Item::new(2, 5)], 5).solve();
        assert_eq!(g.answer, Value::Int(10));
        // 5 → 3 → 1, and nothing fits into 1
        assert_eq!(g.path_ids(), vec![1, 3, 5]);
    }
}
