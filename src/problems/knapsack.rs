//! 0/1 knapsack.
//!
//! `T(i,w)` is the best value using the first `i` items under capacity `w`:
//! `T(0,w) = 0`, `T(i,w) = max(T(i-1,w), v_i + T(i-1,w-w_i))` when the item
//! fits. Every cell below row 0 has a `Skip` edge straight down, and a
//! `Take` edge jumping left by `w_i` when the item fits.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape};
use crate::trace::extract_path;
use crate::traits::DpProblem;

/// `(weight, value)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub weight: usize,
    pub value: i64,
}

impl Item {
    pub const fn new(weight: usize, value: i64) -> Self {
        Self { weight, value }
    }
}

#[derive(Clone, Debug)]
pub struct KnapsackProblem {
    pub items: Vec<Item>,
    pub capacity: usize,
}

impl Default for KnapsackProblem {
    fn default() -> Self {
        Self::new(vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5)], 6)
    }
}

impl KnapsackProblem {
    pub fn new(items: Vec<Item>, capacity: usize) -> Self {
        assert!(items.iter().all(|it| it.weight > 0), "weights must be positive");
        Self { items, capacity }
    }

    pub fn table(&self) -> Vec<Vec<i64>> {
        let (n, cap) = (self.items.len(), self.capacity);
        let mut dp = vec![vec![0i64; cap + 1]; n + 1];
        for (i, it) in self.items.iter().enumerate() {
            for w in 0..=cap {
                let skip = dp[i][w];
                dp[i + 1][w] = if it.weight <= w {
                    skip.max(it.value + dp[i][w - it.weight])
                } else {
                    skip
                };
            }
        }
        dp
    }

    fn row_labels(&self) -> Vec<String> {
        std::iter::once("ε".to_string())
            .chain(
                self.items
                    .iter()
                    .enumerate()
                    .map(|(i, it)| format!("item{}(w={},v={})", i + 1, it.weight, it.value)),
            )
            .collect()
    }
}

impl DpProblem for KnapsackProblem {
    fn solve(&self) -> Graph {
        let items = &self.items;
        let (n, cap) = (items.len(), self.capacity);
        let dp = self.table();
        let id = |i: usize, w: usize| i * (cap + 1) + w;

        let col_labels = (0..=cap).map(|w| format!("w={w}")).collect();
        let shape = Shape::labeled_grid(n + 1, cap + 1, self.row_labels(), col_labels);
        let mut g = GraphBuilder::new(shape)
            .with_note("Row by row. Skip = straight down, Take = diagonal jump left by w_i");
        for i in 0..=n {
            for w in 0..=cap {
                g.node(id(i, w), dp[i][w], Layout::Grid { row: i, col: w }, format!("({i},{w})"));
                if i == 0 {
                    continue;
                }
                g.edge(id(i - 1, w), id(i, w), EdgeKind::Skip);
                let wi = items[i - 1].weight;
                if wi <= w {
                    g.edge(id(i - 1, w - wi), id(i, w), EdgeKind::Take);
                }
            }
        }
        g.set_answer(dp[n][cap]);

        let trace = extract_path((n, cap), n, |(i, w)| {
            let it = items.get(i.checked_sub(1)?)?;
            if it.weight <= w && dp[i][w] == it.value + dp[i - 1][w - it.weight] {
                Some(((i - 1, w - it.weight), EdgeKind::Take))
            } else {
                Some(((i - 1, w), EdgeKind::Skip))
            }
        });
        g.apply_trace(&trace.map(|(i, w)| id(i, w)));
        g.build()
    }
}
