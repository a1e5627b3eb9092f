//! Subset sum: the boolean knapsack.
//!
//! `T(0,0) = true`, `T(0,s) = false` for `s > 0`, and
//! `T(i,s) = T(i-1,s) ∨ T(i-1,s-a_i)`. Same DAG shape as 0/1 knapsack with
//! OR in place of max. The trace only exists when the target is reachable.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape, Value};
use crate::trace::extract_path;
use crate::traits::DpProblem;

#[derive(Clone, Debug)]
pub struct SubsetSumProblem {
    pub nums: Vec<usize>,
    pub target: usize,
}

impl Default for SubsetSumProblem {
    fn default() -> Self {
        Self::new(vec![3, 7, 1, 8, 4], 11)
    }
}

impl SubsetSumProblem {
    pub fn new(nums: Vec<usize>, target: usize) -> Self {
        assert!(nums.iter().all(|&a| a > 0), "numbers must be positive");
        Self { nums, target }
    }

    pub fn table(&self) -> Vec<Vec<bool>> {
        let (n, k) = (self.nums.len(), self.target);
        let mut dp = vec![vec![false; k + 1]; n + 1];
        dp[0][0] = true;
        for (i, &a) in self.nums.iter().enumerate() {
            for s in 0..=k {
                dp[i + 1][s] = dp[i][s] || (a <= s && dp[i][s - a]);
            }
        }
        dp
    }
}

impl DpProblem for SubsetSumProblem {
    fn solve(&self) -> Graph {
        let nums = &self.nums;
        let (n, k) = (nums.len(), self.target);
        let dp = self.table();
        let id = |i: usize, s: usize| i * (k + 1) + s;

        let row_labels = std::iter::once("ε".to_string())
            .chain(nums.iter().map(|a| format!("num={a}")))
            .collect();
        let col_labels = (0..=k).map(|s| format!("s={s}")).collect();
        let mut g = GraphBuilder::new(Shape::labeled_grid(n + 1, k + 1, row_labels, col_labels))
            .with_note("Boolean knapsack: T/F via OR instead of max. Same DAG shape as 0/1 knapsack.");
        for i in 0..=n {
            for s in 0..=k {
                g.node(id(i, s), dp[i][s], Layout::Grid { row: i, col: s }, format!("({i},{s})"));
                if i == 0 {
                    continue;
                }
                g.edge(id(i - 1, s), id(i, s), EdgeKind::Skip);
                if nums[i - 1] <= s {
                    g.edge(id(i - 1, s - nums[i - 1]), id(i, s), EdgeKind::Take);
                }
            }
        }
        g.set_answer(Value::Bool(dp[n][k]));

        if dp[n][k] {
            let trace = extract_path((n, k), n, |(i, s)| {
                let a = *nums.get(i.checked_sub(1)?)?;
                if a <= s && dp[i - 1][s - a] {
                    Some(((i - 1, s - a), EdgeKind::Take))
                } else {
                    Some(((i - 1, s), EdgeKind::Skip))
                }
            });
            g.apply_trace(&trace.map(|(i, s)| id(i, s)));
        }
        g.build()
    }
}

/// Numbers picked by a trace: the row item of every traced `Take` edge.
pub fn taken(graph: &Graph, nums: &[usize]) -> Vec<usize> {
    let cols = match graph.shape {
        Shape::Grid { cols, .. } => cols,
        _ => return Vec::new(),
    };
    let mut picked: Vec<usize> = graph
        .path_edges()
        .filter(|e| e.kind == EdgeKind::Take)
        .map(|e| nums[e.to / cols - 1])
        .collect();
    picked.sort_unstable_by(|a, b| b.cmp(a));
    picked
}
