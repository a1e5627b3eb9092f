//! Optimal binary search tree.
//!
//! Keys are sorted; `freq[k]` is the access count of key `k`. With
//! `W(i,j) = Σ freq[i..=j]`:
//! - `T(i,i) = freq[i]`,
//! - `T(i,j) = W(i,j) + min_{i ≤ r ≤ j} (T(i,r-1) + T(r+1,j))`, empty
//!   ranges costing 0.
//!
//! Each candidate root `r` reads its left subtree `(i,r-1)` when `r > i` and
//! its right subtree `(r+1,j)` when `r < j`. The trace rebuilds the tree of
//! first strictly minimal roots.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape};
use crate::trace::extract_tree;
use crate::traits::DpProblem;

#[derive(Clone, Debug)]
pub struct OptimalBstProblem {
    pub keys: Vec<i64>,
    pub freq: Vec<i64>,
}

impl Default for OptimalBstProblem {
    fn default() -> Self {
        Self::new(vec![10, 20, 30], vec![5, 4, 1])
    }
}

impl OptimalBstProblem {
    pub fn new(keys: Vec<i64>, freq: Vec<i64>) -> Self {
        assert!(!keys.is_empty(), "need at least one key");
        assert_eq!(keys.len(), freq.len(), "one frequency per key");
        assert!(keys.windows(2).all(|w| w[0] < w[1]), "keys must be strictly increasing");
        assert!(freq.iter().all(|&f| f >= 0), "frequencies must be non-negative");
        Self { keys, freq }
    }

    /// `(cost, root)` tables over the upper triangle.
    pub fn table(&self) -> (Vec<Vec<i64>>, Vec<Vec<usize>>) {
        let n = self.keys.len();
        let mut prefix = vec![0i64; n + 1];
        for (k, &f) in self.freq.iter().enumerate() {
            prefix[k + 1] = prefix[k] + f;
        }
        let mut cost = vec![vec![0i64; n]; n];
        let mut root = vec![vec![0usize; n]; n];
        for i in 0..n {
            cost[i][i] = self.freq[i];
            root[i][i] = i;
        }
        for len in 2..=n {
            for i in 0..=(n - len) {
                let j = i + len - 1;
                let weight = prefix[j + 1] - prefix[i];
                let mut best: Option<(i64, usize)> = None;
                for r in i..=j {
                    let left = if r > i { cost[i][r - 1] } else { 0 };
                    let right = if r < j { cost[r + 1][j] } else { 0 };
                    let c = weight + left + right;
                    if best.map_or(true, |(b, _)| c < b) {
                        best = Some((c, r));
                    }
                }
                if let Some((c, r)) = best {
                    cost[i][j] = c;
                    root[i][j] = r;
                }
            }
        }
        (cost, root)
    }
}

impl DpProblem for OptimalBstProblem {
    fn solve(&self) -> Graph {
        let n = self.keys.len();
        let (cost, root) = self.table();
        let id = |i: usize, j: usize| i * n + j;

        let labels: Vec<String> = self.keys.iter().map(|k| format!("k:{k}")).collect();
        let mut g = GraphBuilder::new(Shape::labeled_grid(n, n, labels.clone(), labels))
            .with_note("Pyramid build-up. Each root reads the optimal left and right subtrees.");
        for len in 1..=n {
            for i in 0..=(n - len) {
                let j = i + len - 1;
                g.node(id(i, j), cost[i][j], Layout::Grid { row: i, col: j }, format!("[{i},{j}]"))
                    .detail = Some(format!("root={}", self.keys[root[i][j]]));
                for r in i..=j {
                    if r > i {
                        g.edge(id(i, r - 1), id(i, j), EdgeKind::Left);
                    }
                    if r < j {
                        g.edge(id(r + 1, j), id(i, j), EdgeKind::Right);
                    }
                }
            }
        }
        g.set_answer(cost[0][n - 1]);

        let trace = extract_tree((0, n - 1), n + 1, |(i, j)| {
            let r = root[i][j];
            let mut deps = Vec::with_capacity(2);
            if r > i {
                deps.push(((i, r - 1), EdgeKind::Left));
            }
            if r < j {
                deps.push(((r + 1, j), EdgeKind::Right));
            }
            deps
        });
        g.apply_trace(&trace.map(|(i, j)| id(i, j)));
        g.build()
    }
}
