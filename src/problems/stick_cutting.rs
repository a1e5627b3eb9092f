//! Minimum-cost stick cutting.
//!
//! Cutting a stick of length `L` costs `L`. With cut positions extended by
//! both ends, `C = [0, c_1, …, c_k, L]`, let `T(i,j)` be the cheapest way
//! to make every cut strictly between `C[i]` and `C[j]`:
//! - `T(i,i+1) = 0`,
//! - `T(i,j) = C[j] − C[i] + min_{i<k<j} (T(i,k) + T(k,j))`.
//!
//! Same split-point pyramid as matrix chain, one row and column wider.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape};
use crate::trace::extract_tree;
use crate::traits::DpProblem;

#[derive(Clone, Debug)]
pub struct StickCuttingProblem {
    pub length: i64,
    pub cuts: Vec<i64>,
}

impl Default for StickCuttingProblem {
    fn default() -> Self {
        Self::new(20, vec![3, 10, 12, 15])
    }
}

impl StickCuttingProblem {
    pub fn new(length: i64, mut cuts: Vec<i64>) -> Self {
        cuts.sort_unstable();
        cuts.dedup();
        assert!(
            cuts.iter().all(|&c| 0 < c && c < length),
            "cuts must lie strictly inside the stick"
        );
        Self { length, cuts }
    }

    /// Cut positions with both ends.
    pub fn positions(&self) -> Vec<i64> {
        let mut c = Vec::with_capacity(self.cuts.len() + 2);
        c.push(0);
        c.extend_from_slice(&self.cuts);
        c.push(self.length);
        c
    }

    /// `(cost, split)` tables; only `i < j` entries are meaningful.
    pub fn table(&self) -> (Vec<Vec<i64>>, Vec<Vec<Option<usize>>>) {
        let c = self.positions();
        let m = c.len();
        let mut cost = vec![vec![0i64; m]; m];
        let mut split = vec![vec![None; m]; m];
        for len in 2..m {
            for i in 0..(m - len) {
                let j = i + len;
                let mut best: Option<(i64, usize)> = None;
                for k in (i + 1)..j {
                    let v = cost[i][k] + cost[k][j];
                    if best.map_or(true, |(b, _)| v < b) {
                        best = Some((v, k));
                    }
                }
                if let Some((v, k)) = best {
                    cost[i][j] = v + c[j] - c[i];
                    split[i][j] = Some(k);
                }
            }
        }
        (cost, split)
    }
}

impl DpProblem for StickCuttingProblem {
    fn solve(&self) -> Graph {
        let c = self.positions();
        let m = c.len();
        let (cost, split) = self.table();
        let id = |i: usize, j: usize| i * m + j;

        let labels: Vec<String> = c.iter().map(|p| format!("@{p}")).collect();
        let mut g = GraphBuilder::new(Shape::labeled_grid(m, m, labels.clone(), labels))
            .with_note("Adjacent cut points (len=1) → outward to the whole stick. Each split reads both halves.");
        for len in 1..m {
            for i in 0..(m - len) {
                let j = i + len;
                g.node(id(i, j), cost[i][j], Layout::Grid { row: i, col: j }, format!("{}..{}", c[i], c[j]));
                for k in (i + 1)..j {
                    g.edge(id(i, k), id(i, j), EdgeKind::Left);
                    g.edge(id(k, j), id(i, j), EdgeKind::Right);
                }
            }
        }
        g.set_answer(cost[0][m - 1]);

        let trace = extract_tree((0, m - 1), 2 * m, |(i, j)| match split[i][j] {
            Some(k) => vec![((i, k), EdgeKind::Left), ((k, j), EdgeKind::Right)],
            None => Vec::new(),
        });
        g.apply_trace(&trace.map(|(i, j)| id(i, j)));
        g.build()
    }
}
