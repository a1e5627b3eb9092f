//! Longest common substring (contiguous).
//!
//! `T(i,j)` is the length of the longest common suffix of `x[0..i]` and
//! `y[0..j]`: `T(i-1,j-1) + 1` on a match, `0` otherwise. Only matches create
//! edges, so the DAG is a set of disjoint diagonal runs. The answer is the
//! first strict maximum in row-major order and its trace follows the run
//! back to the cell where it started.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape};
use crate::trace::{argmax_first, extract_path};
use crate::traits::DpProblem;
use crate::utils::epsilon_labels;

#[derive(Clone, Debug)]
pub struct LcSubstringProblem<'a> {
    pub x: &'a [u8],
    pub y: &'a [u8],
}

impl Default for LcSubstringProblem<'static> {
    fn default() -> Self {
        Self::new(b"bans", b"banana")
    }
}

impl<'a> LcSubstringProblem<'a> {
    pub fn new(x: &'a [u8], y: &'a [u8]) -> Self {
        Self { x, y }
    }

    pub fn table(&self) -> Vec<Vec<i64>> {
        let (m, n) = (self.x.len(), self.y.len());
        let mut dp = vec![vec![0i64; n + 1]; m + 1];
        for i in 1..=m {
            for j in 1..=n {
                if self.x[i - 1] == self.y[j - 1] {
                    dp[i][j] = dp[i - 1][j - 1] + 1;
                }
            }
        }
        dp
    }
}

impl DpProblem for LcSubstringProblem<'_> {
    fn solve(&self) -> Graph {
        let (x, y) = (self.x, self.y);
        let (m, n) = (x.len(), y.len());
        let dp = self.table();
        let cols = n + 1;
        let id = |i: usize, j: usize| i * cols + j;

        let shape = Shape::labeled_grid(m + 1, cols, epsilon_labels(x), epsilon_labels(y));
        let mut g = GraphBuilder::new(shape)
            .with_note("Row by row. Only matches extend a diagonal run; mismatches reset to 0.");
        for i in 0..=m {
            for j in 0..=n {
                g.node(id(i, j), dp[i][j], Layout::Grid { row: i, col: j }, format!("({i},{j})"));
                if i > 0 && j > 0 && x[i - 1] == y[j - 1] {
                    g.edge(id(i - 1, j - 1), id(i, j), EdgeKind::Diagonal);
                }
            }
        }

        if let Some((pos, best)) = argmax_first(dp.iter().flatten().copied()) {
            g.set_answer(best);
            let start = (pos / cols, pos % cols);
            let trace = extract_path(start, m.min(n), |(i, j)| {
                (dp[i][j] > 0).then(|| ((i - 1, j - 1), EdgeKind::Diagonal))
            });
            g.apply_trace(&trace.map(|(i, j)| id(i, j)));
        }
        g.build()
    }
}
