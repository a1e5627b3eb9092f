//! Longest Common Subsequence.
//!
//! We treat row `i` as the prefix `x[0..i]` and column `j` as `y[0..j]`:
//! - `T(i,0) = T(0,j) = 0` (base cases, no dependencies),
//! - `T(i,j) = T(i-1,j-1) + 1` when `x[i-1] == y[j-1]`,
//! - `T(i,j) = max(T(i-1,j), T(i,j-1))` otherwise.
//!
//! Diagonal edges therefore exist only on character matches, and mismatches
//! contribute one vertical and one horizontal edge. The backtrack from
//! `(m,n)` prefers the diagonal, then up when `T(i-1,j) ≥ T(i,j-1)`, then
//! left, and stops at the first border cell.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape};
use crate::trace::extract_path;
use crate::traits::DpProblem;
use crate::utils::epsilon_labels;

#[derive(Clone, Debug)]
pub struct LcsProblem<'a> {
    pub x: &'a [u8],
    pub y: &'a [u8],
}

impl Default for LcsProblem<'static> {
    fn default() -> Self {
        Self::new(b"ABCB", b"BDCB")
    }
}

impl<'a> LcsProblem<'a> {
    pub fn new(x: &'a [u8], y: &'a [u8]) -> Self {
        Self { x, y }
    }

    /// Full `(m+1) × (n+1)` table.
    pub fn table(&self) -> Vec<Vec<i64>> {
        let (m, n) = (self.x.len(), self.y.len());
        let mut dp = vec![vec![0i64; n + 1]; m + 1];
        for i in 1..=m {
            for j in 1..=n {
                dp[i][j] = if self.x[i - 1] == self.y[j - 1] {
                    dp[i - 1][j - 1] + 1
                } else {
                    dp[i - 1][j].max(dp[i][j - 1])
                };
            }
        }
        dp
    }
}

impl DpProblem for LcsProblem<'_> {
    /// The trace ends at the first border cell (`i == 0` or `j == 0`) the
    /// backtrack reaches, which is `(0,0)` only when both prefixes run out
    /// together.
    fn solve(&self) -> Graph {
        let (x, y) = (self.x, self.y);
        let (m, n) = (x.len(), y.len());
        let dp = self.table();
        let id = |i: usize, j: usize| i * (n + 1) + j;

        let shape = Shape::labeled_grid(m + 1, n + 1, epsilon_labels(x), epsilon_labels(y));
        let mut g =
            GraphBuilder::new(shape).with_note("Row by row, left → right. Diagonal = character match.");
        for i in 0..=m {
            for j in 0..=n {
                g.node(id(i, j), dp[i][j], Layout::Grid { row: i, col: j }, format!("({i},{j})"));
                if i == 0 || j == 0 {
                    continue;
                }
                if x[i - 1] == y[j - 1] {
                    g.edge(id(i - 1, j - 1), id(i, j), EdgeKind::Diagonal);
                } else {
                    g.edge(id(i - 1, j), id(i, j), EdgeKind::Vertical);
                    g.edge(id(i, j - 1), id(i, j), EdgeKind::Horizontal);
                }
            }
        }
        g.set_answer(dp[m][n]);

        let trace = extract_path((m, n), m + n, |(i, j)| {
            if i == 0 || j == 0 {
                None
            } else if x[i - 1] == y[j - 1] {
                Some(((i - 1, j - 1), EdgeKind::Diagonal))
            } else if dp[i - 1][j] >= dp[i][j - 1] {
                Some(((i - 1, j), EdgeKind::Vertical))
            } else {
                Some(((i, j - 1), EdgeKind::Horizontal))
            }
        });
        g.apply_trace(&trace.map(|(i, j)| id(i, j)));
        g.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Value;

    fn valid_lcs_path(g: &Graph, cols: usize) -> bool {
        // every traced edge moves by one row, one column, or both
        g.path_edges().all(|e| {
            let (fi, fj) = (e.from / cols, e.from % cols);
            let (ti, tj) = (e.to / cols, e.to % cols);
            matches!((ti - fi, tj - fj), (1, 0) | (0, 1) | (1, 1))
        })
    }

    #[test]
    fn embedded_example() {
        let g = LcsProblem::default().solve();
        assert_eq!(g.answer, Value::Int(3));
        assert!(valid_lcs_path(&g, 5));
        assert!(g.trace_is_simple_path());
        // traced diagonals spell the subsequence
        let diagonals = g
            .path_edges()
            .filter(|e| e.kind == EdgeKind::Diagonal)
            .count();
        assert_eq!(diagonals, 3);
        assert_eq!(g.validate(), Ok(()));
    }

    #[test]
    fn edge_cases_empty_and_identical() {
        let g = LcsProblem::new(b"", b"ABC").solve();
        assert_eq!(g.answer, Value::Int(0));
        assert!(g.edges.is_empty());
        assert_eq!(g.path_ids(), vec![3]);

        let s = b"HELLO";
        let g = LcsProblem::new(s, s).solve();
        assert_eq!(g.answer, Value::Int(5));
        assert!(g.path_edges().all(|e| e.kind == EdgeKind::Diagonal));
    }

    #[test]
    fn trace_stops_at_first_border_cell() {
        // (2,1) matches 'B' and steps diagonally onto the border cell (1,0)
        let g = LcsProblem::new(b"AB", b"B").solve();
        assert_eq!(g.answer, Value::Int(1));
        assert_eq!(g.path_ids(), vec![2, 5]);
        assert!(!g.node(0).unwrap().on_path);
    }
}
