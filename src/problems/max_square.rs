//! Largest square of ones in a binary matrix.
//!
//! `T(i,j)` is the side of the largest all-ones square whose bottom-right
//! corner is `(i,j)`: `M[i][j]` on the first row and column, `0` on a zero
//! cell, and `1 + min(T(i-1,j-1), T(i-1,j), T(i,j-1))` elsewhere.
//!
//! The answer scans every cell. Its trace is the winning square itself,
//! held together by a spanning tree: interior cells feed the diagonal,
//! the bottom row feeds rightwards and the right column feeds downwards.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape};
use crate::trace::{argmax_first, extract_tree};
use crate::traits::DpProblem;

#[derive(Clone, Debug)]
pub struct MaxSquareProblem {
    pub matrix: Vec<Vec<u8>>,
}

impl Default for MaxSquareProblem {
    fn default() -> Self {
        Self::new(vec![
            vec![1, 1, 0, 1],
            vec![1, 1, 1, 1],
            vec![0, 1, 1, 1],
            vec![1, 1, 1, 0],
        ])
    }
}

impl MaxSquareProblem {
    /// # Panics
    /// Panics on an empty or ragged matrix, or on entries other than 0/1.
    pub fn new(matrix: Vec<Vec<u8>>) -> Self {
        assert!(!matrix.is_empty() && !matrix[0].is_empty(), "empty matrix");
        let n = matrix[0].len();
        assert!(matrix.iter().all(|r| r.len() == n), "ragged matrix");
        assert!(matrix.iter().flatten().all(|&c| c <= 1), "matrix must be binary");
        Self { matrix }
    }

    pub fn table(&self) -> Vec<Vec<i64>> {
        let mat = &self.matrix;
        let (m, n) = (mat.len(), mat[0].len());
        let mut dp = vec![vec![0i64; n]; m];
        for i in 0..m {
            for j in 0..n {
                dp[i][j] = match (mat[i][j], i, j) {
                    (0, _, _) => 0,
                    (_, 0, _) | (_, _, 0) => 1,
                    _ => 1 + dp[i - 1][j - 1].min(dp[i - 1][j]).min(dp[i][j - 1]),
                };
            }
        }
        dp
    }
}

impl DpProblem for MaxSquareProblem {
    fn solve(&self) -> Graph {
        let mat = &self.matrix;
        let (m, n) = (mat.len(), mat[0].len());
        let dp = self.table();
        let id = |i: usize, j: usize| i * n + j;

        let mut g = GraphBuilder::new(Shape::grid(m, n))
            .with_note("Row by row. Each 1-cell reads its 3 neighbours; the answer scans all cells.");
        for i in 0..m {
            for j in 0..n {
                g.node(id(i, j), dp[i][j], Layout::Grid { row: i, col: j }, format!("M={}", mat[i][j]));
                if mat[i][j] == 1 && i > 0 && j > 0 {
                    g.edge(id(i - 1, j - 1), id(i, j), EdgeKind::Diagonal);
                    g.edge(id(i - 1, j), id(i, j), EdgeKind::Vertical);
                    g.edge(id(i, j - 1), id(i, j), EdgeKind::Horizontal);
                }
            }
        }

        let Some((pos, side)) = argmax_first(dp.iter().flatten().copied()) else {
            return g.build();
        };
        g.set_answer(side);
        if side == 0 {
            return g.build();
        }

        let (bi, bj) = (pos / n, pos % n);
        let side = side as usize;
        let (ti, tj) = (bi + 1 - side, bj + 1 - side);
        let trace = extract_tree((bi, bj), side * side, |(i, j)| {
            let mut deps = Vec::with_capacity(3);
            if i > ti && j > tj {
                deps.push(((i - 1, j - 1), EdgeKind::Diagonal));
            }
            if i == bi && j > tj {
                deps.push(((i, j - 1), EdgeKind::Horizontal));
            }
            if j == bj && i > ti {
                deps.push(((i - 1, j), EdgeKind::Vertical));
            }
            deps
        });
        g.apply_trace(&trace.map(|(i, j)| id(i, j)));
        g.build()
    }
}
