//! Edit (Levenshtein) distance.
//!
//! `T(i,0) = i`, `T(0,j) = j`; for interior cells
//! `T(i,j) = T(i-1,j-1)` on a match and
//! `1 + min(T(i-1,j-1), T(i-1,j), T(i,j-1))` otherwise.
//!
//! Border cells depend on their single border predecessor, so the whole
//! table is one connected DAG rooted at `(0,0)`.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape};
use crate::trace::extract_path;
use crate::traits::DpProblem;
use crate::utils::epsilon_labels;

#[derive(Clone, Debug)]
pub struct EditDistanceProblem<'a> {
    pub x: &'a [u8],
    pub y: &'a [u8],
}

impl Default for EditDistanceProblem<'static> {
    fn default() -> Self {
        Self::new(b"SAT", b"SUN")
    }
}

impl<'a> EditDistanceProblem<'a> {
    pub fn new(x: &'a [u8], y: &'a [u8]) -> Self {
        Self { x, y }
    }

    pub fn table(&self) -> Vec<Vec<i64>> {
        let (m, n) = (self.x.len(), self.y.len());
        let mut dp = vec![vec![0i64; n + 1]; m + 1];
        for (i, row) in dp.iter_mut().enumerate() {
            row[0] = i as i64;
        }
        for (j, cell) in dp[0].iter_mut().enumerate() {
            *cell = j as i64;
        }
        for i in 1..=m {
            for j in 1..=n {
                dp[i][j] = if self.x[i - 1] == self.y[j - 1] {
                    dp[i - 1][j - 1]
                } else {
                    1 + dp[i - 1][j - 1].min(dp[i - 1][j]).min(dp[i][j - 1])
                };
            }
        }
        dp
    }
}

impl DpProblem for EditDistanceProblem<'_> {
    fn solve(&self) -> Graph {
        let (x, y) = (self.x, self.y);
        let (m, n) = (x.len(), y.len());
        let dp = self.table();
        let id = |i: usize, j: usize| i * (n + 1) + j;

        let shape = Shape::labeled_grid(m + 1, n + 1, epsilon_labels(x), epsilon_labels(y));
        let mut g = GraphBuilder::new(shape).with_note(
            "Row by row. Diagonal = match/replace, vertical = delete, horizontal = insert.",
        );
        for i in 0..=m {
            for j in 0..=n {
                g.node(id(i, j), dp[i][j], Layout::Grid { row: i, col: j }, format!("({i},{j})"));
                match (i, j) {
                    (0, 0) => {}
                    (_, 0) => g.edge(id(i - 1, 0), id(i, 0), EdgeKind::Vertical),
                    (0, _) => g.edge(id(0, j - 1), id(0, j), EdgeKind::Horizontal),
                    _ if x[i - 1] == y[j - 1] => {
                        g.edge(id(i - 1, j - 1), id(i, j), EdgeKind::Diagonal)
                    }
                    _ => {
                        g.edge(id(i - 1, j - 1), id(i, j), EdgeKind::Diagonal);
                        g.edge(id(i - 1, j), id(i, j), EdgeKind::Vertical);
                        g.edge(id(i, j - 1), id(i, j), EdgeKind::Horizontal);
                    }
                }
            }
        }
        g.set_answer(dp[m][n]);

        let trace = extract_path((m, n), m + n, |(i, j)| {
            let interior = i > 0 && j > 0;
            if interior && x[i - 1] == y[j - 1] {
                Some(((i - 1, j - 1), EdgeKind::Diagonal))
            } else if interior && dp[i][j] == dp[i - 1][j - 1] + 1 {
                Some(((i - 1, j - 1), EdgeKind::Diagonal))
            } else if i > 0 && dp[i][j] == dp[i - 1][j] + 1 {
                Some(((i - 1, j), EdgeKind::Vertical))
            } else if j > 0 {
                Some(((i, j - 1), EdgeKind::Horizontal))
            } else {
                None
            }
        });
        g.apply_trace(&trace.map(|(i, j)| id(i, j)));
        g.build()
    }
}
