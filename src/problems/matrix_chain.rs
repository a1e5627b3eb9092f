//! Matrix-chain multiplication.
//!
//! Classic interval DP:
//! - dimensions `p[0..=n]`, matrix `A_i` is `p[i] × p[i+1]` (0-based),
//! - `T(i,i) = 0`,
//! - `T(i,j) = min_{i ≤ k < j} T(i,k) + T(k+1,j) + p[i]·p[k+1]·p[j+1]`.
//!
//! Cells live in the upper triangle of an `n × n` grid and are filled by
//! increasing interval length, so the DAG grows from the diagonal to the
//! top-right corner. Every candidate split contributes a `Left` and a
//! `Right` edge; the trace follows the first strictly minimal split.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape};
use crate::trace::extract_tree;
use crate::traits::DpProblem;

#[derive(Clone, Debug)]
pub struct MatrixChainProblem {
    /// Dimensions `p[0..=n]`, with `n` matrices.
    pub p: Vec<u64>,
}

/// Optimal costs and split points over the upper triangle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainTable {
    pub cost: Vec<Vec<u64>>,
    pub split: Vec<Vec<usize>>,
}

impl Default for MatrixChainProblem {
    fn default() -> Self {
        Self::new(vec![10, 30, 5, 20])
    }
}

/// Largest accepted matrix dimension.
pub const MAX_DIM: u64 = 1 << 16;
/// Largest accepted chain length.
///
/// Together with [`MAX_DIM`] this keeps every interval cost below
/// `MAX_MATRICES · MAX_DIM³ = 2^62`, so costs fit in an `i64`.
pub const MAX_MATRICES: usize = 1 << 14;

impl MatrixChainProblem {
    /// # Panics
    /// Panics on an empty chain, more than [`MAX_MATRICES`] matrices, or a
    /// dimension above [`MAX_DIM`].
    pub fn new(p: Vec<u64>) -> Self {
        assert!(p.len() >= 2, "need at least one matrix");
        assert!(p.len() - 1 <= MAX_MATRICES, "at most {MAX_MATRICES} matrices");
        assert!(p.iter().all(|&d| d <= MAX_DIM), "dimensions must be at most {MAX_DIM}");
        Self { p }
    }

    fn n(&self) -> usize {
        self.p.len() - 1
    }

    pub fn table(&self) -> ChainTable {
        let n = self.n();
        let p = &self.p;
        let mut cost = vec![vec![0u64; n]; n];
        let mut split = vec![vec![0usize; n]; n];
        for len in 2..=n {
            for i in 0..=(n - len) {
                let j = i + len - 1;
                cost[i][j] = u64::MAX;
                for k in i..j {
                    let c = cost[i][k] + cost[k + 1][j] + p[i] * p[k + 1] * p[j + 1];
                    if c < cost[i][j] {
                        cost[i][j] = c;
                        split[i][j] = k;
                    }
                }
            }
        }
        ChainTable { cost, split }
    }

    /// Optimal parenthesization, e.g. `((A1A2)A3)`.
    pub fn parenthesize(&self) -> String {
        fn write(split: &[Vec<usize>], i: usize, j: usize, out: &mut String) {
            if i == j {
                out.push_str(&format!("A{}", i + 1));
                return;
            }
            let k = split[i][j];
            out.push('(');
            write(split, i, k, out);
            write(split, k + 1, j, out);
            out.push(')');
        }
        let table = self.table();
        let mut out = String::new();
        write(&table.split, 0, self.n() - 1, &mut out);
        out
    }
}

impl DpProblem for MatrixChainProblem {
    fn solve(&self) -> Graph {
        let n = self.n();
        let ChainTable { cost, split } = self.table();
        let id = |i: usize, j: usize| i * n + j;

        let row_labels = (0..n).map(|i| format!("i={i}")).collect();
        let col_labels = (0..n).map(|j| format!("j={j}")).collect();
        let mut g = GraphBuilder::new(Shape::labeled_grid(n, n, row_labels, col_labels))
            .with_note("Diagonal (len=1) → outward to Top-Right (len=n). Pyramidal build-up.");
        for len in 1..=n {
            for i in 0..=(n - len) {
                let j = i + len - 1;
                let node = g.node(id(i, j), signed(cost[i][j]), Layout::Grid { row: i, col: j }, format!("A{}..A{}", i + 1, j + 1));
                if i < j {
                    node.detail = Some(format!("k={}", split[i][j]));
                }
                for k in i..j {
                    g.edge(id(i, k), id(i, j), EdgeKind::Left);
                    g.edge(id(k + 1, j), id(i, j), EdgeKind::Right);
                }
            }
        }
        g.set_answer(signed(cost[0][n - 1]));

        let trace = extract_tree((0, n - 1), 2 * n, |(i, j)| {
            if i == j {
                return Vec::new();
            }
            let k = split[i][j];
            vec![((i, k), EdgeKind::Left), ((k + 1, j), EdgeKind::Right)]
        });
        g.apply_trace(&trace.map(|(i, j)| id(i, j)));
        g.build()
    }
}

/// Costs are bounded in [`MatrixChainProblem::new`]; saturate rather than wrap.
fn signed(cost: u64) -> i64 {
    i64::try_from(cost).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Value;

    #[test]
    fn embedded_dims() {
        let p = MatrixChainProblem::default();
        let g = p.solve();
        assert_eq!(g.answer, Value::Int(2500));
        assert_eq!(p.parenthesize(), "((A1A2)A3)");
        assert_eq!(g.path_ids(), vec![0, 1, 2, 4, 8]);
        assert_eq!(g.validate(), Ok(()));
    }

    #[test]
    fn clrs_example_cost() {
        let g = MatrixChainProblem::new(vec![30, 35, 15, 5, 10, 20, 25]).solve();
        assert_eq!(g.answer, Value::Int(15125));
        assert_eq!(g.validate(), Ok(()));
    }

    #[test]
    fn small_edges() {
        // a single matrix costs nothing and has no dependencies
        let g = MatrixChainProblem::new(vec![10, 20]).solve();
        assert_eq!(g.answer, Value::Int(0));
        assert!(g.edges.is_empty());
        assert_eq!(g.path_ids(), vec![0]);

        let g = MatrixChainProblem::new(vec![10, 20, 30]).solve();
        assert_eq!(g.answer, Value::Int(10 * 20 * 30));
    }

    #[test]
    fn largest_dimensions_stay_exact() {
        let g = MatrixChainProblem::new(vec![MAX_DIM; 3]).solve();
        assert_eq!(g.answer, Value::Int(1 << 48));

        // three products of 2^48 each, still far below i64::MAX
        let g = MatrixChainProblem::new(vec![MAX_DIM; 5]).solve();
        assert_eq!(g.answer, Value::Int(3 << 48));
    }

    #[test]
    #[should_panic(expected = "dimensions must be at most")]
    fn oversized_dimension_is_rejected() {
        MatrixChainProblem::new(vec![10, MAX_DIM + 1, 10]);
    }
}
