//! Floyd-Warshall all-pairs shortest paths.
//!
//! `dist_k(i,j) = min(dist_{k-1}(i,j), dist_{k-1}(i,k) + dist_{k-1}(k,j))`,
//! drawn as an `n × n` grid collapsed over `k`. Collapsing makes the
//! "every k" relation cyclic, so the graph only keeps the dependencies of
//! the route actually recorded for each pair: `(i,k) → (i,j)` and
//! `(k,j) → (i,j)` for the last intermediate `k` that improved `(i,j)`.
//! Pairs never improved keep their direct edge weight and have no inputs.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape};
use crate::trace::extract_tree;
use crate::traits::DpProblem;
use crate::utils::{cost_value, INF};

#[derive(Clone, Debug)]
pub struct FloydWarshallProblem {
    /// Edge weights, [`INF`] for a missing edge.
    pub weights: Vec<Vec<i64>>,
    pub source: usize,
    pub target: usize,
}

impl Default for FloydWarshallProblem {
    fn default() -> Self {
        Self::new(
            vec![
                vec![0, 3, INF, 7],
                vec![8, 0, 2, INF],
                vec![5, INF, 0, 1],
                vec![2, INF, INF, 0],
            ],
            0,
            3,
        )
    }
}

/// Final distances plus the last improving intermediate per pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths {
    pub dist: Vec<Vec<i64>>,
    pub via: Vec<Vec<Option<usize>>>,
}

impl FloydWarshallProblem {
    /// # Panics
    /// Panics unless `weights` is square with a zero diagonal and positive
    /// off-diagonal weights, and both endpoints are in range.
    pub fn new(weights: Vec<Vec<i64>>, source: usize, target: usize) -> Self {
        let n = weights.len();
        assert!(weights.iter().all(|r| r.len() == n), "weights must be square");
        for (i, row) in weights.iter().enumerate() {
            for (j, &w) in row.iter().enumerate() {
                if i == j {
                    assert_eq!(w, 0, "diagonal must be zero");
                } else {
                    assert!(w > 0, "weights must be positive");
                }
            }
        }
        assert!(source < n && target < n, "endpoint out of range");
        Self {
            weights,
            source,
            target,
        }
    }

    pub fn shortest_paths(&self) -> ShortestPaths {
        let n = self.weights.len();
        let mut dist: Vec<Vec<i64>> = self
            .weights
            .iter()
            .map(|r| r.iter().map(|&w| w.min(INF)).collect())
            .collect();
        let mut via = vec![vec![None; n]; n];
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let through = dist[i][k].saturating_add(dist[k][j]);
                    if through < dist[i][j] {
                        dist[i][j] = through;
                        via[i][j] = Some(k);
                    }
                }
            }
        }
        ShortestPaths { dist, via }
    }
}

impl DpProblem for FloydWarshallProblem {
    fn solve(&self) -> Graph {
        let n = self.weights.len();
        let ShortestPaths { dist, via } = self.shortest_paths();
        let id = |i: usize, j: usize| i * n + j;

        let row_labels = (0..n).map(|i| format!("from {i}")).collect();
        let col_labels = (0..n).map(|j| format!("to {j}")).collect();
        let mut g = GraphBuilder::new(Shape::labeled_grid(n, n, row_labels, col_labels)).with_note(
            "n×n grid collapsed over k. Each improved pair reads dist(i,k) and dist(k,j) for its recorded k.",
        );
        for i in 0..n {
            for j in 0..n {
                g.node(id(i, j), cost_value(dist[i][j]), Layout::Grid { row: i, col: j }, format!("{i}→{j}"));
            }
        }
        for i in 0..n {
            for j in 0..n {
                if let Some(k) = via[i][j] {
                    g.edge(id(i, k), id(i, j), EdgeKind::Via);
                    g.edge(id(k, j), id(i, j), EdgeKind::Via);
                }
            }
        }

        let (s, t) = (self.source, self.target);
        g.set_answer(cost_value(dist[s][t]));
        if dist[s][t] < INF {
            let trace = extract_tree((s, t), n * n, |(i, j)| match via[i][j] {
                Some(k) => vec![((i, k), EdgeKind::Via), ((k, j), EdgeKind::Via)],
                None => Vec::new(),
            });
            g.apply_trace(&trace.map(|(i, j)| id(i, j)));
        }
        g.build()
    }
}

/// Vertex sequence of the recorded route from `i` to `j`.
pub fn route(via: &[Vec<Option<usize>>], i: usize, j: usize) -> Vec<usize> {
    fn inner(via: &[Vec<Option<usize>>], i: usize, j: usize, out: &mut Vec<usize>) {
        if let Some(k) = via[i][j] {
            inner(via, i, k, out);
            out.push(k);
            inner(via, k, j, out);
        }
    }
    let mut out = vec![i];
    inner(via, i, j, &mut out);
    if i != j {
        out.push(j);
    }
    out
}
