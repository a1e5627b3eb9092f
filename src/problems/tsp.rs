//! Travelling salesman (Held-Karp).
//!
//! `T(S, j)` is the cheapest route that starts at city 0, visits exactly the
//! cities in `S` and ends at `j ∈ S`:
//! - `T({0}, 0) = 0`,
//! - `T(S, j) = min_{i ∈ S∖{j}} T(S∖{j}, i) + d(i, j)`.
//!
//! The tour closes with `min_j T(full, j) + d(j, 0)`. Masks are laid out by
//! population count; states that never contain the start city stay
//! unreachable and take no part in the DAG.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape};
use crate::trace::extract_path;
use crate::traits::DpProblem;
use crate::utils::{cost_value, mask_rows, masks_by_popcount, INF};

#[derive(Clone, Debug)]
pub struct TspProblem {
    pub dist: Vec<Vec<i64>>,
}

impl Default for TspProblem {
    fn default() -> Self {
        Self::new(vec![
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ])
    }
}

/// `dp[mask][last]` plus the predecessor that first achieved it.
#[derive(Clone, Debug)]
pub struct HeldKarp {
    pub cost: Vec<Vec<i64>>,
    pub parent: Vec<Vec<Option<usize>>>,
}

impl TspProblem {
    /// # Panics
    /// Panics unless the matrix is square with 2 to 16 cities and
    /// non-negative entries.
    pub fn new(dist: Vec<Vec<i64>>) -> Self {
        let n = dist.len();
        assert!((2..=16).contains(&n), "need 2..=16 cities, got {n}");
        assert!(dist.iter().all(|r| r.len() == n), "distance matrix must be square");
        assert!(dist.iter().flatten().all(|&d| d >= 0), "distances must be non-negative");
        Self { dist }
    }

    pub fn cities(&self) -> usize {
        self.dist.len()
    }

    pub fn held_karp(&self) -> HeldKarp {
        let n = self.cities();
        let d = &self.dist;
        let masks = 1usize << n;
        let mut cost = vec![vec![INF; n]; masks];
        let mut parent = vec![vec![None; n]; masks];
        cost[1][0] = 0;
        for mask in 1..masks {
            for last in 0..n {
                if mask & (1 << last) == 0 || cost[mask][last] >= INF {
                    continue;
                }
                for next in 0..n {
                    if mask & (1 << next) != 0 {
                        continue;
                    }
                    let nm = mask | (1 << next);
                    let c = cost[mask][last] + d[last][next];
                    if c < cost[nm][next] {
                        cost[nm][next] = c;
                        parent[nm][next] = Some(last);
                    }
                }
            }
        }
        HeldKarp { cost, parent }
    }

    /// Cheapest closing city and the full tour cost.
    pub fn best_tour(&self, hk: &HeldKarp) -> (usize, i64) {
        let n = self.cities();
        let full = (1usize << n) - 1;
        let mut best = (0, INF);
        for last in 1..n {
            let total = hk.cost[full][last] + self.dist[last][0];
            if total < best.1 {
                best = (last, total);
            }
        }
        best
    }
}

impl DpProblem for TspProblem {
    fn solve(&self) -> Graph {
        let n = self.cities();
        let hk = self.held_karp();
        let (best_last, tour) = self.best_tour(&hk);
        let id = |mask: usize, last: usize| mask * n + last;

        let masks = masks_by_popcount(n, false);
        let shape = Shape::Bitmask {
            cols: n,
            rows: mask_rows(&masks, n),
        };
        let mut g = GraphBuilder::new(shape).with_note(format!(
            "TSP tour cost = {tour}. Masks sorted by popcount. Each cell dp[mask][last] = min cost to visit set \"mask\" ending at city \"last\"."
        ));
        for (row, &m) in masks.iter().enumerate() {
            let mask = m as usize;
            for last in (0..n).filter(|&l| mask & (1 << l) != 0) {
                let layout = Layout::Mask { row, col: last, mask: m };
                g.node(id(mask, last), cost_value(hk.cost[mask][last]), layout, format!("end@{last}"));
            }
        }
        for &m in &masks {
            let mask = m as usize;
            for last in 0..n {
                if mask & (1 << last) == 0 || hk.cost[mask][last] >= INF {
                    continue;
                }
                let prev_mask = mask ^ (1 << last);
                for prev in 0..n {
                    if prev_mask & (1 << prev) != 0 && hk.cost[prev_mask][prev] < INF {
                        g.edge(id(prev_mask, prev), id(mask, last), EdgeKind::Visit);
                    }
                }
            }
        }

        g.set_answer(cost_value(tour));
        if tour < INF {
            let full = (1usize << n) - 1;
            let trace = extract_path((full, best_last), n, |(mask, last)| {
                hk.parent[mask][last].map(|prev| ((mask ^ (1 << last), prev), EdgeKind::Visit))
            });
            g.apply_trace(&trace.map(|(mask, last)| id(mask, last)));
        }
        g.build()
    }
}

/// Cities in visiting order along a traced tour, starting at city 0.
pub fn tour_order(graph: &Graph, cities: usize) -> Vec<usize> {
    let mut cells: Vec<(u32, usize)> = graph
        .path_nodes()
        .map(|nd| ((nd.id / cities).count_ones(), nd.id % cities))
        .collect();
    cells.sort_unstable();
    cells.into_iter().map(|(_, last)| last).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Value;

    #[test]
    fn embedded_tour() {
        let g = TspProblem::default().solve();
        assert_eq!(g.answer, Value::Int(80));
        assert_eq!(g.path_ids().len(), 4);
        assert!(g.trace_is_simple_path());
        let order = tour_order(&g, 4);
        assert_eq!(order[0], 0);
        assert!(g.note.starts_with("TSP tour cost = 80."));
        assert_eq!(g.validate(), Ok(()));
    }

    #[test]
    fn states_without_start_are_unreachable() {
        let g = TspProblem::default().solve();
        // mask 0b0010 ending at city 1 never contains city 0
        assert_eq!(g.value(2 * 4 + 1), Some(Value::Unreachable));
        assert!(g.incoming(2 * 4 + 1).next().is_none());
        assert_eq!(g.value(4), Some(Value::Int(0)));
    }

    #[test]
    fn two_cities() {
        let g = TspProblem::new(vec![vec![0, 3], vec![4, 0]]).solve();
        assert_eq!(g.answer, Value::Int(7));
    }
}
