//! Longest Increasing Subsequence.
//!
//! `T(i) = 1 + max{ T(j) : j < i, A[j] < A[i] }` (1 when no such `j`).
//! The answer is the first strict maximum over all `T(i)`; the trace then
//! steps to the nearest earlier `j` with `A[j] < A[i]` and `T(j) = T(i) - 1`.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape};
use crate::trace::{argmax_first, extract_path, Trace};
use crate::traits::DpProblem;

#[derive(Clone, Debug)]
pub struct LisProblem {
    pub seq: Vec<i64>,
}

impl Default for LisProblem {
    fn default() -> Self {
        Self::new(vec![3, 1, 4, 1, 5, 9, 2, 6])
    }
}

impl LisProblem {
    pub fn new(seq: Vec<i64>) -> Self {
        assert!(!seq.is_empty(), "need at least one element");
        Self { seq }
    }

    /// `T(i)` for every index.
    pub fn table(&self) -> Vec<i64> {
        let n = self.seq.len();
        let mut t = vec![1i64; n];
        for i in 1..n {
            let best = (0..i)
                .filter(|&j| self.seq[j] < self.seq[i])
                .map(|j| t[j])
                .max()
                .unwrap_or(0);
            t[i] = 1 + best;
        }
        t
    }
}

impl DpProblem for LisProblem {
    fn solve(&self) -> Graph {
        let seq = &self.seq;
        let n = seq.len();
        let t = self.table();

        let mut g = GraphBuilder::new(Shape::Chain).with_note("Left → right: i = 0, 1, ... n−1");
        for (i, &v) in seq.iter().enumerate() {
            g.node(i, t[i], Layout::Chain { index: i }, format!("val={v}"));
        }
        for i in 1..n {
            for j in 0..i {
                if seq[j] < seq[i] {
                    g.edge(j, i, EdgeKind::Link);
                }
            }
        }

        let trace = match argmax_first(t.iter().copied()) {
            Some((end, best)) => {
                g.set_answer(best);
                extract_path(end, n, |i| {
                    (0..i)
                        .rev()
                        .find(|&j| seq[j] < seq[i] && t[j] == t[i] - 1)
                        .map(|j| (j, EdgeKind::Link))
                })
            }
            None => Trace::empty(),
        };
        g.apply_trace(&trace);
        g.build()
    }
}
