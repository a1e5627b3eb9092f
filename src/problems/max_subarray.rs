//! Maximum subarray (Kadane).
//!
//! `T(0) = A[0]`, `T(i) = max(A[i], T(i-1) + A[i])`. The answer is the
//! first strict maximum; the trace extends left until the segment restarts,
//! i.e. until `T(i) = A[i]` (restarting wins ties).

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape};
use crate::trace::{argmax_first, extract_path, Trace};
use crate::traits::DpProblem;

#[derive(Clone, Debug)]
pub struct MaxSubarrayProblem {
    pub seq: Vec<i64>,
}

impl Default for MaxSubarrayProblem {
    fn default() -> Self {
        Self::new(vec![2, -3, 5, -1, 4, -2, 1])
    }
}

impl MaxSubarrayProblem {
    pub fn new(seq: Vec<i64>) -> Self {
        assert!(!seq.is_empty(), "need at least one element");
        Self { seq }
    }

    pub fn table(&self) -> Vec<i64> {
        let mut t = Vec::with_capacity(self.seq.len());
        for (i, &a) in self.seq.iter().enumerate() {
            let v = if i == 0 { a } else { a.max(t[i - 1] + a) };
            t.push(v);
        }
        t
    }
}

impl DpProblem for MaxSubarrayProblem {
    fn solve(&self) -> Graph {
        let seq = &self.seq;
        let n = seq.len();
        let t = self.table();

        let mut g = GraphBuilder::new(Shape::Chain)
            .with_note("Left → right: each node depends only on its immediate predecessor");
        for (i, &a) in seq.iter().enumerate() {
            g.node(i, t[i], Layout::Chain { index: i }, format!("a={a}"));
        }
        for i in 1..n {
            g.edge(i - 1, i, EdgeKind::Extend);
        }

        let trace = match argmax_first(t.iter().copied()) {
            Some((end, best)) => {
                g.set_answer(best);
                extract_path(end, n, |i| (i > 0 && t[i] != seq[i]).then(|| (i - 1, EdgeKind::Extend)))
            }
            None => Trace::empty(),
        };
        g.apply_trace(&trace);
        g.build()
    }
}
