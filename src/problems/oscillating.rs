//! Longest oscillating (zig-zag) subsequence.
//!
//! Two values per index:
//! - `up(i)   = 1 + max{ down(j) : j < i, A[j] < A[i] }`
//! - `down(i) = 1 + max{ up(j)   : j < i, A[j] > A[i] }`
//!
//! A node's value is `max(up, down)`. The answer is the first strict maximum;
//! the trace starts in the `up` layer when `up ≥ down`, looks for the nearest
//! earlier index feeding that layer, and flips layers at every step.

use crate::builder::GraphBuilder;
use crate::graph::{Choice, EdgeKind, Graph, Layout, Shape};
use crate::trace::{argmax_first, extract_path};
use crate::traits::DpProblem;

#[derive(Clone, Debug)]
pub struct OscillatingProblem {
    pub seq: Vec<i64>,
}

impl Default for OscillatingProblem {
    fn default() -> Self {
        Self::new(vec![1, 5, 3, 8, 2, 7])
    }
}

impl OscillatingProblem {
    pub fn new(seq: Vec<i64>) -> Self {
        assert!(!seq.is_empty(), "need at least one element");
        Self { seq }
    }

    /// `(up, down)` layers.
    pub fn layers(&self) -> (Vec<i64>, Vec<i64>) {
        let seq = &self.seq;
        let n = seq.len();
        let mut up = vec![1i64; n];
        let mut down = vec![1i64; n];
        for i in 1..n {
            for j in 0..i {
                if seq[i] > seq[j] {
                    up[i] = up[i].max(down[j] + 1);
                }
                if seq[i] < seq[j] {
                    down[i] = down[i].max(up[j] + 1);
                }
            }
        }
        (up, down)
    }
}

impl DpProblem for OscillatingProblem {
    fn solve(&self) -> Graph {
        let seq = &self.seq;
        let n = seq.len();
        let (up, down) = self.layers();
        let best: Vec<i64> = (0..n).map(|i| up[i].max(down[i])).collect();

        let mut g = GraphBuilder::new(Shape::Chain).with_note(
            "Left → right: two DP values per node (up/down), alternating direction arcs",
        );
        for (i, &v) in seq.iter().enumerate() {
            g.node(i, best[i], Layout::Chain { index: i }, format!("val={v}"))
                .detail = Some(format!("up={} down={}", up[i], down[i]));
        }
        for i in 1..n {
            for j in 0..i {
                if seq[i] > seq[j] {
                    g.edge(j, i, EdgeKind::Up);
                }
                if seq[i] < seq[j] {
                    g.edge(j, i, EdgeKind::Down);
                }
            }
        }

        let Some((end, answer)) = argmax_first(best.iter().copied()) else {
            return g.build();
        };
        g.set_answer(answer);

        // state = (index, layer the value was read from)
        let start_layer = if up[end] >= down[end] {
            Choice::Up
        } else {
            Choice::Down
        };
        let trace = extract_path((end, start_layer), n, |(i, layer)| match layer {
            Choice::Up => (0..i)
                .rev()
                .find(|&j| seq[i] > seq[j] && down[j] == up[i] - 1)
                .map(|j| ((j, Choice::Down), EdgeKind::Up)),
            _ => (0..i)
                .rev()
                .find(|&j| seq[i] < seq[j] && up[j] == down[i] - 1)
                .map(|j| ((j, Choice::Up), EdgeKind::Down)),
        });
        for &(i, layer) in &trace.states {
            g.set_choice(i, layer);
        }
        g.apply_trace(&trace.map(|(i, _)| i));
        g.build()
    }
}
