//! Longest palindromic subsequence as an interval DP.
//!
//! `T(i,i) = 1`; for `i < j`:
//! - `T(i,j) = 2 + T(i+1,j-1)` when `S[i] == S[j]` (just `2` for adjacent ends),
//! - `T(i,j) = max(T(i+1,j), T(i,j-1))` otherwise.
//!
//! The trace starts from the whole string and either closes in on both ends
//! or drops one end, so it is a single path toward the diagonal.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape};
use crate::trace::extract_path;
use crate::traits::DpProblem;

#[derive(Clone, Debug)]
pub struct IntervalLpsProblem {
    pub s: Vec<u8>,
}

impl Default for IntervalLpsProblem {
    fn default() -> Self {
        Self::new(b"BBABCBCAB".to_vec())
    }
}

impl IntervalLpsProblem {
    pub fn new(s: Vec<u8>) -> Self {
        assert!(!s.is_empty(), "need a non-empty string");
        Self { s }
    }

    pub fn table(&self) -> Vec<Vec<i64>> {
        let s = &self.s;
        let n = s.len();
        let mut dp = vec![vec![0i64; n]; n];
        for (i, row) in dp.iter_mut().enumerate() {
            row[i] = 1;
        }
        for len in 2..=n {
            for i in 0..=(n - len) {
                let j = i + len - 1;
                dp[i][j] = if s[i] == s[j] {
                    2 + if len == 2 { 0 } else { dp[i + 1][j - 1] }
                } else {
                    dp[i + 1][j].max(dp[i][j - 1])
                };
            }
        }
        dp
    }
}

impl DpProblem for IntervalLpsProblem {
    fn solve(&self) -> Graph {
        let s = &self.s;
        let n = s.len();
        let dp = self.table();
        let id = |i: usize, j: usize| i * n + j;

        let row_labels = s.iter().map(|&c| format!("i:{}", char::from(c))).collect();
        let col_labels = s.iter().map(|&c| format!("j:{}", char::from(c))).collect();
        let mut g = GraphBuilder::new(Shape::labeled_grid(n, n, row_labels, col_labels))
            .with_note("Diagonal → Top-Right. Interval shrinks to center or expands from center.");
        for len in 1..=n {
            for i in 0..=(n - len) {
                let j = i + len - 1;
                g.node(id(i, j), dp[i][j], Layout::Grid { row: i, col: j }, format!("[{i},{j}]"));
                if i == j {
                    continue;
                }
                if s[i] == s[j] {
                    if j > i + 1 {
                        g.edge(id(i + 1, j - 1), id(i, j), EdgeKind::Inner);
                    }
                } else {
                    g.edge(id(i + 1, j), id(i, j), EdgeKind::ShrinkLeft);
                    g.edge(id(i, j - 1), id(i, j), EdgeKind::ShrinkRight);
                }
            }
        }
        g.set_answer(dp[0][n - 1]);

        let trace = extract_path((0, n - 1), n, |(i, j)| {
            if i == j {
                None
            } else if s[i] == s[j] {
                (j > i + 1).then(|| ((i + 1, j - 1), EdgeKind::Inner))
            } else if dp[i + 1][j] >= dp[i][j - 1] {
                Some(((i + 1, j), EdgeKind::ShrinkLeft))
            } else {
                Some(((i, j - 1), EdgeKind::ShrinkRight))
            }
        });
        g.apply_trace(&trace.map(|(i, j)| id(i, j)));
        g.build()
    }
}

/// Palindrome spelled by a traced interval graph over `s`: every traced cell
/// with matching ends contributes both ends, a traced diagonal cell the middle.
pub fn spelled(graph: &Graph, s: &[u8]) -> String {
    let n = s.len();
    let mut cells: Vec<(usize, usize)> = graph.path_nodes().map(|nd| (nd.id / n, nd.id % n)).collect();
    cells.sort_by_key(|&(i, j)| std::cmp::Reverse(j - i));
    let (mut left, mut right) = (Vec::new(), Vec::new());
    for (i, j) in cells {
        if i == j {
            left.push(s[i]);
        } else if s[i] == s[j] {
            left.push(s[i]);
            right.push(s[j]);
        }
    }
    left.extend(right.into_iter().rev());
    String::from_utf8_lossy(&left).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Value;

    #[test]
    fn embedded_string() {
        let p = IntervalLpsProblem::default();
        let g = p.solve();
        assert_eq!(g.answer, Value::Int(7));
        assert!(g.trace_is_simple_path());
        let word = spelled(&g, &p.s);
        assert_eq!(word.len(), 7);
        assert!(word.bytes().eq(word.bytes().rev()));
        assert_eq!(g.validate(), Ok(()));
    }

    #[test]
    fn adjacent_pair_ends_trace() {
        let g = IntervalLpsProblem::new(b"AA".to_vec()).solve();
        assert_eq!(g.answer, Value::Int(2));
        assert!(g.edges.is_empty());
        assert_eq!(g.path_ids(), vec![1]);
    }
}
