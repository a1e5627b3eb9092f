//! Longest palindromic subsequence as `LCS(S, reverse(S))`.
//!
//! The problem transforms, the algorithm does not: the graph is exactly the
//! LCS grid for `S` against its reverse, with its own topology note.

use crate::graph::Graph;
use crate::problems::lcs::LcsProblem;
use crate::traits::DpProblem;

#[derive(Clone, Debug)]
pub struct PalindromeProblem {
    pub s: Vec<u8>,
}

impl Default for PalindromeProblem {
    fn default() -> Self {
        Self::new(b"ABCBA".to_vec())
    }
}

impl PalindromeProblem {
    pub fn new(s: Vec<u8>) -> Self {
        Self { s }
    }

    pub fn reversed(&self) -> Vec<u8> {
        self.s.iter().rev().copied().collect()
    }
}

impl DpProblem for PalindromeProblem {
    fn solve(&self) -> Graph {
        let rev = self.reversed();
        let mut graph = LcsProblem::new(&self.s, &rev).solve();
        graph.note = "LCS(S, reverse(S)). Same grid DAG: the problem transforms, not the algorithm.".into();
        graph
    }
}
