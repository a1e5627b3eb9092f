//! Counting beautiful arrangements.
//!
//! A permutation `perm` of `1..=N` is beautiful when, for every position
//! `p` (1-based), `perm[p] % p == 0` or `p % perm[p] == 0`. With the set of
//! placed numbers as the state, the next position is `popcount + 1`:
//! - `T(∅) = 1`,
//! - `T(m ∪ {x}) += T(m)` whenever `x` may sit at position `|m| + 1`.
//!
//! Only states with a non-zero count are drawn. The trace rebuilds one
//! arrangement backwards from the full set, removing at each step the
//! smallest number that fits the last position and leaves a countable state.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape};
use crate::trace::extract_path;
use crate::traits::DpProblem;
use crate::utils::{mask_rows, masks_by_popcount, popcount};

#[derive(Clone, Debug)]
pub struct BeautifulArrangementProblem {
    pub n: usize,
}

impl Default for BeautifulArrangementProblem {
    fn default() -> Self {
        Self::new(4)
    }
}

/// Whether `num` may occupy 1-based position `pos`.
#[inline]
pub fn fits(pos: usize, num: usize) -> bool {
    pos % num == 0 || num % pos == 0
}

impl BeautifulArrangementProblem {
    pub fn new(n: usize) -> Self {
        assert!((1..=16).contains(&n), "N must be in 1..=16");
        Self { n }
    }

    pub fn table(&self) -> Vec<i64> {
        let n = self.n;
        let mut dp = vec![0i64; 1 << n];
        dp[0] = 1;
        for mask in 0..(1usize << n) {
            if dp[mask] == 0 {
                continue;
            }
            let pos = popcount(mask as u32) as usize + 1;
            if pos > n {
                continue;
            }
            for num in 1..=n {
                let bit = 1 << (num - 1);
                if mask & bit == 0 && fits(pos, num) {
                    dp[mask | bit] += dp[mask];
                }
            }
        }
        dp
    }
}

impl DpProblem for BeautifulArrangementProblem {
    fn solve(&self) -> Graph {
        let n = self.n;
        let dp = self.table();
        let full = (1usize << n) - 1;
        let live = |mask: usize| mask == 0 || dp[mask] > 0;

        let masks = masks_by_popcount(n, true);
        let shape = Shape::Bitmask {
            cols: 1,
            rows: mask_rows(&masks, n),
        };
        let mut g = GraphBuilder::new(shape).with_note(format!(
            "Count = {}. Mask tracks used numbers. Position = popcount+1. Transition if pos%num=0 or num%pos=0.",
            dp[full]
        ));
        for (row, &m) in masks.iter().enumerate() {
            let mask = m as usize;
            if live(mask) {
                g.node(mask, dp[mask], Layout::Mask { row, col: 0, mask: m }, format!("#{}", dp[mask]));
            }
        }
        for &m in &masks {
            let mask = m as usize;
            let pos = popcount(m) as usize + 1;
            if !live(mask) || pos > n {
                continue;
            }
            for num in 1..=n {
                let bit = 1 << (num - 1);
                if mask & bit == 0 && fits(pos, num) && dp[mask | bit] > 0 {
                    g.edge(mask, mask | bit, EdgeKind::Place);
                }
            }
        }
        g.set_answer(dp[full]);

        if dp[full] > 0 {
            let trace = extract_path(full, n, |mask| {
                let pos = popcount(mask as u32) as usize;
                (1..=n)
                    .find(|&num| {
                        let bit = 1 << (num - 1);
                        mask & bit != 0 && fits(pos, num) && live(mask ^ bit)
                    })
                    .map(|num| (mask ^ (1 << (num - 1)), EdgeKind::Place))
            });
            g.apply_trace(&trace);
        }
        g.build()
    }
}

/// Arrangement spelled by a traced graph: the number added at each step.
pub fn arrangement(graph: &Graph) -> Vec<usize> {
    let mut masks: Vec<usize> = graph.path_ids();
    masks.sort_by_key(|&m| m.count_ones());
    masks
        .windows(2)
        .map(|w| (w[1] ^ w[0]).trailing_zeros() as usize + 1)
        .collect()
}
