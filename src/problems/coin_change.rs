//! Coin change, minimum number of coins.
//!
//! `T(0) = 0`, `T(v) = 1 + min{ T(v - c) : c ≤ v }`, unreachable amounts
//! stay at infinity. The trace from `T(V)` takes the first coin, in input
//! order, that reproduces the recorded count.

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape};
use crate::trace::extract_path;
use crate::traits::DpProblem;
use crate::utils::{cost_value, INF};

#[derive(Clone, Debug)]
pub struct CoinChangeProblem {
    pub coins: Vec<u64>,
    pub target: usize,
}

impl Default for CoinChangeProblem {
    fn default() -> Self {
        Self::new(vec![1, 3, 4], 7)
    }
}

impl CoinChangeProblem {
    pub fn new(coins: Vec<u64>, target: usize) -> Self {
        assert!(coins.iter().all(|&c| c > 0), "coins must be positive");
        let mut sorted = coins.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), coins.len(), "coins must be distinct");
        Self { coins, target }
    }

    /// `T(v)` for `0 ..= target`, with [`INF`] for unreachable amounts.
    pub fn table(&self) -> Vec<i64> {
        let mut t = vec![INF; self.target + 1];
        t[0] = 0;
        for v in 1..=self.target {
            for &c in &self.coins {
                let c = c as usize;
                if c <= v && t[v - c] < INF && t[v - c] + 1 < t[v] {
                    t[v] = t[v - c] + 1;
                }
            }
        }
        t
    }
}

impl DpProblem for CoinChangeProblem {
    fn solve(&self) -> Graph {
        let v_max = self.target;
        let t = self.table();
        let coin_list = self
            .coins
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let mut g = GraphBuilder::new(Shape::Chain).with_note(format!(
            "Left → right: T(v) depends on T(v−c) for each coin c ∈ {{{coin_list}}}"
        ));
        for (v, &cost) in t.iter().enumerate() {
            g.node(v, cost_value(cost), Layout::Chain { index: v }, format!("${v}"));
        }
        for v in 1..=v_max {
            for &c in &self.coins {
                if c as usize <= v {
                    g.edge(v - c as usize, v, EdgeKind::Coin(c));
                }
            }
        }

        g.set_answer(cost_value(t[v_max]));
        if t[v_max] < INF {
            let trace = extract_path(v_max, v_max + 1, |v| {
                self.coins
                    .iter()
                    .find(|&&c| {
                        let c = c as usize;
                        c <= v && t[v - c] < INF && t[v - c] + 1 == t[v]
                    })
                    .map(|&c| (v - c as usize, EdgeKind::Coin(c)))
            });
            g.apply_trace(&trace);
        }
        g.build()
    }
}
