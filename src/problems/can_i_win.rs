//! "Can I win": two players alternately pick unused numbers from `1..=N`;
//! whoever brings the running total to the target wins.
//!
//! The state is the set of used numbers. `T(m)` says whether the player to
//! move can force a win:
//! - `T(m) = false` once `sum(m) ≥ target` (the previous player just won),
//! - otherwise `T(m) = ∃ i ∉ m : ¬T(m ∪ {i})`.
//!
//! Only states reachable through unfinished games appear. A state reads its
//! successors, so edges run from `m ∪ {i}` back to `m`. The trace is the
//! principal variation: a winner plays its first winning move, a loser its
//! first legal move, until the game ends.

use std::collections::BTreeSet;

use crate::builder::GraphBuilder;
use crate::graph::{EdgeKind, Graph, Layout, Shape, Value};
use crate::trace::extract_path;
use crate::traits::DpProblem;
use crate::utils::{mask_rows, masks_by_popcount};

#[derive(Clone, Debug)]
pub struct CanIWinProblem {
    pub max_choosable: usize,
    pub target: u32,
}

impl Default for CanIWinProblem {
    fn default() -> Self {
        Self::new(4, 6)
    }
}

impl CanIWinProblem {
    pub fn new(max_choosable: usize, target: u32) -> Self {
        assert!((1..=16).contains(&max_choosable), "choose from 1..=16 numbers");
        Self {
            max_choosable,
            target,
        }
    }

    fn sum(&self, mask: usize) -> u32 {
        (0..self.max_choosable)
            .filter(|&i| mask & (1 << i) != 0)
            .map(|i| i as u32 + 1)
            .sum()
    }

    pub fn is_terminal(&self, mask: usize) -> bool {
        self.sum(mask) >= self.target
    }

    fn moves(&self, mask: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.max_choosable)
            .filter(move |&i| mask & (1 << i) == 0)
            .map(move |i| mask | (1 << i))
    }

    /// Win/lose for every mask, evaluated from full masks downwards.
    pub fn table(&self) -> Vec<bool> {
        let masks = 1usize << self.max_choosable;
        let mut win = vec![false; masks];
        for mask in (0..masks).rev() {
            if !self.is_terminal(mask) {
                win[mask] = self.moves(mask).any(|next| !win[next]);
            }
        }
        win
    }

    /// Masks reachable from the empty set without passing a finished game.
    pub fn reachable(&self) -> BTreeSet<usize> {
        let mut seen = BTreeSet::from([0usize]);
        let mut stack = vec![0usize];
        while let Some(mask) = stack.pop() {
            if self.is_terminal(mask) {
                continue;
            }
            for next in self.moves(mask) {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        seen
    }
}

impl DpProblem for CanIWinProblem {
    fn solve(&self) -> Graph {
        let n = self.max_choosable;
        let win = self.table();
        let live = self.reachable();

        let masks = masks_by_popcount(n, true);
        let shape = Shape::Bitmask {
            cols: 1,
            rows: mask_rows(&masks, n),
        };
        let verdict = if win[0] { "YES" } else { "NO" };
        let mut g = GraphBuilder::new(shape).with_note(format!(
            "Can first player win? {verdict}. Mask tracks used numbers. Each state: can current player force a win?"
        ));
        for (row, &m) in masks.iter().enumerate() {
            let mask = m as usize;
            if !live.contains(&mask) {
                continue;
            }
            let label = match (self.is_terminal(mask), win[mask]) {
                (true, _) => format!("sum={}", self.sum(mask)),
                (false, true) => "WIN".to_string(),
                (false, false) => "LOSE".to_string(),
            };
            g.node(mask, Value::Bool(win[mask]), Layout::Mask { row, col: 0, mask: m }, label);
        }
        for &m in &masks {
            let mask = m as usize;
            if !live.contains(&mask) || self.is_terminal(mask) {
                continue;
            }
            for next in self.moves(mask) {
                g.edge(next, mask, EdgeKind::Move);
            }
        }
        g.set_answer(Value::Bool(win[0]));

        let trace = extract_path(0usize, n, |mask| {
            if self.is_terminal(mask) {
                return None;
            }
            let next = if win[mask] {
                self.moves(mask).find(|&next| !win[next])
            } else {
                self.moves(mask).next()
            };
            next.map(|next| (next, EdgeKind::Move))
        });
        g.apply_trace(&trace);
        g.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_player_wins_embedded_game() {
        let g = CanIWinProblem::default().solve();
        assert_eq!(g.answer, Value::Bool(true));
        assert!(g.note.contains("YES"));
        assert!(g.trace_is_simple_path());
        // trace ends at a finished game
        let p = CanIWinProblem::default();
        let last = g.path_ids().into_iter().max_by_key(|&m| (m as u32).count_ones()).unwrap();
        assert!(p.is_terminal(last));
        assert_eq!(g.validate(), Ok(()));
    }

    #[test]
    fn unreachable_target_loses() {
        // 1 + 2 = 3 never reaches 4, and nobody can move after both picks
        let g = CanIWinProblem::new(2, 4).solve();
        assert_eq!(g.answer, Value::Bool(false));
        assert_eq!(g.nodes.len(), 4);
    }

    #[test]
    fn immediate_win() {
        let g = CanIWinProblem::new(5, 5).solve();
        assert_eq!(g.answer, Value::Bool(true));
        // picking 5 ends the game on the first move
        assert_eq!(g.path_ids(), vec![0, 16]);
    }
}
