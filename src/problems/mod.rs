//! Built-in problems, one module per recurrence.
//!
//! Every type here implements [`DpProblem`](crate::traits::DpProblem) and
//! carries its own input; `Default` gives the small example the registry
//! shows. Grouped by DAG family:
//! - Linear chain: [`lis`], [`max_subarray`], [`coin_change`], [`oscillating`].
//! - 2D grid: [`lcs`], [`edit_distance`], [`max_square`], [`palindrome`],
//!   [`lc_substring`].
//! - Pseudo-polynomial: [`knapsack`], [`subset_sum`], [`unbounded_knapsack`],
//!   [`floyd_warshall`].
//! - Interval pyramid: [`matrix_chain`], [`interval_lps`], [`optimal_bst`],
//!   [`stick_cutting`].
//! - Tree: [`house_robber`], [`diameter`], [`max_path_sum`].
//! - Bitmask: [`tsp`], [`can_i_win`], [`beautiful`].

pub mod beautiful;
pub mod can_i_win;
pub mod coin_change;
pub mod diameter;
pub mod edit_distance;
pub mod floyd_warshall;
pub mod house_robber;
pub mod interval_lps;
pub mod knapsack;
pub mod lc_substring;
pub mod lcs;
pub mod lis;
pub mod matrix_chain;
pub mod max_path_sum;
pub mod max_square;
pub mod max_subarray;
pub mod optimal_bst;
pub mod oscillating;
pub mod palindrome;
pub mod stick_cutting;
pub mod subset_sum;
pub mod tsp;
pub mod unbounded_knapsack;
