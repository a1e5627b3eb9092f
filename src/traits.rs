//! Core trait for a DP instance that can explain itself as a graph.
//!
//! Implement [`DpProblem`] for a struct that captures one concrete instance
//! (a sequence, a pair of strings, an item list, a tree, a distance matrix).
//! The trait encodes the contract every solver in [`crate::problems`] meets:
//! - Table fill: evaluate the textbook recurrence over every state.
//! - Dependency DAG: one node per state, one edge per dependency the general
//!   transition rule *considers*, not only the ones the optimum uses.
//! - Trace: walk from the answer state(s) with a fixed tie-break order and
//!   mark the states and dependencies of one optimal solution.
//!
//! Solving is pure: no I/O, no shared state, and the same instance always
//! yields an identical [`Graph`].

use crate::graph::{Graph, Value};

/// A fixed DP instance.
///
/// `Default` on every built-in problem yields the small illustrative input
/// the registry uses; `new` constructors accept other inputs so the same code
/// can be checked against brute-force oracles.
pub trait DpProblem {
    /// Fill the table, build the dependency graph and mark the trace.
    fn solve(&self) -> Graph;

    /// The problem's answer. Defaults to solving and reading
    /// [`Graph::answer`]; implementations may compute it more directly.
    fn answer(&self) -> Value {
        self.solve().answer
    }
}
