//! Shared backtrace utilities.
//!
//! Every solver recovers one optimal solution the same way: start at the
//! answer state and repeatedly ask a problem-specific selector for the
//! dependency that reproduces the recorded value. The selector encodes the
//! problem's tie-break order; this module owns the walking, the bookkeeping
//! of visited states and links, and the step budget.
//!
//! Links always point in dependency direction (`from` is read by `to`), the
//! same direction as graph edges, regardless of which way the walk goes.

use std::fmt::Debug;

use crate::graph::EdgeKind;

/// One traced dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<S> {
    pub from: S,
    pub to: S,
    pub kind: EdgeKind,
}

/// States visited by a trace, in visit order, plus the links between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<S> {
    pub states: Vec<S>,
    pub links: Vec<Link<S>>,
}

impl<S> Trace<S> {
    pub fn empty() -> Self {
        Self {
            states: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Translate problem states into another key space (usually node ids).
    pub fn map<T>(self, f: impl Fn(S) -> T) -> Trace<T>
    where
        S: Copy,
    {
        Trace {
            states: self.states.iter().map(|&s| f(s)).collect(),
            links: self
                .links
                .iter()
                .map(|l| Link {
                    from: f(l.from),
                    to: f(l.to),
                    kind: l.kind,
                })
                .collect(),
        }
    }
}

/// Walk a single chain of dependencies from `start`.
///
/// `select` returns the chosen dependency of a state, or `None` at a base
/// case. The walk may take at most `budget` steps; exceeding it means the
/// selector cycles, which is a solver bug.
///
/// # Panics
/// Panics if the budget is exhausted.
pub fn extract_path<S, F>(start: S, budget: usize, mut select: F) -> Trace<S>
where
    S: Copy + Debug,
    F: FnMut(S) -> Option<(S, EdgeKind)>,
{
    let mut states = vec![start];
    let mut links = Vec::new();
    let mut current = start;

    while let Some((next, kind)) = select(current) {
        assert!(
            links.len() < budget,
            "trace from {start:?} did not reach a base case within {budget} steps"
        );
        links.push(Link {
            from: next,
            to: current,
            kind,
        });
        states.push(next);
        current = next;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(steps = links.len(), "extracted path trace");

    Trace { states, links }
}

/// Walk a tree of dependencies from `root` (split-tree and tree DPs).
///
/// `select` returns every dependency the optimal choice at a state uses,
/// in the order they should be visited. Traversal is depth-first preorder.
///
/// # Panics
/// Panics if more than `budget` states are visited.
pub fn extract_tree<S, F>(root: S, budget: usize, mut select: F) -> Trace<S>
where
    S: Copy + Debug,
    F: FnMut(S) -> Vec<(S, EdgeKind)>,
{
    let mut states = Vec::new();
    let mut links = Vec::new();
    let mut stack = vec![root];

    while let Some(state) = stack.pop() {
        assert!(
            states.len() < budget,
            "tree trace from {root:?} visited more than {budget} states"
        );
        states.push(state);
        let deps = select(state);
        for &(dep, kind) in &deps {
            links.push(Link {
                from: dep,
                to: state,
                kind,
            });
        }
        stack.extend(deps.into_iter().rev().map(|(dep, _)| dep));
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(states = states.len(), "extracted tree trace");

    Trace { states, links }
}

/// Position and value of the first strict maximum.
///
/// Scanning order is the iteration order, so "first" means the earliest
/// state in whatever order the caller enumerates (row-major for grids,
/// post-order for trees).
pub fn argmax_first<T, I>(values: I) -> Option<(usize, T)>
where
    T: PartialOrd + Copy,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(usize, T)> = None;
    for (pos, v) in values.into_iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((pos, v)),
        }
    }
    best
}
