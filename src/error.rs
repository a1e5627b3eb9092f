//! Error types.
//!
//! Solvers never fail at runtime: their inputs are fixed and well-formed. The
//! errors here cover the seams around them: looking a problem up by key,
//! validating a produced [`Graph`](crate::graph::Graph) in tests and tooling,
//! and rejecting nonsensical recurrence parameters in [`crate::master`].

use thiserror::Error;

use crate::graph::{EdgeKind, NodeId};

/// Structural defect found by [`Graph::validate`](crate::graph::Graph::validate).
///
/// Any of these indicates a bug in a solver, never a property of its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node id {0} appears more than once")]
    DuplicateNode(NodeId),
    #[error("edge {from} -> {to} references a missing node")]
    DanglingEdge { from: NodeId, to: NodeId },
    #[error("edge {from} -> {to} ({kind:?}) appears more than once")]
    DuplicateEdge {
        from: NodeId,
        to: NodeId,
        kind: EdgeKind,
    },
    #[error("node {0} carries a layout hint that does not match the graph shape")]
    LayoutMismatch(NodeId),
    #[error("unreachable node {0} is marked as part of the optimal trace")]
    UnreachableOnPath(NodeId),
    #[error("trace edge {from} -> {to} touches a node outside the trace")]
    PathEdgeOffPath { from: NodeId, to: NodeId },
    #[error("trace edge {from} -> {to} closes a cycle")]
    CyclicTrace { from: NodeId, to: NodeId },
    #[error("trace splits into {components} disconnected pieces")]
    DisconnectedTrace { components: usize },
    #[error("dependency edges contain a cycle")]
    CyclicDependencies,
}

/// Errors surfaced by the public lookup and configuration APIs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DpError {
    #[error("unknown problem '{0}'")]
    UnknownProblem(String),
    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),
    #[error("invalid recurrence: {0}")]
    InvalidRecurrence(String),
    #[error("graph for '{key}' is malformed: {source}")]
    MalformedGraph {
        key: &'static str,
        #[source]
        source: GraphError,
    },
}

pub type Result<T, E = DpError> = std::result::Result<T, E>;
