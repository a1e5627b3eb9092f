//! Dynamic programs as explicit dependency DAGs.
//!
//! Every solver in this crate fills the table of a classic dynamic program,
//! extracts one optimal solution, and returns a normalized [`Graph`]: one node
//! per subproblem, one edge per dependency the recurrence considers, and
//! `on_path` marks for the dependencies the optimum actually uses. A renderer
//! needs nothing else to draw the DAG as a chain, a grid, a tree or a bitmask
//! hypercube.
//!
//! ## Core idea
//! 1. Implement [`DpProblem`] for a struct holding one concrete instance.
//! 2. Build the graph with [`GraphBuilder`], keyed by stable node ids and
//!    tagged with a [`graph::Layout`] hint that matches the graph's
//!    [`graph::Shape`].
//! 3. Walk the table back from the answer with [`trace::extract_path`] or
//!    [`trace::extract_tree`] and apply the result.
//!
//! ## Quick start
//! ```
//! use dp_dag::{registry, DpProblem, problems::lis::LisProblem};
//!
//! let graph = LisProblem::default().solve();
//! assert_eq!(graph.answer.as_int(), Some(4));
//! assert!(graph.validate().is_ok());
//!
//! // Or by key, through the registry.
//! let edit = registry::solve("edit").unwrap();
//! assert_eq!(edit.answer.as_int(), Some(2));
//! ```
//!
//! ## Built-in problems
//! The [`registry`] lists 23 problems in six pattern families: linear
//! chains, grids, pseudo-polynomial tables, interval pyramids, trees and
//! bitmask hypercubes. [`master`] adds a Master Theorem calculator for the
//! divide-and-conquer recurrences the same material discusses.
//!
//! ## Features
//! - `parallel`: solve the registry with rayon.
//! - `tracing`: spans around registry solves and trace extraction.
//! - `heavy`: larger randomized runs in the integration tests.

pub mod builder;
pub mod error;
pub mod graph;
pub mod master;
pub mod problems;
pub mod registry;
pub mod trace;
pub mod traits;
pub mod tree;
pub mod utils;

pub use crate::builder::GraphBuilder;
pub use crate::error::{DpError, GraphError, Result};
pub use crate::graph::{Edge, EdgeKind, Graph, Node, NodeId, Shape, Value};
pub use crate::registry::{Descriptor, Pattern};
pub use crate::traits::DpProblem;
