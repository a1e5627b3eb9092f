//! The normalized graph every solver returns.
//!
//! A [`Graph`] is a snapshot of one DP instance: one [`Node`] per table entry
//! (or reachable state), one [`Edge`] per dependency the recurrence considers,
//! and `on_path` marks for the dependencies a single optimal solution actually
//! uses. Renderers consume it read-only and derive coordinates purely from
//! the [`Layout`] hints, dispatching on the [`Shape`] tag.
//!
//! The serde representation is the wire format handed to renderers:
//! snake_case fields, internally tagged `shape`/`layout` (`"kind"`), and
//! [`Value::Unreachable`] encoded as `null`.

use std::collections::{HashMap, HashSet};
use std::fmt;

use petgraph::algo::is_cyclic_directed;
use petgraph::graphmap::DiGraphMap;
use petgraph::unionfind::UnionFind;
use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Unique key of a node within one graph.
///
/// Grids use `row * cols + col`, bitmask DPs use the mask (times the column
/// count when there is a "last element" dimension), trees use the heap index.
pub type NodeId = usize;

/// A computed DP value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Bool(bool),
    /// Sentinel for states with no feasible solution (infinite cost).
    Unreachable,
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Value::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        !matches!(self, Value::Unreachable)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Bool(true) => f.write_str("T"),
            Value::Bool(false) => f.write_str("F"),
            Value::Unreachable => f.write_str("∞"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Which recurrence branch an edge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Generic "extends a subsequence ending earlier" arc (LIS).
    Link,
    /// Extend the running segment by one element (Kadane).
    Extend,
    /// Coin of the given denomination.
    Coin(u64),
    Up,
    Down,
    Diagonal,
    Vertical,
    Horizontal,
    Take,
    Skip,
    /// Item by input index (unbounded knapsack).
    Item(usize),
    /// Route through an intermediate vertex (Floyd-Warshall).
    Via,
    /// Left half of a split interval.
    Left,
    /// Right half of a split interval.
    Right,
    /// Both ends matched, interval shrinks on both sides.
    Inner,
    /// Drop the left end of the interval.
    ShrinkLeft,
    /// Drop the right end of the interval.
    ShrinkRight,
    Child,
    /// Extend a partial tour by one city.
    Visit,
    /// Game move: pick one more number.
    Move,
    /// Place one more number in the next position.
    Place,
}

/// Which of two interleaved value layers a trace used at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    Up,
    Down,
    Rob,
    Skip,
}

/// Per-node layout hint; its variant always matches the graph's [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layout {
    Chain { index: usize },
    Grid { row: usize, col: usize },
    Tree { x: f64, depth: usize },
    Mask { row: usize, col: usize, mask: u32 },
}

/// One row of a bitmask layout: a subset, in popcount-then-value order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskRow {
    pub mask: u32,
    pub popcount: u32,
    pub label: String,
}

/// Rendering family plus the metadata that family needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Chain,
    Grid {
        rows: usize,
        cols: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        row_labels: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        col_labels: Option<Vec<String>>,
    },
    Tree {
        depth: usize,
    },
    Bitmask {
        cols: usize,
        rows: Vec<MaskRow>,
    },
}

impl Shape {
    /// Plain grid without axis labels.
    pub fn grid(rows: usize, cols: usize) -> Self {
        Shape::Grid {
            rows,
            cols,
            row_labels: None,
            col_labels: None,
        }
    }

    /// Grid with labels on both axes.
    pub fn labeled_grid(rows: usize, cols: usize, row_labels: Vec<String>, col_labels: Vec<String>) -> Self {
        debug_assert_eq!(row_labels.len(), rows);
        debug_assert_eq!(col_labels.len(), cols);
        Shape::Grid {
            rows,
            cols,
            row_labels: Some(row_labels),
            col_labels: Some(col_labels),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Chain => "chain",
            Shape::Grid { .. } => "grid",
            Shape::Tree { .. } => "tree",
            Shape::Bitmask { .. } => "bitmask",
        }
    }

    /// Whether `layout` is a valid hint for this shape.
    pub fn accepts(&self, layout: &Layout) -> bool {
        match (self, layout) {
            (Shape::Chain, Layout::Chain { .. }) => true,
            (Shape::Grid { rows, cols, .. }, Layout::Grid { row, col }) => row < rows && col < cols,
            (Shape::Tree { depth }, Layout::Tree { depth: d, .. }) => d < depth,
            (Shape::Bitmask { cols, rows }, Layout::Mask { row, col, mask }) => {
                col < cols && rows.get(*row).is_some_and(|r| r.mask == *mask)
            }
            _ => false,
        }
    }
}

/// One DP subproblem instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub value: Value,
    pub on_path: bool,
    /// Caption derived from the input (e.g. `val=5`, `$3`, `1011`).
    pub label: String,
    /// Secondary values for multi-layer states (e.g. `rob=7 skip=3`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice: Option<Choice>,
    pub layout: Layout,
}

/// Dependency `from` → `to`: the value at `to` reads the value at `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub kind: EdgeKind,
    pub on_path: bool,
}

/// Immutable solver output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub shape: Shape,
    /// Explanation of the DAG topology for this instance.
    pub note: String,
    /// The problem's answer (a node value, or a value combined from several).
    pub answer: Value,
}

impl Graph {
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn value(&self, id: NodeId) -> Option<Value> {
        self.node(id).map(|n| n.value)
    }

    pub fn edge(&self, from: NodeId, to: NodeId, kind: EdgeKind) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|e| e.from == from && e.to == to && e.kind == kind)
    }

    /// Edges into `id`, in construction order.
    pub fn incoming(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.to == id)
    }

    pub fn path_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|n| n.on_path)
    }

    pub fn path_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(|e| e.on_path)
    }

    /// Sorted ids of the traced nodes.
    pub fn path_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.path_nodes().map(|n| n.id).collect();
        ids.sort_unstable();
        ids
    }

    /// True when the trace is a single chain: every traced node has at most
    /// one traced edge in and one traced edge out.
    pub fn trace_is_simple_path(&self) -> bool {
        let mut indeg: HashMap<NodeId, usize> = HashMap::new();
        let mut outdeg: HashMap<NodeId, usize> = HashMap::new();
        for e in self.path_edges() {
            *indeg.entry(e.to).or_default() += 1;
            *outdeg.entry(e.from).or_default() += 1;
        }
        indeg.values().all(|&d| d <= 1) && outdeg.values().all(|&d| d <= 1)
    }

    /// Check the structural invariants every solver must uphold.
    pub fn validate(&self) -> Result<(), GraphError> {
        let mut index: HashMap<NodeId, usize> = HashMap::with_capacity(self.nodes.len());
        let mut deps: DiGraphMap<NodeId, ()> = DiGraphMap::with_capacity(self.nodes.len(), self.edges.len());

        for (pos, node) in self.nodes.iter().enumerate() {
            if index.insert(node.id, pos).is_some() {
                return Err(GraphError::DuplicateNode(node.id));
            }
            if !self.shape.accepts(&node.layout) {
                return Err(GraphError::LayoutMismatch(node.id));
            }
            if node.on_path && !node.value.is_reachable() {
                return Err(GraphError::UnreachableOnPath(node.id));
            }
            deps.add_node(node.id);
        }

        let mut seen = HashSet::with_capacity(self.edges.len());
        for e in &self.edges {
            let (Some(&a), Some(&b)) = (index.get(&e.from), index.get(&e.to)) else {
                return Err(GraphError::DanglingEdge {
                    from: e.from,
                    to: e.to,
                });
            };
            if !seen.insert((e.from, e.to, e.kind)) {
                return Err(GraphError::DuplicateEdge {
                    from: e.from,
                    to: e.to,
                    kind: e.kind,
                });
            }
            if e.on_path && !(self.nodes[a].on_path && self.nodes[b].on_path) {
                return Err(GraphError::PathEdgeOffPath {
                    from: e.from,
                    to: e.to,
                });
            }
            deps.add_edge(e.from, e.to, ());
        }

        if is_cyclic_directed(&deps) {
            return Err(GraphError::CyclicDependencies);
        }

        self.check_trace(&index)
    }

    /// The traced subgraph must be one tree (a path is a special case).
    fn check_trace(&self, index: &HashMap<NodeId, usize>) -> Result<(), GraphError> {
        let traced: Vec<usize> = (0..self.nodes.len())
            .filter(|&p| self.nodes[p].on_path)
            .collect();
        if traced.is_empty() {
            return Ok(());
        }

        let mut sets = UnionFind::<usize>::new(self.nodes.len());
        for e in self.path_edges() {
            // endpoints were resolved by `validate`
            let (a, b) = (index[&e.from], index[&e.to]);
            if !sets.union(a, b) {
                return Err(GraphError::CyclicTrace {
                    from: e.from,
                    to: e.to,
                });
            }
        }

        let components: HashSet<usize> = traced.iter().map(|&p| sets.find(p)).collect();
        if components.len() > 1 {
            return Err(GraphError::DisconnectedTrace {
                components: components.len(),
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_node(id: NodeId, value: i64, on_path: bool) -> Node {
        Node {
            id,
            value: Value::Int(value),
            on_path,
            label: String::new(),
            detail: None,
            choice: None,
            layout: Layout::Chain { index: id },
        }
    }

    fn edge(from: NodeId, to: NodeId, on_path: bool) -> Edge {
        Edge {
            from,
            to,
            kind: EdgeKind::Link,
            on_path,
        }
    }

    fn chain(nodes: Vec<Node>, edges: Vec<Edge>) -> Graph {
        Graph {
            nodes,
            edges,
            shape: Shape::Chain,
            note: String::new(),
            answer: Value::Int(0),
        }
    }

    #[test]
    fn accepts_connected_trace() {
        let g = chain(
            vec![chain_node(0, 1, true), chain_node(1, 2, true), chain_node(2, 1, false)],
            vec![edge(0, 1, true), edge(0, 2, false)],
        );
        assert_eq!(g.validate(), Ok(()));
        assert!(g.trace_is_simple_path());
        assert_eq!(g.path_ids(), vec![0, 1]);
    }

    #[test]
    fn rejects_dangling_and_duplicate_edges() {
        let g = chain(vec![chain_node(0, 1, false)], vec![edge(0, 7, false)]);
        assert_eq!(g.validate(), Err(GraphError::DanglingEdge { from: 0, to: 7 }));

        let g = chain(
            vec![chain_node(0, 1, false), chain_node(1, 1, false)],
            vec![edge(0, 1, false), edge(0, 1, false)],
        );
        assert!(matches!(g.validate(), Err(GraphError::DuplicateEdge { .. })));
    }

    #[test]
    fn rejects_disconnected_trace() {
        let g = chain(
            vec![chain_node(0, 1, true), chain_node(1, 1, false), chain_node(2, 1, true)],
            vec![edge(0, 1, false), edge(1, 2, false)],
        );
        assert_eq!(g.validate(), Err(GraphError::DisconnectedTrace { components: 2 }));
    }

    #[test]
    fn rejects_cycles() {
        let g = chain(
            vec![chain_node(0, 1, false), chain_node(1, 1, false)],
            vec![edge(0, 1, false), edge(1, 0, false)],
        );
        assert_eq!(g.validate(), Err(GraphError::CyclicDependencies));
    }

    #[test]
    fn rejects_unreachable_on_path_and_layout_mismatch() {
        let mut n = chain_node(0, 0, true);
        n.value = Value::Unreachable;
        assert_eq!(chain(vec![n], vec![]).validate(), Err(GraphError::UnreachableOnPath(0)));

        let mut n = chain_node(0, 0, false);
        n.layout = Layout::Grid { row: 0, col: 0 };
        assert_eq!(chain(vec![n], vec![]).validate(), Err(GraphError::LayoutMismatch(0)));
    }

    #[test]
    fn unreachable_serializes_as_null() {
        assert_eq!(serde_json::to_string(&Value::Unreachable).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Value::Int(-3)).unwrap(), "-3");
        assert_eq!(serde_json::from_str::<Value>("true").unwrap(), Value::Bool(true));
        assert_eq!(serde_json::from_str::<Value>("null").unwrap(), Value::Unreachable);
    }
}
