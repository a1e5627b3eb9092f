//! Index-backed graph construction.
//!
//! Solvers push nodes and edges in traversal order, then mark a trace by key.
//! Both marks are hash lookups into indices built alongside the vectors, so
//! no solver ever scans the edge list to find the edge it wants to highlight.

use std::collections::HashMap;

use crate::graph::{Choice, Edge, EdgeKind, Graph, Layout, Node, NodeId, Shape, Value};
use crate::trace::Trace;

pub struct GraphBuilder {
    shape: Shape,
    note: String,
    answer: Value,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: HashMap<NodeId, usize>,
    edge_index: HashMap<(NodeId, NodeId, EdgeKind), usize>,
}

impl GraphBuilder {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            note: String::new(),
            answer: Value::Unreachable,
            nodes: Vec::new(),
            edges: Vec::new(),
            node_index: HashMap::new(),
            edge_index: HashMap::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    pub fn set_answer(&mut self, answer: impl Into<Value>) {
        self.answer = answer.into();
    }

    /// Append a node and return it for optional `detail`/`choice` tweaks.
    pub fn node(
        &mut self,
        id: NodeId,
        value: impl Into<Value>,
        layout: Layout,
        label: impl Into<String>,
    ) -> &mut Node {
        let pos = self.nodes.len();
        let previous = self.node_index.insert(id, pos);
        debug_assert!(previous.is_none(), "node {id} added twice");
        self.nodes.push(Node {
            id,
            value: value.into(),
            on_path: false,
            label: label.into(),
            detail: None,
            choice: None,
            layout,
        });
        &mut self.nodes[pos]
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node_index.contains_key(&id)
    }

    pub fn value(&self, id: NodeId) -> Option<Value> {
        self.node_index.get(&id).map(|&p| self.nodes[p].value)
    }

    pub fn edge(&mut self, from: NodeId, to: NodeId, kind: EdgeKind) {
        let pos = self.edges.len();
        let previous = self.edge_index.insert((from, to, kind), pos);
        debug_assert!(previous.is_none(), "edge {from}->{to} {kind:?} added twice");
        self.edges.push(Edge {
            from,
            to,
            kind,
            on_path: false,
        });
    }

    pub fn mark_node(&mut self, id: NodeId) {
        match self.node_index.get(&id) {
            Some(&p) => self.nodes[p].on_path = true,
            None => debug_assert!(false, "trace names missing node {id}"),
        }
    }

    pub fn mark_edge(&mut self, from: NodeId, to: NodeId, kind: EdgeKind) {
        match self.edge_index.get(&(from, to, kind)) {
            Some(&p) => self.edges[p].on_path = true,
            None => debug_assert!(false, "trace names missing edge {from}->{to} {kind:?}"),
        }
    }

    pub fn set_choice(&mut self, id: NodeId, choice: Choice) {
        if let Some(&p) = self.node_index.get(&id) {
            self.nodes[p].choice = Some(choice);
        }
    }

    /// Mark every state and link of a trace already mapped to node ids.
    pub fn apply_trace(&mut self, trace: &Trace<NodeId>) {
        for &id in &trace.states {
            self.mark_node(id);
        }
        for link in &trace.links {
            self.mark_edge(link.from, link.to, link.kind);
        }
    }

    pub fn build(self) -> Graph {
        Graph {
            nodes: self.nodes,
            edges: self.edges,
            shape: self.shape,
            note: self.note,
            answer: self.answer,
        }
    }
}
