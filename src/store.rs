//! Editor-side live graph store.
//!
//! The engine itself is stateless; this store is the long-lived, mutable
//! graph an interactive editor owns between conversions. It keeps the
//! snapshot invariants true at all times (unique ids, resolvable
//! endpoints, no duplicate edges under the current directedness, weights
//! consistent with the weighted flag), so [`current_snapshot`] can be
//! encoded without further checks.
//!
//! [`current_snapshot`]: LiveStore::current_snapshot

use crate::canonical::{canonicalize, dedup_key};
use crate::types::{AdjustmentReport, Edge, GraphConfig, GraphSnapshot, Node, NodeId};
use crate::DEFAULT_WEIGHT;

/// Live, mutable graph with an explicit next-id counter.
///
/// Node ids are handed out sequentially and never reused within a session;
/// loading a snapshot re-seeds the counter past the largest loaded id.
#[derive(Debug, Clone)]
pub struct LiveStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    config: GraphConfig,
    next_id: u64,
}

impl Default for LiveStore {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl LiveStore {
    /// Create an empty store under the given config.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            config,
            next_id: 1,
        }
    }

    /// The store's current config.
    pub fn config(&self) -> GraphConfig {
        self.config
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Add a node with the next free id.
    ///
    /// The label defaults to `"Node {id}"` when none is given.
    pub fn add_node(&mut self, label: Option<String>) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        self.nodes.push(match label {
            Some(label) => Node::new(id, label),
            None => Node::synthesized(id),
        });
        id
    }

    /// Remove a node and every edge touching it.
    ///
    /// Returns false when no such node exists. The id counter is not
    /// rewound; removed ids stay retired for the session.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| e.from != id && e.to != id);
        true
    }

    /// Add an edge between two existing nodes.
    ///
    /// Under a weighted config the edge carries `weight`, or the default
    /// when none is given; under an unweighted config any weight is
    /// ignored. Returns false, without modifying anything, when either
    /// endpoint is unknown or an equivalent edge already exists under the
    /// current directedness.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Option<String>) -> bool {
        if !self.contains_node(from) || !self.contains_node(to) {
            return false;
        }
        let key = dedup_key(from, to, self.config.directed);
        let duplicate = self
            .edges
            .iter()
            .any(|e| dedup_key(e.from, e.to, self.config.directed) == key);
        if duplicate {
            return false;
        }
        self.edges.push(if self.config.weighted {
            let weight = weight
                .filter(|w| !w.is_empty())
                .unwrap_or_else(|| DEFAULT_WEIGHT.to_string());
            Edge::weighted(from, to, weight)
        } else {
            Edge::new(from, to)
        });
        true
    }

    /// Whether a node with this id exists.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Drop every node and edge and restart ids from 1.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.next_id = 1;
    }

    /// Materialize the current graph as a snapshot.
    pub fn current_snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::new(self.nodes.clone(), self.edges.clone())
    }

    /// Replace the whole graph with an imported snapshot.
    ///
    /// The snapshot is trusted to already be canonical for the store's
    /// config, which is what [`crate::convert::import_from`] returns. The
    /// id counter restarts just past the largest loaded id.
    pub fn replace(&mut self, snapshot: GraphSnapshot) {
        self.next_id = snapshot.max_node_id().map_or(1, |id| id.get() + 1);
        self.nodes = snapshot.nodes;
        self.edges = snapshot.edges;
    }

    /// Switch config and re-canonicalize the live edges for it.
    ///
    /// This is the whole implementation of an editor's directed/weighted
    /// toggles; the returned report says what the switch changed.
    pub fn set_config(&mut self, config: GraphConfig) -> AdjustmentReport {
        self.config = config;
        let (edges, report) = canonicalize(std::mem::take(&mut self.edges), config);
        self.edges = edges;
        report
    }
}
