//! The serialization-boundary view of a graph.

use super::edge::Edge;
use super::node::{Node, NodeId};
use serde::{Deserialize, Serialize};

/// Plain-data view of a graph as it crosses the serialization boundary.
///
/// Invariants (established by the validator and the canonicalizer, assumed
/// by every encoder):
///
/// - node ids are unique within `nodes`
/// - every edge endpoint refers to a node present in `nodes`
/// - under the config the snapshot was canonicalized for, either every edge
///   carries a weight or none does, and no two edges are duplicates
///
/// `nodes` and `edges` keep their original order; decoders that synthesize
/// nodes list them in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// All nodes in the graph.
    pub nodes: Vec<Node>,
    /// All edges in the graph.
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    /// Create a snapshot from parts.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Snapshot with no nodes and no edges.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether a node with this id is present.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Largest node id in the snapshot, if any nodes exist.
    ///
    /// Editors use this to re-seed their id counter after loading a
    /// snapshot, so freshly created nodes never collide with loaded ones.
    pub fn max_node_id(&self) -> Option<NodeId> {
        self.nodes.iter().map(|n| n.id).max()
    }

    /// Deterministic content fingerprint of this snapshot.
    ///
    /// Equal snapshots always produce equal fingerprints, so two
    /// independently obtained copies can be compared without byte-level
    /// diffing. See [`crate::canonical::canonical_hash_hex`].
    pub fn fingerprint(&self) -> String {
        crate::canonical::canonical_hash_hex(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_node_snapshot() -> GraphSnapshot {
        GraphSnapshot::new(
            vec![Node::synthesized(NodeId::new(1)), Node::synthesized(NodeId::new(5))],
            vec![Edge::new(NodeId::new(1), NodeId::new(5))],
        )
    }

    #[test]
    fn test_counts() {
        let snapshot = two_node_snapshot();
        assert_eq!(snapshot.node_count(), 2);
        assert_eq!(snapshot.edge_count(), 1);
    }

    #[test]
    fn test_max_node_id() {
        assert_eq!(GraphSnapshot::empty().max_node_id(), None);
        assert_eq!(two_node_snapshot().max_node_id(), Some(NodeId::new(5)));
    }

    #[test]
    fn test_fingerprint_is_stable_and_content_sensitive() {
        let a = two_node_snapshot();
        let b = two_node_snapshot();
        assert_eq!(a.fingerprint(), b.fingerprint());

        let mut c = two_node_snapshot();
        c.nodes[0].label = "renamed".to_string();
        assert_ne!(a.fingerprint(), c.fingerprint());
    }
}
