//! Edge types for graph snapshots.

use super::node::NodeId;
use serde::{Deserialize, Serialize};

/// Edge in a graph snapshot.
///
/// Stored as a directed pair even when the graph is configured as
/// undirected; direction is interpreted (or ignored) by the canonicalizer
/// and the codecs according to the active [`GraphConfig`].
///
/// Implements `Ord` for deterministic ordering: (from, to, weight).
///
/// [`GraphConfig`]: super::config::GraphConfig
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Source node id.
    pub from: NodeId,
    /// Target node id.
    pub to: NodeId,
    /// Edge weight, kept as its display string.
    ///
    /// `Some` for every edge of a weighted graph, `None` for every edge of
    /// an unweighted one; the canonicalizer enforces this split.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl Edge {
    /// Create an unweighted edge.
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self {
            from,
            to,
            weight: None,
        }
    }

    /// Create a weighted edge.
    pub fn weighted(from: NodeId, to: NodeId, weight: impl Into<String>) -> Self {
        Self {
            from,
            to,
            weight: Some(weight.into()),
        }
    }

    /// The unordered endpoint pair, smaller id first.
    ///
    /// Two edges that are mirror images of each other map to the same pair,
    /// which is what undirected deduplication keys on.
    pub fn unordered_pair(&self) -> (NodeId, NodeId) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}

// Canonical ordering: from, then to, then weight
impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.from.cmp(&other.from) {
            std::cmp::Ordering::Equal => match self.to.cmp(&other.to) {
                std::cmp::Ordering::Equal => self.weight.cmp(&other.weight),
                ord => ord,
            },
            ord => ord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_ordering() {
        let e1 = Edge::new(NodeId::new(1), NodeId::new(2));
        let e2 = Edge::new(NodeId::new(1), NodeId::new(3));
        let e3 = Edge::new(NodeId::new(2), NodeId::new(3));

        // Same source, different target
        assert!(e1 < e2);
        // Different source
        assert!(e1 < e3);
        assert!(e2 < e3);
    }

    #[test]
    fn test_unordered_pair_normalizes() {
        let forward = Edge::new(NodeId::new(2), NodeId::new(9));
        let reverse = Edge::new(NodeId::new(9), NodeId::new(2));
        assert_eq!(forward.unordered_pair(), reverse.unordered_pair());
    }

    #[test]
    fn test_weight_skipped_when_absent() {
        let json = serde_json::to_string(&Edge::new(NodeId::new(1), NodeId::new(2))).unwrap();
        assert!(!json.contains("weight"));

        let json = serde_json::to_string(&Edge::weighted(NodeId::new(1), NodeId::new(2), "7"))
            .unwrap();
        assert!(json.contains("\"weight\":\"7\""));
    }
}
