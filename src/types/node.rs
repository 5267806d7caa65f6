//! Node types for graph snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node within a snapshot.
///
/// Wraps a positive integer. Ids are caller-assigned and need not be
/// contiguous or start at 1. Zero is never a valid id; parse boundaries
/// reject it. Implements `Ord` for deterministic ascending ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Create a NodeId from a raw integer.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parse a NodeId from a text token.
    ///
    /// Returns `None` for non-numeric tokens and for zero, which the data
    /// model excludes.
    pub fn parse(token: &str) -> Option<Self> {
        match token.parse::<u64>() {
            Ok(id) if id > 0 => Some(Self(id)),
            _ => None,
        }
    }

    /// Get the inner integer.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Node in a graph snapshot.
///
/// Carries only the fields that cross the serialization boundary; rendering
/// state (position, color, physics) never reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique node identifier.
    pub id: NodeId,
    /// Display label, preserved verbatim on import.
    pub label: String,
}

impl Node {
    /// Create a node with an explicit label.
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// Create a node with the synthesized default label `Node {id}`.
    ///
    /// Used by text decoders that discover ids without label information.
    pub fn synthesized(id: NodeId) -> Self {
        Self {
            label: format!("Node {}", id),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_parse_accepts_positive() {
        assert_eq!(NodeId::parse("7"), Some(NodeId::new(7)));
        assert_eq!(NodeId::parse("  "), None);
        assert_eq!(NodeId::parse("abc"), None);
        assert_eq!(NodeId::parse("-3"), None);
        assert_eq!(NodeId::parse("0"), None);
    }

    #[test]
    fn test_node_id_ordering() {
        assert!(NodeId::new(2) < NodeId::new(10));
    }

    #[test]
    fn test_synthesized_label() {
        let node = Node::synthesized(NodeId::new(42));
        assert_eq!(node.label, "Node 42");
    }
}
