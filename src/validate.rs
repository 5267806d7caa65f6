//! Structural validation for imported graph records.
//!
//! Record import is all-or-nothing: the first structural problem aborts the
//! whole import with an error naming the offending entry, and no partial
//! snapshot is ever produced. This is the opposite of the adjacency-list
//! decoder, which skips bad lines and keeps going; a record is a document
//! the user saved, so silently dropping parts of it would hide corruption.

use crate::types::{Edge, GraphSnapshot, Node, NodeId};
use serde_json::{Map, Value};
use std::collections::HashSet;
use thiserror::Error;

/// Why a structured record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// Input bytes were not parseable as JSON.
    #[error("invalid JSON: {0}")]
    Json(String),
    /// The top level was valid JSON but not an object.
    #[error("input is not a JSON object")]
    NotAnObject,
    /// A required top-level array is missing or has the wrong type.
    #[error("missing or non-array `{section}` section")]
    MissingSection {
        /// Name of the absent section, `nodes` or `edges`.
        section: &'static str,
    },
    /// A node entry is malformed.
    #[error("node at index {index} has missing or invalid fields: {fields}")]
    InvalidNode {
        /// Position of the entry within the `nodes` array.
        index: usize,
        /// Comma-separated names of the offending fields.
        fields: String,
    },
    /// Two node entries share an id.
    #[error("duplicate node id {id} at index {index}")]
    DuplicateNodeId {
        /// Position of the second occurrence within the `nodes` array.
        index: usize,
        /// The repeated id.
        id: u64,
    },
    /// An edge entry is malformed.
    #[error("edge at index {index} has missing or invalid fields: {fields}")]
    InvalidEdge {
        /// Position of the entry within the `edges` array.
        index: usize,
        /// Comma-separated names of the offending fields.
        fields: String,
    },
    /// An edge endpoint names a node the record does not declare.
    #[error("edge at index {index} references missing node {id}")]
    DanglingEdge {
        /// Position of the entry within the `edges` array.
        index: usize,
        /// The undeclared endpoint id.
        id: u64,
    },
}

/// Validate a parsed JSON value as a graph record.
///
/// Checks, in order: top-level shape, the `nodes` array (field presence and
/// types, id uniqueness), then the `edges` array (field presence and types,
/// endpoint existence). Entry order is preserved in the returned snapshot.
///
/// The returned snapshot is structurally sound but not yet canonical; the
/// caller runs it through [`crate::canonical::canonicalize`].
pub fn validate_record(value: &Value) -> Result<GraphSnapshot, StructuralError> {
    let root = value.as_object().ok_or(StructuralError::NotAnObject)?;
    let node_entries = section(root, "nodes")?;
    let edge_entries = section(root, "edges")?;

    let mut nodes = Vec::with_capacity(node_entries.len());
    let mut ids: HashSet<NodeId> = HashSet::with_capacity(node_entries.len());
    for (index, entry) in node_entries.iter().enumerate() {
        let node =
            parse_node(entry).map_err(|fields| StructuralError::InvalidNode { index, fields })?;
        if !ids.insert(node.id) {
            return Err(StructuralError::DuplicateNodeId {
                index,
                id: node.id.get(),
            });
        }
        nodes.push(node);
    }

    let mut edges = Vec::with_capacity(edge_entries.len());
    for (index, entry) in edge_entries.iter().enumerate() {
        let edge =
            parse_edge(entry).map_err(|fields| StructuralError::InvalidEdge { index, fields })?;
        for endpoint in [edge.from, edge.to] {
            if !ids.contains(&endpoint) {
                return Err(StructuralError::DanglingEdge {
                    index,
                    id: endpoint.get(),
                });
            }
        }
        edges.push(edge);
    }

    Ok(GraphSnapshot::new(nodes, edges))
}

fn section<'a>(
    root: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a Vec<Value>, StructuralError> {
    root.get(name)
        .and_then(Value::as_array)
        .ok_or(StructuralError::MissingSection { section: name })
}

// Ids must be positive integers; floats, negatives, zero, and strings are
// all rejected rather than coerced.
fn id_field(value: &Value) -> Option<NodeId> {
    value.as_u64().filter(|id| *id > 0).map(NodeId::new)
}

fn parse_node(entry: &Value) -> Result<Node, String> {
    let obj = entry.as_object().ok_or_else(|| "not an object".to_string())?;
    let mut invalid = Vec::new();

    let id = obj.get("id").and_then(id_field);
    if id.is_none() {
        invalid.push("id");
    }
    let label = obj.get("label").and_then(Value::as_str);
    if label.is_none() {
        invalid.push("label");
    }

    match (id, label) {
        (Some(id), Some(label)) => Ok(Node::new(id, label)),
        _ => Err(invalid.join(", ")),
    }
}

fn parse_edge(entry: &Value) -> Result<Edge, String> {
    let obj = entry.as_object().ok_or_else(|| "not an object".to_string())?;
    let mut invalid = Vec::new();

    let from = obj.get("from").and_then(id_field);
    if from.is_none() {
        invalid.push("from");
    }
    let to = obj.get("to").and_then(id_field);
    if to.is_none() {
        invalid.push("to");
    }
    let weight = match weight_field(obj) {
        Ok(weight) => weight,
        Err(field) => {
            invalid.push(field);
            None
        }
    };

    match (from, to, invalid.is_empty()) {
        (Some(from), Some(to), true) => Ok(match weight {
            Some(weight) => Edge::weighted(from, to, weight),
            None => Edge::new(from, to),
        }),
        _ => Err(invalid.join(", ")),
    }
}

// `label` is the legacy spelling some editors use for an edge's weight;
// `weight` wins when both are present. Numbers are kept as their display
// strings, null and empty strings count as absent.
fn weight_field(obj: &Map<String, Value>) -> Result<Option<String>, &'static str> {
    for key in ["weight", "label"] {
        match obj.get(key) {
            None | Some(Value::Null) => continue,
            Some(Value::String(s)) if s.is_empty() => continue,
            Some(Value::String(s)) => return Ok(Some(s.clone())),
            Some(Value::Number(n)) => return Ok(Some(n.to_string())),
            Some(_) => return Err(key),
        }
    }
    Ok(None)
}
