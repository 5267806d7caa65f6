//! Adjacency-list codec.
//!
//! Layout: the first line declares a node count `n` (informational; the
//! real node set is the union of every id that appears anywhere), then one
//! line per source node:
//!
//! ```text
//! id: neighbor neighbor ...            unweighted variant
//! id: neighbor weight neighbor weight  weighted variant
//! ```
//!
//! The two variants use incompatible token layouts and cannot be told
//! apart heuristically, so the caller states which one it wants via
//! `cfg.weighted`. Decoding is forgiving: a malformed line or neighbor
//! token is logged, recorded as a [`ParseError`], and skipped, and only
//! input with zero usable data is rejected outright.

use super::{content_lines, parse_header, FormatError};
use crate::canonical::dedup_key;
use crate::types::{Edge, GraphConfig, GraphSnapshot, Node, NodeId};
use crate::DEFAULT_WEIGHT;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use thiserror::Error;
use tracing::{debug, warn};

/// A recoverable anomaly found while decoding an adjacency list.
///
/// These never abort the decode; they are logged and the offending line or
/// token is skipped. The facade folds their counts into the adjustment
/// report so the user still hears about them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A body line has no `id:` prefix to split on.
    #[error("line {line}: expected `id: neighbors...`, found no colon")]
    MissingColon {
        /// 1-based physical line number.
        line: usize,
    },
    /// The text left of the colon is not a positive integer.
    #[error("line {line}: source id {token:?} is not a positive integer")]
    BadSourceId {
        /// 1-based physical line number.
        line: usize,
        /// The offending source token.
        token: String,
    },
    /// A neighbor token is not a positive integer.
    #[error("line {line}: neighbor {token:?} is not a positive integer")]
    BadNeighbor {
        /// 1-based physical line number.
        line: usize,
        /// The offending neighbor token.
        token: String,
    },
}

impl ParseError {
    /// Whether the whole line was dropped, as opposed to a single token.
    pub fn dropped_line(&self) -> bool {
        matches!(self, Self::MissingColon { .. } | Self::BadSourceId { .. })
    }
}

/// Outcome of a forgiving adjacency-list decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    /// The decoded snapshot, nodes in ascending id order.
    pub snapshot: GraphSnapshot,
    /// Every line or token that had to be skipped.
    pub skipped: Vec<ParseError>,
    /// Weighted-variant neighbors that lacked a numeric companion token.
    pub weights_defaulted: usize,
}

/// Decode adjacency-list text under the given config.
///
/// `cfg.weighted` selects the token layout; `cfg.directed` drives the
/// inline edge dedup (an undirected encoding lists every edge from both
/// endpoints, so the mirror entries must collapse back into one edge).
/// Node set is the union of every id seen, sorted ascending, each given a
/// synthesized label.
pub fn decode(text: &str, cfg: GraphConfig) -> Result<DecodeResult, FormatError> {
    let mut lines = content_lines(text);
    let (_, header) = lines.next().ok_or(FormatError::MissingHeader)?;
    let declared = parse_header(header)?;

    let mut ids: BTreeSet<NodeId> = BTreeSet::new();
    let mut edges: Vec<Edge> = Vec::new();
    let mut seen: HashSet<(u64, u64)> = HashSet::new();
    let mut skipped: Vec<ParseError> = Vec::new();
    let mut weights_defaulted = 0usize;

    let push_edge = |edge: Edge, seen: &mut HashSet<(u64, u64)>, edges: &mut Vec<Edge>| {
        if seen.insert(dedup_key(edge.from, edge.to, cfg.directed)) {
            edges.push(edge);
        }
    };

    for (line_no, line) in lines {
        let Some((source_token, rest)) = line.split_once(':') else {
            skip(&mut skipped, ParseError::MissingColon { line: line_no });
            continue;
        };
        let Some(from) = NodeId::parse(source_token.trim()) else {
            skip(
                &mut skipped,
                ParseError::BadSourceId {
                    line: line_no,
                    token: source_token.trim().to_string(),
                },
            );
            continue;
        };
        ids.insert(from);

        let tokens: Vec<&str> = rest.split_whitespace().collect();
        if cfg.weighted {
            let mut i = 0;
            while i < tokens.len() {
                let Some(to) = NodeId::parse(tokens[i]) else {
                    skip(
                        &mut skipped,
                        ParseError::BadNeighbor {
                            line: line_no,
                            token: tokens[i].to_string(),
                        },
                    );
                    i += 1;
                    continue;
                };
                let weight = match tokens.get(i + 1) {
                    Some(companion) if is_numeric(companion) => {
                        i += 2;
                        (*companion).to_string()
                    }
                    _ => {
                        i += 1;
                        weights_defaulted += 1;
                        DEFAULT_WEIGHT.to_string()
                    }
                };
                ids.insert(to);
                push_edge(Edge::weighted(from, to, weight), &mut seen, &mut edges);
            }
        } else {
            for token in tokens {
                match NodeId::parse(token) {
                    Some(to) => {
                        ids.insert(to);
                        push_edge(Edge::new(from, to), &mut seen, &mut edges);
                    }
                    None => skip(
                        &mut skipped,
                        ParseError::BadNeighbor {
                            line: line_no,
                            token: token.to_string(),
                        },
                    ),
                }
            }
        }
    }

    if ids.is_empty() && !skipped.is_empty() {
        return Err(FormatError::NoUsableData {
            skipped: skipped.len(),
        });
    }
    if ids.len() != declared {
        debug!(
            declared,
            actual = ids.len(),
            "adjacency-list header disagrees with the ids present"
        );
    }

    let nodes = ids.into_iter().map(Node::synthesized).collect();
    Ok(DecodeResult {
        snapshot: GraphSnapshot::new(nodes, edges),
        skipped,
        weights_defaulted,
    })
}

fn skip(skipped: &mut Vec<ParseError>, err: ParseError) {
    warn!(%err, "skipping malformed adjacency-list input");
    skipped.push(err);
}

/// Encode a snapshot as adjacency-list text.
///
/// `cfg.weighted` selects the token layout; when `cfg.directed` is false
/// each edge is also listed from its other endpoint, so the text reads the
/// same from both sides. Lines are emitted in ascending node id order,
/// neighbors in the order their edges appear in the snapshot. Isolated
/// nodes produce a bare `id:` line.
pub fn encode(snapshot: &GraphSnapshot, cfg: GraphConfig) -> String {
    let mut neighbors: BTreeMap<NodeId, Vec<(NodeId, Option<&str>)>> =
        snapshot.nodes.iter().map(|n| (n.id, Vec::new())).collect();

    for edge in &snapshot.edges {
        if let Some(list) = neighbors.get_mut(&edge.from) {
            list.push((edge.to, edge.weight.as_deref()));
        }
        if !cfg.directed && edge.from != edge.to {
            if let Some(list) = neighbors.get_mut(&edge.to) {
                list.push((edge.from, edge.weight.as_deref()));
            }
        }
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", snapshot.node_count()));
    for (id, list) in neighbors {
        out.push_str(&format!("{id}:"));
        for (to, weight) in list {
            out.push_str(&format!(" {to}"));
            if cfg.weighted {
                out.push_str(&format!(" {}", weight_token(weight)));
            }
        }
        out.push('\n');
    }
    out
}

// A weight survives as its own token only if the decoder on the other end
// would read it back as one.
fn weight_token(weight: Option<&str>) -> &str {
    match weight {
        Some(w) if is_numeric(w) => w,
        Some(w) => {
            debug!(weight = w, "weight is not a numeric token, emitting the default");
            DEFAULT_WEIGHT
        }
        None => DEFAULT_WEIGHT,
    }
}

fn is_numeric(token: &str) -> bool {
    token.parse::<f64>().is_ok()
}
