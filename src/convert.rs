//! Conversion facade: the single entry point for import and export.
//!
//! Callers pick a [`GraphFormat`], hand over bytes or a snapshot plus their
//! current [`GraphConfig`], and get back either encoded bytes (export is
//! total) or a canonical snapshot with an [`AdjustmentReport`] describing
//! every repair the import performed.
//!
//! The facade owns the ordering guarantees: decode first, canonicalize
//! against the caller's config second, so a record saved under one config
//! imports cleanly into another. It also owns the one fail-fast rule:
//! the two adjacency-list layouts are incompatible, so the requested list
//! variant must agree with `cfg.weighted` before any parsing starts.
//!
//! Note that the text formats cannot carry an empty graph; their decoders
//! reject a zero header, so an exported empty snapshot round-trips only
//! through the record format.

use crate::canonical::canonicalize;
use crate::codec::{list, matrix, record, FormatError};
use crate::types::{AdjustmentReport, GraphConfig, GraphSnapshot};
use crate::validate::StructuralError;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// The external representations a snapshot can travel through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphFormat {
    /// Structured JSON record, lossless for labels and sparse ids.
    Record,
    /// Adjacency list, plain neighbor tokens.
    AdjacencyList,
    /// Adjacency list, alternating neighbor/weight tokens.
    WeightedAdjacencyList,
    /// Fixed-width adjacency matrix with a no-edge sentinel.
    AdjacencyMatrix,
}

impl GraphFormat {
    /// Parse a format name from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "record" | "json" => Some(Self::Record),
            "adjacency-list" | "list" => Some(Self::AdjacencyList),
            "weighted-adjacency-list" | "weighted-list" => Some(Self::WeightedAdjacencyList),
            "adjacency-matrix" | "matrix" => Some(Self::AdjacencyMatrix),
            _ => None,
        }
    }

    // The list layouts are the only config-sensitive wire formats.
    fn required_weighted(&self) -> Option<bool> {
        match self {
            Self::AdjacencyList => Some(false),
            Self::WeightedAdjacencyList => Some(true),
            Self::Record | Self::AdjacencyMatrix => None,
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record => write!(f, "record"),
            Self::AdjacencyList => write!(f, "adjacency-list"),
            Self::WeightedAdjacencyList => write!(f, "weighted-adjacency-list"),
            Self::AdjacencyMatrix => write!(f, "adjacency-matrix"),
        }
    }
}

/// The requested list variant contradicts the caller's weighted flag.
///
/// Raised before any parsing: the weighted and unweighted adjacency-list
/// layouts assign different meanings to the same tokens, so importing one
/// as the other would silently mangle the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot import {format} while the graph is configured with weighted={weighted}; \
         switch the weighted toggle or pick the matching list format")]
pub struct ConfigMismatchError {
    /// The format the caller asked for.
    pub format: GraphFormat,
    /// The caller's current weighted flag.
    pub weighted: bool,
}

/// Any way an import can fail.
///
/// Each variant is transparent; the underlying error already carries the
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The structured record was malformed.
    #[error(transparent)]
    Structural(#[from] StructuralError),
    /// The text input did not match its format grammar.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// The requested variant contradicts the current config.
    #[error(transparent)]
    ConfigMismatch(#[from] ConfigMismatchError),
}

/// Encode a snapshot into the requested format.
///
/// Total: a snapshot that upholds the data-model invariants always
/// encodes. The snapshot is read, never modified; `cfg.directed` controls
/// mirroring in the text formats, and the list variant chosen by `format`
/// decides whether weight tokens are emitted regardless of `cfg.weighted`.
pub fn export_as(format: GraphFormat, snapshot: &GraphSnapshot, cfg: GraphConfig) -> Vec<u8> {
    let bytes = match format {
        GraphFormat::Record => record::encode(snapshot),
        GraphFormat::AdjacencyList => {
            list::encode(snapshot, GraphConfig { weighted: false, ..cfg }).into_bytes()
        }
        GraphFormat::WeightedAdjacencyList => {
            list::encode(snapshot, GraphConfig { weighted: true, ..cfg }).into_bytes()
        }
        GraphFormat::AdjacencyMatrix => matrix::encode(snapshot, cfg).into_bytes(),
    };
    debug!(
        format = %format,
        nodes = snapshot.node_count(),
        edges = snapshot.edge_count(),
        bytes = bytes.len(),
        "exported snapshot"
    );
    bytes
}

/// Decode bytes in the requested format and canonicalize for `cfg`.
///
/// On success the snapshot is fully canonical for `cfg` and safe to hand
/// to an editor as a wholesale replacement for its live store. On failure
/// nothing is returned, so the caller's existing graph stays untouched.
/// The report aggregates both decoder-level repairs (skipped lines and
/// tokens, defaulted weight tokens) and canonicalizer repairs.
pub fn import_from(
    format: GraphFormat,
    bytes: &[u8],
    cfg: GraphConfig,
) -> Result<(GraphSnapshot, AdjustmentReport), ImportError> {
    if let Some(required) = format.required_weighted() {
        if required != cfg.weighted {
            return Err(ConfigMismatchError {
                format,
                weighted: cfg.weighted,
            }
            .into());
        }
    }

    let mut lines_skipped = 0;
    let mut tokens_skipped = 0;
    let mut decode_defaults = 0;
    let raw = match format {
        GraphFormat::Record => record::decode(bytes)?,
        GraphFormat::AdjacencyList | GraphFormat::WeightedAdjacencyList => {
            let result = list::decode(text(bytes)?, cfg)?;
            lines_skipped = result.skipped.iter().filter(|e| e.dropped_line()).count();
            tokens_skipped = result.skipped.len() - lines_skipped;
            decode_defaults = result.weights_defaulted;
            result.snapshot
        }
        GraphFormat::AdjacencyMatrix => matrix::decode(text(bytes)?)?,
    };

    let GraphSnapshot { nodes, edges } = raw;
    let (edges, mut report) = canonicalize(edges, cfg);
    report.weights_defaulted += decode_defaults;
    report.lines_skipped = lines_skipped;
    report.tokens_skipped = tokens_skipped;
    let snapshot = GraphSnapshot::new(nodes, edges);

    info!(
        format = %format,
        nodes = snapshot.node_count(),
        edges = snapshot.edge_count(),
        duplicates_removed = report.duplicates_removed,
        weights_defaulted = report.weights_defaulted,
        weights_discarded = report.weights_discarded,
        lines_skipped = report.lines_skipped,
        tokens_skipped = report.tokens_skipped,
        "import complete"
    );
    Ok((snapshot, report))
}

fn text(bytes: &[u8]) -> Result<&str, FormatError> {
    std::str::from_utf8(bytes).map_err(|_| FormatError::NotUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Edge, Node, NodeId};

    #[test]
    fn test_format_names_round_trip() {
        for format in [
            GraphFormat::Record,
            GraphFormat::AdjacencyList,
            GraphFormat::WeightedAdjacencyList,
            GraphFormat::AdjacencyMatrix,
        ] {
            assert_eq!(GraphFormat::from_str(&format.to_string()), Some(format));
        }
        assert_eq!(GraphFormat::from_str("MATRIX"), Some(GraphFormat::AdjacencyMatrix));
        assert_eq!(GraphFormat::from_str("csv"), None);
    }

    #[test]
    fn test_list_variant_must_match_config() {
        let unweighted = GraphConfig::new(true, false);
        let weighted = GraphConfig::new(true, true);

        let err = import_from(GraphFormat::WeightedAdjacencyList, b"1\n1: 1 2\n", unweighted)
            .unwrap_err();
        assert!(matches!(err, ImportError::ConfigMismatch(_)));

        let err = import_from(GraphFormat::AdjacencyList, b"1\n1: 1\n", weighted).unwrap_err();
        assert!(matches!(err, ImportError::ConfigMismatch(_)));

        // Record and matrix imports are config-agnostic.
        assert!(import_from(GraphFormat::AdjacencyMatrix, b"1\n5\n", unweighted).is_ok());
    }

    #[test]
    fn test_non_utf8_input_is_rejected() {
        let err = import_from(
            GraphFormat::AdjacencyList,
            &[0xff, 0xfe, 0x0a],
            GraphConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ImportError::Format(FormatError::NotUtf8)
        ));
    }

    #[test]
    fn test_record_weight_defaulting_is_deferred_to_import_config() {
        let record = br#"{
            "nodes": [{"id": 1, "label": "a"}, {"id": 2, "label": "b"}],
            "edges": [{"from": 1, "to": 2}]
        }"#;

        let (snapshot, report) =
            import_from(GraphFormat::Record, record, GraphConfig::new(true, true)).unwrap();
        assert_eq!(snapshot.edges[0].weight.as_deref(), Some("1"));
        assert_eq!(report.weights_defaulted, 1);

        let (snapshot, report) =
            import_from(GraphFormat::Record, record, GraphConfig::new(true, false)).unwrap();
        assert_eq!(snapshot.edges[0].weight, None);
        assert!(!report.has_adjustments());
    }

    #[test]
    fn test_matrix_import_canonicalizes_for_the_target_config() {
        // Symmetric matrix read as undirected and unweighted: the mirror
        // cell collapses and both carried weights are discarded.
        let bytes = b"2\n4294967295          7\n         7 4294967295\n";
        let (snapshot, report) =
            import_from(GraphFormat::AdjacencyMatrix, bytes, GraphConfig::default()).unwrap();

        assert_eq!(snapshot.edges, vec![Edge::new(NodeId::new(1), NodeId::new(2))]);
        assert_eq!(report.duplicates_removed, 1);
        assert_eq!(report.weights_discarded, 1);
    }

    #[test]
    fn test_export_list_variant_overrides_weighted_flag() {
        let snapshot = GraphSnapshot::new(
            vec![
                Node::synthesized(NodeId::new(1)),
                Node::synthesized(NodeId::new(2)),
            ],
            vec![Edge::new(NodeId::new(1), NodeId::new(2))],
        );
        let bytes = export_as(
            GraphFormat::WeightedAdjacencyList,
            &snapshot,
            GraphConfig::new(true, false),
        );
        assert_eq!(bytes, b"2\n1: 2 1\n2:\n");
    }
}
