//! Adjacency-matrix codec.
//!
//! Layout: a header line with the exact node count `n`, then `n` rows of
//! `n` whitespace-separated integer cells. Cell `(i, j)` (1-indexed) is the
//! weight of the edge from node `i` to node `j`, or [`NO_EDGE`] when there
//! is none. Node ids are assumed to be the contiguous range `1..=n`; this
//! format cannot represent sparse id sets, and encoding maps ids to rows by
//! snapshot position instead.
//!
//! Unlike the adjacency-list decoder, this decoder is strict: any grammar
//! violation rejects the whole input. It also performs no dedup and no
//! weight policy; every non-sentinel cell becomes a raw weighted edge, and
//! the canonicalizer sorts out mirrors and weight stripping afterwards.

use super::{content_lines, parse_header, FormatError};
use crate::types::{Edge, GraphConfig, GraphSnapshot, Node, NodeId};
use std::collections::HashMap;
use tracing::debug;

/// Sentinel cell value meaning "no edge here".
pub const NO_EDGE: u32 = u32::MAX;

// Cell rendering width. The sentinel is exactly ten digits, so rows are
// joined with an explicit space to keep adjacent cells tokenizable.
const CELL_WIDTH: usize = 10;

/// Decode adjacency-matrix text into a raw snapshot.
///
/// Produces nodes `1..=n` with synthesized labels and one weighted edge per
/// non-sentinel cell, in row-major order. Rows beyond the declared `n` are
/// ignored.
pub fn decode(text: &str) -> Result<GraphSnapshot, FormatError> {
    let mut lines = content_lines(text).map(|(_, line)| line);
    let header = lines.next().ok_or(FormatError::MissingHeader)?;
    let n = parse_header(header)?;

    let rows: Vec<&str> = lines.collect();
    if rows.len() < n {
        return Err(FormatError::TruncatedMatrix {
            expected: n,
            found: rows.len(),
        });
    }
    if rows.len() > n {
        debug!(
            declared = n,
            found = rows.len(),
            "ignoring matrix rows beyond the declared size"
        );
    }

    let mut edges = Vec::new();
    for (row_idx, row) in rows.iter().take(n).enumerate() {
        let row_no = row_idx + 1;
        let tokens: Vec<&str> = row.split_whitespace().collect();
        if tokens.len() != n {
            return Err(FormatError::RowWidth {
                row: row_no,
                expected: n,
                found: tokens.len(),
            });
        }
        for (col_idx, token) in tokens.iter().enumerate() {
            let cell: u32 = token.parse().map_err(|_| FormatError::BadCell {
                row: row_no,
                column: col_idx + 1,
                token: token.to_string(),
            })?;
            if cell != NO_EDGE {
                edges.push(Edge::weighted(
                    NodeId::new(row_no as u64),
                    NodeId::new(col_idx as u64 + 1),
                    cell.to_string(),
                ));
            }
        }
    }

    let nodes = (1..=n as u64)
        .map(|id| Node::synthesized(NodeId::new(id)))
        .collect();
    Ok(GraphSnapshot::new(nodes, edges))
}

/// Encode a snapshot as adjacency-matrix text.
///
/// Node ids map to rows and columns by their position in `snapshot.nodes`,
/// so non-contiguous ids are renumbered by the format; a decode of the
/// result yields ids `1..=n`. Cells render right-aligned in
/// 10-character fields, one space apart. When `cfg.directed` is false each
/// edge is mirrored across the diagonal.
pub fn encode(snapshot: &GraphSnapshot, cfg: GraphConfig) -> String {
    let n = snapshot.node_count();
    let index: HashMap<NodeId, usize> = snapshot
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id, i))
        .collect();

    let mut grid = vec![vec![NO_EDGE; n]; n];
    for edge in &snapshot.edges {
        let (Some(&i), Some(&j)) = (index.get(&edge.from), index.get(&edge.to)) else {
            continue;
        };
        let cell = weight_cell(edge.weight.as_deref());
        grid[i][j] = cell;
        if !cfg.directed {
            grid[j][i] = cell;
        }
    }

    let mut out = String::with_capacity((n + 1) * (n * (CELL_WIDTH + 1) + 1));
    out.push_str(&format!("{n}\n"));
    for row in &grid {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>CELL_WIDTH$}")).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

// Matrix cells are integers; anything else falls back to the default
// weight, and values that would collide with the sentinel or overflow the
// cell saturate just below it.
fn weight_cell(weight: Option<&str>) -> u32 {
    const MAX_CELL: u64 = (NO_EDGE - 1) as u64;
    match weight {
        None => 1,
        Some(w) => match w.parse::<u64>() {
            Ok(v) => v.min(MAX_CELL) as u32,
            Err(_) if !w.is_empty() && w.bytes().all(|b| b.is_ascii_digit()) => MAX_CELL as u32,
            Err(_) => {
                debug!(weight = w, "weight is not an integer, emitting the default");
                1
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIRECTED: GraphConfig = GraphConfig {
        directed: true,
        weighted: true,
    };

    #[test]
    fn test_decode_single_edge() {
        let text = "2\n4294967295          7\n4294967295 4294967295\n";
        let snapshot = decode(text).unwrap();

        let ids: Vec<u64> = snapshot.nodes.iter().map(|n| n.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(
            snapshot.edges,
            vec![Edge::weighted(NodeId::new(1), NodeId::new(2), "7")]
        );
    }

    #[test]
    fn test_decode_rejects_truncated_matrix() {
        let err = decode("3\n1 1 1\n1 1 1\n").unwrap_err();
        assert_eq!(
            err,
            FormatError::TruncatedMatrix {
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn test_decode_rejects_wrong_row_width() {
        let err = decode("3\n1 1 1\n1 1 1 1\n1 1 1\n").unwrap_err();
        assert_eq!(
            err,
            FormatError::RowWidth {
                row: 2,
                expected: 3,
                found: 4,
            }
        );
    }

    #[test]
    fn test_decode_rejects_non_integer_cell() {
        let err = decode("1\nx\n").unwrap_err();
        assert_eq!(
            err,
            FormatError::BadCell {
                row: 1,
                column: 1,
                token: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_ignores_extra_rows() {
        let snapshot = decode("1\n5\n9 9 9\n").unwrap();
        assert_eq!(snapshot.edges.len(), 1);
        assert_eq!(snapshot.edges[0].weight.as_deref(), Some("5"));
    }

    #[test]
    fn test_encode_directed_weighted() {
        let snapshot = GraphSnapshot::new(
            vec![
                Node::synthesized(NodeId::new(1)),
                Node::synthesized(NodeId::new(2)),
            ],
            vec![Edge::weighted(NodeId::new(1), NodeId::new(2), "7")],
        );
        let expected = "2\n4294967295          7\n4294967295 4294967295\n";
        assert_eq!(encode(&snapshot, DIRECTED), expected);
    }

    #[test]
    fn test_encode_mirrors_when_undirected() {
        let snapshot = GraphSnapshot::new(
            vec![
                Node::synthesized(NodeId::new(1)),
                Node::synthesized(NodeId::new(2)),
            ],
            vec![Edge::new(NodeId::new(1), NodeId::new(2))],
        );
        let text = encode(&snapshot, GraphConfig::new(false, false));
        assert_eq!(text, "2\n4294967295          1\n         1 4294967295\n");
    }

    #[test]
    fn test_encode_clamps_and_defaults_weights() {
        let nodes = vec![
            Node::synthesized(NodeId::new(1)),
            Node::synthesized(NodeId::new(2)),
            Node::synthesized(NodeId::new(3)),
        ];
        let edges = vec![
            // Would collide with the sentinel; saturates below it.
            Edge::weighted(NodeId::new(1), NodeId::new(2), "4294967295"),
            Edge::weighted(NodeId::new(2), NodeId::new(3), "not a number"),
            // Too large for any cell; saturates instead of defaulting.
            Edge::weighted(NodeId::new(3), NodeId::new(1), "99999999999999999999"),
        ];
        let text = encode(&GraphSnapshot::new(nodes, edges), DIRECTED);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[1].split_whitespace().nth(1), Some("4294967294"));
        assert_eq!(rows[2].split_whitespace().nth(2), Some("1"));
        assert_eq!(rows[3].split_whitespace().next(), Some("4294967294"));
    }

    #[test]
    fn test_non_contiguous_ids_are_renumbered_by_position() {
        let snapshot = GraphSnapshot::new(
            vec![
                Node::synthesized(NodeId::new(5)),
                Node::synthesized(NodeId::new(9)),
            ],
            vec![Edge::weighted(NodeId::new(5), NodeId::new(9), "2")],
        );
        let decoded = decode(&encode(&snapshot, DIRECTED)).unwrap();

        let ids: Vec<u64> = decoded.nodes.iter().map(|n| n.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(
            decoded.edges,
            vec![Edge::weighted(NodeId::new(1), NodeId::new(2), "2")]
        );
    }
}
