//! Canonical edge form and deterministic fingerprinting.
//!
//! Canonicalization is the single normalization pass every snapshot goes
//! through before it is stored or encoded. It is pure and deterministic:
//! the same edges under the same config always produce the same output,
//! and running it twice changes nothing the second time.
//!
//! The fingerprint helpers serialize to canonical JSON bytes and hash them,
//! so equal snapshots can be compared across processes without byte diffs.
//!
//! ## Determinism Guarantees
//!
//! - Stable field order: struct fields serialize in declaration order
//! - Stable Vec order: vectors serialize in index order
//! - No HashMap in hashed data: order-sensitive containers only

use crate::types::{AdjustmentReport, Edge, GraphConfig, NodeId};
use crate::DEFAULT_WEIGHT;
use serde::Serialize;
use std::collections::HashSet;
use xxhash_rust::xxh64::xxh64;

/// Deduplication key for an edge under the given directedness.
///
/// Directed graphs key on the exact `(from, to)` pair, so a mirror edge is
/// distinct. Undirected graphs key on the unordered pair, so an edge and
/// its mirror collide.
pub(crate) fn dedup_key(from: NodeId, to: NodeId, directed: bool) -> (u64, u64) {
    if directed || from <= to {
        (from.get(), to.get())
    } else {
        (to.get(), from.get())
    }
}

/// Rewrite an edge list into canonical form under `cfg`.
///
/// Three repairs happen in one pass, keeping first-occurrence order:
///
/// - duplicates are dropped; which edges are duplicates depends on
///   `cfg.directed` (see [`dedup_key`])
/// - when `cfg.weighted`, every surviving edge missing a weight gets the
///   default `"1"`
/// - when not `cfg.weighted`, every surviving weight is discarded
///
/// The report counts what was repaired. Canonicalization never fails and
/// never invents or re-orders edges; callers may rely on
/// `canonicalize(canonicalize(e, cfg), cfg)` being a no-op.
pub fn canonicalize(edges: Vec<Edge>, cfg: GraphConfig) -> (Vec<Edge>, AdjustmentReport) {
    let edges_before = edges.len();
    let mut seen: HashSet<(u64, u64)> = HashSet::with_capacity(edges_before);
    let mut kept: Vec<Edge> = Vec::with_capacity(edges_before);
    let mut weights_defaulted = 0;
    let mut weights_discarded = 0;

    for mut edge in edges {
        if !seen.insert(dedup_key(edge.from, edge.to, cfg.directed)) {
            continue;
        }
        if cfg.weighted {
            // Empty strings count as missing; they would not survive the
            // text formats as tokens.
            if edge.weight.as_deref().map_or(true, str::is_empty) {
                edge.weight = Some(DEFAULT_WEIGHT.to_string());
                weights_defaulted += 1;
            }
        } else if edge.weight.take().is_some_and(|w| !w.is_empty()) {
            weights_discarded += 1;
        }
        kept.push(edge);
    }

    let report = AdjustmentReport {
        edges_before,
        edges_after: kept.len(),
        duplicates_removed: edges_before - kept.len(),
        weights_defaulted,
        weights_discarded,
        ..AdjustmentReport::default()
    };
    (kept, report)
}

/// Serialize a value to canonical JSON bytes for hashing.
///
/// Produces deterministic output for the same input, suitable for hash
/// computation and snapshot comparison.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("Canonical serialization failed")
}

/// Compute canonical hash of a serializable value.
pub fn canonical_hash<T: Serialize>(value: &T) -> u64 {
    let bytes = to_canonical_bytes(value);
    xxh64(&bytes, 0)
}

/// Compute canonical hash and return as hex string.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", canonical_hash(value))
}
