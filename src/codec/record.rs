//! Structured-record codec.
//!
//! The record format is the lossless one: labels, non-contiguous ids, and
//! weights all survive a round trip. Encoding emits exactly the fields of
//! the data model (`id`, `label` per node; `from`, `to`, and `weight` when
//! present per edge) as pretty-printed JSON, so records stay diffable and
//! free of editor-internal state.

use crate::types::GraphSnapshot;
use crate::validate::{validate_record, StructuralError};

/// Encode a snapshot as a structured record.
///
/// Total for any snapshot that upholds the data-model invariants.
pub fn encode(snapshot: &GraphSnapshot) -> Vec<u8> {
    serde_json::to_vec_pretty(snapshot).expect("Record serialization failed")
}

/// Decode a structured record into a snapshot.
///
/// Parses the bytes as JSON and hands the value to the validator; the
/// result is returned unchanged, with canonicalization left to the caller.
/// All-or-nothing: any structural problem rejects the whole record.
pub fn decode(bytes: &[u8]) -> Result<GraphSnapshot, StructuralError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| StructuralError::Json(e.to_string()))?;
    validate_record(&value)
}
