//! # graph-interchange
//!
//! Graph snapshot serialization and format conversion for interactive
//! graph editors.
//!
//! The engine answers one question:
//!
//! > Given a graph of nodes and edges, how does it travel between memory
//! > and a text file, losslessly and deterministically?
//!
//! ## Core Contract
//!
//! 1. Export any well-formed [`GraphSnapshot`] to a structured record, an
//!    adjacency list (weighted or unweighted), or an adjacency matrix
//! 2. Import any of those back, validating structure and repairing what
//!    can be repaired, with an [`AdjustmentReport`] of every repair
//! 3. Canonicalize edges for the caller's [`GraphConfig`]: dedup under the
//!    current directedness, default or strip weights for the weighted flag
//!
//! ## Architecture
//!
//! ```text
//! LiveStore ⇄ GraphSnapshot → export_as ──→ record | list | matrix bytes
//!                  ↑                                        │
//!            Canonicalizer ← Validator/Codecs ← import_from ┘
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same snapshot + same config + same format → identical bytes
//! - Canonicalization is pure and idempotent; first occurrence wins
//! - Decoded node ordering is canonical (ascending id)
//!
//! The engine is stateless and synchronous: every call is a bounded,
//! single-pass transformation of an already-fully-read input, and nothing
//! is shared between calls.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod canonical;
pub mod codec;
pub mod convert;
pub mod store;
pub mod types;
pub mod validate;

// Re-exports
pub use canonical::{canonical_hash, canonical_hash_hex, canonicalize, to_canonical_bytes};
pub use codec::matrix::NO_EDGE;
pub use codec::FormatError;
pub use convert::{export_as, import_from, ConfigMismatchError, GraphFormat, ImportError};
pub use store::LiveStore;
pub use types::{AdjustmentReport, Edge, GraphConfig, GraphSnapshot, Node, NodeId};
pub use validate::{validate_record, StructuralError};

/// Weight assigned to an edge that needs one but does not have one.
pub const DEFAULT_WEIGHT: &str = "1";
