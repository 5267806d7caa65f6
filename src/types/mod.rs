//! Core types for the graph interchange engine.

pub mod config;
pub mod edge;
pub mod node;
pub mod report;
pub mod snapshot;

pub use config::GraphConfig;
pub use edge::Edge;
pub use node::{Node, NodeId};
pub use report::AdjustmentReport;
pub use snapshot::GraphSnapshot;
