//! Adjustment reporting for import and canonicalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What canonicalization (and decoding) changed about the caller's data.
///
/// Imports and config toggles silently repair input rather than reject it:
/// duplicate edges are dropped, weights are defaulted or discarded, and
/// malformed adjacency-list entries are skipped. This struct carries the
/// counts so the caller can tell the user what happened.
///
/// `Display` renders one bullet line per non-zero adjustment and nothing at
/// all when the input needed no repair, so the report can be written
/// straight into a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdjustmentReport {
    /// Edge count before canonicalization.
    pub edges_before: usize,
    /// Edge count after canonicalization.
    pub edges_after: usize,
    /// Edges dropped because an equivalent edge was already present.
    pub duplicates_removed: usize,
    /// Edges that were missing a weight and received the default.
    pub weights_defaulted: usize,
    /// Weights dropped because the graph is not weighted.
    pub weights_discarded: usize,
    /// Malformed adjacency-list lines that were skipped entirely.
    pub lines_skipped: usize,
    /// Malformed neighbor tokens skipped within otherwise usable lines.
    pub tokens_skipped: usize,
}

impl AdjustmentReport {
    /// Report for `count` edges that needed no repair.
    pub fn unchanged(count: usize) -> Self {
        Self {
            edges_before: count,
            edges_after: count,
            ..Self::default()
        }
    }

    /// Whether anything was repaired, defaulted, discarded, or skipped.
    pub fn has_adjustments(&self) -> bool {
        self.duplicates_removed > 0
            || self.weights_defaulted > 0
            || self.weights_discarded > 0
            || self.lines_skipped > 0
            || self.tokens_skipped > 0
    }
}

impl fmt::Display for AdjustmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        if self.duplicates_removed > 0 {
            lines.push(format!(
                "- removed {} duplicate edge(s) ({} -> {})",
                self.duplicates_removed, self.edges_before, self.edges_after
            ));
        }
        if self.weights_defaulted > 0 {
            lines.push(format!(
                "- assigned the default weight \"1\" to {} edge(s) without one",
                self.weights_defaulted
            ));
        }
        if self.weights_discarded > 0 {
            lines.push(format!(
                "- ignored {} edge weight(s): the graph is not weighted",
                self.weights_discarded
            ));
        }
        if self.lines_skipped > 0 {
            lines.push(format!(
                "- skipped {} malformed line(s)",
                self.lines_skipped
            ));
        }
        if self.tokens_skipped > 0 {
            lines.push(format!(
                "- skipped {} malformed neighbor token(s)",
                self.tokens_skipped
            ));
        }
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_report_is_silent() {
        let report = AdjustmentReport::unchanged(4);
        assert!(!report.has_adjustments());
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn test_display_lists_each_adjustment() {
        let report = AdjustmentReport {
            edges_before: 5,
            edges_after: 3,
            duplicates_removed: 2,
            weights_discarded: 3,
            ..AdjustmentReport::default()
        };
        let text = report.to_string();
        assert!(text.contains("removed 2 duplicate edge(s) (5 -> 3)"));
        assert!(text.contains("ignored 3 edge weight(s)"));
        assert!(!text.contains("default weight"));
    }

    #[test]
    fn test_skips_count_as_adjustments() {
        let report = AdjustmentReport {
            lines_skipped: 1,
            ..AdjustmentReport::default()
        };
        assert!(report.has_adjustments());
    }
}
