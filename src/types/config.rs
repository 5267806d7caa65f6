//! Graph interpretation settings.

use serde::{Deserialize, Serialize};

/// The two flags that decide how edges are interpreted.
///
/// A config is supplied per call and never stored inside a
/// [`GraphSnapshot`]; the same snapshot bytes can be re-read under a
/// different config, which is exactly what an editor's directed/weighted
/// toggles do.
///
/// [`GraphSnapshot`]: super::snapshot::GraphSnapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    /// When false, an edge and its mirror image are the same edge.
    pub directed: bool,
    /// When true, every edge carries a weight; when false, none does.
    pub weighted: bool,
}

impl GraphConfig {
    /// Create a config from its two flags.
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self { directed, weighted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_undirected_unweighted() {
        let cfg = GraphConfig::default();
        assert!(!cfg.directed);
        assert!(!cfg.weighted);
    }
}
