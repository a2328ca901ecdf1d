//! Rewrite run metrics.
//!
//! Every pipeline run records, per rule considered, whether the rule was
//! enabled, how many rewrites it performed and how long it took. The public
//! API turns these into a `RewriteReport` for the verbose entry points.

use std::time::Duration;

/// One rule's contribution to a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RulePass {
    pub rule: &'static str,
    /// False when the filter set left the rule out.
    pub enabled: bool,
    /// Number of rewrites performed (0 on a pattern miss).
    pub rewrites: usize,
    pub duration: Duration,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunMetrics {
    pub total: Duration,
    pub passes: Vec<RulePass>,
}
