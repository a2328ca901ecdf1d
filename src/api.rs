use crate::engine::{self, Filters, RulePass, RunMetrics};
use crate::error::Result;
use crate::graph::DependencyGraph;
use crate::{Rule, rules};
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(rules::all);

/// Rewrites sentences and their dependency graphs with a fixed set of
/// enabled rules.
///
/// A `Rewriter` only holds its configuration; it is `Copy` and can be shared
/// freely across threads. Each graph is owned by one call at a time.
///
/// # Example
/// ```
/// use natlog_rewrite::{Filters, Rewriter};
///
/// let rewriter = Rewriter::from_config("atleastafew").unwrap();
/// assert_eq!(rewriter.filters(), Filters::AT_LEAST_A_FEW);
/// assert_eq!(rewriter.rewrite_gloss("At least three cats sleep"), "Three cats sleep");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rewriter {
    filters: Filters,
}

/// Per-rule trace of one rewrite call, returned by the verbose entry points.
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteReport {
    /// Every rule of the entry point in the order it ran.
    pub passes: Vec<RulePass>,
    /// Total elapsed time.
    pub elapsed: Duration,
}

impl RewriteReport {
    /// Names of the rules that changed their input.
    pub fn fired(&self) -> Vec<&'static str> {
        self.passes.iter().filter(|p| p.rewrites > 0).map(|p| p.rule).collect()
    }
}

impl From<RunMetrics> for RewriteReport {
    fn from(metrics: RunMetrics) -> Self {
        RewriteReport { passes: metrics.passes, elapsed: metrics.total }
    }
}

impl Default for Rewriter {
    fn default() -> Self {
        Rewriter::new(Filters::DEFAULT)
    }
}

impl Rewriter {
    /// Configuration for the premise (asserted) side of an inference.
    pub const FOR_PREMISE: Rewriter = Rewriter { filters: Filters::DEFAULT };
    /// Configuration for the query side of an inference.
    pub const FOR_QUERY: Rewriter = Rewriter { filters: Filters::DEFAULT };

    pub const fn new(filters: Filters) -> Self {
        Rewriter { filters }
    }

    /// Build from a comma-separated list of rule names, e.g. `"therebe,mods"`.
    pub fn from_config(config: &str) -> Result<Self> {
        Ok(Rewriter::new(config.parse()?))
    }

    pub fn filters(&self) -> Filters {
        self.filters
    }

    /// Rewrite the surface text of a sentence. Never fails; sentences no
    /// rule matches come back unchanged.
    pub fn rewrite_gloss(&self, input: &str) -> String {
        self.rewrite_gloss_verbose(input).0
    }

    pub fn rewrite_gloss_verbose(&self, input: &str) -> (String, RewriteReport) {
        let (output, metrics) = engine::Pipeline::new(&DEFAULT_RULES, self.filters).run_text(input);
        (output, metrics.into())
    }

    /// Rewrite a dependency graph.
    ///
    /// The graph is consumed and the returned graph is the authoritative
    /// result. An error means a rule found the graph inconsistent with its
    /// own match; the partially rewritten graph is discarded.
    pub fn rewrite_dependencies(&self, graph: DependencyGraph) -> Result<DependencyGraph> {
        self.rewrite_dependencies_verbose(graph).map(|(graph, _)| graph)
    }

    pub fn rewrite_dependencies_verbose(&self, graph: DependencyGraph) -> Result<(DependencyGraph, RewriteReport)> {
        let (graph, metrics) = engine::Pipeline::new(&DEFAULT_RULES, self.filters).run_graph(graph)?;
        Ok((graph, metrics.into()))
    }
}
