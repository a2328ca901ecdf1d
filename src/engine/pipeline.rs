//! The rule pipeline.
//!
//! A `Pipeline` pairs the fixed, ordered rule list with a filter set and runs
//! one of the two entry points:
//!
//! ```text
//! text:  therebe ─▶ atleastafew
//! graph: mods ─▶ rootedq ─▶ dropdet ─▶ has
//! ```
//!
//! Each enabled rule receives the previous rule's output. Disabled rules are
//! still listed in the metrics so a report shows the full pipeline.
//!
//! After every graph rule the pipeline checks the graph invariants and that a
//! graph which had roots still has at least one unless it lost every node.

use super::filters::Filters;
use super::metrics::{RulePass, RunMetrics};
use crate::error::{Result, RewriteError};
use crate::graph::DependencyGraph;
use crate::{Action, Rule};
use std::time::Instant;
use tracing::debug;

#[derive(Debug)]
pub(crate) struct Pipeline<'a> {
    rules: &'a [Rule],
    filters: Filters,
}

impl<'a> Pipeline<'a> {
    pub(crate) fn new(rules: &'a [Rule], filters: Filters) -> Self {
        Pipeline { rules, filters }
    }

    /// Rewrite the surface text of a sentence.
    pub(crate) fn run_text(&self, input: &str) -> (String, RunMetrics) {
        let total_start = Instant::now();
        let mut metrics = RunMetrics::default();
        let mut text = input.to_string();

        for rule in self.rules {
            let Action::Text(rewrite) = rule.action else { continue };
            let enabled = self.filters.contains(rule.filter);
            let start = Instant::now();
            let mut rewrites = 0;
            if enabled {
                if let Some(rewritten) = rewrite(&text) {
                    debug!(rule = rule.name, before = %text, after = %rewritten, "text rewritten");
                    text = rewritten;
                    rewrites = 1;
                } else {
                    debug!(rule = rule.name, "no match");
                }
            }
            metrics.passes.push(RulePass { rule: rule.name, enabled, rewrites, duration: start.elapsed() });
        }

        metrics.total = total_start.elapsed();
        (text, metrics)
    }

    /// Rewrite a dependency graph. An error aborts the run; the graph is then
    /// in an undefined, partially rewritten state and is dropped.
    pub(crate) fn run_graph(&self, mut graph: DependencyGraph) -> Result<(DependencyGraph, RunMetrics)> {
        let total_start = Instant::now();
        let mut metrics = RunMetrics::default();

        for rule in self.rules {
            let Action::Graph(rewrite) = rule.action else { continue };
            let enabled = self.filters.contains(rule.filter);
            let start = Instant::now();
            let mut rewrites = 0;
            if enabled {
                let had_roots = !graph.roots().is_empty();
                rewrites = rewrite(&mut graph)?;
                graph.check_invariants()?;
                if had_roots && graph.roots().is_empty() && graph.node_count() > 0 {
                    return Err(RewriteError::RootlessGraph { rule: rule.name });
                }
                debug!(rule = rule.name, rewrites, "graph rule applied");
            }
            metrics.passes.push(RulePass { rule: rule.name, enabled, rewrites, duration: start.elapsed() });
        }

        metrics.total = total_start.elapsed();
        Ok((graph, metrics))
    }
}
