//! Normalizes dependency parses for natural-logic inference.
//!
//! Two kinds of rewrites are offered:
//!
//! - regex rewrites of a sentence's surface text (`therebe`, `atleastafew`);
//! - structural rewrites of its dependency graph (`mods`, `rootedq`,
//!   `dropdet`, `has`), each of which matches a small pattern once and splices
//!   replacement edges into the graph.
//!
//! ```
//! use natlog_rewrite::Rewriter;
//!
//! let rewriter = Rewriter::FOR_PREMISE;
//! assert_eq!(rewriter.rewrite_gloss("There are cats who are friendly"), "Some cats are friendly");
//! ```

extern crate self as natlog_rewrite;

#[macro_use]
mod macros;
mod api;
mod conll;
mod engine;
mod error;
mod graph;
mod lexicon;
mod rules;

pub use api::{RewriteReport, Rewriter};
pub use conll::{from_conll, to_conll};
pub use engine::{
    EdgeConstraint, Filters, GraphPattern, Match, NodeConstraint, PatternBuilder, RelationMatch, RulePass, find_match,
};
pub use error::{Result, RewriteError};
pub use graph::{DependencyGraph, Edge, EdgeId, EdgeKey, GraphView, NodeId, Word};
pub use lexicon::{OPERATORS, Operator, operator, starts_with_operator};
pub use rules::graph::{rewrite_drop_determiners, rewrite_mods, rewrite_rooted_quantifier, rewrite_terminal_has};
pub use rules::text::{rewrite_at_least_a_few, rewrite_there_be};

// --- Internal rule types ----------------------------------------------------

/// What a rule rewrites.
///
/// A text rule returns `None` when its pattern does not match. A graph rule
/// returns how many rewrites it performed, or an error when the graph turned
/// out inconsistent with the rule's own match.
#[derive(Clone, Copy)]
pub(crate) enum Action {
    Text(fn(&str) -> Option<String>),
    Graph(fn(&mut DependencyGraph) -> Result<usize>),
}

/// A named rewrite rule gated by one `Filters` bit.
pub(crate) struct Rule {
    pub name: &'static str,
    pub filter: Filters,
    pub action: Action,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.action {
            Action::Text(_) => "text",
            Action::Graph(_) => "graph",
        };
        f.debug_struct("Rule").field("name", &self.name).field("filter", &self.filter).field("kind", &kind).finish()
    }
}
