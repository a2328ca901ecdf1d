pub(crate) mod graph;
pub(crate) mod text;

use crate::Rule;

/// Every rule, in pipeline order. Text and graph rules share one list; each
/// pipeline entry point only runs the rules of its own kind.
pub(crate) fn all() -> Vec<Rule> {
    let mut rules = text::rules::get();
    rules.extend(graph::rules::get());
    rules
}
