use crate::error::{Result, RewriteError};
use crate::graph::{DependencyGraph, Edge, EdgeKey, NodeId};

/// Remove an edge the rule's match guarantees, failing loudly if it is gone.
pub fn remove_required_edge(graph: &mut DependencyGraph, rule: &'static str, key: EdgeKey) -> Result<Edge> {
    graph.remove_edge(&key).ok_or(RewriteError::MissingEdge { rule, edge: key })
}

/// Add a rule-built primary edge.
pub fn add_synthetic_edge(graph: &mut DependencyGraph, governor: NodeId, dependent: NodeId, relation: &str) -> Result<()> {
    graph.add_edge(Edge::synthetic(governor, dependent, relation)).map(|_| ())
}

/// Relation name for a collapsed preposition, e.g. "more than" -> "nmod:more_than".
pub fn nmod_relation(preposition: &str) -> String {
    format!("nmod:{}", preposition.to_lowercase().replace(' ', "_"))
}
