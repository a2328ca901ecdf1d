//! Backtracking search for a `GraphPattern` inside a graph.
//!
//! The search binds the anchor to each candidate node in index order, then
//! walks the pattern's edges in declaration order. For every edge it tries the
//! governor's outgoing edges (sorted by dependent index, then relation) whose
//! label and dependent satisfy the constraints, recursing on the next pattern
//! edge and undoing the binding on failure:
//!
//! ```text
//! anchor=n1 ─▶ edge0 candidates [e1, e2] ─▶ edge1 candidates [...]
//!                   │ fail                       │
//!                   └─ backtrack to e2 ◀─────────┘
//! ```
//!
//! An optional edge first tries every candidate and, if none completes the
//! pattern, continues with its dependent left unbound. Edges governed by an
//! unbound node are skipped as well. A later edge from a bound governor may
//! still bind the node, and when that edge is required it must match.
//!
//! Only the first complete binding is reported. The graph is never mutated.

use super::pattern::GraphPattern;
use crate::graph::{GraphView, NodeId};
use tracing::trace;

/// A successful binding of pattern names to graph nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Match {
    nodes: Vec<(&'static str, NodeId)>,
    relations: Vec<(&'static str, String)>,
}

impl Match {
    /// Node bound to `name`, or `None` if it sits below an optional edge that
    /// did not match.
    pub fn node(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().find(|(n, _)| *n == name).map(|(_, id)| *id)
    }

    /// Relation captured under `name`.
    pub fn relation(&self, name: &str) -> Option<&str> {
        self.relations.iter().find(|(n, _)| *n == name).map(|(_, r)| r.as_str())
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&'static str, NodeId)> + '_ {
        self.nodes.iter().copied()
    }
}

#[derive(Debug, Default)]
struct SearchState {
    bound: Match,
    unbound: Vec<&'static str>,
}

#[derive(Clone, Copy)]
struct Mark {
    nodes: usize,
    relations: usize,
    unbound: usize,
}

impl SearchState {
    fn mark(&self) -> Mark {
        Mark { nodes: self.bound.nodes.len(), relations: self.bound.relations.len(), unbound: self.unbound.len() }
    }

    fn rewind(&mut self, mark: Mark) {
        self.bound.nodes.truncate(mark.nodes);
        self.bound.relations.truncate(mark.relations);
        self.unbound.truncate(mark.unbound);
    }

    fn is_unbound(&self, name: &str) -> bool {
        self.unbound.contains(&name) && self.bound.node(name).is_none()
    }

    fn uses(&self, id: NodeId) -> bool {
        self.bound.nodes.iter().any(|(_, bound)| *bound == id)
    }
}

/// Find the first binding of `pattern` in `graph`.
pub fn find_match<G: GraphView + ?Sized>(graph: &G, pattern: &GraphPattern) -> Option<Match> {
    let (anchor, constraint) = pattern.anchor();

    for id in graph.node_ids() {
        let Some(word) = graph.word(id) else { continue };
        if !constraint.matches(word) {
            continue;
        }
        let mut state = SearchState::default();
        state.bound.nodes.push((anchor, id));
        if extend(graph, pattern, 0, &mut state) {
            trace!(pattern = pattern.name, bindings = ?state.bound.nodes, "pattern matched");
            return Some(state.bound);
        }
    }

    trace!(pattern = pattern.name, "no match");
    None
}

fn extend<G: GraphView + ?Sized>(graph: &G, pattern: &GraphPattern, idx: usize, state: &mut SearchState) -> bool {
    let Some(constraint) = pattern.edges.get(idx) else {
        return true;
    };

    if state.is_unbound(constraint.governor) {
        let mark = state.mark();
        if state.bound.node(constraint.dependent).is_none() && !state.is_unbound(constraint.dependent) {
            state.unbound.push(constraint.dependent);
        }
        if extend(graph, pattern, idx + 1, state) {
            return true;
        }
        state.rewind(mark);
        return false;
    }

    let Some(governor) = state.bound.node(constraint.governor) else {
        return false;
    };
    let already_bound = state.bound.node(constraint.dependent);
    let dependent_constraint = pattern.constraint(constraint.dependent);

    for edge in graph.outgoing(governor) {
        if !constraint.relation.matches(&edge.relation) {
            continue;
        }
        match already_bound {
            Some(dependent) if edge.dependent != dependent => continue,
            Some(_) => {}
            None => {
                if state.uses(edge.dependent) {
                    continue;
                }
                match graph.word(edge.dependent) {
                    Some(word) if dependent_constraint.matches(word) => {}
                    _ => continue,
                }
            }
        }

        let mark = state.mark();
        if already_bound.is_none() {
            state.bound.nodes.push((constraint.dependent, edge.dependent));
        }
        if let Some(name) = constraint.capture {
            state.bound.relations.push((name, edge.relation.clone()));
        }
        if extend(graph, pattern, idx + 1, state) {
            return true;
        }
        state.rewind(mark);
    }

    if constraint.optional {
        let mark = state.mark();
        if already_bound.is_none() {
            state.unbound.push(constraint.dependent);
        }
        if extend(graph, pattern, idx + 1, state) {
            return true;
        }
        state.rewind(mark);
    }

    false
}
