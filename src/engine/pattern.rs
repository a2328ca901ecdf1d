//! Structural patterns over dependency graphs.
//!
//! A `GraphPattern` is a small tree of named node constraints joined by edge
//! constraints. The first declared node is the anchor; every edge hangs off
//! the anchor or off a node introduced by an earlier edge:
//!
//! ```text
//! verb ─dobj─▶ lot ─nmod:of─▶ obj
//!               └─det?─▶ a            (optional)
//! ```
//!
//! Constraints are evaluated against a single `Word` (node) or a relation
//! string (edge). Regex constraints hold `&'static Regex` values produced by
//! the `regex!` macro and must be anchored by the author when a full match is
//! intended.
//!
//! ## Invariants
//!
//! - Node names are unique within a pattern.
//! - `PatternBuilder::build` rejects edges whose governor is not yet
//!   reachable from the anchor, and nodes that no edge reaches.

use crate::graph::Word;
use regex::Regex;

/// Restriction on the word bound to a pattern node.
#[derive(Debug, Clone)]
pub enum NodeConstraint {
    Any,
    Word(&'static str),
    Tag(&'static str),
    WordRegex(&'static Regex),
}

impl NodeConstraint {
    pub fn matches(&self, word: &Word) -> bool {
        match self {
            NodeConstraint::Any => true,
            NodeConstraint::Word(w) => word.word == *w,
            NodeConstraint::Tag(t) => word.tag == *t,
            NodeConstraint::WordRegex(re) => re.is_match(&word.word),
        }
    }
}

/// Restriction on an edge's relation label.
#[derive(Debug, Clone)]
pub enum RelationMatch {
    Exact(&'static str),
    Regex(&'static Regex),
}

impl RelationMatch {
    pub fn matches(&self, relation: &str) -> bool {
        match self {
            RelationMatch::Exact(r) => relation == *r,
            RelationMatch::Regex(re) => re.is_match(relation),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EdgeConstraint {
    pub governor: &'static str,
    pub dependent: &'static str,
    pub relation: RelationMatch,
    /// When no edge satisfies the constraint the rest of the pattern still
    /// matches, leaving `dependent` (and anything below it) unbound.
    pub optional: bool,
    /// Name under which the matched relation string is exposed.
    pub capture: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct GraphPattern {
    pub(crate) name: &'static str,
    pub(crate) nodes: Vec<(&'static str, NodeConstraint)>,
    pub(crate) edges: Vec<EdgeConstraint>,
}

impl GraphPattern {
    pub fn builder(name: &'static str) -> PatternBuilder {
        PatternBuilder { name, nodes: Vec::new(), edges: Vec::new() }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn anchor(&self) -> (&'static str, &NodeConstraint) {
        let (name, constraint) = &self.nodes[0];
        (name, constraint)
    }

    pub(crate) fn constraint(&self, name: &str) -> &NodeConstraint {
        self.nodes.iter().find(|(n, _)| *n == name).map(|(_, c)| c).unwrap_or(&NodeConstraint::Any)
    }
}

#[derive(Debug)]
pub struct PatternBuilder {
    name: &'static str,
    nodes: Vec<(&'static str, NodeConstraint)>,
    edges: Vec<EdgeConstraint>,
}

impl PatternBuilder {
    /// Declare a named node. The first node declared is the anchor.
    pub fn node(mut self, name: &'static str, constraint: NodeConstraint) -> Self {
        self.nodes.push((name, constraint));
        self
    }

    pub fn edge(self, governor: &'static str, dependent: &'static str, relation: RelationMatch) -> Self {
        self.push_edge(governor, dependent, relation, false)
    }

    pub fn optional_edge(self, governor: &'static str, dependent: &'static str, relation: RelationMatch) -> Self {
        self.push_edge(governor, dependent, relation, true)
    }

    /// Expose the relation matched by the most recently added edge.
    pub fn capture_relation(mut self, name: &'static str) -> Self {
        if let Some(edge) = self.edges.last_mut() {
            edge.capture = Some(name);
        }
        self
    }

    fn push_edge(
        mut self,
        governor: &'static str,
        dependent: &'static str,
        relation: RelationMatch,
        optional: bool,
    ) -> Self {
        self.edges.push(EdgeConstraint { governor, dependent, relation, optional, capture: None });
        self
    }

    pub fn build(self) -> Result<GraphPattern, String> {
        let Some((anchor, _)) = self.nodes.first() else {
            return Err(format!("pattern `{}` declares no nodes", self.name));
        };

        for (i, (name, _)) in self.nodes.iter().enumerate() {
            if self.nodes[..i].iter().any(|(other, _)| other == name) {
                return Err(format!("pattern `{}` declares node `{}` twice", self.name, name));
            }
        }

        let mut reachable = vec![*anchor];
        for edge in &self.edges {
            for endpoint in [edge.governor, edge.dependent] {
                if !self.nodes.iter().any(|(n, _)| *n == endpoint) {
                    return Err(format!("pattern `{}` uses undeclared node `{}`", self.name, endpoint));
                }
            }
            if !reachable.contains(&edge.governor) {
                return Err(format!(
                    "pattern `{}`: edge {} -> {} starts from an unreached node",
                    self.name, edge.governor, edge.dependent
                ));
            }
            if !reachable.contains(&edge.dependent) {
                reachable.push(edge.dependent);
            }
        }

        if let Some((orphan, _)) = self.nodes.iter().find(|(n, _)| !reachable.contains(n)) {
            return Err(format!("pattern `{}`: node `{}` is not connected", self.name, orphan));
        }

        Ok(GraphPattern { name: self.name, nodes: self.nodes, edges: self.edges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_disconnected_nodes() {
        let err = GraphPattern::builder("orphan")
            .node("a", NodeConstraint::Any)
            .node("b", NodeConstraint::Any)
            .build()
            .unwrap_err();
        assert!(err.contains("not connected"));
    }

    #[test]
    fn build_rejects_edges_from_unreached_nodes() {
        let err = GraphPattern::builder("backwards")
            .node("a", NodeConstraint::Any)
            .node("b", NodeConstraint::Any)
            .node("c", NodeConstraint::Any)
            .edge("b", "c", RelationMatch::Exact("dep"))
            .edge("a", "b", RelationMatch::Exact("dep"))
            .build()
            .unwrap_err();
        assert!(err.contains("unreached"));
    }

    #[test]
    fn constraints_match_words_and_relations() {
        let has = Word::new(4, "had", "have", "VBD");
        assert!(NodeConstraint::WordRegex(crate::regex!(r"^(?:has|have|had)$")).matches(&has));
        assert!(NodeConstraint::Tag("VBD").matches(&has));
        assert!(!NodeConstraint::Word("has").matches(&has));
        assert!(RelationMatch::Regex(crate::regex!(r"^(?:advcl|dep)$")).matches("dep"));
        assert!(!RelationMatch::Regex(crate::regex!(r"^(?:advcl|dep)$")).matches("depx"));
    }
}
