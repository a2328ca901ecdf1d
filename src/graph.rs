//! Dependency graph model.
//!
//! A `DependencyGraph` is the structure every graph rule reads and rewrites:
//! a set of words keyed by their sentence index, a set of labeled directed
//! edges (governor ─relation─▶ dependent) and a set of roots.
//!
//! ```text
//!        eats (root)
//!       /    \
//!  nsubj      dobj
//!    /          \
//!  cats         cake
//! ```
//!
//! ## Invariants
//!
//! - Both endpoints of every edge are nodes of the graph (`add_edge` refuses
//!   anything else).
//! - Removing a node removes every edge touching it and drops it from the
//!   root set.
//! - Edge removal is by exact identity (`EdgeKey`): governor, dependent,
//!   relation and the `extra` flag. Asking to remove an edge that is not
//!   there is reported back to the caller, never ignored.
//!
//! Edges produced by the rewrite rules carry `synthetic = true` instead of a
//! sentinel weight; the weight of a parser edge is kept as-is when a rule only
//! relabels or reverses it.

use crate::error::{Result, RewriteError};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Stable identity of a node: its 1-based position in the sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identity of an edge, assigned in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

/// One token of the sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub index: NodeId,
    pub word: String,
    pub lemma: String,
    pub tag: String,
    /// Operator marker set by an upstream annotator, e.g. `"all"`.
    pub operator: Option<String>,
}

impl Word {
    pub fn new(index: usize, word: &str, lemma: &str, tag: &str) -> Self {
        Word {
            index: NodeId(index),
            word: word.to_string(),
            lemma: lemma.to_string(),
            tag: tag.to_string(),
            operator: None,
        }
    }

    pub fn with_operator(mut self, operator: &str) -> Self {
        self.operator = Some(operator.to_string());
        self
    }

    pub fn is_operator(&self) -> bool {
        self.operator.is_some()
    }
}

/// A labeled dependency arc.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub governor: NodeId,
    pub dependent: NodeId,
    pub relation: String,
    pub weight: f64,
    /// Secondary (enhanced) edge rather than a primary tree edge.
    pub extra: bool,
    /// Produced by a rewrite rule rather than by the parser.
    pub synthetic: bool,
}

impl Edge {
    /// A primary edge as a parser would produce it.
    pub fn new(governor: NodeId, dependent: NodeId, relation: &str) -> Self {
        Edge { governor, dependent, relation: relation.to_string(), weight: 1.0, extra: false, synthetic: false }
    }

    /// A primary edge built by a rewrite rule.
    pub fn synthetic(governor: NodeId, dependent: NodeId, relation: &str) -> Self {
        Edge { synthetic: true, weight: 0.0, ..Edge::new(governor, dependent, relation) }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            governor: self.governor,
            dependent: self.dependent,
            relation: self.relation.clone(),
            extra: self.extra,
        }
    }

    /// Same endpoints, weight and flags under a different relation.
    pub fn relabeled(&self, relation: &str) -> Self {
        Edge { relation: relation.to_string(), ..self.clone() }
    }
}

/// Exact identity of an edge for removal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub governor: NodeId,
    pub dependent: NodeId,
    pub relation: String,
    pub extra: bool,
}

impl EdgeKey {
    /// Key of a primary (non-extra) edge.
    pub fn primary(governor: NodeId, dependent: NodeId, relation: &str) -> Self {
        EdgeKey { governor, dependent, relation: relation.to_string(), extra: false }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -{}-> {}", self.governor, self.relation, self.dependent)?;
        if self.extra {
            write!(f, " (extra)")?;
        }
        Ok(())
    }
}

/// Read-only view the pattern matcher searches over.
pub trait GraphView {
    /// All node ids in ascending order.
    fn node_ids(&self) -> Vec<NodeId>;
    fn word(&self, id: NodeId) -> Option<&Word>;
    /// Outgoing edges ordered by dependent index, then relation.
    fn outgoing(&self, id: NodeId) -> Vec<&Edge>;
    fn incoming(&self, id: NodeId) -> Vec<&Edge>;
}

#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: BTreeMap<NodeId, Word>,
    edges: BTreeMap<EdgeId, Edge>,
    roots: BTreeSet<NodeId>,
    next_edge: usize,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, replacing any word previously stored at the same index.
    pub fn add_node(&mut self, word: Word) -> NodeId {
        let id = word.index;
        self.nodes.insert(id, word);
        id
    }

    /// Remove a node together with every edge touching it.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Word> {
        let word = self.nodes.remove(&id)?;
        self.edges.retain(|_, e| e.governor != id && e.dependent != id);
        self.roots.remove(&id);
        Some(word)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Word> {
        self.nodes.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Word> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Add an edge. Adding an edge identical (by `EdgeKey`) to an existing one
    /// is a no-op returning the existing id.
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeId> {
        for endpoint in [edge.governor, edge.dependent] {
            if !self.contains(endpoint) {
                return Err(RewriteError::UnknownNode(endpoint));
            }
        }
        if let Some(id) = self.find_edge(&edge.key()) {
            return Ok(id);
        }
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.edges.insert(id, edge);
        Ok(id)
    }

    /// Find an edge by exact identity.
    pub fn find_edge(&self, key: &EdgeKey) -> Option<EdgeId> {
        self.edges
            .iter()
            .find(|(_, e)| {
                e.governor == key.governor
                    && e.dependent == key.dependent
                    && e.extra == key.extra
                    && e.relation == key.relation
            })
            .map(|(id, _)| *id)
    }

    pub fn has_edge(&self, key: &EdgeKey) -> bool {
        self.find_edge(key).is_some()
    }

    /// Remove the edge with exactly this identity, returning it.
    /// `None` means no such edge exists.
    pub fn remove_edge(&mut self, key: &EdgeKey) -> Option<Edge> {
        let id = self.find_edge(key)?;
        self.edges.remove(&id)
    }

    pub fn remove_edge_by_id(&mut self, id: EdgeId) -> Option<Edge> {
        self.edges.remove(&id)
    }

    /// Replace the relation of the edge `key`, keeping weight and flags.
    /// `Ok(None)` means no such edge exists.
    pub fn relabel_edge(&mut self, key: &EdgeKey, relation: &str) -> Result<Option<EdgeId>> {
        let Some(old) = self.remove_edge(key) else {
            return Ok(None);
        };
        self.add_edge(old.relabeled(relation)).map(Some)
    }

    /// All edges ordered by governor, dependent, then relation.
    pub fn edges_sorted(&self) -> Vec<&Edge> {
        let mut edges: Vec<&Edge> = self.edges.values().collect();
        edges.sort_by(|a, b| {
            a.governor.cmp(&b.governor).then(a.dependent.cmp(&b.dependent)).then(a.relation.cmp(&b.relation))
        });
        edges
    }

    /// Outgoing edges of `id` ordered by dependent, then relation.
    pub fn out_edges_sorted(&self, id: NodeId) -> Vec<&Edge> {
        let mut edges: Vec<&Edge> = self.edges.values().filter(|e| e.governor == id).collect();
        edges.sort_by(|a, b| a.dependent.cmp(&b.dependent).then(a.relation.cmp(&b.relation)));
        edges
    }

    pub fn out_edge_ids(&self, id: NodeId) -> Vec<EdgeId> {
        self.edges.iter().filter(|(_, e)| e.governor == id).map(|(eid, _)| *eid).collect()
    }

    pub fn in_edges(&self, id: NodeId) -> Vec<&Edge> {
        self.edges.values().filter(|e| e.dependent == id).collect()
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        self.edges.values().any(|e| e.governor == id)
    }

    /// Nodes without outgoing edges, in index order.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().filter(|id| !self.has_children(*id)).collect()
    }

    pub fn roots(&self) -> Vec<NodeId> {
        self.roots.iter().copied().collect()
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        self.roots.contains(&id)
    }

    pub fn add_root(&mut self, id: NodeId) -> Result<()> {
        if !self.contains(id) {
            return Err(RewriteError::UnknownNode(id));
        }
        self.roots.insert(id);
        Ok(())
    }

    pub fn remove_root(&mut self, id: NodeId) -> bool {
        self.roots.remove(&id)
    }

    /// Check the endpoint and root invariants.
    pub fn check_invariants(&self) -> Result<()> {
        for edge in self.edges.values() {
            for endpoint in [edge.governor, edge.dependent] {
                if !self.contains(endpoint) {
                    return Err(RewriteError::UnknownNode(endpoint));
                }
            }
        }
        if let Some(root) = self.roots.iter().find(|r| !self.contains(**r)) {
            return Err(RewriteError::UnknownNode(*root));
        }
        Ok(())
    }
}

impl GraphView for DependencyGraph {
    fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    fn word(&self, id: NodeId) -> Option<&Word> {
        self.node(id)
    }

    fn outgoing(&self, id: NodeId) -> Vec<&Edge> {
        self.out_edges_sorted(id)
    }

    fn incoming(&self, id: NodeId) -> Vec<&Edge> {
        self.in_edges(id)
    }
}
