//! Dependency-graph rewrites.
//!
//! Each rule matches once (unless noted) and splices edges:
//!
//! ```text
//! mods     verb -dobj-> lot -nmod:of-> cake   ==>  verb -dobj-> cake -amod-> lot
//!          verb -nsubj-> three -nmod:of-> cats ==> verb -nsubj-> cats -amod-> three
//!          x -num-> one                        ==>  x -det-> one          (every edge)
//! rootedq  [all] -x-> cats                     ==>  [cats] -op-> all
//! dropdet  leaf the/a/an removed; edges into WP leaves become det
//! has      have -advcl-> has -mark-> than, has -nsubj-> he
//!                                              ==>  have -nmod:than-> he -mark-> has
//! ```
//!
//! A graph rule returns the number of rewrites it made. When an edge its own
//! match vouched for cannot be removed, the rule fails with
//! `RewriteError::MissingEdge` and leaves the graph half rewritten.

use super::helpers::{add_synthetic_edge, nmod_relation, remove_required_edge};
use super::patterns::{A_LOT_OF, N_OF, TERMINAL_HAS};
use crate::Rule;
use crate::engine::{Filters, GraphPattern, find_match};
use crate::error::{Result, RewriteError};
use crate::graph::{DependencyGraph, Edge, EdgeKey, NodeId};
use tracing::debug;

const MODS: &str = "mods";
const ROOTED_Q: &str = "rootedq";
const DROP_DET: &str = "dropdet";
const HAS: &str = "has";

/// Quantity modifiers become adjectival modifiers of the thing quantified,
/// and the numeral "one" becomes a determiner.
pub fn rewrite_mods(graph: &mut DependencyGraph) -> Result<usize> {
    let mut rewrites = 0;
    if rewrite_head_to_amod(graph, &A_LOT_OF, "lot", "dobj")? {
        rewrites += 1;
    }
    if rewrite_head_to_amod(graph, &N_OF, "num", "nsubj")? {
        rewrites += 1;
    }
    rewrites += relabel_one_as_determiner(graph)?;
    Ok(rewrites)
}

/// `verb -rel-> head -nmod:of-> obj` becomes `verb -rel-> obj -amod-> head`.
fn rewrite_head_to_amod(
    graph: &mut DependencyGraph,
    pattern: &GraphPattern,
    head_name: &str,
    relation: &str,
) -> Result<bool> {
    let Some(m) = find_match(graph, pattern) else {
        return Ok(false);
    };
    let (Some(verb), Some(head), Some(obj)) = (m.node("verb"), m.node(head_name), m.node("obj")) else {
        return Ok(false);
    };
    debug!(pattern = pattern.name(), %verb, %head, %obj, "rewriting quantity head as amod");

    remove_required_edge(graph, MODS, EdgeKey::primary(verb, head, relation))?;
    remove_required_edge(graph, MODS, EdgeKey::primary(head, obj, "nmod:of"))?;
    add_synthetic_edge(graph, verb, obj, relation)?;
    add_synthetic_edge(graph, obj, head, "amod")?;
    Ok(true)
}

/// Relabel every `num` edge into "one"/"1" as `det`.
fn relabel_one_as_determiner(graph: &mut DependencyGraph) -> Result<usize> {
    let targets: Vec<EdgeKey> = graph
        .edges_sorted()
        .into_iter()
        .filter(|e| e.relation == "num")
        .filter(|e| graph.node(e.dependent).is_some_and(|w| w.word.eq_ignore_ascii_case("one") || w.word == "1"))
        .map(Edge::key)
        .collect();

    let mut relabeled = Vec::with_capacity(targets.len());
    for key in targets {
        relabeled.push(remove_required_edge(graph, MODS, key)?);
    }
    for edge in &relabeled {
        graph.add_edge(edge.relabeled("det"))?;
    }
    Ok(relabeled.len())
}

/// Move the root off any operator word: the operator's nearest following
/// dependent becomes the root and governs the operator through an `op` edge.
pub fn rewrite_rooted_quantifier(graph: &mut DependencyGraph) -> Result<usize> {
    let mut rewrites = 0;

    for root in graph.roots() {
        if !graph.node(root).is_some_and(|w| w.is_operator()) {
            continue;
        }
        let out = graph.out_edges_sorted(root);
        let Some(chosen) = out.iter().find(|e| e.dependent > root).or(out.first()).map(|e| (*e).clone()) else {
            continue;
        };

        remove_required_edge(graph, ROOTED_Q, chosen.key())?;
        graph.remove_root(root);
        graph.add_root(chosen.dependent)?;
        graph.add_edge(Edge { weight: chosen.weight, synthetic: true, ..Edge::new(chosen.dependent, root, "op") })?;
        debug!(old_root = %root, new_root = %chosen.dependent, "moved root off quantifier");
        rewrites += 1;
    }

    Ok(rewrites)
}

/// Drop leaf articles, then mark edges into WH-pronoun leaves as `det`.
pub fn rewrite_drop_determiners(graph: &mut DependencyGraph) -> Result<usize> {
    let mut rewrites = 0;

    let articles: Vec<NodeId> = graph
        .leaves()
        .into_iter()
        .filter(|id| graph.node(*id).is_some_and(|w| is_article(&w.word)))
        .collect();
    for id in articles {
        graph.remove_node(id).ok_or(RewriteError::MissingNode { rule: DROP_DET, node: id })?;
        rewrites += 1;
    }

    let wh_leaves: Vec<NodeId> =
        graph.leaves().into_iter().filter(|id| graph.node(*id).is_some_and(|w| w.tag == "WP")).collect();
    for id in wh_leaves {
        let incoming: Vec<EdgeKey> =
            graph.in_edges(id).into_iter().filter(|e| e.relation != "det").map(Edge::key).collect();
        for key in incoming {
            let edge = remove_required_edge(graph, DROP_DET, key)?;
            graph.add_edge(edge.relabeled("det"))?;
            rewrites += 1;
        }
    }

    Ok(rewrites)
}

fn is_article(word: &str) -> bool {
    ["the", "a", "an"].iter().any(|article| word.eq_ignore_ascii_case(article))
}

/// Collapse a comparative clause with its own verb ("... more than he has")
/// so the compared noun hangs directly off the main predicate.
pub fn rewrite_terminal_has(graph: &mut DependencyGraph) -> Result<usize> {
    let Some(m) = find_match(graph, &TERMINAL_HAS) else {
        return Ok(0);
    };
    let (Some(root), Some(has), Some(prep), Some(pobj), Some(clause)) =
        (m.node("root"), m.node("has"), m.node("prep"), m.node("pobj"), m.relation("clause"))
    else {
        return Ok(0);
    };
    let clause = clause.to_string();

    remove_required_edge(graph, HAS, EdgeKey::primary(root, has, &clause))?;
    remove_required_edge(graph, HAS, EdgeKey::primary(has, prep, "mark"))?;
    remove_required_edge(graph, HAS, EdgeKey::primary(has, pobj, "nsubj"))?;
    let prep_word = graph.remove_node(prep).ok_or(RewriteError::MissingNode { rule: HAS, node: prep })?;

    let mut detached = Vec::new();
    for id in graph.out_edge_ids(has) {
        if let Some(edge) = graph.remove_edge_by_id(id) {
            detached.push(edge);
        }
    }

    add_synthetic_edge(graph, root, pobj, &nmod_relation(&prep_word.word))?;
    add_synthetic_edge(graph, pobj, has, "mark")?;
    for edge in &detached {
        add_synthetic_edge(graph, root, edge.dependent, &edge.relation)?;
    }
    debug!(%root, %has, preposition = %prep_word.word, reattached = detached.len(), "collapsed terminal clause");

    Ok(1)
}

pub fn get() -> Vec<Rule> {
    vec![
        graph_rule! { name: MODS, filter: Filters::MODS, rewrite: rewrite_mods },
        graph_rule! { name: ROOTED_Q, filter: Filters::ROOTED_Q, rewrite: rewrite_rooted_quantifier },
        graph_rule! { name: DROP_DET, filter: Filters::DROP_DET, rewrite: rewrite_drop_determiners },
        graph_rule! { name: HAS, filter: Filters::HAS, rewrite: rewrite_terminal_has },
    ]
}
