use crate::conll::from_conll;
use crate::engine::find_match;
use crate::error::RewriteError;
use crate::graph::{DependencyGraph, EdgeKey, NodeId};
use crate::rules::graph::patterns::{A_LOT_OF, N_OF, TERMINAL_HAS};
use crate::rules::graph::{rewrite_drop_determiners, rewrite_mods, rewrite_rooted_quantifier, rewrite_terminal_has};

fn parse(rows: &[&str]) -> DependencyGraph {
    from_conll(&rows.join("\n")).unwrap()
}

fn has(g: &DependencyGraph, gov: usize, dep: usize, rel: &str) -> bool {
    g.has_edge(&EdgeKey::primary(NodeId(gov), NodeId(dep), rel))
}

fn eats_a_lot_of_cake() -> DependencyGraph {
    parse(&[
        "1 He he PRP 2 nsubj",
        "2 eats eat VBZ 0 root",
        "3 a a DT 4 det",
        "4 lot lot NN 2 dobj",
        "5 of of IN 6 case",
        "6 cake cake NN 4 nmod:of",
    ])
}

#[test]
fn a_lot_of_becomes_amod() {
    let mut g = eats_a_lot_of_cake();
    assert_eq!(rewrite_mods(&mut g).unwrap(), 1);

    assert!(has(&g, 2, 6, "dobj"));
    assert!(has(&g, 6, 4, "amod"));
    assert!(!has(&g, 2, 4, "dobj"));
    assert!(!has(&g, 4, 6, "nmod:of"));
    // The determiner stays attached to "lot".
    assert!(has(&g, 4, 3, "det"));

    let added = g.in_edges(NodeId(6)).into_iter().find(|e| e.relation == "dobj").unwrap();
    assert!(added.synthetic);
    assert!(g.check_invariants().is_ok());
}

#[test]
fn a_lot_of_without_article_still_matches() {
    let mut g = parse(&["1 eats eat VBZ 0 root", "2 lot lot NN 1 dobj", "3 cake cake NN 2 nmod:of"]);
    assert_eq!(rewrite_mods(&mut g).unwrap(), 1);
    assert!(has(&g, 1, 3, "dobj"));
    assert!(has(&g, 3, 2, "amod"));
}

#[test]
fn rewritten_instance_does_not_match_again() {
    let mut g = eats_a_lot_of_cake();
    rewrite_mods(&mut g).unwrap();
    assert!(find_match(&g, &A_LOT_OF).is_none());
    assert_eq!(rewrite_mods(&mut g).unwrap(), 0);
}

#[test]
fn only_the_first_instance_is_rewritten() {
    let mut g = parse(&[
        "1 eats eat VBZ 0 root",
        "2 lot lot NN 1 dobj",
        "3 cake cake NN 2 nmod:of",
        "4 drinks drink VBZ 1 conj",
        "5 lot lot NN 4 dobj",
        "6 tea tea NN 5 nmod:of",
    ]);
    assert_eq!(rewrite_mods(&mut g).unwrap(), 1);
    assert!(has(&g, 1, 3, "dobj"));
    assert!(has(&g, 4, 5, "dobj"));

    // The second instance is still there for a later call.
    assert!(find_match(&g, &A_LOT_OF).is_some());
    assert_eq!(rewrite_mods(&mut g).unwrap(), 1);
    assert!(has(&g, 4, 6, "dobj"));
}

#[test]
fn n_of_becomes_amod() {
    let mut g = parse(&[
        "1 Three three CD 5 nsubj",
        "2 of of IN 4 case",
        "3 the the DT 4 det",
        "4 cats cat NNS 1 nmod:of",
        "5 sleep sleep VBP 0 root",
    ]);
    assert_eq!(rewrite_mods(&mut g).unwrap(), 1);

    assert!(has(&g, 5, 4, "nsubj"));
    assert!(has(&g, 4, 1, "amod"));
    assert!(!has(&g, 5, 1, "nsubj"));
    assert!(!has(&g, 1, 4, "nmod:of"));
    assert!(find_match(&g, &N_OF).is_none());
}

#[test]
fn n_of_requires_a_cardinal() {
    let mut g = parse(&["1 Most most JJS 3 nsubj", "2 cats cat NNS 1 nmod:of", "3 sleep sleep VBP 0 root"]);
    assert_eq!(rewrite_mods(&mut g).unwrap(), 0);
    assert!(has(&g, 3, 1, "nsubj"));
}

#[test]
fn every_num_one_becomes_det() {
    let mut g = parse(&[
        "1 One one CD 2 num",
        "2 cat cat NN 3 nsubj",
        "3 saw see VBD 0 root",
        "4 1 1 CD 5 num",
        "5 dog dog NN 3 dobj",
        "6 two two CD 7 num",
        "7 birds bird NNS 3 nmod",
    ]);
    assert_eq!(rewrite_mods(&mut g).unwrap(), 2);

    assert!(has(&g, 2, 1, "det"));
    assert!(has(&g, 5, 4, "det"));
    assert!(has(&g, 7, 6, "num"));
    assert!(!has(&g, 2, 1, "num"));

    let relabeled = g.in_edges(NodeId(1)).into_iter().next().unwrap();
    assert!(!relabeled.synthetic);
    assert_eq!(relabeled.weight, 1.0);
}

#[test]
fn one_under_other_relations_is_untouched() {
    let mut g = parse(&["1 one one CD 2 nsubj", "2 left leave VBD 0 root"]);
    assert_eq!(rewrite_mods(&mut g).unwrap(), 0);
    assert!(has(&g, 2, 1, "nsubj"));
}

#[test]
fn matched_edge_that_cannot_be_removed_is_fatal() {
    // "lot" hangs off the verb only through an extra edge: the matcher sees it,
    // but removal by primary identity fails.
    let mut g = parse(&["1 eats eat VBZ 0 root", "2 lot lot NN _ _ _ 1:dobj", "3 cake cake NN 2 nmod:of"]);
    let err = rewrite_mods(&mut g).unwrap_err();
    assert_eq!(err, RewriteError::MissingEdge { rule: "mods", edge: EdgeKey::primary(NodeId(1), NodeId(2), "dobj") });
}

#[test]
fn rooted_quantifier_moves_root_to_next_dependent() {
    let mut g = parse(&[
        "1 all all DT 0 root all",
        "2 cats cat NNS 3 nsubj",
        "3 have have VBP 1 dep",
        "4 tails tail NNS 3 dobj",
    ]);
    assert_eq!(rewrite_rooted_quantifier(&mut g).unwrap(), 1);

    assert_eq!(g.roots(), vec![NodeId(3)]);
    assert!(has(&g, 3, 1, "op"));
    assert!(!has(&g, 1, 3, "dep"));
    assert!(g.in_edges(NodeId(1)).iter().all(|e| e.synthetic));
}

#[test]
fn rooted_quantifier_prefers_first_dependent_after_the_operator() {
    let mut g = parse(&[
        "1 cats cat NNS 2 dep",
        "2 some some DT 0 root some",
        "3 dogs dog NNS 2 dep",
        "4 bark bark VBP 2 dep",
    ]);
    rewrite_rooted_quantifier(&mut g).unwrap();
    assert_eq!(g.roots(), vec![NodeId(3)]);
    assert!(has(&g, 3, 2, "op"));
    assert!(has(&g, 2, 1, "dep"));
}

#[test]
fn rooted_quantifier_falls_back_to_first_sorted_edge() {
    let mut g = parse(&["1 dogs dog NNS 3 dep", "2 cats cat NNS 3 dep", "3 no no DT 0 root no"]);
    rewrite_rooted_quantifier(&mut g).unwrap();
    assert_eq!(g.roots(), vec![NodeId(1)]);
    assert!(has(&g, 1, 3, "op"));
}

#[test]
fn rooted_quantifier_leaves_plain_or_childless_roots() {
    let mut plain = parse(&["1 cats cat NNS 2 nsubj", "2 sleep sleep VBP 0 root"]);
    assert_eq!(rewrite_rooted_quantifier(&mut plain).unwrap(), 0);
    assert_eq!(plain.roots(), vec![NodeId(2)]);

    let mut alone = parse(&["1 all all DT 0 root all"]);
    assert_eq!(rewrite_rooted_quantifier(&mut alone).unwrap(), 0);
    assert_eq!(alone.roots(), vec![NodeId(1)]);
}

#[test]
fn drop_determiners_removes_article_leaves() {
    let mut g = parse(&[
        "1 The the DT 2 det",
        "2 cat cat NN 0 root",
        "3 who who WP 4 nsubj",
        "4 sleeps sleep VBZ 2 acl:relcl",
        "5 an an DT 6 det",
        "6 apple apple NN 4 dobj",
    ]);
    assert_eq!(rewrite_drop_determiners(&mut g).unwrap(), 3);

    assert!(!g.contains(NodeId(1)));
    assert!(!g.contains(NodeId(5)));
    assert!(has(&g, 4, 3, "det"));
    assert!(!has(&g, 4, 3, "nsubj"));
    for leaf in g.leaves() {
        let word = &g.node(leaf).unwrap().word;
        assert!(!["the", "a", "an"].contains(&word.to_lowercase().as_str()));
    }
}

#[test]
fn drop_determiners_keeps_articles_with_children() {
    let mut g = parse(&["1 A a DT 0 root", "2 cat cat NN 1 dep"]);
    assert_eq!(rewrite_drop_determiners(&mut g).unwrap(), 0);
    assert!(g.contains(NodeId(1)));
}

#[test]
fn drop_determiners_removes_a_lone_article_root() {
    let mut lone = parse(&["1 the the DT 0 root"]);
    assert_eq!(rewrite_drop_determiners(&mut lone).unwrap(), 1);
    assert_eq!(lone.node_count(), 0);
    assert!(lone.roots().is_empty());
}

fn more_than_he_has(preposition: &str) -> DependencyGraph {
    parse(&[
        "1\tI\tI\tPRP\t2\tnsubj",
        "2\thave\thave\tVBP\t0\troot",
        "3\tmore\tmore\tJJR\t2\tdobj",
        &format!("4\t{preposition}\t{preposition}\tIN\t6\tmark"),
        "5\the\the\tPRP\t6\tnsubj",
        "6\thas\thave\tVBZ\t2\tadvcl",
        "7\tnow\tnow\tRB\t6\tadvmod",
    ])
}

#[test]
fn terminal_has_collapses_the_clause() {
    let mut g = more_than_he_has("than");
    assert_eq!(rewrite_terminal_has(&mut g).unwrap(), 1);

    assert!(!g.contains(NodeId(4)));
    assert!(!has(&g, 2, 6, "advcl"));
    assert!(has(&g, 2, 5, "nmod:than"));
    assert!(has(&g, 5, 6, "mark"));
    assert!(has(&g, 2, 7, "advmod"));
    assert!(!has(&g, 6, 7, "advmod"));
    assert!(g.out_edges_sorted(NodeId(6)).is_empty());
    assert_eq!(g.roots(), vec![NodeId(2)]);

    assert!(find_match(&g, &TERMINAL_HAS).is_none());
    assert_eq!(rewrite_terminal_has(&mut g).unwrap(), 0);
}

#[test]
fn terminal_has_names_multiword_prepositions() {
    let mut g = more_than_he_has("Rather than");
    rewrite_terminal_has(&mut g).unwrap();
    assert!(has(&g, 2, 5, "nmod:rather_than"));
}

#[test]
fn terminal_has_fails_when_the_mark_edge_is_only_secondary() {
    let mut g = parse(&[
        "1 I I PRP 2 nsubj",
        "2 run run VBP 0 root",
        "3 than than IN _ _ _ 5:mark",
        "4 he he PRP 5 nsubj",
        "5 has have VBZ 2 advcl",
    ]);
    let err = rewrite_terminal_has(&mut g).unwrap_err();
    assert_eq!(err, RewriteError::MissingEdge { rule: "has", edge: EdgeKey::primary(NodeId(5), NodeId(3), "mark") });
}

#[test]
fn terminal_has_accepts_dep_clauses_only_with_a_have_form() {
    let mut dep = parse(&[
        "1 I I PRP 2 nsubj",
        "2 run run VBP 0 root",
        "3 than than IN 5 mark",
        "4 he he PRP 5 nsubj",
        "5 was be VBD 2 dep",
    ]);
    assert_eq!(rewrite_terminal_has(&mut dep).unwrap(), 1);
    assert!(has(&dep, 2, 4, "nmod:than"));

    let mut other = parse(&[
        "1 I I PRP 2 nsubj",
        "2 run run VBP 0 root",
        "3 than than IN 5 mark",
        "4 he he PRP 5 nsubj",
        "5 runs run VBZ 2 advcl",
    ]);
    assert_eq!(rewrite_terminal_has(&mut other).unwrap(), 0);
}
