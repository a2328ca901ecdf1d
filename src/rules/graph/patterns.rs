//! Structural patterns used by the graph rules.

use crate::engine::{GraphPattern, NodeConstraint, RelationMatch};
use once_cell::sync::Lazy;

/// `verb >dobj (lot ?>det a >nmod:of obj)`, e.g. "eats a lot of cake".
pub static A_LOT_OF: Lazy<GraphPattern> = Lazy::new(|| {
    GraphPattern::builder("a lot of")
        .node("verb", NodeConstraint::Any)
        .node("lot", NodeConstraint::Word("lot"))
        .node("a", NodeConstraint::Word("a"))
        .node("obj", NodeConstraint::Any)
        .edge("verb", "lot", RelationMatch::Exact("dobj"))
        .optional_edge("lot", "a", RelationMatch::Exact("det"))
        .edge("lot", "obj", RelationMatch::Exact("nmod:of"))
        .build()
        .unwrap()
});

/// `verb >nsubj (num{CD} >nmod:of obj)`, e.g. "three of the cats sleep".
pub static N_OF: Lazy<GraphPattern> = Lazy::new(|| {
    GraphPattern::builder("N of")
        .node("verb", NodeConstraint::Any)
        .node("num", NodeConstraint::Tag("CD"))
        .node("obj", NodeConstraint::Any)
        .edge("verb", "num", RelationMatch::Exact("nsubj"))
        .edge("num", "obj", RelationMatch::Exact("nmod:of"))
        .build()
        .unwrap()
});

/// `root >advcl|dep (has >mark prep{IN} >nsubj pobj)`, e.g. "I have more than he has".
pub static TERMINAL_HAS: Lazy<GraphPattern> = Lazy::new(|| {
    GraphPattern::builder("terminal has")
        .node("root", NodeConstraint::Any)
        .node("has", NodeConstraint::WordRegex(regex!(r"^(?:has|have|had|is|was)$")))
        .node("prep", NodeConstraint::Tag("IN"))
        .node("pobj", NodeConstraint::Any)
        .edge("root", "has", RelationMatch::Regex(regex!(r"^(?:advcl|dep)$")))
        .capture_relation("clause")
        .edge("has", "prep", RelationMatch::Exact("mark"))
        .edge("has", "pobj", RelationMatch::Exact("nsubj"))
        .build()
        .unwrap()
});
