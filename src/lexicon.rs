//! Operator lexicon: the quantifier surface forms the rewriter recognises.
//!
//! The lexicon is a fixed, read-only table. The rewriter only asks one
//! question of it: does a piece of text already begin with an operator?

/// A natural-logic operator known by its surface form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    pub name: &'static str,
    pub surface_form: &'static str,
}

const fn op(name: &'static str, surface_form: &'static str) -> Operator {
    Operator { name, surface_form }
}

/// Every operator, longer multi-word forms before their prefixes.
pub static OPERATORS: &[Operator] = &[
    // Universal
    op("the_lot_of", "the lot of"),
    op("all_of", "all of"),
    op("each_of", "each of"),
    op("for_all", "for all"),
    op("for_every", "for every"),
    op("for_each", "for each"),
    op("all", "all"),
    op("every", "every"),
    op("any", "any"),
    op("each", "each"),
    op("everyone", "everyone"),
    op("everything", "everything"),
    op("everybody", "everybody"),
    op("both", "both"),
    // Negative
    op("not_all", "not all"),
    op("not_every", "not every"),
    op("no_one", "no one"),
    op("nobody", "nobody"),
    op("nothing", "nothing"),
    op("none", "none"),
    op("neither", "neither"),
    op("no", "no"),
    op("not", "not"),
    op("few", "few"),
    op("but", "but"),
    op("except", "except"),
    op("at_most", "at most"),
    op("less_than", "less than"),
    op("fewer_than", "fewer than"),
    // Existential
    op("at_least_a_few", "at least a few"),
    op("at_least", "at least"),
    op("there_be_a_few", "there be a few"),
    op("there_be", "there be"),
    op("there_exist", "there exist"),
    op("some_of", "some of"),
    op("one_of", "one of"),
    op("a_few", "a few"),
    op("a_lot_of", "a lot of"),
    op("a_lot", "a lot"),
    op("lots_of", "lots of"),
    op("more_than", "more than"),
    op("some", "some"),
    op("someone", "someone"),
    op("something", "something"),
    op("several", "several"),
    op("either", "either"),
    op("an", "an"),
    op("a", "a"),
    op("the", "the"),
    // Non-monotone
    op("most", "most"),
    op("more", "more"),
    op("many", "many"),
    op("enough", "enough"),
];

/// Look up an operator by its surface form (case-insensitive).
pub fn operator(surface_form: &str) -> Option<&'static Operator> {
    OPERATORS.iter().find(|op| op.surface_form.eq_ignore_ascii_case(surface_form))
}

/// Whether `text` starts with an operator surface form. This is a plain,
/// case-sensitive prefix test: "apples" starts with the operator "a".
pub fn starts_with_operator(text: &str) -> bool {
    OPERATORS.iter().any(|op| text.starts_with(op.surface_form))
}
