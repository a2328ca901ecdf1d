use crate::rules::text::helpers::capitalize_first;
use crate::rules::text::{rewrite_at_least_a_few, rewrite_there_be};

#[test]
fn there_be_examples() {
    // (input, expected)
    let cases: Vec<(&str, &str)> = vec![
        ("There are cats who are friendly", "Some cats are friendly"),
        ("there is a cat which sleeps", "A cat sleeps"),
        ("There were no dogs who barked", "No dogs barked"),
        ("There have been many people who left early", "Many people left early"),
        ("There will be students who pass", "Some students pass"),
        ("There are apples which are red", "Apples are red"),
        ("There are Cats who purr", "Some Cats purr"),
    ];

    for (input, expected) in cases {
        assert_eq!(rewrite_there_be(input).as_deref(), Some(expected), "input: '{input}'");
    }
}

#[test]
fn there_be_binds_the_last_relative_pronoun() {
    assert_eq!(
        rewrite_there_be("There are cats who like dogs who bark").as_deref(),
        Some("Some cats who like dogs bark")
    );
}

#[test]
fn there_be_leaves_other_sentences_alone() {
    for input in [
        "All cats have tails",
        "There are cats",
        "Where there are cats who hunt",
        "THERE are cats who are friendly",
        "There seem to be cats who are friendly",
        "",
    ] {
        assert_eq!(rewrite_there_be(input), None, "input: '{input}'");
    }
}

#[test]
fn at_least_examples() {
    let cases: Vec<(&str, &str)> = vec![
        ("At least a few dogs barked", "A few dogs barked"),
        ("at least three cats sleep", "Three cats sleep"),
        ("At least 12 people came", "12 people came"),
        ("At least twelve at least", "Twelve at least"),
        ("At least one", "One"),
    ];

    for (input, expected) in cases {
        assert_eq!(rewrite_at_least_a_few(input).as_deref(), Some(expected), "input: '{input}'");
    }
}

#[test]
fn at_least_leaves_other_sentences_alone() {
    for input in ["At least some dogs barked", "Dogs barked at least three times", "At most three cats", "at least"] {
        assert_eq!(rewrite_at_least_a_few(input), None, "input: '{input}'");
    }
}

#[test]
fn capitalizes_first_character_only() {
    assert_eq!(capitalize_first("élan vital"), "Élan vital");
    assert_eq!(capitalize_first("a Few"), "A Few");
    assert_eq!(capitalize_first(""), "");
}
