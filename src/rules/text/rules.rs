//! Surface-text rewrites.

use crate::Rule;
use crate::engine::Filters;
use crate::lexicon::starts_with_operator;
use crate::rules::text::helpers::capitalize_first;

/// "There are cats who are friendly" -> "Some cats are friendly".
///
/// The existential is turned into an explicit quantifier so the parse of the
/// remainder carries it. A remainder that already starts with an operator
/// ("There are no cats which ...") keeps its own quantifier.
pub fn rewrite_there_be(input: &str) -> Option<String> {
    let caps = regex!(
        r"^[Tt]here (?:is|are|was|were|will be|would be|has been|have been) (.*) (?:who|which) (.*)$"
    )
    .captures(input)?;

    let body = format!("{} {}", &caps[1], &caps[2]);
    if starts_with_operator(&body) { Some(capitalize_first(&body)) } else { Some(format!("Some {body}")) }
}

/// "At least a few dogs barked" -> "A few dogs barked".
pub fn rewrite_at_least_a_few(input: &str) -> Option<String> {
    let re = regex!(r"^[Aa]t least (a few|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|[0-9]+)");
    let caps = re.captures(input)?;
    let quantity = caps.get(1)?.as_str();
    let rest = &input[caps.get(0)?.end()..];

    Some(capitalize_first(&format!("{quantity}{rest}")))
}

pub fn get() -> Vec<Rule> {
    vec![
        text_rule! { name: "therebe", filter: Filters::THERE_BE, rewrite: rewrite_there_be },
        text_rule! { name: "atleastafew", filter: Filters::AT_LEAST_A_FEW, rewrite: rewrite_at_least_a_few },
    ]
}
