#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! text_rule {
    (name: $name:expr, filter: $filter:expr, rewrite: $rewrite:expr $(,)?) => {
        $crate::Rule { name: $name, filter: $filter, action: $crate::Action::Text($rewrite) }
    };
}

#[macro_export]
macro_rules! graph_rule {
    (name: $name:expr, filter: $filter:expr, rewrite: $rewrite:expr $(,)?) => {
        $crate::Rule { name: $name, filter: $filter, action: $crate::Action::Graph($rewrite) }
    };
}
