pub(crate) mod helpers;
pub(crate) mod patterns;
pub(crate) mod rules;

#[cfg(test)]
mod tests;

pub use rules::{rewrite_drop_determiners, rewrite_mods, rewrite_rooted_quantifier, rewrite_terminal_has};
