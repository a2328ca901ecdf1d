pub(crate) mod helpers;
pub(crate) mod rules;

#[cfg(test)]
mod tests;

pub use rules::{rewrite_at_least_a_few, rewrite_there_be};
