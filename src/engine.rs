//! Rewrite engine.
//!
//! The engine is split into focused submodules under `src/engine/`:
//!
//! ```text
//! GraphPattern (pattern.rs) ──▶ find_match (matcher.rs) ──▶ graph rules
//!                                                              │
//! Filters (filters.rs) ──────────────┐                         │
//!                                    ▼                         ▼
//!                        Pipeline::run_text / run_graph (pipeline.rs)
//!                                    │
//!                                    ▼
//!                          RunMetrics (metrics.rs)
//! ```
//!
//! - `pattern.rs`: the pattern language (node and edge constraints) and its
//!   builder.
//! - `matcher.rs`: read-only backtracking search for the first binding of a
//!   pattern in a graph.
//! - `filters.rs`: the set of enabled rules and its configuration syntax.
//! - `pipeline.rs`: runs the enabled rules in fixed order, feeding each rule's
//!   output to the next.
//! - `metrics.rs`: per-rule timing and rewrite counts.
//!
//! ## Adding a rule
//!
//! - Add a `Filters` bit and its configuration name in `filters.rs`.
//! - Write the rule under `src/rules/**` and register it in `rules::all` at
//!   the position it should run.
//!
//! ## Debugging
//!
//! Rule applications are logged at `debug` level and matcher results at
//! `trace` level through `tracing`.

#[path = "engine/filters.rs"]
mod filters;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/pattern.rs"]
mod pattern;
#[path = "engine/pipeline.rs"]
mod pipeline;

pub use filters::Filters;
pub use matcher::{Match, find_match};
pub use metrics::{RulePass, RunMetrics};
pub use pattern::{EdgeConstraint, GraphPattern, NodeConstraint, PatternBuilder, RelationMatch};
pub(crate) use pipeline::Pipeline;
