use crate::graph::{EdgeKey, NodeId};
use thiserror::Error;

/// Errors raised while configuring the rewriter or rewriting a graph.
///
/// A pattern that does not match is never an error; rules simply do nothing.
/// `MissingEdge` and `MissingNode` mean the graph disagreed with a match the
/// rule had just made. The graph is left partially rewritten and must not be
/// used further.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RewriteError {
    #[error("rule `{rule}` could not remove edge {edge}")]
    MissingEdge { rule: &'static str, edge: EdgeKey },

    #[error("rule `{rule}` could not remove node {node}")]
    MissingNode { rule: &'static str, node: NodeId },

    #[error("node {0} is not part of the graph")]
    UnknownNode(NodeId),

    #[error("rule `{rule}` left the graph without a root")]
    RootlessGraph { rule: &'static str },

    #[error("unknown rewrite filter `{0}`")]
    UnknownFilter(String),

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, RewriteError>;
