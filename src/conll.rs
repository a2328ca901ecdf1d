//! Tab-separated graph format.
//!
//! One token per line:
//!
//! ```text
//! index  word  lemma  tag  head  relation  [operator]  [extra]
//! 1      all   all    DT   2     det       all         _
//! 2      cats  cat    NNS  3     nsubj     _           _
//! 3      have  have   VBP  0     root      _           _
//! ```
//!
//! `head` 0 marks a root and `_` a token without a head. `operator` is the
//! upstream annotator's marker or `_`. `extra` lists secondary edges as
//! `head:relation` items joined by `|`. Blank lines and lines starting with
//! `#` are skipped. Columns are tab-separated; lines without tabs are split on
//! whitespace.

use crate::error::{Result, RewriteError};
use crate::graph::{DependencyGraph, Edge, NodeId, Word};

/// Read a graph from the tab-separated format.
pub fn from_conll(input: &str) -> Result<DependencyGraph> {
    let mut graph = DependencyGraph::new();
    let mut pending: Vec<(usize, Edge)> = Vec::new();
    let mut roots: Vec<(usize, NodeId)> = Vec::new();

    for (i, raw) in input.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim_end();
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let cols: Vec<&str> =
            if line.contains('\t') { line.split('\t').collect() } else { line.split_whitespace().collect() };
        if cols.len() < 6 {
            return Err(malformed(line_no, format!("expected at least 6 columns, found {}", cols.len())));
        }

        let index = parse_index(line_no, cols[0])?;
        if index == 0 {
            return Err(malformed(line_no, "token index 0 is reserved for the virtual root"));
        }
        if graph.contains(NodeId(index)) {
            return Err(malformed(line_no, format!("duplicate token index {index}")));
        }

        let mut word = Word::new(index, cols[1], cols[2], cols[3]);
        if let Some(op) = cols.get(6).filter(|op| **op != "_") {
            word = word.with_operator(op);
        }
        let id = graph.add_node(word);

        match cols[4] {
            "_" => {}
            "0" => roots.push((line_no, id)),
            head => {
                let head = parse_index(line_no, head)?;
                pending.push((line_no, Edge::new(NodeId(head), id, cols[5])));
            }
        }

        if let Some(extra) = cols.get(7).filter(|extra| **extra != "_") {
            for item in extra.split('|') {
                let Some((head, relation)) = item.split_once(':') else {
                    return Err(malformed(line_no, format!("extra edge `{item}` is not head:relation")));
                };
                let head = parse_index(line_no, head)?;
                pending.push((line_no, Edge { extra: true, ..Edge::new(NodeId(head), id, relation) }));
            }
        }
    }

    for (line_no, edge) in pending {
        let governor = edge.governor;
        graph.add_edge(edge).map_err(|_| malformed(line_no, format!("head {governor} is not a token")))?;
    }
    for (line_no, id) in roots {
        graph.add_root(id).map_err(|_| malformed(line_no, format!("root {id} is not a token")))?;
    }

    Ok(graph)
}

/// Write a graph in the tab-separated format.
///
/// Roots are written with head 0. Otherwise the lowest-governed primary edge
/// becomes the printed head and every other incoming edge goes to the extra
/// column.
pub fn to_conll(graph: &DependencyGraph) -> String {
    let mut out = String::new();

    for word in graph.nodes() {
        let mut incoming = graph.in_edges(word.index);
        incoming.sort_by(|a, b| a.governor.cmp(&b.governor).then(a.relation.cmp(&b.relation)));

        let (head, relation) = if graph.is_root(word.index) {
            ("0".to_string(), "root".to_string())
        } else if let Some(pos) = incoming.iter().position(|e| !e.extra) {
            let primary = incoming.remove(pos);
            (primary.governor.to_string(), primary.relation.clone())
        } else {
            ("_".to_string(), "_".to_string())
        };

        let extra = if incoming.is_empty() {
            "_".to_string()
        } else {
            incoming.iter().map(|e| format!("{}:{}", e.governor, e.relation)).collect::<Vec<_>>().join("|")
        };

        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            word.index,
            word.word,
            word.lemma,
            word.tag,
            head,
            relation,
            word.operator.as_deref().unwrap_or("_"),
            extra
        ));
    }

    out
}

fn parse_index(line: usize, field: &str) -> Result<usize> {
    field.parse::<usize>().map_err(|_| malformed(line, format!("`{field}` is not a token index")))
}

fn malformed(line: usize, reason: impl Into<String>) -> RewriteError {
    RewriteError::Malformed { line, reason: reason.into() }
}
