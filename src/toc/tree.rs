//! Flat heading list → table-of-contents tree.
//!
//! Headings at or above `root_depth` become roots. Deeper headings attach to
//! the most recent heading exactly one level shallower, whatever branch that
//! heading sits on. Headings deeper than `max_depth` are dropped. A heading
//! whose parent level was never recorded is orphaned: it is kept as an
//! attachment point for its own children but never reaches the tree, so its
//! whole subtree vanishes. Nothing is reparented to a surviving ancestor.

use crate::config::TocConfig;
use crate::types::{Heading, RawHeading};

struct Node<'a> {
    raw: &'a RawHeading,
    children: Vec<usize>,
}

pub fn build_toc(headings: &[RawHeading], config: &TocConfig) -> Vec<Heading> {
    let mut nodes: Vec<Node> = Vec::with_capacity(headings.len());
    let mut roots: Vec<usize> = Vec::new();
    // last[d] = most recent node of depth d
    let mut last: Vec<Option<usize>> = vec![None; usize::from(config.max_depth) + 1];

    for raw in headings {
        if raw.depth > config.max_depth {
            continue;
        }
        let idx = nodes.len();
        nodes.push(Node {
            raw,
            children: Vec::new(),
        });

        let depth = usize::from(raw.depth);
        if raw.depth <= config.root_depth {
            roots.push(idx);
        } else if let Some(parent) = last[depth - 1] {
            nodes[parent].children.push(idx);
        }
        last[depth] = Some(idx);
    }

    roots.iter().map(|&i| materialize(&nodes, i)).collect()
}

fn materialize(nodes: &[Node], idx: usize) -> Heading {
    let node = &nodes[idx];
    let mut heading = Heading::leaf(node.raw);
    heading.children = node.children.iter().map(|&c| materialize(nodes, c)).collect();
    heading
}

/// Every slug in the tree, pre-order.
pub fn slugs(tree: &[Heading]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut stack: Vec<&Heading> = tree.iter().rev().collect();
    while let Some(h) = stack.pop() {
        out.push(h.slug.as_str());
        stack.extend(h.children.iter().rev());
    }
    out
}
