use std::fmt::Write;
use std::path::Path;

use crate::toc::tree::slugs;
use crate::tracker::Visibility;
use crate::types::{truncate_str, Heading};

/// Header line for a TOC listing:
/// `# path/to/post.md (N sections, M links)`
pub fn toc_header(path: &Path, sections: usize, tree: &[Heading]) -> String {
    format!(
        "# {} ({sections} sections, {} links)",
        path.display(),
        slugs(tree).len()
    )
}

/// Indented outline, two spaces per tree level, with the anchor slug.
pub fn outline(tree: &[Heading]) -> String {
    let mut out = String::new();
    for h in tree {
        write_node(&mut out, h, 0);
    }
    out
}

fn write_node(out: &mut String, h: &Heading, level: usize) {
    let indent = "  ".repeat(level);
    let text = if h.text.len() > 80 {
        format!("{}...", truncate_str(&h.text, 77))
    } else {
        h.text.clone()
    };
    let _ = writeln!(out, "{indent}{text}  #{}", h.slug);
    for child in &h.children {
        write_node(out, child, level + 1);
    }
}

/// One replay trace line: event number, outcome, and the label afterwards.
pub fn trace_line(n: usize, outcome: &str, current: Option<&str>) -> String {
    format!("[{n}] {outcome:<14} current: {}", current.unwrap_or("-"))
}

pub fn visibility(section: usize, v: Visibility) -> String {
    match v {
        Visibility::Inserted(i) => format!("show {section} @{i}"),
        Visibility::Removed(i) => format!("hide {section} @{i}"),
        Visibility::Duplicate => format!("dup {section}"),
        Visibility::Ignored => format!("skip {section}"),
    }
}
