use serde::{Deserialize, Serialize};

/// A heading as it appears in the document, before tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHeading {
    pub depth: u8,
    pub slug: String,
    pub text: String,
}

/// A node in the table-of-contents tree. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub depth: u8,
    pub slug: String,
    pub text: String,
    #[serde(default)]
    pub children: Vec<Heading>,
}

impl Heading {
    #[must_use]
    pub fn leaf(raw: &RawHeading) -> Self {
        Self {
            depth: raw.depth,
            slug: raw.slug.clone(),
            text: raw.text.clone(),
            children: Vec::new(),
        }
    }
}

/// One visible section heading held by the tracker's active set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEntry {
    pub slug: String,
    pub text: String,
}

/// A contiguous run of the document led by one heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: RawHeading,
    /// 1-indexed line of the heading.
    pub line: u32,
}

/// Truncate `s` to at most `max` bytes on a char boundary.
pub fn truncate_str(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundary() {
        assert_eq!(truncate_str("héllo", 2), "h");
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello", 3), "hel");
    }

    #[test]
    fn heading_json_defaults_children() {
        let h: Heading =
            serde_json::from_str(r#"{"depth":2,"slug":"intro","text":"Intro"}"#).unwrap();
        assert!(h.children.is_empty());
    }
}
