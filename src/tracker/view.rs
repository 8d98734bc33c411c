use std::collections::BTreeSet;

/// Presentation state the tracker writes to but does not own.
pub trait TocView {
    /// Replace the "current heading" label.
    fn set_current(&mut self, text: &str);
    /// Toggle the active marker on the TOC link for `slug`. Idempotent.
    fn set_link_active(&mut self, slug: &str, active: bool);
    fn disclosure_open(&self) -> bool;
    fn set_disclosure_open(&mut self, open: bool);
}

/// In-memory view used by the CLI replay and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryView {
    pub current: Option<String>,
    pub active_links: BTreeSet<String>,
    pub disclosure_open: bool,
}

impl TocView for MemoryView {
    fn set_current(&mut self, text: &str) {
        self.current = Some(text.to_string());
    }

    fn set_link_active(&mut self, slug: &str, active: bool) {
        if active {
            self.active_links.insert(slug.to_string());
        } else {
            self.active_links.remove(slug);
        }
    }

    fn disclosure_open(&self) -> bool {
        self.disclosure_open
    }

    fn set_disclosure_open(&mut self, open: bool) {
        self.disclosure_open = open;
    }
}
