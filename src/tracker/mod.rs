//! Active-heading tracking for one page view.
//!
//! The viewport observer reports, one notification at a time, whether a
//! section intersects the viewport. Visible sections are held in a
//! [`TotalOrderedSet`] keyed by the heading's pre-order weight, so the label
//! always shows the earliest visible heading in document order no matter in
//! which order the notifications arrive.

pub mod ordered_set;
pub mod view;

pub use ordered_set::{Rejected, TotalOrderedSet};
pub use view::{MemoryView, TocView};

use crate::config::TocConfig;
use crate::toc::{payload, WeightMap};
use crate::types::{ActiveEntry, Heading, Section};

/// What a visibility notification did to the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Entry added at this index.
    Inserted(usize),
    /// Entry removed from this index.
    Removed(usize),
    /// Already visible / already hidden; nothing changed.
    Duplicate,
    /// Section is not tracked (untracked heading level, no TOC link, or
    /// unknown section).
    Ignored,
}

/// Everything one page view needs: built once from the page's TOC payload
/// and the sections present at load time, dropped with the page.
pub struct TrackerSession {
    weights: WeightMap,
    active: TotalOrderedSet<ActiveEntry, u32>,
    sections: Vec<Section>,
    config: TocConfig,
}

impl TrackerSession {
    /// Initialize from the raw payload string the page embeds. A missing or
    /// malformed payload leaves the session inert.
    #[must_use]
    pub fn from_payload(raw: Option<&str>, sections: Vec<Section>, config: TocConfig) -> Self {
        Self::from_tree(&payload::decode(raw), sections, config)
    }

    #[must_use]
    pub fn from_tree(tree: &[Heading], sections: Vec<Section>, config: TocConfig) -> Self {
        let weights = WeightMap::from_tree(tree);
        tracing::debug!(
            links = weights.len(),
            sections = sections.len(),
            "tracker session started"
        );
        Self {
            weights,
            active: TotalOrderedSet::new(),
            sections,
            config,
        }
    }

    /// Handle one intersection notification for the section at `index`.
    /// `ratio > 0` means the section is at least partly in view.
    pub fn on_visibility(
        &mut self,
        index: usize,
        ratio: f64,
        view: &mut impl TocView,
    ) -> Visibility {
        let Some(section) = self.sections.get(index) else {
            return Visibility::Ignored;
        };
        let heading = &section.heading;
        if !self.config.observes(heading.depth) {
            return Visibility::Ignored;
        }
        let Some(weight) = self.weights.get(&heading.slug) else {
            tracing::debug!(slug = %heading.slug, "section has no toc link");
            return Visibility::Ignored;
        };
        let entry = ActiveEntry {
            slug: heading.slug.clone(),
            text: heading.text.clone(),
        };

        if ratio > 0.0 {
            let outcome = match self.active.insert(entry, weight) {
                Ok(0) => {
                    view.set_current(&heading.text);
                    Visibility::Inserted(0)
                }
                Ok(i) => Visibility::Inserted(i),
                Err(Rejected) => {
                    tracing::debug!(slug = %heading.slug, "already visible");
                    Visibility::Duplicate
                }
            };
            view.set_link_active(&heading.slug, true);
            outcome
        } else {
            let outcome = match self.active.remove(&entry, &weight) {
                Ok(0) => {
                    if let Some(first) = self.active.first() {
                        view.set_current(&first.text);
                    }
                    Visibility::Removed(0)
                }
                Ok(i) => Visibility::Removed(i),
                Err(Rejected) => {
                    tracing::debug!(slug = %heading.slug, "already hidden");
                    Visibility::Duplicate
                }
            };
            view.set_link_active(&heading.slug, false);
            outcome
        }
    }

    /// Collapse the TOC disclosure when a click lands outside it.
    pub fn on_click(&self, inside_toc: bool, view: &mut impl TocView) {
        if !inside_toc && view.disclosure_open() {
            view.set_disclosure_open(false);
        }
    }

    /// Earliest visible heading in document order.
    #[must_use]
    pub fn current(&self) -> Option<&ActiveEntry> {
        self.active.first()
    }

    #[must_use]
    pub fn active(&self) -> &TotalOrderedSet<ActiveEntry, u32> {
        &self.active
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// False when the page carried no usable TOC.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        !self.weights.is_empty()
    }
}
