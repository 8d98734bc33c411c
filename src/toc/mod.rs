pub mod payload;
pub mod tree;
pub mod weights;

pub use tree::build_toc;
pub use weights::WeightMap;

use crate::config::TocConfig;
use crate::types::{Heading, Section};

/// TOC tree for a sectioned document.
pub fn from_sections(sections: &[Section], config: &TocConfig) -> Vec<Heading> {
    let raw: Vec<_> = sections.iter().map(|s| s.heading.clone()).collect();
    build_toc(&raw, config)
}
