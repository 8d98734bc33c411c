pub mod markdown;

use std::fs;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{Result, TocError};
use crate::types::Section;

/// Read a markdown file and split it into heading-led sections.
pub fn read_sections(path: &Path) -> Result<Vec<Section>> {
    let meta = fs::metadata(path).map_err(|e| TocError::io(path, e))?;

    // Empty check before mmap — mmap on 0-byte file may fail on some platforms
    if meta.len() == 0 {
        return Ok(Vec::new());
    }

    let file = fs::File::open(path).map_err(|e| TocError::io(path, e))?;
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| TocError::io(path, e))?;
    let sections = markdown::sections(&mmap[..]);

    tracing::debug!(path = %path.display(), sections = sections.len(), "read markdown");
    Ok(sections)
}
