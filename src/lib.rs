//! Table-of-contents construction and active-heading tracking for
//! sectioned markdown pages.

pub mod config;
pub mod error;
pub mod format;
pub mod read;
pub mod replay;
pub mod toc;
pub mod tracker;
pub mod types;

pub use config::TocConfig;
pub use error::{Result, TocError};
pub use tracker::{MemoryView, TocView, TotalOrderedSet, TrackerSession, Visibility};
