//! TOC construction and observer settings, loaded from TOML.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TocError};

/// Shape of the heading tree and which section headings the tracker reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TocConfig {
    /// Headings deeper than this are dropped from the tree.
    pub max_depth: u8,
    /// Headings at or above this depth become top-level roots.
    pub root_depth: u8,
    /// Shallowest heading level a section may lead with to be tracked.
    pub min_observed: u8,
    /// Deepest heading level a section may lead with to be tracked.
    pub max_observed: u8,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            root_depth: 2,
            min_observed: 2,
            max_observed: 5,
        }
    }
}

impl TocConfig {
    /// Load from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| TocError::io(path, e))?;
        let config: Self = toml::from_str(&text).map_err(|e| TocError::Config {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::info!(
            path = %path.display(),
            max_depth = config.max_depth,
            root_depth = config.root_depth,
            "toc configuration loaded"
        );
        Ok(config)
    }

    /// Whether a section led by a heading of `level` is tracked.
    #[must_use]
    pub fn observes(&self, level: u8) -> bool {
        (self.min_observed..=self.max_observed).contains(&level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_h2_to_h5() {
        let c = TocConfig::default();
        assert_eq!(c.max_depth, 5);
        assert!(!c.observes(1));
        assert!(c.observes(2));
        assert!(c.observes(5));
        assert!(!c.observes(6));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c: TocConfig = toml::from_str("max_depth = 3").unwrap();
        assert_eq!(c.max_depth, 3);
        assert_eq!(c.root_depth, 2);
        assert_eq!(c.max_observed, 5);
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(toml::from_str::<TocConfig>("depth = 3").is_err());
    }

    #[test]
    fn load_missing_file() {
        let err = TocConfig::load(Path::new("/nonexistent/tocline.toml")).unwrap_err();
        assert!(matches!(err, TocError::NotFound { .. }));
    }
}
