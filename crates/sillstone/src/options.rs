//! Render options for the projectors.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sillstone_draft::Viewport;
use thiserror::Error;

/// Failure to load options from a TOML file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read options file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid options TOML.
    #[error("failed to parse options file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Display-quality knobs for both projectors.
///
/// These are presentation constants, not physical parameters — in
/// particular the bullnose arc subdivision count lives here so drawing
/// fidelity can be tuned without touching geometry code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Drawing area width in pixels.
    pub viewport_width: f64,
    /// Drawing area height in pixels.
    pub viewport_height: f64,
    /// Fraction of the viewport kept as margin on each side of the plan.
    pub margin_frac: f64,
    /// Fraction of the smaller viewport side the largest solid dimension
    /// maps to in the isometric view.
    pub iso_extent_frac: f64,
    /// Bullnose arc subdivision count.
    pub arc_segments: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            margin_frac: 0.12,
            iso_extent_frac: 0.55,
            arc_segments: 12,
        }
    }
}

impl RenderOptions {
    /// The drawing area as a viewport.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    /// Parse options from TOML text; missing fields keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = RenderOptions::default();
        assert_eq!(opts.arc_segments, 12);
        assert_eq!(opts.viewport().width, 800.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let opts = RenderOptions::from_toml_str("arc_segments = 24\n").unwrap();
        assert_eq!(opts.arc_segments, 24);
        assert_eq!(opts.viewport_width, 800.0);
        assert!((opts.margin_frac - 0.12).abs() < 1e-12);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(RenderOptions::from_toml_str("arc_segments = \"many\"").is_err());
    }
}
