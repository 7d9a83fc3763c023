//! Director configuration
//!
//! Every director carries its own `DirectorConfig`. Configs can be built in
//! code with the `with_*` setters or loaded from TOML:
//!
//! ```toml
//! clear_canvas = true
//! background_color = "#101018"
//! frames_before_pruning = 60
//!
//! [canvas_size]
//! width = 800
//! height = 600
//! ```
//!
//! Missing keys fall back to the defaults.

use crate::error::{DirectorError, Result};
use fx_core::{Color, Size};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default prune cadence, in frames
pub const DEFAULT_FRAMES_BEFORE_PRUNING: u64 = 100;

/// Default canvas edge length
pub const DEFAULT_CANVAS_EDGE: f32 = 1000.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorConfig {
    /// Clear the canvas to `background_color` before each render phase
    pub clear_canvas: bool,
    /// Fill color used when clearing
    pub background_color: Color,
    /// Prune terminated objects on frames that are a multiple of this
    pub frames_before_pruning: u64,
    /// Region cleared each frame, anchored at the origin
    pub canvas_size: Size,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            clear_canvas: true,
            background_color: Color::BLACK,
            frames_before_pruning: DEFAULT_FRAMES_BEFORE_PRUNING,
            canvas_size: Size::new(DEFAULT_CANVAS_EDGE, DEFAULT_CANVAS_EDGE),
        }
    }
}

impl DirectorConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!("Loaded director config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Serialize to a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the invariants the director relies on
    pub fn validate(&self) -> Result<()> {
        if self.frames_before_pruning == 0 {
            return Err(DirectorError::InvalidPruneInterval(self.frames_before_pruning));
        }

        let Size { width, height } = self.canvas_size;
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(DirectorError::InvalidCanvasSize { width, height });
        }

        Ok(())
    }

    /// Enable or disable clearing before each render phase.
    pub fn with_clear_canvas(mut self, clear: bool) -> Self {
        self.clear_canvas = clear;
        self
    }

    /// Set the cleared canvas region.
    pub fn with_canvas_size(mut self, width: f32, height: f32) -> Self {
        self.canvas_size = Size::new(width, height);
        self
    }

    /// Set the clear color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the prune cadence.
    pub fn with_frames_before_pruning(mut self, frames: u64) -> Self {
        self.frames_before_pruning = frames;
        self
    }
}
