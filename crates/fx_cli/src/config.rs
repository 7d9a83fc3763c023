//! FX scene file handling
//!
//! A scene file (`fx.toml` by default) has two tables:
//! - `[director]` - the director configuration
//! - `[scene]` - what the demo scene spawns
//!
//! Both tables and every key in them are optional.

use anyhow::{Context, Result};
use fx_core::Color;
use fx_director::DirectorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Contents of a scene file
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FxFile {
    #[serde(default)]
    pub director: DirectorConfig,
    #[serde(default)]
    pub scene: SceneConfig,
}

/// Demo scene settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of particles in the burst
    pub particles: u32,
    /// How long each particle lives (ms); later particles live a little longer
    pub particle_lifetime_ms: f64,
    /// Particle edge length in pixels
    pub particle_size: f32,
    /// Particle color at birth
    pub particle_color: Color,
    /// Full sweeps of the oscillating bar before it retires (0 = forever)
    pub bar_cycles: u32,
    /// Duration of one bar sweep (ms)
    pub bar_period_ms: f64,
    pub bar_color: Color,
    /// Show the elapsed-time strip along the bottom edge
    pub progress_strip: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particles: 48,
            particle_lifetime_ms: 1500.0,
            particle_size: 6.0,
            particle_color: Color::ORANGE,
            bar_cycles: 2,
            bar_period_ms: 1000.0,
            bar_color: Color::CYAN,
            progress_strip: true,
        }
    }
}

impl FxFile {
    /// Load a scene file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: FxFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        file.director
            .validate()
            .with_context(|| format!("Invalid [director] table in {}", path.display()))?;
        Ok(file)
    }

    /// Load `path` if given, otherwise `fx.toml` in the working directory if
    /// present, otherwise defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new("fx.toml");
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
