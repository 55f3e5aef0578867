//! Display settings with TOML preset support.
//!
//! Everything the frame pipeline consults (draw modes, labels, colors,
//! screen-size parameters, camera defaults) is consolidated here. Options
//! serialize to/from TOML so view presets can be stored alongside the
//! host's other preferences.

mod camera;
mod colors;
mod display;
mod geometry;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use display::{
    AtomDrawMode, BondDrawMode, ColorScheme, DisplayOptions, LabelMode,
    UnknownMode,
};
pub use geometry::GeometryOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MolpaintError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[display]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Draw modes, labels and visibility toggles.
    pub display: DisplayOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Atom, bond, label and vector sizing.
    pub geometry: GeometryOptions,
    /// Camera defaults.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, MolpaintError> {
        let content =
            std::fs::read_to_string(path).map_err(MolpaintError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, MolpaintError> {
        toml::from_str(content)
            .map_err(|e| MolpaintError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), MolpaintError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MolpaintError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MolpaintError::Io)?;
        }
        std::fs::write(path, content).map_err(MolpaintError::Io)?;
        log::info!("saved options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
