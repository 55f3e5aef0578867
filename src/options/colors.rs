use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::util::color::Rgb;

/// Color palette for everything the renderer strategies draw besides the
/// resolved atom colors themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Surface background, cleared before each frame.
    pub background: Rgb,
    /// Outline around quickdraw atoms and sticks.
    pub outline: Rgb,
    /// Halo drawn beneath picked atoms.
    pub picked: Rgb,
    /// Atom labels and property annotations.
    pub text: Rgb,
    /// Per-atom vector arrows.
    pub vector: Rgb,
    /// Free lines.
    pub line: Rgb,
    /// X, Y and Z axis colors.
    pub axes: [Rgb; 3],
    /// Color used when an atom's color cannot be resolved.
    pub fallback_atom: Rgb,
    /// Per-element color overrides keyed by element symbol.
    pub element_overrides: HashMap<String, Rgb>,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: [1.0, 1.0, 1.0],
            outline: [0.0, 0.0, 0.0],
            picked: [1.0, 0.78, 0.0],
            text: [0.0, 0.0, 0.0],
            vector: [0.0, 0.55, 0.25],
            line: [0.35, 0.35, 0.35],
            axes: [[0.85, 0.1, 0.1], [0.1, 0.65, 0.1], [0.1, 0.2, 0.85]],
            fallback_atom: [1.0, 1.0, 1.0],
            element_overrides: HashMap::new(),
        }
    }
}
