use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Rendering fidelity for atoms.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AtomDrawMode {
    /// Filled disc in the atom color with a thin outline.
    #[default]
    Quickdraw,
    /// Filled disc with a radial shading approximation.
    Shaded,
    /// Open circle, outline only.
    Wireframe,
}

/// Rendering fidelity for bonds.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BondDrawMode {
    /// Filled stick polygon.
    #[default]
    Quickdraw,
    /// Single straight segment between the atom centers.
    Line,
    /// Shaded cylinder approximation.
    Shaded,
    /// Two parallel offset lines.
    Wireframe,
}

/// What text, if any, is drawn on top of each atom.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LabelMode {
    /// No labels.
    #[default]
    None,
    /// Element symbol ("C").
    Symbol,
    /// Element name ("carbon").
    TypeName,
    /// 1-based atom index.
    Number,
}

/// How atom colors are resolved.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// CPK color by element, with per-element overrides.
    #[default]
    AtomType,
    /// Red → white → blue by the numeric `charge` property.
    Charge,
}

/// Returned when a draw-mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl std::fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown draw mode '{}'", self.0)
    }
}

impl std::error::Error for UnknownMode {}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

impl FromStr for AtomDrawMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "quickdraw" | "quick_draw" => Ok(Self::Quickdraw),
            "shaded" | "shading" => Ok(Self::Shaded),
            "wireframe" => Ok(Self::Wireframe),
            _ => Err(UnknownMode(s.to_owned())),
        }
    }
}

impl FromStr for BondDrawMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "quickdraw" | "quick_draw" => Ok(Self::Quickdraw),
            "line" => Ok(Self::Line),
            "shaded" | "shading" => Ok(Self::Shaded),
            "wireframe" => Ok(Self::Wireframe),
            _ => Err(UnknownMode(s.to_owned())),
        }
    }
}

/// Deserialize a draw mode, resolving unknown names to the default
/// (quickdraw) instead of failing the whole options file.
fn lenient_mode<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = UnknownMode> + Default,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.parse().unwrap_or_else(|e: UnknownMode| {
        log::warn!("{e}; falling back to quickdraw");
        T::default()
    }))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Display toggles, draw modes and labeling consulted once per frame.
pub struct DisplayOptions {
    /// Atom rendering fidelity.
    #[schemars(title = "Atom Mode")]
    #[serde(deserialize_with = "lenient_mode")]
    pub atom_draw_mode: AtomDrawMode,
    /// Bond rendering fidelity.
    #[schemars(title = "Bond Mode")]
    #[serde(deserialize_with = "lenient_mode")]
    pub bond_draw_mode: BondDrawMode,
    /// Force wireframe atoms and line bonds regardless of the modes above
    /// (used while the user is dragging the view).
    #[schemars(title = "Fast Rendering")]
    pub fast_rendering: bool,
    /// Atom label text.
    #[schemars(title = "Labels")]
    pub label_mode: LabelMode,
    /// Property shown next to each atom; empty disables the annotation.
    #[schemars(title = "Property")]
    pub property_key: String,
    /// Atom color resolution.
    #[schemars(title = "Color Scheme")]
    pub color_scheme: ColorScheme,
    /// Whether to draw atom discs.
    #[schemars(title = "Show Atoms")]
    pub show_atoms: bool,
    /// Whether to draw bonds.
    #[schemars(title = "Show Bonds")]
    pub show_bonds: bool,
    /// Whether to draw per-atom vectors.
    #[schemars(title = "Show Vectors")]
    pub show_vectors: bool,
    /// Whether to draw the model-space axes.
    #[schemars(title = "Show Axes")]
    pub show_axes: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            atom_draw_mode: AtomDrawMode::default(),
            bond_draw_mode: BondDrawMode::default(),
            fast_rendering: false,
            label_mode: LabelMode::default(),
            property_key: String::new(),
            color_scheme: ColorScheme::default(),
            show_atoms: true,
            show_bonds: true,
            show_vectors: false,
            show_axes: false,
        }
    }
}

impl DisplayOptions {
    /// Whether any per-atom text (label or property annotation) is drawn.
    #[must_use]
    pub fn draws_atom_text(&self) -> bool {
        self.label_mode != LabelMode::None || !self.property_key.is_empty()
    }
}
