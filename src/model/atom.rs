use glam::Vec3;
use rustc_hash::FxHashMap;

use super::element::{Element, DEFAULT_VDW_RADIUS};

/// A visible atom as supplied by the domain model for one frame.
///
/// The renderer never mutates atoms; per-frame screen positions live in
/// [`crate::geometry::ScreenCache`], keyed by the atom's index in the frame's
/// atom slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Atom {
    /// Element type; `None` when the source file carried an unrecognized
    /// type. Untyped atoms draw with fallback radius and color.
    pub element: Option<Element>,
    /// Model-space position in angstroms.
    pub position: Vec3,
    /// Whether the atom is currently selected in the host UI.
    pub picked: bool,
    /// Free-form per-atom properties (charge, occupancy, ...).
    pub properties: FxHashMap<String, String>,
    /// Optional per-atom vector (forces, dipoles, vibration modes).
    pub vector: Option<Vec3>,
}

impl Atom {
    /// Create a typed atom at `position`.
    #[must_use]
    pub fn new(element: Element, position: Vec3) -> Self {
        Self {
            element: Some(element),
            position,
            ..Self::default()
        }
    }

    /// Create an atom with no known element type.
    #[must_use]
    pub fn untyped(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Builder: set the picked flag.
    #[must_use]
    pub fn with_picked(mut self, picked: bool) -> Self {
        self.picked = picked;
        self
    }

    /// Builder: attach a property value.
    #[must_use]
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let _ = self.properties.insert(key.into(), value.into());
        self
    }

    /// Builder: attach vector data.
    #[must_use]
    pub fn with_vector(mut self, vector: Vec3) -> Self {
        self.vector = Some(vector);
        self
    }

    /// Look up a property by key.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// van-der-Waals radius, falling back to [`DEFAULT_VDW_RADIUS`] for
    /// untyped atoms.
    #[must_use]
    pub fn vdw_radius(&self) -> f32 {
        self.element.map_or(DEFAULT_VDW_RADIUS, Element::vdw_radius)
    }
}
