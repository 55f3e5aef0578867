use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Screen-size parameters for atoms, bonds, labels and vectors.
pub struct GeometryOptions {
    /// Fraction of the van-der-Waals radius drawn for each atom.
    #[schemars(title = "Atom Size", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub atom_sphere_factor: f32,
    /// Bond radius in angstroms.
    #[schemars(title = "Bond Radius", range(min = 0.02, max = 0.5), extend("step" = 0.01))]
    pub bond_radius: f32,
    /// Scale atoms and bonds by distance from the viewer.
    #[schemars(title = "Perspective Depth")]
    pub perspective: bool,
    /// Viewer distance in screen pixels used by the perspective scaling.
    #[schemars(skip)]
    pub camera_depth: f32,
    /// Label font size as a fraction of the atom's on-screen radius.
    #[schemars(title = "Label Size", range(min = 0.2, max = 2.0), extend("step" = 0.05))]
    pub label_font_scale: f32,
    /// Smallest label font size in pixels.
    #[schemars(skip)]
    pub min_label_font: i32,
    /// Arrow length in angstroms for a vector of normalized scale 1.
    #[schemars(title = "Vector Length", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub vector_scale: f32,
    /// Arrow head length in pixels.
    #[schemars(skip)]
    pub arrow_head_size: i32,
    /// Axis length in angstroms.
    #[schemars(title = "Axis Length", range(min = 0.5, max = 10.0), extend("step" = 0.5))]
    pub axis_length: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            atom_sphere_factor: 0.2,
            bond_radius: 0.15,
            perspective: true,
            camera_depth: 1000.0,
            label_font_scale: 0.8,
            min_label_font: 6,
            vector_scale: 1.0,
            arrow_head_size: 6,
            axis_length: 2.0,
        }
    }
}
