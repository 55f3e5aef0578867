use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// View composition and control parameters.
pub struct CameraOptions {
    /// Initial zoom in screen pixels per angstrom.
    #[schemars(title = "Zoom", range(min = 1.0, max = 400.0), extend("step" = 1.0))]
    pub pixels_per_angstrom: f32,
    /// Fraction of the viewport the model fills after a fit.
    #[schemars(title = "Fit Margin", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub fit_fraction: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            pixels_per_angstrom: 40.0,
            fit_fraction: 0.8,
            rotate_speed: 0.5,
            zoom_speed: 0.1,
        }
    }
}
