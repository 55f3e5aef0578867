//! Partial charge → RGB color mapping.
//!
//! Charges are normalized against a symmetric saturation bound and mapped
//! through a [`ColorRamp`]. Default ramp: red (negative) → white (neutral)
//! → blue (positive).

use super::color::Rgb;

/// Charge magnitude at which the ramp saturates.
pub const CHARGE_SATURATION: f32 = 1.0;

/// A color ramp defined by N evenly-spaced color stops.
/// `t = 0` maps to the first color, `t = 1` maps to the last.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<Rgb>,
}

impl ColorRamp {
    /// Interpolate the ramp at position `t` in [0, 1].
    #[must_use]
    pub fn sample(&self, t: f32) -> Rgb {
        let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
        let n = self.stops.len() - 1;
        let scaled = t * n as f32;
        let idx = (scaled as usize).min(n - 1);
        let frac = scaled - idx as f32;

        let a = &self.stops[idx];
        let b = &self.stops[idx + 1];
        [
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
        ]
    }
}

impl Default for ColorRamp {
    /// Red → White → Blue
    fn default() -> Self {
        Self {
            stops: vec![
                [0.9, 0.1, 0.1], // red (negative)
                [1.0, 1.0, 1.0], // white (neutral)
                [0.1, 0.2, 0.9], // blue (positive)
            ],
        }
    }
}

/// Map a partial charge to [0, 1] with the neutral point at 0.5.
#[must_use]
pub fn charge_to_t(charge: f32) -> f32 {
    (0.5 + 0.5 * charge / CHARGE_SATURATION).clamp(0.0, 1.0)
}

/// Color for a partial charge using the given ramp.
#[must_use]
pub fn charge_color(charge: f32, ramp: &ColorRamp) -> Rgb {
    ramp.sample(charge_to_t(charge))
}
