//! Per-atom vector arrows and their global length normalization.

use glam::{IVec2, Vec2};

use crate::error::SurfaceError;
use crate::surface::Surface;
use crate::util::color::Rgb;

/// Ranges narrower than this are treated as a single magnitude.
const MIN_RANGE: f32 = 1e-6;

/// Vectors shorter than this have no direction and are not drawn.
pub const MIN_MAGNITUDE: f32 = 1e-6;

/// Arrow-length normalization shared by every vector in a frame.
///
/// Computed once from all magnitudes drawn that frame, so arrows compare
/// against each other rather than each being scaled on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorScale {
    /// Smallest magnitude in the frame.
    pub min_magnitude: f32,
    /// Largest minus smallest magnitude.
    pub magnitude_range: f32,
}

impl VectorScale {
    /// Normalization over `magnitudes`; `None` when there are none.
    pub fn from_magnitudes(
        magnitudes: impl IntoIterator<Item = f32>,
    ) -> Option<Self> {
        let (min, max) = magnitudes.into_iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY),
            |(lo, hi), m| (lo.min(m), hi.max(m)),
        );
        (min <= max).then(|| Self {
            min_magnitude: min,
            magnitude_range: max - min,
        })
    }

    /// Arrow length factor: `(magnitude − min) / range + 0.5`, giving 0.5
    /// for the shortest vector and 1.5 for the longest. A zero range maps
    /// every vector to 0.5.
    #[must_use]
    pub fn scaling(&self, magnitude: f32) -> f32 {
        if self.magnitude_range < MIN_RANGE {
            return 0.5;
        }
        (magnitude - self.min_magnitude) / self.magnitude_range + 0.5
    }
}

/// Draw a shaft from `from` to `to` with a filled head at `to`. Arrows of
/// zero screen length draw nothing.
pub fn draw_arrow(
    from: IVec2,
    to: IVec2,
    head_size: i32,
    color: Rgb,
    surface: &mut dyn Surface,
) -> Result<(), SurfaceError> {
    let dir = (to - from).as_vec2();
    let len = dir.length();
    if len <= f32::EPSILON {
        return Ok(());
    }
    let unit = dir / len;
    // Keep the head inside short arrows.
    let head = (head_size as f32).min(len * 0.5);
    let base = to.as_vec2() - unit * head;
    let wing = unit.perp() * head * 0.5;

    surface.set_color(color);
    surface.set_stroke_width(1.0);
    surface.draw_line(from, to)?;
    surface.fill_polygon(&[to, px(base + wing), px(base - wing)])
}

fn px(v: Vec2) -> IVec2 {
    v.round().as_ivec2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn scaling_matches_global_normalization() {
        let scale = VectorScale {
            min_magnitude: 1.0,
            magnitude_range: 4.0,
        };
        assert_eq!(scale.scaling(3.0), 1.0);
        assert_eq!(scale.scaling(1.0), 0.5);
        assert_eq!(scale.scaling(5.0), 1.5);
    }

    #[test]
    fn from_magnitudes_spans_all_inputs() {
        let scale = VectorScale::from_magnitudes([3.0, 1.0, 5.0]).unwrap();
        assert_eq!(scale.min_magnitude, 1.0);
        assert_eq!(scale.magnitude_range, 4.0);
        assert!(VectorScale::from_magnitudes([]).is_none());
    }

    #[test]
    fn uniform_magnitudes_scale_to_half() {
        let scale = VectorScale::from_magnitudes([2.0, 2.0]).unwrap();
        assert_eq!(scale.scaling(2.0), 0.5);
    }

    #[test]
    fn arrow_has_shaft_and_head() {
        let mut surface = RecordingSurface::new();
        draw_arrow(IVec2::ZERO, IVec2::new(20, 0), 6, [0.0, 1.0, 0.0], &mut surface)
            .unwrap();
        let commands = surface.commands();
        assert_eq!(commands.len(), 2);
        assert!(matches!(
            &commands[1],
            DrawCommand::FillPolygon { points, .. }
                if points == &[IVec2::new(20, 0), IVec2::new(14, 3), IVec2::new(14, -3)]
        ));
    }

    #[test]
    fn zero_length_arrow_is_noop() {
        let mut surface = RecordingSurface::new();
        draw_arrow(IVec2::ONE, IVec2::ONE, 6, [0.0; 3], &mut surface).unwrap();
        assert!(surface.commands().is_empty());
    }
}
