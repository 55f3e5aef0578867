//! Atom renderer strategies: quickdraw, shaded and wireframe discs.

use glam::IVec2;

use crate::error::SurfaceError;
use crate::geometry::radius_from_diameter;
use crate::options::ColorOptions;
use crate::surface::Surface;
use crate::util::color::{self, Rgb};

/// Extra radius of the halo drawn beneath picked atoms, in pixels.
pub const PICKED_HALO_MARGIN: i32 = 5;

/// Concentric rings used by the shaded approximation.
const SHADE_STEPS: i32 = 8;

/// Screen-space inputs for drawing one atom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomSpec {
    /// Atom center in pixels.
    pub center: IVec2,
    /// On-screen diameter in pixels.
    pub diameter: i32,
    /// Resolved atom color.
    pub color: Rgb,
    /// Whether the atom is picked.
    pub picked: bool,
}

impl AtomSpec {
    /// Drawing radius: the diameter halved with integer floor.
    #[must_use]
    pub fn radius(&self) -> i32 {
        radius_from_diameter(self.diameter)
    }
}

fn draw_halo(
    spec: &AtomSpec,
    colors: &ColorOptions,
    surface: &mut dyn Surface,
) -> Result<(), SurfaceError> {
    if spec.picked {
        surface.set_color(colors.picked);
        surface.fill_ellipse(
            spec.center,
            IVec2::splat(spec.radius() + PICKED_HALO_MARGIN),
        )?;
    }
    Ok(())
}

/// Filled disc in the atom color with an outline; picked atoms get an
/// oversized halo underneath.
pub fn quickdraw(
    spec: &AtomSpec,
    colors: &ColorOptions,
    surface: &mut dyn Surface,
) -> Result<(), SurfaceError> {
    let radii = IVec2::splat(spec.radius());
    draw_halo(spec, colors, surface)?;
    surface.set_color(spec.color);
    surface.fill_ellipse(spec.center, radii)?;
    surface.set_color(colors.outline);
    surface.set_stroke_width(1.0);
    surface.draw_ellipse(spec.center, radii)
}

/// Filled disc approximating a lit sphere: concentric discs shrinking
/// toward a highlight offset up and to the left.
pub fn shaded(
    spec: &AtomSpec,
    colors: &ColorOptions,
    surface: &mut dyn Surface,
) -> Result<(), SurfaceError> {
    let radius = spec.radius();
    draw_halo(spec, colors, surface)?;
    let steps = SHADE_STEPS.min(radius).max(1);
    for i in 0..steps {
        let t = i as f32 / steps as f32;
        let r = radius
            - (i64::from(radius) * i64::from(i) / i64::from(steps)) as i32;
        // Drift the center toward the highlight as the rings shrink.
        let drift = (radius - r) / 3;
        let center = spec.center - IVec2::splat(drift);
        let shade = if t < 0.5 {
            color::scale(spec.color, 0.55 + 0.9 * t)
        } else {
            color::mix(spec.color, color::WHITE, (t - 0.5) * 1.2)
        };
        surface.set_color(shade);
        surface.fill_ellipse(center, IVec2::splat(r))?;
    }
    Ok(())
}

/// Open circle in the atom color (picked color when picked); no outline,
/// no halo.
pub fn wireframe(
    spec: &AtomSpec,
    colors: &ColorOptions,
    surface: &mut dyn Surface,
) -> Result<(), SurfaceError> {
    surface.set_color(if spec.picked { colors.picked } else { spec.color });
    surface.set_stroke_width(1.0);
    surface.draw_ellipse(spec.center, IVec2::splat(spec.radius()))
}
