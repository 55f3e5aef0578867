//! Bond renderer strategies: quickdraw stick, line, shaded cylinder and
//! wireframe double line.
//!
//! Each half of a bond is drawn in its own atom's color. A bond whose two
//! screen endpoints coincide draws nothing.

use glam::{IVec2, Vec2};

use crate::error::SurfaceError;
use crate::options::ColorOptions;
use crate::surface::Surface;
use crate::util::color::{self, Rgb};

/// Stripes used by the shaded cylinder approximation.
const SHADE_STEPS: i32 = 6;

/// Screen-space inputs for drawing one bond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondSpec {
    /// First atom center in pixels.
    pub from: IVec2,
    /// Second atom center in pixels.
    pub to: IVec2,
    /// Bond width in pixels.
    pub width: i32,
    /// Resolved colors of the first and second atom.
    pub colors: [Rgb; 2],
}

impl BondSpec {
    fn midpoint(&self) -> Vec2 {
        (self.from.as_vec2() + self.to.as_vec2()) * 0.5
    }

    /// Perpendicular of length `half_width`, or `None` for a degenerate
    /// bond.
    fn normal(&self, half_width: f32) -> Option<Vec2> {
        let dir = (self.to - self.from).as_vec2();
        let len = dir.length();
        (len > f32::EPSILON).then(|| dir.perp() / len * half_width)
    }
}

fn px(v: Vec2) -> IVec2 {
    v.round().as_ivec2()
}

/// Draw `from`→`to` as one segment, or two halves when the end colors
/// differ.
fn draw_split_line(
    surface: &mut dyn Surface,
    from: Vec2,
    to: Vec2,
    colors: [Rgb; 2],
) -> Result<(), SurfaceError> {
    if colors[0] == colors[1] {
        surface.set_color(colors[0]);
        return surface.draw_line(px(from), px(to));
    }
    let mid = (from + to) * 0.5;
    surface.set_color(colors[0]);
    surface.draw_line(px(from), px(mid))?;
    surface.set_color(colors[1]);
    surface.draw_line(px(mid), px(to))
}

/// Filled stick polygon, one quad per half, with outlined long edges.
pub fn quickdraw(
    spec: &BondSpec,
    colors: &ColorOptions,
    surface: &mut dyn Surface,
) -> Result<(), SurfaceError> {
    let Some(n) = spec.normal(spec.width as f32 * 0.5) else {
        return Ok(());
    };
    let (a, b, mid) = (spec.from.as_vec2(), spec.to.as_vec2(), spec.midpoint());

    surface.set_color(spec.colors[0]);
    surface.fill_polygon(&[px(a + n), px(mid + n), px(mid - n), px(a - n)])?;
    surface.set_color(spec.colors[1]);
    surface.fill_polygon(&[px(mid + n), px(b + n), px(b - n), px(mid - n)])?;

    surface.set_color(colors.outline);
    surface.set_stroke_width(1.0);
    surface.draw_line(px(a + n), px(b + n))?;
    surface.draw_line(px(a - n), px(b - n))
}

/// Single straight segment between the atom centers.
pub fn line(
    spec: &BondSpec,
    _colors: &ColorOptions,
    surface: &mut dyn Surface,
) -> Result<(), SurfaceError> {
    if spec.from == spec.to {
        return Ok(());
    }
    surface.set_stroke_width(1.0);
    draw_split_line(
        surface,
        spec.from.as_vec2(),
        spec.to.as_vec2(),
        spec.colors,
    )
}

/// Cylinder approximation: progressively narrower, lighter strokes laid
/// over each other along the bond axis.
pub fn shaded(
    spec: &BondSpec,
    _colors: &ColorOptions,
    surface: &mut dyn Surface,
) -> Result<(), SurfaceError> {
    if spec.from == spec.to {
        return Ok(());
    }
    let steps = SHADE_STEPS.min(spec.width).max(1);
    let (a, b) = (spec.from.as_vec2(), spec.to.as_vec2());
    for i in 0..steps {
        let t = i as f32 / steps as f32;
        let width = ((i64::from(spec.width) * i64::from(steps - i)
            / i64::from(steps)) as i32)
            .max(1);
        let factor = 0.6 + 0.6 * t;
        surface.set_stroke_width(width as f32);
        draw_split_line(
            surface,
            a,
            b,
            spec.colors.map(|c| color::scale(c, factor)),
        )?;
    }
    Ok(())
}

/// Two parallel lines offset by half the bond width on either side of the
/// bond axis.
pub fn wireframe(
    spec: &BondSpec,
    _colors: &ColorOptions,
    surface: &mut dyn Surface,
) -> Result<(), SurfaceError> {
    let half = (spec.width as f32 * 0.5).max(1.0);
    let Some(n) = spec.normal(half) else {
        return Ok(());
    };
    let (a, b) = (spec.from.as_vec2(), spec.to.as_vec2());
    surface.set_stroke_width(1.0);
    draw_split_line(surface, a + n, b + n, spec.colors)?;
    draw_split_line(surface, a - n, b - n, spec.colors)
}
