//! The output surface: an abstract 2-D drawing capability owned by the
//! host.
//!
//! Renderer strategies only ever talk to [`Surface`]. Two implementations
//! ship with the crate: [`RecordingSurface`] keeps a log of draw calls
//! (tests, benchmarks, determinism checks) and [`SvgSurface`] writes an SVG
//! document.

mod recording;
mod svg;

use glam::IVec2;
pub use recording::{DrawCommand, RecordingSurface};
pub use svg::SvgSurface;

use crate::error::SurfaceError;
use crate::util::color::Rgb;

/// Vertical metrics of the current font, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of capitals.
    pub ascent: i32,
    /// Distance from the baseline to the bottom of descenders.
    pub descent: i32,
}

/// Drawing capability the frame pipeline paints onto.
///
/// State setters (color, font, stroke) cannot fail; every call that
/// touches pixels returns the host's error, which strategies propagate.
/// Ellipses are given by center and radii.
pub trait Surface {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Rgb) -> Result<(), SurfaceError>;
    /// Set the color used by subsequent draw calls.
    fn set_color(&mut self, color: Rgb);
    /// Set the font size in pixels used by subsequent text calls.
    fn set_font_size(&mut self, size: i32);
    /// Set the stroke width in pixels used by subsequent outline calls.
    fn set_stroke_width(&mut self, width: f32);
    /// Metrics of the current font.
    fn font_metrics(&self) -> FontMetrics;
    /// Advance width of `text` in the current font.
    fn string_width(&self, text: &str) -> i32;
    /// Draw a filled ellipse.
    fn fill_ellipse(
        &mut self,
        center: IVec2,
        radii: IVec2,
    ) -> Result<(), SurfaceError>;
    /// Draw an ellipse outline.
    fn draw_ellipse(
        &mut self,
        center: IVec2,
        radii: IVec2,
    ) -> Result<(), SurfaceError>;
    /// Draw a straight line segment.
    fn draw_line(&mut self, from: IVec2, to: IVec2) -> Result<(), SurfaceError>;
    /// Draw a filled polygon.
    fn fill_polygon(&mut self, points: &[IVec2]) -> Result<(), SurfaceError>;
    /// Draw `text` with its baseline-left corner at `origin`.
    fn draw_string(
        &mut self,
        text: &str,
        origin: IVec2,
    ) -> Result<(), SurfaceError>;
}

/// Sans-serif approximation used by the bundled surfaces, which have no
/// access to real font tables.
#[must_use]
pub fn approximate_metrics(font_size: i32) -> FontMetrics {
    FontMetrics {
        ascent: scale_font(font_size, 3, 4),
        descent: font_size / 4,
    }
}

/// Advance width under [`approximate_metrics`]: 0.6 em per character.
#[must_use]
pub fn approximate_width(text: &str, font_size: i32) -> i32 {
    let chars = i64::try_from(text.chars().count()).unwrap_or(i64::MAX);
    let width = chars.saturating_mul(i64::from(font_size)).saturating_mul(3) / 5;
    i32::try_from(width).unwrap_or(if width < 0 { i32::MIN } else { i32::MAX })
}

/// `size · num / den` without intermediate overflow.
fn scale_font(size: i32, num: i64, den: i64) -> i32 {
    (i64::from(size) * num / den) as i32
}
