use std::fmt::Write;

use glam::IVec2;

use super::{approximate_metrics, approximate_width, FontMetrics, Surface};
use crate::error::SurfaceError;
use crate::util::color::{to_hex, Rgb, BLACK};

/// Surface that serializes draw calls as SVG elements.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    body: String,
    color: Rgb,
    font_size: i32,
    stroke: f32,
}

impl SvgSurface {
    /// Empty document of the given pixel size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            color: BLACK,
            font_size: 12,
            stroke: 1.0,
        }
    }

    /// Wrap the drawn elements in an `<svg>` root and return the document.
    #[must_use]
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" \
             height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl Surface for SvgSurface {
    fn clear(&mut self, color: Rgb) -> Result<(), SurfaceError> {
        self.body.clear();
        writeln!(
            self.body,
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            to_hex(color)
        )?;
        Ok(())
    }

    fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn set_font_size(&mut self, size: i32) {
        self.font_size = size;
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.stroke = width;
    }

    fn font_metrics(&self) -> FontMetrics {
        approximate_metrics(self.font_size)
    }

    fn string_width(&self, text: &str) -> i32 {
        approximate_width(text, self.font_size)
    }

    fn fill_ellipse(
        &mut self,
        center: IVec2,
        radii: IVec2,
    ) -> Result<(), SurfaceError> {
        writeln!(
            self.body,
            "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" fill=\"{}\"/>",
            center.x,
            center.y,
            radii.x,
            radii.y,
            to_hex(self.color)
        )?;
        Ok(())
    }

    fn draw_ellipse(
        &mut self,
        center: IVec2,
        radii: IVec2,
    ) -> Result<(), SurfaceError> {
        writeln!(
            self.body,
            "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" fill=\"none\" \
             stroke=\"{}\" stroke-width=\"{}\"/>",
            center.x,
            center.y,
            radii.x,
            radii.y,
            to_hex(self.color),
            self.stroke
        )?;
        Ok(())
    }

    fn draw_line(&mut self, from: IVec2, to: IVec2) -> Result<(), SurfaceError> {
        writeln!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" \
             stroke-width=\"{}\" stroke-linecap=\"round\"/>",
            from.x,
            from.y,
            to.x,
            to.y,
            to_hex(self.color),
            self.stroke
        )?;
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[IVec2]) -> Result<(), SurfaceError> {
        if points.len() < 3 {
            return Ok(());
        }
        self.body.push_str("<polygon points=\"");
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                self.body.push(' ');
            }
            write!(self.body, "{},{}", p.x, p.y)?;
        }
        writeln!(self.body, "\" fill=\"{}\"/>", to_hex(self.color))?;
        Ok(())
    }

    fn draw_string(
        &mut self,
        text: &str,
        origin: IVec2,
    ) -> Result<(), SurfaceError> {
        writeln!(
            self.body,
            "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" \
             font-size=\"{}\" fill=\"{}\">{}</text>",
            origin.x,
            origin.y,
            self.font_size,
            to_hex(self.color),
            escape_xml(text)
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_elements_inside_root() {
        let mut svg = SvgSurface::new(64, 32);
        svg.clear([1.0, 1.0, 1.0]).unwrap();
        svg.set_color([1.0, 0.0, 0.0]);
        svg.fill_ellipse(IVec2::new(10, 12), IVec2::splat(4)).unwrap();
        svg.draw_string("a<b", IVec2::new(1, 2)).unwrap();
        let doc = svg.finish();

        assert!(doc.starts_with("<svg "));
        assert!(doc.contains("viewBox=\"0 0 64 32\""));
        assert!(doc.contains(
            "<ellipse cx=\"10\" cy=\"12\" rx=\"4\" ry=\"4\" fill=\"#ff0000\"/>"
        ));
        assert!(doc.contains(">a&lt;b</text>"));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn degenerate_polygon_is_skipped() {
        let mut svg = SvgSurface::new(8, 8);
        svg.fill_polygon(&[IVec2::ZERO, IVec2::ONE]).unwrap();
        assert!(!svg.finish().contains("<polygon"));
    }
}
