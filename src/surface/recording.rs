use glam::IVec2;

use super::{approximate_metrics, approximate_width, FontMetrics, Surface};
use crate::error::SurfaceError;
use crate::util::color::{Rgb, BLACK};

/// One recorded draw call with the state it was issued under.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum DrawCommand {
    Clear {
        color: Rgb,
    },
    FillEllipse {
        center: IVec2,
        radii: IVec2,
        color: Rgb,
    },
    DrawEllipse {
        center: IVec2,
        radii: IVec2,
        color: Rgb,
        stroke: f32,
    },
    Line {
        from: IVec2,
        to: IVec2,
        color: Rgb,
        stroke: f32,
    },
    FillPolygon {
        points: Vec<IVec2>,
        color: Rgb,
    },
    Text {
        text: String,
        origin: IVec2,
        color: Rgb,
        font_size: i32,
    },
}

/// Surface that records every draw call instead of rasterizing.
///
/// Can be told to fail after a number of calls to exercise error
/// propagation.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    color: Rgb,
    font_size: i32,
    stroke: f32,
    fail_after: Option<usize>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Empty recording with black 12 px text and a 1 px stroke.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            color: BLACK,
            font_size: 12,
            stroke: 1.0,
            fail_after: None,
        }
    }

    /// A surface whose draw calls fail once `count` have succeeded.
    #[must_use]
    pub fn failing_after(count: usize) -> Self {
        Self {
            fail_after: Some(count),
            ..Self::new()
        }
    }

    /// Recorded calls in issue order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded calls, leaving the log empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), SurfaceError> {
        if self.fail_after.is_some_and(|n| self.commands.len() >= n) {
            return Err(SurfaceError::new("recording surface exhausted"));
        }
        self.commands.push(command);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Rgb) -> Result<(), SurfaceError> {
        self.record(DrawCommand::Clear { color })
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
        let color = self.color;
        self.record(DrawCommand::FillEllipse {
            center,
            radii,
            color,
        })
    }

    fn draw_ellipse(
        &mut self,
        center: IVec2,
        radii: IVec2,
    ) -> Result<(), SurfaceError> {
        let (color, stroke) = (self.color, self.stroke);
        self.record(DrawCommand::DrawEllipse {
            center,
            radii,
            color,
            stroke,
        })
    }

    fn draw_line(&mut self, from: IVec2, to: IVec2) -> Result<(), SurfaceError> {
        let (color, stroke) = (self.color, self.stroke);
        self.record(DrawCommand::Line {
            from,
            to,
            color,
            stroke,
        })
    }

    fn fill_polygon(&mut self, points: &[IVec2]) -> Result<(), SurfaceError> {
        let color = self.color;
        self.record(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        })
    }

    fn draw_string(
        &mut self,
        text: &str,
        origin: IVec2,
    ) -> Result<(), SurfaceError> {
        let (color, font_size) = (self.color, self.font_size);
        self.record(DrawCommand::Text {
            text: text.to_owned(),
            origin,
            color,
            font_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_state_with_each_call() {
        let mut surface = RecordingSurface::new();
        surface.set_color([1.0, 0.0, 0.0]);
        surface.set_stroke_width(2.5);
        surface.draw_line(IVec2::ZERO, IVec2::ONE).unwrap();
        assert_eq!(
            surface.commands(),
            &[DrawCommand::Line {
                from: IVec2::ZERO,
                to: IVec2::ONE,
                color: [1.0, 0.0, 0.0],
                stroke: 2.5,
            }]
        );
    }

    #[test]
    fn fails_after_budget() {
        let mut surface = RecordingSurface::failing_after(1);
        assert!(surface.fill_ellipse(IVec2::ZERO, IVec2::ONE).is_ok());
        assert!(surface.fill_ellipse(IVec2::ZERO, IVec2::ONE).is_err());
        assert_eq!(surface.take_commands().len(), 1);
        assert!(surface.commands().is_empty());
    }
}
