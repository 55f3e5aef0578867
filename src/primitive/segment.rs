use glam::{IVec2, IVec3, Mat4, Vec3};

use super::{DepthKey, FrameContext, Transform};
use crate::error::SurfaceError;
use crate::geometry::project_point;
use crate::renderer::vector::draw_arrow;
use crate::surface::Surface;

/// Depth offset of vectors and free lines past their far endpoint.
pub const SEGMENT_DEPTH_OFFSET: DepthKey = 1;

/// Depth offset of axes past their far endpoint.
pub const AXIS_DEPTH_OFFSET: DepthKey = 2;

const AXIS_NAMES: [&str; 3] = ["X", "Y", "Z"];

/// Two owned model-space points and their most recent projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Vec3,
    end: Vec3,
    screen: [IVec3; 2],
}

impl Segment {
    /// Unprojected segment; call [`Segment::project`] before reading
    /// screen state.
    #[must_use]
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self {
            start,
            end,
            screen: [IVec3::ZERO; 2],
        }
    }

    /// Model-space endpoints.
    #[must_use]
    pub fn endpoints(&self) -> (Vec3, Vec3) {
        (self.start, self.end)
    }

    /// Project both endpoints through `matrix`.
    pub fn project(&mut self, matrix: &Mat4) {
        self.screen = [
            project_point(matrix, self.start),
            project_point(matrix, self.end),
        ];
    }

    /// Screen endpoints from the last projection.
    #[must_use]
    pub fn screen(&self) -> [IVec3; 2] {
        self.screen
    }

    /// Depth of the endpoint farther from the viewer.
    #[must_use]
    pub fn far_depth(&self) -> DepthKey {
        self.screen[0].z.min(self.screen[1].z)
    }

    fn screen_2d(&self) -> (IVec2, IVec2) {
        (self.screen[0].truncate(), self.screen[1].truncate())
    }
}

/// Arrow for one atom's vector, already scaled to its display length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeVector {
    segment: Segment,
    depth: DepthKey,
}

impl FreeVector {
    /// Arrow from `start` to `end` in model space.
    #[must_use]
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self {
            segment: Segment::new(start, end),
            depth: 0,
        }
    }

    /// The owned geometry.
    #[must_use]
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// Far endpoint depth + [`SEGMENT_DEPTH_OFFSET`].
    #[must_use]
    pub fn depth(&self) -> DepthKey {
        self.depth
    }

    /// Draw the arrow in the vector color; zero screen length draws
    /// nothing.
    pub fn draw(
        &self,
        ctx: &FrameContext<'_>,
        surface: &mut dyn Surface,
    ) -> Result<(), SurfaceError> {
        let (from, to) = self.segment.screen_2d();
        draw_arrow(
            from,
            to,
            ctx.options.geometry.arrow_head_size,
            ctx.options.colors.vector,
            surface,
        )
    }
}

impl Transform for FreeVector {
    fn transform(&mut self, matrix: &Mat4) {
        self.segment.project(matrix);
        self.depth = self.segment.far_depth().saturating_add(SEGMENT_DEPTH_OFFSET);
    }
}

/// A free-standing line supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeLine {
    segment: Segment,
    depth: DepthKey,
}

impl FreeLine {
    /// Line from `start` to `end` in model space.
    #[must_use]
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self {
            segment: Segment::new(start, end),
            depth: 0,
        }
    }

    /// The owned geometry.
    #[must_use]
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// Far endpoint depth + [`SEGMENT_DEPTH_OFFSET`].
    #[must_use]
    pub fn depth(&self) -> DepthKey {
        self.depth
    }

    /// Draw a one-pixel line; zero screen length draws nothing.
    pub fn draw(
        &self,
        ctx: &FrameContext<'_>,
        surface: &mut dyn Surface,
    ) -> Result<(), SurfaceError> {
        let (from, to) = self.segment.screen_2d();
        if from == to {
            return Ok(());
        }
        surface.set_color(ctx.options.colors.line);
        surface.set_stroke_width(1.0);
        surface.draw_line(from, to)
    }
}

impl Transform for FreeLine {
    fn transform(&mut self, matrix: &Mat4) {
        self.segment.project(matrix);
        self.depth = self.segment.far_depth().saturating_add(SEGMENT_DEPTH_OFFSET);
    }
}

/// One model-space axis from the origin, labeled with its letter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    segment: Segment,
    index: usize,
    depth: DepthKey,
}

impl Axis {
    /// Axis `index` (0 = X, 1 = Y, 2 = Z) of `length` angstroms. Indices
    /// past 2 wrap.
    #[must_use]
    pub fn new(index: usize, length: f32) -> Self {
        let index = index % 3;
        Self {
            segment: Segment::new(Vec3::ZERO, Vec3::AXES[index] * length),
            index,
            depth: 0,
        }
    }

    /// The three axes in X, Y, Z order.
    #[must_use]
    pub fn all(length: f32) -> [Self; 3] {
        [Self::new(0, length), Self::new(1, length), Self::new(2, length)]
    }

    /// 0 = X, 1 = Y, 2 = Z.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Far endpoint depth + [`AXIS_DEPTH_OFFSET`].
    #[must_use]
    pub fn depth(&self) -> DepthKey {
        self.depth
    }

    /// Draw the axis line and its letter just past the tip.
    pub fn draw(
        &self,
        ctx: &FrameContext<'_>,
        surface: &mut dyn Surface,
    ) -> Result<(), SurfaceError> {
        let (from, to) = self.segment.screen_2d();
        surface.set_color(ctx.options.colors.axes[self.index]);
        surface.set_stroke_width(1.0);
        if from != to {
            surface.draw_line(from, to)?;
        }
        surface.set_font_size(ctx.options.geometry.min_label_font.max(12));
        surface.draw_string(AXIS_NAMES[self.index], to + IVec2::new(3, -3))
    }
}

impl Transform for Axis {
    fn transform(&mut self, matrix: &Mat4) {
        self.segment.project(matrix);
        self.depth = self.segment.far_depth().saturating_add(AXIS_DEPTH_OFFSET);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_depth_uses_far_endpoint() {
        let mut line =
            FreeLine::new(Vec3::new(0.0, 0.0, -2.0), Vec3::new(1.0, 1.0, 3.0));
        line.transform(&Mat4::from_scale(Vec3::splat(10.0)));
        assert_eq!(line.segment().far_depth(), -20);
        assert_eq!(line.depth(), -20 + SEGMENT_DEPTH_OFFSET);
        assert_eq!(
            line.segment().screen(),
            [IVec3::new(0, 0, -20), IVec3::new(10, 10, 30)]
        );
    }

    #[test]
    fn transform_refreshes_depth() {
        let mut vector = FreeVector::new(Vec3::ZERO, Vec3::Z);
        vector.transform(&Mat4::IDENTITY);
        assert_eq!(vector.depth(), 1);
        vector.transform(&Mat4::from_translation(Vec3::new(0.0, 0.0, 50.0)));
        assert_eq!(vector.depth(), 51);
    }

    #[test]
    fn axes_point_along_model_axes() {
        let [x, y, z] = Axis::all(2.0);
        assert_eq!(x.segment.endpoints().1, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(y.segment.endpoints().1, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(z.segment.endpoints().1, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(Axis::new(4, 1.0).index(), 1);
    }

    #[test]
    fn axis_depth_is_two_past_the_far_endpoint() {
        // Flip z so the Z axis tip lands behind the origin.
        let matrix = Mat4::from_scale(Vec3::new(10.0, 10.0, -10.0));
        let [mut x, mut y, mut z] = Axis::all(2.0);
        for axis in [&mut x, &mut y, &mut z] {
            axis.transform(&matrix);
        }
        assert_eq!(x.depth(), AXIS_DEPTH_OFFSET);
        assert_eq!(y.depth(), AXIS_DEPTH_OFFSET);
        assert_eq!(z.segment.far_depth(), -20);
        assert_eq!(z.depth(), -20 + AXIS_DEPTH_OFFSET);
    }
}
