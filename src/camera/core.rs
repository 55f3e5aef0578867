use glam::{Mat4, Quat, Vec3};

use crate::geometry::View;

/// Orthographic view of a model: a rotation about a center point, a zoom,
/// and a viewport the center is mapped to.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Model-space point that appears at the viewport center.
    pub center: Vec3,
    /// Model rotation applied about `center`.
    pub orientation: Quat,
    /// Zoom in screen pixels per angstrom.
    pub pixels_per_angstrom: f32,
    /// Viewport size in pixels (width, height).
    pub viewport: (u32, u32),
}

impl Camera {
    /// Camera looking at the origin with no rotation.
    #[must_use]
    pub fn new(viewport: (u32, u32), pixels_per_angstrom: f32) -> Self {
        Self {
            center: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            pixels_per_angstrom,
            viewport,
        }
    }

    /// Build the model→screen matrix.
    ///
    /// Screen `y` grows downward, so the model `y` axis is flipped; screen
    /// `z` is in pixels and grows toward the viewer.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let half = Vec3::new(
            self.viewport.0 as f32 * 0.5,
            self.viewport.1 as f32 * 0.5,
            0.0,
        );
        let s = self.pixels_per_angstrom;
        Mat4::from_translation(half)
            * Mat4::from_scale(Vec3::new(s, -s, s))
            * Mat4::from_quat(self.orientation)
            * Mat4::from_translation(-self.center)
    }

    /// The transform and zoom consumed by the frame pipeline.
    #[must_use]
    pub fn view(&self) -> View {
        View::new(self.build_matrix(), self.pixels_per_angstrom)
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec3;

    use super::*;
    use crate::geometry::project_point;

    #[test]
    fn center_maps_to_viewport_middle() {
        let mut camera = Camera::new((200, 100), 10.0);
        camera.center = Vec3::new(1.0, 2.0, 3.0);
        let p = project_point(&camera.build_matrix(), camera.center);
        assert_eq!(p, IVec3::new(100, 50, 0));
    }

    #[test]
    fn model_y_points_up_on_screen() {
        let camera = Camera::new((200, 200), 10.0);
        let up = project_point(&camera.build_matrix(), Vec3::Y);
        assert_eq!(up, IVec3::new(100, 90, 0));
        let toward_viewer = project_point(&camera.build_matrix(), Vec3::Z);
        assert_eq!(toward_viewer.z, 10);
    }
}
