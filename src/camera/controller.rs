use glam::{Quat, Vec2, Vec3};

use crate::camera::core::Camera;
use crate::model::Atom;
use crate::options::CameraOptions;

/// Zoom limits in pixels per angstrom.
const MIN_ZOOM: f32 = 0.5;
const MAX_ZOOM: f32 = 2000.0;

/// Interactive control over a [`Camera`]: drag-to-rotate, wheel zoom and
/// fit-to-model.
#[derive(Debug, Clone)]
pub struct CameraController {
    /// The camera being driven.
    pub camera: Camera,
    rotate_speed: f32,
    zoom_speed: f32,
    fit_fraction: f32,
}

impl CameraController {
    /// Create a controller for a viewport, seeded from camera options.
    #[must_use]
    pub fn new(viewport: (u32, u32), options: &CameraOptions) -> Self {
        Self {
            camera: Camera::new(viewport, options.pixels_per_angstrom),
            rotate_speed: options.rotate_speed * 0.02,
            zoom_speed: options.zoom_speed * 0.5,
            fit_fraction: options.fit_fraction,
        }
    }

    /// Rotate by a mouse drag delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        // Horizontal drag spins about the screen's vertical axis, vertical
        // drag about its horizontal axis; both act in screen space.
        let horizontal = Quat::from_rotation_y(delta.x * self.rotate_speed);
        let vertical = Quat::from_rotation_x(delta.y * self.rotate_speed);
        self.camera.orientation =
            (horizontal * vertical * self.camera.orientation).normalize();
    }

    /// Zoom by a scroll delta; positive zooms in.
    pub fn zoom(&mut self, delta: f32) {
        let factor = (1.0 + delta * self.zoom_speed).max(0.1);
        self.camera.pixels_per_angstrom = (self.camera.pixels_per_angstrom
            * factor)
            .clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Center on the atoms and zoom so their bounding sphere fills the
    /// configured fraction of the smaller viewport dimension. No-op for an
    /// empty slice.
    pub fn fit_to_atoms(&mut self, atoms: &[Atom]) {
        if atoms.is_empty() {
            return;
        }
        let sum: Vec3 = atoms.iter().map(|a| a.position).sum();
        let center = sum / atoms.len() as f32;
        let radius = atoms
            .iter()
            .map(|a| a.position.distance(center) + a.vdw_radius())
            .fold(0.0_f32, f32::max);

        let (w, h) = self.camera.viewport;
        let extent = w.min(h) as f32 * 0.5 * self.fit_fraction;
        self.camera.center = center;
        self.camera.pixels_per_angstrom =
            (extent / radius.max(f32::EPSILON)).clamp(MIN_ZOOM, MAX_ZOOM);
        log::debug!(
            "fit {} atoms: center {center}, radius {radius:.2} Å, zoom {:.2}",
            atoms.len(),
            self.camera.pixels_per_angstrom
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Element;

    #[test]
    fn fit_centers_and_zooms() {
        let atoms = vec![
            Atom::new(Element::C, Vec3::new(-1.0, 0.0, 0.0)),
            Atom::new(Element::C, Vec3::new(1.0, 0.0, 0.0)),
        ];
        let mut ctl = CameraController::new((400, 300), &CameraOptions::default());
        ctl.fit_to_atoms(&atoms);
        assert_eq!(ctl.camera.center, Vec3::ZERO);
        // radius = 1 + 1.7, extent = 150 * 0.8
        let expected = 120.0 / 2.7;
        assert!((ctl.camera.pixels_per_angstrom - expected).abs() < 1e-3);
    }

    #[test]
    fn fit_ignores_empty_model() {
        let mut ctl = CameraController::new((400, 300), &CameraOptions::default());
        let before = ctl.camera.clone();
        ctl.fit_to_atoms(&[]);
        assert_eq!(ctl.camera, before);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut ctl = CameraController::new((100, 100), &CameraOptions::default());
        for _ in 0..200 {
            ctl.zoom(-10.0);
        }
        assert_eq!(ctl.camera.pixels_per_angstrom, MIN_ZOOM);
    }

    #[test]
    fn rotation_stays_normalized() {
        let mut ctl = CameraController::new((100, 100), &CameraOptions::default());
        for _ in 0..50 {
            ctl.rotate(Vec2::new(13.0, -7.0));
        }
        assert!((ctl.camera.orientation.length() - 1.0).abs() < 1e-4);
    }
}
