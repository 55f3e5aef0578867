use crate::options::GeometryOptions;

/// Smallest perspective denominator, keeps atoms at or in front of the
/// eye from blowing up.
const MIN_PERSPECTIVE_DISTANCE: f32 = 1.0;

/// Depth-aware conversion of model sizes (angstroms) to screen sizes.
///
/// Built once per frame from the geometry options and the view's zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    pixels_per_angstrom: f32,
    atom_sphere_factor: f32,
    bond_radius: f32,
    perspective: bool,
    camera_depth: f32,
}

impl Scaling {
    /// Capture the sizing parameters for one frame.
    #[must_use]
    pub fn new(geometry: &GeometryOptions, pixels_per_angstrom: f32) -> Self {
        Self {
            pixels_per_angstrom,
            atom_sphere_factor: geometry.atom_sphere_factor,
            bond_radius: geometry.bond_radius,
            perspective: geometry.perspective,
            camera_depth: geometry.camera_depth,
        }
    }

    /// Screen pixels per angstrom at the model center.
    #[must_use]
    pub fn pixels_per_angstrom(&self) -> f32 {
        self.pixels_per_angstrom
    }

    /// Perspective magnification at screen depth `z`; 1 when perspective
    /// scaling is off.
    #[must_use]
    pub fn perspective_factor(&self, z: i32) -> f32 {
        if self.perspective {
            self.camera_depth
                / (self.camera_depth - z as f32).max(MIN_PERSPECTIVE_DISTANCE)
        } else {
            1.0
        }
    }

    /// On-screen radius in pixels of an atom with van-der-Waals radius
    /// `vdw_radius` at depth `z`.
    #[must_use]
    pub fn circle_radius(&self, z: i32, vdw_radius: f32) -> f32 {
        vdw_radius
            * self.atom_sphere_factor
            * self.pixels_per_angstrom
            * self.perspective_factor(z)
    }

    /// On-screen atom diameter: `2 × circle_radius`, truncated to pixels.
    #[must_use]
    pub fn atom_diameter(&self, z: i32, vdw_radius: f32) -> i32 {
        (2.0 * self.circle_radius(z, vdw_radius)) as i32
    }

    /// On-screen bond width in pixels at depth `z`, at least one pixel.
    #[must_use]
    pub fn bond_width(&self, z: i32) -> i32 {
        ((2.0 * self.bond_radius * self.pixels_per_angstrom
            * self.perspective_factor(z)) as i32)
            .max(1)
    }
}

/// Radius used for drawing: the diameter halved with integer floor, so odd
/// diameters round down (7 → 3).
#[inline]
#[must_use]
pub fn radius_from_diameter(diameter: i32) -> i32 {
    diameter >> 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(pixels_per_angstrom: f32) -> Scaling {
        let geometry = GeometryOptions {
            atom_sphere_factor: 1.0,
            perspective: false,
            ..GeometryOptions::default()
        };
        Scaling::new(&geometry, pixels_per_angstrom)
    }

    #[test]
    fn diameter_is_twice_circle_radius_truncated() {
        let scaling = flat(1.0);
        assert_eq!(scaling.circle_radius(0, 3.5), 3.5);
        assert_eq!(scaling.atom_diameter(0, 3.5), 7);
        assert_eq!(scaling.atom_diameter(0, 3.7), 7);
    }

    #[test]
    fn odd_diameter_halves_down() {
        assert_eq!(radius_from_diameter(7), 3);
        assert_eq!(radius_from_diameter(20), 10);
        assert_eq!(radius_from_diameter(1), 0);
    }

    #[test]
    fn perspective_enlarges_near_atoms() {
        let geometry = GeometryOptions::default();
        let scaling = Scaling::new(&geometry, 40.0);
        let near = scaling.circle_radius(200, 1.7);
        let center = scaling.circle_radius(0, 1.7);
        let far = scaling.circle_radius(-200, 1.7);
        assert!(near > center && center > far);
        assert!((center - 1.7 * 0.2 * 40.0).abs() < 1e-4);
    }

    #[test]
    fn perspective_denominator_is_clamped() {
        let geometry = GeometryOptions {
            camera_depth: 100.0,
            ..GeometryOptions::default()
        };
        let scaling = Scaling::new(&geometry, 10.0);
        assert_eq!(scaling.perspective_factor(5000), 100.0);
    }

    #[test]
    fn bond_width_never_vanishes() {
        let scaling = flat(0.01);
        assert_eq!(scaling.bond_width(0), 1);
    }
}
