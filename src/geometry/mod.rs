//! Geometry/transform stage: model space → screen space.
//!
//! A [`View`] carries the composed 4×4 model→screen transform together
//! with the zoom it encodes. Screen points are integer pixels with `z`
//! growing toward the viewer; `z` doubles as the depth key used by the
//! painter's sort.
//!
//! Atom positions are projected once per frame into a [`ScreenCache`]
//! arena indexed like the frame's atom slice, so an atom shared by several
//! bonds is transformed exactly once and the atoms themselves stay
//! read-only. Primitives that own their 3-D points project them through
//! [`project_point`] in their own transform step.
//!
//! Malformed transforms are not validated here: a NaN-producing matrix
//! yields saturated pixel values rather than an error.

mod scaling;

use glam::{IVec3, Mat4, Vec3};
pub use scaling::{radius_from_diameter, Scaling};

use crate::model::Atom;

/// A composed model→screen transform and the zoom it encodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    /// Model (angstroms) → screen (pixels) transform, `z` toward viewer.
    pub matrix: Mat4,
    /// Screen pixels per model angstrom; drives on-screen atom sizes.
    pub pixels_per_angstrom: f32,
}

impl View {
    /// Wrap an externally composed transform.
    #[must_use]
    pub fn new(matrix: Mat4, pixels_per_angstrom: f32) -> Self {
        Self {
            matrix,
            pixels_per_angstrom,
        }
    }
}

/// Transform a model-space point to an integer screen point `(x, y, z)`.
#[inline]
#[must_use]
pub fn project_point(matrix: &Mat4, point: Vec3) -> IVec3 {
    let s = matrix.project_point3(point);
    IVec3::new(s.x.round() as i32, s.y.round() as i32, s.z.round() as i32)
}

/// Per-frame arena of atom screen points, indexed by atom index.
///
/// Must be rebuilt with [`ScreenCache::project`] whenever the view or any
/// atom position changes, before primitives referencing those atoms are
/// built or drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenCache {
    points: Vec<IVec3>,
}

impl ScreenCache {
    /// Project every atom through `view` once.
    #[must_use]
    pub fn project(atoms: &[Atom], view: &View) -> Self {
        Self {
            points: atoms
                .iter()
                .map(|atom| project_point(&view.matrix, atom.position))
                .collect(),
        }
    }

    /// Screen point of the atom at `index`, if it exists.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<IVec3> {
        self.points.get(index).copied()
    }

    /// Number of projected atoms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no atoms were projected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Element;

    #[test]
    fn identity_projection_rounds_to_pixels() {
        let p = project_point(&Mat4::IDENTITY, Vec3::new(1.4, 2.6, -3.5));
        assert_eq!(p, IVec3::new(1, 3, -4));
    }

    #[test]
    fn cache_is_indexed_like_the_atom_slice() {
        let atoms = vec![
            Atom::new(Element::C, Vec3::new(1.0, 0.0, 0.0)),
            Atom::new(Element::O, Vec3::new(0.0, 1.0, 2.0)),
        ];
        let view = View::new(Mat4::from_scale(Vec3::splat(10.0)), 10.0);
        let cache = ScreenCache::project(&atoms, &view);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(0), Some(IVec3::new(10, 0, 0)));
        assert_eq!(cache.get(1), Some(IVec3::new(0, 10, 20)));
        assert_eq!(cache.get(2), None);
    }

    #[test]
    fn projection_is_deterministic() {
        let atoms: Vec<Atom> = (0..32)
            .map(|i| {
                let t = i as f32 * 0.37;
                Atom::new(Element::C, Vec3::new(t.sin(), t.cos(), t))
            })
            .collect();
        let view = View::new(
            Mat4::from_rotation_y(0.7) * Mat4::from_scale(Vec3::splat(25.0)),
            25.0,
        );
        assert_eq!(
            ScreenCache::project(&atoms, &view),
            ScreenCache::project(&atoms, &view)
        );
    }
}
