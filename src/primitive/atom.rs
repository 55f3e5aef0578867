use super::{DepthKey, FrameContext};
use crate::error::SurfaceError;
use crate::geometry::{radius_from_diameter, ScreenCache};
use crate::renderer::atom::AtomSpec;
use crate::renderer::label::{
    draw_atom_text, font_size_for_radius, label_text, truncate_property,
    AtomText,
};
use crate::surface::Surface;

/// Disc for one atom, drawn just in front of the atom's own depth so it
/// covers the atom ends of its bonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomDisc {
    atom: usize,
    depth: DepthKey,
}

impl AtomDisc {
    /// Disc for the atom at `atom`; `None` if the atom was not projected.
    #[must_use]
    pub fn new(atom: usize, screen: &ScreenCache) -> Option<Self> {
        let p = screen.get(atom)?;
        Some(Self {
            atom,
            depth: p.z.saturating_add(1),
        })
    }

    /// Index of the atom in the frame's atom slice.
    #[must_use]
    pub fn atom(&self) -> usize {
        self.atom
    }

    /// Atom depth + 1.
    #[must_use]
    pub fn depth(&self) -> DepthKey {
        self.depth
    }

    /// Draw through the frame's atom strategy.
    pub fn draw(
        &self,
        ctx: &FrameContext<'_>,
        surface: &mut dyn Surface,
    ) -> Result<(), SurfaceError> {
        let (Some(atom), Some(p)) =
            (ctx.atoms.get(self.atom), ctx.screen.get(self.atom))
        else {
            return Ok(());
        };
        let diameter = ctx.scaling.atom_diameter(p.z, atom.vdw_radius());
        if diameter <= 0 {
            return Ok(());
        }
        let spec = AtomSpec {
            center: p.truncate(),
            diameter,
            color: ctx.atom_color(atom),
            picked: atom.picked,
        };
        ctx.table.draw_atom(&spec, &ctx.options.colors, surface)
    }
}

/// Label and property annotation for one atom, sharing the disc's depth
/// and drawn after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomLabel {
    atom: usize,
    depth: DepthKey,
}

impl AtomLabel {
    /// Label for the atom at `atom`; `None` if the atom was not projected.
    #[must_use]
    pub fn new(atom: usize, screen: &ScreenCache) -> Option<Self> {
        let p = screen.get(atom)?;
        Some(Self {
            atom,
            depth: p.z.saturating_add(1),
        })
    }

    /// Index of the atom in the frame's atom slice.
    #[must_use]
    pub fn atom(&self) -> usize {
        self.atom
    }

    /// Atom depth + 1.
    #[must_use]
    pub fn depth(&self) -> DepthKey {
        self.depth
    }

    /// Draw whatever text the display options ask for; an atom with
    /// neither a label nor the configured property draws nothing.
    pub fn draw(
        &self,
        ctx: &FrameContext<'_>,
        surface: &mut dyn Surface,
    ) -> Result<(), SurfaceError> {
        let (Some(atom), Some(p)) =
            (ctx.atoms.get(self.atom), ctx.screen.get(self.atom))
        else {
            return Ok(());
        };
        let display = &ctx.options.display;
        let label = label_text(display.label_mode, atom, self.atom);
        let property = if display.property_key.is_empty() {
            None
        } else {
            atom.property(&display.property_key)
                .map(|value| truncate_property(value).to_owned())
        };
        if label.is_none() && property.is_none() {
            return Ok(());
        }

        let radius = radius_from_diameter(
            ctx.scaling.atom_diameter(p.z, atom.vdw_radius()),
        );
        let text = AtomText {
            center: p.truncate(),
            radius,
            label,
            property,
        };
        let font_size = font_size_for_radius(radius, &ctx.options.geometry);
        draw_atom_text(&text, font_size, &ctx.options.colors, surface)
    }
}

#[cfg(test)]
mod tests {
    use glam::{IVec3, Mat4, Vec3};

    use super::*;
    use crate::geometry::View;
    use crate::model::{Atom, Element};

    fn cache() -> ScreenCache {
        let atoms = vec![
            Atom::new(Element::C, Vec3::new(1.0, 2.0, -3.0)),
            Atom::new(Element::O, Vec3::new(0.0, 0.0, 4.0)),
        ];
        ScreenCache::project(
            &atoms,
            &View::new(Mat4::from_scale(Vec3::splat(10.0)), 10.0),
        )
    }

    #[test]
    fn disc_and_label_sit_one_in_front_of_the_atom() {
        let cache = cache();
        for index in 0..cache.len() {
            let z = cache.get(index).map(|p| p.z).unwrap();
            let disc = AtomDisc::new(index, &cache).unwrap();
            let label = AtomLabel::new(index, &cache).unwrap();
            assert_eq!(disc.depth(), z + 1);
            assert_eq!(label.depth(), z + 1);
            assert_eq!(disc.atom(), index);
            assert_eq!(label.atom(), index);
        }
        assert_eq!(cache.get(0), Some(IVec3::new(10, 20, -30)));
        assert_eq!(AtomDisc::new(0, &cache).unwrap().depth(), -29);
        assert_eq!(AtomLabel::new(1, &cache).unwrap().depth(), 41);
    }

    #[test]
    fn unprojected_atoms_yield_nothing() {
        let cache = cache();
        assert!(AtomDisc::new(2, &cache).is_none());
        assert!(AtomLabel::new(2, &cache).is_none());
    }
}
