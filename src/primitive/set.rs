use glam::{Mat4, Vec3};
use rustc_hash::FxHashSet;

use super::depth::sort_by_depth;
use super::{
    AtomDisc, AtomLabel, Axis, BondSegment, FreeLine, FreeVector, Primitive,
};
use crate::geometry::ScreenCache;
use crate::model::{Atom, Bond, Line3};
use crate::options::{GeometryOptions, Options};
use crate::renderer::vector::{VectorScale, MIN_MAGNITUDE};

/// Everything the domain model supplies for one frame. All entries are
/// assumed visible; filtering happens upstream.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    /// Visible atoms; their order defines atom indices.
    pub atoms: &'a [Atom],
    /// Visible bonds between entries of `atoms`.
    pub bonds: &'a [Bond],
    /// Free-standing lines.
    pub lines: &'a [Line3],
}

impl<'a> FrameInput<'a> {
    /// Atoms and bonds, no free lines.
    #[must_use]
    pub fn new(atoms: &'a [Atom], bonds: &'a [Bond]) -> Self {
        Self {
            atoms,
            bonds,
            lines: &[],
        }
    }

    /// Builder: attach free lines.
    #[must_use]
    pub fn with_lines(mut self, lines: &'a [Line3]) -> Self {
        self.lines = lines;
        self
    }
}

/// The frame's primitives, built fresh every frame and discarded after
/// compositing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimitiveSet {
    primitives: Vec<Primitive>,
    skipped: usize,
}

#[derive(Default)]
struct BondRejects {
    self_bonds: usize,
    duplicates: usize,
    dangling: usize,
}

impl PrimitiveSet {
    /// Build the primitives the display options ask for, in a fixed order:
    /// per atom its disc then its label, then bonds, vectors, free lines and
    /// axes. Malformed input (self bonds, duplicate bonds, bonds to missing
    /// atoms) is dropped and counted rather than failing the frame.
    #[must_use]
    pub fn build(
        input: &FrameInput<'_>,
        screen: &ScreenCache,
        options: &Options,
    ) -> Self {
        let display = &options.display;
        let mut set = Self::default();

        let draws_text = display.draws_atom_text();
        if display.show_atoms || draws_text {
            for index in 0..input.atoms.len() {
                if display.show_atoms {
                    set.push_or_skip(
                        AtomDisc::new(index, screen).map(Primitive::AtomDisc),
                    );
                }
                if draws_text {
                    set.push_or_skip(
                        AtomLabel::new(index, screen).map(Primitive::AtomLabel),
                    );
                }
            }
        }
        if display.show_bonds {
            set.push_bonds(input.bonds, screen);
        }
        if display.show_vectors {
            set.push_vectors(input.atoms, &options.geometry);
        }
        for line in input.lines {
            set.primitives
                .push(Primitive::FreeLine(FreeLine::new(line.start, line.end)));
        }
        if display.show_axes {
            set.primitives.extend(
                Axis::all(options.geometry.axis_length).map(Primitive::Axis),
            );
        }
        set
    }

    fn push_or_skip(&mut self, primitive: Option<Primitive>) {
        match primitive {
            Some(p) => self.primitives.push(p),
            None => self.skipped += 1,
        }
    }

    fn push_bonds(&mut self, bonds: &[Bond], screen: &ScreenCache) {
        let mut seen = FxHashSet::default();
        let mut rejects = BondRejects::default();
        for &bond in bonds {
            if bond.a == bond.b {
                rejects.self_bonds += 1;
            } else if !seen.insert(bond.key()) {
                rejects.duplicates += 1;
            } else if let Some(segment) = BondSegment::new(bond, screen) {
                self.primitives.push(Primitive::BondSegment(segment));
            } else {
                rejects.dangling += 1;
            }
        }
        if rejects.self_bonds > 0 {
            log::warn!("dropped {} self bonds", rejects.self_bonds);
        }
        if rejects.duplicates > 0 {
            log::warn!("dropped {} duplicate bonds", rejects.duplicates);
        }
        if rejects.dangling > 0 {
            log::warn!(
                "dropped {} bonds referencing missing atoms",
                rejects.dangling
            );
        }
        self.skipped +=
            rejects.self_bonds + rejects.duplicates + rejects.dangling;
    }

    /// One arrow per atom carrying vector data. Lengths are normalized
    /// across every vector in the frame; vectors with no usable magnitude
    /// are left out of both the arrows and the normalization.
    fn push_vectors(&mut self, atoms: &[Atom], geometry: &GeometryOptions) {
        let vectors: Vec<(Vec3, Vec3)> = atoms
            .iter()
            .filter_map(|atom| atom.vector.map(|v| (atom.position, v)))
            .filter(|(_, v)| v.length() >= MIN_MAGNITUDE)
            .collect();
        let Some(scale) =
            VectorScale::from_magnitudes(vectors.iter().map(|(_, v)| v.length()))
        else {
            return;
        };
        for (origin, v) in vectors {
            let length = scale.scaling(v.length()) * geometry.vector_scale;
            let tip = origin + v.normalize_or_zero() * length;
            self.primitives
                .push(Primitive::FreeVector(FreeVector::new(origin, tip)));
        }
    }

    /// Project every primitive that owns its geometry.
    pub fn transform(&mut self, matrix: &Mat4) {
        for primitive in &mut self.primitives {
            if let Some(owned) = primitive.as_transform_mut() {
                owned.transform(matrix);
            }
        }
    }

    /// Order back to front.
    pub fn sort(&mut self) {
        sort_by_depth(&mut self.primitives);
    }

    /// The primitives in their current order.
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Input entries dropped while building.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
