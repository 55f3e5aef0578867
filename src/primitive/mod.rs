//! The per-frame primitive set.
//!
//! Every drawable unit is a [`Primitive`] variant carrying just what it
//! needs for its depth key and its draw call. Atom-backed variants refer to
//! atoms by index and read their screen points from the frame's
//! [`ScreenCache`]; segment-backed variants own their 3-D points and
//! project them in [`Transform::transform`].

mod atom;
mod bond;
pub mod depth;
mod segment;
mod set;

use glam::Mat4;

pub use atom::{AtomDisc, AtomLabel};
pub use bond::BondSegment;
pub use segment::{Axis, FreeLine, FreeVector, Segment};
pub use set::{FrameInput, PrimitiveSet};

use crate::error::SurfaceError;
use crate::geometry::{ScreenCache, Scaling};
use crate::model::Atom;
use crate::options::Options;
use crate::renderer::color_profile::ColorProfile;
use crate::renderer::RenderTable;
use crate::surface::Surface;
use crate::util::color::Rgb;

/// Depth keys are screen-space `z` in pixels, larger = nearer the viewer.
pub type DepthKey = i32;

/// Read-only frame state shared by every draw call.
pub struct FrameContext<'a> {
    /// The frame's atoms, indexed like the screen cache.
    pub atoms: &'a [Atom],
    /// Projected atom positions for this frame.
    pub screen: &'a ScreenCache,
    /// Display settings.
    pub options: &'a Options,
    /// Model → screen size conversion for this frame.
    pub scaling: Scaling,
    /// Strategies selected for this frame.
    pub table: RenderTable,
    /// Atom color resolution.
    pub profile: &'a dyn ColorProfile,
}

impl FrameContext<'_> {
    /// Resolved color of `atom`, or the configured fallback.
    #[must_use]
    pub fn atom_color(&self, atom: &Atom) -> Rgb {
        self.profile
            .atom_color(atom, self.options.display.color_scheme)
            .unwrap_or(self.options.colors.fallback_atom)
    }
}

/// Capability of primitives that own raw 3-D control points.
pub trait Transform {
    /// Project the owned points through `matrix` and refresh the depth key.
    fn transform(&mut self, matrix: &Mat4);
}

/// One drawable unit of a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// An atom disc.
    AtomDisc(AtomDisc),
    /// A bond between two atoms.
    BondSegment(BondSegment),
    /// Label and property text of an atom.
    AtomLabel(AtomLabel),
    /// A per-atom vector arrow.
    FreeVector(FreeVector),
    /// A free-standing line.
    FreeLine(FreeLine),
    /// One model-space axis.
    Axis(Axis),
}

impl Primitive {
    /// Back-to-front ordering key.
    #[must_use]
    pub fn depth(&self) -> DepthKey {
        match self {
            Self::AtomDisc(p) => p.depth(),
            Self::BondSegment(p) => p.depth(),
            Self::AtomLabel(p) => p.depth(),
            Self::FreeVector(p) => p.depth(),
            Self::FreeLine(p) => p.depth(),
            Self::Axis(p) => p.depth(),
        }
    }

    /// Paint onto `surface` using already-computed screen state.
    pub fn draw(
        &self,
        ctx: &FrameContext<'_>,
        surface: &mut dyn Surface,
    ) -> Result<(), SurfaceError> {
        match self {
            Self::AtomDisc(p) => p.draw(ctx, surface),
            Self::BondSegment(p) => p.draw(ctx, surface),
            Self::AtomLabel(p) => p.draw(ctx, surface),
            Self::FreeVector(p) => p.draw(ctx, surface),
            Self::FreeLine(p) => p.draw(ctx, surface),
            Self::Axis(p) => p.draw(ctx, surface),
        }
    }

    /// The transform capability, present only on variants that own their
    /// geometry. Atom-backed variants are projected upstream.
    pub fn as_transform_mut(&mut self) -> Option<&mut dyn Transform> {
        match self {
            Self::FreeVector(p) => Some(p),
            Self::FreeLine(p) => Some(p),
            Self::Axis(p) => Some(p),
            Self::AtomDisc(_) | Self::BondSegment(_) | Self::AtomLabel(_) => {
                None
            }
        }
    }
}
