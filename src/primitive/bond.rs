use super::{DepthKey, FrameContext};
use crate::error::SurfaceError;
use crate::geometry::ScreenCache;
use crate::model::Bond;
use crate::renderer::bond::BondSpec;
use crate::surface::Surface;

/// A bond between two projected atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondSegment {
    bond: Bond,
    depth: DepthKey,
}

/// `(3·z1 + z2) / 4`, truncating toward zero, so a bond sorts with the
/// nearer quarter of its first atom.
#[must_use]
pub fn weighted_bond_depth(z1: i32, z2: i32) -> DepthKey {
    ((3 * i64::from(z1) + i64::from(z2)) / 4) as DepthKey
}

impl BondSegment {
    /// Segment for `bond`; `None` if either atom was not projected.
    #[must_use]
    pub fn new(bond: Bond, screen: &ScreenCache) -> Option<Self> {
        let a = screen.get(bond.a)?;
        let b = screen.get(bond.b)?;
        Some(Self {
            bond,
            depth: weighted_bond_depth(a.z, b.z),
        })
    }

    /// The bond this segment draws.
    #[must_use]
    pub fn bond(&self) -> Bond {
        self.bond
    }

    /// Weighted average of the two atom depths.
    #[must_use]
    pub fn depth(&self) -> DepthKey {
        self.depth
    }

    /// Draw through the frame's bond strategy, each half in its own atom's
    /// color.
    pub fn draw(
        &self,
        ctx: &FrameContext<'_>,
        surface: &mut dyn Surface,
    ) -> Result<(), SurfaceError> {
        let (Some(a), Some(b)) =
            (ctx.screen.get(self.bond.a), ctx.screen.get(self.bond.b))
        else {
            return Ok(());
        };
        let (Some(atom_a), Some(atom_b)) =
            (ctx.atoms.get(self.bond.a), ctx.atoms.get(self.bond.b))
        else {
            return Ok(());
        };
        let spec = BondSpec {
            from: a.truncate(),
            to: b.truncate(),
            width: ctx
                .scaling
                .bond_width(((i64::from(a.z) + i64::from(b.z)) / 2) as i32),
            colors: [ctx.atom_color(atom_a), ctx.atom_color(atom_b)],
        };
        ctx.table.draw_bond(&spec, &ctx.options.colors, surface)
    }
}
