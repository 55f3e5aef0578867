//! Renderer strategies for each primitive kind.
//!
//! Each draw mode is a stateless strategy: a named function pointer held in
//! a process-wide `static`. [`RenderTable::select`] picks one strategy per
//! kind from the display options once per frame, and every primitive of
//! that kind is drawn through the same entry.

pub mod atom;
pub mod bond;
pub mod color_profile;
pub mod label;
pub mod vector;

use atom::AtomSpec;
use bond::BondSpec;

use crate::error::SurfaceError;
use crate::options::{AtomDrawMode, BondDrawMode, ColorOptions, DisplayOptions};
use crate::surface::Surface;

/// Signature shared by atom strategies.
pub type AtomDrawFn =
    fn(&AtomSpec, &ColorOptions, &mut dyn Surface) -> Result<(), SurfaceError>;

/// Signature shared by bond strategies.
pub type BondDrawFn =
    fn(&BondSpec, &ColorOptions, &mut dyn Surface) -> Result<(), SurfaceError>;

/// A named atom rendering algorithm.
#[derive(Debug)]
pub struct AtomStrategy {
    /// Mode name, for logging.
    pub name: &'static str,
    /// The drawing routine.
    pub draw: AtomDrawFn,
}

/// A named bond rendering algorithm.
#[derive(Debug)]
pub struct BondStrategy {
    /// Mode name, for logging.
    pub name: &'static str,
    /// The drawing routine.
    pub draw: BondDrawFn,
}

/// Filled, outlined disc with picked halo.
pub static QUICKDRAW_ATOM: AtomStrategy = AtomStrategy {
    name: "quickdraw",
    draw: atom::quickdraw,
};
/// Radially shaded disc.
pub static SHADED_ATOM: AtomStrategy = AtomStrategy {
    name: "shaded",
    draw: atom::shaded,
};
/// Open circle.
pub static WIREFRAME_ATOM: AtomStrategy = AtomStrategy {
    name: "wireframe",
    draw: atom::wireframe,
};

/// Filled stick polygon.
pub static QUICKDRAW_BOND: BondStrategy = BondStrategy {
    name: "quickdraw",
    draw: bond::quickdraw,
};
/// Single segment.
pub static LINE_BOND: BondStrategy = BondStrategy {
    name: "line",
    draw: bond::line,
};
/// Shaded cylinder.
pub static SHADED_BOND: BondStrategy = BondStrategy {
    name: "shaded",
    draw: bond::shaded,
};
/// Double line.
pub static WIREFRAME_BOND: BondStrategy = BondStrategy {
    name: "wireframe",
    draw: bond::wireframe,
};

/// The strategies chosen for one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderTable {
    /// Strategy for every atom disc.
    pub atom: &'static AtomStrategy,
    /// Strategy for every bond segment.
    pub bond: &'static BondStrategy,
}

impl RenderTable {
    /// Pick strategies from the display options. Fast rendering overrides
    /// both modes with wireframe atoms and line bonds.
    #[must_use]
    pub fn select(display: &DisplayOptions) -> Self {
        let atom = if display.fast_rendering {
            &WIREFRAME_ATOM
        } else {
            match display.atom_draw_mode {
                AtomDrawMode::Quickdraw => &QUICKDRAW_ATOM,
                AtomDrawMode::Shaded => &SHADED_ATOM,
                AtomDrawMode::Wireframe => &WIREFRAME_ATOM,
            }
        };
        let bond = if display.fast_rendering {
            &LINE_BOND
        } else {
            match display.bond_draw_mode {
                BondDrawMode::Quickdraw => &QUICKDRAW_BOND,
                BondDrawMode::Line => &LINE_BOND,
                BondDrawMode::Shaded => &SHADED_BOND,
                BondDrawMode::Wireframe => &WIREFRAME_BOND,
            }
        };
        Self { atom, bond }
    }

    /// Draw one atom with the selected strategy.
    pub fn draw_atom(
        &self,
        spec: &AtomSpec,
        colors: &ColorOptions,
        surface: &mut dyn Surface,
    ) -> Result<(), SurfaceError> {
        (self.atom.draw)(spec, colors, surface)
    }

    /// Draw one bond with the selected strategy.
    pub fn draw_bond(
        &self,
        spec: &BondSpec,
        colors: &ColorOptions,
        surface: &mut dyn Surface,
    ) -> Result<(), SurfaceError> {
        (self.bond.draw)(spec, colors, surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(display: &DisplayOptions) -> (&'static str, &'static str) {
        let table = RenderTable::select(display);
        (table.atom.name, table.bond.name)
    }

    #[test]
    fn defaults_to_quickdraw() {
        assert_eq!(
            names(&DisplayOptions::default()),
            ("quickdraw", "quickdraw")
        );
    }

    #[test]
    fn modes_map_to_strategies() {
        let mut display = DisplayOptions {
            atom_draw_mode: AtomDrawMode::Shaded,
            bond_draw_mode: BondDrawMode::Wireframe,
            ..DisplayOptions::default()
        };
        assert_eq!(names(&display), ("shaded", "wireframe"));
        display.atom_draw_mode = AtomDrawMode::Wireframe;
        display.bond_draw_mode = BondDrawMode::Line;
        assert_eq!(names(&display), ("wireframe", "line"));
        display.bond_draw_mode = BondDrawMode::Shaded;
        assert_eq!(names(&display), ("wireframe", "shaded"));
    }

    #[test]
    fn fast_rendering_overrides_modes() {
        let display = DisplayOptions {
            atom_draw_mode: AtomDrawMode::Shaded,
            bond_draw_mode: BondDrawMode::Shaded,
            fast_rendering: true,
            ..DisplayOptions::default()
        };
        assert_eq!(names(&display), ("wireframe", "line"));
    }
}
