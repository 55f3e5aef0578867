//! Atom color resolution.

use rustc_hash::FxHashMap;

use crate::model::{Atom, Element};
use crate::options::{ColorOptions, ColorScheme};
use crate::util::charge_color::{charge_color, ColorRamp};
use crate::util::color::Rgb;

/// Property consulted by [`ColorScheme::Charge`].
pub const CHARGE_PROPERTY: &str = "charge";

/// Maps an atom and a color-scheme selector to a color.
///
/// `None` means the color cannot be resolved (missing type, missing or
/// unparsable property); callers substitute the configured fallback.
pub trait ColorProfile {
    /// Resolve the color of `atom` under `scheme`.
    fn atom_color(&self, atom: &Atom, scheme: ColorScheme) -> Option<Rgb>;
}

/// CPK coloring with per-element overrides and a charge ramp.
#[derive(Debug, Clone, Default)]
pub struct CpkProfile {
    overrides: FxHashMap<Element, Rgb>,
    ramp: ColorRamp,
}

impl CpkProfile {
    /// Build from the palette's per-element overrides. Override keys that
    /// are not element symbols are ignored with a warning.
    #[must_use]
    pub fn from_options(colors: &ColorOptions) -> Self {
        let mut overrides = FxHashMap::default();
        for (symbol, color) in &colors.element_overrides {
            match symbol.parse::<Element>() {
                Ok(element) => {
                    let _ = overrides.insert(element, *color);
                }
                Err(e) => log::warn!("ignoring color override: {e}"),
            }
        }
        Self {
            overrides,
            ramp: ColorRamp::default(),
        }
    }
}

impl ColorProfile for CpkProfile {
    fn atom_color(&self, atom: &Atom, scheme: ColorScheme) -> Option<Rgb> {
        match scheme {
            ColorScheme::AtomType => {
                let element = atom.element?;
                Some(
                    self.overrides
                        .get(&element)
                        .copied()
                        .unwrap_or_else(|| element.cpk_color()),
                )
            }
            ColorScheme::Charge => {
                let charge = atom
                    .property(CHARGE_PROPERTY)?
                    .trim()
                    .parse::<f32>()
                    .ok()
                    .filter(|c| c.is_finite())?;
                Some(charge_color(charge, &self.ramp))
            }
        }
    }
}
