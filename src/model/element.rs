//! Chemical element table: symbols, names, van-der-Waals radii and CPK
//! colors for the elements that show up in typical small-molecule and
//! crystallographic input.

use std::str::FromStr;

use crate::util::color::Rgb;

/// van-der-Waals radius used for elements without a tabulated value.
pub const DEFAULT_VDW_RADIUS: f32 = 1.8;

/// A chemical element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Element {
    H,
    He,
    Li,
    B,
    C,
    N,
    O,
    F,
    Na,
    Mg,
    Si,
    P,
    S,
    Cl,
    K,
    Ca,
    Fe,
    Cu,
    Zn,
    Br,
    I,
}

/// (element, symbol, name, atomic number, vdW radius Å, CPK color)
type ElementRow = (Element, &'static str, &'static str, u8, f32, Rgb);

const TABLE: &[ElementRow] = &[
    (Element::H, "H", "hydrogen", 1, 1.20, [1.0, 1.0, 1.0]),
    (Element::He, "He", "helium", 2, 1.40, [0.85, 1.0, 1.0]),
    (Element::Li, "Li", "lithium", 3, 1.82, [0.8, 0.5, 1.0]),
    (Element::B, "B", "boron", 5, 1.92, [1.0, 0.71, 0.71]),
    (Element::C, "C", "carbon", 6, 1.70, [0.56, 0.56, 0.56]),
    (Element::N, "N", "nitrogen", 7, 1.55, [0.19, 0.31, 0.97]),
    (Element::O, "O", "oxygen", 8, 1.52, [1.0, 0.05, 0.05]),
    (Element::F, "F", "fluorine", 9, 1.47, [0.56, 0.88, 0.31]),
    (Element::Na, "Na", "sodium", 11, 2.27, [0.67, 0.36, 0.95]),
    (Element::Mg, "Mg", "magnesium", 12, 1.73, [0.54, 1.0, 0.0]),
    (Element::Si, "Si", "silicon", 14, 2.10, [0.94, 0.78, 0.63]),
    (Element::P, "P", "phosphorus", 15, 1.80, [1.0, 0.5, 0.0]),
    (Element::S, "S", "sulfur", 16, 1.80, [1.0, 1.0, 0.19]),
    (Element::Cl, "Cl", "chlorine", 17, 1.75, [0.12, 0.94, 0.12]),
    (Element::K, "K", "potassium", 19, 2.75, [0.56, 0.25, 0.83]),
    (Element::Ca, "Ca", "calcium", 20, 2.31, [0.24, 1.0, 0.0]),
    (Element::Fe, "Fe", "iron", 26, 2.04, [0.88, 0.4, 0.2]),
    (Element::Cu, "Cu", "copper", 29, 1.40, [0.78, 0.5, 0.2]),
    (Element::Zn, "Zn", "zinc", 30, 1.39, [0.49, 0.5, 0.69]),
    (Element::Br, "Br", "bromine", 35, 1.85, [0.65, 0.16, 0.16]),
    (Element::I, "I", "iodine", 53, 1.98, [0.58, 0.0, 0.58]),
];

impl Element {
    fn row(self) -> &'static ElementRow {
        // Every variant has exactly one row; the fallback is unreachable
        // but keeps the lookup total.
        TABLE
            .iter()
            .find(|row| row.0 == self)
            .unwrap_or(&TABLE[4])
    }

    /// Element symbol with conventional capitalization ("Cl").
    #[must_use]
    pub fn symbol(self) -> &'static str {
        self.row().1
    }

    /// Lower-case element name ("chlorine").
    #[must_use]
    pub fn name(self) -> &'static str {
        self.row().2
    }

    /// Atomic number.
    #[must_use]
    pub fn atomic_number(self) -> u8 {
        self.row().3
    }

    /// van-der-Waals radius in angstroms.
    #[must_use]
    pub fn vdw_radius(self) -> f32 {
        self.row().4
    }

    /// Standard CPK color.
    #[must_use]
    pub fn cpk_color(self) -> Rgb {
        self.row().5
    }

    /// Look up by atomic number.
    #[must_use]
    pub fn from_atomic_number(number: u8) -> Option<Self> {
        TABLE.iter().find(|row| row.3 == number).map(|row| row.0)
    }
}

/// Returned when a string does not name a tabulated element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownElement(pub String);

impl std::fmt::Display for UnknownElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown element symbol '{}'", self.0)
    }
}

impl std::error::Error for UnknownElement {}

impl FromStr for Element {
    type Err = UnknownElement;

    /// Case-insensitive symbol lookup ("CL", "cl" and "Cl" all match).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TABLE
            .iter()
            .find(|row| row.1.eq_ignore_ascii_case(trimmed))
            .map(|row| row.0)
            .ok_or_else(|| UnknownElement(trimmed.to_owned()))
    }
}
