//! Atom labels and property annotations.

use std::f32::consts::SQRT_2;

use glam::IVec2;

use crate::error::SurfaceError;
use crate::model::Atom;
use crate::options::{ColorOptions, GeometryOptions, LabelMode};
use crate::surface::Surface;

/// Longest property value drawn, in characters.
pub const MAX_PROPERTY_CHARS: usize = 5;

/// Text to draw on and next to one atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomText {
    /// Atom center in pixels.
    pub center: IVec2,
    /// Atom drawing radius in pixels.
    pub radius: i32,
    /// Label centered on the atom.
    pub label: Option<String>,
    /// Property value drawn up and to the right, already truncated.
    pub property: Option<String>,
}

/// Label text for the atom at `index` under `mode`. Untyped atoms have no
/// symbol or name, so those modes yield `None` for them.
#[must_use]
pub fn label_text(mode: LabelMode, atom: &Atom, index: usize) -> Option<String> {
    match mode {
        LabelMode::None => None,
        LabelMode::Symbol => atom.element.map(|e| e.symbol().to_owned()),
        LabelMode::TypeName => atom.element.map(|e| e.name().to_owned()),
        LabelMode::Number => Some((index + 1).to_string()),
    }
}

/// Cut a property value to at most [`MAX_PROPERTY_CHARS`] characters.
#[must_use]
pub fn truncate_property(value: &str) -> &str {
    value
        .char_indices()
        .nth(MAX_PROPERTY_CHARS)
        .map_or(value, |(end, _)| &value[..end])
}

/// Label font size for an atom of on-screen `radius`.
#[must_use]
pub fn font_size_for_radius(radius: i32, geometry: &GeometryOptions) -> i32 {
    ((radius as f32 * geometry.label_font_scale).round() as i32)
        .max(geometry.min_label_font)
}

/// Draw the label centered on the atom and the property annotation offset
/// `2 + radius/√2` pixels up and to the right in a half-size font.
pub fn draw_atom_text(
    text: &AtomText,
    font_size: i32,
    colors: &ColorOptions,
    surface: &mut dyn Surface,
) -> Result<(), SurfaceError> {
    surface.set_color(colors.text);
    if let Some(label) = &text.label {
        surface.set_font_size(font_size);
        let width = surface.string_width(label);
        let ascent = surface.font_metrics().ascent;
        let origin = text.center + IVec2::new(-width / 2, ascent / 2);
        surface.draw_string(label, origin)?;
    }
    if let Some(property) = &text.property {
        surface.set_font_size((font_size / 2).max(1));
        let offset = (2.0 + text.radius as f32 / SQRT_2) as i32;
        let origin = text.center + IVec2::new(offset, -offset);
        surface.draw_string(property, origin)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::model::Element;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn number_mode_is_one_based() {
        let atom = Atom::new(Element::C, Vec3::ZERO);
        assert_eq!(label_text(LabelMode::Number, &atom, 0).as_deref(), Some("1"));
        assert_eq!(label_text(LabelMode::Symbol, &atom, 0).as_deref(), Some("C"));
        assert_eq!(
            label_text(LabelMode::TypeName, &atom, 0).as_deref(),
            Some("carbon")
        );
        assert_eq!(label_text(LabelMode::None, &atom, 0), None);
    }

    #[test]
    fn untyped_atom_has_no_symbol_label() {
        let atom = Atom::untyped(Vec3::ZERO);
        assert_eq!(label_text(LabelMode::Symbol, &atom, 3), None);
        assert_eq!(label_text(LabelMode::Number, &atom, 3).as_deref(), Some("4"));
    }

    #[test]
    fn property_truncation() {
        assert_eq!(truncate_property("-0.4237"), "-0.42");
        assert_eq!(truncate_property("12345"), "12345");
        assert_eq!(truncate_property("1.5"), "1.5");
        assert_eq!(truncate_property(""), "");
        assert_eq!(truncate_property("αβγδεζη"), "αβγδε");
    }

    #[test]
    fn label_is_centered_on_atom() {
        let text = AtomText {
            center: IVec2::new(50, 50),
            radius: 10,
            label: Some("1".to_owned()),
            property: None,
        };
        let mut surface = RecordingSurface::new();
        draw_atom_text(&text, 16, &ColorOptions::default(), &mut surface)
            .unwrap();

        surface.set_font_size(16);
        let width = surface.string_width("1");
        let ascent = surface.font_metrics().ascent;
        assert!(matches!(
            surface.commands(),
            [DrawCommand::Text { text, origin, font_size: 16, .. }]
                if text == "1" && *origin == IVec2::new(50 - width / 2, 50 + ascent / 2)
        ));
    }

    #[test]
    fn property_is_offset_up_right_in_half_font() {
        let text = AtomText {
            center: IVec2::new(50, 50),
            radius: 10,
            label: None,
            property: Some("-0.42".to_owned()),
        };
        let mut surface = RecordingSurface::new();
        draw_atom_text(&text, 16, &ColorOptions::default(), &mut surface)
            .unwrap();
        // 2 + 10/√2 = 9.07
        assert!(matches!(
            surface.commands(),
            [DrawCommand::Text { origin, font_size: 8, .. }]
                if *origin == IVec2::new(59, 41)
        ));
    }

    #[test]
    fn font_tracks_radius_with_floor() {
        let geometry = GeometryOptions::default();
        assert_eq!(font_size_for_radius(20, &geometry), 16);
        assert_eq!(font_size_for_radius(1, &geometry), geometry.min_label_font);
    }
}
