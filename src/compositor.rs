//! Frame compositor and the per-frame pipeline around it.
//!
//! [`FrameRenderer::render`] runs one repaint: project atoms into a
//! [`ScreenCache`], build the [`PrimitiveSet`], transform owned geometry,
//! depth-sort, select strategies, clear the surface and hand the sorted
//! list to [`composite`]. Nothing survives the call; the surface is only
//! borrowed for its duration.

use crate::error::{MolpaintError, SurfaceError};
use crate::geometry::{Scaling, ScreenCache, View};
use crate::options::Options;
use crate::primitive::depth::depth_range;
use crate::primitive::{FrameContext, Primitive, PrimitiveSet};
use crate::renderer::color_profile::{ColorProfile, CpkProfile};
use crate::renderer::RenderTable;
use crate::surface::Surface;

pub use crate::primitive::FrameInput;

/// Summary of one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Primitives drawn.
    pub primitives: usize,
    /// Input entries dropped as malformed.
    pub skipped: usize,
}

/// Draw `primitives` in order. Performs no drawing of its own; an empty
/// list is a no-op. The first surface failure aborts the loop.
pub fn composite(
    primitives: &[Primitive],
    ctx: &FrameContext<'_>,
    surface: &mut dyn Surface,
) -> Result<(), SurfaceError> {
    for primitive in primitives {
        primitive.draw(ctx, surface)?;
    }
    Ok(())
}

/// Renders frames under a set of display options.
#[derive(Debug, Clone)]
pub struct FrameRenderer<P = CpkProfile> {
    /// Display settings consulted every frame.
    pub options: Options,
    /// Atom color resolution.
    pub profile: P,
}

impl FrameRenderer<CpkProfile> {
    /// Renderer with CPK coloring built from the options' palette.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let profile = CpkProfile::from_options(&options.colors);
        Self { options, profile }
    }
}

impl Default for FrameRenderer<CpkProfile> {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl<P: ColorProfile> FrameRenderer<P> {
    /// Renderer with a host-supplied color profile.
    pub fn with_profile(options: Options, profile: P) -> Self {
        Self { options, profile }
    }

    /// Build, sort and composite one frame onto `surface`.
    pub fn render(
        &self,
        input: &FrameInput<'_>,
        view: &View,
        surface: &mut dyn Surface,
    ) -> Result<FrameStats, MolpaintError> {
        let screen = ScreenCache::project(input.atoms, view);
        let mut set = PrimitiveSet::build(input, &screen, &self.options);
        set.transform(&view.matrix);
        set.sort();

        let table = RenderTable::select(&self.options.display);
        let ctx = FrameContext {
            atoms: input.atoms,
            screen: &screen,
            options: &self.options,
            scaling: Scaling::new(
                &self.options.geometry,
                view.pixels_per_angstrom,
            ),
            table,
            profile: &self.profile,
        };

        surface.clear(self.options.colors.background)?;
        composite(set.primitives(), &ctx, surface)?;

        if log::log_enabled!(log::Level::Debug) {
            let span = depth_range(set.primitives())
                .map_or_else(|| "-".to_owned(), |(lo, hi)| format!("{lo}..={hi}"));
            log::debug!(
                "frame: {} primitives ({} skipped) from {} atoms, {} bonds; \
                 depth {span}; atoms {}, bonds {}",
                set.len(),
                set.skipped(),
                input.atoms.len(),
                input.bonds.len(),
                table.atom.name,
                table.bond.name,
            );
        }
        Ok(FrameStats {
            primitives: set.len(),
            skipped: set.skipped(),
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::{IVec2, Mat4, Vec3};

    use super::*;
    use crate::camera::core::Camera;
    use crate::model::{Atom, Bond, Element, Line3};
    use crate::options::{AtomDrawMode, BondDrawMode, LabelMode};
    use crate::surface::{DrawCommand, RecordingSurface};

    /// A view with no rotation: model (x, y, z) → screen (x, y, z) · 10.
    fn flat_view() -> View {
        View::new(Mat4::from_scale(Vec3::splat(10.0)), 10.0)
    }

    /// Options where a carbon (vdW 1.7) under [`flat_view`] has diameter
    /// 20: 2 · 1.7 · 0.6 · 10 = 20.4, truncated.
    fn flat_options() -> Options {
        let mut options = Options::default();
        options.geometry.perspective = false;
        options.geometry.atom_sphere_factor = 0.6;
        options
    }

    fn ethane() -> (Vec<Atom>, Vec<Bond>) {
        let atoms = vec![
            Atom::new(Element::C, Vec3::new(-0.76, 0.0, 0.0)),
            Atom::new(Element::C, Vec3::new(0.76, 0.0, 0.0)),
            Atom::new(Element::H, Vec3::new(-1.16, 1.0, 0.3)),
            Atom::new(Element::H, Vec3::new(-1.16, -0.5, -0.9)),
            Atom::new(Element::H, Vec3::new(1.16, 0.5, 0.9)),
            Atom::new(Element::H, Vec3::new(1.16, -1.0, -0.3)),
        ];
        let bonds = vec![
            Bond::new(0, 1),
            Bond::new(0, 2),
            Bond::new(0, 3),
            Bond::new(1, 4),
            Bond::new(1, 5),
        ];
        (atoms, bonds)
    }

    #[test]
    fn picked_quickdraw_atom_scenario() {
        let atoms =
            vec![Atom::new(Element::C, Vec3::new(5.0, 5.0, 0.0)).with_picked(true)];
        let renderer = FrameRenderer::new(flat_options());
        let mut surface = RecordingSurface::new();
        let stats = renderer
            .render(&FrameInput::new(&atoms, &[]), &flat_view(), &mut surface)
            .unwrap();
        assert_eq!(stats.primitives, 1);

        let colors = &renderer.options.colors;
        let center = IVec2::new(50, 50);
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Clear {
                    color: colors.background
                },
                DrawCommand::FillEllipse {
                    center,
                    radii: IVec2::splat(15),
                    color: colors.picked,
                },
                DrawCommand::FillEllipse {
                    center,
                    radii: IVec2::splat(10),
                    color: Element::C.cpk_color(),
                },
                DrawCommand::DrawEllipse {
                    center,
                    radii: IVec2::splat(10),
                    color: colors.outline,
                    stroke: 1.0,
                },
            ]
        );
    }

    #[test]
    fn number_label_scenario() {
        let atoms = vec![Atom::new(Element::C, Vec3::new(5.0, 5.0, 0.0))];
        let mut options = flat_options();
        options.display.label_mode = LabelMode::Number;
        options.display.show_atoms = false;
        let renderer = FrameRenderer::new(options);
        let mut surface = RecordingSurface::new();
        let _ = renderer
            .render(&FrameInput::new(&atoms, &[]), &flat_view(), &mut surface)
            .unwrap();

        // radius 10 → font 8 under the default 0.8 label scale
        let mut metrics = RecordingSurface::new();
        metrics.set_font_size(8);
        let width = metrics.string_width("1");
        let ascent = metrics.font_metrics().ascent;
        assert!(matches!(
            &surface.commands()[1..],
            [DrawCommand::Text { text, origin, font_size: 8, .. }]
                if text == "1" && *origin == IVec2::new(50 - width / 2, 50 + ascent / 2)
        ));
    }

    #[test]
    fn property_annotation_is_truncated() {
        let atoms = vec![Atom::new(Element::C, Vec3::new(5.0, 5.0, 0.0))
            .with_property("charge", "-0.12345")];
        let mut options = flat_options();
        options.display.property_key = "charge".to_owned();
        options.display.show_atoms = false;
        let renderer = FrameRenderer::new(options);
        let mut surface = RecordingSurface::new();
        let _ = renderer
            .render(&FrameInput::new(&atoms, &[]), &flat_view(), &mut surface)
            .unwrap();
        assert!(matches!(
            &surface.commands()[1..],
            [DrawCommand::Text { text, .. }] if text == "-0.12"
        ));
    }

    #[test]
    fn bonds_draw_before_nearer_atoms() {
        let atoms = vec![
            Atom::new(Element::C, Vec3::new(0.0, 0.0, 0.0)),
            Atom::new(Element::O, Vec3::new(1.0, 0.0, 0.0)),
        ];
        let bonds = [Bond::new(0, 1)];
        let mut options = flat_options();
        options.display.bond_draw_mode = BondDrawMode::Line;
        let renderer = FrameRenderer::new(options);
        let mut surface = RecordingSurface::new();
        let _ = renderer
            .render(&FrameInput::new(&atoms, &bonds), &flat_view(), &mut surface)
            .unwrap();
        let first_line = surface
            .commands()
            .iter()
            .position(|c| matches!(c, DrawCommand::Line { .. }))
            .unwrap();
        let first_disc = surface
            .commands()
            .iter()
            .position(|c| matches!(c, DrawCommand::FillEllipse { .. }))
            .unwrap();
        assert!(first_line < first_disc);
    }

    #[test]
    fn untyped_atom_falls_back_without_aborting() {
        let atoms = vec![
            Atom::untyped(Vec3::new(1.0, 1.0, 0.0)),
            Atom::new(Element::N, Vec3::new(3.0, 1.0, 0.0)),
        ];
        let mut options = flat_options();
        options.display.label_mode = LabelMode::Symbol;
        let renderer = FrameRenderer::new(options);
        let mut surface = RecordingSurface::new();
        let stats = renderer
            .render(&FrameInput::new(&atoms, &[]), &flat_view(), &mut surface)
            .unwrap();
        assert_eq!(stats.primitives, 4);

        let fills: Vec<_> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillEllipse { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![[1.0, 1.0, 1.0], Element::N.cpk_color()]);
        // Only the typed atom gets a symbol label.
        let labels: Vec<_> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["N"]);
    }

    #[test]
    fn shaded_frame_at_extreme_zoom() {
        let atoms = vec![Atom::new(Element::C, Vec3::ZERO)];
        let mut options = Options::default();
        options.display.atom_draw_mode = AtomDrawMode::Shaded;
        options.display.label_mode = LabelMode::Symbol;
        options.geometry.perspective = false;
        let renderer = FrameRenderer::new(options);
        let mut surface = RecordingSurface::new();
        let stats = renderer
            .render(
                &FrameInput::new(&atoms, &[]),
                &View::new(Mat4::IDENTITY, 1e9),
                &mut surface,
            )
            .unwrap();
        assert_eq!(stats.primitives, 2);
        assert!(surface
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == "C")));
    }

    #[test]
    fn empty_frame_only_clears() {
        let renderer = FrameRenderer::default();
        let mut surface = RecordingSurface::new();
        let stats = renderer
            .render(&FrameInput::new(&[], &[]), &flat_view(), &mut surface)
            .unwrap();
        assert_eq!(stats, FrameStats::default());
        assert_eq!(surface.commands().len(), 1);
    }

    #[test]
    fn identical_frames_are_identical() {
        let (atoms, bonds) = ethane();
        let lines = [Line3::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0))];
        let mut options = Options::default();
        options.display.show_axes = true;
        options.display.label_mode = LabelMode::Symbol;
        let renderer = FrameRenderer::new(options);
        let mut camera = Camera::new((320, 240), 40.0);
        camera.orientation = glam::Quat::from_rotation_y(0.6);
        let input = FrameInput::new(&atoms, &bonds).with_lines(&lines);

        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        let _ = renderer.render(&input, &camera.view(), &mut first).unwrap();
        let _ = renderer.render(&input, &camera.view(), &mut second).unwrap();
        assert!(!first.commands().is_empty());
        assert_eq!(first.commands(), second.commands());
    }

    #[test]
    fn every_mode_renders_a_full_molecule() {
        let (atoms, bonds) = ethane();
        let view = Camera::new((320, 240), 40.0).view();
        for atom_mode in [
            AtomDrawMode::Quickdraw,
            AtomDrawMode::Shaded,
            AtomDrawMode::Wireframe,
        ] {
            for bond_mode in [
                BondDrawMode::Quickdraw,
                BondDrawMode::Line,
                BondDrawMode::Shaded,
                BondDrawMode::Wireframe,
            ] {
                let mut options = Options::default();
                options.display.atom_draw_mode = atom_mode;
                options.display.bond_draw_mode = bond_mode;
                let mut surface = RecordingSurface::new();
                let stats = FrameRenderer::new(options)
                    .render(&FrameInput::new(&atoms, &bonds), &view, &mut surface)
                    .unwrap();
                assert_eq!(stats.primitives, 11);
                assert!(surface.commands().len() > 11);
            }
        }
    }

    #[test]
    fn surface_failure_propagates() {
        let (atoms, bonds) = ethane();
        let renderer = FrameRenderer::default();
        let mut surface = RecordingSurface::failing_after(3);
        let err = renderer
            .render(
                &FrameInput::new(&atoms, &bonds),
                &Camera::new((320, 240), 40.0).view(),
                &mut surface,
            )
            .unwrap_err();
        assert!(matches!(err, MolpaintError::Surface(_)));
        assert_eq!(surface.commands().len(), 3);
    }

    #[test]
    fn composite_of_nothing_is_a_noop() {
        let options = Options::default();
        let screen = ScreenCache::default();
        let profile = CpkProfile::default();
        let ctx = FrameContext {
            atoms: &[],
            screen: &screen,
            options: &options,
            scaling: Scaling::new(&options.geometry, 10.0),
            table: RenderTable::select(&options.display),
            profile: &profile,
        };
        let mut surface = RecordingSurface::new();
        composite(&[], &ctx, &mut surface).unwrap();
        assert!(surface.commands().is_empty());
    }
}
