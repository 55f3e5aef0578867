//! Render a built-in demo molecule to an SVG file.
//!
//! Usage: `molpaint [OUTPUT.svg] [PRESET.toml]`

use std::path::{Path, PathBuf};

use glam::{Vec2, Vec3};
use molpaint::camera::controller::CameraController;
use molpaint::compositor::FrameRenderer;
use molpaint::error::MolpaintError;
use molpaint::model::{Atom, Bond, Element, Line3};
use molpaint::options::Options;
use molpaint::primitive::FrameInput;
use molpaint::surface::SvgSurface;

const VIEWPORT: (u32, u32) = (640, 480);

/// Ethanol with partial charges, a picked oxygen and a dipole vector.
fn demo_molecule() -> (Vec<Atom>, Vec<Bond>) {
    let atoms = vec![
        Atom::new(Element::C, Vec3::new(-1.23, -0.22, 0.0))
            .with_property("charge", "-0.18"),
        Atom::new(Element::C, Vec3::new(0.0, 0.65, 0.0))
            .with_property("charge", "0.145"),
        Atom::new(Element::O, Vec3::new(1.17, -0.15, 0.0))
            .with_property("charge", "-0.683")
            .with_picked(true)
            .with_vector(Vec3::new(0.4, 1.1, 0.0)),
        Atom::new(Element::H, Vec3::new(-2.12, 0.41, 0.0))
            .with_property("charge", "0.06"),
        Atom::new(Element::H, Vec3::new(-1.24, -0.86, 0.88))
            .with_property("charge", "0.06"),
        Atom::new(Element::H, Vec3::new(-1.24, -0.86, -0.88))
            .with_property("charge", "0.06"),
        Atom::new(Element::H, Vec3::new(0.0, 1.3, 0.88))
            .with_property("charge", "0.0"),
        Atom::new(Element::H, Vec3::new(0.0, 1.3, -0.88))
            .with_property("charge", "0.0"),
        Atom::new(Element::H, Vec3::new(1.94, 0.42, 0.0))
            .with_property("charge", "0.418")
            .with_vector(Vec3::new(0.2, 0.3, 0.0)),
    ];
    let bonds = [(0, 1), (1, 2), (0, 3), (0, 4), (0, 5), (1, 6), (1, 7), (2, 8)]
        .into_iter()
        .map(|(a, b)| Bond::new(a, b))
        .collect();
    (atoms, bonds)
}

fn run(output: &Path, preset: Option<&Path>) -> Result<(), MolpaintError> {
    let options = match preset {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    let (atoms, bonds) = demo_molecule();
    let lines = [Line3::new(
        Vec3::new(-1.23, -0.22, 0.0),
        Vec3::new(1.17, -0.15, 0.0),
    )];

    let mut controller = CameraController::new(VIEWPORT, &options.camera);
    controller.fit_to_atoms(&atoms);
    controller.rotate(Vec2::new(20.0, 35.0));

    let renderer = FrameRenderer::new(options);
    let mut surface = SvgSurface::new(VIEWPORT.0, VIEWPORT.1);
    let stats = renderer.render(
        &FrameInput::new(&atoms, &bonds).with_lines(&lines),
        &controller.camera.view(),
        &mut surface,
    )?;
    std::fs::write(output, surface.finish())?;
    log::info!(
        "wrote {} ({} primitives, {} skipped)",
        output.display(),
        stats.primitives,
        stats.skipped
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output = args
        .next()
        .map_or_else(|| PathBuf::from("molpaint.svg"), PathBuf::from);
    let preset = args.next().map(PathBuf::from);

    if let Err(e) = run(&output, preset.as_deref()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
