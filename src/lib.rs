// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Painter's-algorithm 2D rendering of 3D molecular structures.
//!
//! Molpaint turns a molecule (atoms, bonds, optional per-atom vectors and
//! free lines) plus a view transform into ordered 2-D draw calls on a
//! host-supplied [`surface::Surface`]. There is no depth buffer: every
//! visible element becomes a primitive with an integer depth key, the
//! primitives are sorted far to near, and each is painted over whatever is
//! already there.
//!
//! # Key entry points
//!
//! - [`compositor::FrameRenderer`] - runs one frame end to end
//! - [`primitive::PrimitiveSet`] - per-frame primitive building and
//!   depth sorting
//! - [`renderer::RenderTable`] - atom/bond draw strategies selected from
//!   the display options
//! - [`options::Options`] - display, color, geometry and camera settings
//!   with TOML presets
//! - [`camera::controller::CameraController`] - rotate/zoom/fit producing the view
//!
//! # Frame pipeline
//!
//! atoms → [`geometry::ScreenCache`] (projected once per frame) →
//! primitives → transform owned geometry → stable sort by depth →
//! strategy selection → clear → composite. The molecule is only read;
//! all per-frame state is dropped when the frame returns.

pub mod camera;
pub mod compositor;
pub mod error;
pub mod geometry;
pub mod model;
pub mod options;
pub mod primitive;
pub mod renderer;
pub mod surface;
pub mod util;
