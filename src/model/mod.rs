//! Per-frame input contract of the domain model provider.
//!
//! Parsing, topology perception and the full molecule model live outside
//! this crate; the types here carry exactly what a frame needs.

mod atom;
mod bond;
mod element;

pub use atom::Atom;
pub use bond::{Bond, Line3};
pub use element::{Element, UnknownElement, DEFAULT_VDW_RADIUS};
