//! Camera system composing the model→screen transform.
//!
//! Provides an orthographic orbit camera with rotation, zoom and
//! fit-to-model. Hosts with their own view math can skip this module and
//! hand a [`crate::geometry::View`] to the frame renderer directly.

/// Rotate/zoom/fit controller driven by host input events.
pub mod controller;
/// Core camera struct and matrix composition.
pub mod core;
