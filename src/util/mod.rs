//! Shared helpers: color arithmetic and the charge color ramp.

pub mod charge_color;
pub mod color;
