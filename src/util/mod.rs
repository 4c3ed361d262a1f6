//! Shared utilities: easing curves and color helpers.

pub mod color;
pub mod easing;
