//! Camera system for viewing the assembly.
//!
//! Provides an orbital camera with rotation, panning, zoom, and a
//! configurable home pose.

/// Orbital camera controller managing rotation, pan, zoom, and home pose.
pub mod controller;
/// Core camera struct and projection matrices.
pub mod core;

pub use controller::CameraController;
pub use self::core::Camera;
