//! Slot layouts for the repeated fuel-unit group.
//!
//! The production assembly has seven fuel units: one in the middle and six
//! on a ring around it. Any other count falls back to a centered
//! rectangular grid so odd configurations still get a usable arrangement.
//! All layouts lie in the XZ plane (y = 0) relative to the group center.

use std::f32::consts::TAU;

use glam::Vec3;

/// Number of slots on the hexagonal ring around the central slot.
const RING_SLOTS: usize = 6;

/// Slot offsets for `count` units spaced `spacing` apart, with the ring
/// rotated by `rotation_degrees` about +Y.
///
/// Index 0 is always the central slot for ring layouts. For the grid
/// fallback, slots are row-major with `ceil(sqrt(count))` columns and the
/// rotation is not applied.
#[must_use]
pub fn generate(count: usize, spacing: f32, rotation_degrees: f32) -> Vec<Vec3> {
    match count {
        0 => Vec::new(),
        1 => vec![Vec3::ZERO],
        c if c == RING_SLOTS + 1 => ring(spacing, rotation_degrees),
        _ => grid(count, spacing),
    }
}

/// Center slot plus six ring slots, the first at `rotation_degrees`.
fn ring(spacing: f32, rotation_degrees: f32) -> Vec<Vec3> {
    let rho = rotation_degrees.to_radians();
    let mut slots = Vec::with_capacity(RING_SLOTS + 1);
    slots.push(Vec3::ZERO);
    slots.extend((0..RING_SLOTS).map(|k| {
        let theta = TAU * k as f32 / RING_SLOTS as f32 + rho;
        Vec3::new(spacing * theta.cos(), 0.0, spacing * theta.sin())
    }));
    slots
}

/// Row-major grid centered on the origin.
fn grid(count: usize, spacing: f32) -> Vec<Vec3> {
    let cols = (count as f32).sqrt().ceil().max(1.0) as usize;
    let rows = count.div_ceil(cols);
    let half_w = (cols - 1) as f32 / 2.0;
    let half_h = (rows - 1) as f32 / 2.0;

    (0..count)
        .map(|i| {
            let col = (i % cols) as f32;
            let row = (i / cols) as f32;
            Vec3::new((col - half_w) * spacing, 0.0, (row - half_h) * spacing)
        })
        .collect()
}
