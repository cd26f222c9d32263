//! Grid snapping for committed positions and sizes.
//!
//! The snap increment is independent of the render grid: the grid drawn on
//! the floor is a coarser visual guide, while every committed coordinate
//! lands on a multiple of the snap increment.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

/// Round `value` to the nearest multiple of `increment`.
///
/// Idempotent: `snap(snap(v, i), i) == snap(v, i)`. A non-positive increment
/// disables snapping and returns `value` unchanged.
#[must_use]
pub fn snap(value: f64, increment: f64) -> f64 {
    if increment <= 0.0 || !increment.is_finite() {
        return value;
    }
    (value / increment).round() * increment
}
