//! Coordinate transform between canvas pixels and room meters.
//!
//! The floor plan is drawn at a fixed scale with the room centered in the
//! canvas. The origin offset is recomputed whenever the canvas or the room
//! changes size; everything else is a pure function of the view.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::SCALE_PX_PER_M;

/// A point in either canvas space (pixels) or room space (meters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Mapping from room space to canvas space.
///
/// `origin` is the canvas position of the room's top-left corner, in pixels.
/// `scale` is pixels per meter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomView {
    pub origin: Point,
    pub scale: f64,
}

impl Default for RoomView {
    fn default() -> Self {
        Self { origin: Point::new(0.0, 0.0), scale: SCALE_PX_PER_M }
    }
}

impl RoomView {
    /// View that centers a `room_w × room_h` room in a `canvas_w × canvas_h`
    /// canvas. The origin is rounded to whole pixels so grid lines stay crisp.
    #[must_use]
    pub fn centered(canvas_w: f64, canvas_h: f64, room_w: f64, room_h: f64, scale: f64) -> Self {
        Self {
            origin: Point::new(
                ((canvas_w - room_w * scale) / 2.0).round(),
                ((canvas_h - room_h * scale) / 2.0).round(),
            ),
            scale,
        }
    }

    /// Convert a room-space point (meters) to canvas pixels.
    #[must_use]
    pub fn room_to_canvas(&self, room: Point) -> Point {
        Point {
            x: self.origin.x + room.x * self.scale,
            y: self.origin.y + room.y * self.scale,
        }
    }

    /// Convert a canvas-space point (pixels) to room meters.
    #[must_use]
    pub fn canvas_to_room(&self, canvas: Point) -> Point {
        Point {
            x: (canvas.x - self.origin.x) / self.scale,
            y: (canvas.y - self.origin.y) / self.scale,
        }
    }

    /// Convert a canvas distance (pixels) to meters.
    #[must_use]
    pub fn canvas_dist_to_room(&self, px: f64) -> f64 {
        px / self.scale
    }

    /// Convert a room distance (meters) to pixels.
    #[must_use]
    pub fn room_dist_to_canvas(&self, m: f64) -> f64 {
        m * self.scale
    }
}
