//! Keeping furniture inside the room.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use designs::{FurnitureItem, Room};

/// Force the item's position into `[0, room - size]` on both axes.
///
/// An item larger than the room on an axis has no valid position there;
/// that axis is left as-is instead of producing an inverted interval.
pub fn clamp_to_room(item: &mut FurnitureItem, room: &Room) {
    item.x = clamp_axis(item.x, item.w, room.width);
    item.y = clamp_axis(item.y, item.h, room.height);
}

/// Whether the item's footprint lies entirely inside the room.
#[must_use]
pub fn fits_in_room(item: &FurnitureItem, room: &Room) -> bool {
    item.x >= 0.0 && item.y >= 0.0 && item.x + item.w <= room.width && item.y + item.h <= room.height
}

fn clamp_axis(pos: f64, size: f64, extent: f64) -> f64 {
    let max = extent - size;
    if max < 0.0 {
        return pos;
    }
    pos.clamp(0.0, max)
}
