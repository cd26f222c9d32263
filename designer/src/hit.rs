//! Hit-testing against furniture footprints and resize handles.
//!
//! Footprints are tested in room space by rotating the pointer into the
//! item's local frame. Handles are tested in canvas space so the grab radius
//! stays constant in pixels whatever the scale.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use designs::{FurnitureItem, ItemId};

use crate::camera::{Point, RoomView};
use crate::doc::DocStore;

/// Which part of an item was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeAnchor),
}

/// Corner handle of the selected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAnchor {
    Nw,
    Ne,
    Se,
    Sw,
}

impl ResizeAnchor {
    /// All four handles, clockwise from the top-left.
    pub const ALL: [Self; 4] = [Self::Nw, Self::Ne, Self::Se, Self::Sw];

    /// Whether dragging this handle moves the west (left) edge.
    #[must_use]
    pub fn moves_west(self) -> bool {
        matches!(self, Self::Nw | Self::Sw)
    }

    /// Whether dragging this handle moves the north (top) edge.
    #[must_use]
    pub fn moves_north(self) -> bool {
        matches!(self, Self::Nw | Self::Ne)
    }

    /// Unit offset of the corner from the item center, before rotation.
    fn sign(self) -> (f64, f64) {
        match self {
            Self::Nw => (-1.0, -1.0),
            Self::Ne => (1.0, -1.0),
            Self::Se => (1.0, 1.0),
            Self::Sw => (-1.0, 1.0),
        }
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub item_id: ItemId,
    pub part: HitPart,
}

/// Whether the item's rotated footprint contains `room_pt`.
#[must_use]
pub fn item_contains(item: &FurnitureItem, room_pt: Point) -> bool {
    let (cx, cy) = item.center();
    let (sin, cos) = (-item.rotation.to_radians()).sin_cos();
    let dx = room_pt.x - cx;
    let dy = room_pt.y - cy;
    let local_x = dx * cos - dy * sin;
    let local_y = dx * sin + dy * cos;
    local_x.abs() <= item.w / 2.0 && local_y.abs() <= item.h / 2.0
}

/// Topmost item whose footprint contains `room_pt`.
#[must_use]
pub fn item_at(doc: &DocStore, room_pt: Point) -> Option<ItemId> {
    doc.iter().rev().find(|item| item_contains(item, room_pt)).map(|item| item.id)
}

/// Canvas positions of the item's four corner handles, in [`ResizeAnchor::ALL`] order.
#[must_use]
pub fn handle_positions(item: &FurnitureItem, view: &RoomView) -> [(ResizeAnchor, Point); 4] {
    let (cx, cy) = item.center();
    let (sin, cos) = item.rotation.to_radians().sin_cos();
    let (hw, hh) = (item.w / 2.0, item.h / 2.0);
    ResizeAnchor::ALL.map(|anchor| {
        let (sx, sy) = anchor.sign();
        let (lx, ly) = (sx * hw, sy * hh);
        let room = Point::new(cx + lx * cos - ly * sin, cy + lx * sin + ly * cos);
        (anchor, view.room_to_canvas(room))
    })
}

/// Handle of `item` within `radius_px` of `canvas_pt`, if any.
#[must_use]
pub fn handle_at(item: &FurnitureItem, view: &RoomView, canvas_pt: Point, radius_px: f64) -> Option<ResizeAnchor> {
    handle_positions(item, view)
        .into_iter()
        .find(|(_, pos)| pos.distance(canvas_pt) <= radius_px)
        .map(|(anchor, _)| anchor)
}

/// Test what is under `canvas_pt`, checking the selected item's handles first.
#[must_use]
pub fn hit_test(
    canvas_pt: Point,
    doc: &DocStore,
    view: &RoomView,
    selected_id: Option<ItemId>,
    handle_radius_px: f64,
) -> Option<Hit> {
    if let Some(selected) = selected_id.and_then(|id| doc.get(&id)) {
        if let Some(anchor) = handle_at(selected, view, canvas_pt, handle_radius_px) {
            return Some(Hit { item_id: selected.id, part: HitPart::ResizeHandle(anchor) });
        }
    }
    let room_pt = view.canvas_to_room(canvas_pt);
    item_at(doc, room_pt).map(|item_id| Hit { item_id, part: HitPart::Body })
}
