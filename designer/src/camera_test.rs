#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_distance() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
}

// --- RoomView defaults ---

#[test]
fn default_view_has_zero_origin_and_fixed_scale() {
    let view = RoomView::default();
    assert_eq!(view.origin, Point::new(0.0, 0.0));
    assert_eq!(view.scale, 70.0);
}

// --- centered ---

#[test]
fn centered_places_room_in_middle_of_canvas() {
    // 5m × 4m at 70 px/m = 350 × 280 px inside 800 × 600.
    let view = RoomView::centered(800.0, 600.0, 5.0, 4.0, 70.0);
    assert_eq!(view.origin, Point::new(225.0, 160.0));
}

#[test]
fn centered_rounds_origin_to_whole_pixels() {
    let view = RoomView::centered(801.0, 601.0, 5.0, 4.0, 70.0);
    assert_eq!(view.origin.x.fract(), 0.0);
    assert_eq!(view.origin.y.fract(), 0.0);
}

#[test]
fn centered_allows_negative_origin_for_oversized_room() {
    let view = RoomView::centered(400.0, 300.0, 20.0, 20.0, 70.0);
    assert!(view.origin.x < 0.0);
    assert!(view.origin.y < 0.0);
}

// --- transforms ---

#[test]
fn room_to_canvas_applies_scale_and_origin() {
    let view = RoomView { origin: Point::new(100.0, 50.0), scale: 70.0 };
    let canvas = view.room_to_canvas(Point::new(1.0, 2.0));
    assert!(point_approx_eq(canvas, Point::new(170.0, 190.0)));
}

#[test]
fn canvas_to_room_inverts_room_to_canvas() {
    let view = RoomView { origin: Point::new(100.0, 50.0), scale: 70.0 };
    let room = view.canvas_to_room(Point::new(170.0, 190.0));
    assert!(point_approx_eq(room, Point::new(1.0, 2.0)));
}

#[test]
fn round_trip_room_canvas_room() {
    let view = RoomView::centered(1013.0, 677.0, 7.3, 4.1, 70.0);
    for &(x, y) in &[(0.0, 0.0), (1.25, 3.5), (-2.0, 9.75), (123.456, -78.9), (0.001, 0.002)] {
        let p = Point::new(x, y);
        let back = view.canvas_to_room(view.room_to_canvas(p));
        assert!(point_approx_eq(back, p), "round trip failed for {p:?}: got {back:?}");
    }
}

#[test]
fn round_trip_canvas_room_canvas() {
    let view = RoomView { origin: Point::new(-33.0, 12.0), scale: 55.0 };
    let p = Point::new(417.0, 93.5);
    assert!(point_approx_eq(view.room_to_canvas(view.canvas_to_room(p)), p));
}

#[test]
fn distance_conversions_are_inverse() {
    let view = RoomView::default();
    assert!(approx_eq(view.canvas_dist_to_room(35.0), 0.5));
    assert!(approx_eq(view.room_dist_to_canvas(0.5), 35.0));
}
