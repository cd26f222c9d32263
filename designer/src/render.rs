//! Rendering: draws the floor plan to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads the engine's room, furniture and selection and produces pixels; it
//! never mutates editor state. The whole scene is redrawn on every call.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::{FRAC_PI_2, PI};

use designs::{FurnitureItem, FurnitureKind, Outline};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Point, RoomView};
use crate::color::{css_rgb, darken, lighten};
use crate::consts::WALL_THICKNESS_M;
use crate::engine::EngineCore;
use crate::hit;

const BACKDROP: &str = "#3D3028";
const BACKDROP_CHECK: &str = "#352820";
const CHECK_PX: f64 = 24.0;
const WALL_COLOR: &str = "#5C4A3A";
const ACCENT: &str = "#C9975A";
const SHADING_ALPHA: f64 = 0.65;

/// Draw the full scene.
///
/// `dpr` is the device pixel ratio; all other coordinates are CSS pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore, dpr: f64) -> Result<(), JsValue> {
    let (cw, ch) = (core.viewport_width, core.viewport_height);
    let view = &core.view;

    // Layer 1: backdrop.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, cw, ch);
    ctx.set_fill_style_str(BACKDROP);
    ctx.fill_rect(0.0, 0.0, cw, ch);
    draw_checkerboard(ctx, cw, ch);

    // Layer 2: floor, grid and walls.
    let room_px = (view.room_dist_to_canvas(core.room.width), view.room_dist_to_canvas(core.room.height));
    draw_floor(ctx, view.origin, room_px, &core.room.color);
    draw_grid(ctx, view, room_px, core.config.grid_m, core.config.major_grid_m);
    ctx.set_stroke_style_str(WALL_COLOR);
    ctx.set_line_width(view.room_dist_to_canvas(WALL_THICKNESS_M));
    ctx.stroke_rect(view.origin.x, view.origin.y, room_px.0, room_px.1);

    // Layer 3: furniture bottom-first, selected item last.
    let selected = core.ui.selected_id;
    for item in core.doc.iter().filter(|item| Some(item.id) != selected) {
        draw_item(ctx, view, item, false)?;
    }
    if let Some(item) = selected.and_then(|id| core.doc.get(&id)) {
        draw_item(ctx, view, item, true)?;
        draw_handles(ctx, view, item, core.config.handle_radius_px)?;
    }

    // Layer 4: dimension labels.
    draw_dimensions(ctx, view, room_px, core.room.width, core.room.height)?;
    Ok(())
}

// =============================================================
// Room
// =============================================================

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn draw_checkerboard(ctx: &CanvasRenderingContext2d, cw: f64, ch: f64) {
    ctx.set_fill_style_str(BACKDROP_CHECK);
    let cols = (cw / CHECK_PX).ceil() as i64;
    let rows = (ch / CHECK_PX).ceil() as i64;
    for row in 0..rows {
        for col in 0..cols {
            if (row + col) % 2 == 0 {
                ctx.fill_rect(col as f64 * CHECK_PX, row as f64 * CHECK_PX, CHECK_PX, CHECK_PX);
            }
        }
    }
}

fn draw_floor(ctx: &CanvasRenderingContext2d, origin: Point, (rw, rh): (f64, f64), color: &str) {
    ctx.save();
    ctx.set_shadow_color("rgba(0,0,0,0.5)");
    ctx.set_shadow_blur(24.0);
    ctx.set_fill_style_str(color);
    ctx.fill_rect(origin.x, origin.y, rw, rh);
    ctx.restore();
}

fn draw_grid(ctx: &CanvasRenderingContext2d, view: &RoomView, room_px: (f64, f64), minor_m: f64, major_m: f64) {
    ctx.save();
    ctx.begin_path();
    ctx.rect(view.origin.x, view.origin.y, room_px.0, room_px.1);
    ctx.clip();
    grid_lines(ctx, view, room_px, view.room_dist_to_canvas(minor_m), "rgba(0,0,0,0.12)", 0.5);
    grid_lines(ctx, view, room_px, view.room_dist_to_canvas(major_m), "rgba(0,0,0,0.18)", 1.0);
    ctx.restore();
}

fn grid_lines(
    ctx: &CanvasRenderingContext2d,
    view: &RoomView,
    (rw, rh): (f64, f64),
    step_px: f64,
    color: &str,
    width: f64,
) {
    if step_px <= 0.0 {
        return;
    }
    let Point { x: rx, y: ry } = view.origin;
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(width);
    ctx.begin_path();
    let mut gx = rx;
    while gx <= rx + rw {
        ctx.move_to(gx, ry);
        ctx.line_to(gx, ry + rh);
        gx += step_px;
    }
    let mut gy = ry;
    while gy <= ry + rh {
        ctx.move_to(rx, gy);
        ctx.line_to(rx + rw, gy);
        gy += step_px;
    }
    ctx.stroke();
}

fn draw_dimensions(
    ctx: &CanvasRenderingContext2d,
    view: &RoomView,
    (rw, rh): (f64, f64),
    width_m: f64,
    height_m: f64,
) -> Result<(), JsValue> {
    let Point { x: rx, y: ry } = view.origin;
    ctx.set_font("600 11px sans-serif");
    ctx.set_fill_style_str("rgba(255,255,255,0.7)");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&format!("{width_m:.1} m"), rx + rw / 2.0, ry + rh + 18.0)?;

    ctx.save();
    ctx.translate(rx + rw + 18.0, ry + rh / 2.0)?;
    ctx.rotate(FRAC_PI_2)?;
    ctx.fill_text(&format!("{height_m:.1} m"), 0.0, 0.0)?;
    ctx.restore();

    // One-meter scale bar in the bottom-left corner of the floor.
    let (bx, by) = (rx + 12.0, ry + rh - 14.0);
    ctx.set_fill_style_str("rgba(0,0,0,0.5)");
    ctx.fill_rect(bx, by, view.room_dist_to_canvas(1.0), 4.0);
    ctx.set_fill_style_str("rgba(255,255,255,0.5)");
    ctx.set_font("9px sans-serif");
    ctx.set_text_align("left");
    ctx.set_text_baseline("bottom");
    ctx.fill_text("1 m", bx, by - 2.0)
}

// =============================================================
// Furniture
// =============================================================

fn draw_item(ctx: &CanvasRenderingContext2d, view: &RoomView, item: &FurnitureItem, selected: bool) -> Result<(), JsValue> {
    let (cx, cy) = item.center();
    let center = view.room_to_canvas(Point::new(cx, cy));
    let hw = view.room_dist_to_canvas(item.w) / 2.0;
    let hh = view.room_dist_to_canvas(item.h) / 2.0;

    ctx.save();
    ctx.translate(center.x, center.y)?;
    ctx.rotate(item.rotation.to_radians())?;

    if selected {
        ctx.set_shadow_color(ACCENT);
        ctx.set_shadow_blur(18.0);
    }
    let outline = item.kind.outline();
    ctx.set_fill_style_str(&css_rgb(&item.color));
    trace_outline(ctx, outline, hw, hh)?;
    ctx.fill();
    ctx.set_shadow_blur(0.0);
    ctx.set_stroke_style_str(&darken(&item.color, 0.3));
    ctx.set_line_width(1.5);
    ctx.stroke();
    draw_accent(ctx, item, hw, hh);

    if item.shading > 0.0 {
        ctx.set_fill_style_str(&format!("rgba(0,0,0,{})", item.shading * SHADING_ALPHA));
        trace_outline(ctx, outline, hw, hh)?;
        ctx.fill();
    }

    if selected {
        ctx.set_stroke_style_str(ACCENT);
        ctx.set_line_width(2.5);
        trace_rounded_rect(ctx, -hw, -hh, hw * 2.0, hh * 2.0, 5.0);
        ctx.stroke();
    }

    draw_label(ctx, &item.label, hw, hh)?;
    ctx.restore();
    Ok(())
}

/// Start a new path for the item outline, centered on the origin.
fn trace_outline(ctx: &CanvasRenderingContext2d, outline: Outline, hw: f64, hh: f64) -> Result<(), JsValue> {
    match outline {
        Outline::RoundedRect(r) => {
            trace_rounded_rect(ctx, -hw, -hh, hw * 2.0, hh * 2.0, r);
            Ok(())
        }
        Outline::Ellipse => {
            ctx.begin_path();
            ctx.ellipse(0.0, 0.0, hw, hh, 0.0, 0.0, 2.0 * PI)
        }
        Outline::Circle => {
            ctx.begin_path();
            ctx.arc(0.0, 0.0, hw.min(hh), 0.0, 2.0 * PI)
        }
    }
}

fn trace_rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let r = r.min(w / 2.0).min(h / 2.0).max(0.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.line_to(x + w - r, y);
    ctx.quadratic_curve_to(x + w, y, x + w, y + r);
    ctx.line_to(x + w, y + h - r);
    ctx.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
    ctx.line_to(x + r, y + h);
    ctx.quadratic_curve_to(x, y + h, x, y + h - r);
    ctx.line_to(x, y + r);
    ctx.quadratic_curve_to(x, y, x + r, y);
    ctx.close_path();
}

/// Kind-specific detail drawn over the base outline.
fn draw_accent(ctx: &CanvasRenderingContext2d, item: &FurnitureItem, hw: f64, hh: f64) {
    match item.kind {
        FurnitureKind::Sofa | FurnitureKind::Sofa1 | FurnitureKind::SofaKoltuk | FurnitureKind::Armchair => {
            // Backrest along the top edge.
            ctx.set_fill_style_str(&darken(&item.color, 0.15));
            trace_rounded_rect(ctx, -hw, -hh, hw * 2.0, hh * 0.35, 4.0);
            ctx.fill();
        }
        FurnitureKind::Bed
        | FurnitureKind::BedPlatform
        | FurnitureKind::BedUpholstered
        | FurnitureKind::BedCanopy
        | FurnitureKind::BedBunk
        | FurnitureKind::BedDaybed => {
            // Pillows at the head of the bed.
            ctx.set_fill_style_str(&lighten(&item.color, 0.7));
            let pw = hw * 0.8;
            trace_rounded_rect(ctx, -hw + hw * 0.1, -hh + 4.0, pw, hh * 0.3, 3.0);
            ctx.fill();
            trace_rounded_rect(ctx, hw * 0.1, -hh + 4.0, pw, hh * 0.3, 3.0);
            ctx.fill();
        }
        FurnitureKind::Wardrobe | FurnitureKind::Wardrobe4Door | FurnitureKind::Refrigerator => {
            ctx.set_stroke_style_str(&darken(&item.color, 0.4));
            ctx.set_line_width(1.0);
            ctx.begin_path();
            ctx.move_to(0.0, -hh);
            ctx.line_to(0.0, hh);
            ctx.stroke();
        }
        _ => {}
    }
}

fn draw_label(ctx: &CanvasRenderingContext2d, label: &str, hw: f64, hh: f64) -> Result<(), JsValue> {
    if hw <= 20.0 || hh <= 16.0 {
        return Ok(());
    }
    let font_size = (hw / 2.8).clamp(7.0, 11.0);
    ctx.set_font(&format!("600 {font_size:.0}px sans-serif"));
    ctx.set_fill_style_str("rgba(255,255,255,0.95)");
    ctx.set_text_align("center");
    ctx.set_text_baseline("bottom");
    ctx.set_shadow_color("rgba(0,0,0,0.7)");
    ctx.set_shadow_blur(3.0);
    ctx.fill_text(label, 0.0, hh - 3.0)?;
    ctx.set_shadow_blur(0.0);
    Ok(())
}

// =============================================================
// Selection UI
// =============================================================

/// Corner handles, drawn in canvas space (not rotated with the item).
fn draw_handles(ctx: &CanvasRenderingContext2d, view: &RoomView, item: &FurnitureItem, radius: f64) -> Result<(), JsValue> {
    ctx.set_fill_style_str("#FFFFFF");
    ctx.set_stroke_style_str(ACCENT);
    ctx.set_line_width(2.0);
    for (_, pos) in hit::handle_positions(item, view) {
        ctx.begin_path();
        ctx.arc(pos.x, pos.y, radius, 0.0, 2.0 * PI)?;
        ctx.fill();
        ctx.stroke();
    }
    Ok(())
}
