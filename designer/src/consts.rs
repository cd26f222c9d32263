//! Shared numeric constants for the designer crate.

// ── Coordinate transform ───────────────────────────────────────

/// Fixed floor-plan scale, in canvas pixels per room meter.
pub const SCALE_PX_PER_M: f64 = 70.0;

/// Smallest canvas the host should hand us, in pixels.
pub const MIN_CANVAS_W: f64 = 400.0;
pub const MIN_CANVAS_H: f64 = 300.0;

// ── Grid ───────────────────────────────────────────────────────

/// Increment committed positions and sizes are rounded to, in meters.
pub const SNAP_M: f64 = 0.25;

/// Minor render-grid spacing, in meters. Visual only.
pub const GRID_M: f64 = 0.5;

/// Major render-grid spacing, in meters. Visual only.
pub const MAJOR_GRID_M: f64 = 1.0;

/// Wall stroke drawn around the room, in meters.
pub const WALL_THICKNESS_M: f64 = 0.12;

// ── Hit-testing ────────────────────────────────────────────────

/// Drawn radius of a resize handle, in pixels.
pub const HANDLE_RADIUS_PX: f64 = 6.0;

/// Extra pointer slop around a handle, in pixels.
pub const HANDLE_SLOP_PX: f64 = 3.0;

// ── Geometry limits ────────────────────────────────────────────

/// Minimum furniture footprint in either dimension, in meters.
pub const MIN_ITEM_M: f64 = 0.3;

/// Fallback footprint when a size field does not parse.
pub const FALLBACK_ITEM_M: f64 = 0.5;

/// Room dimension bounds accepted from the room panel, in meters.
pub const ROOM_MIN_M: f64 = 1.0;
pub const ROOM_MAX_M: f64 = 20.0;

/// Total spread of the random offset applied to newly placed items, in meters.
pub const PLACEMENT_JITTER_M: f64 = 0.5;

// ── History ────────────────────────────────────────────────────

/// Maximum number of undo snapshots kept.
pub const HISTORY_CAPACITY: usize = 50;
