//! Editor configuration supplied by the host page.
//!
//! Every field has a default from [`crate::consts`], so hosts only send the
//! keys they want to override:
//!
//! ```json
//! { "snap_m": 0.1, "history_capacity": 100 }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    GRID_M, HANDLE_RADIUS_PX, HANDLE_SLOP_PX, HISTORY_CAPACITY, MAJOR_GRID_M, MIN_ITEM_M, PLACEMENT_JITTER_M,
    ROOM_MAX_M, ROOM_MIN_M, SCALE_PX_PER_M, SNAP_M,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse editor config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid editor config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub scale_px_per_m: f64,
    pub snap_m: f64,
    pub grid_m: f64,
    pub major_grid_m: f64,
    pub handle_radius_px: f64,
    pub handle_slop_px: f64,
    pub min_item_m: f64,
    pub history_capacity: usize,
    pub placement_jitter_m: f64,
    pub room_min_m: f64,
    pub room_max_m: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            scale_px_per_m: SCALE_PX_PER_M,
            snap_m: SNAP_M,
            grid_m: GRID_M,
            major_grid_m: MAJOR_GRID_M,
            handle_radius_px: HANDLE_RADIUS_PX,
            handle_slop_px: HANDLE_SLOP_PX,
            min_item_m: MIN_ITEM_M,
            history_capacity: HISTORY_CAPACITY,
            placement_jitter_m: PLACEMENT_JITTER_M,
            room_min_m: ROOM_MIN_M,
            room_max_m: ROOM_MAX_M,
        }
    }
}

impl EditorConfig {
    /// Parse a JSON override object on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value would break the editor
    /// (non-positive scale, snap, grid or capacity; inverted room bounds).
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the invariants the editor relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("scale_px_per_m", self.scale_px_per_m),
            ("snap_m", self.snap_m),
            ("grid_m", self.grid_m),
            ("major_grid_m", self.major_grid_m),
            ("min_item_m", self.min_item_m),
            ("room_min_m", self.room_min_m),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid("history_capacity must be at least 1".into()));
        }
        if self.handle_radius_px < 0.0 || self.handle_slop_px < 0.0 || self.placement_jitter_m < 0.0 {
            return Err(ConfigError::Invalid("handle and jitter sizes must not be negative".into()));
        }
        if self.room_max_m < self.room_min_m {
            return Err(ConfigError::Invalid(format!(
                "room_max_m ({}) is below room_min_m ({})",
                self.room_max_m, self.room_min_m
            )));
        }
        Ok(())
    }

    /// Pointer distance, in pixels, within which a resize handle is hit.
    #[must_use]
    pub fn handle_hit_radius_px(&self) -> f64 {
        self.handle_radius_px + self.handle_slop_px
    }
}
