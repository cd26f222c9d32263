//! Design model: the room, the furniture placed in it, and the saved design
//! that wraps both.
//!
//! All lengths are meters in room space, with the origin at the room's
//! top-left corner. Furniture positions are the top-left corner of the
//! item's unrotated footprint; rotation is applied about the footprint
//! center.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::FurnitureKind;
use crate::store::StoreError;

/// Unique identifier for a furniture item within a design.
pub type ItemId = Uuid;

/// Unique identifier for a saved design.
pub type DesignId = Uuid;

/// Identifier of the account that owns a design.
pub type OwnerId = Uuid;

/// Default room width in meters.
pub const DEFAULT_ROOM_WIDTH: f64 = 5.0;

/// Default room depth in meters.
pub const DEFAULT_ROOM_HEIGHT: f64 = 4.0;

/// Default floor color.
pub const DEFAULT_ROOM_COLOR: &str = "#F5E6D3";

/// Default name for a design that has never been named.
pub const UNTITLED: &str = "Untitled Design";

/// Floor outline of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomShape {
    #[default]
    Rectangle,
    /// Any shape key this build does not model.
    #[serde(other)]
    Other,
}

/// The room being furnished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Width along the x axis in meters.
    pub width: f64,
    /// Depth along the y axis in meters.
    pub height: f64,
    /// Floor color as `#RRGGBB`.
    pub color: String,
    /// Floor outline.
    #[serde(default)]
    pub shape: RoomShape,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            width: DEFAULT_ROOM_WIDTH,
            height: DEFAULT_ROOM_HEIGHT,
            color: DEFAULT_ROOM_COLOR.to_owned(),
            shape: RoomShape::Rectangle,
        }
    }
}

/// A piece of furniture placed in the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    /// Identifier, generated at creation and never reused.
    pub id: ItemId,
    /// Catalog key.
    #[serde(rename = "type")]
    pub kind: FurnitureKind,
    /// Display label.
    pub label: String,
    /// Left edge of the unrotated footprint.
    pub x: f64,
    /// Top edge of the unrotated footprint.
    pub y: f64,
    /// Footprint width.
    pub w: f64,
    /// Footprint depth.
    pub h: f64,
    /// Fill color as `#RRGGBB`.
    pub color: String,
    /// Darkening overlay strength in `[0, 1]`.
    #[serde(default)]
    pub shading: f64,
    /// Clockwise rotation in degrees, always a multiple of 90.
    #[serde(default)]
    pub rotation: f64,
    /// Height used by the 3D preview.
    pub height3d: f64,
}

impl FurnitureItem {
    /// Build a fresh item from the catalog defaults for `kind`, placed at the origin.
    #[must_use]
    pub fn from_kind(kind: FurnitureKind) -> Self {
        let spec = kind.spec();
        Self {
            id: Uuid::new_v4(),
            kind,
            label: spec.label.to_owned(),
            x: 0.0,
            y: 0.0,
            w: spec.w,
            h: spec.h,
            color: spec.color.to_owned(),
            shading: 0.0,
            rotation: 0.0,
            height3d: spec.height3d,
        }
    }

    /// Center of the footprint in room space, as `(x, y)`.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Workflow status of a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignStatus {
    #[default]
    Draft,
    InProgress,
    Finished,
}

impl DesignStatus {
    /// Wire key, e.g. `"in_progress"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
        }
    }

    /// Human-readable label for dashboards.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::InProgress => "In Progress",
            Self::Finished => "Finished",
        }
    }
}

impl fmt::Display for DesignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DesignStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "in_progress" => Ok(Self::InProgress),
            "finished" => Ok(Self::Finished),
            other => Err(StoreError::InvalidStatus(other.to_owned())),
        }
    }
}

/// A saved room layout, owned by exactly one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub id: DesignId,
    pub owner_id: OwnerId,
    pub name: String,
    pub status: DesignStatus,
    pub room: Room,
    pub furniture: Vec<FurnitureItem>,
    #[serde(default)]
    pub notes: String,
    /// Store-assigned touch counter; higher means more recently written.
    #[serde(default)]
    pub revision: u64,
}

/// Payload for creating a design.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDesign {
    pub name: String,
    #[serde(default)]
    pub status: Option<DesignStatus>,
    #[serde(default)]
    pub room: Option<Room>,
    #[serde(default)]
    pub furniture: Vec<FurnitureItem>,
    #[serde(default)]
    pub notes: String,
}

/// Sparse update for a design. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignPatch {
    /// New name; blank names are ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DesignStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<Room>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furniture: Option<Vec<FurnitureItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DesignPatch {
    /// Merge present fields into `design`. Returns true if anything changed.
    pub fn apply_to(&self, design: &mut Design) -> bool {
        let mut changed = false;
        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            design.name = name.to_owned();
            changed = true;
        }
        if let Some(status) = self.status {
            design.status = status;
            changed = true;
        }
        if let Some(ref room) = self.room {
            design.room = room.clone();
            changed = true;
        }
        if let Some(ref furniture) = self.furniture {
            design.furniture = furniture.clone();
            changed = true;
        }
        if let Some(ref notes) = self.notes {
            design.notes = notes.clone();
            changed = true;
        }
        changed
    }
}

/// Per-status design counts for one owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DesignStats {
    pub draft: usize,
    pub in_progress: usize,
    pub finished: usize,
    pub total: usize,
}

impl DesignStats {
    /// Count one design with the given status.
    pub fn record(&mut self, status: DesignStatus) {
        match status {
            DesignStatus::Draft => self.draft += 1,
            DesignStatus::InProgress => self.in_progress += 1,
            DesignStatus::Finished => self.finished += 1,
        }
        self.total += 1;
    }
}
