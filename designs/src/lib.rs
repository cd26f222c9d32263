//! Shared design model and persistence contract for the room planner.
//!
//! This crate owns the representation of a saved design used by both the
//! editor (`designer`) and whatever host persists designs. The editor only
//! ever talks to storage through the [`store::DesignStore`] trait, so the
//! same core runs against the in-memory store in tests and a remote API in
//! production.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Closed set of furniture kinds and their default geometry |
//! | [`model`] | `Room`, `FurnitureItem`, `Design` and the create/patch payloads |
//! | [`store`] | `DesignStore` trait, `StoreError`, and `MemoryStore` |

pub mod catalog;
pub mod model;
pub mod store;

pub use catalog::{FurnitureKind, KindSpec, Outline};
pub use model::{
    DEFAULT_ROOM_COLOR, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, Design, DesignId, DesignPatch, DesignStats,
    DesignStatus, FurnitureItem, ItemId, NewDesign, OwnerId, Room, RoomShape, UNTITLED,
};
pub use store::{COPY_SUFFIX, DesignStore, MemoryStore, StoreError};
