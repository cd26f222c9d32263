//! 2D floor-plan editor core for RoomCraft.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! editing session for one design: translating pointer and keyboard events
//! into furniture mutations, keeping every item inside the room and on the
//! snap grid, recording undo history, and drawing the floor plan. The host
//! page wires DOM events to the engine, reacts to the returned
//! [`engine::Action`]s, and supplies the [`designs::DesignStore`] used on save.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Ordered in-memory furniture list |
//! | [`camera`] | Room/canvas coordinate transform |
//! | [`snap`] | Grid snapping |
//! | [`bounds`] | Clamping items into the room |
//! | [`hit`] | Hit-testing items and resize handles |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`history`] | Linear undo stack of snapshots |
//! | [`render`] | Scene rendering to a 2D canvas context |
//! | [`color`] | Hex color parsing and shading |
//! | [`config`] | Host-supplied editor configuration |
//! | [`consts`] | Default scale, grid and size constants |

pub mod bounds;
pub mod camera;
pub mod color;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod history;
pub mod input;
pub mod render;
pub mod snap;

/// Route `log` output to the browser console. Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}
