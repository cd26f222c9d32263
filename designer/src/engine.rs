use designs::{
    DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, Design, DesignId, DesignPatch, DesignStatus, DesignStore, FurnitureItem,
    FurnitureKind, ItemId, NewDesign, OwnerId, Room, RoomShape, StoreError, UNTITLED,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::bounds::{clamp_to_room, fits_in_room};
use crate::camera::{Point, RoomView};
use crate::config::EditorConfig;
use crate::consts::{FALLBACK_ITEM_M, MIN_CANVAS_H, MIN_CANVAS_W};
use crate::doc::DocStore;
use crate::hit::{self, HitPart, ResizeAnchor};
use crate::history::{History, Snapshot};
use crate::input::{Button, InputState, Key, Modifiers, UiState};
use crate::render;
use crate::snap::snap;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The scene changed; redraw the canvas.
    RenderNeeded,
    /// Set the CSS cursor on the canvas element.
    SetCursor(String),
    /// The selection changed; refresh the properties panel.
    SelectionChanged(Option<ItemId>),
    /// A history entry was recorded; hand the new scene to the 3D preview.
    Committed,
    /// Show a short toast message.
    Notify(String),
    /// The user asked to save (Ctrl/Cmd+S).
    SaveRequested,
}

/// A save the store rejected.
///
/// Carries the store's error and the actions the host should still apply
/// (a "Save failed" toast). Editor state is untouched.
#[derive(Debug, thiserror::Error)]
#[error("save failed: {source}")]
pub struct SaveError {
    #[source]
    pub source: StoreError,
    pub actions: Vec<Action>,
}

/// Room form values as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomForm {
    pub width: String,
    pub height: String,
    pub color: String,
    pub shape: RoomShape,
}

/// Read-only view of the editor handed to renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub room: Room,
    pub furniture: Vec<FurnitureItem>,
    pub selected: Option<ItemId>,
}

/// Design metadata edited alongside the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignMeta {
    /// Store id once the design has been saved at least once.
    pub id: Option<DesignId>,
    pub name: String,
    /// `None` for a design that has never been given a status.
    pub status: Option<DesignStatus>,
    pub notes: String,
}

impl Default for DesignMeta {
    fn default() -> Self {
        Self { id: None, name: UNTITLED.to_owned(), status: None, notes: String::new() }
    }
}

/// Editor state and every handler that doesn't need the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub config: EditorConfig,
    pub room: Room,
    pub doc: DocStore,
    pub ui: UiState,
    pub input: InputState,
    pub history: History,
    pub view: RoomView,
    pub meta: DesignMeta,
    /// Unsaved changes exist since the last load or successful save.
    pub dirty: bool,
    pub viewport_width: f64,
    pub viewport_height: f64,
    cursor: String,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor on an empty default room.
    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        let mut core = Self {
            history: History::new(config.history_capacity),
            view: RoomView { scale: config.scale_px_per_m, ..RoomView::default() },
            config,
            room: Room::default(),
            doc: DocStore::new(),
            ui: UiState::default(),
            input: InputState::Idle,
            meta: DesignMeta::default(),
            dirty: false,
            viewport_width: MIN_CANVAS_W,
            viewport_height: MIN_CANVAS_H,
            cursor: "default".to_owned(),
        };
        core.reset_session();
        core
    }

    // --- Session ---

    /// Hydrate the editor from a fetched design.
    pub fn load_design(&mut self, design: Design) -> Vec<Action> {
        log::debug!("loading design {} ({} items)", design.id, design.furniture.len());
        self.meta = DesignMeta {
            id: Some(design.id),
            name: design.name,
            status: Some(design.status),
            notes: design.notes,
        };
        self.room = design.room;
        self.doc.load(design.furniture);
        self.reset_session();
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    }

    /// Start a fresh, unsaved design on the default room.
    pub fn new_design(&mut self) -> Vec<Action> {
        self.meta = DesignMeta::default();
        self.room = Room::default();
        self.doc.clear();
        self.reset_session();
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    }

    fn reset_session(&mut self) {
        self.ui.selected_id = None;
        self.input = InputState::Idle;
        self.dirty = false;
        self.history.reset(self.snapshot());
        self.recompute_view();
    }

    // --- Viewport ---

    /// Update the canvas size in CSS pixels and re-center the room.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.viewport_width = width.max(MIN_CANVAS_W);
        self.viewport_height = height.max(MIN_CANVAS_H);
        self.recompute_view();
        vec![Action::RenderNeeded]
    }

    fn recompute_view(&mut self) {
        self.view = RoomView::centered(
            self.viewport_width,
            self.viewport_height,
            self.room.width,
            self.room.height,
            self.config.scale_px_per_m,
        );
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, canvas_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let hit = hit::hit_test(
            canvas_pt,
            &self.doc,
            &self.view,
            self.ui.selected_id,
            self.config.handle_hit_radius_px(),
        );
        let Some(hit) = hit else {
            let mut actions = self.deselect();
            actions.push(Action::RenderNeeded);
            return actions;
        };
        let Some(item) = self.doc.get(&hit.item_id) else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        match hit.part {
            HitPart::ResizeHandle(anchor) => {
                self.input = InputState::Resizing {
                    id: item.id,
                    anchor,
                    start_canvas: canvas_pt,
                    orig_x: item.x,
                    orig_y: item.y,
                    orig_w: item.w,
                    orig_h: item.h,
                };
                actions.extend(self.set_cursor(resize_cursor(anchor)));
            }
            HitPart::Body => {
                self.input = InputState::Dragging {
                    id: item.id,
                    start_canvas: canvas_pt,
                    orig_x: item.x,
                    orig_y: item.y,
                };
                actions.extend(self.select(hit.item_id));
                actions.extend(self.set_cursor("move"));
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn on_pointer_move(&mut self, canvas_pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => {
                let cursor = self.hover_cursor(canvas_pt);
                self.set_cursor(cursor).into_iter().collect()
            }
            InputState::Dragging { id, start_canvas, orig_x, orig_y } => {
                let dx = self.view.canvas_dist_to_room(canvas_pt.x - start_canvas.x);
                let dy = self.view.canvas_dist_to_room(canvas_pt.y - start_canvas.y);
                let step = self.config.snap_m;
                let Some(item) = self.doc.get_mut(&id) else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                item.x = snap(orig_x + dx, step);
                item.y = snap(orig_y + dy, step);
                clamp_to_room(item, &self.room);
                vec![Action::RenderNeeded]
            }
            InputState::Resizing { id, anchor, start_canvas, orig_x, orig_y, orig_w, orig_h } => {
                let dx = self.view.canvas_dist_to_room(canvas_pt.x - start_canvas.x);
                let dy = self.view.canvas_dist_to_room(canvas_pt.y - start_canvas.y);
                let (x, w) = self.resize_axis(orig_x, orig_w, dx, anchor.moves_west(), self.room.width);
                let (y, h) = self.resize_axis(orig_y, orig_h, dy, anchor.moves_north(), self.room.height);
                let Some(item) = self.doc.get_mut(&id) else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                (item.x, item.y, item.w, item.h) = (x, y, w, h);
                clamp_to_room(item, &self.room);
                vec![Action::RenderNeeded]
            }
        }
    }

    /// New `(position, size)` on one axis for a resize by `delta` meters.
    ///
    /// Dragging the start edge (west/north) keeps the far edge fixed;
    /// dragging the end edge keeps the position. The size is floored after
    /// snapping and capped so the fixed edge never has to move to fit the room.
    fn resize_axis(&self, pos: f64, size: f64, delta: f64, from_start: bool, extent: f64) -> (f64, f64) {
        let min = self.config.min_item_m;
        let raw = if from_start { size - delta } else { size + delta };
        let mut new_size = snap(raw, self.config.snap_m).max(min);
        let room_left = if from_start { pos + size } else { extent - pos };
        if room_left >= min {
            new_size = new_size.min(room_left);
        }
        if from_start { (pos + (size - new_size), new_size) } else { (pos, new_size) }
    }

    pub fn on_pointer_up(&mut self, canvas_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let mut actions = self.finish_gesture();
        let cursor = self.hover_cursor(canvas_pt);
        actions.extend(self.set_cursor(cursor));
        actions
    }

    /// The pointer left the canvas. An active gesture is committed exactly
    /// as on pointer-up.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let mut actions = self.finish_gesture();
        actions.extend(self.set_cursor("default"));
        actions
    }

    fn finish_gesture(&mut self) -> Vec<Action> {
        let changed = match std::mem::take(&mut self.input) {
            InputState::Idle => return Vec::new(),
            InputState::Dragging { id, orig_x, orig_y, .. } => {
                self.doc.get(&id).is_some_and(|item| differs(item.x, orig_x) || differs(item.y, orig_y))
            }
            InputState::Resizing { id, orig_x, orig_y, orig_w, orig_h, .. } => self.doc.get(&id).is_some_and(|item| {
                differs(item.x, orig_x) || differs(item.y, orig_y) || differs(item.w, orig_w) || differs(item.h, orig_h)
            }),
        };
        if !changed {
            return vec![Action::RenderNeeded];
        }
        self.commit();
        vec![Action::Committed, Action::RenderNeeded]
    }

    fn hover_cursor(&self, canvas_pt: Point) -> &'static str {
        match hit::hit_test(
            canvas_pt,
            &self.doc,
            &self.view,
            self.ui.selected_id,
            self.config.handle_hit_radius_px(),
        ) {
            Some(hit) => match hit.part {
                HitPart::ResizeHandle(anchor) => resize_cursor(anchor),
                HitPart::Body => "move",
            },
            None => "default",
        }
    }

    fn set_cursor(&mut self, cursor: &str) -> Option<Action> {
        if self.cursor == cursor {
            return None;
        }
        cursor.clone_into(&mut self.cursor);
        Some(Action::SetCursor(self.cursor.clone()))
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if modifiers.command() {
            if key.is_char('z') {
                return self.undo();
            }
            if key.is_char('s') {
                return vec![Action::SaveRequested];
            }
            return Vec::new();
        }
        if key.is_delete() {
            return self.delete_selected();
        }
        if key.is_escape() {
            let mut actions = self.deselect();
            actions.push(Action::RenderNeeded);
            return actions;
        }
        if key.is_char('r') {
            return self.rotate_selected();
        }
        Vec::new()
    }

    // --- Toolbar ---

    /// Place a new item of `kind` near the room center and select it.
    pub fn add_furniture(&mut self, kind: FurnitureKind) -> Vec<Action> {
        let mut item = FurnitureItem::from_kind(kind);
        let (jx, jy) = placement_jitter(&item.id, self.config.placement_jitter_m);
        let free_w = self.room.width - item.w;
        let free_h = self.room.height - item.h;
        item.x = snap((free_w / 2.0 + jx).min(free_w).max(0.0), self.config.snap_m);
        item.y = snap((free_h / 2.0 + jy).min(free_h).max(0.0), self.config.snap_m);
        clamp_to_room(&mut item, &self.room);

        let id = item.id;
        let label = item.label.clone();
        log::debug!("adding {kind:?} at ({}, {})", item.x, item.y);
        self.doc.insert(item);
        let mut actions = self.select(id);
        self.commit();
        actions.extend([Action::Committed, Action::Notify(format!("{label} added")), Action::RenderNeeded]);
        actions
    }

    pub fn delete_selected(&mut self) -> Vec<Action> {
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        let Some(item) = self.doc.remove(&id) else {
            return self.deselect();
        };
        if self.input.item_id() == Some(id) {
            self.input = InputState::Idle;
        }
        let mut actions = self.deselect();
        self.commit();
        actions.extend([Action::Committed, Action::Notify(format!("{} removed", item.label)), Action::RenderNeeded]);
        actions
    }

    /// Turn the selected item a quarter turn clockwise.
    ///
    /// Width and depth swap on every odd quarter turn, so the stored
    /// footprint tracks the axis-aligned extent. The result is re-clamped.
    pub fn rotate_selected(&mut self) -> Vec<Action> {
        let Some(item) = self.ui.selected_id.and_then(|id| self.doc.get_mut(&id)) else {
            return Vec::new();
        };
        item.rotation = (item.rotation + 90.0) % 360.0;
        if differs(item.rotation % 180.0, 0.0) {
            std::mem::swap(&mut item.w, &mut item.h);
        }
        clamp_to_room(item, &self.room);
        self.commit();
        vec![Action::Committed, Action::RenderNeeded]
    }

    /// Draw the selected item above everything else.
    pub fn bring_to_front(&mut self) -> Vec<Action> {
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        if self.doc.as_slice().last().is_some_and(|top| top.id == id) {
            return Vec::new();
        }
        if !self.doc.bring_to_front(&id) {
            return Vec::new();
        }
        self.dirty = true;
        vec![Action::RenderNeeded]
    }

    /// Remove all furniture. Does nothing on an empty room.
    pub fn clear_all(&mut self) -> Vec<Action> {
        if self.doc.is_empty() {
            return Vec::new();
        }
        self.doc.clear();
        self.input = InputState::Idle;
        let mut actions = self.deselect();
        self.commit();
        actions.extend([Action::Committed, Action::Notify("Canvas cleared".into()), Action::RenderNeeded]);
        actions
    }

    // --- Selection ---

    pub fn select(&mut self, id: ItemId) -> Vec<Action> {
        if self.ui.selected_id == Some(id) || self.doc.get(&id).is_none() {
            return Vec::new();
        }
        self.ui.selected_id = Some(id);
        vec![Action::SelectionChanged(Some(id))]
    }

    pub fn deselect(&mut self) -> Vec<Action> {
        if self.ui.selected_id.take().is_none() {
            return Vec::new();
        }
        vec![Action::SelectionChanged(None)]
    }

    // --- Properties panel ---

    pub fn set_selected_color(&mut self, color: &str) -> Vec<Action> {
        self.edit_selected(|item, _, _| color.clone_into(&mut item.color))
    }

    /// Set the shading overlay strength, clamped to `[0, 1]`.
    pub fn set_selected_shading(&mut self, shading: f64) -> Vec<Action> {
        let shading = if shading.is_finite() { shading.clamp(0.0, 1.0) } else { 0.0 };
        self.edit_selected(|item, _, _| item.shading = shading)
    }

    /// Set the selected item's footprint from raw form input.
    pub fn set_selected_size(&mut self, raw_w: &str, raw_h: &str) -> Vec<Action> {
        let w = parse_dimension(raw_w, FALLBACK_ITEM_M);
        let h = parse_dimension(raw_h, FALLBACK_ITEM_M);
        self.edit_selected(|item, room, cfg| {
            item.w = w.max(cfg.min_item_m);
            item.h = h.max(cfg.min_item_m);
            clamp_to_room(item, room);
        })
    }

    fn edit_selected(&mut self, edit: impl FnOnce(&mut FurnitureItem, &Room, &EditorConfig)) -> Vec<Action> {
        let Some(item) = self.ui.selected_id.and_then(|id| self.doc.get_mut(&id)) else {
            return Vec::new();
        };
        edit(item, &self.room, &self.config);
        self.dirty = true;
        vec![Action::RenderNeeded]
    }

    // --- Room & metadata ---

    /// Apply the room form. Invalid dimensions fall back to the defaults and
    /// everything is clamped to the configured range; furniture is re-clamped
    /// into the new room.
    pub fn update_room(&mut self, form: &RoomForm) -> Vec<Action> {
        let (min, max) = (self.config.room_min_m, self.config.room_max_m);
        let room = Room {
            width: parse_dimension(&form.width, DEFAULT_ROOM_WIDTH).max(min).min(max),
            height: parse_dimension(&form.height, DEFAULT_ROOM_HEIGHT).max(min).min(max),
            color: form.color.clone(),
            shape: form.shape,
        };
        if room == self.room {
            return Vec::new();
        }
        self.room = room;
        for item in self.doc.iter_mut() {
            clamp_to_room(item, &self.room);
        }
        let overflowing = self.doc.iter().filter(|item| !fits_in_room(item, &self.room)).count();
        if overflowing > 0 {
            log::warn!("{overflowing} item(s) larger than the {}x{} m room", self.room.width, self.room.height);
        }
        self.recompute_view();
        self.commit();
        vec![Action::Committed, Action::RenderNeeded]
    }

    pub fn set_name(&mut self, name: &str) {
        name.clone_into(&mut self.meta.name);
        self.dirty = true;
    }

    pub fn set_status(&mut self, status: DesignStatus) {
        self.meta.status = Some(status);
        self.dirty = true;
    }

    pub fn set_notes(&mut self, notes: &str) {
        notes.clone_into(&mut self.meta.notes);
        self.dirty = true;
    }

    // --- History ---

    fn snapshot(&self) -> Snapshot {
        Snapshot { room: self.room.clone(), furniture: self.doc.as_slice().to_vec() }
    }

    fn commit(&mut self) {
        self.history.push(self.snapshot());
        self.dirty = true;
        log::debug!(
            "history entry {:?} of {} ({} items)",
            self.history.index(),
            self.history.len(),
            self.doc.len()
        );
    }

    /// Restore the previous committed state.
    pub fn undo(&mut self) -> Vec<Action> {
        let Some(snapshot) = self.history.undo() else {
            return vec![Action::Notify("Nothing to undo".into())];
        };
        self.room = snapshot.room;
        self.doc.load(snapshot.furniture);
        self.input = InputState::Idle;
        self.dirty = true;
        self.recompute_view();
        let mut actions = self.deselect();
        actions.extend([Action::Committed, Action::Notify("Undone".into()), Action::RenderNeeded]);
        actions
    }

    // --- Persistence ---

    /// Write the design to `store`: create it on first save, update it after.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] wrapping the store's error together with a
    /// "Save failed" notification. Editor state, including the dirty flag,
    /// is left as it was so the save can be retried.
    pub fn save(&mut self, store: &mut impl DesignStore, owner: OwnerId) -> Result<Vec<Action>, SaveError> {
        let status = self.meta.status.unwrap_or(DesignStatus::InProgress);
        let result = match self.meta.id {
            Some(id) => store.update(
                owner,
                id,
                DesignPatch {
                    name: Some(self.meta.name.clone()),
                    status: Some(status),
                    room: Some(self.room.clone()),
                    furniture: Some(self.doc.as_slice().to_vec()),
                    notes: Some(self.meta.notes.clone()),
                },
            ),
            None => store.create(
                owner,
                NewDesign {
                    name: self.meta.name.clone(),
                    status: Some(status),
                    room: Some(self.room.clone()),
                    furniture: self.doc.as_slice().to_vec(),
                    notes: self.meta.notes.clone(),
                },
            ),
        };
        let saved = match result {
            Ok(saved) => saved,
            Err(source) => {
                log::warn!("save failed: {source}");
                let actions = vec![Action::Notify(format!("Save failed: {source}"))];
                return Err(SaveError { source, actions });
            }
        };
        log::info!("saved design {} ({} items)", saved.id, saved.furniture.len());
        self.meta.id = Some(saved.id);
        self.meta.name = saved.name;
        self.meta.status = Some(saved.status);
        self.dirty = false;
        Ok(vec![Action::Notify("Design saved".into())])
    }

    // --- Queries ---

    /// The currently selected item, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ItemId> {
        self.ui.selected_id
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&FurnitureItem> {
        self.doc.get(id)
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Owned copy of the room, furniture and selection for the renderers.
    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene { room: self.room.clone(), furniture: self.doc.as_slice().to_vec(), selected: self.ui.selected_id }
    }
}

fn differs(a: f64, b: f64) -> bool {
    (a - b).abs() > 1e-9
}

fn resize_cursor(anchor: ResizeAnchor) -> &'static str {
    match anchor {
        ResizeAnchor::Nw | ResizeAnchor::Se => "nwse-resize",
        ResizeAnchor::Ne | ResizeAnchor::Sw => "nesw-resize",
    }
}

/// Parse a form dimension, substituting `default` for anything non-numeric
/// or non-positive.
fn parse_dimension(raw: &str, default: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => default,
    }
}

/// Offset in `[-range/2, range/2]` on each axis, taken from the item id so
/// placement needs no separate random source.
fn placement_jitter(id: &ItemId, range: f64) -> (f64, f64) {
    let bytes = id.as_bytes();
    let unit = |b: u8| f64::from(b) / 255.0 - 0.5;
    (unit(bytes[0]) * range, unit(bytes[1]) * range)
}

/// The full editor engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f64,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the config is invalid or the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: EditorConfig) -> Result<Self, JsValue> {
        config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, dpr: 1.0, core: EngineCore::with_config(config) })
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio, resizing the
    /// backing store to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let actions = self.core.set_viewport(width_css, height_css);
        self.canvas.set_width((self.core.viewport_width * self.dpr).round() as u32);
        self.canvas.set_height((self.core.viewport_height * self.dpr).round() as u32);
        actions
    }

    // --- Delegated input ---

    pub fn on_pointer_down(&mut self, canvas_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(canvas_pt, button)
    }

    pub fn on_pointer_move(&mut self, canvas_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(canvas_pt)
    }

    pub fn on_pointer_up(&mut self, canvas_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(canvas_pt, button)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, modifiers)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.core, self.dpr)
    }
}
