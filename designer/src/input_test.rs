use uuid::Uuid;

use super::*;

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift && !m.ctrl && !m.alt && !m.meta);
    assert!(!m.command());
}

#[test]
fn command_is_ctrl_or_meta() {
    assert!(Modifiers { ctrl: true, ..Modifiers::default() }.command());
    assert!(Modifiers { meta: true, ..Modifiers::default() }.command());
    assert!(!Modifiers { shift: true, alt: true, ..Modifiers::default() }.command());
}

// =============================================================
// Key
// =============================================================

#[test]
fn delete_and_backspace_are_delete() {
    assert!(Key("Delete".into()).is_delete());
    assert!(Key("Backspace".into()).is_delete());
    assert!(!Key("d".into()).is_delete());
}

#[test]
fn escape_key() {
    assert!(Key("Escape".into()).is_escape());
    assert!(!Key("Esc".into()).is_escape());
}

#[test]
fn is_char_ignores_case() {
    assert!(Key("r".into()).is_char('r'));
    assert!(Key("R".into()).is_char('r'));
    assert!(Key("Z".into()).is_char('z'));
    assert!(!Key("ArrowRight".into()).is_char('a'));
    assert!(!Key(String::new()).is_char('r'));
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let s = InputState::default();
    assert!(s.is_idle());
    assert_eq!(s.item_id(), None);
}

#[test]
fn dragging_reports_item() {
    let id = Uuid::new_v4();
    let s = InputState::Dragging { id, start_canvas: Point::new(1.0, 2.0), orig_x: 0.5, orig_y: 0.5 };
    assert!(!s.is_idle());
    assert_eq!(s.item_id(), Some(id));
}

#[test]
fn resizing_reports_item() {
    let id = Uuid::new_v4();
    let s = InputState::Resizing {
        id,
        anchor: ResizeAnchor::Sw,
        start_canvas: Point::new(0.0, 0.0),
        orig_x: 1.0,
        orig_y: 1.0,
        orig_w: 2.0,
        orig_h: 1.0,
    };
    assert_eq!(s.item_id(), Some(id));
}

#[test]
fn ui_state_default_has_no_selection() {
    assert!(UiState::default().selected_id.is_none());
}
