#![allow(clippy::float_cmp)]

use designs::FurnitureKind;

use super::*;

fn snap_with(n: usize) -> Snapshot {
    let furniture = (0..n).map(|_| FurnitureItem::from_kind(FurnitureKind::Chair)).collect();
    Snapshot { room: Room::default(), furniture }
}

fn marked(width: f64) -> Snapshot {
    Snapshot { room: Room { width, ..Room::default() }, furniture: Vec::new() }
}

#[test]
fn new_history_is_empty() {
    let h = History::new(50);
    assert!(h.is_empty());
    assert_eq!(h.index(), None);
    assert!(!h.can_undo());
    assert!(h.current().is_none());
}

#[test]
fn zero_capacity_is_raised_to_one() {
    let mut h = History::new(0);
    assert_eq!(h.capacity(), 1);
    h.push(marked(1.0));
    h.push(marked(2.0));
    assert_eq!(h.len(), 1);
    assert_eq!(h.current().unwrap().room.width, 2.0);
}

#[test]
fn n_pushes_put_cursor_at_last() {
    let mut h = History::new(50);
    for n in 1..=50 {
        h.push(marked(f64::from(u32::try_from(n).unwrap())));
        assert_eq!(h.len(), n);
        assert_eq!(h.index(), Some(n - 1));
    }
}

#[test]
fn overflow_evicts_oldest() {
    let mut h = History::new(50);
    for n in 0..60 {
        h.push(marked(f64::from(n)));
    }
    assert_eq!(h.len(), 50);
    assert_eq!(h.index(), Some(49));
    // Walk back to the oldest surviving entry: width 10.
    let mut last = None;
    while let Some(s) = h.undo() {
        last = Some(s);
    }
    assert_eq!(last.unwrap().room.width, 10.0);
}

#[test]
fn undo_restores_previous_entry() {
    let mut h = History::new(50);
    h.push(snap_with(0));
    h.push(snap_with(1));
    let restored = h.undo().unwrap();
    assert!(restored.furniture.is_empty());
    assert_eq!(h.index(), Some(0));
}

#[test]
fn undo_at_boundary_is_noop() {
    let mut h = History::new(50);
    h.push(snap_with(0));
    assert!(h.undo().is_none());
    assert_eq!(h.index(), Some(0));
    assert_eq!(h.len(), 1);
}

#[test]
fn undo_on_empty_is_noop() {
    let mut h = History::new(50);
    assert!(h.undo().is_none());
    assert_eq!(h.index(), None);
}

#[test]
fn push_after_undo_truncates_forward_entries() {
    let mut h = History::new(50);
    h.push(marked(1.0));
    h.push(marked(2.0));
    h.push(marked(3.0));
    h.undo();
    h.undo();
    h.push(marked(4.0));
    assert_eq!(h.len(), 2);
    assert_eq!(h.index(), Some(1));
    assert_eq!(h.current().unwrap().room.width, 4.0);
    assert_eq!(h.undo().unwrap().room.width, 1.0);
}

#[test]
fn restored_snapshot_is_independent_copy() {
    let mut h = History::new(50);
    h.push(snap_with(1));
    h.push(snap_with(2));
    let mut restored = h.undo().unwrap();
    restored.furniture.clear();
    assert_eq!(h.current().unwrap().furniture.len(), 1);
}

#[test]
fn reset_leaves_single_entry() {
    let mut h = History::new(50);
    for n in 0..5 {
        h.push(marked(f64::from(n)));
    }
    h.reset(marked(9.0));
    assert_eq!(h.len(), 1);
    assert_eq!(h.index(), Some(0));
    assert!(!h.can_undo());
    assert_eq!(h.current().unwrap().room.width, 9.0);
}
