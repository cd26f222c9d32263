#![allow(clippy::float_cmp)]

use designs::FurnitureKind;
use uuid::Uuid;

use super::*;

fn item(kind: FurnitureKind) -> FurnitureItem {
    FurnitureItem::from_kind(kind)
}

fn ids(doc: &DocStore) -> Vec<ItemId> {
    doc.iter().map(|i| i.id).collect()
}

#[test]
fn new_store_is_empty() {
    let doc = DocStore::new();
    assert!(doc.is_empty());
    assert_eq!(doc.len(), 0);
}

#[test]
fn insert_appends_in_order() {
    let mut doc = DocStore::new();
    let a = item(FurnitureKind::Sofa);
    let b = item(FurnitureKind::Chair);
    let (ida, idb) = (a.id, b.id);
    doc.insert(a);
    doc.insert(b);
    assert_eq!(ids(&doc), vec![ida, idb]);
}

#[test]
fn insert_same_id_replaces_in_place() {
    let mut doc = DocStore::new();
    let a = item(FurnitureKind::Sofa);
    let b = item(FurnitureKind::Chair);
    let ida = a.id;
    doc.insert(a.clone());
    doc.insert(b);
    doc.insert(FurnitureItem { x: 2.0, ..a });
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.iter().next().map(|i| i.id), Some(ida));
    assert_eq!(doc.get(&ida).unwrap().x, 2.0);
}

#[test]
fn remove_returns_item() {
    let mut doc = DocStore::new();
    let a = item(FurnitureKind::Desk);
    let id = a.id;
    doc.insert(a);
    let removed = doc.remove(&id).unwrap();
    assert_eq!(removed.kind, FurnitureKind::Desk);
    assert!(doc.is_empty());
}

#[test]
fn remove_missing_returns_none() {
    let mut doc = DocStore::new();
    doc.insert(item(FurnitureKind::Desk));
    assert!(doc.remove(&Uuid::new_v4()).is_none());
    assert_eq!(doc.len(), 1);
}

#[test]
fn get_mut_edits_in_place() {
    let mut doc = DocStore::new();
    let a = item(FurnitureKind::Bed);
    let id = a.id;
    doc.insert(a);
    doc.get_mut(&id).unwrap().color = "#000000".into();
    assert_eq!(doc.get(&id).unwrap().color, "#000000");
}

#[test]
fn bring_to_front_moves_to_end() {
    let mut doc = DocStore::new();
    let a = item(FurnitureKind::Sofa);
    let b = item(FurnitureKind::Chair);
    let c = item(FurnitureKind::Plant);
    let (ida, idb, idc) = (a.id, b.id, c.id);
    doc.insert(a);
    doc.insert(b);
    doc.insert(c);
    assert!(doc.bring_to_front(&ida));
    assert_eq!(ids(&doc), vec![idb, idc, ida]);
}

#[test]
fn bring_to_front_missing_is_false() {
    let mut doc = DocStore::new();
    assert!(!doc.bring_to_front(&Uuid::new_v4()));
}

#[test]
fn load_replaces_contents_and_keeps_order() {
    let mut doc = DocStore::new();
    doc.insert(item(FurnitureKind::Rug));
    let list = vec![item(FurnitureKind::Sofa), item(FurnitureKind::Bed)];
    let expected: Vec<ItemId> = list.iter().map(|i| i.id).collect();
    doc.load(list);
    assert_eq!(ids(&doc), expected);
}

#[test]
fn clear_empties_store() {
    let mut doc = DocStore::new();
    doc.insert(item(FurnitureKind::Rug));
    doc.clear();
    assert!(doc.is_empty());
}
