//! Live furniture list for the open design.
//!
//! Draw order is insertion order: the last item is drawn on top and wins
//! hit-tests. `bring_to_front` moves an item to the end of the list.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use designs::{FurnitureItem, ItemId};

/// Ordered in-memory store of furniture items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocStore {
    items: Vec<FurnitureItem>,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item on top of the stack. An existing item with the same
    /// id is replaced in place, keeping its z-order.
    pub fn insert(&mut self, item: FurnitureItem) {
        match self.position(&item.id) {
            Some(idx) => self.items[idx] = item,
            None => self.items.push(item),
        }
    }

    /// Remove an item by id, returning it if it was present.
    pub fn remove(&mut self, id: &ItemId) -> Option<FurnitureItem> {
        let idx = self.position(id)?;
        Some(self.items.remove(idx))
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&FurnitureItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut FurnitureItem> {
        self.items.iter_mut().find(|item| item.id == *id)
    }

    /// Move an item to the top of the draw order. Returns false if the item
    /// doesn't exist.
    pub fn bring_to_front(&mut self, id: &ItemId) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        let item = self.items.remove(idx);
        self.items.push(item);
        true
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace all items with a full list, preserving its order.
    pub fn load(&mut self, items: Vec<FurnitureItem>) {
        self.items = items;
    }

    /// Items bottom-first, i.e. in draw order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &FurnitureItem> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut FurnitureItem> {
        self.items.iter_mut()
    }

    /// Borrow the items as a slice, bottom-first.
    #[must_use]
    pub fn as_slice(&self) -> &[FurnitureItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == *id)
    }
}
