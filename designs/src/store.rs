//! Design persistence contract and an in-memory implementation.
//!
//! DESIGN
//! ======
//! The editor core hands finished `{room, furniture}` pairs to a
//! [`DesignStore`] on explicit save and never awaits anything else. Every
//! operation is scoped to an owner: a design that exists but belongs to
//! somebody else is reported as [`StoreError::NotFound`], the same as a
//! design that does not exist at all.
//!
//! ERROR HANDLING
//! ==============
//! A failed call leaves the store unchanged. Callers keep their own state
//! (and dirty flag) so the operation can simply be retried.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use tracing::{debug, info};
use uuid::Uuid;

use crate::model::{Design, DesignId, DesignPatch, DesignStats, DesignStatus, NewDesign, OwnerId};

/// Suffix appended to the name of a duplicated design.
pub const COPY_SUFFIX: &str = " (Copy)";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("design not found: {0}")]
    NotFound(DesignId),
    #[error("design name is required")]
    EmptyName,
    #[error("invalid design status: {0}")]
    InvalidStatus(String),
}

/// Storage collaborator used by the editor and dashboard.
///
/// `create` and `duplicate` allocate new ids; every other operation is
/// idempotent for a given id.
pub trait DesignStore {
    /// Create a new design for `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyName`] if the trimmed name is blank.
    fn create(&mut self, owner: OwnerId, new: NewDesign) -> Result<Design, StoreError>;

    /// Fetch one design.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `owner` has no design `id`.
    fn get(&self, owner: OwnerId, id: DesignId) -> Result<Design, StoreError>;

    /// Merge a sparse update into an existing design.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `owner` has no design `id`.
    fn update(&mut self, owner: OwnerId, id: DesignId, patch: DesignPatch) -> Result<Design, StoreError>;

    /// Change only the workflow status.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `owner` has no design `id`.
    fn update_status(&mut self, owner: OwnerId, id: DesignId, status: DesignStatus) -> Result<Design, StoreError>;

    /// Copy a design under a new id as a fresh draft.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `owner` has no design `id`.
    fn duplicate(&mut self, owner: OwnerId, id: DesignId) -> Result<Design, StoreError>;

    /// Permanently delete a design.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `owner` has no design `id`.
    fn delete(&mut self, owner: OwnerId, id: DesignId) -> Result<(), StoreError>;

    /// List the owner's designs, most recently written first.
    fn list(&self, owner: OwnerId, status: Option<DesignStatus>) -> Vec<Design>;

    /// Count the owner's designs per status.
    fn stats(&self, owner: OwnerId) -> DesignStats;
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// `HashMap`-backed store. Revisions come from a store-wide counter so list
/// order is stable without a wall clock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    designs: HashMap<DesignId, Design>,
    next_revision: u64,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of designs across all owners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.designs.len()
    }

    /// Returns `true` if no designs are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }

    fn bump(&mut self) -> u64 {
        self.next_revision += 1;
        self.next_revision
    }

    fn owned_mut(&mut self, owner: OwnerId, id: DesignId) -> Result<&mut Design, StoreError> {
        self.designs
            .get_mut(&id)
            .filter(|d| d.owner_id == owner)
            .ok_or(StoreError::NotFound(id))
    }
}

impl DesignStore for MemoryStore {
    fn create(&mut self, owner: OwnerId, new: NewDesign) -> Result<Design, StoreError> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let design = Design {
            id: Uuid::new_v4(),
            owner_id: owner,
            name: name.to_owned(),
            status: new.status.unwrap_or_default(),
            room: new.room.unwrap_or_default(),
            furniture: new.furniture,
            notes: new.notes,
            revision: self.bump(),
        };
        info!(design_id = %design.id, %owner, name = %design.name, "design created");
        self.designs.insert(design.id, design.clone());
        Ok(design)
    }

    fn get(&self, owner: OwnerId, id: DesignId) -> Result<Design, StoreError> {
        self.designs
            .get(&id)
            .filter(|d| d.owner_id == owner)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&mut self, owner: OwnerId, id: DesignId, patch: DesignPatch) -> Result<Design, StoreError> {
        let revision = self.next_revision + 1;
        let design = self.owned_mut(owner, id)?;
        patch.apply_to(design);
        design.revision = revision;
        let saved = design.clone();
        self.next_revision = revision;
        debug!(design_id = %id, items = saved.furniture.len(), "design updated");
        Ok(saved)
    }

    fn update_status(&mut self, owner: OwnerId, id: DesignId, status: DesignStatus) -> Result<Design, StoreError> {
        let revision = self.next_revision + 1;
        let design = self.owned_mut(owner, id)?;
        design.status = status;
        design.revision = revision;
        let saved = design.clone();
        self.next_revision = revision;
        debug!(design_id = %id, %status, "design status updated");
        Ok(saved)
    }

    fn duplicate(&mut self, owner: OwnerId, id: DesignId) -> Result<Design, StoreError> {
        let source = self.get(owner, id)?;
        let copy = Design {
            id: Uuid::new_v4(),
            name: format!("{}{COPY_SUFFIX}", source.name),
            status: DesignStatus::Draft,
            revision: self.bump(),
            ..source
        };
        info!(source_id = %id, design_id = %copy.id, "design duplicated");
        self.designs.insert(copy.id, copy.clone());
        Ok(copy)
    }

    fn delete(&mut self, owner: OwnerId, id: DesignId) -> Result<(), StoreError> {
        self.owned_mut(owner, id)?;
        self.designs.remove(&id);
        info!(design_id = %id, "design deleted");
        Ok(())
    }

    fn list(&self, owner: OwnerId, status: Option<DesignStatus>) -> Vec<Design> {
        let mut out: Vec<Design> = self
            .designs
            .values()
            .filter(|d| d.owner_id == owner)
            .filter(|d| status.map_or(true, |s| d.status == s))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.revision.cmp(&a.revision));
        out
    }

    fn stats(&self, owner: OwnerId) -> DesignStats {
        let mut stats = DesignStats::default();
        for design in self.designs.values().filter(|d| d.owner_id == owner) {
            stats.record(design.status);
        }
        stats
    }
}
