//! Generic in-memory resource registry
//!
//! A [`Registry`] is a keyed store of entities addressed by a numeric
//! identifier. Identifiers are assigned by the registry on creation from a
//! monotonically increasing counter and are never reused, even after
//! deletion. Because assigned ids are strictly increasing, the key order of
//! the backing `BTreeMap` equals insertion order, so [`Registry::list`]
//! returns entities in the order they were added.
//!
//! The same type backs every map-keyed collection in the system: the
//! customer directory, the orders held by a customer, the products held by
//! an order and the flat product catalog.

use crate::core::error::{RegistryError, RegistryResult};
use std::collections::BTreeMap;

/// Trait for entities that can be held by a [`Registry`].
///
/// Mirrors what the registry needs and nothing more: a resource name for
/// error reporting and routing, and access to the numeric identifier.
pub trait Resource: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs and errors (e.g. "customers")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g. "customer")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> u64;

    /// Set the identifier (called by the registry on add)
    fn set_id(&mut self, id: u64);
}

/// Outcome of an update operation.
///
/// `Unchanged` is a non-error no-op signal: the payload equaled the stored
/// value and nothing was mutated. It maps to HTTP 304 at the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    Unchanged,
}

/// In-memory keyed store with server-assigned, monotonically increasing ids.
#[derive(Debug, Clone)]
pub struct Registry<E> {
    entries: BTreeMap<u64, E>,
    /// Last id handed out (or the seed value when nothing was added yet).
    /// Never decremented, so ids are never reused.
    current_id: u64,
}

impl<E: Resource> Registry<E> {
    /// Create an empty registry whose first assigned id will be `seed + 1`.
    pub fn starting_at(seed: u64) -> Self {
        Self {
            entries: BTreeMap::new(),
            current_id: seed,
        }
    }

    /// All entities in insertion order.
    pub fn list(&self) -> Vec<E> {
        self.entries.values().cloned().collect()
    }

    /// Exact-match lookup.
    pub fn get(&self, id: u64) -> RegistryResult<&E> {
        self.entries
            .get(&id)
            .ok_or_else(|| RegistryError::not_found::<E>(id))
    }

    /// Mutable exact-match lookup, for operations on contained registries.
    pub fn get_mut(&mut self, id: u64) -> RegistryResult<&mut E> {
        self.entries
            .get_mut(&id)
            .ok_or_else(|| RegistryError::not_found::<E>(id))
    }

    /// Assign the next identifier to `entity` and insert it.
    ///
    /// The client-supplied id is always overwritten; returns the stored
    /// entity so callers can report the assigned id.
    pub fn add(&mut self, mut entity: E) -> E {
        self.current_id += 1;
        entity.set_id(self.current_id);
        self.entries.insert(self.current_id, entity.clone());
        entity
    }

    /// Insert an entity keeping its own id, bumping the counter past it.
    ///
    /// Used for construction-time seed data and for catalog products copied
    /// into an order, which keep their catalog id.
    pub fn seed(&mut self, entity: E) {
        self.current_id = self.current_id.max(entity.id());
        self.entries.insert(entity.id(), entity);
    }

    /// In-place replace of the record with the payload's id.
    ///
    /// Returns `NotFound` when the id is absent and `Unchanged` when the
    /// stored value equals the payload (no mutation in that case).
    pub fn update(&mut self, entity: E) -> RegistryResult<UpdateOutcome>
    where
        E: PartialEq,
    {
        let id = entity.id();
        let existing = self
            .entries
            .get(&id)
            .ok_or_else(|| RegistryError::not_found::<E>(id))?;
        if *existing == entity {
            return Ok(UpdateOutcome::Unchanged);
        }
        self.entries.insert(id, entity);
        Ok(UpdateOutcome::Updated)
    }

    /// Remove and return the entity; `NotFound` when absent.
    ///
    /// The id counter is untouched, so a deleted id is never handed out
    /// again.
    pub fn delete(&mut self, id: u64) -> RegistryResult<E> {
        self.entries
            .remove(&id)
            .ok_or_else(|| RegistryError::not_found::<E>(id))
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: Resource> Default for Registry<E> {
    fn default() -> Self {
        Self::starting_at(0)
    }
}
