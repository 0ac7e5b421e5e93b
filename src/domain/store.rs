//! Generic in-memory store with incremental identifiers

use std::collections::BTreeMap;

use tracing::instrument;

use crate::domain::entities::{EntityId, Identified};

/// In-memory keyed container assigning sequential identifiers.
///
/// Identifiers start at 1, increase strictly, and are never reused after
/// removal. Because of that, ascending-id iteration over the backing map
/// equals insertion order of the surviving records.
///
/// All operations are synchronous with no hidden failure modes; not-found
/// outcomes are reported through `bool`/`Option` return values.
#[derive(Debug)]
pub struct Store<T> {
    records: BTreeMap<EntityId, T>,
    next_id: EntityId,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Store<T> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Count of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Identified + Clone> Store<T> {
    /// Insert a new entity, assigning the next identifier.
    ///
    /// Returns the entity carrying its assigned id.
    #[instrument(level = "trace", skip(self, entity))]
    pub fn add(&mut self, mut entity: T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        entity.set_id(id);
        self.records.insert(id, entity.clone());
        entity
    }

    /// Replace the stored record keyed by the entity's current id.
    ///
    /// Returns `false` without inserting when the id is unknown.
    #[instrument(level = "trace", skip(self, entity))]
    pub fn update(&mut self, entity: T) -> bool {
        let id = entity.id();
        if !self.records.contains_key(&id) {
            return false;
        }
        self.records.insert(id, entity);
        true
    }

    /// Look up a record by identifier.
    #[instrument(level = "trace", skip(self))]
    pub fn get(&self, id: EntityId) -> Option<T> {
        self.records.get(&id).cloned()
    }

    /// All records in insertion order.
    #[instrument(level = "trace", skip(self))]
    pub fn list(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    /// Delete the keyed record if present.
    ///
    /// Returns whether a record was actually removed; the freed id is not
    /// reassigned.
    #[instrument(level = "trace", skip(self))]
    pub fn remove(&mut self, id: EntityId) -> bool {
        self.records.remove(&id).is_some()
    }
}
