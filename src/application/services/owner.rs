//! Owner registration and upkeep

use tracing::debug;

use crate::domain::validation::require_non_blank;
use crate::domain::{DomainResult, EntityId, Owner, Store};

/// Business rules for owners.
pub struct OwnerService {
    store: Store<Owner>,
}

impl Default for OwnerService {
    fn default() -> Self {
        Self::new()
    }
}

impl OwnerService {
    pub fn new() -> Self {
        Self {
            store: Store::new(),
        }
    }

    /// Register a new owner.
    ///
    /// Both fields must be non-blank; they are stored trimmed.
    pub fn register(&mut self, name: &str, phone: &str) -> DomainResult<Owner> {
        let name = require_non_blank(name, "Name must not be blank")?;
        let phone = require_non_blank(phone, "Phone must not be blank")?;

        let owner = self.store.add(Owner::new(name, phone));
        debug!("register: owner id={}", owner.id);
        Ok(owner)
    }

    /// Replace an existing owner's fields.
    ///
    /// Validation runs before the existence check, so malformed input fails
    /// even for unknown ids. Returns `false` when the id is unknown.
    pub fn update(&mut self, id: EntityId, name: &str, phone: &str) -> DomainResult<bool> {
        let name = require_non_blank(name, "Name must not be blank")?;
        let phone = require_non_blank(phone, "Phone must not be blank")?;

        let Some(mut owner) = self.store.get(id) else {
            return Ok(false);
        };
        owner.name = name;
        owner.phone = phone;
        Ok(self.store.update(owner))
    }

    /// Remove an owner. Animals referencing it are left untouched.
    pub fn remove(&mut self, id: EntityId) -> bool {
        self.store.remove(id)
    }

    pub fn list(&self) -> Vec<Owner> {
        self.store.list()
    }

    pub fn find_by_id(&self, id: EntityId) -> Option<Owner> {
        self.store.get(id)
    }
}
