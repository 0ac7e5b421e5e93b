//! Animal registration and upkeep

use tracing::debug;

use crate::domain::validation::{require_non_blank, require_non_negative, require_present};
use crate::domain::{Animal, AnimalKind, DomainResult, EntityId, Owner, Store};

/// Business rules for animals.
///
/// Every animal requires an owner reference; the caller resolves the owner
/// (typically via `OwnerService::find_by_id`) and hands over a value copy.
pub struct AnimalService {
    store: Store<Animal>,
}

impl Default for AnimalService {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimalService {
    pub fn new() -> Self {
        Self {
            store: Store::new(),
        }
    }

    /// Register a new animal of the given kind.
    ///
    /// Text fields are stored trimmed, age must be non-negative, and the
    /// owner reference is required.
    pub fn register(
        &mut self,
        kind: AnimalKind,
        name: &str,
        age: i32,
        species: &str,
        owner: Option<Owner>,
    ) -> DomainResult<Animal> {
        let name = require_non_blank(name, "Name must not be blank")?;
        let age = require_non_negative(age, "Age must not be negative")?;
        let species = require_non_blank(species, "Species must not be blank")?;
        let owner = require_present(owner, "Owner is required")?;

        let animal = self.store.add(Animal::new(kind, name, age, species, owner));
        debug!("register: {} id={}", animal.kind, animal.id);
        Ok(animal)
    }

    /// Replace an existing animal's fields.
    ///
    /// The full field set including the owner must be resupplied; there is
    /// no partial update. The kind is not changed. Validation runs before
    /// the existence check; returns `false` when the id is unknown.
    pub fn update(
        &mut self,
        id: EntityId,
        name: &str,
        age: i32,
        species: &str,
        owner: Option<Owner>,
    ) -> DomainResult<bool> {
        let name = require_non_blank(name, "Name must not be blank")?;
        let age = require_non_negative(age, "Age must not be negative")?;
        let species = require_non_blank(species, "Species must not be blank")?;
        let owner = require_present(owner, "Owner is required")?;

        let Some(mut animal) = self.store.get(id) else {
            return Ok(false);
        };
        animal.name = name;
        animal.age = age;
        animal.species = species;
        animal.owner = owner;
        Ok(self.store.update(animal))
    }

    /// Remove an animal. Appointments referencing it are left untouched.
    pub fn remove(&mut self, id: EntityId) -> bool {
        self.store.remove(id)
    }

    pub fn list(&self) -> Vec<Animal> {
        self.store.list()
    }

    pub fn find_by_id(&self, id: EntityId) -> Option<Animal> {
        self.store.get(id)
    }
}
