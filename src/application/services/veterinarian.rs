//! Veterinarian registration and upkeep

use tracing::debug;

use crate::domain::validation::require_non_blank;
use crate::domain::{DomainResult, EntityId, Store, Veterinarian};

/// Business rules for veterinarians.
pub struct VeterinarianService {
    store: Store<Veterinarian>,
}

impl Default for VeterinarianService {
    fn default() -> Self {
        Self::new()
    }
}

impl VeterinarianService {
    pub fn new() -> Self {
        Self {
            store: Store::new(),
        }
    }

    /// Register a new veterinarian. All fields are stored trimmed.
    pub fn register(
        &mut self,
        name: &str,
        phone: &str,
        specialty: &str,
    ) -> DomainResult<Veterinarian> {
        let name = require_non_blank(name, "Name must not be blank")?;
        let phone = require_non_blank(phone, "Phone must not be blank")?;
        let specialty = require_non_blank(specialty, "Specialty must not be blank")?;

        let veterinarian = self.store.add(Veterinarian::new(name, phone, specialty));
        debug!("register: veterinarian id={}", veterinarian.id);
        Ok(veterinarian)
    }

    /// Replace an existing veterinarian's fields.
    ///
    /// Validation runs before the existence check. Returns `false` when the
    /// id is unknown.
    pub fn update(
        &mut self,
        id: EntityId,
        name: &str,
        phone: &str,
        specialty: &str,
    ) -> DomainResult<bool> {
        let name = require_non_blank(name, "Name must not be blank")?;
        let phone = require_non_blank(phone, "Phone must not be blank")?;
        let specialty = require_non_blank(specialty, "Specialty must not be blank")?;

        let Some(mut veterinarian) = self.store.get(id) else {
            return Ok(false);
        };
        veterinarian.name = name;
        veterinarian.phone = phone;
        veterinarian.specialty = specialty;
        Ok(self.store.update(veterinarian))
    }

    /// Remove a veterinarian. Appointments referencing it are left untouched.
    pub fn remove(&mut self, id: EntityId) -> bool {
        self.store.remove(id)
    }

    pub fn list(&self) -> Vec<Veterinarian> {
        self.store.list()
    }

    pub fn find_by_id(&self, id: EntityId) -> Option<Veterinarian> {
        self.store.get(id)
    }
}
