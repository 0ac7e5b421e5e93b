//! Appointment scheduling

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::validation::require_present;
use crate::domain::{Animal, Appointment, DomainResult, EntityId, Store, Veterinarian};

/// Business rules for appointments.
///
/// Date, animal, and veterinarian are required; notes pass through
/// unvalidated (blank allowed). No double-booking detection is performed:
/// any number of appointments may share a date, animal, or veterinarian.
pub struct AppointmentService {
    store: Store<Appointment>,
}

impl Default for AppointmentService {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentService {
    pub fn new() -> Self {
        Self {
            store: Store::new(),
        }
    }

    /// Schedule a new appointment.
    pub fn schedule(
        &mut self,
        date: Option<NaiveDate>,
        animal: Option<Animal>,
        veterinarian: Option<Veterinarian>,
        notes: &str,
    ) -> DomainResult<Appointment> {
        let date = require_present(date, "Date is required")?;
        let animal = require_present(animal, "Animal is required")?;
        let veterinarian = require_present(veterinarian, "Veterinarian is required")?;

        let appointment = self
            .store
            .add(Appointment::new(date, animal, veterinarian, notes.to_string()));
        debug!("schedule: appointment id={} date={}", appointment.id, appointment.date);
        Ok(appointment)
    }

    /// Replace an existing appointment's fields.
    ///
    /// The full field set must be resupplied. Validation runs before the
    /// existence check; returns `false` when the id is unknown.
    pub fn update(
        &mut self,
        id: EntityId,
        date: Option<NaiveDate>,
        animal: Option<Animal>,
        veterinarian: Option<Veterinarian>,
        notes: &str,
    ) -> DomainResult<bool> {
        let date = require_present(date, "Date is required")?;
        let animal = require_present(animal, "Animal is required")?;
        let veterinarian = require_present(veterinarian, "Veterinarian is required")?;

        let Some(mut appointment) = self.store.get(id) else {
            return Ok(false);
        };
        appointment.date = date;
        appointment.animal = animal;
        appointment.veterinarian = veterinarian;
        appointment.notes = notes.to_string();
        Ok(self.store.update(appointment))
    }

    /// Cancel an appointment by removing its record.
    pub fn cancel(&mut self, id: EntityId) -> bool {
        self.store.remove(id)
    }

    pub fn list(&self) -> Vec<Appointment> {
        self.store.list()
    }

    pub fn find_by_id(&self, id: EntityId) -> Option<Appointment> {
        self.store.get(id)
    }
}
