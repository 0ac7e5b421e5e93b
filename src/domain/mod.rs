//! Domain layer: entities, the generic store, and validation
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod store;
pub mod validation;

pub use entities::{Animal, AnimalKind, Appointment, EntityId, Identified, Owner, Veterinarian};
pub use error::{DomainError, DomainResult};
pub use store::Store;
