//! Application layer: per-entity services
//!
//! Services orchestrate validation and required-reference rules on top of
//! one store instance each.

pub mod services;

pub use services::{AnimalService, AppointmentService, OwnerService, VeterinarianService};
