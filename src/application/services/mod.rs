//! Application services
//!
//! One concrete service per entity kind, each exclusively owning its store.
//! Services are concrete structs, not traits.

mod animal;
mod appointment;
mod owner;
mod veterinarian;

pub use animal::AnimalService;
pub use appointment::AppointmentService;
pub use owner::OwnerService;
pub use veterinarian::VeterinarianService;
