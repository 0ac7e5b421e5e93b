//! Interactive console menus
//!
//! The menus own the services for the lifetime of the run; all state is
//! discarded on exit. Service invalid-argument errors are reported inline
//! and never abort the loop.

pub mod animal;
pub mod appointment;
pub mod owner;
pub mod veterinarian;

use std::io;

use crate::application::{AnimalService, AppointmentService, OwnerService, VeterinarianService};
use crate::cli::{input, output};
use crate::config::Settings;

/// Run the main menu loop until the user quits.
pub fn run(settings: &Settings) -> io::Result<()> {
    let mut owners = OwnerService::new();
    let mut veterinarians = VeterinarianService::new();
    let mut animals = AnimalService::new();
    let mut appointments = AppointmentService::new();

    loop {
        output::header("\n--- Paw Clinic ---");
        output::info("1. Manage animals");
        output::info("2. Manage owners");
        output::info("3. Manage veterinarians");
        output::info("4. Manage appointments");
        output::info("0. Quit");

        match input::read_i32("Choose an option:")? {
            1 => animal::run(&mut animals, &owners, settings)?,
            2 => owner::run(&mut owners, settings)?,
            3 => veterinarian::run(&mut veterinarians, settings)?,
            4 => appointment::run(&mut appointments, &animals, &veterinarians, settings)?,
            0 => {
                output::info("Closing the clinic, see you soon!");
                return Ok(());
            }
            _ => output::info("Invalid option."),
        }
    }
}
