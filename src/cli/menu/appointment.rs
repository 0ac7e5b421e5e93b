//! Appointment menu

use std::io;

use crate::application::{AnimalService, AppointmentService, VeterinarianService};
use crate::cli::menu::{animal as animal_menu, veterinarian as veterinarian_menu};
use crate::cli::{input, output};
use crate::config::Settings;
use crate::domain::{Animal, Veterinarian};

pub fn run(
    appointments: &mut AppointmentService,
    animals: &AnimalService,
    veterinarians: &VeterinarianService,
    settings: &Settings,
) -> io::Result<()> {
    loop {
        output::header("\n--- Appointment menu ---");
        output::info("1. Schedule");
        output::info("2. List");
        output::info("3. Update");
        output::info("4. Cancel");
        output::info("0. Back");

        match input::read_i32("Choose an option:")? {
            1 => schedule(appointments, animals, veterinarians, settings)?,
            2 => list(appointments, settings),
            3 => update(appointments, animals, veterinarians, settings)?,
            4 => cancel(appointments, settings)?,
            0 => return Ok(()),
            _ => output::info("Invalid option."),
        }
    }
}

fn schedule(
    appointments: &mut AppointmentService,
    animals: &AnimalService,
    veterinarians: &VeterinarianService,
    settings: &Settings,
) -> io::Result<()> {
    output::header("\nAppointment scheduling");
    if animals.list().is_empty() {
        output::warning("Register an animal before scheduling appointments.");
        return Ok(());
    }
    if veterinarians.list().is_empty() {
        output::warning("Register a veterinarian before scheduling appointments.");
        return Ok(());
    }

    let date = input::read_date(
        &format!("Date ({}):", settings.date_format),
        &settings.date_format,
    )?;
    let Some(animal) = select_animal(animals)? else {
        return Ok(());
    };
    let Some(veterinarian) = select_veterinarian(veterinarians)? else {
        return Ok(());
    };
    let notes = input::read_text("Notes (optional):")?;

    match appointments.schedule(Some(date), Some(animal), Some(veterinarian), &notes) {
        Ok(appointment) => output::success(&format!(
            "Appointment scheduled with ID {}.",
            appointment.id
        )),
        Err(e) => output::error(&e),
    }
    Ok(())
}

fn list(appointments: &AppointmentService, settings: &Settings) {
    output::header("\nAppointments");
    let records = appointments.list();
    if records.is_empty() {
        output::info("No appointments scheduled.");
        return;
    }

    output::info(&format!(
        "{:<4} {:<12} {:<15} {:<20} {:<30}",
        "ID", "Date", "Animal", "Veterinarian", "Notes"
    ));
    for appointment in records {
        output::info(&format!(
            "{:<4} {:<12} {:<15} {:<20} {:<30}",
            appointment.id,
            appointment.date.format(&settings.date_format),
            appointment.animal.name,
            appointment.veterinarian.name,
            appointment.notes
        ));
    }
}

fn update(
    appointments: &mut AppointmentService,
    animals: &AnimalService,
    veterinarians: &VeterinarianService,
    settings: &Settings,
) -> io::Result<()> {
    output::header("\nAppointment update");
    let id = input::read_id("Appointment ID:")?;
    let Some(current) = appointments.find_by_id(id) else {
        output::info("No appointment with that ID.");
        return Ok(());
    };
    output::detail(&current);

    let date = input::read_date(
        &format!("New date ({}):", settings.date_format),
        &settings.date_format,
    )?;
    let Some(animal) = select_animal(animals)? else {
        return Ok(());
    };
    let Some(veterinarian) = select_veterinarian(veterinarians)? else {
        return Ok(());
    };
    let notes = input::read_text("New notes (optional):")?;

    match appointments.update(id, Some(date), Some(animal), Some(veterinarian), &notes) {
        Ok(true) => output::success("Appointment updated."),
        Ok(false) => output::info("No appointment with that ID."),
        Err(e) => output::error(&e),
    }
    Ok(())
}

fn cancel(appointments: &mut AppointmentService, settings: &Settings) -> io::Result<()> {
    output::header("\nAppointment cancellation");
    let id = input::read_id("Appointment ID:")?;

    if settings.confirm_removals && !input::confirm("Cancel this appointment? (y/n):")? {
        output::info("Nothing cancelled.");
        return Ok(());
    }

    if appointments.cancel(id) {
        output::success("Appointment cancelled.");
    } else {
        output::info("No appointment with that ID.");
    }
    Ok(())
}

fn select_animal(animals: &AnimalService) -> io::Result<Option<Animal>> {
    animal_menu::list(animals);
    let id = input::read_id("Animal ID:")?;
    let animal = animals.find_by_id(id);
    if animal.is_none() {
        output::info("No animal with that ID.");
    }
    Ok(animal)
}

fn select_veterinarian(veterinarians: &VeterinarianService) -> io::Result<Option<Veterinarian>> {
    veterinarian_menu::list(veterinarians);
    let id = input::read_id("Veterinarian ID:")?;
    let veterinarian = veterinarians.find_by_id(id);
    if veterinarian.is_none() {
        output::info("No veterinarian with that ID.");
    }
    Ok(veterinarian)
}
