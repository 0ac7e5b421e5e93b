//! Veterinarian menu

use std::io;

use crate::application::VeterinarianService;
use crate::cli::{input, output};
use crate::config::Settings;

pub fn run(veterinarians: &mut VeterinarianService, settings: &Settings) -> io::Result<()> {
    loop {
        output::header("\n--- Veterinarian menu ---");
        output::info("1. Register");
        output::info("2. List");
        output::info("3. Update");
        output::info("4. Remove");
        output::info("0. Back");

        match input::read_i32("Choose an option:")? {
            1 => register(veterinarians)?,
            2 => list(veterinarians),
            3 => update(veterinarians)?,
            4 => remove(veterinarians, settings)?,
            0 => return Ok(()),
            _ => output::info("Invalid option."),
        }
    }
}

fn register(veterinarians: &mut VeterinarianService) -> io::Result<()> {
    output::header("\nVeterinarian registration");
    let name = input::read_required_text("Name:")?;
    let phone = input::read_required_text("Phone:")?;
    let specialty = input::read_required_text("Specialty:")?;

    match veterinarians.register(&name, &phone, &specialty) {
        Ok(veterinarian) => output::success(&format!(
            "Veterinarian registered with ID {}.",
            veterinarian.id
        )),
        Err(e) => output::error(&e),
    }
    Ok(())
}

pub(crate) fn list(veterinarians: &VeterinarianService) {
    output::header("\nVeterinarians");
    let records = veterinarians.list();
    if records.is_empty() {
        output::info("No veterinarians registered.");
        return;
    }

    output::info(&format!(
        "{:<4} {:<20} {:<15} {:<18}",
        "ID", "Name", "Phone", "Specialty"
    ));
    for veterinarian in records {
        output::info(&format!(
            "{:<4} {:<20} {:<15} {:<18}",
            veterinarian.id, veterinarian.name, veterinarian.phone, veterinarian.specialty
        ));
    }
}

fn update(veterinarians: &mut VeterinarianService) -> io::Result<()> {
    output::header("\nVeterinarian update");
    let id = input::read_id("Veterinarian ID:")?;
    let Some(current) = veterinarians.find_by_id(id) else {
        output::info("No veterinarian with that ID.");
        return Ok(());
    };
    output::detail(&current);

    let name = input::read_required_text("New name:")?;
    let phone = input::read_required_text("New phone:")?;
    let specialty = input::read_required_text("New specialty:")?;

    match veterinarians.update(id, &name, &phone, &specialty) {
        Ok(true) => output::success("Veterinarian updated."),
        Ok(false) => output::info("No veterinarian with that ID."),
        Err(e) => output::error(&e),
    }
    Ok(())
}

fn remove(veterinarians: &mut VeterinarianService, settings: &Settings) -> io::Result<()> {
    output::header("\nVeterinarian removal");
    let id = input::read_id("Veterinarian ID:")?;

    if settings.confirm_removals && !input::confirm("Remove this veterinarian? (y/n):")? {
        output::info("Nothing removed.");
        return Ok(());
    }

    if veterinarians.remove(id) {
        output::success("Veterinarian removed.");
    } else {
        output::info("No veterinarian with that ID.");
    }
    Ok(())
}
