//! Owner menu

use std::io;

use crate::application::OwnerService;
use crate::cli::{input, output};
use crate::config::Settings;

pub fn run(owners: &mut OwnerService, settings: &Settings) -> io::Result<()> {
    loop {
        output::header("\n--- Owner menu ---");
        output::info("1. Register");
        output::info("2. List");
        output::info("3. Update");
        output::info("4. Remove");
        output::info("0. Back");

        match input::read_i32("Choose an option:")? {
            1 => register(owners)?,
            2 => list(owners),
            3 => update(owners)?,
            4 => remove(owners, settings)?,
            0 => return Ok(()),
            _ => output::info("Invalid option."),
        }
    }
}

fn register(owners: &mut OwnerService) -> io::Result<()> {
    output::header("\nOwner registration");
    let name = input::read_required_text("Name:")?;
    let phone = input::read_required_text("Phone:")?;

    match owners.register(&name, &phone) {
        Ok(owner) => output::success(&format!("Owner registered with ID {}.", owner.id)),
        Err(e) => output::error(&e),
    }
    Ok(())
}

pub(crate) fn list(owners: &OwnerService) {
    output::header("\nOwners");
    let records = owners.list();
    if records.is_empty() {
        output::info("No owners registered.");
        return;
    }

    output::info(&format!("{:<4} {:<20} {:<15}", "ID", "Name", "Phone"));
    for owner in records {
        output::info(&format!(
            "{:<4} {:<20} {:<15}",
            owner.id, owner.name, owner.phone
        ));
    }
}

fn update(owners: &mut OwnerService) -> io::Result<()> {
    output::header("\nOwner update");
    let id = input::read_id("Owner ID:")?;
    let Some(current) = owners.find_by_id(id) else {
        output::info("No owner with that ID.");
        return Ok(());
    };
    output::detail(&current);

    let name = input::read_required_text("New name:")?;
    let phone = input::read_required_text("New phone:")?;

    match owners.update(id, &name, &phone) {
        Ok(true) => output::success("Owner updated."),
        Ok(false) => output::info("No owner with that ID."),
        Err(e) => output::error(&e),
    }
    Ok(())
}

fn remove(owners: &mut OwnerService, settings: &Settings) -> io::Result<()> {
    output::header("\nOwner removal");
    let id = input::read_id("Owner ID:")?;

    if settings.confirm_removals && !input::confirm("Remove this owner? (y/n):")? {
        output::info("Nothing removed.");
        return Ok(());
    }

    if owners.remove(id) {
        output::success("Owner removed.");
    } else {
        output::info("No owner with that ID.");
    }
    Ok(())
}
