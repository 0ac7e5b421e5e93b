//! Animal menu

use std::io;

use crate::application::{AnimalService, OwnerService};
use crate::cli::menu::owner as owner_menu;
use crate::cli::{input, output};
use crate::config::Settings;
use crate::domain::{AnimalKind, Owner};

pub fn run(
    animals: &mut AnimalService,
    owners: &OwnerService,
    settings: &Settings,
) -> io::Result<()> {
    loop {
        output::header("\n--- Animal menu ---");
        output::info("1. Register");
        output::info("2. List");
        output::info("3. Update");
        output::info("4. Remove");
        output::info("0. Back");

        match input::read_i32("Choose an option:")? {
            1 => register(animals, owners)?,
            2 => list(animals),
            3 => update(animals, owners)?,
            4 => remove(animals, settings)?,
            0 => return Ok(()),
            _ => output::info("Invalid option."),
        }
    }
}

fn register(animals: &mut AnimalService, owners: &OwnerService) -> io::Result<()> {
    output::header("\nAnimal registration");
    if owners.list().is_empty() {
        output::warning("Register an owner before registering animals.");
        return Ok(());
    }

    let kind = read_kind()?;
    let name = input::read_required_text("Name:")?;
    let age = input::read_i32("Age (years):")?;
    let species = input::read_required_text("Species/breed:")?;
    let Some(owner) = select_owner(owners)? else {
        return Ok(());
    };

    match animals.register(kind, &name, age, &species, Some(owner)) {
        Ok(animal) => {
            output::success(&format!("Animal registered with ID {}.", animal.id));
            if input::confirm("Hear the animal's sound? (y/n):")? {
                output::info(animal.sound());
            }
        }
        Err(e) => output::error(&e),
    }
    Ok(())
}

pub(crate) fn list(animals: &AnimalService) {
    output::header("\nAnimals");
    let records = animals.list();
    if records.is_empty() {
        output::info("No animals registered.");
        return;
    }

    output::info(&format!(
        "{:<4} {:<6} {:<15} {:<6} {:<18} {:<20}",
        "ID", "Kind", "Name", "Age", "Species", "Owner"
    ));
    for animal in records {
        output::info(&format!(
            "{:<4} {:<6} {:<15} {:<6} {:<18} {:<20}",
            animal.id,
            animal.kind.label(),
            animal.name,
            animal.age,
            animal.species,
            animal.owner.name
        ));
    }
}

fn update(animals: &mut AnimalService, owners: &OwnerService) -> io::Result<()> {
    output::header("\nAnimal update");
    let id = input::read_id("Animal ID:")?;
    let Some(current) = animals.find_by_id(id) else {
        output::info("No animal with that ID.");
        return Ok(());
    };
    output::detail(&current);

    let name = input::read_required_text("New name:")?;
    let age = input::read_i32("New age (years):")?;
    let species = input::read_required_text("New species/breed:")?;
    let Some(owner) = select_owner(owners)? else {
        return Ok(());
    };

    match animals.update(id, &name, age, &species, Some(owner)) {
        Ok(true) => output::success("Animal updated."),
        Ok(false) => output::info("No animal with that ID."),
        Err(e) => output::error(&e),
    }
    Ok(())
}

fn remove(animals: &mut AnimalService, settings: &Settings) -> io::Result<()> {
    output::header("\nAnimal removal");
    let id = input::read_id("Animal ID:")?;

    if settings.confirm_removals && !input::confirm("Remove this animal? (y/n):")? {
        output::info("Nothing removed.");
        return Ok(());
    }

    if animals.remove(id) {
        output::success("Animal removed.");
    } else {
        output::info("No animal with that ID.");
    }
    Ok(())
}

fn read_kind() -> io::Result<AnimalKind> {
    loop {
        match input::read_i32("Kind (1 dog, 2 cat):")? {
            1 => return Ok(AnimalKind::Dog),
            2 => return Ok(AnimalKind::Cat),
            _ => output::info("Invalid option."),
        }
    }
}

fn select_owner(owners: &OwnerService) -> io::Result<Option<Owner>> {
    owner_menu::list(owners);
    let id = input::read_id("Owner ID:")?;
    let owner = owners.find_by_id(id);
    if owner.is_none() {
        output::info("No owner with that ID.");
    }
    Ok(owner)
}
