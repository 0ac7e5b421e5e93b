//! Tests for AnimalService

use pawclinic::application::{AnimalService, OwnerService};
use pawclinic::domain::{AnimalKind, DomainError, Owner};
use rstest::rstest;

#[ctor::ctor]
fn init() {
    pawclinic::util::testing::init_test_setup();
}

fn registered_owner() -> Owner {
    let mut owners = OwnerService::new();
    owners.register("Alice", "555-0100").unwrap()
}

#[rstest]
#[case(AnimalKind::Dog, "Woof woof!")]
#[case(AnimalKind::Cat, "Meow!")]
fn given_each_kind_when_registering_then_kind_drives_the_sound(
    #[case] kind: AnimalKind,
    #[case] sound: &str,
) {
    // Arrange
    let mut animals = AnimalService::new();
    let owner = registered_owner();

    // Act
    let animal = animals
        .register(kind, "Rex", 3, "Labrador", Some(owner))
        .unwrap();

    // Assert
    assert_eq!(animal.kind, kind);
    assert_eq!(animal.sound(), sound);
}

#[test]
fn given_padded_fields_when_registering_then_stores_trimmed_values() {
    // Arrange
    let mut animals = AnimalService::new();
    let owner = registered_owner();

    // Act
    let animal = animals
        .register(AnimalKind::Dog, "  Rex  ", 3, " Labrador ", Some(owner))
        .unwrap();

    // Assert
    assert_eq!(animal.name, "Rex");
    assert_eq!(animal.species, "Labrador");
    let found = animals.find_by_id(animal.id).unwrap();
    assert_eq!(found.name, "Rex");
    assert_eq!(found.species, "Labrador");
}

#[test]
fn given_no_owner_reference_when_registering_then_rejects() {
    // Arrange
    let mut animals = AnimalService::new();

    // Act
    let result = animals.register(AnimalKind::Dog, "Rex", 3, "Labrador", None);

    // Assert
    assert_eq!(
        result.unwrap_err(),
        DomainError::invalid("Owner is required")
    );
    assert!(animals.list().is_empty());
}

#[test]
fn given_negative_age_when_registering_then_rejects() {
    // Arrange
    let mut animals = AnimalService::new();
    let owner = registered_owner();

    // Act
    let result = animals.register(AnimalKind::Dog, "Rex", -1, "Labrador", Some(owner));

    // Assert
    assert!(matches!(
        result,
        Err(DomainError::InvalidArgument { .. })
    ));
}

#[test]
fn given_zero_age_when_registering_then_succeeds() {
    // Arrange
    let mut animals = AnimalService::new();
    let owner = registered_owner();

    // Act
    let animal = animals
        .register(AnimalKind::Cat, "Mimi", 0, "Siamese", Some(owner))
        .unwrap();

    // Assert
    assert_eq!(animal.age, 0);
    assert_eq!(animal.id, 1);
}

#[test]
fn given_existing_animal_when_updating_then_full_field_set_is_replaced() {
    // Arrange
    let mut owners = OwnerService::new();
    let alice = owners.register("Alice", "555-0100").unwrap();
    let bob = owners.register("Bob", "555-0101").unwrap();

    let mut animals = AnimalService::new();
    let animal = animals
        .register(AnimalKind::Dog, "Rex", 3, "Labrador", Some(alice))
        .unwrap();

    // Act - update must resupply everything, including the owner
    let updated = animals
        .update(animal.id, "Rex Jr.", 4, "Golden Retriever", Some(bob.clone()))
        .unwrap();

    // Assert
    assert!(updated);
    let found = animals.find_by_id(animal.id).unwrap();
    assert_eq!(found.name, "Rex Jr.");
    assert_eq!(found.age, 4);
    assert_eq!(found.species, "Golden Retriever");
    assert_eq!(found.owner.id, bob.id);
    // kind is not part of the update set
    assert_eq!(found.kind, AnimalKind::Dog);
}

#[test]
fn given_update_without_owner_when_updating_then_rejects_before_existence_check() {
    // Arrange
    let mut animals = AnimalService::new();

    // Act - id 5 does not exist, but the missing owner must still surface
    let result = animals.update(5, "Rex", 3, "Labrador", None);

    // Assert
    assert!(result.is_err());
}

#[test]
fn given_removed_owner_when_listing_animals_then_reference_still_dangles() {
    // Arrange - no cascade: removing an owner leaves its animals untouched
    let mut owners = OwnerService::new();
    let alice = owners.register("Alice", "555-0100").unwrap();

    let mut animals = AnimalService::new();
    let animal = animals
        .register(AnimalKind::Dog, "Rex", 3, "Labrador", Some(alice.clone()))
        .unwrap();

    // Act
    assert!(owners.remove(alice.id));

    // Assert
    let found = animals.find_by_id(animal.id).unwrap();
    assert_eq!(found.owner.id, alice.id);
}
