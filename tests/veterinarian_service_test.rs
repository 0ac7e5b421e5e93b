//! Tests for VeterinarianService

use pawclinic::application::VeterinarianService;
use pawclinic::domain::DomainError;
use rstest::rstest;

#[ctor::ctor]
fn init() {
    pawclinic::util::testing::init_test_setup();
}

#[test]
fn given_valid_fields_when_registering_then_assigns_id_and_trims() {
    // Arrange
    let mut veterinarians = VeterinarianService::new();

    // Act
    let vet = veterinarians
        .register(" Dr. Silva ", "555-0200", " Dermatology ")
        .unwrap();

    // Assert
    assert_eq!(vet.id, 1);
    assert_eq!(vet.name, "Dr. Silva");
    assert_eq!(vet.specialty, "Dermatology");
}

#[rstest]
#[case("", "555-0200", "Dermatology")]
#[case("Dr. Silva", "  ", "Dermatology")]
#[case("Dr. Silva", "555-0200", "")]
fn given_blank_required_field_when_registering_then_rejects(
    #[case] name: &str,
    #[case] phone: &str,
    #[case] specialty: &str,
) {
    // Arrange
    let mut veterinarians = VeterinarianService::new();

    // Act
    let result = veterinarians.register(name, phone, specialty);

    // Assert
    assert!(matches!(
        result,
        Err(DomainError::InvalidArgument { .. })
    ));
}

#[test]
fn given_existing_vet_when_updating_specialty_then_new_value_persists() {
    // Arrange
    let mut veterinarians = VeterinarianService::new();
    let vet = veterinarians
        .register("Dr. Silva", "555-0200", "Dermatology")
        .unwrap();

    // Act
    let updated = veterinarians
        .update(vet.id, "Dr. Silva", "555-0200", "Cardiology")
        .unwrap();

    // Assert
    assert!(updated);
    let found = veterinarians.find_by_id(vet.id).unwrap();
    assert_eq!(found.specialty, "Cardiology");
}

#[test]
fn given_unknown_id_when_updating_then_returns_false() {
    // Arrange
    let mut veterinarians = VeterinarianService::new();

    // Act
    let updated = veterinarians
        .update(7, "Dr. Silva", "555-0200", "Cardiology")
        .unwrap();

    // Assert
    assert!(!updated);
}

#[test]
fn given_two_vets_when_removing_first_then_listing_keeps_the_second() {
    // Arrange
    let mut veterinarians = VeterinarianService::new();
    let first = veterinarians
        .register("Dr. Silva", "555-0200", "Dermatology")
        .unwrap();
    let second = veterinarians
        .register("Dr. Costa", "555-0201", "Surgery")
        .unwrap();

    // Act
    assert!(veterinarians.remove(first.id));

    // Assert
    let remaining = veterinarians.list();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);
}
