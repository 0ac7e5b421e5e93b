//! Tests for the generic entity store

use pawclinic::domain::{Owner, Store};

#[ctor::ctor]
fn init() {
    pawclinic::util::testing::init_test_setup();
}

fn owner(name: &str) -> Owner {
    Owner::new(name.to_string(), "555-0100".to_string())
}

#[test]
fn given_fresh_store_when_adding_then_ids_are_sequential_from_one() {
    // Arrange
    let mut store = Store::new();

    // Act
    let first = store.add(owner("Alice"));
    let second = store.add(owner("Bob"));
    let third = store.add(owner("Carol"));

    // Assert - ids follow call order regardless of content
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(third.id, 3);
}

#[test]
fn given_never_assigned_id_when_updating_then_returns_false_and_store_is_unchanged() {
    // Arrange
    let mut store = Store::new();
    let alice = store.add(owner("Alice"));

    let mut ghost = owner("Ghost");
    ghost.id = 42;

    // Act
    let updated = store.update(ghost);

    // Assert - no insertion side effect
    assert!(!updated);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(alice.id).unwrap().name, "Alice");
}

#[test]
fn given_removed_record_when_updating_by_its_old_id_then_returns_false() {
    // Arrange
    let mut store = Store::new();
    let alice = store.add(owner("Alice"));
    assert!(store.remove(alice.id));

    // Act
    let updated = store.update(alice);

    // Assert
    assert!(!updated);
    assert!(store.is_empty());
}

#[test]
fn given_removed_record_when_removing_again_then_returns_false() {
    // Arrange
    let mut store = Store::new();
    let alice = store.add(owner("Alice"));

    // Act & Assert - idempotent false on the second call
    assert!(store.remove(alice.id));
    assert!(!store.remove(alice.id));
}

#[test]
fn given_interleaved_adds_and_removes_when_listing_then_insertion_order_survives() {
    // Arrange
    let mut store = Store::new();
    let a = store.add(owner("A"));
    let _b = store.add(owner("B"));
    store.remove(a.id);
    let _c = store.add(owner("C"));

    // Act
    let names: Vec<String> = store.list().into_iter().map(|o| o.name).collect();

    // Assert - [B, C], and C got a fresh id
    assert_eq!(names, vec!["B", "C"]);
    assert_eq!(store.get(3).unwrap().name, "C");
}

#[test]
fn given_adds_and_removes_when_counting_then_len_tracks_live_records() {
    // Arrange
    let mut store = Store::new();
    assert!(store.is_empty());

    // Act
    let a = store.add(owner("A"));
    store.add(owner("B"));
    store.remove(a.id);

    // Assert
    assert_eq!(store.len(), 1);
}
