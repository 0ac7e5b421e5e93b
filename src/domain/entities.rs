//! Domain entities: core data structures

use std::fmt;

use chrono::NaiveDate;

/// Numeric identifier assigned by a [`Store`](crate::domain::Store).
///
/// Valid identifiers start at 1; `0` marks a not-yet-stored entity.
pub type EntityId = u32;

/// Capability for entities that carry a store-assigned identifier.
///
/// Any type kept in a `Store` must expose its identifier slot; the store
/// fills it exactly once on insertion.
pub trait Identified {
    fn id(&self) -> EntityId;
    fn set_id(&mut self, id: EntityId);
}

/// A person responsible for one or more animals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
}

impl Owner {
    pub fn new(name: String, phone: String) -> Self {
        Self { id: 0, name, phone }
    }
}

impl Identified for Owner {
    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Owner #{}: {} ({})", self.id, self.name, self.phone)
    }
}

/// A veterinarian on the clinic staff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Veterinarian {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    pub specialty: String,
}

impl Veterinarian {
    pub fn new(name: String, phone: String, specialty: String) -> Self {
        Self {
            id: 0,
            name,
            phone,
            specialty,
        }
    }
}

impl Identified for Veterinarian {
    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl fmt::Display for Veterinarian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Veterinarian #{}: {} ({}), {}",
            self.id, self.name, self.phone, self.specialty
        )
    }
}

/// Kind of animal treated by the clinic.
///
/// The kind determines only the announce behavior, not stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalKind {
    Dog,
    Cat,
}

impl AnimalKind {
    /// Display label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Cat => "Cat",
        }
    }

    /// The sound this kind of animal makes.
    pub fn sound(&self) -> &'static str {
        match self {
            Self::Dog => "Woof woof!",
            Self::Cat => "Meow!",
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An animal registered with the clinic.
///
/// The owning [`Owner`] is carried as a value copy supplied by the caller;
/// the store does not resolve cross-entity links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub id: EntityId,
    pub kind: AnimalKind,
    pub name: String,
    /// Approximate age in years. Non-negative once validated by the service.
    pub age: i32,
    /// Species or breed description.
    pub species: String,
    pub owner: Owner,
}

impl Animal {
    pub fn new(kind: AnimalKind, name: String, age: i32, species: String, owner: Owner) -> Self {
        Self {
            id: 0,
            kind,
            name,
            age,
            species,
            owner,
        }
    }

    /// The sound this animal makes, dispatched on its kind.
    pub fn sound(&self) -> &'static str {
        self.kind.sound()
    }
}

impl Identified for Animal {
    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{}: {}, {} years, {}, owned by {}",
            self.kind, self.id, self.name, self.age, self.species, self.owner.name
        )
    }
}

/// A scheduled appointment between an animal and a veterinarian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: EntityId,
    pub date: NaiveDate,
    pub animal: Animal,
    pub veterinarian: Veterinarian,
    /// Free-text notes; may be empty, never "unset".
    pub notes: String,
}

impl Appointment {
    pub fn new(date: NaiveDate, animal: Animal, veterinarian: Veterinarian, notes: String) -> Self {
        Self {
            id: 0,
            date,
            animal,
            veterinarian,
            notes,
        }
    }
}

impl Identified for Appointment {
    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Appointment #{}: {} for {} with {}",
            self.id, self.date, self.animal.name, self.veterinarian.name
        )
    }
}
