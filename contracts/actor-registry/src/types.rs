use soroban_sdk::{contracterror, contracttype, Address, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyRegistered = 1,
    IdentifierTaken = 2,
    InvalidIdentifier = 3,
    ActorNotFound = 4,
    NotAPatient = 5,
    ProfileExists = 6,
    ProfileNotFound = 7,
}

/// Closed role set. Every account holds exactly one role for its lifetime.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Patient,
    Doctor,
    Family,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Actor {
    pub account: Address,
    pub role: Role,
    pub username: String,
    pub email: String,
    pub registered_at: u64,
}

/// Clinical profile attached to a patient account. Family links can only
/// target accounts that carry one of these.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientProfile {
    pub account: Address,
    pub phone: String,
    pub date_of_birth: Option<u64>,
    pub blood_group: String,
    pub allergies: String,
    pub chronic_conditions: String,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// account -> Actor
    Actor(Address),
    /// lowercased username or email -> account
    Identifier(String),
    /// account -> PatientProfile
    Profile(Address),
}
