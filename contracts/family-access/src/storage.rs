use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, Error, FamilyPatientLink, LinkKey};

// -----------------------------------------------------------------------
// Configuration
// -----------------------------------------------------------------------

pub fn set_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&DataKey::Registry, registry);
}

pub fn registry_address(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Registry)
        .ok_or(Error::NotInitialized)
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Registry)
}

// -----------------------------------------------------------------------
// Links
// -----------------------------------------------------------------------

fn link_key(family_member: &Address, patient: &Address) -> DataKey {
    DataKey::Link(LinkKey {
        family_member: family_member.clone(),
        patient: patient.clone(),
    })
}

pub fn save_link(env: &Env, link: &FamilyPatientLink) {
    env.storage()
        .persistent()
        .set(&link_key(&link.family_member, &link.patient), link);
}

pub fn load_link(
    env: &Env,
    family_member: &Address,
    patient: &Address,
) -> Option<FamilyPatientLink> {
    env.storage()
        .persistent()
        .get(&link_key(family_member, patient))
}

// -----------------------------------------------------------------------
// Indexes (appended once, at first creation of the pair)
// -----------------------------------------------------------------------

pub fn index_link(env: &Env, family_member: &Address, patient: &Address) {
    let family_key = DataKey::FamilyIndex(family_member.clone());
    let mut patients: Vec<Address> = env
        .storage()
        .persistent()
        .get(&family_key)
        .unwrap_or(Vec::new(env));
    patients.push_back(patient.clone());
    env.storage().persistent().set(&family_key, &patients);

    let patient_key = DataKey::PatientIndex(patient.clone());
    let mut members: Vec<Address> = env
        .storage()
        .persistent()
        .get(&patient_key)
        .unwrap_or(Vec::new(env));
    members.push_back(family_member.clone());
    env.storage().persistent().set(&patient_key, &members);
}

pub fn patients_of(env: &Env, family_member: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::FamilyIndex(family_member.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn members_of(env: &Env, patient: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::PatientIndex(patient.clone()))
        .unwrap_or(Vec::new(env))
}
