use soroban_sdk::{Address, Env, String};

use crate::types::{Actor, DataKey, PatientProfile};

// -----------------------------------------------------------------------
// Actors
// -----------------------------------------------------------------------

pub fn save_actor(env: &Env, actor: &Actor) {
    env.storage()
        .persistent()
        .set(&DataKey::Actor(actor.account.clone()), actor);
}

pub fn load_actor(env: &Env, account: &Address) -> Option<Actor> {
    env.storage()
        .persistent()
        .get(&DataKey::Actor(account.clone()))
}

// -----------------------------------------------------------------------
// Identifier index (lowercased username/email -> account)
// -----------------------------------------------------------------------

pub fn save_identifier(env: &Env, normalized: &String, account: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Identifier(normalized.clone()), account);
}

pub fn lookup_identifier(env: &Env, normalized: &String) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Identifier(normalized.clone()))
}

pub fn has_identifier(env: &Env, normalized: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Identifier(normalized.clone()))
}

// -----------------------------------------------------------------------
// Patient profiles
// -----------------------------------------------------------------------

pub fn save_profile(env: &Env, profile: &PatientProfile) {
    env.storage()
        .persistent()
        .set(&DataKey::Profile(profile.account.clone()), profile);
}

pub fn load_profile(env: &Env, account: &Address) -> Option<PatientProfile> {
    env.storage()
        .persistent()
        .get(&DataKey::Profile(account.clone()))
}
