#![no_std]

mod storage;
mod types;
mod validation;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String};
use storage::*;
pub use types::{Actor, Error, PatientProfile, Role};

#[contract]
pub struct ActorRegistry;

#[contractimpl]
impl ActorRegistry {
    /// Register an account under one of the three roles, with its login
    /// identifiers. Both identifiers are indexed case-insensitively.
    pub fn register_actor(
        env: Env,
        account: Address,
        role: Role,
        username: String,
        email: String,
    ) -> Result<(), Error> {
        account.require_auth();

        if load_actor(&env, &account).is_some() {
            return Err(Error::AlreadyRegistered);
        }

        let username_key = validation::normalize_identifier(&env, &username)?;
        let email_key = validation::normalize_identifier(&env, &email)?;

        if has_identifier(&env, &username_key) || has_identifier(&env, &email_key) {
            return Err(Error::IdentifierTaken);
        }

        let actor = Actor {
            account: account.clone(),
            role,
            username,
            email,
            registered_at: env.ledger().timestamp(),
        };

        save_actor(&env, &actor);
        save_identifier(&env, &username_key, &account);
        save_identifier(&env, &email_key, &account);

        env.events()
            .publish((symbol_short!("actor_reg"), account), role);

        Ok(())
    }

    /// Attach the clinical profile to a registered patient account.
    pub fn create_patient_profile(
        env: Env,
        account: Address,
        phone: String,
        date_of_birth: Option<u64>,
        blood_group: String,
        allergies: String,
        chronic_conditions: String,
    ) -> Result<(), Error> {
        account.require_auth();

        let actor = load_actor(&env, &account).ok_or(Error::ActorNotFound)?;
        if !matches!(actor.role, Role::Patient) {
            return Err(Error::NotAPatient);
        }
        if load_profile(&env, &account).is_some() {
            return Err(Error::ProfileExists);
        }

        let profile = PatientProfile {
            account: account.clone(),
            phone,
            date_of_birth,
            blood_group,
            allergies,
            chronic_conditions,
            created_at: env.ledger().timestamp(),
        };

        save_profile(&env, &profile);

        env.events()
            .publish((symbol_short!("prof_new"), account), symbol_short!("success"));

        Ok(())
    }

    pub fn role_of(env: Env, account: Address) -> Option<Role> {
        load_actor(&env, &account).map(|actor| actor.role)
    }

    pub fn get_actor(env: Env, account: Address) -> Result<Actor, Error> {
        load_actor(&env, &account).ok_or(Error::ActorNotFound)
    }

    pub fn has_patient_profile(env: Env, account: Address) -> bool {
        load_profile(&env, &account).is_some()
    }

    pub fn get_patient_profile(env: Env, account: Address) -> Result<PatientProfile, Error> {
        load_profile(&env, &account).ok_or(Error::ProfileNotFound)
    }

    /// Case-insensitive lookup by username or email. Only resolves accounts
    /// holding the patient role; anything else is reported as absent.
    pub fn resolve_patient(env: Env, identifier: String) -> Option<Address> {
        let key = match validation::normalize_identifier(&env, &identifier) {
            Ok(key) => key,
            Err(_) => return None,
        };

        let account = lookup_identifier(&env, &key)?;
        match load_actor(&env, &account) {
            Some(actor) if matches!(actor.role, Role::Patient) => Some(account),
            _ => None,
        }
    }
}
