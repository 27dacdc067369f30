#![no_std]

mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};
use storage::*;
pub use types::{Error, FamilyPatientLink, LinkAction, LinkStatus, RequestOutcome};

use actor_registry::{ActorRegistryClient, Role};

#[contract]
pub struct FamilyAccess;

#[contractimpl]
impl FamilyAccess {
    /// Wire the contract to the actor registry it resolves identities with.
    pub fn init(env: Env, registry: Address) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        set_registry(&env, &registry);
        Ok(())
    }

    /// A family member asks to be linked to a patient, addressed by username
    /// or email (case-insensitive).
    ///
    /// At most one link row exists per (family_member, patient) pair:
    /// repeated requests against a pending or approved link are reported as
    /// no-op outcomes, and a rejected link is flipped back to pending with
    /// the relation text overwritten.
    pub fn request_link(
        env: Env,
        family_member: Address,
        identifier: String,
        relation: String,
    ) -> Result<RequestOutcome, Error> {
        family_member.require_auth();

        let registry = ActorRegistryClient::new(&env, &registry_address(&env)?);
        match registry.role_of(&family_member) {
            Some(Role::Family) => {}
            _ => return Err(Error::NotFamilyRole),
        }

        let patient = registry
            .resolve_patient(&identifier)
            .ok_or(Error::PatientNotFound)?;
        if patient == family_member {
            return Err(Error::SelfLink);
        }
        if !registry.has_patient_profile(&patient) {
            return Err(Error::NotAPatient);
        }

        let now = env.ledger().timestamp();
        match load_link(&env, &family_member, &patient) {
            None => {
                let link = FamilyPatientLink {
                    family_member: family_member.clone(),
                    patient: patient.clone(),
                    relation,
                    status: LinkStatus::Pending,
                    is_active: false,
                    created_at: now,
                    updated_at: now,
                };
                save_link(&env, &link);
                index_link(&env, &family_member, &patient);

                env.events().publish(
                    (symbol_short!("link_req"), family_member, patient),
                    symbol_short!("created"),
                );
                Ok(RequestOutcome::Created)
            }
            Some(mut link) => match link.status {
                LinkStatus::Approved => Ok(RequestOutcome::AlreadyLinked),
                LinkStatus::Pending => Ok(RequestOutcome::AlreadyPending),
                LinkStatus::Rejected => {
                    link.relation = relation;
                    link.set_status(LinkStatus::Pending, now);
                    save_link(&env, &link);

                    env.events().publish(
                        (symbol_short!("link_req"), family_member, patient),
                        symbol_short!("resubmit"),
                    );
                    Ok(RequestOutcome::Resubmitted)
                }
            },
        }
    }

    /// The patient answers a link request. Approve activates the link,
    /// reject deactivates it. Only the patient named by the link can
    /// respond; anyone else sees the link as absent.
    pub fn respond(
        env: Env,
        patient: Address,
        family_member: Address,
        action: LinkAction,
    ) -> Result<FamilyPatientLink, Error> {
        patient.require_auth();

        let mut link =
            load_link(&env, &family_member, &patient).ok_or(Error::LinkNotFound)?;

        let status = match action {
            LinkAction::Approve => LinkStatus::Approved,
            LinkAction::Reject => LinkStatus::Rejected,
        };
        link.set_status(status, env.ledger().timestamp());
        save_link(&env, &link);

        env.events().publish(
            (symbol_short!("link_resp"), family_member, patient),
            link.status.clone(),
        );
        Ok(link)
    }

    /// Access gate: true iff an approved, active link binds the pair.
    /// Pure read, no authorization, no side effects.
    pub fn can_access_patient(env: Env, family_member: Address, patient: Address) -> bool {
        match load_link(&env, &family_member, &patient) {
            Some(link) => matches!(link.status, LinkStatus::Approved) && link.is_active,
            None => false,
        }
    }

    /// Same predicate as `can_access_patient` today; kept as a separately
    /// named capability so appointment management can diverge later.
    pub fn can_manage_appointments(env: Env, family_member: Address, patient: Address) -> bool {
        Self::can_access_patient(env, family_member, patient)
    }

    pub fn get_link(
        env: Env,
        family_member: Address,
        patient: Address,
    ) -> Result<FamilyPatientLink, Error> {
        load_link(&env, &family_member, &patient).ok_or(Error::LinkNotFound)
    }

    /// All links a family member has ever requested, every status included.
    /// Dashboard buckets (approved / pending / rejected) filter over this.
    pub fn links_of_family(env: Env, family_member: Address) -> Vec<FamilyPatientLink> {
        let mut links = Vec::new(&env);
        for patient in patients_of(&env, &family_member).iter() {
            if let Some(link) = load_link(&env, &family_member, &patient) {
                links.push_back(link);
            }
        }
        links
    }

    /// All link requests addressed to a patient.
    pub fn links_of_patient(env: Env, patient: Address) -> Vec<FamilyPatientLink> {
        let mut links = Vec::new(&env);
        for family_member in members_of(&env, &patient).iter() {
            if let Some(link) = load_link(&env, &family_member, &patient) {
                links.push_back(link);
            }
        }
        links
    }
}
