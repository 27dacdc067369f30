use soroban_sdk::{contracterror, contracttype, Address, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotFamilyRole = 3,
    PatientNotFound = 4,
    NotAPatient = 5,
    SelfLink = 6,
    LinkNotFound = 7,
}

/// Lifecycle of a family-to-patient link. Pending is the initial state,
/// Approved grants access, Rejected can be reopened by resubmission.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LinkStatus {
    Pending,
    Approved,
    Rejected,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LinkAction {
    Approve,
    Reject,
}

/// What happened to a link request. Mirrors the user-visible messages of the
/// request flow: duplicates are reported, never stored twice.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RequestOutcome {
    Created,
    Resubmitted,
    AlreadyLinked,
    AlreadyPending,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FamilyPatientLink {
    pub family_member: Address,
    pub patient: Address,
    pub relation: String,
    pub status: LinkStatus,
    pub is_active: bool,
    pub created_at: u64,
    pub updated_at: u64,
}

impl FamilyPatientLink {
    /// Single point of mutation for status, keeping the invariant
    /// `is_active == (status == Approved)` at every observable state.
    pub fn set_status(&mut self, status: LinkStatus, now: u64) {
        self.is_active = matches!(status, LinkStatus::Approved);
        self.status = status;
        self.updated_at = now;
    }
}

/// Composite key for a link. One row per (family_member, patient) pair.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinkKey {
    pub family_member: Address,
    pub patient: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// actor-registry contract address
    Registry,
    /// (family_member, patient) -> FamilyPatientLink
    Link(LinkKey),
    /// family_member -> Vec<Address> of patients ever requested
    FamilyIndex(Address),
    /// patient -> Vec<Address> of family members ever requesting
    PatientIndex(Address),
}
