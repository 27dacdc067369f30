use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidWindow = 1,
    FutureDate = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IntakeStatus {
    Taken,
    Missed,
    Skipped,
}

/// One recorded intake against a medicine schedule, dated by day number.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IntakeLog {
    pub patient: Address,
    pub schedule_id: u64,
    pub date: u64,
    pub status: IntakeStatus,
    pub recorded_at: u64,
}

/// Adherence over a trailing window. The percentage is carried as tenths of
/// a percent (667 = 66.7%); None when the window holds no logs at all.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdherenceStats {
    pub total: u32,
    pub taken: u32,
    pub missed: u32,
    pub adherence_tenths: Option<u32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// patient -> Vec<IntakeLog>
    Logs(Address),
}
