use soroban_sdk::{contracterror, contracttype, Address, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    AppointmentNotFound = 4,
    PastDateTime = 5,
    DuplicateSlot = 6,
    TerminalState = 7,
    ModificationWindow = 8,
    InvalidTransition = 9,
    PastAppointment = 10,
    PastDate = 11,
    TimeWindow = 12,
    TimeGranularity = 13,
    FollowUpNotFound = 14,
    NothingToPropagate = 15,
    NotAPatient = 16,
    NotADoctor = 17,
    InvalidDate = 18,
}

/// Appointment lifecycle. Requested is the initial state; Rejected,
/// Completed and Cancelled are terminal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AppointmentStatus {
    Requested,
    Approved,
    Rejected,
    Completed,
    Cancelled,
}

/// What the assigned doctor does in a review.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReviewAction {
    Approve,
    Reject,
    Complete,
}

/// Dates are day numbers (days since the Unix epoch); times of day are
/// minutes after midnight.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Appointment {
    pub id: u64,
    pub patient: Address,
    pub doctor: Option<Address>,
    pub date: u64,
    pub time: u32,
    pub reason: String,
    pub doctor_notes: Option<String>,
    pub follow_up_date: Option<u64>,
    pub status: AppointmentStatus,
    pub created_by_family: Option<Address>,
    pub created_at: u64,
    pub updated_at: u64,
}

impl Appointment {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            AppointmentStatus::Rejected
                | AppointmentStatus::Completed
                | AppointmentStatus::Cancelled
        )
    }
}

/// Occupancy key for a bookable slot. Present iff an open appointment holds
/// (patient, date, time) — the uniqueness constraint that makes duplicate
/// bookings impossible rather than merely checked.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SlotKey {
    pub patient: Address,
    pub date: u64,
    pub time: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// actor-registry contract address
    Registry,
    /// family-access contract address (the gate)
    Gate,
    /// auto-increment counter for appointment ids
    Counter,
    /// id -> Appointment
    Appointment(u64),
    /// patient -> Vec<u64> of appointment ids
    PatientIndex(Address),
    /// doctor -> Vec<u64> of appointment ids
    DoctorIndex(Address),
    /// (patient, date, time) -> holding appointment id
    Slot(SlotKey),
}
