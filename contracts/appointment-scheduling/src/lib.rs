#![no_std]

mod storage;
mod types;
mod validation;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};
use storage::*;
pub use types::{Appointment, AppointmentStatus, Error, ReviewAction};

use actor_registry::{ActorRegistryClient, Role};
use family_access::FamilyAccessClient;

#[contract]
pub struct AppointmentScheduling;

#[contractimpl]
impl AppointmentScheduling {
    /// Wire the contract to the actor registry and the family-access gate.
    pub fn init(env: Env, registry: Address, gate: Address) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        set_registry(&env, &registry);
        set_gate(&env, &gate);
        Ok(())
    }

    /// Book an appointment for a patient, by the patient themselves or by a
    /// family member holding an approved link. Both sides are checked
    /// against the registry: `patient` must hold the patient role and
    /// `doctor` the doctor role. The requested date+time must not be in the
    /// past, and the patient's slot must be free of any other requested or
    /// approved appointment.
    pub fn request_appointment(
        env: Env,
        requester: Address,
        patient: Address,
        doctor: Address,
        date: u64,
        time: u32,
        reason: String,
    ) -> Result<u64, Error> {
        requester.require_auth();

        let registry = ActorRegistryClient::new(&env, &registry_address(&env)?);
        match registry.role_of(&patient) {
            Some(Role::Patient) => {}
            _ => return Err(Error::NotAPatient),
        }
        match registry.role_of(&doctor) {
            Some(Role::Doctor) => {}
            _ => return Err(Error::NotADoctor),
        }

        let booked_by_family = requester != patient;
        if booked_by_family && !family_can_manage(&env, &requester, &patient)? {
            return Err(Error::NotAuthorized);
        }

        let now = env.ledger().timestamp();
        validation::check_not_past(date, time, now)?;

        if slot_holder(&env, &patient, date, time).is_some() {
            return Err(Error::DuplicateSlot);
        }

        let id = next_appointment_id(&env);
        let appointment = Appointment {
            id,
            patient: patient.clone(),
            doctor: Some(doctor.clone()),
            date,
            time,
            reason,
            doctor_notes: None,
            follow_up_date: None,
            status: AppointmentStatus::Requested,
            created_by_family: if booked_by_family {
                Some(requester.clone())
            } else {
                None
            },
            created_at: now,
            updated_at: now,
        };

        save_appointment(&env, &appointment);
        occupy_slot(&env, &patient, date, time, id);
        index_for_patient(&env, &patient, id);
        index_for_doctor(&env, &doctor, id);

        env.events()
            .publish((symbol_short!("appt_req"), id), (patient, doctor));

        Ok(id)
    }

    /// Cancel a non-terminal appointment. Allowed for the owning patient or
    /// a family member passing the gate; anyone else sees the appointment
    /// as absent.
    pub fn cancel_appointment(env: Env, actor: Address, id: u64) -> Result<(), Error> {
        actor.require_auth();

        let mut appointment =
            load_appointment(&env, id).ok_or(Error::AppointmentNotFound)?;

        if actor != appointment.patient
            && !family_can_manage(&env, &actor, &appointment.patient)?
        {
            return Err(Error::AppointmentNotFound);
        }
        if appointment.is_terminal() {
            return Err(Error::TerminalState);
        }

        free_slot(&env, &appointment);
        appointment.status = AppointmentStatus::Cancelled;
        appointment.updated_at = env.ledger().timestamp();
        save_appointment(&env, &appointment);

        env.events().publish((symbol_short!("appt_can"), id), actor);

        Ok(())
    }

    /// The assigned doctor reviews an appointment: approve it, reject it, or
    /// complete it, optionally recording notes and a follow-up date.
    ///
    /// Notes and completion are only accepted inside the modification
    /// window: the calendar day of the appointment, while it is approved.
    /// Outside the window the call fails without mutating anything.
    pub fn review_appointment(
        env: Env,
        doctor: Address,
        id: u64,
        action: ReviewAction,
        notes: Option<String>,
        follow_up_date: Option<u64>,
    ) -> Result<Appointment, Error> {
        doctor.require_auth();

        let mut appointment =
            load_appointment(&env, id).ok_or(Error::AppointmentNotFound)?;
        if appointment.doctor.as_ref() != Some(&doctor) {
            return Err(Error::AppointmentNotFound);
        }
        if appointment.is_terminal() {
            return Err(Error::TerminalState);
        }

        let now = env.ledger().timestamp();
        let can_modify = validation::day_of(now) == appointment.date
            && matches!(appointment.status, AppointmentStatus::Approved);

        let has_notes = notes.as_ref().map_or(false, |n| n.len() > 0);
        if !can_modify && (has_notes || matches!(action, ReviewAction::Complete)) {
            return Err(Error::ModificationWindow);
        }

        if can_modify {
            if let Some(notes) = notes {
                // Empty notes are stored as empty, not cleared.
                appointment.doctor_notes = Some(notes);
            }
            appointment.follow_up_date = follow_up_date;
        }

        match action {
            ReviewAction::Approve => {
                appointment.status = AppointmentStatus::Approved;
            }
            ReviewAction::Reject => {
                if !matches!(appointment.status, AppointmentStatus::Requested) {
                    return Err(Error::InvalidTransition);
                }
                free_slot(&env, &appointment);
                appointment.status = AppointmentStatus::Rejected;
            }
            ReviewAction::Complete => {
                free_slot(&env, &appointment);
                appointment.status = AppointmentStatus::Completed;
            }
        }

        appointment.updated_at = now;
        save_appointment(&env, &appointment);

        env.events()
            .publish((symbol_short!("appt_rev"), id), appointment.status.clone());

        Ok(appointment)
    }

    /// Copy the doctor's notes from an appointment onto its follow-up: the
    /// distinct, still-open appointment of the same patient dated exactly
    /// the recorded follow-up date. Terminal appointments on that day are
    /// passed over.
    pub fn propagate_notes(env: Env, doctor: Address, id: u64) -> Result<u64, Error> {
        doctor.require_auth();

        let source = load_appointment(&env, id).ok_or(Error::AppointmentNotFound)?;
        if source.doctor.as_ref() != Some(&doctor) {
            return Err(Error::AppointmentNotFound);
        }

        let notes = match &source.doctor_notes {
            Some(notes) if notes.len() > 0 => notes.clone(),
            _ => return Err(Error::NothingToPropagate),
        };
        let follow_up = source.follow_up_date.ok_or(Error::FollowUpNotFound)?;

        let mut target: Option<Appointment> = None;
        for candidate_id in patient_index(&env, &source.patient).iter() {
            if candidate_id == id {
                continue;
            }
            if let Some(candidate) = load_appointment(&env, candidate_id) {
                if candidate.date == follow_up && !candidate.is_terminal() {
                    target = Some(candidate);
                    break;
                }
            }
        }
        let mut target = target.ok_or(Error::FollowUpNotFound)?;

        target.doctor_notes = Some(notes);
        target.updated_at = env.ledger().timestamp();
        save_appointment(&env, &target);

        env.events()
            .publish((symbol_short!("appt_fwd"), id), target.id);

        Ok(target.id)
    }

    /// Move a non-past appointment to a new slot. The new time must fall on
    /// the quarter-hour grid inside opening hours (07:00-20:00 inclusive).
    /// A successful reschedule leaves the appointment approved.
    pub fn reschedule_appointment(
        env: Env,
        doctor: Address,
        id: u64,
        new_date: u64,
        new_time: u32,
    ) -> Result<Appointment, Error> {
        doctor.require_auth();

        let mut appointment =
            load_appointment(&env, id).ok_or(Error::AppointmentNotFound)?;
        if appointment.doctor.as_ref() != Some(&doctor) {
            return Err(Error::AppointmentNotFound);
        }
        if appointment.is_terminal() {
            return Err(Error::TerminalState);
        }

        let today = validation::day_of(env.ledger().timestamp());
        if appointment.date < today {
            return Err(Error::PastAppointment);
        }
        if new_date < today {
            return Err(Error::PastDate);
        }
        validation::check_slot_time(new_time)?;

        if let Some(holder) = slot_holder(&env, &appointment.patient, new_date, new_time) {
            if holder != id {
                return Err(Error::DuplicateSlot);
            }
        }

        free_slot(&env, &appointment);
        appointment.date = new_date;
        appointment.time = new_time;
        appointment.status = AppointmentStatus::Approved;
        appointment.updated_at = env.ledger().timestamp();
        save_appointment(&env, &appointment);
        occupy_slot(&env, &appointment.patient, new_date, new_time, id);

        env.events()
            .publish((symbol_short!("appt_mov"), id), (new_date, new_time));

        Ok(appointment)
    }

    /// Fetch one appointment. Visible to the owning patient, the assigned
    /// doctor, and family members passing the gate; everyone else gets
    /// not-found, whether or not the id exists.
    pub fn get_appointment(env: Env, requester: Address, id: u64) -> Result<Appointment, Error> {
        requester.require_auth();

        let appointment =
            load_appointment(&env, id).ok_or(Error::AppointmentNotFound)?;
        if !can_view(&env, &requester, &appointment)? {
            return Err(Error::AppointmentNotFound);
        }
        Ok(appointment)
    }

    /// All of a patient's appointments, for the patient or a linked family
    /// member.
    pub fn appointments_of_patient(
        env: Env,
        requester: Address,
        patient: Address,
    ) -> Result<Vec<Appointment>, Error> {
        requester.require_auth();

        if requester != patient && !family_can_access(&env, &requester, &patient)? {
            return Err(Error::NotAuthorized);
        }

        Ok(collect(&env, patient_index(&env, &patient)))
    }

    /// All appointments assigned to a doctor.
    pub fn appointments_of_doctor(env: Env, doctor: Address) -> Vec<Appointment> {
        doctor.require_auth();
        collect(&env, doctor_index(&env, &doctor))
    }

    /// A patient's appointments falling within `days` days of `from_date`,
    /// inclusive. Backs the dashboard's upcoming-week view.
    pub fn upcoming_for_patient(
        env: Env,
        requester: Address,
        patient: Address,
        from_date: u64,
        days: u64,
    ) -> Result<Vec<Appointment>, Error> {
        requester.require_auth();

        if requester != patient && !family_can_access(&env, &requester, &patient)? {
            return Err(Error::NotAuthorized);
        }

        let until = from_date.checked_add(days).ok_or(Error::InvalidDate)?;
        let mut upcoming = Vec::new(&env);
        for id in patient_index(&env, &patient).iter() {
            if let Some(appointment) = load_appointment(&env, id) {
                if appointment.date >= from_date && appointment.date <= until {
                    upcoming.push_back(appointment);
                }
            }
        }
        Ok(upcoming)
    }
}

fn family_can_manage(env: &Env, family: &Address, patient: &Address) -> Result<bool, Error> {
    let gate = FamilyAccessClient::new(env, &gate_address(env)?);
    Ok(gate.can_manage_appointments(family, patient))
}

fn family_can_access(env: &Env, family: &Address, patient: &Address) -> Result<bool, Error> {
    let gate = FamilyAccessClient::new(env, &gate_address(env)?);
    Ok(gate.can_access_patient(family, patient))
}

fn can_view(env: &Env, requester: &Address, appointment: &Appointment) -> Result<bool, Error> {
    if *requester == appointment.patient {
        return Ok(true);
    }
    if appointment.doctor.as_ref() == Some(requester) {
        return Ok(true);
    }
    family_can_access(env, requester, &appointment.patient)
}

fn collect(env: &Env, ids: Vec<u64>) -> Vec<Appointment> {
    let mut appointments = Vec::new(env);
    for id in ids.iter() {
        if let Some(appointment) = load_appointment(env, id) {
            appointments.push_back(appointment);
        }
    }
    appointments
}
