use soroban_sdk::{Address, Env, Vec};

use crate::types::{Appointment, DataKey, Error, SlotKey};

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

pub fn set_gate(env: &Env, gate: &Address) {
    env.storage().instance().set(&DataKey::Gate, gate);
}

pub fn gate_address(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Gate)
        .ok_or(Error::NotInitialized)
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Gate)
}

// -----------------------------------------------------------------------
// Counter
// -----------------------------------------------------------------------

pub fn next_appointment_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .persistent()
        .get(&DataKey::Counter)
        .unwrap_or(0);
    let next = id + 1;
    env.storage().persistent().set(&DataKey::Counter, &next);
    next
}

// -----------------------------------------------------------------------
// Appointments
// -----------------------------------------------------------------------

pub fn save_appointment(env: &Env, appointment: &Appointment) {
    env.storage()
        .persistent()
        .set(&DataKey::Appointment(appointment.id), appointment);
}

pub fn load_appointment(env: &Env, id: u64) -> Option<Appointment> {
    env.storage().persistent().get(&DataKey::Appointment(id))
}

pub fn index_for_patient(env: &Env, patient: &Address, id: u64) {
    let key = DataKey::PatientIndex(patient.clone());
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env));
    ids.push_back(id);
    env.storage().persistent().set(&key, &ids);
}

pub fn index_for_doctor(env: &Env, doctor: &Address, id: u64) {
    let key = DataKey::DoctorIndex(doctor.clone());
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env));
    ids.push_back(id);
    env.storage().persistent().set(&key, &ids);
}

pub fn patient_index(env: &Env, patient: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::PatientIndex(patient.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn doctor_index(env: &Env, doctor: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::DoctorIndex(doctor.clone()))
        .unwrap_or(Vec::new(env))
}

// -----------------------------------------------------------------------
// Slot occupancy
// -----------------------------------------------------------------------

fn slot_key(patient: &Address, date: u64, time: u32) -> DataKey {
    DataKey::Slot(SlotKey {
        patient: patient.clone(),
        date,
        time,
    })
}

pub fn slot_holder(env: &Env, patient: &Address, date: u64, time: u32) -> Option<u64> {
    env.storage().persistent().get(&slot_key(patient, date, time))
}

pub fn occupy_slot(env: &Env, patient: &Address, date: u64, time: u32, id: u64) {
    env.storage()
        .persistent()
        .set(&slot_key(patient, date, time), &id);
}

/// Release the slot an appointment currently holds, if it still holds it.
pub fn free_slot(env: &Env, appointment: &Appointment) {
    let key = slot_key(&appointment.patient, appointment.date, appointment.time);
    if env.storage().persistent().get::<DataKey, u64>(&key) == Some(appointment.id) {
        env.storage().persistent().remove(&key);
    }
}
