#![no_std]

mod types;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Vec};
pub use types::{AdherenceStats, Error, IntakeLog, IntakeStatus};
use types::DataKey;

const SECONDS_PER_DAY: u64 = 86_400;

#[contract]
pub struct AdherenceTracking;

#[contractimpl]
impl AdherenceTracking {
    /// Record whether a scheduled dose was taken, missed or skipped on a
    /// given day (day number since the Unix epoch).
    pub fn record_intake(
        env: Env,
        patient: Address,
        schedule_id: u64,
        date: u64,
        status: IntakeStatus,
    ) -> Result<(), Error> {
        patient.require_auth();

        let now = env.ledger().timestamp();
        if date > now / SECONDS_PER_DAY {
            return Err(Error::FutureDate);
        }

        let log = IntakeLog {
            patient: patient.clone(),
            schedule_id,
            date,
            status,
            recorded_at: now,
        };

        let key = DataKey::Logs(patient.clone());
        let mut logs: Vec<IntakeLog> = env
            .storage()
            .persistent()
            .get(&key)
            .unwrap_or(Vec::new(&env));
        logs.push_back(log);
        env.storage().persistent().set(&key, &logs);

        env.events()
            .publish((symbol_short!("intake"), patient), (schedule_id, date));

        Ok(())
    }

    /// Adherence over the trailing `days` days, today included. Taken counts
    /// Taken; missed counts both Missed and Skipped.
    pub fn adherence_stats(env: Env, patient: Address, days: u64) -> Result<AdherenceStats, Error> {
        if days == 0 {
            return Err(Error::InvalidWindow);
        }

        let today = env.ledger().timestamp() / SECONDS_PER_DAY;
        let start = today.saturating_sub(days);

        let logs: Vec<IntakeLog> = env
            .storage()
            .persistent()
            .get(&DataKey::Logs(patient))
            .unwrap_or(Vec::new(&env));

        let mut total: u32 = 0;
        let mut taken: u32 = 0;
        let mut missed: u32 = 0;
        for log in logs.iter() {
            if log.date < start || log.date > today {
                continue;
            }
            total += 1;
            match log.status {
                IntakeStatus::Taken => taken += 1,
                IntakeStatus::Missed | IntakeStatus::Skipped => missed += 1,
            }
        }

        // Tenths of a percent, rounded half-up.
        let adherence_tenths = if total == 0 {
            None
        } else {
            Some(((taken as u64 * 1000 * 2 + total as u64) / (2 * total as u64)) as u32)
        };

        Ok(AdherenceStats {
            total,
            taken,
            missed,
            adherence_tenths,
        })
    }
}
