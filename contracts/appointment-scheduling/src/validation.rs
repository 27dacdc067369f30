use crate::types::Error;

pub const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_MINUTE: u64 = 60;
const MINUTES_PER_DAY: u32 = 1_440;

/// Bookable hours, inclusive at both ends: 07:00 to 20:00.
const OPENING_MINUTE: u32 = 7 * 60;
const CLOSING_MINUTE: u32 = 20 * 60;

/// Reschedule targets must land on the quarter-hour grid.
const SLOT_GRANULARITY: u32 = 15;

pub fn day_of(timestamp: u64) -> u64 {
    timestamp / SECONDS_PER_DAY
}

fn instant_of(date: u64, time: u32) -> Option<u64> {
    date.checked_mul(SECONDS_PER_DAY)?
        .checked_add(time as u64 * SECONDS_PER_MINUTE)
}

/// A new booking must not lie in the past relative to `now`. Dates too
/// large to place on the timestamp line are rejected outright.
pub fn check_not_past(date: u64, time: u32, now: u64) -> Result<(), Error> {
    if time >= MINUTES_PER_DAY {
        return Err(Error::TimeWindow);
    }
    let instant = instant_of(date, time).ok_or(Error::InvalidDate)?;
    if instant < now {
        return Err(Error::PastDateTime);
    }
    Ok(())
}

/// Window first, then granularity: 09:10 is inside hours but off-grid.
pub fn check_slot_time(time: u32) -> Result<(), Error> {
    if !(OPENING_MINUTE..=CLOSING_MINUTE).contains(&time) {
        return Err(Error::TimeWindow);
    }
    if time % SLOT_GRANULARITY != 0 {
        return Err(Error::TimeGranularity);
    }
    Ok(())
}
