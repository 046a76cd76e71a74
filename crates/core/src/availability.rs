//! # Availability
//!
//! Lists a trainer's open half-hour slots over a range:
//!
//! 1. Every calendar day from the range start's date up to, but excluding,
//!    the range end's date is visited. Saturdays and Sundays are skipped.
//! 2. Each business day yields the slots 08:00-08:30 through 16:30-17:00.
//! 3. The trainer's bookings, sorted by start, are walked with a cursor in
//!    step with the generated slots. A slot whose start and end match the
//!    booking under the cursor is dropped; every other slot is emitted.
//!
//! Range bounds that are not midnight still evaluate whole days.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::debug;

use crate::{
    errors::{BookingResult, RuleViolation},
    models::{
        appointment::{Appointment, RangeQuery},
        timeslot::Timeslot,
    },
    range::{parse_availability_range, DateRange},
    store::AppointmentStore,
    time::{business_offset, is_business_day, slot_length, CLOSING_HOUR, OPENING_HOUR},
};

/// Validates the raw query, then computes the trainer's open slots.
pub async fn compute_availability(
    store: &dyn AppointmentStore,
    trainer_id: i64,
    query: &RangeQuery,
    now: DateTime<Utc>,
) -> BookingResult<Vec<Timeslot>> {
    if trainer_id < 1 {
        return Err(RuleViolation::InvalidTrainer.into());
    }

    let range = parse_availability_range(query, now)?;
    availability_in_range(store, trainer_id, &range).await
}

/// Open slots for an already validated range.
pub async fn availability_in_range(
    store: &dyn AppointmentStore,
    trainer_id: i64,
    range: &DateRange,
) -> BookingResult<Vec<Timeslot>> {
    if range.start.date_naive() >= range.end.date_naive() {
        return Ok(Vec::new());
    }

    // The first day is evaluated from its opening hour even when the range
    // starts later, so its bookings must be fetched too.
    let window = DateRange {
        start: start_of_day(range.start.date_naive()).unwrap_or(range.start),
        end: range.end,
    };
    let booked = store.fetch_by_trainer_and_range(trainer_id, &window).await?;

    let slots = open_slots(range, &booked);
    debug!(
        "Trainer {} has {} open slots ({} booked) between {} and {}",
        trainer_id,
        slots.len(),
        booked.len(),
        range.start,
        range.end
    );

    Ok(slots)
}

/// Generates the business slots of `range` and drops those in `booked`.
pub fn open_slots(range: &DateRange, booked: &[Appointment]) -> Vec<Timeslot> {
    let mut booked: Vec<&Appointment> = booked.iter().collect();
    booked.sort_by_key(|appointment| appointment.starts_at);
    let mut cursor = booked.into_iter().peekable();

    let last_day = range.end.date_naive();
    let business_days = range
        .start
        .date_naive()
        .iter_days()
        .take_while(|day| *day < last_day)
        .filter(|day| is_business_day(day.weekday()));

    let mut slots = Vec::new();
    for day in business_days {
        let Some(midnight) = start_of_day(day) else {
            continue;
        };
        let opening = midnight + Duration::hours(OPENING_HOUR.into());
        let closing = opening + Duration::hours((CLOSING_HOUR - OPENING_HOUR).into());

        let mut candidate = opening;
        while candidate < closing {
            let slot_end = candidate + slot_length();

            while cursor
                .peek()
                .is_some_and(|appointment| appointment.starts_at < candidate)
            {
                cursor.next();
            }

            match cursor.peek() {
                Some(appointment)
                    if appointment.starts_at == candidate && appointment.ends_at == slot_end =>
                {
                    cursor.next();
                }
                _ => slots.push(Timeslot {
                    starts_at: candidate,
                    ends_at: slot_end,
                }),
            }

            candidate = slot_end;
        }
    }

    slots
}

fn start_of_day(day: NaiveDate) -> Option<DateTime<FixedOffset>> {
    business_offset()
        .from_local_datetime(&day.and_time(NaiveTime::MIN))
        .single()
}
