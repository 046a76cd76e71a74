//! # Appointment rules
//!
//! Decides whether a proposed `(user, trainer, start, end)` may become an
//! appointment. Rules run in a fixed order and the first failure is the one
//! reported:
//!
//! 1. user id is positive
//! 2. trainer id is positive
//! 3. both instants are normalized into the business offset
//! 4. start is at least one hour after "now"
//! 5. start is strictly before end
//! 6. start hour in `[8, 17)`, end hour in `[8, 17]`
//! 7. both fall on Monday to Friday
//! 8. both sit exactly on `:00` or `:30`
//! 9. end is exactly start + 30 minutes

use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, FixedOffset, TimeZone, Timelike, Utc};

use crate::{
    errors::{BookingResult, RuleViolation},
    models::appointment::NewAppointment,
    time::{
        is_business_day, normalize, parse_timestamp, slot_length, Clock, CLOSING_HOUR,
        OPENING_HOUR,
    },
};

/// Minimum gap between "now" and an appointment's start.
pub const MIN_LEAD_TIME_MINUTES: i64 = 60;

/// Validates candidates against the current time of its clock.
///
/// Owned by the service root and handed to whoever needs it, so tests can
/// freeze time by passing a [`crate::time::FixedClock`].
#[derive(Clone)]
pub struct AppointmentValidator {
    clock: Arc<dyn Clock>,
}

impl AppointmentValidator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Runs every rule against already-parsed instants.
    pub fn validate<Tz: TimeZone>(
        &self,
        user_id: i64,
        trainer_id: i64,
        starts_at: &DateTime<Tz>,
        ends_at: &DateTime<Tz>,
    ) -> Result<NewAppointment, RuleViolation> {
        validate_at(user_id, trainer_id, starts_at, ends_at, self.now())
    }

    /// Parses RFC3339 inputs, then validates them. Participant ids are
    /// checked before the timestamps are parsed.
    pub fn validate_and_build_appointment(
        &self,
        user_id: i64,
        trainer_id: i64,
        start_raw: &str,
        end_raw: &str,
    ) -> BookingResult<NewAppointment> {
        check_participants(user_id, trainer_id)?;

        let starts_at = parse_timestamp(start_raw, "starts_at")?;
        let ends_at = parse_timestamp(end_raw, "ends_at")?;

        Ok(self.validate(user_id, trainer_id, &starts_at, &ends_at)?)
    }
}

impl std::fmt::Debug for AppointmentValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppointmentValidator").finish_non_exhaustive()
    }
}

/// The pure form of [`AppointmentValidator::validate`].
pub fn validate_at<Tz: TimeZone>(
    user_id: i64,
    trainer_id: i64,
    starts_at: &DateTime<Tz>,
    ends_at: &DateTime<Tz>,
    now: DateTime<Utc>,
) -> Result<NewAppointment, RuleViolation> {
    check_participants(user_id, trainer_id)?;

    let starts_at = normalize(starts_at);
    let ends_at = normalize(ends_at);

    let earliest_start = normalize(&(now + Duration::minutes(MIN_LEAD_TIME_MINUTES)));
    if starts_at < earliest_start {
        return Err(RuleViolation::InsufficientLeadTime);
    }

    if starts_at >= ends_at {
        return Err(RuleViolation::StartNotBeforeEnd);
    }

    // An end reading exactly 17:xx is allowed so that 16:30-17:00 fits.
    if !(OPENING_HOUR..CLOSING_HOUR).contains(&starts_at.hour())
        || !(OPENING_HOUR..=CLOSING_HOUR).contains(&ends_at.hour())
    {
        return Err(RuleViolation::OutsideBusinessHours);
    }

    if !is_business_day(starts_at.weekday()) || !is_business_day(ends_at.weekday()) {
        return Err(RuleViolation::NotBusinessDay);
    }

    if !is_half_hour_aligned(&starts_at) || !is_half_hour_aligned(&ends_at) {
        return Err(RuleViolation::NotHalfHourAligned);
    }

    if ends_at - starts_at != slot_length() {
        return Err(RuleViolation::NotThirtyMinuteSlot);
    }

    Ok(NewAppointment {
        user_id,
        trainer_id,
        starts_at,
        ends_at,
    })
}

fn check_participants(user_id: i64, trainer_id: i64) -> Result<(), RuleViolation> {
    if user_id < 1 {
        return Err(RuleViolation::InvalidUser);
    }
    if trainer_id < 1 {
        return Err(RuleViolation::InvalidTrainer);
    }
    Ok(())
}

fn is_half_hour_aligned(instant: &DateTime<FixedOffset>) -> bool {
    matches!(instant.minute(), 0 | 30) && instant.second() == 0 && instant.nanosecond() == 0
}
