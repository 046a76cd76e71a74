//! Business-time helpers.
//!
//! All hour, weekday and alignment rules are offset dependent, so every
//! instant is moved into [`business_offset`] before it is inspected. The
//! offset is constant: there are no daylight-saving transitions.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc, Weekday};

use crate::errors::RangeViolation;

/// Display name of the business offset, used in rule messages.
pub const BUSINESS_TZ_NAME: &str = "PST";

/// Seconds east of UTC for the business offset.
pub const BUSINESS_UTC_OFFSET_SECS: i32 = -8 * 60 * 60;

/// First bookable hour of a business day.
pub const OPENING_HOUR: u32 = 8;

/// Hour at which the last slot must have ended.
pub const CLOSING_HOUR: u32 = 17;

/// Length of every appointment and timeslot, in minutes.
pub const SLOT_MINUTES: i64 = 30;

pub fn slot_length() -> Duration {
    Duration::minutes(SLOT_MINUTES)
}

/// The business offset as a constant. Evaluated at compile time, so an
/// out-of-range offset fails the build.
pub const BUSINESS_OFFSET: FixedOffset = match FixedOffset::east_opt(BUSINESS_UTC_OFFSET_SECS) {
    Some(offset) => offset,
    None => panic!("business offset must be within one day of UTC"),
};

/// The fixed offset all scheduling rules are evaluated in.
pub fn business_offset() -> FixedOffset {
    BUSINESS_OFFSET
}

/// Monday through Friday.
pub fn is_business_day(weekday: Weekday) -> bool {
    !matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Re-expresses `instant` in the business offset. The instant itself is
/// unchanged, so normalizing twice is the same as normalizing once.
pub fn normalize<Tz: TimeZone>(instant: &DateTime<Tz>) -> DateTime<FixedOffset> {
    instant.with_timezone(&business_offset())
}

/// Parses an RFC3339 timestamp and normalizes it. `field` names the input
/// in the error.
pub fn parse_timestamp(
    raw: &str,
    field: &'static str,
) -> Result<DateTime<FixedOffset>, RangeViolation> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|parsed| normalize(&parsed))
        .map_err(|_| RangeViolation::Malformed { field })
}

/// Source of "now" for lead-time and future-range checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
