//! Query-range parsing for the listing and availability endpoints.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};

use crate::{
    errors::RangeViolation,
    models::appointment::RangeQuery,
    time::{normalize, parse_timestamp},
};

/// Longest range either endpoint will accept.
pub const MAX_RANGE_DAYS: i64 = 90;

/// A half-open `[start, end)` window in the business offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl DateRange {
    /// Builds a range without checking it; both bounds are normalized.
    pub fn new<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> Self {
        Self {
            start: normalize(start),
            end: normalize(end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, instant: &DateTime<FixedOffset>) -> bool {
        self.start <= *instant && *instant < self.end
    }
}

/// Bounds for listing a trainer's appointments. Both absent means
/// unbounded; supplying only one is an error.
pub fn parse_listing_range(query: &RangeQuery) -> Result<Option<DateRange>, RangeViolation> {
    let (raw_start, raw_end) = match (query.starts_at.as_deref(), query.ends_at.as_deref()) {
        (None, None) => return Ok(None),
        (Some(start), Some(end)) => (start, end),
        _ => return Err(RangeViolation::Incomplete),
    };

    let range = DateRange {
        start: parse_timestamp(raw_start, "starts_at")?,
        end: parse_timestamp(raw_end, "ends_at")?,
    };
    check_span(&range)?;

    Ok(Some(range))
}

/// Bounds for an availability lookup: both required, both strictly after
/// `now`.
pub fn parse_availability_range(
    query: &RangeQuery,
    now: DateTime<Utc>,
) -> Result<DateRange, RangeViolation> {
    let start = parse_future_bound(query.starts_at.as_deref(), "starts_at", now)?;
    let end = parse_future_bound(query.ends_at.as_deref(), "ends_at", now)?;

    let range = DateRange { start, end };
    check_span(&range)?;

    Ok(range)
}

fn parse_future_bound(
    raw: Option<&str>,
    field: &'static str,
    now: DateTime<Utc>,
) -> Result<DateTime<FixedOffset>, RangeViolation> {
    let raw = raw.ok_or(RangeViolation::Missing { field })?;
    let parsed = parse_timestamp(raw, field)?;

    if parsed <= normalize(&now) {
        return Err(RangeViolation::NotFuture { field });
    }

    Ok(parsed)
}

fn check_span(range: &DateRange) -> Result<(), RangeViolation> {
    if range.start > range.end {
        return Err(RangeViolation::Inverted);
    }

    if range.end - range.start > Duration::days(MAX_RANGE_DAYS) {
        return Err(RangeViolation::TooLong {
            max_days: MAX_RANGE_DAYS,
        });
    }

    Ok(())
}
