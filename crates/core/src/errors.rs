use thiserror::Error;

use crate::time::BUSINESS_TZ_NAME;

/// A broken appointment rule. Variants are listed in evaluation order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("UserID must be greater than 0")]
    InvalidUser,

    #[error("TrainerID must be greater than 0")]
    InvalidTrainer,

    #[error("Appointments must be scheduled at least 1 hour in advance")]
    InsufficientLeadTime,

    #[error("Appointment start time must be before end time")]
    StartNotBeforeEnd,

    #[error("Appointment must be scheduled between 8am and 5pm {}", BUSINESS_TZ_NAME)]
    OutsideBusinessHours,

    #[error("Appointment must be scheduled between Monday and Friday {}", BUSINESS_TZ_NAME)]
    NotBusinessDay,

    #[error("Appointment must be scheduled on the hour or half hour {}", BUSINESS_TZ_NAME)]
    NotHalfHourAligned,

    #[error("Appointment must be scheduled in 30-minute increments")]
    NotThirtyMinuteSlot,
}

/// A rejected `starts_at`/`ends_at` pair.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeViolation {
    #[error("{field} must be an RFC3339 timestamp")]
    Malformed { field: &'static str },

    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("starts_at and ends_at must be provided together")]
    Incomplete,

    #[error("Invalid timeframe: starts_at is after ends_at")]
    Inverted,

    #[error("Timeframe must be {max_days} days or lower")]
    TooLong { max_days: i64 },

    #[error("{field} must be a future date")]
    NotFuture { field: &'static str },
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error(transparent)]
    Rule(#[from] RuleViolation),

    #[error(transparent)]
    Range(#[from] RangeViolation),

    #[error("Timeslot is not available")]
    Conflict,

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),
}

pub type BookingResult<T> = Result<T, BookingError>;
