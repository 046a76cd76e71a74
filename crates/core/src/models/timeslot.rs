use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// An open half-hour window. Built per availability response, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeslot {
    pub starts_at: DateTime<FixedOffset>,
    pub ends_at: DateTime<FixedOffset>,
}
