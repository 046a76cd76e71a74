use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A stored booking. Only the store hands these out; `id` never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub user_id: i64,
    pub trainer_id: i64,
    pub starts_at: DateTime<FixedOffset>,
    pub ends_at: DateTime<FixedOffset>,
}

/// A candidate that passed every rule but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub user_id: i64,
    pub trainer_id: i64,
    pub starts_at: DateTime<FixedOffset>,
    pub ends_at: DateTime<FixedOffset>,
}

impl NewAppointment {
    pub fn with_id(self, id: i64) -> Appointment {
        Appointment {
            id,
            user_id: self.user_id,
            trainer_id: self.trainer_id,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub user_id: i64,
    pub trainer_id: i64,
    pub starts_at: String,
    pub ends_at: String,
}

/// Optional `starts_at`/`ends_at` query bounds, still unparsed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeQuery {
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
}
