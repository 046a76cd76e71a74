pub mod appointment;
pub mod timeslot;
