pub mod appointments;
pub mod health;
pub mod trainers;
