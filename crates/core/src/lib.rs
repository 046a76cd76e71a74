//! # fitslot core
//!
//! Scheduling rules for 30-minute trainer appointments. Everything here is
//! evaluated in one fixed business offset (see [`time`]); persistence is
//! reached only through the [`store::AppointmentStore`] trait.

pub mod availability;
pub mod conflict;
pub mod errors;
pub mod models;
pub mod range;
pub mod rules;
pub mod service;
pub mod store;
pub mod time;
