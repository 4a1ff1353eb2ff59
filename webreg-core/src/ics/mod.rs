//! ICS file generation.
//!
//! Events are written according to RFC 5545 with floating local times, so
//! calendar apps show them at the wall-clock time printed on the schedule.

mod generate;

pub use generate::generate_ics;
