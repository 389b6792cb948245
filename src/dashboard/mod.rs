//! Dashboard views over the user's appointments

pub mod stats;

pub use stats::{split_appointments, AppointmentSplit, UserStats};
