//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; printing is left to the command
//! handlers. Prices and dates follow the user's [`Settings`](crate::config::Settings).

pub mod appointment;
pub mod booking;
pub mod catalog;
pub mod dashboard;

pub use appointment::{format_appointment_details, format_appointment_table};
pub use booking::{format_booking_summary, format_confirmation, format_step_header};
pub use catalog::{format_barber_list, format_barbershop_list, format_service_menu, format_slot_list};
pub use dashboard::format_user_stats;

use chrono::NaiveDate;
use std::fmt::Write;

/// Format a date with a user-supplied strftime pattern
///
/// Falls back to ISO format when the pattern is invalid.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Truncate a string to a maximum display width
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
