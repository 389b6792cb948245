//! Price and duration totals for a selection

use super::selection::{BookingSelection, ServiceChoice};
use crate::models::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingSummary {
    pub total_price: Money,
    /// Minutes
    pub total_duration: u32,
}

impl BookingSummary {
    pub fn of_services(services: &[ServiceChoice]) -> Self {
        Self {
            total_price: services.iter().map(|s| s.price).sum(),
            total_duration: services.iter().map(|s| s.duration).sum(),
        }
    }

    pub fn of(selection: &BookingSelection) -> Self {
        Self::of_services(&selection.services)
    }
}
