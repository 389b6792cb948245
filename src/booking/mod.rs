//! The five-step booking flow

pub mod selection;
pub mod summary;
pub mod wizard;

pub use selection::{BarberChoice, BookingSelection, BookingUpdate, ServiceChoice, ShopChoice};
pub use summary::BookingSummary;
pub use wizard::{can_proceed, BookingStep, BookingWizard};
