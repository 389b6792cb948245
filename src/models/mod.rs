//! Data models for barber-cli
//!
//! Typed request and response schemas for every backend endpoint, plus
//! the small value types (ids, money) they are built from.

pub mod appointment;
pub mod catalog;
pub mod ids;
pub mod money;
pub mod user;

pub use appointment::{
    parse_date, Appointment, AppointmentBarber, AppointmentService, AppointmentShop, AppointmentStatus,
    CreateAppointmentRequest, DateTimeSlot, RescheduleRequest,
};
pub use catalog::{services_by_category, Barber, Barbershop, Service};
pub use ids::{AppointmentId, BarberId, BarbershopId, ServiceId, UserId};
pub use money::Money;
pub use user::{
    AuthResponse, RegisterRequest, ServerStats, UpdateProfileRequest, User, UserRole,
};
