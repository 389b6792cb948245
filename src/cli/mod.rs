//! CLI command handlers
//!
//! Bridges clap argument parsing with the API layer. Every handler receives
//! the [`CliContext`] built once in `main`.

pub mod appointments;
pub mod auth;
pub mod booking;
pub mod catalog;
pub mod dashboard;
pub mod profile;
pub mod prompt;
pub mod session;

pub use appointments::{handle_appointments_command, AppointmentsCommands};
pub use auth::{handle_login, handle_logout, handle_register, LoginArgs, RegisterArgs};
pub use booking::{handle_book_command, BookArgs};
pub use catalog::{handle_catalog_command, CatalogCommands};
pub use dashboard::{handle_dashboard, handle_home};
pub use profile::{handle_profile_command, ProfileCommands};
pub use session::{handle_session_command, SessionCommands};

use crate::api::ApiClient;
use crate::config::{BarberPaths, Settings};

/// Everything a command handler needs
pub struct CliContext {
    pub paths: BarberPaths,
    pub settings: Settings,
    pub client: ApiClient,
}
