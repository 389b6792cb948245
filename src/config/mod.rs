//! Configuration module for barber-cli
//!
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BarberPaths;
pub use settings::Settings;
