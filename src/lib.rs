//! barber-cli - book barbershop appointments from the terminal
//!
//! A client for the barbershop booking backend. It signs users in, walks
//! them through a five-step booking wizard and manages their appointments.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//! - `models`: Request and response schemas
//! - `storage`: Atomic JSON file helpers
//! - `session`: Persisted access and refresh tokens
//! - `api`: Authenticated HTTP client and endpoint groups
//! - `booking`: Booking wizard state machine
//! - `dashboard`: Appointment split and statistics
//! - `router`: Route guard applied before each command
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use barber_cli::api::{ApiClient, CatalogApi};
//! use barber_cli::config::{BarberPaths, Settings};
//! use barber_cli::session::SessionStore;
//!
//! let paths = BarberPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let session = SessionStore::load(paths.clone())?;
//! let client = ApiClient::from_settings(&settings, settings.resolve_api_url(None), session)?;
//! let shops = CatalogApi::new(&client).barbershops().await?;
//! ```

pub mod api;
pub mod booking;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod models;
pub mod router;
pub mod session;
pub mod storage;
pub mod telemetry;

pub use error::{BarberError, BarberResult};
