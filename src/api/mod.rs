//! Backend API access
//!
//! [`ApiClient`] owns the transport and the session; the endpoint groups
//! borrow it and expose one typed method per backend route.

pub mod appointments;
pub mod auth;
pub mod catalog;
pub mod client;
pub mod transport;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;

pub use appointments::AppointmentsApi;
pub use auth::AuthApi;
pub use catalog::CatalogApi;
pub use client::ApiClient;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use users::UsersApi;
