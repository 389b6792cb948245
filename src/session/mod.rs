//! Client session: access and refresh tokens
//!
//! The access token mirrors a 7-day cookie and is kept in `session.json`;
//! the refresh token has no client-side expiry and lives in its own file.

pub mod store;
pub mod tokens;

pub use store::SessionStore;
pub use tokens::{StoredAccessToken, StoredRefreshToken, ACCESS_TOKEN_LIFETIME_DAYS};
