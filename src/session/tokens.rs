//! Token records and their on-disk shapes

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// How long a stored access token is considered present
pub const ACCESS_TOKEN_LIFETIME_DAYS: i64 = 7;

/// Access token together with the moment the client stops presenting it
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAccessToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl StoredAccessToken {
    /// Issue a record that expires after the standard lifetime
    pub fn issue(token: impl Into<String>) -> Self {
        Self::until(token, Utc::now() + Duration::days(ACCESS_TOKEN_LIFETIME_DAYS))
    }

    pub fn until(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token: token.into(),
            expires_at,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

impl Zeroize for StoredAccessToken {
    fn zeroize(&mut self) {
        self.access_token.zeroize();
    }
}

impl std::fmt::Debug for StoredAccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredAccessToken")
            .field("access_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Refresh token file contents; no expiry is tracked client-side
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRefreshToken {
    pub refresh_token: String,
}

impl std::fmt::Debug for StoredRefreshToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StoredRefreshToken(<redacted>)")
    }
}
