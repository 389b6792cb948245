//! Session store
//!
//! The single owner of the access and refresh tokens. One `SessionStore` is
//! created per process and handed to the API client; clones share the same
//! state. Writes go through one mutex, and token refreshes are serialized by
//! a separate async gate so concurrent 401s share a single refresh.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex as AsyncMutex, MutexGuard as AsyncMutexGuard};
use tracing::{debug, info};
use zeroize::Zeroize;

use super::tokens::{StoredAccessToken, StoredRefreshToken};
use crate::config::BarberPaths;
use crate::error::BarberResult;
use crate::storage::{read_json_optional, remove_if_exists, write_json_atomic};

#[derive(Debug, Default)]
struct SessionState {
    access: Option<StoredAccessToken>,
    refresh: Option<StoredRefreshToken>,
}

impl SessionState {
    fn wipe(&mut self) {
        if let Some(mut access) = self.access.take() {
            access.zeroize();
        }
        if let Some(mut refresh) = self.refresh.take() {
            refresh.zeroize();
        }
    }
}

struct Inner {
    state: Mutex<SessionState>,
    refresh_gate: AsyncMutex<()>,
    /// `None` keeps the session in memory only
    paths: Option<BarberPaths>,
}

/// Shared handle to the process-wide session
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// A session that is never written to disk
    pub fn in_memory() -> Self {
        Self::with_state(SessionState::default(), None)
    }

    /// Load the persisted session from the data directory
    pub fn load(paths: BarberPaths) -> BarberResult<Self> {
        let access: Option<StoredAccessToken> = read_json_optional(paths.session_file())?;
        let refresh: Option<StoredRefreshToken> = read_json_optional(paths.refresh_token_file())?;

        debug!(
            has_access = access.is_some(),
            has_refresh = refresh.is_some(),
            "Loaded session from disk"
        );

        Ok(Self::with_state(SessionState { access, refresh }, Some(paths)))
    }

    fn with_state(state: SessionState, paths: Option<BarberPaths>) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                refresh_gate: AsyncMutex::new(()),
                paths,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        // A panic while holding the lock cannot leave the tokens half-updated
        self.inner
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The access token, if one is stored and has not expired
    pub fn access_token(&self) -> Option<String> {
        self.access_token_at(Utc::now())
    }

    pub fn access_token_at(&self, now: DateTime<Utc>) -> Option<String> {
        self.state()
            .access
            .as_ref()
            .filter(|stored| !stored.is_expired_at(now))
            .map(|stored| stored.access_token.clone())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.state()
            .refresh
            .as_ref()
            .map(|stored| stored.refresh_token.clone())
    }

    /// Presence, not validity: the route guard's notion of "logged in"
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Store a freshly issued access token with the standard lifetime
    pub fn set_access_token(&self, token: impl Into<String>) -> BarberResult<()> {
        self.store_access(StoredAccessToken::issue(token))
    }

    /// Store an access token that stops being presented at `expires_at`
    pub fn set_access_token_until(
        &self,
        token: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> BarberResult<()> {
        self.store_access(StoredAccessToken::until(token, expires_at))
    }

    fn store_access(&self, stored: StoredAccessToken) -> BarberResult<()> {
        if let Some(paths) = &self.inner.paths {
            write_json_atomic(paths.session_file(), &stored)?;
        }
        let mut state = self.state();
        if let Some(mut old) = state.access.replace(stored) {
            old.zeroize();
        }
        Ok(())
    }

    pub fn set_refresh_token(&self, token: impl Into<String>) -> BarberResult<()> {
        let stored = StoredRefreshToken {
            refresh_token: token.into(),
        };
        if let Some(paths) = &self.inner.paths {
            write_json_atomic(paths.refresh_token_file(), &stored)?;
        }
        let mut state = self.state();
        if let Some(mut old) = state.refresh.replace(stored) {
            old.zeroize();
        }
        Ok(())
    }

    /// Store both tokens after a successful login
    pub fn establish(
        &self,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> BarberResult<()> {
        self.set_access_token(access_token)?;
        self.set_refresh_token(refresh_token)?;
        info!("Session established");
        Ok(())
    }

    /// Forget both tokens, in memory and on disk
    pub fn clear(&self) -> BarberResult<()> {
        self.state().wipe();
        if let Some(paths) = &self.inner.paths {
            remove_if_exists(paths.session_file())?;
            remove_if_exists(paths.refresh_token_file())?;
        }
        info!("Session cleared");
        Ok(())
    }

    /// Hold this guard while refreshing; waiters re-check the token after
    pub async fn refresh_guard(&self) -> AsyncMutexGuard<'_, ()> {
        self.inner.refresh_gate.lock().await
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("SessionStore")
            .field("has_access", &state.access.is_some())
            .field("has_refresh", &state.refresh.is_some())
            .field("persistent", &self.inner.paths.is_some())
            .finish()
    }
}
