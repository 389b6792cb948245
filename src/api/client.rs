//! Authenticated API client
//!
//! Every backend call goes through [`ApiClient::request`]. It attaches the
//! bearer token when one is stored, and on a 401 performs one token refresh
//! followed by exactly one retry of the original request. When the refresh
//! or the retry fails, the session is cleared and the caller receives
//! [`BarberError::SessionExpired`].
//!
//! Refreshes are serialized through the session's refresh gate: a request
//! that waited for another request's refresh reuses the new token instead of
//! refreshing again.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use crate::config::Settings;
use crate::error::{BarberError, BarberResult};
use crate::models::user::{RefreshRequest, RefreshResponse};
use crate::session::SessionStore;

pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        session: SessionStore,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            session,
        }
    }

    /// Client using reqwest with the timeout from settings
    pub fn from_settings(
        settings: &Settings,
        base_url: impl Into<String>,
        session: SessionStore,
    ) -> BarberResult<Self> {
        let timeout = settings.request_timeout_secs.map(Duration::from_secs);
        let transport = ReqwestTransport::new(timeout)?;
        Ok(Self::new(base_url, Arc::new(transport), session))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        bearer: Option<String>,
        body: Option<Value>,
    ) -> BarberResult<HttpResponse> {
        let response = self
            .transport
            .send(HttpRequest {
                method,
                url: url.to_string(),
                bearer,
                body,
            })
            .await?;
        debug!(method = method.as_str(), url, status = response.status, "API response");
        Ok(response)
    }

    /// Send an authenticated request and decode the JSON response
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> BarberResult<T> {
        let url = self.url(path);
        let sent_token = self.session.access_token();

        let response = self
            .send(method, &url, sent_token.clone(), body.clone())
            .await?;

        if !response.is_unauthorized() {
            return decode(response);
        }

        warn!(method = method.as_str(), path, "Request unauthorized, refreshing session");
        let token = self.recover_session(sent_token.as_deref()).await?;

        match self.send(method, &url, Some(token), body).await {
            Ok(retry) if retry.is_success() => decode(retry),
            Ok(retry) => {
                warn!(status = retry.status, path, "Retry after refresh failed");
                Err(self.expire(BarberError::session_expired()))
            }
            Err(err) => {
                warn!(error = %err, path, "Retry after refresh failed");
                Err(self.expire(BarberError::session_expired()))
            }
        }
    }

    /// Produce a token worth retrying with, or clear the session
    async fn recover_session(&self, sent_token: Option<&str>) -> BarberResult<String> {
        let _gate = self.session.refresh_guard().await;

        // Another request refreshed while this one was waiting for the gate
        if let Some(current) = self.session.access_token() {
            if Some(current.as_str()) != sent_token {
                debug!("Reusing token refreshed by a concurrent request");
                return Ok(current);
            }
        }

        let Some(refresh_token) = self.session.refresh_token() else {
            return Err(self.expire(BarberError::authentication_required()));
        };

        match self.exchange_refresh_token(&refresh_token).await {
            Ok(token) => Ok(token),
            Err(err) => {
                warn!(error = %err, "Token refresh failed");
                Err(self.expire(BarberError::session_expired()))
            }
        }
    }

    /// Trade the refresh token for a new access token and store it
    pub(crate) async fn exchange_refresh_token(&self, refresh_token: &str) -> BarberResult<String> {
        let body = serde_json::to_value(RefreshRequest { refresh_token })?;
        let refreshed: RefreshResponse = self
            .post_public("/auth/refresh", body, "Token refresh failed")
            .await?;

        self.session.set_access_token(refreshed.token.clone())?;
        if let Some(rotated) = refreshed.refresh_token {
            self.session.set_refresh_token(rotated)?;
        }
        debug!("Access token refreshed");
        Ok(refreshed.token)
    }

    /// Clear the session and hand back the error to surface
    pub(crate) fn expire(&self, err: BarberError) -> BarberError {
        if let Err(clear_err) = self.session.clear() {
            warn!(error = %clear_err, "Failed to clear session files");
        }
        err
    }

    /// Unauthenticated POST used by the auth endpoints
    ///
    /// Failures are reported as [`BarberError::Auth`] with the server message,
    /// or `default_error` when the server sent none.
    pub(crate) async fn post_public<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
        default_error: &str,
    ) -> BarberResult<T> {
        let url = self.url(path);
        let response = self.send(HttpMethod::Post, &url, None, Some(body)).await?;

        if !response.is_success() {
            let message = server_message(&response.body).unwrap_or_else(|| default_error.to_string());
            return Err(BarberError::Auth(message));
        }
        decode(response)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> BarberResult<T> {
        self.request(HttpMethod::Get, path, None).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> BarberResult<T> {
        self.request(HttpMethod::Post, path, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> BarberResult<T> {
        self.request(HttpMethod::Put, path, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> BarberResult<T> {
        self.request(HttpMethod::Delete, path, None).await
    }
}

/// Join path segments into an endpoint path, percent-encoding each segment
///
/// Ids typed by the user may contain `/`, `?` or `#`; encoded, they stay
/// inside their own segment.
pub(crate) fn endpoint(segments: &[&str]) -> BarberResult<String> {
    if let Some(bad) = segments.iter().find(|s| matches!(s.trim(), "" | "." | "..")) {
        return Err(BarberError::Validation(format!("Invalid id: '{}'", bad)));
    }
    let mut url = reqwest::Url::parse("http://endpoint.invalid/")
        .map_err(|e| BarberError::Config(format!("Invalid endpoint base: {}", e)))?;
    url.path_segments_mut()
        .map_err(|()| BarberError::Config("Endpoint base cannot hold a path".into()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.path().to_string())
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
}

/// Decode a 2xx body; an empty body decodes as JSON `null`
fn decode<T: DeserializeOwned>(response: HttpResponse) -> BarberResult<T> {
    if !response.is_success() {
        return Err(BarberError::http(response.status, server_message(&response.body)));
    }

    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };
    serde_json::from_str(body)
        .map_err(|e| BarberError::Json(format!("Failed to parse response: {}", e)))
}
