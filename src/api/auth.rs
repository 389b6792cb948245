//! Authentication endpoints
//!
//! Login, registration and the Google identity-token exchange all return an
//! [`AuthResponse`]; a successful call stores both tokens in the session.

use tracing::{info, warn};

use super::client::ApiClient;
use crate::error::{BarberError, BarberResult};
use crate::models::user::{GoogleAuthRequest, LoginRequest};
use crate::models::{AuthResponse, RegisterRequest, User};

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/login`
    pub async fn login(&self, email: &str, password: &str) -> BarberResult<User> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(BarberError::Validation(
                "Email and password are required".into(),
            ));
        }

        let body = serde_json::to_value(LoginRequest { email, password })?;
        let response: AuthResponse = self
            .client
            .post_public("/auth/login", body, "Login failed")
            .await?;
        self.establish(response)
    }

    /// `POST /auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> BarberResult<User> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(BarberError::Validation(
                "Email and password are required".into(),
            ));
        }
        if request.name.trim().is_empty() {
            return Err(BarberError::Validation("Name is required".into()));
        }

        let body = serde_json::to_value(request)?;
        let response: AuthResponse = self
            .client
            .post_public("/auth/register", body, "Registration failed")
            .await?;
        self.establish(response)
    }

    /// `POST /auth/google`
    ///
    /// The identity token is forwarded as-is; the backend verifies it.
    pub async fn google(&self, token: &str) -> BarberResult<User> {
        let token = token.trim();
        if token.is_empty() {
            return Err(BarberError::Validation("Google token is required".into()));
        }

        let body = serde_json::to_value(GoogleAuthRequest { token })?;
        let response: AuthResponse = self
            .client
            .post_public("/auth/google", body, "Google authentication failed")
            .await?;
        self.establish(response)
    }

    /// `POST /auth/refresh` with the stored refresh token
    ///
    /// A rejected refresh clears the session.
    pub async fn refresh(&self) -> BarberResult<()> {
        let session = self.client.session();
        let _gate = session.refresh_guard().await;

        let refresh_token = session
            .refresh_token()
            .ok_or_else(BarberError::authentication_required)?;

        match self.client.exchange_refresh_token(&refresh_token).await {
            Ok(_) => Ok(()),
            Err(err) => {
                warn!(error = %err, "Token refresh failed");
                Err(self.client.expire(BarberError::session_expired()))
            }
        }
    }

    /// Forget the local session; the backend keeps no logout endpoint
    pub fn logout(&self) -> BarberResult<()> {
        self.client.session().clear()
    }

    fn establish(&self, response: AuthResponse) -> BarberResult<User> {
        self.client
            .session()
            .establish(response.token, response.refresh_token)?;
        info!(user = %response.user.email, "Signed in");
        Ok(response.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{json, FakeTransport};
    use crate::session::SessionStore;
    use serde_json::json as j;

    fn auth_body() -> serde_json::Value {
        j!({
            "user": {"id": "u1", "email": "ana@example.com", "name": "Ana"},
            "token": "a1",
            "refreshToken": "r1"
        })
    }

    #[tokio::test]
    async fn test_login_establishes_session() {
        let transport = FakeTransport::new(|req| {
            assert!(req.url.ends_with("/auth/login"));
            assert_eq!(req.bearer, None);
            assert_eq!(
                req.body,
                Some(j!({"email": "ana@example.com", "password": "secret"}))
            );
            json(200, auth_body())
        });
        let session = SessionStore::in_memory();
        let client = ApiClient::new("http://t/api", transport, session.clone());

        let user = AuthApi::new(&client)
            .login(" ana@example.com ", "secret")
            .await
            .unwrap();

        assert_eq!(user.name, "Ana");
        assert_eq!(session.access_token().as_deref(), Some("a1"));
        assert_eq!(session.refresh_token().as_deref(), Some("r1"));
    }

    #[tokio::test]
    async fn test_login_failure_uses_server_message() {
        let transport = FakeTransport::new(|_| json(401, j!({"message": "Invalid credentials"})));
        let client = ApiClient::new("http://t/api", transport.clone(), SessionStore::in_memory());

        let err = AuthApi::new(&client).login("a@b.c", "x").await.unwrap_err();

        assert!(matches!(err, BarberError::Auth(ref m) if m == "Invalid credentials"));
        // Auth endpoints never trigger the refresh path
        assert_eq!(transport.count("/auth/refresh"), 0);
    }

    #[tokio::test]
    async fn test_register_failure_default_message() {
        let transport = FakeTransport::new(|_| json(400, j!({})));
        let client = ApiClient::new("http://t/api", transport, SessionStore::in_memory());
        let request = RegisterRequest {
            email: "ana@example.com".into(),
            password: "secret".into(),
            name: "Ana".into(),
            last_name: None,
            phone: "+57300".into(),
        };

        let err = AuthApi::new(&client).register(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "Authentication failed: Registration failed");
    }

    #[tokio::test]
    async fn test_google_requires_token() {
        let transport = FakeTransport::new(|_| json(200, auth_body()));
        let client = ApiClient::new("http://t/api", transport.clone(), SessionStore::in_memory());

        let err = AuthApi::new(&client).google("   ").await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Google token is required");
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_google_forwards_token_opaquely() {
        let transport = FakeTransport::new(|req| {
            assert!(req.url.ends_with("/auth/google"));
            assert_eq!(req.body, Some(j!({"token": "eyJhbGciOi.payload.sig"})));
            json(200, auth_body())
        });
        let session = SessionStore::in_memory();
        let client = ApiClient::new("http://t/api", transport, session.clone());

        AuthApi::new(&client).google("eyJhbGciOi.payload.sig").await.unwrap();
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_refresh_without_token_is_session_error() {
        let transport = FakeTransport::new(|_| json(200, j!({"token": "a2"})));
        let client = ApiClient::new("http://t/api", transport.clone(), SessionStore::in_memory());

        let err = AuthApi::new(&client).refresh().await.unwrap_err();
        assert!(err.is_session_expired());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_refresh_clears_session() {
        let transport =
            FakeTransport::new(|_| json(401, j!({"message": "Refresh token revoked"})));
        let session = SessionStore::in_memory();
        session.establish("a1", "r1").unwrap();
        let client = ApiClient::new("http://t/api", transport.clone(), session.clone());

        let err = AuthApi::new(&client).refresh().await.unwrap_err();

        assert!(err.is_session_expired());
        assert_eq!(err.to_string(), "Session expired");
        assert_eq!(transport.count("/auth/refresh"), 1);
        assert_eq!(session.access_token(), None);
        assert_eq!(session.refresh_token(), None);
    }

    #[tokio::test]
    async fn test_refresh_replaces_access_token() {
        let transport = FakeTransport::new(|req| {
            assert_eq!(req.body, Some(j!({"refreshToken": "r1"})));
            json(200, j!({"token": "a2"}))
        });
        let session = SessionStore::in_memory();
        session.establish("a1", "r1").unwrap();
        let client = ApiClient::new("http://t/api", transport, session.clone());

        AuthApi::new(&client).refresh().await.unwrap();

        assert_eq!(session.access_token().as_deref(), Some("a2"));
        assert_eq!(session.refresh_token().as_deref(), Some("r1"));
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let transport = FakeTransport::new(|_| json(200, j!({})));
        let session = SessionStore::in_memory();
        session.establish("a1", "r1").unwrap();
        let client = ApiClient::new("http://t/api", transport, session.clone());

        AuthApi::new(&client).logout().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.refresh_token(), None);
    }
}
