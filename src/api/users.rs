//! User profile endpoints

use super::client::ApiClient;
use crate::error::{BarberError, BarberResult};
use crate::models::{ServerStats, UpdateProfileRequest, User};

pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /users/profile`
    pub async fn profile(&self) -> BarberResult<User> {
        self.client.get("/users/profile").await
    }

    /// `PUT /users/profile`
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> BarberResult<User> {
        if request.is_empty() {
            return Err(BarberError::Validation("No profile changes given".into()));
        }
        self.client.put("/users/profile", request).await
    }

    /// `GET /users/stats`
    pub async fn stats(&self) -> BarberResult<ServerStats> {
        self.client.get("/users/stats").await
    }
}
