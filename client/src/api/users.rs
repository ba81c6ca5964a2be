//! User and login operations

use super::ApiClient;
use crate::error::ClientResult;
use tracing::debug;
use training_diary_shared::types::{LoginRequest, Token, UserCreate, UserResponse};
use validator::Validate;

impl ApiClient {
    /// POST /users/ - Register a new user
    pub async fn create_user(&self, user: &UserCreate) -> ClientResult<UserResponse> {
        user.validate()?;
        self.post("/users/", user).await
    }

    /// POST /users/login - Exchange credentials for a bearer token
    ///
    /// On success the returned access token replaces the held one before
    /// this returns, so the next request already authenticates as the new
    /// session. This is the only operation with a side effect beyond the
    /// request itself.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<Token> {
        let payload = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let token: Token = self.post("/users/login", &payload).await?;
        self.set_token(&token.access_token);
        debug!("bearer token replaced after login");
        Ok(token)
    }

    /// GET /users/me - Fetch the currently authenticated user
    pub async fn get_current_user(&self) -> ClientResult<UserResponse> {
        self.get("/users/me").await
    }

    /// GET /users/{id} - Fetch a user by id
    pub async fn get_user(&self, user_id: i64) -> ClientResult<UserResponse> {
        self.get(&format!("/users/{user_id}")).await
    }
}
