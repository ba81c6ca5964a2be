//! API request and response types

use crate::validation::{validate_password, validate_username};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration payload for `POST /users/`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserCreate {
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = validate_username))]
    pub username: String,
    #[validate(custom(function = validate_password))]
    pub password: String,
}

/// Canonical "current user" shape returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub email: String,
    pub username: String,
    pub id: i64,
}

/// Bearer token response from `POST /users/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Optional filters for `GET /exercises/`
///
/// Absent fields are omitted from the query string entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<String>,
}
