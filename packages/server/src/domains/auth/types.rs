use serde::Serialize;

use super::models::User;

/// Returned by register and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Public profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            role: user.role().to_string(),
            username: user.username,
            email: user.email,
        }
    }
}
