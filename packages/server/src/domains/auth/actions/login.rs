use anyhow::Context;
use tracing::{info, warn};

use crate::domains::auth::models::User;
use crate::domains::auth::password::verify_password;
use crate::domains::auth::{AuthError, AuthResponse};
use crate::kernel::ServerDeps;

/// Verify credentials and issue a token.
///
/// Unknown usernames and wrong passwords are indistinguishable to the caller.
pub async fn login(
    username: &str,
    password: &str,
    deps: &ServerDeps,
) -> Result<AuthResponse, AuthError> {
    let Some(user) = User::find_by_username(username, &deps.db_pool).await? else {
        warn!(username = %username, "Login failed: unknown user");
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_password(password, &user.password_hash).await? {
        warn!(username = %username, "Login failed: wrong password");
        return Err(AuthError::InvalidCredentials);
    }

    let role = user.role();
    let token = deps
        .jwt_service
        .create_token(user.id, &user.username, role)
        .context("Failed to issue token")?;

    info!(user_id = %user.id, "Login successful");

    Ok(AuthResponse {
        token,
        username: user.username,
        email: user.email,
        role: role.to_string(),
    })
}
