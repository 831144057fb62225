use anyhow::Context;
use tracing::info;

use super::validation::{validate_email, validate_password, validate_username};
use crate::domains::auth::models::{Role, User};
use crate::domains::auth::password::hash_password;
use crate::domains::auth::{AuthError, AuthResponse};
use crate::kernel::ServerDeps;

const USERNAME_UNIQUE_CONSTRAINT: &str = "users_username_key";
const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

/// Create an account and sign it in.
pub async fn register(
    username: &str,
    email: &str,
    password: &str,
    deps: &ServerDeps,
) -> Result<AuthResponse, AuthError> {
    validate_username(username)?;
    validate_email(email)?;
    validate_password(password)?;

    let pool = &deps.db_pool;
    if User::exists_by_username(username, pool).await? {
        return Err(AuthError::UsernameTaken);
    }
    if User::exists_by_email(email, pool).await? {
        return Err(AuthError::EmailTaken);
    }

    let password_hash = hash_password(password).await?;

    // A concurrent registration can still win the race; the unique
    // constraints settle it.
    let user = User::create(username, email, &password_hash, Role::User, pool)
        .await
        .map_err(|e| {
            let taken = match unique_violation(&e) {
                Some(USERNAME_UNIQUE_CONSTRAINT) => Some(AuthError::UsernameTaken),
                Some(EMAIL_UNIQUE_CONSTRAINT) => Some(AuthError::EmailTaken),
                _ => None,
            };
            taken.unwrap_or_else(|| {
                AuthError::Internal(anyhow::Error::new(e).context("Failed to create user"))
            })
        })?;

    let role = user.role();
    let token = deps
        .jwt_service
        .create_token(user.id, &user.username, role)
        .context("Failed to issue token")?;

    info!(user_id = %user.id, username = %user.username, "User registered");

    Ok(AuthResponse {
        token,
        username: user.username,
        email: user.email,
        role: role.to_string(),
    })
}

fn unique_violation(error: &sqlx::Error) -> Option<&str> {
    let db_error = error.as_database_error()?;
    if db_error.is_unique_violation() {
        db_error.constraint()
    } else {
        None
    }
}
