//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use sqlx::PgPool;
use summarizer_core::common::utils::join_key_points;
use summarizer_core::common::UserId;
use summarizer_core::domains::auth::password::hash_password;
use summarizer_core::domains::auth::{JwtService, Role, User};
use summarizer_core::domains::summaries::models::NewUserSummary;
use summarizer_core::domains::summaries::UserSummary;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "secret-password";

/// Username unique across the shared test database.
pub fn unique_name(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}_{}", prefix, &suffix[..12])
}

/// Create a user with [`TEST_PASSWORD`] and return it with a valid token.
pub async fn create_test_user(
    pool: &PgPool,
    jwt_service: &JwtService,
    prefix: &str,
) -> Result<(User, String)> {
    let username = unique_name(prefix);
    let email = format!("{}@example.com", username);
    let hash = hash_password(TEST_PASSWORD).await?;
    let user = User::create(&username, &email, &hash, Role::User, pool).await?;
    let token = jwt_service.create_token(user.id, &user.username, Role::User)?;
    Ok((user, token))
}

/// Insert a summary row directly.
pub async fn create_test_summary(
    pool: &PgPool,
    user_id: UserId,
    title: &str,
    original_words: i32,
    summary_words: i32,
) -> Result<UserSummary> {
    let key_points = join_key_points(&["First point".to_string(), "Second point".to_string()]);
    UserSummary::create(
        NewUserSummary {
            user_id,
            title,
            original_content: "Original article text.",
            summary_content: "A short summary.",
            key_points: &key_points,
            original_word_count: original_words,
            summary_word_count: summary_words,
            compression_ratio: if original_words > 0 {
                (original_words - summary_words) * 100 / original_words
            } else {
                0
            },
        },
        pool,
    )
    .await
}
