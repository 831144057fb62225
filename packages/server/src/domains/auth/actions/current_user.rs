use anyhow::Result;

use crate::common::UserId;
use crate::domains::auth::models::User;
use crate::domains::auth::CurrentUser;
use crate::kernel::ServerDeps;

/// Profile for a token's user; `None` if the account no longer exists.
pub async fn current_user(user_id: UserId, deps: &ServerDeps) -> Result<Option<CurrentUser>> {
    let user = User::find_by_id(user_id, &deps.db_pool).await?;
    Ok(user.map(CurrentUser::from))
}
