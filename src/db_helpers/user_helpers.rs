use sqlx::SqlitePool;

use crate::{errors::ApiError, models::User};

pub async fn list_users_in_db(pool: &SqlitePool) -> Result<Vec<User>, ApiError> {
    let users = sqlx::query_as::<_, User>("SELECT username, name, avatar_url FROM users")
        .fetch_all(pool)
        .await?;
    Ok(users)
}
