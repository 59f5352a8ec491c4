use sqlx::SqliteConnection;

use crate::errors::ApiError;

mod article_helpers;
mod comment_helpers;
mod topic_helpers;
mod user_helpers;

pub use article_helpers::*;
pub use comment_helpers::*;
pub use topic_helpers::*;
pub use user_helpers::*;

// ----------------- Helper Functions -----------------

pub(crate) async fn article_exists(
    conn: &mut SqliteConnection,
    article_id: i64,
) -> Result<bool, ApiError> {
    let found: Option<(i64,)> =
        sqlx::query_as("SELECT article_id FROM articles WHERE article_id = ?1")
            .bind(article_id)
            .fetch_optional(conn)
            .await?;
    Ok(found.is_some())
}

pub(crate) async fn topic_exists(conn: &mut SqliteConnection, slug: &str) -> Result<bool, ApiError> {
    let found: Option<(String,)> = sqlx::query_as("SELECT slug FROM topics WHERE slug = ?1")
        .bind(slug)
        .fetch_optional(conn)
        .await?;
    Ok(found.is_some())
}
