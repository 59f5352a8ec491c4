use sqlx::SqlitePool;

use crate::{errors::ApiError, models::Topic};

pub async fn list_topics_in_db(pool: &SqlitePool) -> Result<Vec<Topic>, ApiError> {
    let topics = sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics")
        .fetch_all(pool)
        .await?;
    Ok(topics)
}
