use sqlx::SqlitePool;

use crate::data_formats::NewComment;
use crate::errors::ApiError;
use crate::models::Comment;
use crate::validation::{CommentPage, SortOrder};

use super::article_exists;

fn comment_page_query(order: SortOrder) -> String {
    format!(
        r#"
        SELECT comment_id, body, article_id, author, votes, created_at
        FROM   comments
        WHERE  article_id = ?1
        ORDER  BY created_at {order},
                  comment_id {order}
        LIMIT  ?2 OFFSET ?3
        "#,
        order = order.keyword()
    )
}

pub async fn get_comments_for_article_in_db(
    pool: &SqlitePool,
    article_id: i64,
    page: &CommentPage,
) -> Result<Vec<Comment>, ApiError> {
    let mut tx = pool.begin().await?;
    if !article_exists(&mut tx, article_id).await? {
        return Err(ApiError::not_found());
    }
    let query = comment_page_query(page.order);
    let comments = sqlx::query_as::<_, Comment>(&query)
        .bind(article_id)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&mut tx)
        .await?;
    tx.commit().await?;
    Ok(comments)
}

/// Inserts a comment. An unknown article or author trips the foreign keys
/// and surfaces as `ApiError::ReferentialViolation`.
pub async fn add_comment_to_article_in_db(
    pool: &SqlitePool,
    article_id: i64,
    NewComment { author, body }: NewComment,
) -> Result<Comment, ApiError> {
    let mut tx = pool.begin().await?;
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (author, body, article_id)
        VALUES (?1, ?2, ?3)
        RETURNING comment_id, body, article_id, author, votes, created_at
        "#,
    )
    .bind(author)
    .bind(body)
    .bind(article_id)
    .fetch_one(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(comment)
}

pub async fn delete_comment_in_db(pool: &SqlitePool, comment_id: i64) -> Result<(), ApiError> {
    let result = sqlx::query("DELETE FROM comments WHERE comment_id = ?1")
        .bind(comment_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ApiError::not_found());
    }
    Ok(())
}
