use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::{Article, ArticleDetail, ArticleSummary};
use crate::validation::{ArticleFilter, SortBy, SortOrder};

use super::{article_exists, topic_exists};

const SINGLE_ARTICLE_QUERY: &str = r#"
            SELECT articles.article_id,
                   articles.title,
                   articles.topic,
                   articles.author,
                   articles.body,
                   articles.created_at,
                   articles.votes,
                   articles.article_img_url,
                   COUNT(comments.comment_id) AS comment_count
            FROM   articles
                   LEFT JOIN comments
                          ON comments.article_id = articles.article_id
            WHERE  articles.article_id = ?1
            GROUP  BY articles.article_id
"#;

const UPDATE_VOTES_QUERY: &str = r#"
            UPDATE articles
            SET    votes = votes + ?1
            WHERE  article_id = ?2
                   AND votes BETWEEN ?3 AND ?4
            RETURNING article_id, title, topic, author, body, created_at, votes, article_img_url
"#;

/// Range the current tally must lie in for `votes + delta` to stay an i64.
fn vote_bounds(delta: i64) -> (i64, i64) {
    if delta >= 0 {
        (i64::MIN, i64::MAX - delta)
    } else {
        (i64::MIN - delta, i64::MAX)
    }
}

/// Builds the listing query. Only the closed `SortBy`/`SortOrder` keywords
/// are spliced in; the topic filter is always bound as `?1`.
fn article_listing_query(sort_by: SortBy, order: SortOrder) -> String {
    format!(
        r#"
            SELECT articles.article_id,
                   articles.title,
                   articles.topic,
                   articles.author,
                   articles.created_at,
                   articles.votes,
                   articles.article_img_url,
                   COUNT(comments.comment_id) AS comment_count
            FROM   articles
                   LEFT JOIN comments
                          ON comments.article_id = articles.article_id
            WHERE  ( ?1 IS NULL
                      OR articles.topic = ?1 )
            GROUP  BY articles.article_id
            ORDER  BY {} {}
        "#,
        sort_by.column(),
        order.keyword()
    )
}

pub async fn get_article_in_db(pool: &SqlitePool, article_id: i64) -> Result<ArticleDetail, ApiError> {
    let article = sqlx::query_as::<_, ArticleDetail>(SINGLE_ARTICLE_QUERY)
        .bind(article_id)
        .fetch_optional(pool)
        .await?;
    article.ok_or_else(ApiError::not_found)
}

pub async fn list_articles_in_db(
    pool: &SqlitePool,
    filter: &ArticleFilter,
) -> Result<Vec<ArticleSummary>, ApiError> {
    let mut tx = pool.begin().await?;
    if let Some(topic) = filter.topic.as_deref() {
        if !topic_exists(&mut tx, topic).await? {
            return Err(ApiError::not_found());
        }
    }
    let query = article_listing_query(filter.sort_by, filter.order);
    let articles = sqlx::query_as::<_, ArticleSummary>(&query)
        .bind(filter.topic.as_deref())
        .fetch_all(&mut tx)
        .await?;
    tx.commit().await?;
    Ok(articles)
}

pub async fn update_article_votes_in_db(
    pool: &SqlitePool,
    article_id: i64,
    delta: i64,
) -> Result<Article, ApiError> {
    let (lowest, highest) = vote_bounds(delta);
    let mut tx = pool.begin().await?;
    let article = sqlx::query_as::<_, Article>(UPDATE_VOTES_QUERY)
        .bind(delta)
        .bind(article_id)
        .bind(lowest)
        .bind(highest)
        .fetch_optional(&mut tx)
        .await?;
    let Some(article) = article else {
        // Nothing updated: the article is missing or the tally would overflow.
        return if article_exists(&mut tx, article_id).await? {
            Err(ApiError::MalformedInput)
        } else {
            Err(ApiError::not_found())
        };
    };
    tx.commit().await?;
    Ok(article)
}
