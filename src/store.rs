//! The store-client seam between handlers and the query layer.

use sqlx::SqlitePool;

use crate::data_formats::NewComment;
use crate::db_helpers::{
    add_comment_to_article_in_db, delete_comment_in_db, get_article_in_db,
    get_comments_for_article_in_db, list_articles_in_db, list_topics_in_db, list_users_in_db,
    update_article_votes_in_db,
};
use crate::errors::ApiError;
use crate::models::{Article, ArticleDetail, ArticleSummary, Comment, Topic, User};
use crate::validation::{ArticleFilter, CommentPage};

/// Everything the HTTP layer needs from persistence. Implementations report
/// failures already classified as [`ApiError`]s.
#[axum::async_trait]
pub trait NewsStore: Send + Sync {
    async fn list_topics(&self) -> Result<Vec<Topic>, ApiError>;

    async fn get_article(&self, article_id: i64) -> Result<ArticleDetail, ApiError>;
    async fn list_articles(&self, filter: &ArticleFilter) -> Result<Vec<ArticleSummary>, ApiError>;
    async fn update_article_votes(&self, article_id: i64, delta: i64) -> Result<Article, ApiError>;

    /// Fails with `NotFound` when the article itself is unknown.
    async fn list_comments(
        &self,
        article_id: i64,
        page: &CommentPage,
    ) -> Result<Vec<Comment>, ApiError>;
    async fn insert_comment(&self, article_id: i64, comment: NewComment)
        -> Result<Comment, ApiError>;
    async fn delete_comment(&self, comment_id: i64) -> Result<(), ApiError>;

    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
}

#[axum::async_trait]
impl NewsStore for SqlitePool {
    async fn list_topics(&self) -> Result<Vec<Topic>, ApiError> {
        list_topics_in_db(self).await
    }

    async fn get_article(&self, article_id: i64) -> Result<ArticleDetail, ApiError> {
        get_article_in_db(self, article_id).await
    }

    async fn list_articles(&self, filter: &ArticleFilter) -> Result<Vec<ArticleSummary>, ApiError> {
        list_articles_in_db(self, filter).await
    }

    async fn update_article_votes(&self, article_id: i64, delta: i64) -> Result<Article, ApiError> {
        update_article_votes_in_db(self, article_id, delta).await
    }

    async fn list_comments(
        &self,
        article_id: i64,
        page: &CommentPage,
    ) -> Result<Vec<Comment>, ApiError> {
        get_comments_for_article_in_db(self, article_id, page).await
    }

    async fn insert_comment(
        &self,
        article_id: i64,
        comment: NewComment,
    ) -> Result<Comment, ApiError> {
        add_comment_to_article_in_db(self, article_id, comment).await
    }

    async fn delete_comment(&self, comment_id: i64) -> Result<(), ApiError> {
        delete_comment_in_db(self, comment_id).await
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        list_users_in_db(self).await
    }
}
