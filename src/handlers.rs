use std::sync::{Arc, OnceLock};

use axum::{http::StatusCode, Extension, Json};

use crate::{
    data_formats::{
        ArticleQueryParams, ArticleWrapper, CommentQueryParams, CommentRequest, CommentWrapper,
        EndpointsWrapper, MultipleArticlesWrapper, MultipleCommentsWrapper, TopicsWrapper,
        UpdateVotesRequest, UsersWrapper,
    },
    errors::ApiError,
    extractors::{PathId, ValidJson, ValidQuery},
    models::{Article, ArticleDetail, Comment},
    store::NewsStore,
    JsonResponse,
};

type Store = Extension<Arc<dyn NewsStore>>;
type JsonResult<T> = Result<Json<T>, ApiError>;

const ENDPOINTS: &str = include_str!("../endpoints.json");

/// The embedded descriptor, parsed on first use.
fn endpoints() -> Result<&'static serde_json::Value, ApiError> {
    static PARSED: OnceLock<Result<serde_json::Value, String>> = OnceLock::new();
    PARSED
        .get_or_init(|| serde_json::from_str(ENDPOINTS).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| ApiError::Internal(format!("endpoints descriptor: {e}")))
}

// ----------------- Helper Handlers -----------------
pub async fn alive() -> &'static str {
    "alive"
}

pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

pub async fn get_api() -> JsonResult<EndpointsWrapper> {
    let endpoints = endpoints()?.clone();
    Ok(Json(EndpointsWrapper { endpoints }))
}

// ----------------- Topic Handlers -----------------
#[tracing::instrument(skip_all)]
pub async fn get_topics(Extension(store): Store) -> JsonResult<TopicsWrapper> {
    let topics = store.list_topics().await?;
    Ok(Json(TopicsWrapper { topics }))
}

// ----------------- Article Handlers -----------------
#[tracing::instrument(skip(store))]
pub async fn get_article(
    PathId(article_id): PathId,
    Extension(store): Store,
) -> JsonResult<ArticleWrapper<ArticleDetail>> {
    let article = store.get_article(article_id).await?;
    Ok(Json(ArticleWrapper { article }))
}

#[tracing::instrument(skip(store))]
pub async fn list_articles(
    ValidQuery(params): ValidQuery<ArticleQueryParams>,
    Extension(store): Store,
) -> JsonResult<MultipleArticlesWrapper> {
    let filter = params.into_filter()?;
    let articles = store.list_articles(&filter).await?;
    Ok(Json(MultipleArticlesWrapper { articles }))
}

#[tracing::instrument(skip(store))]
pub async fn update_article_votes(
    PathId(article_id): PathId,
    Extension(store): Store,
    ValidJson(UpdateVotesRequest { inc_votes }): ValidJson<UpdateVotesRequest>,
) -> JsonResult<ArticleWrapper<Article>> {
    let article = store.update_article_votes(article_id, inc_votes).await?;
    Ok(Json(ArticleWrapper { article }))
}

// ----------------- Comment Handlers -----------------
#[tracing::instrument(skip(store))]
pub async fn get_article_comments(
    PathId(article_id): PathId,
    ValidQuery(params): ValidQuery<CommentQueryParams>,
    Extension(store): Store,
) -> JsonResult<MultipleCommentsWrapper> {
    let page = params.into_page()?;
    let comments = store.list_comments(article_id, &page).await?;
    Ok(Json(MultipleCommentsWrapper { comments }))
}

#[tracing::instrument(skip(store, request))]
pub async fn post_article_comment(
    PathId(article_id): PathId,
    Extension(store): Store,
    ValidJson(request): ValidJson<CommentRequest>,
) -> Result<JsonResponse<CommentWrapper<Comment>>, ApiError> {
    let new_comment = request.validate()?;
    let comment = store.insert_comment(article_id, new_comment).await?;
    tracing::info!(comment_id = comment.comment_id, "comment created");
    Ok((StatusCode::CREATED, Json(CommentWrapper { comment })))
}

#[tracing::instrument(skip(store))]
pub async fn delete_comment(
    PathId(comment_id): PathId,
    Extension(store): Store,
) -> Result<StatusCode, ApiError> {
    store.delete_comment(comment_id).await?;
    tracing::info!("comment deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ----------------- User Handlers -----------------
#[tracing::instrument(skip_all)]
pub async fn get_users(Extension(store): Store) -> JsonResult<UsersWrapper> {
    let users = store.list_users().await?;
    Ok(Json(UsersWrapper { users }))
}
