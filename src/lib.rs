mod config;
mod data_formats;
mod db_helpers;
mod errors;
mod extractors;
mod handlers;
mod middleware;
mod models;
mod store;
mod validation;

use std::{net::TcpListener, str::FromStr, sync::Arc, time::Duration};

use anyhow::Context;
pub use anyhow::Result;
use axum::http::StatusCode;
use axum::{middleware::from_fn_with_state, routing::*, Extension, Json, Router};
use handlers::*;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

pub use config::Config;
pub use data_formats::*;
pub use errors::ApiError;
pub use models::*;
pub use store::NewsStore;
pub use validation::{ArticleFilter, CommentPage, SortBy, SortOrder};

pub type JsonResponse<T> = (StatusCode, Json<T>);

const DEFAULT_LOG_FILTER: &str = "news_api=info,tower_http=info";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn run_app(config: Config) -> Result<()> {
    let pool = init_db(&config).await?;
    let router = make_router(Arc::new(pool), config.request_timeout);
    let listener = TcpListener::bind(config.address)
        .with_context(|| format!("Failed to bind {}", config.address))?;
    serve(listener, router).await
}

/// Serves `router` on an already bound listener until ctrl-c.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    tracing::info!(address = %listener.local_addr()?, "server started");
    axum::Server::from_tcp(listener)?
        .serve(router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

/// Opens the pool and applies the embedded migrations. An in-memory
/// database is pinned to one long-lived connection so its schema survives.
pub async fn init_db(config: &Config) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("Invalid DATABASE_URL {}", config.database_url))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool_options = SqlitePoolOptions::new().acquire_timeout(config.request_timeout);
    let pool_options = if config.database_url.contains(":memory:") {
        pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        pool_options.max_connections(config.max_connections)
    };
    let pool = pool_options
        .connect_with(options)
        .await
        .context("Failed to connect to the database")?;
    tracing::info!("running migrations");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("migrations completed");
    Ok(pool)
}

pub fn make_router(store: Arc<dyn NewsStore>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/check_health", get(alive))
        .route("/api", get(get_api))
        .route("/api/topics", get(get_topics))
        .route("/api/articles", get(list_articles))
        .route(
            "/api/articles/:article_id",
            get(get_article).patch(update_article_votes),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(get_article_comments).post(post_article_comment),
        )
        .route("/api/comments/:comment_id", delete(delete_comment))
        .route("/api/users", get(get_users))
        .fallback(not_found)
        .layer(from_fn_with_state(
            request_timeout,
            middleware::request_deadline,
        ))
        .layer(Extension(store))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
