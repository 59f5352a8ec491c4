use news_api::{init_tracing, run_app, Config};

#[tokio::main]
async fn main() -> news_api::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = Config::from_env()?;
    if let Err(error) = run_app(config).await {
        tracing::error!(?error, "server exited with an error");
        return Err(error);
    }
    Ok(())
}
