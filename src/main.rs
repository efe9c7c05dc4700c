use dotenv::dotenv;
use hn_top::app;
use hn_top::state::{AppConfig, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use topstories::api::HttpTextFetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    hn_top::init_tracing();
    tracing::info!("Log initialized");

    let config = AppConfig::from_env();
    tracing::info!(
        "HTTP client timeout={:?}, user_agent={}",
        config.http_timeout,
        config.user_agent
    );

    let http_client = hn_top::build_http_client(&config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app_state = AppState {
        fetcher: Arc::new(HttpTextFetcher::new(http_client)),
    };

    tracing::info!("Top stories server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let router = app(app_state);
    axum::serve(listener, router).await?;

    Ok(())
}
