use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use careline::config::AppConfig;
use careline::handlers;
use careline::services::generation::gemini::GeminiProvider;
use careline::services::providers::loyalty_api::LoyaltyApiClient;
use careline::services::providers::order_api::OrderApiClient;
use careline::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    if !config.has_gemini_key() {
        tracing::warn!("GEMINI_API_KEY is not set; generation endpoints are disabled");
    }
    if !config.has_order_credentials() {
        tracing::warn!("ORDER_API_TOKEN missing or malformed; order lookups are disabled");
    }
    if !config.has_loyalty_credentials() {
        tracing::warn!("loyalty credentials missing or malformed; loyalty lookups are disabled");
    }

    let timeout = Duration::from_secs(config.request_timeout_secs);

    let generation = GeminiProvider::new(
        config.gemini_api_key.clone(),
        config.gemini_base_url.clone(),
        config.gemini_model.clone(),
        timeout,
    );
    let orders = OrderApiClient::new(
        config.order_api_url.clone(),
        config.order_api_token.clone(),
        timeout,
    );
    let loyalty = LoyaltyApiClient::new(
        config.loyalty_api_url.clone(),
        config.loyalty_api_key.clone(),
        config.loyalty_access_token.clone(),
        timeout,
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        generation: Box::new(generation),
        orders: Box::new(orders),
        loyalty: Box::new(loyalty),
    });

    let app = Router::new()
        .route("/", get(handlers::home::home))
        .route("/calculate", post(handlers::generate::calculate))
        .route("/text", post(handlers::generate::process_text))
        .route("/support", post(handlers::support::support))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
