mod config;
mod lcd;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // `.env` is optional; real environment variables take precedence.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::GalleryConfig::from_env().expect("invalid gallery configuration");
    if config.physicals_contract.is_none() {
        tracing::warn!("PHYSICALS_CONTRACT not set; physical print status disabled");
    }

    let lcd = lcd::LcdClient::new(&config.lcd_url, config.timeouts).expect("LCD client init failed");
    tracing::info!(lcd = lcd.base_url(), contract = %config.cw721_contract, "LCD client initialized");

    let port = config.port;
    let state = state::AppState::new(Arc::new(lcd), config);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "gallery listening");
    axum::serve(listener, app).await.expect("server failed");
}
