//! weather-app HTTP Server
//!
//! Axum-based server that hosts the compiled WASM shell, answers deep links
//! to client-side routes, and proxies current-weather lookups.

mod config;
mod handlers;
mod router;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app_core::RouteTable;
use weather_provider::{MockWeatherProvider, OpenWeatherProvider, WeatherProvider};

use crate::config::ServerConfig;
use crate::router::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Initialize weather provider
    let provider: Arc<dyn WeatherProvider> = match OpenWeatherProvider::from_env() {
        Ok(provider) => {
            tracing::info!("✓ OpenWeatherMap configured");
            Arc::new(provider)
        }
        Err(e) => {
            tracing::warn!("⚠ {} - serving mock weather data", e);
            tracing::warn!("  Set OPENWEATHER_API_KEY in .env for live data");
            Arc::new(MockWeatherProvider::new())
        }
    };

    // Verify upstream connection
    if provider.health_check().await {
        tracing::info!("✓ Connected to {}", provider.name());
    } else {
        tracing::warn!("⚠ {} not reachable - weather lookups will fail", provider.name());
    }

    if !config.index_path().exists() {
        tracing::warn!(
            "⚠ {} not found - build the frontend into {}",
            config.index_path().display(),
            config.static_dir.display()
        );
    }

    let routes = RouteTable::default();
    tracing::info!("Client routes:");
    for entry in routes.entries() {
        tracing::info!("  {:<10} → {}", entry.pattern, entry.page);
    }

    // Build application state
    let state = AppState {
        provider,
        routes: Arc::new(routes),
        config: Arc::new(config.clone()),
    };

    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🌦  weather-app server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health              - Health check");
    tracing::info!("  GET  /api/weather?city=   - Current conditions");
    tracing::info!("  GET  /*                   - Frontend (history fallback)");

    axum::serve(listener, app).await?;

    Ok(())
}
