//! Application State

use std::sync::Arc;

use app_core::RouteTable;
use weather_provider::WeatherProvider;

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Weather provider (OpenWeatherMap or mock)
    pub provider: Arc<dyn WeatherProvider>,

    /// Client-side routes, used to decide the status of history fallbacks
    pub routes: Arc<RouteTable>,

    pub config: Arc<ServerConfig>,
}
