//! # weather-provider
//!
//! Current-conditions lookups behind a single trait, so the server can swap
//! the live OpenWeatherMap client for the static mock without touching its
//! handlers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use weather_provider::{MockWeatherProvider, WeatherProvider};
//! use app_core::WeatherQuery;
//!
//! let provider = MockWeatherProvider::new();
//! let report = provider.current(&WeatherQuery::new("London")).await?;
//! ```

pub mod error;
mod mock;
mod openweather;

pub use error::{Result, WeatherError};
pub use mock::MockWeatherProvider;
pub use openweather::{OpenWeatherConfig, OpenWeatherProvider};

use app_core::{WeatherQuery, WeatherReport};
use async_trait::async_trait;

/// Weather provider trait (Strategy pattern)
///
/// Implement this for each upstream weather service.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for the query's city
    async fn current(&self, query: &WeatherQuery) -> Result<WeatherReport>;

    /// Check if the upstream service is reachable
    async fn health_check(&self) -> bool;

    /// Provider name
    fn name(&self) -> &str;
}
