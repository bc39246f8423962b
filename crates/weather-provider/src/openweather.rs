//! OpenWeatherMap Provider
//!
//! Implementation of `WeatherProvider` for the OpenWeatherMap current
//! weather endpoint.

use std::time::Duration;

use app_core::{WeatherQuery, WeatherReport};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Result, WeatherError};
use crate::WeatherProvider;

/// OpenWeatherMap configuration
#[derive(Clone, Debug)]
pub struct OpenWeatherConfig {
    /// API key (`appid`)
    pub api_key: String,

    /// API base URL
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openweathermap.org".into(),
            timeout_secs: 10,
        }
    }
}

impl OpenWeatherConfig {
    /// Read `OPENWEATHER_API_KEY` and optional `OPENWEATHER_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENWEATHER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| WeatherError::Config("OPENWEATHER_API_KEY not set".into()))?;
        let base_url = std::env::var("OPENWEATHER_BASE_URL")
            .unwrap_or_else(|_| "https://api.openweathermap.org".into());

        Ok(Self {
            api_key,
            base_url,
            ..Default::default()
        })
    }
}

/// OpenWeatherMap provider
pub struct OpenWeatherProvider {
    client: reqwest::Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherProvider {
    /// Create from configuration
    pub fn from_config(config: OpenWeatherConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(OpenWeatherConfig::from_env()?)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/data/2.5/weather",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, query: &WeatherQuery) -> Result<WeatherReport> {
        let city = query
            .city()
            .ok_or_else(|| WeatherError::InvalidQuery("city is required".into()))?;

        tracing::debug!(city, units = query.units.as_str(), "requesting current weather");

        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", query.units.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(WeatherError::CityNotFound(city.to_string()));
        }
        if !status.is_success() {
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            tracing::warn!(status = status.as_u16(), %message, "OpenWeatherMap request failed");
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        parse_report(&body, query)
    }

    async fn health_check(&self) -> bool {
        self.current(&WeatherQuery::new("London")).await.is_ok()
    }

    fn name(&self) -> &str {
        "OpenWeatherMap"
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    name: String,
    #[serde(default)]
    sys: Option<ApiSys>,
    main: ApiMain,
    #[serde(default)]
    wind: Option<ApiWind>,
    #[serde(default)]
    weather: Vec<ApiCondition>,
    #[serde(default)]
    dt: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ApiSys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ApiWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    description: String,
}

fn parse_report(body: &str, query: &WeatherQuery) -> Result<WeatherReport> {
    let api: ApiResponse = serde_json::from_str(body)?;

    let observed_at = api
        .dt
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .unwrap_or_else(Utc::now);

    Ok(WeatherReport {
        city: api.name,
        country: api.sys.and_then(|s| s.country),
        temperature: api.main.temp,
        feels_like: api.main.feels_like,
        humidity: api.main.humidity,
        wind_speed: api.wind.map_or(0.0, |w| w.speed),
        description: api
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .unwrap_or_default(),
        units: query.units,
        observed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::Units;

    const SAMPLE: &str = r#"{
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {"temp": 11.04, "feels_like": 10.33, "temp_min": 9.9, "temp_max": 12.1, "pressure": 1012, "humidity": 87},
        "wind": {"speed": 4.63, "deg": 230},
        "dt": 1700000000,
        "sys": {"country": "GB", "sunrise": 1699946800, "sunset": 1699979400},
        "name": "London",
        "cod": 200
    }"#;

    #[test]
    fn test_parse_report() {
        let query = WeatherQuery::new("london").with_units(Units::Metric);
        let report = parse_report(SAMPLE, &query).unwrap();

        assert_eq!(report.city, "London");
        assert_eq!(report.country.as_deref(), Some("GB"));
        assert_eq!(report.humidity, 87);
        assert_eq!(report.description, "light rain");
        assert_eq!(report.observed_at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_parse_minimal_report() {
        let body = r#"{"name": "Nowhere", "main": {"temp": 1.0, "feels_like": 0.5, "humidity": 40}}"#;
        let report = parse_report(body, &WeatherQuery::new("Nowhere")).unwrap();

        assert_eq!(report.country, None);
        assert_eq!(report.description, "");
        assert!(report.wind_speed.abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_garbage() {
        let result = parse_report("<html>", &WeatherQuery::new("London"));
        assert!(matches!(result, Err(WeatherError::Serialization(_))));
    }

    #[test]
    fn test_endpoint_trims_slash() {
        let provider = OpenWeatherProvider::from_config(OpenWeatherConfig {
            api_key: "test".into(),
            base_url: "http://localhost:9999/".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(provider.endpoint(), "http://localhost:9999/data/2.5/weather");
    }
}
