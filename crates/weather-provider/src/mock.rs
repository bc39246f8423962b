//! Mock Weather Provider
//!
//! For testing and demo purposes. Returns fixed metric readings.

use app_core::{Units, WeatherQuery, WeatherReport};
use async_trait::async_trait;
use chrono::Utc;

use crate::error::{Result, WeatherError};
use crate::WeatherProvider;

/// Mock provider with static conditions
#[derive(Debug, Default)]
pub struct MockWeatherProvider;

impl MockWeatherProvider {
    pub const fn new() -> Self {
        Self
    }

    /// (name, country, temp °C, feels like °C, humidity %, wind m/s, description)
    #[allow(clippy::type_complexity)]
    fn base_conditions(
        city: &str,
    ) -> Option<(&'static str, &'static str, f64, f64, u8, f64, &'static str)> {
        match city.to_lowercase().as_str() {
            "london" => Some(("London", "GB", 11.0, 9.5, 81, 4.1, "light rain")),
            "paris" => Some(("Paris", "FR", 14.0, 13.2, 67, 3.6, "scattered clouds")),
            "new york" => Some(("New York", "US", 18.0, 17.4, 55, 5.7, "clear sky")),
            "tokyo" => Some(("Tokyo", "JP", 21.0, 21.3, 72, 2.6, "few clouds")),
            "chennai" => Some(("Chennai", "IN", 31.0, 37.8, 74, 4.6, "haze")),
            "sydney" => Some(("Sydney", "AU", 19.0, 18.6, 63, 6.2, "broken clouds")),
            "oslo" => Some(("Oslo", "NO", 2.0, -1.9, 86, 3.1, "snow")),
            _ => None,
        }
    }
}

fn to_fahrenheit(celsius: f64) -> f64 {
    celsius.mul_add(9.0 / 5.0, 32.0)
}

fn to_mph(meters_per_second: f64) -> f64 {
    meters_per_second * 2.236_936
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn current(&self, query: &WeatherQuery) -> Result<WeatherReport> {
        let city = query
            .city()
            .ok_or_else(|| WeatherError::InvalidQuery("city is required".into()))?;

        let (name, country, temp, feels_like, humidity, wind, description) =
            Self::base_conditions(city)
                .ok_or_else(|| WeatherError::CityNotFound(city.to_string()))?;

        let (temperature, feels_like, wind_speed) = match query.units {
            Units::Metric => (temp, feels_like, wind),
            Units::Imperial => (to_fahrenheit(temp), to_fahrenheit(feels_like), to_mph(wind)),
        };

        Ok(WeatherReport {
            city: name.into(),
            country: Some(country.into()),
            temperature,
            feels_like,
            humidity,
            wind_speed,
            description: description.into(),
            units: query.units,
            observed_at: Utc::now(),
        })
    }

    async fn health_check(&self) -> bool {
        true // Mock always healthy
    }

    fn name(&self) -> &str {
        "MockWeather"
    }
}
