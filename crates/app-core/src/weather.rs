//! Weather Data Types
//!
//! Shared between the API server and the Weather page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Measurement system for a report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "c" | "celsius" => Some(Self::Metric),
            "imperial" | "f" | "fahrenheit" => Some(Self::Imperial),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    pub const fn temperature_symbol(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    pub const fn speed_symbol(self) -> &'static str {
        match self {
            Self::Metric => "m/s",
            Self::Imperial => "mph",
        }
    }
}

/// Request for current conditions in a city
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub city: String,
    #[serde(default)]
    pub units: Units,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            units: Units::default(),
        }
    }

    #[must_use]
    pub const fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    /// City name with surrounding whitespace removed, or `None` if blank
    pub fn city(&self) -> Option<&str> {
        let city = self.city.trim();
        (!city.is_empty()).then_some(city)
    }
}

/// Current conditions for one city
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub country: Option<String>,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub description: String,
    pub units: Units,
    pub observed_at: DateTime<Utc>,
}

impl WeatherReport {
    /// "London, GB" or just the city when the country is unknown
    pub fn location(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.city, country),
            None => self.city.clone(),
        }
    }

    pub fn temperature_label(&self) -> String {
        format!("{:.1}{}", self.temperature, self.units.temperature_symbol())
    }

    pub fn feels_like_label(&self) -> String {
        format!("{:.1}{}", self.feels_like, self.units.temperature_symbol())
    }

    pub fn wind_label(&self) -> String {
        format!("{:.1} {}", self.wind_speed, self.units.speed_symbol())
    }
}
