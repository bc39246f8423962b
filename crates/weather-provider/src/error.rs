//! Error Types for Weather Providers

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeatherError>;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WeatherError {
    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Upstream { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::CityNotFound(city) => format!("No weather found for '{city}'."),
            Self::InvalidQuery(msg) => format!("Invalid request: {msg}"),
            Self::Upstream { .. } | Self::Network(_) => {
                "The weather service is currently unavailable. Please try again.".into()
            }
            _ => "An unexpected error occurred.".into(),
        }
    }
}
