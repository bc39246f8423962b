//! HTTP Handlers

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use app_core::{Units, WeatherQuery, WeatherReport};
use weather_provider::WeatherError;

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub provider: String,
}

#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub units: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>, code: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

fn weather_error(err: &WeatherError) -> ApiError {
    let (status, code) = match err {
        WeatherError::CityNotFound(_) => (StatusCode::NOT_FOUND, "CITY_NOT_FOUND"),
        WeatherError::InvalidQuery(_) => (StatusCode::BAD_REQUEST, "INVALID_QUERY"),
        WeatherError::Upstream { .. } | WeatherError::Network(_) => {
            (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR")
        }
        WeatherError::Config(_) | WeatherError::Serialization(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
    };
    api_error(status, err.user_message(), code)
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
///
/// Never calls the provider; upstream reachability is checked once at
/// startup.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        provider: state.provider.name().to_string(),
    })
}

/// Current conditions for `?city=`
pub async fn current_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherReport>, ApiError> {
    let city = params.city.unwrap_or_default();

    let units = match params.units.as_deref() {
        Some(raw) => Units::parse(raw).ok_or_else(|| {
            api_error(
                StatusCode::BAD_REQUEST,
                format!("Unknown units '{raw}'"),
                "INVALID_QUERY",
            )
        })?,
        None => state.config.default_units,
    };

    let query = WeatherQuery::new(city).with_units(units);
    if query.city().is_none() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "City is required",
            "INVALID_QUERY",
        ));
    }

    let report = state.provider.current(&query).await.map_err(|e| {
        if e.is_retryable() {
            tracing::warn!("Weather lookup failed for {:?}: {}", query.city, e);
        } else {
            tracing::debug!("Weather lookup rejected for {:?}: {}", query.city, e);
        }
        weather_error(&e)
    })?;

    Ok(Json(report))
}

/// History-API fallback for paths that are not static files.
///
/// Known client routes get the shell document with 200. Anything else still
/// gets the shell (so the client can render its Not Found view) but with 404.
pub async fn spa_fallback(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();

    if path.starts_with("/api/") {
        return api_error(StatusCode::NOT_FOUND, "Not found", "NOT_FOUND").into_response();
    }

    let status = if state.routes.resolve(path).is_some() {
        StatusCode::OK
    } else {
        tracing::debug!(path, "no client route matches");
        StatusCode::NOT_FOUND
    };

    match tokio::fs::read_to_string(state.config.index_path()).await {
        Ok(index) => (status, Html(index)).into_response(),
        Err(e) => {
            tracing::error!(
                "Cannot read {}: {}",
                state.config.index_path().display(),
                e
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Frontend not built: index.html missing",
            )
                .into_response()
        }
    }
}
