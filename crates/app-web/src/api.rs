//! API Client

use app_core::WeatherReport;

/// Fetch current conditions for `city` from the backend
pub async fn fetch_weather(city: &str) -> Result<WeatherReport, String> {
    let client = reqwest::Client::new();

    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());

    let response = client
        .get(format!("{origin}/api/weather"))
        .query(&[("city", city)])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response
            .json::<WeatherReport>()
            .await
            .map_err(|e| e.to_string())
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(data["error"]
            .as_str()
            .unwrap_or("Request failed")
            .to_string())
    }
}
