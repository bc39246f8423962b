//! UI Components

use app_core::{WeatherReport, FOOTER_TEXT};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! { <div class="footer">{FOOTER_TEXT}</div> }
}

/// Current conditions card
#[component]
pub fn WeatherCard(report: WeatherReport) -> impl IntoView {
    let observed = report
        .observed_at
        .with_timezone(&chrono::Local)
        .format("%H:%M")
        .to_string();

    view! {
        <div class="weather-card">
            <h2 class="location">{report.location()}</h2>
            <p class="temperature">{report.temperature_label()}</p>
            <p class="description">{report.description.clone()}</p>
            <dl class="details">
                <dt>"Feels like"</dt>
                <dd>{report.feels_like_label()}</dd>
                <dt>"Humidity"</dt>
                <dd>{format!("{}%", report.humidity)}</dd>
                <dt>"Wind"</dt>
                <dd>{report.wind_label()}</dd>
            </dl>
            <span class="observed">"Updated " {observed}</span>
        </div>
    }
}
