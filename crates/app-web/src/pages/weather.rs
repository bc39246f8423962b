//! Weather Page

use app_core::WeatherReport;
use leptos::prelude::*;

use crate::api;
use crate::components::WeatherCard;

#[component]
pub fn WeatherPage() -> impl IntoView {
    let (city, set_city) = signal(String::new());
    let (report, set_report) = signal(None::<WeatherReport>);
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let search = move || {
        let query = city.get().trim().to_string();
        if query.is_empty() || loading.get() {
            return;
        }

        set_loading.set(true);
        set_error.set(None);

        leptos::task::spawn_local(async move {
            match api::fetch_weather(&query).await {
                Ok(found) => set_report.set(Some(found)),
                Err(e) => {
                    leptos::logging::warn!("weather lookup for {query:?} failed: {e}");
                    set_report.set(None);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="weather">
            <h1>"Weather"</h1>

            <div class="search">
                <input
                    type="text"
                    placeholder="Enter a city"
                    prop:value=move || city.get()
                    on:input=move |ev| set_city.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            search();
                        }
                    }
                />
                <button on:click=move |_| search() disabled=move || loading.get()>
                    {move || if loading.get() { "Loading..." } else { "Get Weather" }}
                </button>
            </div>

            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            {move || report.get().map(|report| view! { <WeatherCard report=report /> })}
        </div>
    }
}
