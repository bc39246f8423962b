//! Home Page

use app_core::Page;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <h1>"Weather App"</h1>
                <p class="tagline">"Current conditions for any city, at a glance"</p>
                <div class="cta">
                    <a href=Page::Weather.path() class="btn btn-primary">"Check the Weather"</a>
                </div>
            </header>
        </div>
    }
}
