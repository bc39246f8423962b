//! Fallback for paths with no route

use app_core::Page;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p class="path">{path}</p>
            <a href=Page::Home.path() class="btn">"Back to Home"</a>
        </div>
    }
}
