//! Main App Component

use app_core::{render, Page, RouteTable, RoutedView};
use leptos::prelude::*;
use leptos_router::{components::Router, hooks::use_location};

use crate::components::Footer;
use crate::pages::{HomePage, NotFoundPage, WeatherPage};

/// Root application component
///
/// The footer sits beside the routed region, so it survives every
/// navigation.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <RouteSwitch />
                <Footer />
            </div>
        </Router>
    }
}

/// Renders the single view selected for the current location.
///
/// Selection goes through `app_core::render`, the same switch the server's
/// history fallback uses, instead of `<Routes>`; keep the two in step.
#[component]
fn RouteSwitch() -> impl IntoView {
    let table = RouteTable::default();
    let location = use_location();
    let routed = Memo::new(move |_| render(&location.pathname.get(), &table).routed);

    move || match routed.get() {
        RoutedView::Page { page: Page::Home } => view! { <HomePage /> }.into_any(),
        RoutedView::Page { page: Page::Weather } => view! { <WeatherPage /> }.into_any(),
        RoutedView::NotFound { path } => view! { <NotFoundPage path=path /> }.into_any(),
    }
}
