//! Browser tests for the routed shell.
//!
//! Run with `wasm-pack test --headless --firefox crates/app-web`.

#![cfg(target_arch = "wasm32")]

use std::any::Any;

use app_core::FOOTER_TEXT;
use app_web::App;
use js_sys::Promise;
use leptos::mount::mount_to;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{AddEventListenerOptions, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Point the browser at `path` and mount a fresh shell in its own container.
fn mount_at(path: &str) -> (HtmlElement, Box<dyn Any>) {
    let window = web_sys::window().unwrap();
    window
        .history()
        .unwrap()
        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
        .unwrap();

    let document = window.document().unwrap();
    let container: HtmlElement = document
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    // Dropping the handle unmounts the view.
    let handle = mount_to(container.clone(), App);
    (container, Box::new(handle))
}

fn find(container: &HtmlElement, selector: &str) -> Option<Element> {
    container.query_selector(selector).unwrap()
}

fn footer_text(container: &HtmlElement) -> String {
    find(container, ".app > .footer")
        .and_then(|footer| footer.text_content())
        .unwrap_or_default()
}

fn pathname() -> String {
    web_sys::window().unwrap().location().pathname().unwrap()
}

/// Exactly one leaf view is shown, and the footer is beside it.
fn assert_routed(container: &HtmlElement, expected: &str) {
    let shown: Vec<&str> = [".home", ".weather"]
        .into_iter()
        .filter(|selector| find(container, selector).is_some())
        .collect();
    assert_eq!(shown, [expected]);
    assert_eq!(footer_text(container).trim(), FOOTER_TEXT);
}

/// Let queued timers and reactive effects run.
async fn settle() {
    let promise = Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 20)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// `history.back()`, resolved once the browser has fired `popstate`.
async fn go_back() {
    let window = web_sys::window().unwrap();
    let popped = Promise::new(&mut |resolve, _| {
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "popstate", &resolve, &options,
            )
            .unwrap();
    });
    window.history().unwrap().back().unwrap();
    JsFuture::from(popped).await.unwrap();
    settle().await;
}

#[wasm_bindgen_test]
fn root_renders_home_and_footer() {
    let (container, _handle) = mount_at("/");

    assert!(find(&container, ".home").is_some());
    assert!(find(&container, ".weather").is_none());
    assert_eq!(footer_text(&container).trim(), FOOTER_TEXT);
}

#[wasm_bindgen_test]
fn weather_path_renders_weather_and_footer() {
    let (container, _handle) = mount_at("/weather");

    assert!(find(&container, ".weather").is_some());
    assert!(find(&container, ".home").is_none());
    assert_eq!(footer_text(&container).trim(), FOOTER_TEXT);
}

#[wasm_bindgen_test]
fn unknown_path_renders_not_found_and_footer() {
    let (container, _handle) = mount_at("/other");

    let not_found = find(&container, ".not-found").expect("not found view");
    assert!(not_found.text_content().unwrap().contains("Page not found"));
    assert!(find(&container, ".home").is_none());
    assert!(find(&container, ".weather").is_none());
    assert_eq!(footer_text(&container).trim(), FOOTER_TEXT);
}

#[wasm_bindgen_test]
async fn link_then_back_round_trips_between_views() {
    let (container, _handle) = mount_at("/");
    assert_routed(&container, ".home");

    let link: HtmlElement = find(&container, ".cta a")
        .expect("link to the weather page")
        .dyn_into()
        .unwrap();
    link.click();
    settle().await;

    assert_eq!(pathname(), "/weather");
    assert_routed(&container, ".weather");

    go_back().await;

    assert_eq!(pathname(), "/");
    assert_routed(&container, ".home");
}
