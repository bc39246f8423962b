//! weather-app Web Frontend
//!
//! Leptos-based WASM shell: a router, two pages and a persistent footer.
//! The binary target mounts [`App`] to the document body.

mod api;
mod app;
mod components;
mod pages;

pub use app::App;
