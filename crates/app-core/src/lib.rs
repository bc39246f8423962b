//! # app-core
//!
//! Framework-independent model of the weather-app shell.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        AppShell                          │
//! │  ┌──────────────┐   ┌──────────────┐   ┌─────────────┐   │
//! │  │  Navigator   │──▶│ Route switch │──▶│  Leaf view  │   │
//! │  │ (history)    │   │ (RouteTable) │   │ Home/Weather│   │
//! │  └──────────────┘   └──────────────┘   └─────────────┘   │
//! │                        Footer                            │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The current path is always passed in explicitly, so the route switch is a
//! pure function from path + route table to the selected view. The Leptos
//! frontend and the server's history fallback both resolve paths through
//! this crate.

pub mod error;
pub mod navigation;
pub mod route;
pub mod shell;
pub mod weather;

pub use error::{Result, ShellError};
pub use navigation::Navigator;
pub use route::{normalize_path, Page, RouteEntry, RouteTable};
pub use shell::{render, RoutedView, ShellView, FOOTER_TEXT};
pub use weather::{Units, WeatherQuery, WeatherReport};
