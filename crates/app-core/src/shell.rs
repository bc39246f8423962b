//! Shell Composition
//!
//! `render(path) = Container(Switch(path, table), Footer(FOOTER_TEXT))`

use serde::Serialize;

use crate::route::{Page, RouteTable};

/// Static label rendered below the routed region on every path
pub const FOOTER_TEXT: &str = "Ramya S - 212222040130";

/// Content of the routed region
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum RoutedView {
    /// A matched leaf view
    Page { page: Page },
    /// No route entry matched
    NotFound { path: String },
}

impl RoutedView {
    pub const fn page(page: Page) -> Self {
        Self::Page { page }
    }

    pub fn is_page(&self, page: Page) -> bool {
        matches!(self, Self::Page { page: p } if *p == page)
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Everything the shell renders for one path
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShellView {
    pub routed: RoutedView,
    pub footer: &'static str,
}

/// Compose the shell for `path`.
///
/// Exactly one routed view is produced; the footer is present regardless
/// of whether the path matched.
pub fn render(path: &str, table: &RouteTable) -> ShellView {
    let routed = table.resolve(path).map_or_else(
        || RoutedView::NotFound {
            path: path.to_string(),
        },
        RoutedView::page,
    );

    ShellView {
        routed,
        footer: FOOTER_TEXT,
    }
}
