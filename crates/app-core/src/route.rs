//! Route Table
//!
//! Static path-to-page mappings and the route switch that selects one of them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShellError};

/// Leaf views the shell can route to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Weather,
}

impl Page {
    /// Canonical client path of this page
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Weather => "/weather",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Weather => "Weather",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A (path pattern, page) pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: String,
    pub page: Page,
}

impl RouteEntry {
    pub fn new(pattern: impl Into<String>, page: Page) -> Self {
        Self {
            pattern: pattern.into(),
            page,
        }
    }
}

/// Immutable, ordered set of route entries with unique patterns
#[derive(Clone, Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl Default for RouteTable {
    /// `/` → Home, `/weather` → Weather
    fn default() -> Self {
        Self {
            entries: vec![
                RouteEntry::new(Page::Home.path(), Page::Home),
                RouteEntry::new(Page::Weather.path(), Page::Weather),
            ],
        }
    }
}

impl RouteTable {
    /// Build a table, rejecting patterns that collide after normalization.
    pub fn new(entries: impl IntoIterator<Item = RouteEntry>) -> Result<Self> {
        let mut table = Vec::new();
        for entry in entries {
            if !entry.pattern.starts_with('/') {
                return Err(ShellError::InvalidPath(entry.pattern));
            }
            let pattern = normalize_path(&entry.pattern);
            if table.iter().any(|e: &RouteEntry| e.pattern == pattern) {
                return Err(ShellError::DuplicateRoute(pattern));
            }
            table.push(RouteEntry::new(pattern, entry.page));
        }
        Ok(Self { entries: table })
    }

    /// Select the first entry whose pattern matches `path`.
    pub fn resolve(&self, path: &str) -> Option<Page> {
        if !path.is_empty() && !path.starts_with('/') {
            return None;
        }
        let path = normalize_path(path);
        self.entries
            .iter()
            .find(|entry| entry.pattern == path)
            .map(|entry| entry.page)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reduce a location to the form route patterns are compared against.
///
/// Query and fragment are dropped, trailing slashes removed, the result
/// lowercased, and the empty path becomes `/`.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/".into()
    } else {
        trimmed.to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = RouteTable::default();
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("/"), Some(Page::Home));
        assert_eq!(table.resolve("/weather"), Some(Page::Weather));
    }

    #[test]
    fn test_unmatched_paths() {
        let table = RouteTable::default();
        assert_eq!(table.resolve("/other"), None);
        assert_eq!(table.resolve("/weather/london"), None);
        assert_eq!(table.resolve("weather"), None);
    }

    #[test]
    fn test_normalization() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//"), "/");
        assert_eq!(normalize_path("/weather/"), "/weather");
        assert_eq!(normalize_path("/Weather?city=Paris"), "/weather");
        assert_eq!(normalize_path("/#top"), "/");
    }

    #[test]
    fn test_resolve_ignores_query_and_case() {
        let table = RouteTable::default();
        assert_eq!(table.resolve(""), Some(Page::Home));
        assert_eq!(table.resolve("/?ref=nav"), Some(Page::Home));
        assert_eq!(table.resolve("/WEATHER/"), Some(Page::Weather));
        assert_eq!(table.resolve("/weather#now"), Some(Page::Weather));
    }

    #[test]
    fn test_duplicate_route_rejected() {
        let result = RouteTable::new([
            RouteEntry::new("/weather", Page::Weather),
            RouteEntry::new("/Weather/", Page::Home),
        ]);
        assert_eq!(result.unwrap_err(), ShellError::DuplicateRoute("/weather".into()));
    }

    #[test]
    fn test_relative_pattern_rejected() {
        let result = RouteTable::new([RouteEntry::new("weather", Page::Weather)]);
        assert!(matches!(result, Err(ShellError::InvalidPath(_))));
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new([
            RouteEntry::new("/", Page::Weather),
            RouteEntry::new("/home", Page::Home),
        ])
        .unwrap();
        assert_eq!(table.resolve("/"), Some(Page::Weather));
        assert_eq!(table.resolve("/home"), Some(Page::Home));
    }
}
