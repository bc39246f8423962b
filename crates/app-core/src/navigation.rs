//! Navigation History
//!
//! Owns the current path and the stack of visited paths. Every transition
//! yields the single view the shell shows afterwards.

use crate::error::{Result, ShellError};
use crate::route::RouteTable;
use crate::shell::{render, RoutedView, ShellView};

/// Explicit navigation context for the shell
#[derive(Clone, Debug)]
pub struct Navigator {
    table: RouteTable,
    history: Vec<String>,
    position: usize,
}

impl Navigator {
    /// Start a session at `initial_path` with the default route table.
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self::with_table(RouteTable::default(), initial_path)
    }

    /// Start a session with a custom route table.
    ///
    /// The initial path is whatever the client loaded with, so it is not
    /// validated; an unusable one simply renders Not Found.
    pub fn with_table(table: RouteTable, initial_path: impl Into<String>) -> Self {
        let initial_path = initial_path.into();
        tracing::debug!(path = %initial_path, "navigation session started");
        Self {
            table,
            history: vec![initial_path],
            position: 0,
        }
    }

    /// Current path
    pub fn current(&self) -> &str {
        &self.history[self.position]
    }

    /// Shell output for the current path
    pub fn view(&self) -> ShellView {
        render(self.current(), &self.table)
    }

    pub const fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn can_go_back(&self) -> bool {
        self.position > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.position + 1 < self.history.len()
    }

    /// Navigate to `path`, discarding any forward entries.
    pub fn push(&mut self, path: impl Into<String>) -> Result<RoutedView> {
        let path = validate(path.into())?;
        self.history.truncate(self.position + 1);
        self.history.push(path);
        self.position += 1;
        Ok(self.transitioned("push"))
    }

    /// Replace the current entry with `path`.
    pub fn replace(&mut self, path: impl Into<String>) -> Result<RoutedView> {
        let path = validate(path.into())?;
        self.history[self.position] = path;
        Ok(self.transitioned("replace"))
    }

    pub fn back(&mut self) -> Result<RoutedView> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Result<RoutedView> {
        self.go(1)
    }

    /// Move `delta` entries through history. Out-of-range moves leave the
    /// current path unchanged.
    pub fn go(&mut self, delta: isize) -> Result<RoutedView> {
        let target = self
            .position
            .checked_add_signed(delta)
            .filter(|target| *target < self.history.len())
            .ok_or(ShellError::HistoryBoundary {
                offset: delta,
                position: self.position,
                len: self.history.len(),
            })?;
        self.position = target;
        Ok(self.transitioned("go"))
    }

    fn transitioned(&self, kind: &'static str) -> RoutedView {
        let view = self.view().routed;
        tracing::debug!(
            kind,
            path = %self.current(),
            position = self.position,
            ?view,
            "navigated"
        );
        view
    }
}

fn validate(path: String) -> Result<String> {
    if path.starts_with('/') {
        Ok(path)
    } else {
        Err(ShellError::InvalidPath(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Page;
    use crate::shell::FOOTER_TEXT;

    #[test]
    fn test_initial_view() {
        let nav = Navigator::new("/weather");
        assert_eq!(nav.current(), "/weather");
        assert!(nav.view().routed.is_page(Page::Weather));
        assert!(!nav.can_go_back());
        assert!(!nav.can_go_forward());
    }

    #[test]
    fn test_round_trip_via_push() {
        let mut nav = Navigator::new("/");
        let original = nav.view();

        assert!(nav.push("/weather").unwrap().is_page(Page::Weather));
        assert!(nav.push("/").unwrap().is_page(Page::Home));

        assert_eq!(nav.view(), original);
        assert_eq!(nav.history().len(), 3);
    }

    #[test]
    fn test_round_trip_via_back() {
        let mut nav = Navigator::new("/");
        nav.push("/weather").unwrap();

        let view = nav.back().unwrap();
        assert_eq!(view, RoutedView::page(Page::Home));
        assert_eq!(nav.current(), "/");

        let view = nav.forward().unwrap();
        assert_eq!(view, RoutedView::page(Page::Weather));
    }

    #[test]
    fn test_exactly_one_view_per_transition() {
        let mut nav = Navigator::new("/");
        for path in ["/weather", "/", "/other", "/weather"] {
            let view = nav.push(path).unwrap();
            let shown = [Page::Home, Page::Weather]
                .into_iter()
                .filter(|p| view.is_page(*p))
                .count();
            assert!(shown + usize::from(view.is_not_found()) == 1);
            assert_eq!(nav.view().footer, FOOTER_TEXT);
        }
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut nav = Navigator::new("/");
        nav.push("/weather").unwrap();
        nav.back().unwrap();
        nav.push("/other").unwrap();

        assert_eq!(nav.history(), ["/", "/other"]);
        assert!(!nav.can_go_forward());
    }

    #[test]
    fn test_replace() {
        let mut nav = Navigator::new("/other");
        assert!(nav.view().routed.is_not_found());

        assert!(nav.replace("/").unwrap().is_page(Page::Home));
        assert_eq!(nav.history(), ["/"]);
    }

    #[test]
    fn test_history_boundaries() {
        let mut nav = Navigator::new("/");
        nav.push("/weather").unwrap();

        assert!(matches!(
            nav.forward(),
            Err(ShellError::HistoryBoundary { offset: 1, .. })
        ));
        assert_eq!(nav.current(), "/weather");

        assert!(matches!(
            nav.go(-2),
            Err(ShellError::HistoryBoundary { offset: -2, .. })
        ));
        assert_eq!(nav.current(), "/weather");

        nav.go(-1).unwrap();
        assert!(nav.back().is_err());
        assert_eq!(nav.current(), "/");
    }

    #[test]
    fn test_invalid_path_rejected() {
        let mut nav = Navigator::new("/");
        assert_eq!(
            nav.push("weather").unwrap_err(),
            ShellError::InvalidPath("weather".into())
        );
        assert_eq!(nav.current(), "/");
        assert_eq!(nav.history().len(), 1);
    }
}
