//! Router: the navigation context
//!
//! A `Router` is constructed explicitly from a [`RouterConfig`] and passed to
//! whoever needs to navigate. It owns the navigation state and is the only
//! thing that mutates it.

use super::history::{BasePath, HistoryMode};
use super::route::ViewId;
use super::scroll::{NavigationPoint, RestoreOrTop, ScrollBehavior, ScrollPosition};
use super::state::{HistoryEntry, NavigationState, DEFAULT_MAX_HISTORY};
use super::table::{Resolution, RouteTable, ROOT_PATH};
use crate::error::{NavigationError, Result};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Configuration for the router
#[derive(Clone)]
pub struct RouterConfig {
    /// Ordered route definitions
    pub table: RouteTable,
    /// How logical paths are written into URLs
    pub history_mode: HistoryMode,
    /// URL prefix the app is mounted under
    pub base: BasePath,
    /// Maximum number of history entries
    pub max_history: usize,
    /// Decides where each navigation scrolls to
    pub scroll_behavior: Arc<dyn ScrollBehavior>,
}

impl RouterConfig {
    /// Create a new router configuration
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            history_mode: HistoryMode::default(),
            base: BasePath::root(),
            max_history: DEFAULT_MAX_HISTORY,
            scroll_behavior: Arc::new(RestoreOrTop),
        }
    }

    /// Set the history mode
    pub fn with_history_mode(mut self, mode: HistoryMode) -> Self {
        self.history_mode = mode;
        self
    }

    /// Set the base path
    pub fn with_base(mut self, base: BasePath) -> Self {
        self.base = base;
        self
    }

    /// Set maximum history size
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    /// Replace the scroll behavior
    pub fn with_scroll_behavior(mut self, behavior: impl ScrollBehavior + 'static) -> Self {
        self.scroll_behavior = Arc::new(behavior);
        self
    }
}

impl fmt::Debug for RouterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterConfig")
            .field("table", &self.table)
            .field("history_mode", &self.history_mode)
            .field("base", &self.base)
            .field("max_history", &self.max_history)
            .finish_non_exhaustive()
    }
}

/// How a navigation moved through history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Push,
    Replace,
    /// Back/forward by the given number of entries
    Traverse(isize),
}

/// Outcome of a completed navigation
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub kind: NavigationKind,
    /// Entry that was current before the navigation
    pub from: HistoryEntry,
    /// Entry that is current now
    pub to: HistoryEntry,
    /// View to render for `to`
    pub view: ViewId,
    /// Requested path, when a redirect led somewhere else
    pub redirected_from: Option<String>,
    /// Where the page should scroll to
    pub scroll: ScrollPosition,
    /// The navigation targeted the path that was already current
    pub duplicate: bool,
}

/// Main router struct that manages navigation state and configuration
#[derive(Debug, Clone)]
pub struct Router {
    /// Router configuration
    config: RouterConfig,
    /// Current navigation state
    state: NavigationState,
}

impl Router {
    /// Create a new router, starting at the root path
    pub fn new(config: RouterConfig) -> Self {
        let initial = config.table.resolve_final(ROOT_PATH);
        let state = NavigationState::new(
            initial.path.clone(),
            initial.route.name.clone(),
            config.max_history,
        );
        Self { config, state }
    }

    /// Start at the location the app was loaded from instead of the root
    pub fn with_initial_location(mut self, location: &str) -> Self {
        let path = self.path_from_location(location);
        let resolved = self.config.table.resolve_final(&path);
        let (path, name) = (resolved.path.clone(), resolved.route.name.clone());
        self.state.replace(path, name);
        self
    }

    /// Get the router configuration
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Get the current navigation state
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Match a logical path against the route table
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        self.config.table.resolve(path)
    }

    /// URL for a logical path under the configured mode and base
    pub fn href(&self, path: &str) -> String {
        self.config.history_mode.href(&self.config.base, path)
    }

    /// Logical path encoded in a URL or absolute path
    pub fn path_from_location(&self, location: &str) -> String {
        self.config
            .history_mode
            .logical_path(&self.config.base, location)
    }

    /// Literal path of a named route
    pub fn path_for(&self, name: &str) -> Option<&str> {
        self.config.table.path_for(name)
    }

    /// Navigate to a logical path, adding a history entry
    pub fn push(&mut self, path: &str) -> Navigation {
        self.commit(path, NavigationKind::Push)
    }

    /// Navigate to a logical path, overwriting the current entry
    pub fn replace(&mut self, path: &str) -> Navigation {
        self.commit(path, NavigationKind::Replace)
    }

    /// Navigate to the location encoded in a URL (deep links)
    pub fn push_location(&mut self, location: &str) -> Navigation {
        let path = self.path_from_location(location);
        self.push(&path)
    }

    /// Navigate to a route by name
    pub fn push_named(&mut self, name: &str) -> Result<Navigation> {
        let path = self
            .path_for(name)
            .map(str::to_string)
            .ok_or_else(|| NavigationError::UnknownRouteName {
                name: name.to_string(),
            })?;
        Ok(self.push(&path))
    }

    /// Move through history by `delta` entries
    pub fn go(&mut self, delta: isize) -> Option<Navigation> {
        let from = self.state.current().clone();
        let to = self.state.go(delta)?.clone();
        let view = self.config.table.resolve_final(&to.path).view.clone();
        let scroll = self.scroll_target(&to, &from);

        debug!(from = %from.path, to = %to.path, delta, scroll = %scroll, "Traversed history");
        Some(Navigation {
            kind: NavigationKind::Traverse(delta),
            from,
            to,
            view,
            redirected_from: None,
            scroll,
            duplicate: false,
        })
    }

    /// Go back to the previous entry
    pub fn back(&mut self) -> Option<Navigation> {
        self.go(-1)
    }

    /// Go forward to the next entry
    pub fn forward(&mut self) -> Option<Navigation> {
        self.go(1)
    }

    /// Record the scroll offset of the current entry, restored when the
    /// entry is entered again
    pub fn save_scroll(&mut self, position: ScrollPosition) {
        self.state.save_scroll(position);
    }

    /// Get the current entry
    pub fn current(&self) -> &HistoryEntry {
        self.state.current()
    }

    /// View for the current entry
    pub fn current_view(&self) -> &ViewId {
        self.config.table.resolve_final(&self.state.current().path).view
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    /// Check if we can go forward
    pub fn can_go_forward(&self) -> bool {
        self.state.can_go_forward()
    }

    fn commit(&mut self, path: &str, kind: NavigationKind) -> Navigation {
        let resolved = self.config.table.resolve_final(path);
        let view = resolved.view.clone();
        let redirected_from = resolved.redirected_from.clone();
        let target = resolved.path.clone();
        let name = resolved.route.name.clone();

        let from = self.state.current().clone();
        let duplicate = from.path.to_lowercase() == target.to_lowercase();
        let to = match kind {
            NavigationKind::Replace => self.state.replace(target, name).clone(),
            _ => self.state.push(target, name).clone(),
        };
        let scroll = self.scroll_target(&to, &from);

        debug!(
            from = %from.path,
            to = %to.path,
            view = %view,
            ?kind,
            redirected_from = redirected_from.as_deref(),
            scroll = %scroll,
            "Navigated"
        );
        Navigation {
            kind,
            from,
            to,
            view,
            redirected_from,
            scroll,
            duplicate,
        }
    }

    fn scroll_target(&self, to: &HistoryEntry, from: &HistoryEntry) -> ScrollPosition {
        self.config.scroll_behavior.scroll_target(
            NavigationPoint {
                path: &to.path,
                name: to.name.as_deref(),
            },
            Some(NavigationPoint {
                path: &from.path,
                name: from.name.as_deref(),
            }),
            to.saved_scroll,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::route::Route;

    fn site_table() -> RouteTable {
        RouteTable::new(vec![
            Route::view("/", "SignupForm").unwrap().named("Home"),
            Route::view("/admin", "AdminDashboard").unwrap().named("Admin"),
            Route::redirect("/:pathMatch(.*)*", "/").unwrap(),
        ])
        .unwrap()
    }

    fn pages_router(mode: HistoryMode) -> Router {
        Router::new(
            RouterConfig::new(site_table())
                .with_history_mode(mode)
                .with_base(BasePath::parse("/wish-you-were-here-v4/").unwrap()),
        )
    }

    #[test]
    fn test_router_starts_at_root() {
        let router = pages_router(HistoryMode::Fragment);
        assert_eq!(router.current().path, "/");
        assert_eq!(router.current().name.as_deref(), Some("Home"));
        assert_eq!(router.current_view(), &ViewId::new("SignupForm"));
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_scroll_scenario() {
        let mut router = pages_router(HistoryMode::Fragment);
        router.save_scroll(ScrollPosition::vertical(400.0));

        let to_admin = router.push("/admin");
        assert_eq!(to_admin.view, ViewId::new("AdminDashboard"));
        assert_eq!(to_admin.scroll, ScrollPosition::TOP);

        let back = router.back().unwrap();
        assert_eq!(back.view, ViewId::new("SignupForm"));
        assert_eq!(back.scroll, ScrollPosition::vertical(400.0));

        let forward = router.forward().unwrap();
        assert_eq!(forward.to.path, "/admin");
        assert_eq!(forward.scroll, ScrollPosition::TOP);
    }

    #[test]
    fn test_each_entry_keeps_its_own_scroll() {
        let mut router = pages_router(HistoryMode::Native);
        router.save_scroll(ScrollPosition::vertical(120.0));
        router.push("/admin");
        router.save_scroll(ScrollPosition::new(4.0, 980.0));
        router.back();

        let forward = router.forward().unwrap();
        assert_eq!(forward.scroll, ScrollPosition::new(4.0, 980.0));
        let back = router.go(-1).unwrap();
        assert_eq!(back.scroll, ScrollPosition::vertical(120.0));
    }

    #[test]
    fn test_unknown_path_redirects_to_home() {
        let mut router = pages_router(HistoryMode::Fragment);
        router.push("/admin");
        let nav = router.push("/unknown/x");
        assert_eq!(nav.view, ViewId::new("SignupForm"));
        assert_eq!(nav.to.path, "/");
        assert_eq!(nav.redirected_from.as_deref(), Some("/unknown/x"));
        assert_eq!(nav.scroll, ScrollPosition::TOP);
        assert_eq!(router.state().entries().len(), 3);
    }

    #[test]
    fn test_replace_and_duplicate() {
        let mut router = pages_router(HistoryMode::Fragment);
        let same = router.push("/");
        assert!(same.duplicate);

        let replaced = router.replace("/admin");
        assert_eq!(replaced.kind, NavigationKind::Replace);
        assert!(!replaced.duplicate);
        assert_eq!(router.state().entries().len(), 2);
        assert_eq!(router.current().path, "/admin");
    }

    #[test]
    fn test_traversal_past_the_ends_changes_nothing() {
        let mut router = pages_router(HistoryMode::Fragment);
        assert!(router.back().is_none());
        assert!(router.forward().is_none());
        assert!(router.go(5).is_none());
        assert_eq!(router.current().path, "/");
    }

    #[test]
    fn test_push_named() {
        let mut router = pages_router(HistoryMode::Fragment);
        let nav = router.push_named("Admin").unwrap();
        assert_eq!(nav.to.path, "/admin");
        assert!(router.push_named("Settings").is_err());
        assert_eq!(router.current().path, "/admin");
    }

    #[test]
    fn test_history_mode_does_not_change_resolution() {
        let native = pages_router(HistoryMode::Native);
        let fragment = pages_router(HistoryMode::Fragment);
        let paths = ["/", "/admin", "/ADMIN/", "/unknown/x", "", "/admin/deeper"];
        for path in paths {
            assert_eq!(native.resolve(path), fragment.resolve(path), "path {path:?}");
        }
    }

    #[test]
    fn test_deep_links_in_both_modes() {
        let mut native = pages_router(HistoryMode::Native);
        let nav = native.push_location("https://user.github.io/wish-you-were-here-v4/admin");
        assert_eq!(nav.view, ViewId::new("AdminDashboard"));
        assert_eq!(native.href("/admin"), "/wish-you-were-here-v4/admin");

        let mut fragment = pages_router(HistoryMode::Fragment);
        let nav = fragment.push_location("https://user.github.io/wish-you-were-here-v4/#/admin");
        assert_eq!(nav.view, ViewId::new("AdminDashboard"));
        assert_eq!(fragment.href("/admin"), "/wish-you-were-here-v4/#/admin");
    }

    #[test]
    fn test_deep_links_with_urls_in_query() {
        let mut native = pages_router(HistoryMode::Native);
        let nav = native.push_location("/wish-you-were-here-v4/admin?next=https://example.com/x");
        assert_eq!(nav.to.path, "/admin");
        assert_eq!(nav.view, ViewId::new("AdminDashboard"));

        let mut fragment = pages_router(HistoryMode::Fragment);
        let nav = fragment.push_location("/wish-you-were-here-v4/#/admin?next=https://evil/home");
        assert_eq!(nav.to.path, "/admin");
        assert!(nav.redirected_from.is_none());
    }

    #[test]
    fn test_initial_location() {
        let router = pages_router(HistoryMode::Fragment)
            .with_initial_location("/wish-you-were-here-v4/#/admin");
        assert_eq!(router.current().path, "/admin");
        assert_eq!(router.state().entries().len(), 1);
    }

    #[test]
    fn test_custom_scroll_behavior() {
        struct AlwaysTop;
        impl ScrollBehavior for AlwaysTop {
            fn scroll_target(
                &self,
                _to: NavigationPoint<'_>,
                _from: Option<NavigationPoint<'_>>,
                _saved: Option<ScrollPosition>,
            ) -> ScrollPosition {
                ScrollPosition::TOP
            }
        }

        let mut router =
            Router::new(RouterConfig::new(site_table()).with_scroll_behavior(AlwaysTop));
        router.save_scroll(ScrollPosition::vertical(400.0));
        router.push("/admin");
        assert_eq!(router.back().unwrap().scroll, ScrollPosition::TOP);
    }
}
