//! Ordered route table and path resolution
//!
//! The table is validated once at construction. After that, resolution is a
//! total function: every input string resolves to a view or to a redirect,
//! and following redirects always ends at a view.

use super::pattern::{normalize_path, RoutePattern};
use super::route::{Route, RouteTarget, ViewId};
use crate::error::RouteError;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

/// Path every unmatched request is redirected to
pub const ROOT_PATH: &str = "/";

/// Result of matching one path against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The path is served by a view route
    View {
        route: &'a Route,
        view: &'a ViewId,
        path: String,
    },
    /// The path redirects elsewhere. `route` is `None` for the built-in
    /// fallback applied to unmatched paths.
    Redirect {
        route: Option<&'a Route>,
        from: String,
        to: String,
    },
}

impl<'a> Resolution<'a> {
    /// The view to render, if this resolution is a view
    pub fn view_id(&self) -> Option<&'a ViewId> {
        match self {
            Self::View { view, .. } => Some(*view),
            Self::Redirect { .. } => None,
        }
    }

    /// The matched route, if any
    pub fn route(&self) -> Option<&'a Route> {
        match self {
            Self::View { route, .. } => Some(*route),
            Self::Redirect { route, .. } => *route,
        }
    }

    /// The redirect target, if this resolution is a redirect
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::View { .. } => None,
            Self::Redirect { to, .. } => Some(to.as_str()),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }
}

impl fmt::Display for Resolution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View { view, .. } => write!(f, "View({view})"),
            Self::Redirect { to, .. } => write!(f, "redirect {to}"),
        }
    }
}

/// A path resolved all the way to a view, redirects followed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedView<'a> {
    /// The view route that finally matched
    pub route: &'a Route,
    /// View rendered for the path
    pub view: &'a ViewId,
    /// Normalized logical path of the view
    pub path: String,
    /// Normalized requested path, when it differs because of a redirect
    pub redirected_from: Option<String>,
}

/// Ordered, validated list of routes
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    /// Index of the view route that serves the root path
    root: usize,
}

impl RouteTable {
    /// Build a route table, validating paths, names and redirect chains
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        if routes.is_empty() {
            return Err(RouteError::Empty);
        }

        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        let mut routes = routes;
        for route in &mut routes {
            if !paths.insert(route.pattern.identity()) {
                return Err(RouteError::DuplicatePath {
                    path: route.pattern.to_string(),
                });
            }
            if let Some(name) = &route.name {
                if !names.insert(name.clone()) {
                    return Err(RouteError::DuplicateName { name: name.clone() });
                }
            }
            if let RouteTarget::Redirect(to) = &mut route.target {
                match RoutePattern::parse(to) {
                    Ok(RoutePattern::Literal(target)) => *to = target,
                    _ => {
                        return Err(RouteError::InvalidRedirect {
                            from: route.pattern.to_string(),
                            to: to.clone(),
                        })
                    }
                }
            }
        }

        // Placeholder root; replaced once the chain from "/" is known.
        let mut table = Self { routes, root: 0 };

        for route in &table.routes {
            if let RouteTarget::Redirect(to) = &route.target {
                if table.follow(to).is_none() {
                    return Err(RouteError::RedirectLoop {
                        from: route.pattern.to_string(),
                    });
                }
            }
        }

        table.root = table
            .follow(ROOT_PATH)
            .and_then(|resolved| table.position(resolved.route))
            .ok_or(RouteError::MissingRoot)?;

        Ok(table)
    }

    /// Match a path against the table.
    ///
    /// Literal routes take precedence over catch-alls; among catch-alls the
    /// deepest prefix wins and ties go to the earlier registration. Paths
    /// nothing matches resolve to a redirect to `/`.
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        let normalized = normalize_path(path);

        let route = self.match_literal(&normalized).or_else(|| self.match_catch_all(&normalized));

        let resolution = match route {
            Some(route) => match &route.target {
                RouteTarget::View(view) => Resolution::View {
                    route,
                    view,
                    path: normalized,
                },
                RouteTarget::Redirect(to) => Resolution::Redirect {
                    route: Some(route),
                    from: normalized,
                    to: to.clone(),
                },
            },
            None => {
                warn!(path = %normalized, "No route matched, redirecting to root");
                Resolution::Redirect {
                    route: None,
                    from: normalized,
                    to: ROOT_PATH.to_string(),
                }
            }
        };

        debug!(path, resolution = %resolution, "Resolved path");
        resolution
    }

    /// Resolve a path and follow redirects until a view is reached
    pub fn resolve_final(&self, path: &str) -> ResolvedView<'_> {
        self.follow(path).unwrap_or_else(|| self.root_view(normalize_path(path)))
    }

    /// Look up a route by name
    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.name.as_deref() == Some(name))
    }

    /// Literal path of a named route. Catch-all routes have no single path.
    pub fn path_for(&self, name: &str) -> Option<&str> {
        self.by_name(name).and_then(|route| route.pattern.literal())
    }

    /// Iterate routes in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn match_literal(&self, normalized: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| !route.pattern.is_catch_all() && route.pattern.matches(normalized))
    }

    fn match_catch_all(&self, normalized: &str) -> Option<&Route> {
        let mut best: Option<&Route> = None;
        for route in &self.routes {
            if !route.pattern.is_catch_all() || !route.pattern.matches(normalized) {
                continue;
            }
            match best {
                Some(current) if route.pattern.depth() <= current.pattern.depth() => {}
                _ => best = Some(route),
            }
        }
        best
    }

    /// Follow redirects from `path`; `None` if the chain cycles
    fn follow(&self, path: &str) -> Option<ResolvedView<'_>> {
        let requested = normalize_path(path);
        let mut visited = HashSet::new();
        let mut current = requested.clone();

        loop {
            match self.resolve(&current) {
                Resolution::View { route, view, path } => {
                    let redirected_from = (path != requested).then_some(requested);
                    return Some(ResolvedView {
                        route,
                        view,
                        path,
                        redirected_from,
                    });
                }
                Resolution::Redirect { from, to, .. } => {
                    if !visited.insert(from.to_lowercase()) {
                        return None;
                    }
                    current = to;
                }
            }
        }
    }

    fn root_view(&self, requested: String) -> ResolvedView<'_> {
        let route = &self.routes[self.root];
        let view = match &route.target {
            RouteTarget::View(view) => view,
            // `root` is only ever set to a route reached through `follow`
            RouteTarget::Redirect(_) => unreachable!(),
        };
        ResolvedView {
            route,
            view,
            path: route.pattern.literal().unwrap_or(ROOT_PATH).to_string(),
            redirected_from: Some(requested),
        }
    }

    fn position(&self, route: &Route) -> Option<usize> {
        self.routes.iter().position(|candidate| std::ptr::eq(candidate, route))
    }
}
