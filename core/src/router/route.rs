//! Route definitions
//!
//! A route maps a path pattern either to an external view component or to a
//! redirect target. The target is a tagged variant, so a route can never
//! carry both or neither.

use super::pattern::RoutePattern;
use crate::error::RouteError;
use std::fmt;

/// Identifier of an external view component (e.g. `SignupForm`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewId(pub String);

impl ViewId {
    /// Create a new view ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ViewId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a matched route leads to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Render the given view component
    View(ViewId),
    /// Navigate on to another logical path
    Redirect(String),
}

/// Route definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Path pattern this route answers to
    pub pattern: RoutePattern,
    /// Optional unique name, used for navigation by name
    pub name: Option<String>,
    /// View or redirect target
    pub target: RouteTarget,
}

impl Route {
    /// Create a route that renders a view
    pub fn view(pattern: &str, view: impl Into<ViewId>) -> Result<Self, RouteError> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            name: None,
            target: RouteTarget::View(view.into()),
        })
    }

    /// Create a route that redirects to another path
    pub fn redirect(pattern: &str, to: impl Into<String>) -> Result<Self, RouteError> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            name: None,
            target: RouteTarget::Redirect(to.into()),
        })
    }

    /// Set the name for this route
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The view this route renders, if it is a view route
    pub fn view_id(&self) -> Option<&ViewId> {
        match &self.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect(_) => None,
        }
    }

    /// The redirect target, if it is a redirect route
    pub fn redirect_target(&self) -> Option<&str> {
        match &self.target {
            RouteTarget::View(_) => None,
            RouteTarget::Redirect(to) => Some(to.as_str()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)?;
        if let Some(name) = &self.name {
            write!(f, " ({name})")?;
        }
        match &self.target {
            RouteTarget::View(view) => write!(f, " -> {view}"),
            RouteTarget::Redirect(to) => write!(f, " -> redirect {to}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_route() {
        let route = Route::view("/admin", "AdminDashboard").unwrap().named("Admin");
        assert_eq!(route.view_id(), Some(&ViewId::new("AdminDashboard")));
        assert_eq!(route.redirect_target(), None);
        assert_eq!(route.to_string(), "/admin (Admin) -> AdminDashboard");
    }

    #[test]
    fn test_redirect_route() {
        let route = Route::redirect("/:pathMatch(.*)*", "/").unwrap();
        assert!(route.pattern.is_catch_all());
        assert_eq!(route.view_id(), None);
        assert_eq!(route.redirect_target(), Some("/"));
        assert_eq!(route.to_string(), "/* -> redirect /");
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        assert!(Route::view("/users/:id", "User").is_err());
    }
}
