//! Site configuration types for Waypoint core
//!
//! Core only accepts already loaded configuration values.
//! File discovery, loading and flag overrides happen in the CLI layer.

use crate::error::{ConfigError, Result};
use crate::router::{BasePath, HistoryMode, Route, RouteTable, RouterConfig, DEFAULT_MAX_HISTORY};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Public path used for static-hosting (production) builds
pub const DEFAULT_PUBLIC_PATH: &str = "/wish-you-were-here-v4/";

/// Deployment target, selecting the base path the app is served under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildProfile {
    /// Local development server, served from `/`
    #[default]
    Development,
    /// Static hosting under the configured public path
    Production,
}

impl BuildProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildProfile::Development => "development",
            BuildProfile::Production => "production",
        }
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildProfile {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(BuildProfile::Development),
            "production" | "prod" => Ok(BuildProfile::Production),
            other => Err(ConfigError::InvalidValue {
                field: "profile".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// One route as written in a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// Path pattern, e.g. `/admin` or `/:pathMatch(.*)*`
    pub path: String,
    /// Optional route name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// View component to render
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Path to redirect to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl RouteSpec {
    /// A route rendering a view component
    pub fn view(path: &str, name: &str, component: &str) -> Self {
        Self {
            path: path.to_string(),
            name: Some(name.to_string()),
            component: Some(component.to_string()),
            redirect: None,
        }
    }

    /// A redirect route
    pub fn redirect(path: &str, to: &str) -> Self {
        Self {
            path: path.to_string(),
            name: None,
            component: None,
            redirect: Some(to.to_string()),
        }
    }

    /// Convert into a typed route. Exactly one of `component` and
    /// `redirect` must be set.
    pub fn to_route(&self) -> Result<Route> {
        let route = match (&self.component, &self.redirect) {
            (Some(component), None) => Route::view(&self.path, component.as_str())?,
            (None, Some(to)) => Route::redirect(&self.path, to.as_str())?,
            _ => {
                return Err(ConfigError::AmbiguousTarget {
                    path: self.path.clone(),
                }
                .into())
            }
        };
        Ok(match &self.name {
            Some(name) => route.named(name.as_str()),
            None => route,
        })
    }
}

/// Complete site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// History mode
    #[serde(default)]
    pub history_mode: HistoryMode,
    /// Public path used by production builds
    #[serde(default = "default_public_path")]
    pub public_path: String,
    /// Maximum number of history entries
    #[serde(default = "default_max_history")]
    pub max_history: usize,
    /// Ordered route definitions
    #[serde(default = "default_routes")]
    pub routes: Vec<RouteSpec>,
}

fn default_public_path() -> String {
    DEFAULT_PUBLIC_PATH.to_string()
}

fn default_max_history() -> usize {
    DEFAULT_MAX_HISTORY
}

/// Signup form at the root, admin dashboard, everything else back home
fn default_routes() -> Vec<RouteSpec> {
    vec![
        RouteSpec::view("/", "Home", "SignupForm"),
        RouteSpec::view("/admin", "Admin", "AdminDashboard"),
        RouteSpec::redirect("/:pathMatch(.*)*", "/"),
    ]
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            history_mode: HistoryMode::default(),
            public_path: default_public_path(),
            max_history: default_max_history(),
            routes: default_routes(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON site configuration
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Set the history mode
    pub fn with_history_mode(mut self, mode: HistoryMode) -> Self {
        self.history_mode = mode;
        self
    }

    /// Set the public path
    pub fn with_public_path(mut self, public_path: impl Into<String>) -> Self {
        self.public_path = public_path.into();
        self
    }

    /// Base path for the given build profile
    pub fn base_path(&self, profile: BuildProfile) -> Result<BasePath> {
        match profile {
            BuildProfile::Development => Ok(BasePath::root()),
            BuildProfile::Production => Ok(BasePath::parse(&self.public_path)?),
        }
    }

    /// Build and validate the route table
    pub fn route_table(&self) -> Result<RouteTable> {
        let routes = self
            .routes
            .iter()
            .map(RouteSpec::to_route)
            .collect::<Result<Vec<_>>>()?;
        Ok(RouteTable::new(routes)?)
    }

    /// Build a router configuration for the given build profile
    pub fn router_config(&self, profile: BuildProfile) -> Result<RouterConfig> {
        self.validate()?;
        Ok(RouterConfig::new(self.route_table()?)
            .with_history_mode(self.history_mode)
            .with_base(self.base_path(profile)?)
            .with_max_history(self.max_history))
    }

    /// Validate scalar settings
    pub fn validate(&self) -> Result<()> {
        if self.max_history == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_history".to_string(),
                value: "0".to_string(),
            }
            .into());
        }
        BasePath::parse(&self.public_path)?;
        Ok(())
    }
}
