//! History modes and base-path handling
//!
//! Resolution only ever sees logical paths. The history mode and base path
//! decide how a logical path is written into a URL and how it is read back.

use super::pattern::normalize_path;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// How navigation state is represented in the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HistoryMode {
    /// Native browser history: `/base/admin`. Deep links need the server to
    /// fall back to the app entry point.
    #[serde(rename = "native", alias = "history", alias = "web")]
    Native,
    /// Fragment-based: `/base/#/admin`. Works on any static host.
    #[default]
    #[serde(rename = "hash", alias = "fragment")]
    Fragment,
}

impl HistoryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryMode::Native => "native",
            HistoryMode::Fragment => "hash",
        }
    }

    /// Whether arbitrary deep links require server-side fallback routing
    pub fn requires_server_fallback(&self) -> bool {
        matches!(self, HistoryMode::Native)
    }

    /// Build the URL for a logical path
    pub fn href(&self, base: &BasePath, path: &str) -> String {
        let path = normalize_path(path);
        match self {
            HistoryMode::Native => base.join(&path),
            HistoryMode::Fragment => format!("{}#{}", base.directory(), path),
        }
    }

    /// Extract the logical path from a location.
    ///
    /// `location` may be a full URL (`https://host/base/#/admin`) or an
    /// absolute path. Locations outside the base path map to `/`.
    pub fn logical_path(&self, base: &BasePath, location: &str) -> String {
        let Some(url) = parse_location(location) else {
            return "/".to_string();
        };
        match self {
            HistoryMode::Native => base.strip(url.path()).unwrap_or_else(|| "/".to_string()),
            HistoryMode::Fragment => url.fragment().map_or_else(|| "/".to_string(), normalize_path),
        }
    }
}

/// Origin that relative locations are resolved against
const LOCAL_ORIGIN: &str = "http://localhost/";

/// Parse a location as an absolute URL, or as a path relative to the origin
fn parse_location(location: &str) -> Option<Url> {
    let location = location.trim();
    match Url::parse(location) {
        Ok(url) if !url.cannot_be_a_base() => Some(url),
        _ => Url::parse(LOCAL_ORIGIN)
            .and_then(|origin| origin.join(location))
            .ok(),
    }
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" | "history" | "web" => Ok(HistoryMode::Native),
            "hash" | "fragment" => Ok(HistoryMode::Fragment),
            other => Err(ConfigError::InvalidValue {
                field: "history_mode".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// URL prefix the application is served under.
///
/// Stored without a trailing slash; the root base is `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasePath(String);

impl BasePath {
    /// Base path for an app served from the domain root
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Parse a public path such as `/wish-you-were-here-v4/`
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        if raw.contains(['?', '#', '*']) || raw.contains("://") {
            return Err(ConfigError::InvalidValue {
                field: "public_path".to_string(),
                value: raw.to_string(),
            });
        }
        Ok(Self(normalize_path(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// The base with a trailing slash, as an HTML `<base href>` would read
    pub fn directory(&self) -> String {
        if self.is_root() {
            "/".to_string()
        } else {
            format!("{}/", self.0)
        }
    }

    /// Prefix a normalized logical path with the base
    pub fn join(&self, path: &str) -> String {
        if self.is_root() {
            path.to_string()
        } else if path == "/" {
            self.directory()
        } else {
            format!("{}{}", self.0, path)
        }
    }

    /// Remove the base from a URL path, matching whole segments only.
    /// Returns `None` when the path lies outside the base.
    pub fn strip(&self, url_path: &str) -> Option<String> {
        let normalized = normalize_path(url_path);
        if self.is_root() {
            return Some(normalized);
        }

        let len = self.0.len();
        let within = normalized
            .get(..len)
            .is_some_and(|head| head.eq_ignore_ascii_case(&self.0));
        if !within {
            return None;
        }
        match &normalized[len..] {
            "" => Some("/".to_string()),
            rest if rest.starts_with('/') => Some(rest.to_string()),
            _ => None,
        }
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.directory())
    }
}
