//! Error types and handling for Waypoint Core
//!
//! Route resolution itself never fails: unmatched paths fall back to a
//! redirect. Errors only surface while a route table or site configuration
//! is being built, and when navigating by a route name that does not exist.

use thiserror::Error;

/// Result type alias for Waypoint operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Waypoint Core
#[derive(Error, Debug)]
pub enum Error {
    /// Route table construction errors
    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Navigation errors
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while validating a route table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Route table is empty")]
    Empty,

    #[error("Duplicate route path: {path}")]
    DuplicatePath { path: String },

    #[error("Duplicate route name: {name}")]
    DuplicateName { name: String },

    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Redirect from '{from}' targets '{to}', which is not a literal path")]
    InvalidRedirect { from: String, to: String },

    #[error("Redirect chain starting at '{from}' never reaches a view")]
    RedirectLoop { from: String },

    #[error("Root path '/' does not resolve to a view")]
    MissingRoot,
}

/// Configuration-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("Route '{path}' must set exactly one of 'component' or 'redirect'")]
    AmbiguousTarget { path: String },
}

/// Errors raised by explicit navigation requests
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No route named '{name}'")]
    UnknownRouteName { name: String },
}
