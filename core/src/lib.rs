//! # Waypoint Core
//!
//! Core library for Waypoint - client-side route resolution for a statically
//! hosted single-page site.
//!
//! The library maps logical paths to view components, redirects unknown paths
//! to the root, restores scroll positions on history traversal, and writes
//! logical paths into URLs for either native or fragment-based history,
//! optionally under a base path.

// Core modules
pub mod config;
pub mod error;
pub mod router;

// Re-export commonly used types
pub use config::{BuildProfile, RouteSpec, SiteConfig};
pub use error::{Error, Result};
pub use router::{
    BasePath, HistoryMode, Navigation, Resolution, Route, RouteTable, Router, RouterConfig,
    ScrollBehavior, ScrollPosition, ViewId,
};

/// Current version of the waypoint-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library. Logs go to stderr so command
/// output on stdout stays machine-readable.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
