//! Minimal configuration module for waypoint core
//!
//! Only exports pure data types. All loading logic is in CLI layer.

pub mod types;

pub use types::{BuildProfile, RouteSpec, SiteConfig, DEFAULT_PUBLIC_PATH};
