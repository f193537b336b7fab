//! Router module for resolving paths and managing navigation
//!
//! This module maps logical paths to view components, falls back to a
//! redirect for unknown paths, and decides the scroll position of every
//! navigation. History modes and base paths only affect how logical paths
//! are written into URLs.

pub mod history;
pub mod pattern;
pub mod route;
#[allow(clippy::module_inception)]
pub mod router;
pub mod scroll;
pub mod state;
pub mod table;

// Re-export commonly used types
pub use history::{BasePath, HistoryMode};
pub use pattern::{normalize_path, RoutePattern};
pub use route::{Route, RouteTarget, ViewId};
pub use router::{Navigation, NavigationKind, Router, RouterConfig};
pub use scroll::{NavigationPoint, RestoreOrTop, ScrollBehavior, ScrollPosition};
pub use state::{EntryId, HistoryEntry, NavigationState, DEFAULT_MAX_HISTORY};
pub use table::{Resolution, ResolvedView, RouteTable, ROOT_PATH};
