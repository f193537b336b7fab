//! CLI command implementations

pub mod href;
pub mod resolve;
pub mod routes;
pub mod walk;

pub use href::href_command;
pub use resolve::resolve_command;
pub use routes::routes_command;
pub use walk::walk_command;
