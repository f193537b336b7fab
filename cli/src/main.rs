//! # waypoint CLI
//!
//! Command-line interface for waypoint - route resolution and scroll
//! restoration for a statically hosted single-page site.
//!
//! ## Usage
//!
//! - `waypoint resolve /admin /unknown/x` - Resolve paths against the route table
//! - `waypoint href /admin` - Print URLs for the configured history mode and base path
//! - `waypoint routes` - List the route table
//! - `waypoint walk scroll:400 push:/admin back` - Simulate a navigation session

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use waypoint_core::{BuildProfile, HistoryMode, Router};

mod commands;
mod config;

use commands::{href_command, resolve_command, routes_command, walk_command};
use config::CliConfigLoader;

/// waypoint - resolve routes and simulate navigation for a single-page site
#[derive(Parser)]
#[command(name = "waypoint")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Route resolution and scroll restoration for a single-page site")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// History mode (hash, native)
    #[arg(long, global = true)]
    mode: Option<HistoryMode>,

    /// Base path override, e.g. /my-site/
    #[arg(long, global = true)]
    base: Option<String>,

    /// Build profile selecting the base path (development, production)
    #[arg(long, global = true, env = "WAYPOINT_ENV")]
    profile: Option<BuildProfile>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve paths against the route table
    Resolve {
        /// Logical paths to resolve
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print the URL of each logical path
    Href {
        /// Logical paths to encode
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// List the route table
    Routes {
        /// Print the profile, effective base path and site configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate a navigation session
    Walk {
        /// Steps: push:<path>, replace:<path>, name:<route>, scroll:<top>, back, forward, go:<n>
        #[arg(required = true, allow_hyphen_values = true)]
        steps: Vec<String>,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(mode) = cli.mode {
        loader = loader.with_mode_override(mode);
    }

    if let Some(base) = &cli.base {
        loader = loader.with_base_override(base.clone());
    }

    if let Some(profile) = cli.profile {
        loader = loader.with_profile(profile);
    }

    loader
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG takes precedence over --verbose
    if std::env::var_os("RUST_LOG").is_some() {
        waypoint_core::init_tracing();
    } else {
        waypoint_core::init_tracing_with_debug(cli.verbose);
    }

    // Build configuration loader
    let config_loader = build_config_loader(&cli);
    let router = Router::new(config_loader.load()?);

    match cli.command {
        Commands::Resolve { paths } => resolve_command(&router, &paths),
        Commands::Href { paths } => href_command(&router, &paths),
        Commands::Routes { json } => routes_command(&config_loader, &router, json),
        Commands::Walk { steps } => walk_command(router, &steps),
    }
}
