//! Route table listing command

use crate::config::CliConfigLoader;
use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;
use waypoint_core::Router;

/// List the route table in registration order
pub fn routes_command(loader: &CliConfigLoader, router: &Router, json: bool) -> Result<()> {
    info!("Listing routes");

    let config = router.config();
    if json {
        let effective = json!({
            "profile": loader.profile(),
            "base": config.base.directory(),
            "site": loader.load_site()?,
        });
        let rendered =
            serde_json::to_string_pretty(&effective).context("Failed to serialize site config")?;
        println!("{rendered}");
        return Ok(());
    }

    println!(
        "mode: {}  base: {}  profile: {}",
        config.history_mode,
        config.base,
        loader.profile()
    );
    for (index, route) in config.table.iter().enumerate() {
        println!("{:>3}. {}", index + 1, route);
    }

    Ok(())
}
